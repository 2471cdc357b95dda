//! Simulator configuration

use circq_core::validation::{DEFAULT_LARGE_CIRCUIT_THRESHOLD, DEFAULT_MAX_QUBITS};

/// Configuration for the quantum simulator
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Number of measurement shots to sample from the final state
    ///
    /// Default: 1024
    pub shots: usize,

    /// Random number generator seed for reproducibility
    ///
    /// If None, the sampler is seeded from entropy. Set to Some(seed)
    /// for deterministic results.
    ///
    /// Default: None (random)
    pub seed: Option<u64>,

    /// Hard cap on simulable qubit count
    ///
    /// The state vector holds 2^n amplitudes; 24 qubits is already 256
    /// MiB. Circuits above the cap are rejected up front.
    ///
    /// Default: 24
    pub max_qubits: usize,

    /// Gate count threshold for the large-circuit warning
    ///
    /// Default: 100
    pub large_circuit_threshold: usize,

    /// Tolerance for the post-run normalization invariant
    ///
    /// Default: 1e-6
    pub normalization_tolerance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            shots: 1024,
            seed: None,
            max_qubits: DEFAULT_MAX_QUBITS,
            large_circuit_threshold: DEFAULT_LARGE_CIRCUIT_THRESHOLD,
            normalization_tolerance: 1e-6,
        }
    }
}

impl SimulatorConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of measurement shots
    pub fn with_shots(mut self, shots: usize) -> Self {
        self.shots = shots;
        self
    }

    /// Set the random seed for deterministic sampling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the qubit cap
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Set the large-circuit warning threshold
    pub fn with_large_circuit_threshold(mut self, threshold: usize) -> Self {
        self.large_circuit_threshold = threshold;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.shots == 0 {
            return Err("shots must be > 0".to_string());
        }
        if self.max_qubits == 0 {
            return Err("max_qubits must be > 0".to_string());
        }
        if self.normalization_tolerance <= 0.0 {
            return Err(format!(
                "normalization_tolerance must be positive, got {}",
                self.normalization_tolerance
            ));
        }
        Ok(())
    }
}
