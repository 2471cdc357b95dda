//! Core simulator implementation

use circq_core::validation::ValidatorConfig;
use circq_core::{Circuit, CircuitValidator};
use circq_state::{kernels, sample_counts, StateVector};
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{
    config::SimulatorConfig,
    error::SimulatorError,
    result::SimulationResult,
    Result,
};

/// Exact state-vector simulator for quantum circuits
///
/// Replays each gate of a circuit against a fresh |0...0⟩ state and
/// samples measurement outcomes from the final distribution. Validation
/// runs as a defensive precondition before any state is touched, so a
/// circuit with out-of-range qubits fails fast instead of corrupting
/// amplitudes.
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a new simulator with the given configuration
    ///
    /// # Errors
    /// Returns error if the configuration is invalid.
    pub fn new(config: SimulatorConfig) -> Result<Self> {
        config.validate().map_err(SimulatorError::InvalidConfig)?;
        Ok(Self { config })
    }

    /// Create a simulator with the default configuration
    pub fn with_defaults() -> Self {
        Self {
            config: SimulatorConfig::default(),
        }
    }

    /// Get the simulator configuration
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Run a circuit and sample measurement statistics
    ///
    /// Validates the circuit, replays its unitary gates in program order,
    /// checks the normalization invariant, then draws the configured
    /// number of shots from the final distribution. The counts sum to
    /// exactly `config.shots`.
    pub fn run(&self, circuit: &Circuit) -> Result<SimulationResult> {
        let final_state = self.evolve(circuit)?;

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let measurements = sample_counts(&final_state, self.config.shots, &mut rng);

        Ok(SimulationResult::new(final_state, measurements))
    }

    /// Run a circuit and return only the final state
    pub fn run_state(&self, circuit: &Circuit) -> Result<StateVector> {
        self.evolve(circuit)
    }

    /// Replay the circuit against a fresh zero state
    fn evolve(&self, circuit: &Circuit) -> Result<StateVector> {
        let validator_config = ValidatorConfig::new()
            .with_max_qubits(self.config.max_qubits)
            .with_large_circuit_threshold(self.config.large_circuit_threshold);
        let report = CircuitValidator::new(validator_config).validate(circuit);
        if !report.is_valid() {
            return Err(SimulatorError::InvalidCircuit(report.format()));
        }

        if circuit.num_qubits() > self.config.max_qubits {
            return Err(SimulatorError::TooManyQubits {
                num_qubits: circuit.num_qubits(),
                max_qubits: self.config.max_qubits,
            });
        }

        let mut state = StateVector::zero_state(circuit.num_qubits())?;

        for (index, op) in circuit.operations().enumerate() {
            let gate = op.gate();

            // Measurement ops are recorded in the circuit (and serialize
            // to QASM) but statistics come from end-of-run sampling.
            if !gate.is_unitary() {
                continue;
            }

            match op.num_qubits() {
                1 => {
                    let matrix = gate.matrix().ok_or_else(|| SimulatorError::MissingMatrix {
                        gate: gate.name().to_string(),
                        index,
                    })?;
                    let m = [[matrix[0], matrix[1]], [matrix[2], matrix[3]]];
                    kernels::apply_single_qubit_gate(
                        state.amplitudes_mut(),
                        &m,
                        op.qubits()[0].index(),
                    );
                }
                2 => {
                    let matrix = gate.matrix().ok_or_else(|| SimulatorError::MissingMatrix {
                        gate: gate.name().to_string(),
                        index,
                    })?;
                    let mut m = [Complex64::new(0.0, 0.0); 16];
                    m.copy_from_slice(&matrix);
                    // First listed qubit is the high bit (control first)
                    kernels::apply_two_qubit_gate(
                        state.amplitudes_mut(),
                        &m,
                        op.qubits()[0].index(),
                        op.qubits()[1].index(),
                    );
                }
                arity => {
                    return Err(SimulatorError::UnsupportedArity {
                        gate: gate.name().to_string(),
                        arity,
                    });
                }
            }
        }

        let norm = state.norm();
        if (norm - 1.0).abs() > self.config.normalization_tolerance {
            return Err(SimulatorError::NormalizationBroken { norm });
        }

        Ok(state)
    }
}
