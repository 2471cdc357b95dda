//! Error types for the simulator

use circq_state::StateError;
use thiserror::Error;

/// Errors that can occur during simulation
///
/// These are internal/programmer errors: a circuit that fails validation
/// or a state that drifts off the unit sphere indicates a broken
/// invariant, not recoverable user input, so simulation fails fast.
#[derive(Debug, Error)]
pub enum SimulatorError {
    /// Invalid configuration
    #[error("Invalid simulator configuration: {0}")]
    InvalidConfig(String),

    /// Circuit failed its validation precondition
    #[error("Circuit is invalid:\n{0}")]
    InvalidCircuit(String),

    /// Too many qubits for the configured cap
    #[error("Circuit has {num_qubits} qubits but the simulator allows at most {max_qubits}")]
    TooManyQubits {
        num_qubits: usize,
        max_qubits: usize,
    },

    /// A unitary gate exposed no matrix to apply
    #[error("Gate '{gate}' at operation {index} has no matrix")]
    MissingMatrix { gate: String, index: usize },

    /// Gate arity outside what the replay loop supports
    #[error("Gate '{gate}' acts on {arity} qubits; only 1- and 2-qubit gates are simulable")]
    UnsupportedArity { gate: String, arity: usize },

    /// Total probability drifted outside tolerance
    #[error("State norm {norm} violates the normalization invariant")]
    NormalizationBroken { norm: f64 },

    /// Underlying state operation failed
    #[error(transparent)]
    State(#[from] StateError),
}
