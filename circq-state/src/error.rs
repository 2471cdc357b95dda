//! Error types for state operations

use thiserror::Error;

/// Errors that can occur in state-vector and density-matrix operations
#[derive(Debug, Error)]
pub enum StateError {
    /// Register cannot be empty
    #[error("State must have at least one qubit")]
    EmptyRegister,

    /// Qubit count exceeds the allocation cap
    #[error("{requested} qubits exceeds the maximum of {max} (2^{requested} amplitudes)")]
    TooManyQubits { requested: usize, max: usize },

    /// Amplitude buffer has the wrong length
    #[error("Expected {expected} amplitudes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Qubit index outside the register
    #[error("Invalid qubit index {index}: state has only {num_qubits} qubits")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// Operation requires a different matrix dimension
    #[error("Operation unsupported for dimension {dimension}")]
    UnsupportedDimension { dimension: usize },

    /// Nothing left after tracing out every qubit
    #[error("Partial trace must leave at least one qubit")]
    EmptyPartialTrace,
}
