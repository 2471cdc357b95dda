//! Quantum state representation and derived quantities
//!
//! This crate holds everything that touches amplitudes:
//! - [`StateVector`]: dense complex-amplitude state with functional gate
//!   application (every application returns a fresh state)
//! - [`kernels`]: scalar in-place gate kernels shared with the simulator
//! - [`MeasurementCounts`] and [`sample_counts`]: seeded multinomial
//!   sampling from a fixed distribution
//! - [`DensityMatrix`]: partial trace, purity and von Neumann entropy
//! - [`BlochVector`]: single-qubit Bloch projection with purity
//!
//! All operations are synchronous and CPU-bound; the dominant cost is the
//! `O(2^n)` amplitude vector, capped at [`MAX_QUBITS`] qubits.

pub mod bloch;
pub mod density;
pub mod error;
pub mod kernels;
pub mod measurement;
pub mod state_vector;

pub use bloch::BlochVector;
pub use density::{
    entanglement_entropy, entanglement_entropy_first, reduced_qubit_density, DensityMatrix,
};
pub use error::StateError;
pub use measurement::{sample_counts, MeasurementCounts};
pub use num_complex::Complex64;
pub use state_vector::{StateVector, MAX_QUBITS};

/// Type alias for results in circq-state
pub type Result<T> = std::result::Result<T, StateError>;
