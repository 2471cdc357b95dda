//! Core types for building quantum circuits
//!
//! This crate provides the fundamental pieces of the circuit engine:
//! - [`QubitId`]: Type-safe qubit addressing
//! - [`Gate`]: Trait for quantum operations, plus the standard gate set
//! - [`Circuit`]: Mutable circuit accumulator with structural metrics
//! - [`CircuitValidator`]: Rule-based validation producing errors and warnings
//! - [`qasm`]: OpenQASM 2.0 text export
//!
//! # Example
//! ```
//! use circq_core::{Circuit, QubitId};
//! use circq_core::gates::Hadamard;
//! use std::sync::Arc;
//!
//! let mut circuit = Circuit::new(2);
//! circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
//! assert_eq!(circuit.len(), 1);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod gates;
pub mod qasm;
pub mod qubit;
pub mod validation;

// Re-exports for convenience
pub use circuit::{Circuit, CircuitMetadata};
pub use error::QuantumError;
pub use gate::{Gate, GateOp};
pub use num_complex::Complex64;
pub use qubit::QubitId;
pub use validation::{CircuitValidator, ValidationReport, ValidatorConfig};

/// Type alias for results in circq
pub type Result<T> = std::result::Result<T, QuantumError>;
