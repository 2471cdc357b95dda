//! Canonical quantum algorithm circuits
//!
//! Pure generators that build ready-made circuits using only the
//! [`circq_core`] builder:
//! - [`bell::bell_pairs`]: maximally entangled qubit pairs
//! - [`grover::grovers_search`]: oracle/diffusion search skeleton
//! - [`deutsch_jozsa::deutsch_jozsa`]: constant-vs-balanced oracle query
//! - [`qft::quantum_fourier_transform`]: Hadamard + controlled-phase ladder
//! - [`shor::shors_demo`]: pedagogical factoring demonstration
//!
//! Each generator returns an [`AlgorithmResult`] carrying the circuit,
//! its gate count, and the parameters it was built from.

pub mod bell;
pub mod deutsch_jozsa;
pub mod grover;
pub mod qft;
pub mod shor;

pub use bell::bell_pairs;
pub use deutsch_jozsa::deutsch_jozsa;
pub use grover::grovers_search;
pub use qft::quantum_fourier_transform;
pub use shor::shors_demo;

use circq_core::Circuit;
use std::collections::HashMap;

/// A parameter recorded by an algorithm generator
#[derive(Clone, Debug, PartialEq)]
pub enum AlgorithmParameter {
    /// Real-valued parameter
    Float(f64),
    /// Integer parameter
    Int(u64),
    /// List of integers (e.g., expected factors)
    IntList(Vec<u64>),
}

impl AlgorithmParameter {
    /// Get the integer value, if this is an `Int`
    pub fn as_int(&self) -> Option<u64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the integer list, if this is an `IntList`
    pub fn as_int_list(&self) -> Option<&[u64]> {
        match self {
            Self::IntList(v) => Some(v),
            _ => None,
        }
    }
}

/// A generated algorithm circuit with its parameters
///
/// Produced once by a generator and treated as immutable afterwards.
#[derive(Clone, Debug)]
pub struct AlgorithmResult {
    /// Algorithm name
    pub name: String,
    /// The generated circuit
    pub circuit: Circuit,
    /// Parameters the circuit was built from
    pub parameters: HashMap<String, AlgorithmParameter>,
    /// Total gate count at generation time
    pub gate_count: usize,
}

impl AlgorithmResult {
    fn new(
        name: impl Into<String>,
        circuit: Circuit,
        parameters: HashMap<String, AlgorithmParameter>,
    ) -> Self {
        let gate_count = circuit.len();
        Self {
            name: name.into(),
            circuit,
            parameters,
            gate_count,
        }
    }
}
