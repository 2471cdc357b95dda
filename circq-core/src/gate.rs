//! Quantum gate trait and gate operations

use crate::{QuantumError, QubitId, Result};
use num_complex::Complex64;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Trait for quantum gate operations
///
/// Gates are stateless values shared across circuits. A gate knows its
/// name, its arity, and (for unitary gates) its matrix in row-major order.
pub trait Gate: Send + Sync + fmt::Debug {
    /// The name of the gate (e.g., "H", "CNOT", "CP")
    fn name(&self) -> &str;

    /// Number of qubits this gate acts on
    fn num_qubits(&self) -> usize;

    /// Whether this gate is a unitary operation
    ///
    /// Most gates are unitary. Measurement operations are not.
    fn is_unitary(&self) -> bool {
        true
    }

    /// Whether this gate is hermitian (self-adjoint, its own inverse)
    fn is_hermitian(&self) -> bool {
        false
    }

    /// Continuous parameters of the gate, if any (e.g., a phase angle)
    fn parameters(&self) -> Vec<f64> {
        Vec::new()
    }

    /// Get a description of this gate
    fn description(&self) -> String {
        format!("{}-qubit gate '{}'", self.num_qubits(), self.name())
    }

    /// The unitary matrix as a flattened row-major vector
    ///
    /// For an n-qubit gate the vector has length `(2^n)^2`. For two-qubit
    /// gates the first listed qubit is the high bit of the local basis
    /// index, so controlled gates put the control first.
    ///
    /// Returns `None` for operations without a matrix (measurement).
    fn matrix(&self) -> Option<Vec<Complex64>> {
        None
    }
}

/// A gate applied to specific qubits
///
/// Combines a gate with the qubits it operates on, in the order the gate
/// expects them (control first for controlled gates).
#[derive(Clone)]
pub struct GateOp {
    gate: Arc<dyn Gate>,
    qubits: SmallVec<[QubitId; 2]>, // Most gates are 1-2 qubits
}

impl GateOp {
    /// Create a new gate operation
    ///
    /// # Errors
    /// Returns error if:
    /// - Qubit count doesn't match gate arity
    /// - Duplicate qubits are specified (controls and targets must be
    ///   disjoint)
    pub fn new(gate: Arc<dyn Gate>, qubits: &[QubitId]) -> Result<Self> {
        if qubits.len() != gate.num_qubits() {
            return Err(QuantumError::invalid_qubit_count(
                gate.name(),
                gate.num_qubits(),
                qubits.len(),
            ));
        }

        for i in 0..qubits.len() {
            for j in (i + 1)..qubits.len() {
                if qubits[i] == qubits[j] {
                    return Err(QuantumError::DuplicateQubit(qubits[i]));
                }
            }
        }

        Ok(Self {
            gate,
            qubits: SmallVec::from_slice(qubits),
        })
    }

    /// Get the gate
    #[inline]
    pub fn gate(&self) -> &Arc<dyn Gate> {
        &self.gate
    }

    /// Get the qubits this operation acts on
    #[inline]
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }
}

impl fmt::Debug for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.gate.name())?;
        for (i, q) in self.qubits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", q)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
