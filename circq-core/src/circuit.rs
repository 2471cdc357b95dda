//! Quantum circuit representation

use crate::gate::Gate;
use crate::{GateOp, QubitId, Result};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;

/// Descriptive metadata attached to a circuit
#[derive(Clone, Debug)]
pub struct CircuitMetadata {
    /// Human-readable circuit name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Creation timestamp
    pub created_at: SystemTime,
}

impl CircuitMetadata {
    /// Create metadata with a name and description
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            created_at: SystemTime::now(),
        }
    }
}

impl Default for CircuitMetadata {
    fn default() -> Self {
        Self::new("", "")
    }
}

/// A quantum circuit
///
/// An ordered sequence of gate operations over a fixed qubit register.
/// The circuit is a mutable accumulator owned by one caller at a time;
/// share it across threads only behind external synchronization.
///
/// # Example
/// ```
/// use circq_core::Circuit;
///
/// let circuit = Circuit::new(3);
/// assert_eq!(circuit.num_qubits(), 3);
/// assert_eq!(circuit.len(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Circuit {
    num_qubits: usize,
    operations: Vec<GateOp>,
    metadata: CircuitMetadata,
}

impl Circuit {
    /// Create a new quantum circuit with the specified number of qubits
    ///
    /// # Panics
    /// Panics if `num_qubits` is 0
    pub fn new(num_qubits: usize) -> Self {
        assert!(num_qubits > 0, "Circuit must have at least one qubit");
        Self {
            num_qubits,
            operations: Vec::new(),
            metadata: CircuitMetadata::default(),
        }
    }

    /// Create a circuit with pre-allocated gate capacity
    pub fn with_capacity(num_qubits: usize, capacity: usize) -> Self {
        assert!(num_qubits > 0, "Circuit must have at least one qubit");
        Self {
            num_qubits,
            operations: Vec::with_capacity(capacity),
            metadata: CircuitMetadata::default(),
        }
    }

    /// Create a named circuit
    pub fn named(num_qubits: usize, name: impl Into<String>, description: impl Into<String>) -> Self {
        let mut circuit = Self::new(num_qubits);
        circuit.metadata = CircuitMetadata::new(name, description);
        circuit
    }

    /// Get the number of qubits in the circuit
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the number of operations in the circuit
    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the circuit is empty (no operations)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Get the circuit metadata
    pub fn metadata(&self) -> &CircuitMetadata {
        &self.metadata
    }

    /// Get mutable access to the circuit metadata
    pub fn metadata_mut(&mut self) -> &mut CircuitMetadata {
        &mut self.metadata
    }

    /// Append a gate operation in program order
    ///
    /// Qubit indices are *not* range-checked here; out-of-range references
    /// are surfaced as data by [`crate::CircuitValidator`] so an
    /// interactive builder can report every problem at once.
    ///
    /// # Errors
    /// Returns error if the qubit count doesn't match the gate arity or a
    /// qubit is listed twice.
    pub fn add_gate(&mut self, gate: Arc<dyn Gate>, qubits: &[QubitId]) -> Result<()> {
        let gate_op = GateOp::new(gate, qubits)?;
        self.operations.push(gate_op);
        Ok(())
    }

    /// Remove the gate at `index`, shifting subsequent gates down
    ///
    /// Returns the removed operation, or `None` if `index` is out of range.
    pub fn remove_gate(&mut self, index: usize) -> Option<GateOp> {
        if index < self.operations.len() {
            Some(self.operations.remove(index))
        } else {
            None
        }
    }

    /// Clear all operations from the circuit
    pub fn clear(&mut self) {
        self.operations.clear();
    }

    /// Get an iterator over the operations
    pub fn operations(&self) -> impl Iterator<Item = &GateOp> {
        self.operations.iter()
    }

    /// Get a specific operation by index
    pub fn get_operation(&self, index: usize) -> Option<&GateOp> {
        self.operations.get(index)
    }

    /// Count gate occurrences by gate name
    pub fn gate_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for op in &self.operations {
            *counts.entry(op.gate().name().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Get the depth of the circuit, accounting for parallelism
    ///
    /// Each gate is scheduled at `max(last_step[q]) + 1` over the qubits
    /// it touches, so gates on disjoint qubits share a time-step. The
    /// depth is therefore strictly less than the gate count whenever the
    /// circuit has parallel structure.
    pub fn depth(&self) -> usize {
        let mut last_step = vec![0usize; self.num_qubits];
        let mut depth = 0;

        for op in &self.operations {
            let step = op
                .qubits()
                .iter()
                .filter(|q| q.index() < self.num_qubits)
                .map(|q| last_step[q.index()])
                .max()
                .unwrap_or(0)
                + 1;

            for q in op.qubits() {
                if q.index() < self.num_qubits {
                    last_step[q.index()] = step;
                }
            }
            depth = depth.max(step);
        }

        depth
    }
}

impl std::fmt::Display for Circuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Circuit({} qubits, {} operations)", self.num_qubits, self.len())?;
        for (i, op) in self.operations.iter().enumerate() {
            writeln!(f, "  {}: {}", i, op)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::{Cnot, Hadamard, PauliX};

    #[test]
    fn test_circuit_creation() {
        let circuit = Circuit::new(3);
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.len(), 0);
        assert!(circuit.is_empty());
    }

    #[test]
    #[should_panic(expected = "at least one qubit")]
    fn test_circuit_zero_qubits() {
        Circuit::new(0);
    }

    #[test]
    fn test_add_and_remove_gate() {
        let mut circuit = Circuit::new(2);
        circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
        circuit.add_gate(Arc::new(PauliX), &[QubitId::new(1)]).unwrap();
        assert_eq!(circuit.len(), 2);
        assert_eq!(circuit.get_operation(0).unwrap().gate().name(), "H");
        assert_eq!(circuit.get_operation(1).unwrap().gate().name(), "X");

        let removed = circuit.remove_gate(0).unwrap();
        assert_eq!(removed.gate().name(), "H");
        assert_eq!(circuit.len(), 1);
        assert_eq!(circuit.get_operation(0).unwrap().gate().name(), "X");

        assert!(circuit.remove_gate(10).is_none());
    }

    #[test]
    fn test_clear() {
        let mut circuit = Circuit::new(2);
        circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
        circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(1)]).unwrap();
        circuit.clear();
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_gate_counts() {
        let mut circuit = Circuit::new(2);
        circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
        circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(1)]).unwrap();
        circuit
            .add_gate(Arc::new(Cnot), &[QubitId::new(0), QubitId::new(1)])
            .unwrap();

        let counts = circuit.gate_counts();
        assert_eq!(counts["H"], 2);
        assert_eq!(counts["CNOT"], 1);
    }

    #[test]
    fn test_depth_sequential() {
        let mut circuit = Circuit::new(1);
        assert_eq!(circuit.depth(), 0);
        circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
        circuit.add_gate(Arc::new(PauliX), &[QubitId::new(0)]).unwrap();
        assert_eq!(circuit.depth(), 2);
    }

    #[test]
    fn test_depth_parallel_gates_share_step() {
        let mut circuit = Circuit::new(2);
        circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
        circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(1)]).unwrap();
        // Both H gates fit in one time-step
        assert_eq!(circuit.depth(), 1);

        circuit
            .add_gate(Arc::new(Cnot), &[QubitId::new(0), QubitId::new(1)])
            .unwrap();
        assert_eq!(circuit.depth(), 2);
        assert!(circuit.depth() < circuit.len());
    }

    #[test]
    fn test_metadata() {
        let circuit = Circuit::named(2, "bell", "Bell pair preparation");
        assert_eq!(circuit.metadata().name, "bell");
        assert_eq!(circuit.metadata().description, "Bell pair preparation");
    }

    #[test]
    fn test_display() {
        let mut circuit = Circuit::new(2);
        circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
        let display = format!("{}", circuit);
        assert!(display.contains("2 qubits"));
        assert!(display.contains("1 operations"));
    }
}
