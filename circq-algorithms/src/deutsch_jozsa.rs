//! Deutsch–Jozsa constant-vs-balanced query

use crate::{AlgorithmParameter, AlgorithmResult};
use circq_core::gates::{Cnot, Hadamard, PauliX};
use circq_core::{Circuit, QubitId, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Build a Deutsch–Jozsa circuit for an `n`-bit balanced oracle
///
/// Uses n input qubits plus one ancilla (qubit n). The ancilla is
/// prepared in |−⟩ via X then H, the oracle is a balanced stand-in
/// (CNOT fan-in from every input to the ancilla, implementing
/// f(x) = x₀ ⊕ … ⊕ xₙ₋₁), and a closing Hadamard layer on the inputs
/// moves the answer into the computational basis: any input qubit
/// measuring 1 certifies a balanced function.
pub fn deutsch_jozsa(n: usize) -> Result<AlgorithmResult> {
    let n = n.max(1);
    let ancilla = QubitId::new(n);
    let mut circuit = Circuit::named(
        n + 1,
        "deutsch_jozsa",
        "Single-query constant-vs-balanced decision",
    );

    circuit.add_gate(Arc::new(PauliX), &[ancilla])?;
    for q in 0..=n {
        circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(q)])?;
    }

    // Balanced oracle: parity of all inputs
    for q in 0..n {
        circuit.add_gate(Arc::new(Cnot), &[QubitId::new(q), ancilla])?;
    }

    for q in 0..n {
        circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(q)])?;
    }

    let mut parameters = HashMap::new();
    parameters.insert("input_bits".to_string(), AlgorithmParameter::Int(n as u64));

    Ok(AlgorithmResult::new("deutsch_jozsa", circuit, parameters))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_one_ancilla() {
        let result = deutsch_jozsa(3).unwrap();
        assert_eq!(result.circuit.num_qubits(), 4);
        // X + 4 H + 3 CNOT + 3 H
        assert_eq!(result.gate_count, 11);
    }

    #[test]
    fn ancilla_is_flipped_first() {
        let result = deutsch_jozsa(2).unwrap();
        let first = result.circuit.get_operation(0).unwrap();
        assert_eq!(first.gate().name(), "X");
        assert_eq!(first.qubits(), &[QubitId::new(2)]);
    }

    #[test]
    fn oracle_targets_ancilla() {
        let result = deutsch_jozsa(3).unwrap();
        let ancilla = QubitId::new(3);
        for op in result.circuit.operations() {
            if op.gate().name() == "CNOT" {
                assert_eq!(op.qubits()[1], ancilla);
            }
        }
    }
}
