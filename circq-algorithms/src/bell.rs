//! Bell pair preparation

use crate::{AlgorithmParameter, AlgorithmResult};
use circq_core::gates::{Cnot, Hadamard};
use circq_core::{Circuit, QubitId, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Prepare `pair_count` maximally entangled Bell pairs
///
/// Qubits 2k and 2k+1 form the k-th pair: a Hadamard on the even
/// qubit followed by a CNOT onto its partner yields
/// (|00⟩ + |11⟩)/√2 per pair.
pub fn bell_pairs(pair_count: usize) -> Result<AlgorithmResult> {
    let num_qubits = 2 * pair_count.max(1);
    let mut circuit = Circuit::named(
        num_qubits,
        "bell_pairs",
        "Maximally entangled qubit pairs",
    );

    for pair in 0..pair_count.max(1) {
        let a = QubitId::new(2 * pair);
        let b = QubitId::new(2 * pair + 1);
        circuit.add_gate(Arc::new(Hadamard), &[a])?;
        circuit.add_gate(Arc::new(Cnot), &[a, b])?;
    }

    let mut parameters = HashMap::new();
    parameters.insert(
        "pair_count".to_string(),
        AlgorithmParameter::Int(pair_count.max(1) as u64),
    );

    Ok(AlgorithmResult::new("bell_pairs", circuit, parameters))
}
