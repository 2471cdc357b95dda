//! Quantum Fourier transform

use crate::{AlgorithmParameter, AlgorithmResult};
use circq_core::gates::{Cnot, ControlledPhase, Hadamard};
use circq_core::{Circuit, QubitId, Result};
use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::Arc;

/// Build the quantum Fourier transform on `n` qubits
///
/// Standard decomposition: for each target qubit j, a Hadamard followed
/// by controlled-phase rotations CP(π/2^(k−j)) from every higher qubit
/// k, then a qubit-reversal network expressed as CNOT triples.
pub fn quantum_fourier_transform(n: usize) -> Result<AlgorithmResult> {
    let n = n.max(1);
    let mut circuit = Circuit::named(
        n,
        "qft",
        "Quantum Fourier transform with qubit-reversal swaps",
    );

    for target in 0..n {
        circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(target)])?;
        for control in target + 1..n {
            let theta = PI / (1u64 << (control - target)) as f64;
            circuit.add_gate(
                Arc::new(ControlledPhase::new(theta)),
                &[QubitId::new(control), QubitId::new(target)],
            )?;
        }
    }

    // Bit reversal: SWAP(i, n-1-i) as three CNOTs
    for i in 0..n / 2 {
        let a = QubitId::new(i);
        let b = QubitId::new(n - 1 - i);
        circuit.add_gate(Arc::new(Cnot), &[a, b])?;
        circuit.add_gate(Arc::new(Cnot), &[b, a])?;
        circuit.add_gate(Arc::new(Cnot), &[a, b])?;
    }

    let mut parameters = HashMap::new();
    parameters.insert("num_qubits".to_string(), AlgorithmParameter::Int(n as u64));

    Ok(AlgorithmResult::new("qft", circuit, parameters))
}
