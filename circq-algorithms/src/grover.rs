//! Grover search skeleton

use crate::{AlgorithmParameter, AlgorithmResult};
use circq_core::gates::{Cz, Hadamard, PauliX, PauliZ};
use circq_core::{Circuit, QubitId, Result};
use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::Arc;

/// Optimal Grover iteration count ⌊(π/4)√(N/M)⌉ for N = 2ⁿ states
/// and M marked states, at least one
fn optimal_iterations(num_qubits: usize, marked_count: usize) -> usize {
    let n = (num_qubits as f64).exp2();
    let m = marked_count.max(1) as f64;
    let iterations = (PI / 4.0) * (n / m).sqrt();
    (iterations.round() as usize).max(1)
}

/// Build a Grover search circuit skeleton
///
/// Uniform superposition via a Hadamard layer, then the optimal number
/// of oracle + diffusion rounds. The oracle is a stand-in phase flip
/// (Z on the last qubit, CZ against it from every other qubit) rather
/// than a problem-specific marking; the diffusion operator is the
/// standard H–X–CZ–X–H reflection about the mean.
pub fn grovers_search(num_qubits: usize, marked_count: usize) -> Result<AlgorithmResult> {
    let num_qubits = num_qubits.max(2);
    let iterations = optimal_iterations(num_qubits, marked_count);
    let mut circuit = Circuit::named(
        num_qubits,
        "grovers_search",
        "Amplitude amplification with a stand-in oracle",
    );

    for q in 0..num_qubits {
        circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(q)])?;
    }

    let last = QubitId::new(num_qubits - 1);
    for _ in 0..iterations {
        // Oracle stand-in: phase-flip states with the last qubit set
        circuit.add_gate(Arc::new(PauliZ), &[last])?;
        for q in 0..num_qubits - 1 {
            circuit.add_gate(Arc::new(Cz), &[QubitId::new(q), last])?;
        }

        // Diffusion: reflection about the uniform superposition
        for q in 0..num_qubits {
            circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(q)])?;
        }
        for q in 0..num_qubits {
            circuit.add_gate(Arc::new(PauliX), &[QubitId::new(q)])?;
        }
        circuit.add_gate(Arc::new(Cz), &[QubitId::new(num_qubits - 2), last])?;
        for q in 0..num_qubits {
            circuit.add_gate(Arc::new(PauliX), &[QubitId::new(q)])?;
        }
        for q in 0..num_qubits {
            circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(q)])?;
        }
    }

    let mut parameters = HashMap::new();
    parameters.insert(
        "num_qubits".to_string(),
        AlgorithmParameter::Int(num_qubits as u64),
    );
    parameters.insert(
        "marked_count".to_string(),
        AlgorithmParameter::Int(marked_count.max(1) as u64),
    );
    parameters.insert(
        "iterations".to_string(),
        AlgorithmParameter::Int(iterations as u64),
    );

    Ok(AlgorithmResult::new("grovers_search", circuit, parameters))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_count_matches_formula() {
        // (π/4)√(4/1) ≈ 1.57 rounds to 2
        assert_eq!(optimal_iterations(2, 1), 2);
        // (π/4)√(8/1) ≈ 2.22 rounds to 2
        assert_eq!(optimal_iterations(3, 1), 2);
        // (π/4)√(16/1) ≈ 3.14 rounds to 3
        assert_eq!(optimal_iterations(4, 1), 3);
        // more marked states mean fewer iterations
        assert!(optimal_iterations(4, 4) < optimal_iterations(4, 1));
    }

    #[test]
    fn records_iterations_parameter() {
        let result = grovers_search(3, 1).unwrap();
        assert_eq!(result.parameters["iterations"], AlgorithmParameter::Int(2));
        assert_eq!(result.parameters["num_qubits"], AlgorithmParameter::Int(3));
        assert_eq!(result.circuit.num_qubits(), 3);
    }

    #[test]
    fn starts_with_hadamard_layer() {
        let result = grovers_search(3, 1).unwrap();
        let head: Vec<_> = result
            .circuit
            .operations()
            .take(3)
            .map(|op| op.gate().name())
            .collect();
        assert_eq!(head, vec!["H", "H", "H"]);
    }

    #[test]
    fn zero_marked_count_is_clamped() {
        let result = grovers_search(3, 0).unwrap();
        assert_eq!(
            result.parameters["marked_count"],
            AlgorithmParameter::Int(1)
        );
    }
}
