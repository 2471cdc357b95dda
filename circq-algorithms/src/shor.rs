//! Shor factoring demonstration

use crate::{AlgorithmParameter, AlgorithmResult};
use circq_core::gates::{Cnot, ControlledPhase, Hadamard};
use circq_core::{Circuit, QubitId, Result};
use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::Arc;

/// Factor `n` classically by trial division
///
/// Returns the prime factorization in ascending order; `[n]` when `n`
/// is prime, empty for `n < 2`.
fn trial_division(n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut remaining = n;
    let mut candidate = 2u64;
    while candidate * candidate <= remaining {
        while remaining % candidate == 0 {
            factors.push(candidate);
            remaining /= candidate;
        }
        candidate += 1;
    }
    if remaining > 1 {
        factors.push(remaining);
    }
    factors
}

/// Number of bits needed to represent `n`
fn bit_width(n: u64) -> usize {
    (64 - n.max(2).leading_zeros()) as usize
}

/// Build a pedagogical Shor demonstration circuit for factoring `n`
///
/// The circuit sketches the structure of the quantum part without
/// modular exponentiation: a Hadamard layer on a counting register,
/// CNOT entanglement between counting and work registers, and a
/// phase ladder standing in for the inverse Fourier transform. The
/// `expected_factors` parameter carries the answer from classical
/// trial division so demonstrations can compare against it.
pub fn shors_demo(n_to_factor: u64) -> Result<AlgorithmResult> {
    let n_to_factor = n_to_factor.max(2);
    let work_bits = bit_width(n_to_factor);
    let counting_bits = work_bits.max(3);
    let num_qubits = counting_bits + work_bits;

    let mut circuit = Circuit::named(
        num_qubits,
        "shors_demo",
        "Period-finding structure without modular arithmetic",
    );

    // Counting register in uniform superposition
    for q in 0..counting_bits {
        circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(q)])?;
    }

    // Entangle each counting qubit with a work qubit
    for q in 0..counting_bits.min(work_bits) {
        circuit.add_gate(
            Arc::new(Cnot),
            &[QubitId::new(q), QubitId::new(counting_bits + q)],
        )?;
    }

    // Phase ladder in place of the inverse Fourier transform
    for target in 0..counting_bits {
        circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(target)])?;
        for control in target + 1..counting_bits {
            let theta = -PI / (1u64 << (control - target)) as f64;
            circuit.add_gate(
                Arc::new(ControlledPhase::new(theta)),
                &[QubitId::new(control), QubitId::new(target)],
            )?;
        }
    }

    let mut parameters = HashMap::new();
    parameters.insert(
        "number_to_factor".to_string(),
        AlgorithmParameter::Int(n_to_factor),
    );
    parameters.insert(
        "expected_factors".to_string(),
        AlgorithmParameter::IntList(trial_division(n_to_factor)),
    );

    Ok(AlgorithmResult::new("shors_demo", circuit, parameters))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trial_division_factors_fifteen() {
        assert_eq!(trial_division(15), vec![3, 5]);
        assert_eq!(trial_division(21), vec![3, 7]);
        assert_eq!(trial_division(12), vec![2, 2, 3]);
        assert_eq!(trial_division(13), vec![13]);
    }

    #[test]
    fn records_number_and_factors() {
        let result = shors_demo(15).unwrap();
        assert_eq!(
            result.parameters["number_to_factor"],
            AlgorithmParameter::Int(15)
        );
        assert_eq!(
            result.parameters["expected_factors"],
            AlgorithmParameter::IntList(vec![3, 5])
        );
    }

    #[test]
    fn register_sizes_track_the_number() {
        // 15 needs 4 work bits and gets 4 counting bits
        let result = shors_demo(15).unwrap();
        assert_eq!(result.circuit.num_qubits(), 8);
        // small numbers keep at least 3 counting bits
        let result = shors_demo(3).unwrap();
        assert_eq!(result.circuit.num_qubits(), 5);
    }
}
