//! Diagnostic state reports

use circq_state::{entanglement_entropy_first, StateVector};
use std::fmt;

use crate::Result;

/// Diagnostic summary of a quantum state
///
/// Captures the register size, the entanglement entropy of the default
/// qubit-0-versus-rest bipartition, and the highest-probability basis
/// states in descending order.
#[derive(Clone, Debug)]
pub struct StateReport {
    /// Number of qubits
    pub num_qubits: usize,
    /// Entanglement entropy in bits
    pub entropy: f64,
    /// Top basis states as (bitstring, probability), highest first
    pub top_states: Vec<(String, f64)>,
}

impl StateReport {
    /// Build a report over the `top_k` most probable basis states
    pub fn for_state(state: &StateVector, top_k: usize) -> Result<Self> {
        let entropy = entanglement_entropy_first(state)?;

        let mut ranked: Vec<(usize, f64)> = state
            .probabilities()
            .into_iter()
            .enumerate()
            .filter(|(_, p)| *p > 1e-12)
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(top_k);

        let top_states = ranked
            .into_iter()
            .map(|(index, p)| (state.bitstring(index), p))
            .collect();

        Ok(Self {
            num_qubits: state.num_qubits(),
            entropy,
            top_states,
        })
    }
}

impl fmt::Display for StateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "StateReport({} qubits, entropy {:.4} bits)",
            self.num_qubits, self.entropy
        )?;
        for (bitstring, p) in &self.top_states {
            writeln!(f, "  |{}⟩  {:.6}", bitstring, p)?;
        }
        Ok(())
    }
}
