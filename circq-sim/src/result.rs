//! Simulation result types

use circq_state::{MeasurementCounts, StateVector};

/// Result of a quantum circuit simulation
///
/// Holds the exact final state and the sampled measurement statistics.
#[derive(Clone, Debug)]
pub struct SimulationResult {
    /// Final quantum state after all unitary gates have been applied
    pub final_state: StateVector,

    /// Sampled measurement counts, summing to the requested shots
    pub measurements: MeasurementCounts,
}

impl SimulationResult {
    /// Create a new simulation result
    pub fn new(final_state: StateVector, measurements: MeasurementCounts) -> Self {
        Self {
            final_state,
            measurements,
        }
    }

    /// Number of qubits in the final state
    pub fn num_qubits(&self) -> usize {
        self.final_state.num_qubits()
    }

    /// Total number of measurement shots
    pub fn total_shots(&self) -> usize {
        self.measurements.shots()
    }

    /// The most frequently observed outcome, if any shots were taken
    pub fn most_frequent(&self) -> Option<(String, usize)> {
        self.measurements.sorted().into_iter().next()
    }
}
