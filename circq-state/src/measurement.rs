//! Measurement sampling from a fixed distribution
//!
//! Sampling models independent repeated preparations: the state is never
//! collapsed between shots. The random source is injected by the caller
//! so tests can be deterministic.

use crate::state_vector::StateVector;
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::HashMap;

/// Measurement outcome counts over a number of shots
///
/// Counts are keyed by bitstring (qubit 0 rightmost) and always sum to
/// the requested shot count.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementCounts {
    counts: HashMap<String, usize>,
    shots: usize,
}

impl MeasurementCounts {
    /// Create an empty counts object for `shots` shots
    pub fn new(shots: usize) -> Self {
        Self {
            counts: HashMap::new(),
            shots,
        }
    }

    /// Record one outcome
    pub fn record(&mut self, bitstring: String) {
        *self.counts.entry(bitstring).or_insert(0) += 1;
    }

    /// Total number of shots
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Count for a specific outcome
    pub fn count_of(&self, bitstring: &str) -> usize {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Empirical frequency of an outcome (count / shots)
    pub fn frequency(&self, bitstring: &str) -> f64 {
        self.count_of(bitstring) as f64 / self.shots as f64
    }

    /// All outcomes and counts
    pub fn counts(&self) -> &HashMap<String, usize> {
        &self.counts
    }

    /// Outcomes sorted by count, descending
    pub fn sorted(&self) -> Vec<(String, usize)> {
        let mut outcomes: Vec<_> = self
            .counts
            .iter()
            .map(|(k, &v)| (k.clone(), v))
            .collect();
        outcomes.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        outcomes
    }

    /// Sum of all recorded counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Draw `shots` independent samples from the state's distribution
///
/// Builds the cumulative distribution once, then binary-searches it per
/// shot. Returns counts summing to exactly `shots`.
pub fn sample_counts(state: &StateVector, shots: usize, rng: &mut StdRng) -> MeasurementCounts {
    let probabilities = state.probabilities();

    let mut cumulative = Vec::with_capacity(probabilities.len());
    let mut acc = 0.0;
    for p in &probabilities {
        acc += p;
        cumulative.push(acc);
    }

    let mut result = MeasurementCounts::new(shots);
    for _ in 0..shots {
        let r = rng.gen::<f64>() * acc;
        // First index whose cumulative probability exceeds r
        let index = cumulative
            .partition_point(|&c| c <= r)
            .min(probabilities.len() - 1);
        result.record(state.bitstring(index));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_counts_sum_to_shots() {
        let state = StateVector::zero_state(2)
            .unwrap()
            .apply_hadamard(0)
            .unwrap()
            .apply_cnot(0, 1)
            .unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let counts = sample_counts(&state, 1000, &mut rng);
        assert_eq!(counts.total(), 1000);
        assert_eq!(counts.shots(), 1000);
    }

    #[test]
    fn test_deterministic_state_samples_single_outcome() {
        let state = StateVector::zero_state(2).unwrap().apply_pauli_x(1).unwrap();

        let mut rng = StdRng::seed_from_u64(0);
        let counts = sample_counts(&state, 100, &mut rng);
        assert_eq!(counts.count_of("10"), 100);
    }

    #[test]
    fn test_frequencies_close_to_probabilities() {
        let state = StateVector::zero_state(1).unwrap().apply_hadamard(0).unwrap();

        let mut rng = StdRng::seed_from_u64(1234);
        let counts = sample_counts(&state, 10_000, &mut rng);
        // 5 sigma for p = 0.5, n = 10000 is ~0.025
        assert!((counts.frequency("0") - 0.5).abs() < 0.025);
        assert!((counts.frequency("1") - 0.5).abs() < 0.025);
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let state = StateVector::uniform_superposition(3).unwrap();

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = sample_counts(&state, 500, &mut rng_a);
        let b = sample_counts(&state, 500, &mut rng_b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sorted_outcomes() {
        let mut counts = MeasurementCounts::new(10);
        for _ in 0..7 {
            counts.record("00".to_string());
        }
        for _ in 0..3 {
            counts.record("11".to_string());
        }
        let sorted = counts.sorted();
        assert_eq!(sorted[0], ("00".to_string(), 7));
        assert_eq!(sorted[1], ("11".to_string(), 3));
    }
}
