//! Density matrices, partial trace and von Neumann entropy
//!
//! A density matrix ρ is a positive semi-definite, Hermitian matrix with
//! Tr(ρ) = 1. The engine uses it for two derived quantities: reduced
//! single-qubit states (Bloch projection) and entanglement entropy of a
//! one-qubit-versus-rest bipartition. Both reduce to 2x2 matrices whose
//! eigenvalues have a closed form, so no iterative eigensolver is needed.

use crate::error::StateError;
use crate::state_vector::StateVector;
use crate::Result;
use num_complex::Complex64;
use std::fmt;

/// Density matrix of a (possibly reduced) quantum state
///
/// Stores the full 2^n x 2^n matrix in row-major order; memory is
/// O(4^n), so this is only built for small subsystems or small full
/// states.
#[derive(Clone, PartialEq)]
pub struct DensityMatrix {
    num_qubits: usize,
    dimension: usize,
    matrix: Vec<Complex64>,
}

impl DensityMatrix {
    /// Build ρ = |ψ⟩⟨ψ| from a pure state
    pub fn from_state_vector(state: &StateVector) -> Self {
        let dimension = state.dimension();
        let amplitudes = state.amplitudes();
        let mut matrix = vec![Complex64::new(0.0, 0.0); dimension * dimension];

        // Outer product: ρᵢⱼ = ψᵢ ψⱼ*
        for i in 0..dimension {
            for j in 0..dimension {
                matrix[i * dimension + j] = amplitudes[i] * amplitudes[j].conj();
            }
        }

        Self {
            num_qubits: state.num_qubits(),
            dimension,
            matrix,
        }
    }

    /// Get number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get matrix dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Get a matrix element ρᵢⱼ
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.matrix[row * self.dimension + col]
    }

    /// Calculate trace: Tr(ρ), 1 for valid density matrices
    pub fn trace(&self) -> f64 {
        (0..self.dimension).map(|i| self.get(i, i).re).sum()
    }

    /// Calculate the purity: Tr(ρ²)
    ///
    /// 1 for pure states, down to 1/d for the maximally mixed state.
    pub fn purity(&self) -> f64 {
        let mut trace = Complex64::new(0.0, 0.0);
        for i in 0..self.dimension {
            for j in 0..self.dimension {
                trace += self.get(i, j) * self.get(j, i);
            }
        }
        trace.re
    }

    /// Compute the partial trace over `trace_qubits`
    ///
    /// Returns the reduced density matrix of the remaining qubits, with
    /// their relative bit order preserved.
    pub fn partial_trace(&self, trace_qubits: &[usize]) -> Result<Self> {
        if trace_qubits.len() >= self.num_qubits {
            return Err(StateError::EmptyPartialTrace);
        }
        for &q in trace_qubits {
            if q >= self.num_qubits {
                return Err(StateError::InvalidQubitIndex {
                    index: q,
                    num_qubits: self.num_qubits,
                });
            }
        }

        let remaining_qubits = self.num_qubits - trace_qubits.len();
        let reduced_dim = 1usize << remaining_qubits;
        let mut reduced = vec![Complex64::new(0.0, 0.0); reduced_dim * reduced_dim];

        for i in 0..self.dimension {
            for j in 0..self.dimension {
                // Traced-out qubits must agree between row and column
                let mut matches = true;
                for &q in trace_qubits {
                    let mask = 1usize << q;
                    if (i & mask) != (j & mask) {
                        matches = false;
                        break;
                    }
                }

                if matches {
                    let reduced_i = self.project_to_reduced_index(i, trace_qubits);
                    let reduced_j = self.project_to_reduced_index(j, trace_qubits);
                    reduced[reduced_i * reduced_dim + reduced_j] += self.get(i, j);
                }
            }
        }

        Ok(Self {
            num_qubits: remaining_qubits,
            dimension: reduced_dim,
            matrix: reduced,
        })
    }

    /// Project full index to reduced index (dropping traced bits)
    fn project_to_reduced_index(&self, index: usize, trace_qubits: &[usize]) -> usize {
        let mut reduced = 0;
        let mut shift = 0;

        for q in 0..self.num_qubits {
            if !trace_qubits.contains(&q) {
                if (index & (1 << q)) != 0 {
                    reduced |= 1 << shift;
                }
                shift += 1;
            }
        }

        reduced
    }

    /// Eigenvalues of a 2x2 Hermitian density matrix, closed form
    ///
    /// For ρ = [[a, b], [b*, d]] with a, d real:
    /// λ = (a+d)/2 ± sqrt(((a-d)/2)² + |b|²)
    ///
    /// # Errors
    /// Returns error for dimensions other than 2.
    pub fn eigenvalues_2x2(&self) -> Result<[f64; 2]> {
        if self.dimension != 2 {
            return Err(StateError::UnsupportedDimension {
                dimension: self.dimension,
            });
        }

        let a = self.get(0, 0).re;
        let d = self.get(1, 1).re;
        let b = self.get(0, 1);

        let mean = 0.5 * (a + d);
        let radius = (0.25 * (a - d) * (a - d) + b.norm_sqr()).sqrt();

        Ok([mean + radius, mean - radius])
    }

    /// Von Neumann entropy S = -Σ λᵢ log₂ λᵢ (with 0·log₂ 0 = 0)
    ///
    /// 0 for pure states, 1 bit for a maximally mixed qubit. Only defined
    /// here for single-qubit density matrices, the only case the engine
    /// needs.
    pub fn von_neumann_entropy(&self) -> Result<f64> {
        let eigenvalues = self.eigenvalues_2x2()?;
        let entropy = eigenvalues
            .iter()
            .filter(|&&lambda| lambda > 1e-12)
            .map(|&lambda| -lambda * lambda.log2())
            .sum();
        Ok(entropy)
    }
}

impl fmt::Debug for DensityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DensityMatrix {{ qubits: {}, dim: {}, purity: {:.4} }}",
            self.num_qubits,
            self.dimension,
            self.purity()
        )
    }
}

/// Reduced density matrix of a single qubit
///
/// Traces out every other qubit of the state.
pub fn reduced_qubit_density(state: &StateVector, qubit: usize) -> Result<DensityMatrix> {
    if qubit >= state.num_qubits() {
        return Err(StateError::InvalidQubitIndex {
            index: qubit,
            num_qubits: state.num_qubits(),
        });
    }

    let dm = DensityMatrix::from_state_vector(state);
    if state.num_qubits() == 1 {
        return Ok(dm);
    }

    let trace_qubits: Vec<usize> = (0..state.num_qubits()).filter(|&q| q != qubit).collect();
    dm.partial_trace(&trace_qubits)
}

/// Entanglement entropy of the bipartition `qubit` versus the rest
///
/// Computes the reduced density matrix of `qubit` and returns its von
/// Neumann entropy: 0 for product states, up to 1 bit for a maximally
/// entangled qubit. A single-qubit state has no partition and entropy 0.
pub fn entanglement_entropy(state: &StateVector, qubit: usize) -> Result<f64> {
    if state.num_qubits() == 1 {
        if qubit != 0 {
            return Err(StateError::InvalidQubitIndex {
                index: qubit,
                num_qubits: 1,
            });
        }
        return Ok(0.0);
    }
    reduced_qubit_density(state, qubit)?.von_neumann_entropy()
}

/// Entanglement entropy of the default bipartition (qubit 0 vs. rest)
pub fn entanglement_entropy_first(state: &StateVector) -> Result<f64> {
    entanglement_entropy(state, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-10;

    fn bell_pair() -> StateVector {
        StateVector::zero_state(2)
            .unwrap()
            .apply_hadamard(0)
            .unwrap()
            .apply_cnot(0, 1)
            .unwrap()
    }

    #[test]
    fn test_pure_state_density() {
        let state = StateVector::zero_state(2).unwrap();
        let dm = DensityMatrix::from_state_vector(&state);
        assert_relative_eq!(dm.trace(), 1.0, epsilon = TOL);
        assert_relative_eq!(dm.purity(), 1.0, epsilon = TOL);
    }

    #[test]
    fn test_bell_reduced_qubit_is_maximally_mixed() {
        let reduced = reduced_qubit_density(&bell_pair(), 0).unwrap();
        assert_eq!(reduced.dimension(), 2);
        assert_relative_eq!(reduced.trace(), 1.0, epsilon = TOL);
        assert_relative_eq!(reduced.purity(), 0.5, epsilon = TOL);
        assert_relative_eq!(reduced.get(0, 0).re, 0.5, epsilon = TOL);
        assert_relative_eq!(reduced.get(0, 1).norm(), 0.0, epsilon = TOL);
    }

    #[test]
    fn test_bell_entropy_is_one_bit() {
        let entropy = entanglement_entropy_first(&bell_pair()).unwrap();
        assert_relative_eq!(entropy, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_product_state_entropy_is_zero() {
        let state = StateVector::zero_state(2)
            .unwrap()
            .apply_hadamard(0)
            .unwrap()
            .apply_hadamard(1)
            .unwrap();
        let entropy = entanglement_entropy_first(&state).unwrap();
        assert_relative_eq!(entropy, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_single_qubit_entropy_is_zero() {
        let state = StateVector::zero_state(1).unwrap().apply_hadamard(0).unwrap();
        assert_relative_eq!(
            entanglement_entropy_first(&state).unwrap(),
            0.0,
            epsilon = TOL
        );
    }

    #[test]
    fn test_eigenvalues_of_mixed_qubit() {
        let reduced = reduced_qubit_density(&bell_pair(), 1).unwrap();
        let eigenvalues = reduced.eigenvalues_2x2().unwrap();
        assert_relative_eq!(eigenvalues[0], 0.5, epsilon = TOL);
        assert_relative_eq!(eigenvalues[1], 0.5, epsilon = TOL);
    }

    #[test]
    fn test_eigenvalues_rejects_large_matrices() {
        let dm = DensityMatrix::from_state_vector(&bell_pair());
        assert!(matches!(
            dm.eigenvalues_2x2(),
            Err(StateError::UnsupportedDimension { dimension: 4 })
        ));
    }

    #[test]
    fn test_partial_trace_must_leave_a_qubit() {
        let dm = DensityMatrix::from_state_vector(&bell_pair());
        assert!(matches!(
            dm.partial_trace(&[0, 1]),
            Err(StateError::EmptyPartialTrace)
        ));
    }
}
