//! Dense state-vector representation
//!
//! The amplitude at index `i` belongs to the basis state whose bits are
//! the qubit values, with qubit 0 as the least significant bit.
//! Bitstrings render MSB-first, so qubit 0 is the rightmost character.
//!
//! Gate application is functional: each `apply_*` borrows the state and
//! returns a fresh one, so multiple simulations can branch from the same
//! prior state without interference.

use crate::error::StateError;
use crate::kernels;
use crate::Result;
use num_complex::Complex64;
use std::collections::HashMap;

/// Hard cap on state-vector size
///
/// 24 qubits is 16M amplitudes (256 MiB of `Complex64`); allocating
/// beyond that from user-supplied circuits is refused.
pub const MAX_QUBITS: usize = 24;

/// Dense quantum state vector
///
/// # Example
/// ```
/// use circq_state::StateVector;
///
/// let state = StateVector::zero_state(2).unwrap();
/// assert_eq!(state.num_qubits(), 2);
/// assert_eq!(state.dimension(), 4);
/// assert!(state.is_normalized(1e-10));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    fn check_size(num_qubits: usize) -> Result<usize> {
        if num_qubits == 0 {
            return Err(StateError::EmptyRegister);
        }
        if num_qubits > MAX_QUBITS {
            return Err(StateError::TooManyQubits {
                requested: num_qubits,
                max: MAX_QUBITS,
            });
        }
        Ok(1usize << num_qubits)
    }

    /// Create the all-zero basis state |0...0⟩
    pub fn zero_state(num_qubits: usize) -> Result<Self> {
        let dimension = Self::check_size(num_qubits)?;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dimension];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Create the uniform superposition (every amplitude `1/√2ⁿ`)
    pub fn uniform_superposition(num_qubits: usize) -> Result<Self> {
        let dimension = Self::check_size(num_qubits)?;
        let amp = Complex64::new(1.0 / (dimension as f64).sqrt(), 0.0);
        Ok(Self {
            num_qubits,
            amplitudes: vec![amp; dimension],
        })
    }

    /// Create a state from raw amplitude data
    ///
    /// # Errors
    /// Returns error if `amplitudes.len() != 2^num_qubits`.
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        let dimension = Self::check_size(num_qubits)?;
        if amplitudes.len() != dimension {
            return Err(StateError::DimensionMismatch {
                expected: dimension,
                actual: amplitudes.len(),
            });
        }
        Ok(Self {
            num_qubits,
            amplitudes: amplitudes.to_vec(),
        })
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the state dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Get a reference to the amplitudes
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Get a mutable reference to the amplitudes
    ///
    /// Used by the simulator's replay loop together with [`kernels`];
    /// callers are responsible for keeping the state normalized.
    #[inline]
    pub fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// Compute the L2 norm of the state vector
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Check if the state is normalized (|norm - 1| < epsilon)
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }

    /// Probability of measuring basis state `index`
    #[inline]
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes[index].norm_sqr()
    }

    /// All basis-state probabilities, indexed by basis index
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Render a basis index as a bitstring (qubit 0 rightmost)
    pub fn bitstring(&self, index: usize) -> String {
        format!("{:0width$b}", index, width = self.num_qubits)
    }

    /// Probabilities of the reachable basis states, keyed by bitstring
    ///
    /// Basis states with negligible probability are omitted.
    pub fn basis_probabilities(&self) -> HashMap<String, f64> {
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(_, a)| a.norm_sqr() > 1e-12)
            .map(|(i, a)| (self.bitstring(i), a.norm_sqr()))
            .collect()
    }

    fn check_qubit(&self, qubit: usize) -> Result<()> {
        if qubit >= self.num_qubits {
            return Err(StateError::InvalidQubitIndex {
                index: qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    /// Apply a 2x2 unitary to `qubit`, returning the new state
    pub fn apply_unitary(&self, matrix: &[[Complex64; 2]; 2], qubit: usize) -> Result<Self> {
        self.check_qubit(qubit)?;
        let mut next = self.clone();
        kernels::apply_single_qubit_gate(next.amplitudes_mut(), matrix, qubit);
        Ok(next)
    }

    /// Apply a 4x4 unitary to the pair `(high, low)`, returning the new
    /// state
    pub fn apply_two_qubit_unitary(
        &self,
        matrix: &[Complex64; 16],
        high: usize,
        low: usize,
    ) -> Result<Self> {
        self.check_qubit(high)?;
        self.check_qubit(low)?;
        if high == low {
            return Err(StateError::InvalidQubitIndex {
                index: high,
                num_qubits: self.num_qubits,
            });
        }
        let mut next = self.clone();
        kernels::apply_two_qubit_gate(next.amplitudes_mut(), matrix, high, low);
        Ok(next)
    }

    /// Apply a Hadamard gate to `qubit`
    pub fn apply_hadamard(&self, qubit: usize) -> Result<Self> {
        const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;
        let h = [
            [
                Complex64::new(INV_SQRT2, 0.0),
                Complex64::new(INV_SQRT2, 0.0),
            ],
            [
                Complex64::new(INV_SQRT2, 0.0),
                Complex64::new(-INV_SQRT2, 0.0),
            ],
        ];
        self.apply_unitary(&h, qubit)
    }

    /// Apply a Pauli-X (bit flip) gate to `qubit`
    pub fn apply_pauli_x(&self, qubit: usize) -> Result<Self> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        self.apply_unitary(&[[zero, one], [one, zero]], qubit)
    }

    /// Apply a Pauli-Y gate to `qubit`
    pub fn apply_pauli_y(&self, qubit: usize) -> Result<Self> {
        let zero = Complex64::new(0.0, 0.0);
        let i = Complex64::new(0.0, 1.0);
        self.apply_unitary(&[[zero, -i], [i, zero]], qubit)
    }

    /// Apply a Pauli-Z (phase flip) gate to `qubit`
    pub fn apply_pauli_z(&self, qubit: usize) -> Result<Self> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        self.apply_unitary(&[[one, zero], [zero, -one]], qubit)
    }

    /// Apply an S gate to `qubit`
    pub fn apply_s(&self, qubit: usize) -> Result<Self> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::new(0.0, 1.0);
        self.apply_unitary(&[[one, zero], [zero, i]], qubit)
    }

    /// Apply a T gate to `qubit`
    pub fn apply_t(&self, qubit: usize) -> Result<Self> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let phase = Complex64::from_polar(1.0, std::f64::consts::FRAC_PI_4);
        self.apply_unitary(&[[one, zero], [zero, phase]], qubit)
    }

    /// Apply a CNOT gate, returning the new state
    pub fn apply_cnot(&self, control: usize, target: usize) -> Result<Self> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(StateError::InvalidQubitIndex {
                index: control,
                num_qubits: self.num_qubits,
            });
        }
        let mut next = self.clone();
        kernels::apply_cnot(next.amplitudes_mut(), control, target);
        Ok(next)
    }

    /// Apply a CZ gate, returning the new state
    pub fn apply_cz(&self, qubit_a: usize, qubit_b: usize) -> Result<Self> {
        self.check_qubit(qubit_a)?;
        self.check_qubit(qubit_b)?;
        if qubit_a == qubit_b {
            return Err(StateError::InvalidQubitIndex {
                index: qubit_a,
                num_qubits: self.num_qubits,
            });
        }
        let mut next = self.clone();
        kernels::apply_cz(next.amplitudes_mut(), qubit_a, qubit_b);
        Ok(next)
    }

    /// Apply a controlled phase rotation, returning the new state
    pub fn apply_controlled_phase(
        &self,
        control: usize,
        target: usize,
        theta: f64,
    ) -> Result<Self> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(StateError::InvalidQubitIndex {
                index: control,
                num_qubits: self.num_qubits,
            });
        }
        let mut next = self.clone();
        kernels::apply_controlled_phase(next.amplitudes_mut(), control, target, theta);
        Ok(next)
    }
}
