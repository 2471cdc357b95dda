//! Standard quantum gate set with pre-computed matrices

use crate::gate::Gate;
use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Hadamard gate matrix
/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: [[Complex64; 2]; 2] = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

/// Pauli-X gate matrix (NOT gate)
pub const PAULI_X: [[Complex64; 2]; 2] = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli-Y gate matrix
pub const PAULI_Y: [[Complex64; 2]; 2] = [
    [ZERO, Complex64::new(0.0, -1.0)],
    [I, ZERO],
];

/// Pauli-Z gate matrix
pub const PAULI_Z: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, NEG_ONE]];

/// S gate matrix (phase gate, √Z)
pub const S_GATE: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, I]];

fn flatten2(m: &[[Complex64; 2]; 2]) -> Vec<Complex64> {
    m.iter().flatten().copied().collect()
}

/// Hadamard gate
///
/// Creates superposition: H|0⟩ = (|0⟩ + |1⟩)/√2
#[derive(Debug, Clone, Copy)]
pub struct Hadamard;

impl Gate for Hadamard {
    fn name(&self) -> &str {
        "H"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(flatten2(&HADAMARD))
    }
}

/// Pauli-X gate (NOT gate)
///
/// Bit flip: X|0⟩ = |1⟩, X|1⟩ = |0⟩
#[derive(Debug, Clone, Copy)]
pub struct PauliX;

impl Gate for PauliX {
    fn name(&self) -> &str {
        "X"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(flatten2(&PAULI_X))
    }
}

/// Pauli-Y gate
#[derive(Debug, Clone, Copy)]
pub struct PauliY;

impl Gate for PauliY {
    fn name(&self) -> &str {
        "Y"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(flatten2(&PAULI_Y))
    }
}

/// Pauli-Z gate
///
/// Phase flip: Z|0⟩ = |0⟩, Z|1⟩ = -|1⟩
#[derive(Debug, Clone, Copy)]
pub struct PauliZ;

impl Gate for PauliZ {
    fn name(&self) -> &str {
        "Z"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(flatten2(&PAULI_Z))
    }
}

/// S gate (phase gate, √Z)
#[derive(Debug, Clone, Copy)]
pub struct SGate;

impl Gate for SGate {
    fn name(&self) -> &str {
        "S"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(flatten2(&S_GATE))
    }
}

/// T gate (π/8 gate, √S)
#[derive(Debug, Clone, Copy)]
pub struct TGate;

impl Gate for TGate {
    fn name(&self) -> &str {
        "T"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        let phase = Complex64::from_polar(1.0, std::f64::consts::FRAC_PI_4);
        Some(vec![ONE, ZERO, ZERO, phase])
    }
}

/// Controlled-NOT gate
///
/// Flips the target when the control is |1⟩. The control is the first
/// listed qubit.
#[derive(Debug, Clone, Copy)]
pub struct Cnot;

impl Gate for Cnot {
    fn name(&self) -> &str {
        "CNOT"
    }

    fn num_qubits(&self) -> usize {
        2
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        // Basis order |ct⟩ with the control as the high bit
        Some(vec![
            ONE, ZERO, ZERO, ZERO, //
            ZERO, ONE, ZERO, ZERO, //
            ZERO, ZERO, ZERO, ONE, //
            ZERO, ZERO, ONE, ZERO,
        ])
    }
}

/// Controlled-Z gate
///
/// Phase-flips |11⟩; symmetric in its two qubits.
#[derive(Debug, Clone, Copy)]
pub struct Cz;

impl Gate for Cz {
    fn name(&self) -> &str {
        "CZ"
    }

    fn num_qubits(&self) -> usize {
        2
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(vec![
            ONE, ZERO, ZERO, ZERO, //
            ZERO, ONE, ZERO, ZERO, //
            ZERO, ZERO, ONE, ZERO, //
            ZERO, ZERO, ZERO, NEG_ONE,
        ])
    }
}

/// Controlled phase rotation
///
/// Applies e^(iθ) to |11⟩. The workhorse of the quantum Fourier
/// transform ladder.
#[derive(Debug, Clone, Copy)]
pub struct ControlledPhase {
    /// Rotation angle in radians
    pub theta: f64,
}

impl ControlledPhase {
    /// Create a controlled phase rotation by `theta` radians
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl Gate for ControlledPhase {
    fn name(&self) -> &str {
        "CP"
    }

    fn num_qubits(&self) -> usize {
        2
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.theta]
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        let phase = Complex64::from_polar(1.0, self.theta);
        Some(vec![
            ONE, ZERO, ZERO, ZERO, //
            ZERO, ONE, ZERO, ZERO, //
            ZERO, ZERO, ONE, ZERO, //
            ZERO, ZERO, ZERO, phase,
        ])
    }
}

/// Computational basis measurement of one qubit
///
/// Not unitary; has no matrix. The simulator records it but derives
/// statistics from the final distribution rather than collapsing state.
#[derive(Debug, Clone, Copy)]
pub struct Measure;

impl Gate for Measure {
    fn name(&self) -> &str {
        "MEASURE"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn is_unitary(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn is_unitary_2x2(m: &[Complex64]) -> bool {
        // U U† = I
        let mut id = [ZERO; 4];
        for i in 0..2 {
            for j in 0..2 {
                let mut sum = ZERO;
                for k in 0..2 {
                    sum += m[i * 2 + k] * m[j * 2 + k].conj();
                }
                id[i * 2 + j] = sum;
            }
        }
        (id[0] - ONE).norm() < 1e-12
            && id[1].norm() < 1e-12
            && id[2].norm() < 1e-12
            && (id[3] - ONE).norm() < 1e-12
    }

    #[test]
    fn test_single_qubit_gates_unitary() {
        for gate in [
            Box::new(Hadamard) as Box<dyn Gate>,
            Box::new(PauliX),
            Box::new(PauliY),
            Box::new(PauliZ),
            Box::new(SGate),
            Box::new(TGate),
        ] {
            let m = gate.matrix().unwrap();
            assert_eq!(m.len(), 4, "{} matrix size", gate.name());
            assert!(is_unitary_2x2(&m), "{} not unitary", gate.name());
        }
    }

    #[test]
    fn test_hadamard_matrix() {
        let m = Hadamard.matrix().unwrap();
        assert_relative_eq!(m[0].re, INV_SQRT2, epsilon = 1e-12);
        assert_relative_eq!(m[3].re, -INV_SQRT2, epsilon = 1e-12);
    }

    #[test]
    fn test_cnot_permutes_high_control() {
        let m = Cnot.matrix().unwrap();
        assert_eq!(m.len(), 16);
        // |10⟩ -> |11⟩ and |11⟩ -> |10⟩
        assert_eq!(m[2 * 4 + 3], ONE);
        assert_eq!(m[3 * 4 + 2], ONE);
        assert_eq!(m[2 * 4 + 2], ZERO);
    }

    #[test]
    fn test_controlled_phase_parameters() {
        let cp = ControlledPhase::new(std::f64::consts::FRAC_PI_2);
        assert_eq!(cp.parameters(), vec![std::f64::consts::FRAC_PI_2]);
        let m = cp.matrix().unwrap();
        assert_relative_eq!(m[15].im, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_measure_is_not_unitary() {
        assert!(!Measure.is_unitary());
        assert!(Measure.matrix().is_none());
    }
}
