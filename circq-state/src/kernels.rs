//! Scalar gate-application kernels
//!
//! Each kernel mutates an amplitude slice in place. The convention is
//! fixed throughout the crate: qubit `q` is bit `q` of the basis-state
//! index (qubit 0 = least significant bit).
//!
//! Single-qubit gates pair up basis states differing only in the target
//! bit and apply the 2x2 matrix to each pair; two-qubit gates gather the
//! four basis states spanned by the two bits. Every kernel is `O(2^n)`.

use num_complex::Complex64;

/// Apply a 2x2 unitary to qubit `qubit`
///
/// Pairs basis indices `(i, i | 1<<qubit)` and multiplies each pair by
/// the matrix.
pub fn apply_single_qubit_gate(
    state: &mut [Complex64],
    matrix: &[[Complex64; 2]; 2],
    qubit: usize,
) {
    let qubit_mask = 1usize << qubit;

    let m00 = matrix[0][0];
    let m01 = matrix[0][1];
    let m10 = matrix[1][0];
    let m11 = matrix[1][1];

    for i in 0..state.len() {
        // Process each pair once, from its low member
        if i & qubit_mask != 0 {
            continue;
        }
        let j = i | qubit_mask;

        let amp0 = state[i];
        let amp1 = state[j];

        state[i] = m00 * amp0 + m01 * amp1;
        state[j] = m10 * amp0 + m11 * amp1;
    }
}

/// Apply a 4x4 unitary to the qubit pair `(high, low)`
///
/// The matrix acts on the local basis index `(bit(high) << 1) | bit(low)`,
/// so for controlled gates `high` is the control.
pub fn apply_two_qubit_gate(
    state: &mut [Complex64],
    matrix: &[Complex64; 16],
    high: usize,
    low: usize,
) {
    let high_mask = 1usize << high;
    let low_mask = 1usize << low;

    for base in 0..state.len() {
        // Visit each 4-amplitude group once, from its 00 member
        if base & high_mask != 0 || base & low_mask != 0 {
            continue;
        }

        let idx = [
            base,
            base | low_mask,
            base | high_mask,
            base | high_mask | low_mask,
        ];
        let amps = [state[idx[0]], state[idx[1]], state[idx[2]], state[idx[3]]];

        for row in 0..4 {
            let mut sum = Complex64::new(0.0, 0.0);
            for col in 0..4 {
                sum += matrix[row * 4 + col] * amps[col];
            }
            state[idx[row]] = sum;
        }
    }
}

/// Apply a CNOT gate
///
/// For every basis index with the control bit set, swaps the amplitude
/// with the index obtained by flipping the target bit.
pub fn apply_cnot(state: &mut [Complex64], control: usize, target: usize) {
    let control_mask = 1usize << control;
    let target_mask = 1usize << target;

    for i in 0..state.len() {
        if i & control_mask != 0 && i & target_mask == 0 {
            state.swap(i, i | target_mask);
        }
    }
}

/// Apply a CZ gate (phase-flip |11⟩)
pub fn apply_cz(state: &mut [Complex64], qubit_a: usize, qubit_b: usize) {
    let mask = (1usize << qubit_a) | (1usize << qubit_b);

    for (i, amp) in state.iter_mut().enumerate() {
        if i & mask == mask {
            *amp = -*amp;
        }
    }
}

/// Apply a controlled phase rotation (e^(iθ) on |11⟩)
pub fn apply_controlled_phase(
    state: &mut [Complex64],
    control: usize,
    target: usize,
    theta: f64,
) {
    let mask = (1usize << control) | (1usize << target);
    let phase = Complex64::from_polar(1.0, theta);

    for (i, amp) in state.iter_mut().enumerate() {
        if i & mask == mask {
            *amp *= phase;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

    fn hadamard() -> [[Complex64; 2]; 2] {
        [
            [
                Complex64::new(INV_SQRT2, 0.0),
                Complex64::new(INV_SQRT2, 0.0),
            ],
            [
                Complex64::new(INV_SQRT2, 0.0),
                Complex64::new(-INV_SQRT2, 0.0),
            ],
        ]
    }

    fn norm(state: &[Complex64]) -> f64 {
        state.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt()
    }

    #[test]
    fn test_hadamard_on_zero() {
        let mut state = vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
        apply_single_qubit_gate(&mut state, &hadamard(), 0);
        assert_relative_eq!(state[0].re, INV_SQRT2, epsilon = 1e-12);
        assert_relative_eq!(state[1].re, INV_SQRT2, epsilon = 1e-12);
        assert_relative_eq!(norm(&state), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cnot_flips_target_when_control_set() {
        // |10⟩ with qubit 1 as control (bit 1 set -> index 2)
        let mut state = vec![Complex64::new(0.0, 0.0); 4];
        state[2] = Complex64::new(1.0, 0.0);
        apply_cnot(&mut state, 1, 0);
        assert_relative_eq!(state[3].re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(state[2].norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cnot_leaves_unset_control_alone() {
        let mut state = vec![Complex64::new(0.0, 0.0); 4];
        state[1] = Complex64::new(1.0, 0.0); // |01⟩, control qubit 1 unset
        apply_cnot(&mut state, 1, 0);
        assert_relative_eq!(state[1].re, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cz_flips_phase_of_11() {
        let amp = Complex64::new(0.5, 0.0);
        let mut state = vec![amp; 4];
        apply_cz(&mut state, 0, 1);
        assert_relative_eq!(state[3].re, -0.5, epsilon = 1e-12);
        assert_relative_eq!(state[0].re, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_controlled_phase_quarter_turn() {
        let amp = Complex64::new(0.5, 0.0);
        let mut state = vec![amp; 4];
        apply_controlled_phase(&mut state, 0, 1, std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(state[3].im, 0.5, epsilon = 1e-12);
        assert_relative_eq!(state[3].re, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_two_qubit_gate_matches_cnot() {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        // CNOT with the high qubit as control
        let cnot: [Complex64; 16] = [
            one, zero, zero, zero, //
            zero, one, zero, zero, //
            zero, zero, zero, one, //
            zero, zero, one, zero,
        ];

        let mut a = vec![zero; 8];
        a[0b110] = one;
        let mut b = a.clone();

        apply_two_qubit_gate(&mut a, &cnot, 2, 1);
        apply_cnot(&mut b, 2, 1);

        for (x, y) in a.iter().zip(b.iter()) {
            assert_relative_eq!((x - y).norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_norm_preserved_by_gate_sequences() {
        let mut state = vec![Complex64::new(0.0, 0.0); 8];
        state[0] = Complex64::new(1.0, 0.0);

        apply_single_qubit_gate(&mut state, &hadamard(), 0);
        apply_cnot(&mut state, 0, 1);
        apply_single_qubit_gate(&mut state, &hadamard(), 2);
        apply_cz(&mut state, 1, 2);
        apply_controlled_phase(&mut state, 0, 2, 0.3);

        assert_relative_eq!(norm(&state), 1.0, epsilon = 1e-10);
    }
}
