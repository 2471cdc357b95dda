//! Bloch sphere projection for single-qubit states
//!
//! Any single-qubit state, pure or reduced, maps to a point inside the
//! unit sphere via the Pauli expectation values:
//!
//! x = ⟨σ_x⟩, y = ⟨σ_y⟩, z = ⟨σ_z⟩
//!
//! Pure states sit on the surface (purity 1); reduced states of entangled
//! systems sit inside (purity < 1, down to 0.5 at the center).

use crate::density::{reduced_qubit_density, DensityMatrix};
use crate::state_vector::StateVector;
use crate::Result;
use num_complex::Complex64;
use std::fmt;

/// A single-qubit state as a point in the Bloch ball
#[derive(Clone, Debug, PartialEq)]
pub struct BlochVector {
    /// ⟨σ_x⟩, in [-1, 1]
    pub x: f64,
    /// ⟨σ_y⟩, in [-1, 1]
    pub y: f64,
    /// ⟨σ_z⟩, in [-1, 1]; +1 is |0⟩, -1 is |1⟩
    pub z: f64,
    /// Tr(ρ²): 1 for pure states, < 1 for reduced/mixed states
    pub purity: f64,
}

impl BlochVector {
    /// Project a pure single-qubit state [α, β] onto the Bloch sphere
    ///
    /// # Example
    /// ```
    /// use circq_state::BlochVector;
    /// use num_complex::Complex64;
    ///
    /// let zero = [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
    /// let bloch = BlochVector::from_state(&zero);
    /// assert!((bloch.z - 1.0).abs() < 1e-10);
    /// ```
    pub fn from_state(state: &[Complex64; 2]) -> Self {
        let alpha = state[0];
        let beta = state[1];

        // x = ⟨σ_x⟩ = 2Re(α* β)
        // y = ⟨σ_y⟩ = 2Im(α* β)
        // z = ⟨σ_z⟩ = |α|² - |β|²
        let alpha_conj_beta = alpha.conj() * beta;

        Self {
            x: 2.0 * alpha_conj_beta.re,
            y: 2.0 * alpha_conj_beta.im,
            z: alpha.norm_sqr() - beta.norm_sqr(),
            purity: 1.0,
        }
    }

    /// Bloch coordinates of one qubit of a larger state
    ///
    /// Traces out every other qubit and reads the Pauli expectation
    /// values off the reduced 2x2 density matrix.
    pub fn of_qubit(state: &StateVector, qubit: usize) -> Result<Self> {
        let reduced = reduced_qubit_density(state, qubit)?;
        Ok(Self::from_density(&reduced))
    }

    /// Bloch coordinates from a single-qubit density matrix
    ///
    /// ⟨σ_x⟩ = 2Re(ρ01), ⟨σ_y⟩ = -2Im(ρ01), ⟨σ_z⟩ = ρ00 - ρ11.
    fn from_density(rho: &DensityMatrix) -> Self {
        let rho01 = rho.get(0, 1);
        Self {
            x: 2.0 * rho01.re,
            y: -2.0 * rho01.im,
            z: rho.get(0, 0).re - rho.get(1, 1).re,
            purity: rho.purity(),
        }
    }

    /// Magnitude of the Bloch vector: 1 on the surface, < 1 inside
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Check if this represents a pure state
    pub fn is_pure(&self, tolerance: f64) -> bool {
        (self.purity - 1.0).abs() < tolerance
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.4}, {:.4}, {:.4}) purity {:.4}",
            self.x, self.y, self.z, self.purity
        )
    }
}
