//! Single-qubit fast path
//!
//! [`Qubit`] holds one normalized pair `(α, β)` and updates it in place with
//! closed-form gate formulas. It is independent of [`Register`](crate::Register)
//! and has no measurement operation; lift it into a register with
//! [`Register::from_qubits`](crate::Register::from_qubits) to measure.
//!
//! # Example
//!
//! ```
//! use svsim_state::Qubit;
//!
//! let mut q = Qubit::zero();
//! q.h();
//! assert!((q.prob0() - 0.5).abs() < 1e-12);
//!
//! q.h();
//! assert!((q.prob0() - 1.0).abs() < 1e-12);
//! ```

use crate::amplitude::Amplitude;
use crate::error::{Result, StateError};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;
use svsim_gates::{matrices, Matrix2};

/// A single normalized qubit `α|0⟩ + β|1⟩`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Qubit {
    alpha: Amplitude,
    beta: Amplitude,
}

impl Qubit {
    /// Create a qubit from two amplitudes, normalizing them
    ///
    /// # Errors
    /// Returns [`StateError::InvalidState`] when both amplitudes are zero.
    pub fn new(alpha: Amplitude, beta: Amplitude) -> Result<Self> {
        let norm = (alpha.norm_sqr() + beta.norm_sqr()).sqrt();
        if norm == 0.0 || !norm.is_finite() {
            return Err(StateError::InvalidState);
        }
        Ok(Self {
            alpha: alpha / norm,
            beta: beta / norm,
        })
    }

    /// |0⟩
    pub fn zero() -> Self {
        Self {
            alpha: Amplitude::new(1.0, 0.0),
            beta: Amplitude::new(0.0, 0.0),
        }
    }

    /// |1⟩
    pub fn one() -> Self {
        Self {
            alpha: Amplitude::new(0.0, 0.0),
            beta: Amplitude::new(1.0, 0.0),
        }
    }

    /// |+⟩ = (|0⟩ + |1⟩)/√2
    pub fn plus() -> Self {
        Self {
            alpha: Amplitude::new(FRAC_1_SQRT_2, 0.0),
            beta: Amplitude::new(FRAC_1_SQRT_2, 0.0),
        }
    }

    /// |−⟩ = (|0⟩ − |1⟩)/√2
    pub fn minus() -> Self {
        Self {
            alpha: Amplitude::new(FRAC_1_SQRT_2, 0.0),
            beta: Amplitude::new(-FRAC_1_SQRT_2, 0.0),
        }
    }

    #[inline]
    pub fn alpha(&self) -> Amplitude {
        self.alpha
    }

    #[inline]
    pub fn beta(&self) -> Amplitude {
        self.beta
    }

    /// Probability of reading 0
    #[inline]
    pub fn prob0(&self) -> f64 {
        self.alpha.norm_sqr()
    }

    /// Probability of reading 1
    #[inline]
    pub fn prob1(&self) -> f64 {
        self.beta.norm_sqr()
    }

    /// Apply an arbitrary 2×2 matrix
    ///
    /// The matrix is expected to be unitary; no renormalization happens here.
    #[inline]
    pub fn apply(&mut self, m: &Matrix2) -> &mut Self {
        let (a, b) = (self.alpha, self.beta);
        self.alpha = m[0][0] * a + m[0][1] * b;
        self.beta = m[1][0] * a + m[1][1] * b;
        self
    }

    /// Pauli-X: (α, β) → (β, α)
    pub fn x(&mut self) -> &mut Self {
        std::mem::swap(&mut self.alpha, &mut self.beta);
        self
    }

    /// Pauli-Y: (α, β) → (−iβ, iα)
    pub fn y(&mut self) -> &mut Self {
        let i = Amplitude::i();
        let (a, b) = (self.alpha, self.beta);
        self.alpha = -i * b;
        self.beta = i * a;
        self
    }

    /// Pauli-Z: (α, β) → (α, −β)
    pub fn z(&mut self) -> &mut Self {
        self.beta = -self.beta;
        self
    }

    /// Hadamard: (α, β) → ((α+β)/√2, (α−β)/√2)
    pub fn h(&mut self) -> &mut Self {
        let (a, b) = (self.alpha, self.beta);
        self.alpha = (a + b) * FRAC_1_SQRT_2;
        self.beta = (a - b) * FRAC_1_SQRT_2;
        self
    }

    /// S: β → iβ
    pub fn s(&mut self) -> &mut Self {
        self.beta *= Amplitude::i();
        self
    }

    /// S†: β → −iβ
    pub fn sdg(&mut self) -> &mut Self {
        self.beta *= -Amplitude::i();
        self
    }

    /// T: β → e^(iπ/4)β
    pub fn t(&mut self) -> &mut Self {
        self.beta *= Amplitude::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2);
        self
    }

    /// T†: β → e^(−iπ/4)β
    pub fn tdg(&mut self) -> &mut Self {
        self.beta *= Amplitude::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2);
        self
    }

    /// P(φ): β → e^(iφ)β
    pub fn phase(&mut self, phi: f64) -> &mut Self {
        self.beta *= Amplitude::from_polar(1.0, phi);
        self
    }

    pub fn rx(&mut self, theta: f64) -> &mut Self {
        self.apply(&matrices::rotation_x(theta))
    }

    pub fn ry(&mut self, theta: f64) -> &mut Self {
        self.apply(&matrices::rotation_y(theta))
    }

    pub fn rz(&mut self, theta: f64) -> &mut Self {
        self.apply(&matrices::rotation_z(theta))
    }

    /// Cartesian Bloch-sphere coordinates `(x, y, z)`
    ///
    /// x = 2·Re(α*β), y = 2·Im(α*β), z = |α|² − |β|²
    pub fn bloch_vector(&self) -> (f64, f64, f64) {
        let coherence = self.alpha.conj() * self.beta;
        (
            2.0 * coherence.re,
            2.0 * coherence.im,
            self.prob0() - self.prob1(),
        )
    }
}

impl Default for Qubit {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.4}{:+.4}i)|0⟩ + ({:.4}{:+.4}i)|1⟩",
            self.alpha.re, self.alpha.im, self.beta.re, self.beta.im
        )
    }
}
