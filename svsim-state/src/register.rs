//! State-vector register
//!
//! A [`Register`] owns the `2^n` complex amplitudes of an `n`-qubit system.
//! Bit `k` of a basis index encodes qubit `k`, so `|q2 q1 q0⟩ = |011⟩` lives at
//! index 3 with qubits 0 and 1 set.
//!
//! Gates are applied in place by the kernels in [`crate::kernels`]. Every
//! public operation bounds-checks its qubit indices first, so a bad index is a
//! [`StateError`] rather than silent out-of-range arithmetic.

use crate::amplitude::{self, Amplitude, DISPLAY_THRESHOLD};
use crate::error::{Result, StateError};
use crate::kernels;
use crate::qubit::Qubit;
use std::fmt;
use svsim_gates::{matrices, Matrix2};
use tracing::trace;

/// Largest register width accepted by the constructors
pub const MAX_QUBITS: usize = 30;

/// Dense state vector of an `n`-qubit system
///
/// # Example
///
/// ```
/// use svsim_state::Register;
/// use svsim_gates::matrices::HADAMARD;
///
/// // Bell state (|00⟩ + |11⟩)/√2
/// let mut reg = Register::zero_state(2).unwrap();
/// reg.apply_gate(0, &HADAMARD).unwrap();
/// reg.apply_cnot(0, 1).unwrap();
///
/// assert!((reg.probability(0b00).unwrap() - 0.5).abs() < 1e-10);
/// assert!((reg.probability(0b11).unwrap() - 0.5).abs() < 1e-10);
/// assert!(reg.probability(0b01).unwrap() < 1e-10);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Register {
    num_qubits: usize,
    amplitudes: Vec<Amplitude>,
}

impl Register {
    /// Build a register from an explicit amplitude vector, normalizing it
    ///
    /// # Errors
    /// - [`StateError::InvalidLength`] if the length is not `2^n`
    /// - [`StateError::TooManyQubits`] if `n` exceeds [`MAX_QUBITS`]
    /// - [`StateError::InvalidState`] if every amplitude is zero
    pub fn new(mut amplitudes: Vec<Amplitude>) -> Result<Self> {
        let length = amplitudes.len();
        if !length.is_power_of_two() {
            return Err(StateError::InvalidLength { length });
        }

        let num_qubits = length.trailing_zeros() as usize;
        if num_qubits > MAX_QUBITS {
            return Err(StateError::TooManyQubits {
                num_qubits,
                max: MAX_QUBITS,
            });
        }

        amplitude::normalize(&mut amplitudes)?;
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// |0…0⟩ on `num_qubits` qubits
    pub fn zero_state(num_qubits: usize) -> Result<Self> {
        Self::basis_state(num_qubits, 0)
    }

    /// Computational basis state `|index⟩`
    pub fn basis_state(num_qubits: usize, index: usize) -> Result<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(StateError::TooManyQubits {
                num_qubits,
                max: MAX_QUBITS,
            });
        }

        let dimension = 1usize << num_qubits;
        if index >= dimension {
            return Err(StateError::IndexOutOfRange { index, dimension });
        }

        let mut amplitudes = vec![Amplitude::new(0.0, 0.0); dimension];
        amplitudes[index] = Amplitude::new(1.0, 0.0);
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Product state `q_{n-1} ⊗ … ⊗ q_0`, with `qubits[k]` mapped to bit `k`
    pub fn from_qubits(qubits: &[Qubit]) -> Result<Self> {
        let num_qubits = qubits.len();
        if num_qubits > MAX_QUBITS {
            return Err(StateError::TooManyQubits {
                num_qubits,
                max: MAX_QUBITS,
            });
        }

        let mut amplitudes = vec![Amplitude::new(1.0, 0.0)];
        for (k, qubit) in qubits.iter().enumerate() {
            let half = 1usize << k;
            amplitudes.resize(half << 1, Amplitude::new(0.0, 0.0));
            for idx in 0..half {
                let base = amplitudes[idx];
                amplitudes[idx] = base * qubit.alpha();
                amplitudes[idx | half] = base * qubit.beta();
            }
        }

        Self::new(amplitudes)
    }

    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of amplitudes, `2^n`
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Read-only view of the amplitude vector
    #[inline]
    pub fn amplitudes(&self) -> &[Amplitude] {
        &self.amplitudes
    }

    /// Amplitude of basis state `index`
    pub fn amplitude(&self, index: usize) -> Result<Amplitude> {
        self.check_index(index)?;
        Ok(self.amplitudes[index])
    }

    /// Probability `|a_index|²` of basis state `index`
    pub fn probability(&self, index: usize) -> Result<f64> {
        self.check_index(index)?;
        Ok(amplitude::probability_of(self.amplitudes[index]))
    }

    /// Probabilities of every basis state
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Marginal probability that `qubit` reads 1
    pub fn qubit_probability(&self, qubit: usize) -> Result<f64> {
        self.check_qubit(qubit)?;
        let mask = 1usize << qubit;
        Ok(self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(idx, _)| idx & mask != 0)
            .map(|(_, a)| a.norm_sqr())
            .sum())
    }

    /// Σ |a_i|²
    pub fn total_probability(&self) -> f64 {
        amplitude::total_probability(&self.amplitudes)
    }

    /// Whether the total probability is within `tolerance` of 1
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.total_probability() - 1.0).abs() <= tolerance
    }

    /// Rescale to unit total probability
    pub fn normalize(&mut self) -> Result<()> {
        amplitude::normalize(&mut self.amplitudes)
    }

    /// Return to |0…0⟩
    pub fn reset(&mut self) {
        self.amplitudes.fill(Amplitude::new(0.0, 0.0));
        self.amplitudes[0] = Amplitude::new(1.0, 0.0);
    }

    /// ⟨self|other⟩
    pub fn inner_product(&self, other: &Register) -> Result<Amplitude> {
        if self.dimension() != other.dimension() {
            return Err(StateError::DimensionMismatch {
                expected: self.dimension(),
                actual: other.dimension(),
            });
        }
        Ok(self
            .amplitudes
            .iter()
            .zip(other.amplitudes.iter())
            .map(|(a, b)| a.conj() * b)
            .sum())
    }

    /// |⟨self|other⟩|², insensitive to global phase
    pub fn fidelity(&self, other: &Register) -> Result<f64> {
        Ok(self.inner_product(other)?.norm_sqr())
    }

    // ===== Single-qubit gates =====

    /// Apply a 2×2 unitary to `target`
    ///
    /// Uses the stride-pair decomposition: O(2^n), each amplitude touched once.
    pub fn apply_gate(&mut self, target: usize, matrix: &Matrix2) -> Result<()> {
        self.check_qubit(target)?;
        trace!(target, "apply single-qubit gate");
        kernels::apply_single_qubit(&mut self.amplitudes, matrix, target);
        Ok(())
    }

    /// Apply `diag(d0, d1)` to `target`
    pub fn apply_diagonal(&mut self, target: usize, d0: Amplitude, d1: Amplitude) -> Result<()> {
        self.check_qubit(target)?;
        trace!(target, "apply diagonal gate");
        kernels::apply_diagonal(&mut self.amplitudes, d0, d1, target);
        Ok(())
    }

    /// Apply the same 2×2 unitary to every qubit
    pub fn apply_all(&mut self, matrix: &Matrix2) {
        for target in 0..self.num_qubits {
            kernels::apply_single_qubit(&mut self.amplitudes, matrix, target);
        }
    }

    /// Apply a 2×2 operator that need not be unitary, then renormalize
    ///
    /// Used for Kraus-style maps such as amplitude damping.
    ///
    /// # Errors
    /// Returns [`StateError::InvalidState`] if the operator annihilates the state.
    pub fn apply_operator(&mut self, target: usize, operator: &Matrix2) -> Result<()> {
        self.check_qubit(target)?;
        trace!(target, "apply non-unitary operator");
        kernels::apply_single_qubit(&mut self.amplitudes, operator, target);
        self.normalize()
    }

    /// Negate the amplitude of basis state `index`
    pub fn apply_phase_flip(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.amplitudes[index] = -self.amplitudes[index];
        Ok(())
    }

    /// Negate every amplitude whose index satisfies `predicate`
    ///
    /// Returns how many amplitudes were flipped.
    pub fn apply_phase_flip_where<F>(&mut self, predicate: F) -> usize
    where
        F: FnMut(usize) -> bool,
    {
        kernels::negate_where(&mut self.amplitudes, predicate)
    }

    // ===== Multi-qubit gates =====

    /// CNOT: toggle `target` where `control` is set
    pub fn apply_cnot(&mut self, control: usize, target: usize) -> Result<()> {
        self.check_distinct("CNOT", &[control, target])?;
        trace!(control, target, "apply CNOT");
        kernels::apply_multi_controlled_x(&mut self.amplitudes, 1 << control, target);
        Ok(())
    }

    /// CZ: negate amplitudes where both qubits are set
    pub fn apply_cz(&mut self, control: usize, target: usize) -> Result<()> {
        self.check_distinct("CZ", &[control, target])?;
        trace!(control, target, "apply CZ");
        kernels::apply_cz(&mut self.amplitudes, control, target);
        Ok(())
    }

    /// CY: Pauli-Y on `target` where `control` is set
    pub fn apply_cy(&mut self, control: usize, target: usize) -> Result<()> {
        self.check_distinct("CY", &[control, target])?;
        trace!(control, target, "apply CY");
        kernels::apply_controlled(&mut self.amplitudes, &matrices::PAULI_Y, 1 << control, target);
        Ok(())
    }

    /// Controlled-U: `matrix` on `target` where `control` is set
    pub fn apply_controlled(&mut self, control: usize, target: usize, matrix: &Matrix2) -> Result<()> {
        self.check_distinct("controlled-U", &[control, target])?;
        trace!(control, target, "apply controlled-U");
        kernels::apply_controlled(&mut self.amplitudes, matrix, 1 << control, target);
        Ok(())
    }

    /// SWAP the states of two qubits
    pub fn apply_swap(&mut self, qubit1: usize, qubit2: usize) -> Result<()> {
        self.check_distinct("SWAP", &[qubit1, qubit2])?;
        trace!(qubit1, qubit2, "apply SWAP");
        kernels::apply_controlled_swap(&mut self.amplitudes, 0, qubit1, qubit2);
        Ok(())
    }

    /// Toffoli (CCX): toggle `target` only where both controls are set
    pub fn apply_toffoli(&mut self, control1: usize, control2: usize, target: usize) -> Result<()> {
        self.check_distinct("Toffoli", &[control1, control2, target])?;
        trace!(control1, control2, target, "apply Toffoli");
        let controls = (1 << control1) | (1 << control2);
        kernels::apply_multi_controlled_x(&mut self.amplitudes, controls, target);
        Ok(())
    }

    /// Fredkin (CSWAP): swap `target1`/`target2` where `control` is set
    pub fn apply_fredkin(&mut self, control: usize, target1: usize, target2: usize) -> Result<()> {
        self.check_distinct("Fredkin", &[control, target1, target2])?;
        trace!(control, target1, target2, "apply Fredkin");
        kernels::apply_controlled_swap(&mut self.amplitudes, 1 << control, target1, target2);
        Ok(())
    }

    // ===== Validation =====

    /// Fails with [`StateError::QubitOutOfRange`] unless `qubit < num_qubits`
    pub fn check_qubit(&self, qubit: usize) -> Result<()> {
        if qubit >= self.num_qubits {
            return Err(StateError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.dimension() {
            return Err(StateError::IndexOutOfRange {
                index,
                dimension: self.dimension(),
            });
        }
        Ok(())
    }

    fn check_distinct(&self, gate: &'static str, qubits: &[usize]) -> Result<()> {
        for (i, &qubit) in qubits.iter().enumerate() {
            self.check_qubit(qubit)?;
            if qubits[..i].contains(&qubit) {
                return Err(StateError::DuplicateQubit { qubit, gate });
            }
        }
        Ok(())
    }

    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Amplitude] {
        &mut self.amplitudes
    }
}

impl fmt::Display for Register {
    /// Lists basis states above [`DISPLAY_THRESHOLD`], most significant qubit first
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.num_qubits.max(1);
        for (idx, amp) in self.amplitudes.iter().enumerate() {
            let probability = amp.norm_sqr();
            if probability > DISPLAY_THRESHOLD {
                writeln!(
                    f,
                    "|{:0width$b}⟩: {:.6}{:+.6}i (p = {:.6})",
                    idx,
                    amp.re,
                    amp.im,
                    probability,
                    width = width
                )?;
            }
        }
        Ok(())
    }
}
