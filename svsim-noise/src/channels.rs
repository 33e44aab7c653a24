//! Noise channels acting on a state-vector register
//!
//! The free functions are the primitive operations. Stochastic channels
//! (depolarizing, bit flip, phase flip, phase damping) sample one Kraus branch
//! per call using the caller's RNG, so averaging over many runs reproduces the
//! channel. Amplitude damping is deterministic: it applies the non-unitary map
//! `[[1, √γ], [0, √(1−γ)]]` and renormalizes.
//!
//! The channel structs wrap the same operations behind [`NoiseChannel`] and
//! also expose their Kraus operators.

use crate::error::{check_probability, Result};
use rand::{Rng, RngCore};
use std::fmt;
use svsim_gates::{adjoint, approx_eq, matrices, multiply, Matrix2};
use svsim_state::{Amplitude, Register};
use tracing::debug;

/// Single-qubit Pauli error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pauli {
    X,
    Y,
    Z,
}

impl Pauli {
    pub fn matrix(&self) -> Matrix2 {
        match self {
            Pauli::X => matrices::PAULI_X,
            Pauli::Y => matrices::PAULI_Y,
            Pauli::Z => matrices::PAULI_Z,
        }
    }
}

/// With probability `p`, apply X, Y or Z (uniformly) to `qubit`
///
/// Returns the Pauli that was applied, if any.
pub fn depolarize<R: Rng + ?Sized>(
    register: &mut Register,
    qubit: usize,
    p: f64,
    rng: &mut R,
) -> Result<Option<Pauli>> {
    check_probability("depolarizing probability", p)?;
    register.check_qubit(qubit)?;

    if rng.gen::<f64>() >= p {
        return Ok(None);
    }

    let pauli = match rng.gen_range(0..3) {
        0 => Pauli::X,
        1 => Pauli::Y,
        _ => Pauli::Z,
    };
    register.apply_gate(qubit, &pauli.matrix())?;
    debug!(qubit, ?pauli, "depolarizing error");
    Ok(Some(pauli))
}

/// Depolarize every qubit independently; returns how many errors fired
pub fn depolarize_all<R: Rng + ?Sized>(register: &mut Register, p: f64, rng: &mut R) -> Result<usize> {
    check_probability("depolarizing probability", p)?;
    let mut errors = 0;
    for qubit in 0..register.num_qubits() {
        if depolarize(register, qubit, p, rng)?.is_some() {
            errors += 1;
        }
    }
    Ok(errors)
}

/// With probability `p`, apply X to `qubit`
pub fn bit_flip<R: Rng + ?Sized>(register: &mut Register, qubit: usize, p: f64, rng: &mut R) -> Result<bool> {
    check_probability("bit-flip probability", p)?;
    register.check_qubit(qubit)?;

    let fired = rng.gen::<f64>() < p;
    if fired {
        register.apply_gate(qubit, &matrices::PAULI_X)?;
        debug!(qubit, "bit-flip error");
    }
    Ok(fired)
}

/// With probability `p`, apply Z to `qubit`
pub fn phase_flip<R: Rng + ?Sized>(register: &mut Register, qubit: usize, p: f64, rng: &mut R) -> Result<bool> {
    check_probability("phase-flip probability", p)?;
    register.check_qubit(qubit)?;

    let fired = rng.gen::<f64>() < p;
    if fired {
        register.apply_diagonal(qubit, Amplitude::new(1.0, 0.0), Amplitude::new(-1.0, 0.0))?;
        debug!(qubit, "phase-flip error");
    }
    Ok(fired)
}

/// The non-unitary relaxation map used by [`amplitude_damping`]
///
/// Each pair gets `a0 += √γ·a1` and `a1 *= √(1−γ)`.
pub fn damping_operator(gamma: f64) -> Matrix2 {
    [
        [Amplitude::new(1.0, 0.0), Amplitude::new(gamma.sqrt(), 0.0)],
        [Amplitude::new(0.0, 0.0), Amplitude::new((1.0 - gamma).sqrt(), 0.0)],
    ]
}

/// Relax `qubit` towards |0⟩ by `gamma`, then renormalize
///
/// With `gamma = 1` the |1⟩ branch of the qubit is emptied. Fails with
/// [`StateError::InvalidState`](svsim_state::StateError::InvalidState) if
/// the map cancels every amplitude, which can only happen at `gamma = 1` for
/// states like |−⟩.
pub fn amplitude_damping(register: &mut Register, qubit: usize, gamma: f64) -> Result<()> {
    check_probability("amplitude damping gamma", gamma)?;
    register.apply_operator(qubit, &damping_operator(gamma))?;
    debug!(qubit, gamma, "amplitude damping");
    Ok(())
}

/// With probability `gamma`, apply a Z phase kick to `qubit`
pub fn phase_damping<R: Rng + ?Sized>(
    register: &mut Register,
    qubit: usize,
    gamma: f64,
    rng: &mut R,
) -> Result<bool> {
    check_probability("phase damping gamma", gamma)?;
    register.check_qubit(qubit)?;

    let fired = rng.gen::<f64>() < gamma;
    if fired {
        register.apply_diagonal(qubit, Amplitude::new(1.0, 0.0), Amplitude::new(-1.0, 0.0))?;
        debug!(qubit, gamma, "phase damping kick");
    }
    Ok(fired)
}

/// Flip a classical measurement result with probability `p`
pub fn readout_error<R: Rng + ?Sized>(result: bool, p: f64, rng: &mut R) -> Result<bool> {
    check_probability("readout error probability", p)?;
    if rng.gen::<f64>() < p {
        debug!(result, "readout error");
        return Ok(!result);
    }
    Ok(result)
}

/// One Kraus operator `K` of a single-qubit channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KrausOperator {
    matrix: Matrix2,
}

impl KrausOperator {
    pub fn new(matrix: Matrix2) -> Self {
        Self { matrix }
    }

    /// `coefficient · matrix`
    pub fn scaled(coefficient: f64, matrix: &Matrix2) -> Self {
        let mut scaled = *matrix;
        for row in scaled.iter_mut() {
            for entry in row.iter_mut() {
                *entry *= coefficient;
            }
        }
        Self { matrix: scaled }
    }

    #[inline]
    pub fn matrix(&self) -> &Matrix2 {
        &self.matrix
    }

    /// Conjugate transpose
    pub fn adjoint(&self) -> Self {
        Self {
            matrix: adjoint(&self.matrix),
        }
    }
}

/// A single-qubit noise channel
///
/// Channels are applied to a state vector by sampling (or, for amplitude
/// damping, by a deterministic non-unitary map), and described exactly by
/// their Kraus operators.
pub trait NoiseChannel: fmt::Debug {
    /// Short identifier, e.g. `"depolarizing"`
    fn name(&self) -> &str;

    /// Kraus operators `{K_i}`; a valid channel has Σ K_i† K_i = I
    fn kraus_operators(&self) -> Vec<KrausOperator>;

    /// Apply one realisation of the channel to `qubit`
    fn apply(&self, register: &mut Register, qubit: usize, rng: &mut dyn RngCore) -> Result<()>;

    fn description(&self) -> String {
        format!("single-qubit {} channel", self.name())
    }

    /// Check the completeness relation Σ K_i† K_i = I within `tolerance`
    fn verify_completeness(&self, tolerance: f64) -> bool {
        let operators = self.kraus_operators();
        if operators.is_empty() {
            return false;
        }

        let zero = Amplitude::new(0.0, 0.0);
        let mut sum = [[zero; 2]; 2];
        for kraus in &operators {
            let product = multiply(kraus.adjoint().matrix(), kraus.matrix());
            for (sum_row, product_row) in sum.iter_mut().zip(product.iter()) {
                for (s, p) in sum_row.iter_mut().zip(product_row.iter()) {
                    *s += p;
                }
            }
        }
        approx_eq(&sum, &matrices::IDENTITY, tolerance)
    }
}

/// Uniform random Pauli error with probability `p`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Depolarizing {
    probability: f64,
}

impl Depolarizing {
    pub fn new(probability: f64) -> Result<Self> {
        check_probability("depolarizing probability", probability)?;
        Ok(Self { probability })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl NoiseChannel for Depolarizing {
    fn name(&self) -> &str {
        "depolarizing"
    }

    fn kraus_operators(&self) -> Vec<KrausOperator> {
        let p = self.probability;
        let error = (p / 3.0).sqrt();
        vec![
            KrausOperator::scaled((1.0 - p).sqrt(), &matrices::IDENTITY),
            KrausOperator::scaled(error, &matrices::PAULI_X),
            KrausOperator::scaled(error, &matrices::PAULI_Y),
            KrausOperator::scaled(error, &matrices::PAULI_Z),
        ]
    }

    fn apply(&self, register: &mut Register, qubit: usize, rng: &mut dyn RngCore) -> Result<()> {
        depolarize(register, qubit, self.probability, rng).map(|_| ())
    }
}

/// X error with probability `p`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitFlip {
    probability: f64,
}

impl BitFlip {
    pub fn new(probability: f64) -> Result<Self> {
        check_probability("bit-flip probability", probability)?;
        Ok(Self { probability })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl NoiseChannel for BitFlip {
    fn name(&self) -> &str {
        "bit_flip"
    }

    fn kraus_operators(&self) -> Vec<KrausOperator> {
        let p = self.probability;
        vec![
            KrausOperator::scaled((1.0 - p).sqrt(), &matrices::IDENTITY),
            KrausOperator::scaled(p.sqrt(), &matrices::PAULI_X),
        ]
    }

    fn apply(&self, register: &mut Register, qubit: usize, rng: &mut dyn RngCore) -> Result<()> {
        bit_flip(register, qubit, self.probability, rng).map(|_| ())
    }
}

/// Z error with probability `p`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseFlip {
    probability: f64,
}

impl PhaseFlip {
    pub fn new(probability: f64) -> Result<Self> {
        check_probability("phase-flip probability", probability)?;
        Ok(Self { probability })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl NoiseChannel for PhaseFlip {
    fn name(&self) -> &str {
        "phase_flip"
    }

    fn kraus_operators(&self) -> Vec<KrausOperator> {
        let p = self.probability;
        vec![
            KrausOperator::scaled((1.0 - p).sqrt(), &matrices::IDENTITY),
            KrausOperator::scaled(p.sqrt(), &matrices::PAULI_Z),
        ]
    }

    fn apply(&self, register: &mut Register, qubit: usize, rng: &mut dyn RngCore) -> Result<()> {
        phase_flip(register, qubit, self.probability, rng).map(|_| ())
    }
}

/// Energy relaxation (T1)
///
/// # Kraus Operators
/// ```text
/// K₀ = [[1, 0], [0, √(1-γ)]]
/// K₁ = [[0, √γ], [0, 0]]
/// ```
/// On a state vector the channel is applied as `K₀ + K₁` followed by
/// renormalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmplitudeDamping {
    gamma: f64,
}

impl AmplitudeDamping {
    pub fn new(gamma: f64) -> Result<Self> {
        check_probability("amplitude damping gamma", gamma)?;
        Ok(Self { gamma })
    }

    /// `γ = 1 − exp(−gate_time / T1)`
    pub fn from_t1(t1: f64, gate_time: f64) -> Result<Self> {
        if !(t1 > 0.0) || !(gate_time >= 0.0) {
            return Err(crate::NoiseError::InvalidConfig(format!(
                "T1 must be positive and gate time non-negative, got T1 = {}, gate time = {}",
                t1, gate_time
            )));
        }
        Self::new(1.0 - (-gate_time / t1).exp())
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl NoiseChannel for AmplitudeDamping {
    fn name(&self) -> &str {
        "amplitude_damping"
    }

    fn kraus_operators(&self) -> Vec<KrausOperator> {
        let zero = Amplitude::new(0.0, 0.0);
        let one = Amplitude::new(1.0, 0.0);
        vec![
            KrausOperator::new([[one, zero], [zero, Amplitude::new((1.0 - self.gamma).sqrt(), 0.0)]]),
            KrausOperator::new([[zero, Amplitude::new(self.gamma.sqrt(), 0.0)], [zero, zero]]),
        ]
    }

    fn apply(&self, register: &mut Register, qubit: usize, _rng: &mut dyn RngCore) -> Result<()> {
        amplitude_damping(register, qubit, self.gamma)
    }
}

/// Dephasing (T2) as a stochastic Z kick with probability `γ`
///
/// # Kraus Operators
/// ```text
/// K₀ = √(1-γ) I
/// K₁ = √γ Z
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseDamping {
    gamma: f64,
}

impl PhaseDamping {
    pub fn new(gamma: f64) -> Result<Self> {
        check_probability("phase damping gamma", gamma)?;
        Ok(Self { gamma })
    }

    /// `γ = 1 − exp(−gate_time / T2)`
    pub fn from_t2(t2: f64, gate_time: f64) -> Result<Self> {
        if !(t2 > 0.0) || !(gate_time >= 0.0) {
            return Err(crate::NoiseError::InvalidConfig(format!(
                "T2 must be positive and gate time non-negative, got T2 = {}, gate time = {}",
                t2, gate_time
            )));
        }
        Self::new(1.0 - (-gate_time / t2).exp())
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl NoiseChannel for PhaseDamping {
    fn name(&self) -> &str {
        "phase_damping"
    }

    fn kraus_operators(&self) -> Vec<KrausOperator> {
        vec![
            KrausOperator::scaled((1.0 - self.gamma).sqrt(), &matrices::IDENTITY),
            KrausOperator::scaled(self.gamma.sqrt(), &matrices::PAULI_Z),
        ]
    }

    fn apply(&self, register: &mut Register, qubit: usize, rng: &mut dyn RngCore) -> Result<()> {
        phase_damping(register, qubit, self.gamma, rng).map(|_| ())
    }
}
