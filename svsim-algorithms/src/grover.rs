//! Grover amplitude amplification
//!
//! The search starts from the uniform superposition over `2^n` indices and
//! repeats an oracle/diffusion pair `k` times:
//!
//! - **Oracle**: negate the amplitude of every marked index
//! - **Diffusion**: Hadamard on all qubits, negate every nonzero index,
//!   Hadamard on all qubits (inversion about the mean)
//!
//! The optimum is `k = round((π/4)·√(2^n / M))` for `M` marked indices.
//! Success probability is periodic in `k`, so running past the optimum makes
//! the search worse.

use crate::error::{AlgorithmError, Result};
use rand::Rng;
use std::f64::consts::FRAC_PI_4;
use svsim_gates::matrices::HADAMARD;
use svsim_noise::NoiseModel;
use svsim_state::{Register, MAX_QUBITS};
use tracing::debug;

/// Optimal iteration count `round((π/4)·√(2^n / M))`
///
/// Returns 0 when nothing is marked.
///
/// # Example
///
/// ```
/// use svsim_algorithms::grover::optimal_iterations;
///
/// assert_eq!(optimal_iterations(3, 1), 2);
/// assert_eq!(optimal_iterations(10, 1), 25);
/// ```
pub fn optimal_iterations(num_qubits: usize, num_marked: usize) -> usize {
    if num_marked == 0 {
        return 0;
    }
    let ratio = (1usize << num_qubits) as f64 / num_marked as f64;
    (FRAC_PI_4 * ratio.sqrt()).round() as usize
}

/// Iteration count for a predicate oracle with `num_solutions` matches
///
/// Uses `θ = 2·√(M / 2^n)` and `k = round((π/4) / θ)`, never less than 1.
pub fn oracle_iterations(num_qubits: usize, num_solutions: usize) -> usize {
    let theta = 2.0 * (num_solutions as f64 / (1usize << num_qubits) as f64).sqrt();
    ((FRAC_PI_4 / theta).round() as usize).max(1)
}

/// Grover search over `2^n` indices
#[derive(Debug, Clone, PartialEq)]
pub struct GroverSearch {
    num_qubits: usize,
    iterations: Option<usize>,
}

impl GroverSearch {
    /// # Errors
    /// [`AlgorithmError::NoQubits`] for `num_qubits == 0`; a state error when
    /// the register would exceed [`MAX_QUBITS`].
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(AlgorithmError::NoQubits);
        }
        if num_qubits > MAX_QUBITS {
            return Err(svsim_state::StateError::TooManyQubits {
                num_qubits,
                max: MAX_QUBITS,
            }
            .into());
        }
        Ok(Self {
            num_qubits,
            iterations: None,
        })
    }

    /// Run exactly `iterations` rounds instead of the computed optimum
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of searchable indices, `2^n`
    #[inline]
    pub fn search_space(&self) -> usize {
        1 << self.num_qubits
    }

    /// Iteration count used for `num_marked` marked indices
    pub fn iterations_for(&self, num_marked: usize) -> usize {
        self.iterations
            .unwrap_or_else(|| optimal_iterations(self.num_qubits, num_marked))
    }

    /// Search for a single marked index
    pub fn search<R: Rng + ?Sized>(&self, target: usize, rng: &mut R) -> Result<usize> {
        self.search_many(&[target], rng)
    }

    /// Search for any of several marked indices
    ///
    /// Duplicate targets count once.
    pub fn search_many<R: Rng + ?Sized>(&self, targets: &[usize], rng: &mut R) -> Result<usize> {
        let marked = self.marked_set(targets)?;
        let iterations = self.iterations_for(marked.len());
        let mut register = self.amplify(iterations, |idx| marked.binary_search(&idx).is_ok())?;
        Ok(register.measure_all(rng)?)
    }

    /// Search for an index accepted by `oracle`
    ///
    /// The predicate is evaluated over the whole search space once to count
    /// solutions, then used as the phase oracle.
    pub fn search_with_oracle<F, R>(&self, oracle: F, rng: &mut R) -> Result<usize>
    where
        F: Fn(usize) -> bool,
        R: Rng + ?Sized,
    {
        let solutions = (0..self.search_space()).filter(|&idx| oracle(idx)).count();
        if solutions == 0 {
            return Err(AlgorithmError::NoSolutions {
                search_space: self.search_space(),
            });
        }

        let iterations = self
            .iterations
            .unwrap_or_else(|| oracle_iterations(self.num_qubits, solutions));
        let mut register = self.amplify(iterations, oracle)?;
        Ok(register.measure_all(rng)?)
    }

    /// Pre-measurement state after `iterations` rounds with `marked` marked
    pub fn prepare(&self, marked: &[usize], iterations: usize) -> Result<Register> {
        let marked = self.marked_set(marked)?;
        self.amplify(iterations, |idx| marked.binary_search(&idx).is_ok())
    }

    /// Probability that a search for `marked` returns a marked index
    pub fn success_probability(&self, marked: &[usize]) -> Result<f64> {
        let set = self.marked_set(marked)?;
        let iterations = self.iterations_for(set.len());
        let register = self.amplify(iterations, |idx| set.binary_search(&idx).is_ok())?;

        let mut probability = 0.0;
        for &idx in &set {
            probability += register.probability(idx)?;
        }
        Ok(probability)
    }

    /// Single-target search with every Hadamard, and the readout, passing
    /// through `model`
    ///
    /// The oracle and the diffusion phase flip stay ideal.
    pub fn search_with_noise<R: Rng + ?Sized>(
        &self,
        target: usize,
        model: &NoiseModel,
        rng: &mut R,
    ) -> Result<usize> {
        self.check_target(target)?;
        let iterations = self.iterations_for(1);
        debug!(num_qubits = self.num_qubits, iterations, "noisy Grover search");

        let mut register = Register::zero_state(self.num_qubits)?;
        self.noisy_hadamard_all(&mut register, model, rng)?;

        for _ in 0..iterations {
            register.apply_phase_flip(target)?;
            self.noisy_hadamard_all(&mut register, model, rng)?;
            register.apply_phase_flip_where(|idx| idx != 0);
            self.noisy_hadamard_all(&mut register, model, rng)?;
        }

        let mut result = 0;
        for qubit in 0..self.num_qubits {
            if model.noisy_measure(&mut register, qubit, rng)? {
                result |= 1 << qubit;
            }
        }
        Ok(result)
    }

    fn noisy_hadamard_all<R: Rng + ?Sized>(
        &self,
        register: &mut Register,
        model: &NoiseModel,
        rng: &mut R,
    ) -> Result<()> {
        for qubit in 0..self.num_qubits {
            model.noisy_gate(register, qubit, &HADAMARD, rng)?;
        }
        Ok(())
    }

    /// Uniform superposition followed by `iterations` oracle/diffusion rounds
    fn amplify<F>(&self, iterations: usize, oracle: F) -> Result<Register>
    where
        F: Fn(usize) -> bool,
    {
        debug!(num_qubits = self.num_qubits, iterations, "Grover amplification");

        let mut register = Register::zero_state(self.num_qubits)?;
        register.apply_all(&HADAMARD);

        for _ in 0..iterations {
            register.apply_phase_flip_where(&oracle);
            Self::diffuse(&mut register);
        }
        Ok(register)
    }

    fn diffuse(register: &mut Register) {
        register.apply_all(&HADAMARD);
        register.apply_phase_flip_where(|idx| idx != 0);
        register.apply_all(&HADAMARD);
    }

    fn check_target(&self, target: usize) -> Result<()> {
        if target >= self.search_space() {
            return Err(AlgorithmError::TargetOutOfRange {
                target,
                search_space: self.search_space(),
            });
        }
        Ok(())
    }

    /// Sorted, deduplicated marked indices, each checked against the search space
    fn marked_set(&self, targets: &[usize]) -> Result<Vec<usize>> {
        if targets.is_empty() {
            return Err(AlgorithmError::NoTargets);
        }
        for &target in targets {
            self.check_target(target)?;
        }

        let mut marked = targets.to_vec();
        marked.sort_unstable();
        marked.dedup();
        Ok(marked)
    }
}
