//! Projective measurement in the computational basis
//!
//! Measuring qubit `q` draws `u ∈ [0, 1)` and reads 1 iff `u ≥ P(q = 0)`.
//! Amplitudes inconsistent with the outcome are zeroed and the survivors are
//! renormalized, so a second measurement of the same qubit always repeats the
//! first result.

use crate::amplitude::Amplitude;
use crate::error::{Result, StateError};
use crate::register::Register;
use rand::Rng;
use std::collections::BTreeMap;
use tracing::debug;

impl Register {
    /// Measure `qubit`, collapsing the register
    ///
    /// Returns `true` for outcome 1.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use svsim_state::Register;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let mut reg = Register::basis_state(2, 0b10).unwrap();
    /// assert!(!reg.measure(0, &mut rng).unwrap());
    /// assert!(reg.measure(1, &mut rng).unwrap());
    /// ```
    pub fn measure<R: Rng + ?Sized>(&mut self, qubit: usize, rng: &mut R) -> Result<bool> {
        let random_value: f64 = rng.gen();
        self.measure_with_value(qubit, random_value)
    }

    /// Measure `qubit` using a caller-supplied uniform sample in `[0, 1)`
    pub fn measure_with_value(&mut self, qubit: usize, random_value: f64) -> Result<bool> {
        self.check_qubit(qubit)?;
        let mask = 1usize << qubit;

        let (p0, p1) = self
            .amplitudes()
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(p0, p1), (idx, a)| {
                if idx & mask == 0 {
                    (p0 + a.norm_sqr(), p1)
                } else {
                    (p0, p1 + a.norm_sqr())
                }
            });

        let total = p0 + p1;
        if total <= 0.0 || !total.is_finite() {
            return Err(StateError::InvalidState);
        }

        let mut outcome = random_value >= p0 / total;
        // A zero-probability branch can only be picked through rounding
        if outcome && p1 == 0.0 {
            outcome = false;
        } else if !outcome && p0 == 0.0 {
            outcome = true;
        }

        let kept = if outcome { p1 } else { p0 };
        let scale = 1.0 / kept.sqrt();
        for (idx, amp) in self.amplitudes_mut().iter_mut().enumerate() {
            if (idx & mask != 0) == outcome {
                *amp *= scale;
            } else {
                *amp = Amplitude::new(0.0, 0.0);
            }
        }

        debug!(qubit, outcome, p0 = p0 / total, "measured qubit");
        Ok(outcome)
    }

    /// Measure every qubit, lowest index first
    ///
    /// Returns the outcomes packed as a basis index (bit `k` = qubit `k`).
    pub fn measure_all<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize> {
        let mut result = 0usize;
        for qubit in 0..self.num_qubits() {
            if self.measure(qubit, rng)? {
                result |= 1 << qubit;
            }
        }
        Ok(result)
    }

    /// Sample `shots` full measurements without disturbing the register
    ///
    /// Each shot draws a basis index from the Born distribution.
    pub fn sample_counts<R: Rng + ?Sized>(&self, shots: usize, rng: &mut R) -> BTreeMap<usize, usize> {
        let mut cumulative = Vec::with_capacity(self.dimension());
        let mut running = 0.0;
        for amp in self.amplitudes() {
            running += amp.norm_sqr();
            cumulative.push(running);
        }

        let mut counts = BTreeMap::new();
        for _ in 0..shots {
            let u: f64 = rng.gen::<f64>() * running;
            let index = cumulative
                .partition_point(|&c| c <= u)
                .min(self.dimension() - 1);
            *counts.entry(index).or_insert(0) += 1;
        }

        debug!(shots, distinct = counts.len(), "sampled register");
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qubit::Qubit;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use svsim_gates::matrices::HADAMARD;

    const EPSILON: f64 = 1e-10;

    fn bell() -> Register {
        let mut reg = Register::zero_state(2).unwrap();
        reg.apply_gate(0, &HADAMARD).unwrap();
        reg.apply_cnot(0, 1).unwrap();
        reg
    }

    #[test]
    fn test_measure_with_value_threshold() {
        let mut reg = Register::from_qubits(&[Qubit::plus()]).unwrap();
        assert!(!reg.measure_with_value(0, 0.49).unwrap());
        assert_relative_eq!(reg.probability(0).unwrap(), 1.0, epsilon = EPSILON);

        let mut reg = Register::from_qubits(&[Qubit::plus()]).unwrap();
        assert!(reg.measure_with_value(0, 0.5).unwrap());
        assert_relative_eq!(reg.probability(1).unwrap(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_zero_probability_branch_never_chosen() {
        let mut reg = Register::basis_state(1, 0).unwrap();
        // u ≥ p0 = 1 is impossible from a real RNG but must still read 0
        assert!(!reg.measure_with_value(0, 1.0).unwrap());

        let mut reg = Register::basis_state(1, 1).unwrap();
        assert!(reg.measure_with_value(0, 0.0).unwrap());
    }

    #[test]
    fn test_bell_outcomes_agree() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut reg = bell();
            let first = reg.measure(0, &mut rng).unwrap();
            let second = reg.measure(1, &mut rng).unwrap();
            assert_eq!(first, second);
            assert!(reg.is_normalized(EPSILON));
        }
    }

    #[test]
    fn test_measurement_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut reg = Register::from_qubits(&[Qubit::plus(), Qubit::minus(), Qubit::plus()]).unwrap();
        let first = reg.measure(1, &mut rng).unwrap();
        for _ in 0..10 {
            assert_eq!(reg.measure(1, &mut rng).unwrap(), first);
        }
    }

    #[test]
    fn test_measure_all_collapses_to_basis_state() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut reg = Register::zero_state(3).unwrap();
        reg.apply_all(&HADAMARD);
        let index = reg.measure_all(&mut rng).unwrap();
        assert!(index < 8);
        assert_relative_eq!(reg.probability(index).unwrap(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_measure_out_of_range() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut reg = Register::zero_state(1).unwrap();
        assert!(matches!(
            reg.measure(1, &mut rng),
            Err(StateError::QubitOutOfRange { qubit: 1, num_qubits: 1 })
        ));
    }

    #[test]
    fn test_sample_counts_follows_distribution() {
        let mut rng = StdRng::seed_from_u64(5);
        let reg = bell();
        let counts = reg.sample_counts(2000, &mut rng);

        assert_eq!(counts.values().sum::<usize>(), 2000);
        assert!(counts.keys().all(|&k| k == 0b00 || k == 0b11));
        let zeros = counts.get(&0).copied().unwrap_or(0) as f64 / 2000.0;
        assert!((zeros - 0.5).abs() < 0.06, "got {}", zeros);
        // sampling does not collapse
        assert_relative_eq!(reg.probability(0b11).unwrap(), 0.5, epsilon = EPSILON);
    }
}
