//! Composite noise model driven by a [`NoiseConfig`]

use crate::channels::{amplitude_damping, depolarize, phase_damping, readout_error};
use crate::config::NoiseConfig;
use crate::error::Result;
use rand::Rng;
use svsim_gates::Matrix2;
use svsim_state::Register;
use tracing::trace;

/// Applies ideal operations followed by the errors a [`NoiseConfig`] describes
///
/// # Example
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use svsim_gates::matrices::HADAMARD;
/// use svsim_noise::{NoiseConfig, NoiseModel};
/// use svsim_state::Register;
///
/// let model = NoiseModel::new(NoiseConfig::superconducting()).unwrap();
/// let mut rng = StdRng::seed_from_u64(0);
/// let mut reg = Register::zero_state(2).unwrap();
///
/// model.noisy_gate(&mut reg, 0, &HADAMARD, &mut rng).unwrap();
/// model.noisy_cnot(&mut reg, 0, 1, &mut rng).unwrap();
/// let _bit = model.noisy_measure(&mut reg, 0, &mut rng).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseModel {
    config: NoiseConfig,
}

impl NoiseModel {
    /// Build a model from a validated configuration
    pub fn new(config: NoiseConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Model that never perturbs anything
    pub fn ideal() -> Self {
        Self {
            config: NoiseConfig::ideal(),
        }
    }

    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    pub fn has_noise(&self) -> bool {
        !self.config.is_ideal()
    }

    /// Ideal gate on `qubit`, then depolarizing noise at the single-qubit rate
    pub fn noisy_gate<R: Rng + ?Sized>(
        &self,
        register: &mut Register,
        qubit: usize,
        gate: &Matrix2,
        rng: &mut R,
    ) -> Result<()> {
        register.apply_gate(qubit, gate)?;
        depolarize(register, qubit, self.config.single_qubit_error, rng)?;
        trace!(qubit, "noisy gate");
        Ok(())
    }

    /// Ideal CNOT, then depolarizing noise on both qubits at the two-qubit rate
    pub fn noisy_cnot<R: Rng + ?Sized>(
        &self,
        register: &mut Register,
        control: usize,
        target: usize,
        rng: &mut R,
    ) -> Result<()> {
        register.apply_cnot(control, target)?;
        depolarize(register, control, self.config.two_qubit_error, rng)?;
        depolarize(register, target, self.config.two_qubit_error, rng)?;
        trace!(control, target, "noisy CNOT");
        Ok(())
    }

    /// Projective measurement followed by a classical readout error
    ///
    /// The register collapses to the true outcome; only the reported bit may
    /// be wrong.
    pub fn noisy_measure<R: Rng + ?Sized>(
        &self,
        register: &mut Register,
        qubit: usize,
        rng: &mut R,
    ) -> Result<bool> {
        let outcome = register.measure(qubit, rng)?;
        readout_error(outcome, self.config.readout_error, rng)
    }

    /// Decoherence over one gate duration: amplitude damping then phase damping
    pub fn idle<R: Rng + ?Sized>(&self, register: &mut Register, qubit: usize, rng: &mut R) -> Result<()> {
        amplitude_damping(register, qubit, self.config.amplitude_damping_gamma())?;
        phase_damping(register, qubit, self.config.phase_damping_gamma(), rng)?;
        Ok(())
    }

    /// [`idle`](Self::idle) on every qubit
    pub fn idle_all<R: Rng + ?Sized>(&self, register: &mut Register, rng: &mut R) -> Result<()> {
        for qubit in 0..register.num_qubits() {
            self.idle(register, qubit, rng)?;
        }
        Ok(())
    }
}

impl Default for NoiseModel {
    fn default() -> Self {
        Self::ideal()
    }
}
