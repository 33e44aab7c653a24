//! Noise models for the svsim state-vector engine
//!
//! - **Depolarizing noise**: random Pauli errors after gates
//! - **Bit/phase flips**: X or Z errors with a fixed probability
//! - **Amplitude damping**: energy relaxation (T1), a non-unitary map
//! - **Phase damping**: dephasing (T2) as a stochastic Z kick
//! - **Readout errors**: classical flips of measurement results
//!
//! [`NoiseModel`] composes these from a [`NoiseConfig`], which ships presets
//! for an ideal device, a superconducting device, a trapped-ion device and a
//! deliberately noisy test profile.
//!
//! Every stochastic operation takes the caller's RNG, so seeded runs are
//! reproducible.

pub mod channels;
pub mod config;
pub mod error;
pub mod model;

pub use channels::{
    amplitude_damping, bit_flip, damping_operator, depolarize, depolarize_all, phase_damping,
    phase_flip, readout_error, AmplitudeDamping, BitFlip, Depolarizing, KrausOperator,
    NoiseChannel, Pauli, PhaseDamping, PhaseFlip,
};
pub use config::NoiseConfig;
pub use error::{NoiseError, Result};
pub use model::NoiseModel;
