//! svsim: a state-vector quantum circuit simulator
//!
//! This crate re-exports the workspace:
//!
//! - [`gates`]: 2×2 gate matrices and generators
//! - [`state`]: the [`Register`] engine, [`Qubit`] fast path and measurement
//! - [`noise`]: noise channels, [`NoiseConfig`] presets and [`NoiseModel`]
//! - [`algorithms`]: Grover search and [`SimulatorConfig`]
//! - [`logging`]: tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use svsim::prelude::*;
//!
//! let config = SimulatorConfig::debug();
//! let mut rng = config.rng();
//!
//! // Bell pair: the two readouts always agree
//! let mut reg = Register::zero_state(2).unwrap();
//! reg.apply_gate(0, &HADAMARD).unwrap();
//! reg.apply_cnot(0, 1).unwrap();
//! let a = reg.measure(0, &mut rng).unwrap();
//! let b = reg.measure(1, &mut rng).unwrap();
//! assert_eq!(a, b);
//!
//! // Grover over 8 items
//! let grover = GroverSearch::new(3).unwrap();
//! assert!(grover.success_probability(&[6]).unwrap() > 0.9);
//! ```

pub mod logging;

pub use svsim_algorithms as algorithms;
pub use svsim_gates as gates;
pub use svsim_noise as noise;
pub use svsim_state as state;

pub use logging::{init_tracing, LoggingConfig, LoggingError};
pub use svsim_algorithms::{AlgorithmError, GroverSearch, SimulatorConfig};
pub use svsim_gates::Matrix2;
pub use svsim_noise::{NoiseConfig, NoiseError, NoiseModel};
pub use svsim_state::{Amplitude, Qubit, Register, StateError};

/// Common imports
pub mod prelude {
    pub use num_complex::Complex64;
    pub use rand::rngs::StdRng;
    pub use rand::{Rng, SeedableRng};

    pub use svsim_algorithms::{estimate_success_rate, GroverSearch, SimulatorConfig};
    pub use svsim_gates::matrices::*;
    pub use svsim_gates::Matrix2;
    pub use svsim_noise::{NoiseChannel, NoiseConfig, NoiseModel};
    pub use svsim_state::{Amplitude, Qubit, Register};
}
