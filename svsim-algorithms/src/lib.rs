//! Algorithms built on the svsim state-vector engine
//!
//! - [`grover`]: Grover search for one target, several targets, or any index
//!   accepted by a predicate oracle, plus a variant run through a noise model
//! - [`statistics`]: repeated-trial success estimates
//! - [`config`]: [`SimulatorConfig`] for seeds, trial counts and tolerances
//!
//! # Example
//!
//! ```
//! use svsim_algorithms::{GroverSearch, SimulatorConfig};
//!
//! let config = SimulatorConfig::debug();
//! let mut rng = config.rng();
//!
//! let grover = GroverSearch::new(3).unwrap();
//! let found = grover.search(5, &mut rng).unwrap();
//! assert!(found < 8);
//! ```

pub mod config;
pub mod error;
pub mod grover;
pub mod statistics;

pub use config::SimulatorConfig;
pub use error::{AlgorithmError, Result};
pub use grover::{optimal_iterations, oracle_iterations, GroverSearch};
pub use statistics::{estimate_success_rate, run_trials, TrialSummary};
