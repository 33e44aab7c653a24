//! Simulator configuration

use crate::error::{AlgorithmError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use svsim_state::NORMALIZATION_TOLERANCE;

/// Environment variable holding the RNG seed
pub const SEED_ENV: &str = "SVSIM_SEED";

/// Environment variable holding the trial count
pub const TRIALS_ENV: &str = "SVSIM_TRIALS";

/// Configuration shared by simulation runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Random number generator seed for reproducibility
    ///
    /// If None, the RNG is seeded from system entropy.
    ///
    /// Default: None
    pub seed: Option<u64>,

    /// Number of repeated runs for statistical estimates
    ///
    /// Default: 1000
    pub trials: usize,

    /// Numerical tolerance for probability comparisons
    ///
    /// Default: 1e-10
    pub tolerance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            trials: 1000,
            tolerance: NORMALIZATION_TOLERANCE,
        }
    }
}

impl SimulatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deterministic configuration for debugging
    ///
    /// - Fixed seed
    /// - Fewer trials
    pub fn debug() -> Self {
        Self {
            seed: Some(42),
            trials: 100,
            ..Default::default()
        }
    }

    /// Set the random seed for deterministic execution
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(AlgorithmError::InvalidConfig("trials must be > 0".to_string()));
        }
        if !(self.tolerance > 0.0) {
            return Err(AlgorithmError::InvalidConfig(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// RNG for a run: seeded when `seed` is set, from entropy otherwise
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Parse and validate a JSON document; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AlgorithmError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `SVSIM_SEED` and `SVSIM_TRIALS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(SEED_ENV) {
            let seed = value.trim().parse().map_err(|_| {
                AlgorithmError::InvalidConfig(format!("{} must be an unsigned integer, got {:?}", SEED_ENV, value))
            })?;
            config.seed = Some(seed);
        }

        if let Some(value) = lookup(TRIALS_ENV) {
            config.trials = value.trim().parse().map_err(|_| {
                AlgorithmError::InvalidConfig(format!("{} must be an unsigned integer, got {:?}", TRIALS_ENV, value))
            })?;
        }

        config.validate()?;
        Ok(config)
    }
}
