//! Hardware noise parameters
//!
//! Times are in microseconds. Damping parameters are derived from the gate
//! duration and the coherence times as `γ = 1 − exp(−gate_time / T)`.

use crate::error::{check_probability, NoiseError, Result};
use serde::{Deserialize, Serialize};

/// Error rates and coherence times of a device
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Depolarizing probability after each single-qubit gate
    pub single_qubit_error: f64,

    /// Depolarizing probability applied to each qubit of a two-qubit gate
    pub two_qubit_error: f64,

    /// Probability of flipping a measured bit
    pub readout_error: f64,

    /// Energy relaxation time (μs)
    pub t1: f64,

    /// Dephasing time (μs)
    pub t2: f64,

    /// Gate duration (μs)
    pub gate_time: f64,
}

impl NoiseConfig {
    /// No noise at all
    pub fn ideal() -> Self {
        Self {
            single_qubit_error: 0.0,
            two_qubit_error: 0.0,
            readout_error: 0.0,
            t1: 100.0,
            t2: 80.0,
            gate_time: 0.0,
        }
    }

    /// Transmon-style device: fast gates, ~100μs coherence
    pub fn superconducting() -> Self {
        Self {
            single_qubit_error: 0.001,
            two_qubit_error: 0.01,
            readout_error: 0.02,
            t1: 100.0,
            t2: 80.0,
            gate_time: 0.05, // 50ns
        }
    }

    /// Trapped-ion device: slow gates, very long coherence
    pub fn trapped_ion() -> Self {
        Self {
            single_qubit_error: 0.0001,
            two_qubit_error: 0.005,
            readout_error: 0.001,
            t1: 100_000.0, // ~100ms
            t2: 50_000.0,
            gate_time: 10.0,
        }
    }

    /// Exaggerated noise for tests
    pub fn high_noise() -> Self {
        Self {
            single_qubit_error: 0.05,
            two_qubit_error: 0.1,
            readout_error: 0.1,
            t1: 10.0,
            t2: 5.0,
            gate_time: 1.0,
        }
    }

    /// Relaxation probability per gate, `1 − exp(−gate_time / T1)`
    pub fn amplitude_damping_gamma(&self) -> f64 {
        1.0 - (-self.gate_time / self.t1).exp()
    }

    /// Dephasing probability per gate, `1 − exp(−gate_time / T2)`
    pub fn phase_damping_gamma(&self) -> f64 {
        1.0 - (-self.gate_time / self.t2).exp()
    }

    /// Whether every rate and derived damping parameter is zero
    pub fn is_ideal(&self) -> bool {
        self.single_qubit_error == 0.0
            && self.two_qubit_error == 0.0
            && self.readout_error == 0.0
            && self.gate_time == 0.0
    }

    /// Check rates are probabilities and times are physical
    pub fn validate(&self) -> Result<()> {
        check_probability("single_qubit_error", self.single_qubit_error)?;
        check_probability("two_qubit_error", self.two_qubit_error)?;
        check_probability("readout_error", self.readout_error)?;

        if !(self.t1 > 0.0) {
            return Err(NoiseError::InvalidConfig(format!(
                "T1 must be positive, got {}",
                self.t1
            )));
        }
        if !(self.t2 > 0.0) {
            return Err(NoiseError::InvalidConfig(format!(
                "T2 must be positive, got {}",
                self.t2
            )));
        }
        if !(self.gate_time >= 0.0) || !self.gate_time.is_finite() {
            return Err(NoiseError::InvalidConfig(format!(
                "Gate time must be non-negative, got {}",
                self.gate_time
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| NoiseError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| NoiseError::InvalidConfig(e.to_string()))
    }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self::ideal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_presets_validate() {
        for config in [
            NoiseConfig::ideal(),
            NoiseConfig::superconducting(),
            NoiseConfig::trapped_ion(),
            NoiseConfig::high_noise(),
        ] {
            config.validate().unwrap();
        }
    }

    #[test]
    fn test_ideal_has_no_damping() {
        let config = NoiseConfig::ideal();
        assert!(config.is_ideal());
        assert_relative_eq!(config.amplitude_damping_gamma(), 0.0);
        assert_relative_eq!(config.phase_damping_gamma(), 0.0);
    }

    #[test]
    fn test_derived_gammas() {
        let config = NoiseConfig::high_noise();
        assert_relative_eq!(config.amplitude_damping_gamma(), 1.0 - (-0.1f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(config.phase_damping_gamma(), 1.0 - (-0.2f64).exp(), epsilon = 1e-12);
        assert!(config.phase_damping_gamma() > config.amplitude_damping_gamma());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = NoiseConfig::superconducting();
        config.readout_error = 1.2;
        assert!(matches!(
            config.validate(),
            Err(NoiseError::InvalidProbability { name: "readout_error", .. })
        ));

        let mut config = NoiseConfig::superconducting();
        config.t1 = 0.0;
        assert!(matches!(config.validate(), Err(NoiseError::InvalidConfig(_))));

        let mut config = NoiseConfig::superconducting();
        config.gate_time = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_round_trip_and_validation() {
        let config = NoiseConfig::trapped_ion();
        let json = config.to_json().unwrap();
        assert_eq!(NoiseConfig::from_json(&json).unwrap(), config);

        let bad = r#"{"single_qubit_error": 2.0, "two_qubit_error": 0.0,
                      "readout_error": 0.0, "t1": 1.0, "t2": 1.0, "gate_time": 0.0}"#;
        assert!(NoiseConfig::from_json(bad).is_err());
        assert!(matches!(NoiseConfig::from_json("{"), Err(NoiseError::InvalidConfig(_))));
    }
}
