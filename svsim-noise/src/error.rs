//! Error types for noise channels and configuration

use svsim_state::StateError;
use thiserror::Error;

/// Errors raised while configuring or applying noise
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    /// Rate or damping parameter outside [0, 1]
    #[error("{name} must be in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    /// Inconsistent or unparsable noise configuration
    #[error("Invalid noise configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    State(#[from] StateError),
}

/// Result type for noise operations
pub type Result<T> = std::result::Result<T, NoiseError>;

/// Check that `value` is a probability, naming the parameter in the error
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(NoiseError::InvalidProbability { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_probability_bounds() {
        assert!(check_probability("p", 0.0).is_ok());
        assert!(check_probability("p", 1.0).is_ok());
        assert_eq!(
            check_probability("p", 1.5),
            Err(NoiseError::InvalidProbability { name: "p", value: 1.5 })
        );
        assert!(check_probability("p", -0.1).is_err());
        assert!(check_probability("p", f64::NAN).is_err());
    }

    #[test]
    fn test_state_error_converts() {
        let err: NoiseError = StateError::InvalidState.into();
        assert_eq!(err.to_string(), StateError::InvalidState.to_string());
    }
}
