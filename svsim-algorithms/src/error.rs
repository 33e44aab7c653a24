//! Error types for algorithms and simulator configuration

use svsim_noise::NoiseError;
use svsim_state::StateError;
use thiserror::Error;

/// Result type for algorithm operations
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Errors that can occur while configuring or running an algorithm
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgorithmError {
    /// Search over a zero-qubit register
    #[error("Search requires at least one qubit")]
    NoQubits,

    /// Marked index outside the search space
    #[error("Target {target} out of range for search space of size {search_space}")]
    TargetOutOfRange { target: usize, search_space: usize },

    /// Empty marked set
    #[error("At least one target must be marked")]
    NoTargets,

    /// Oracle predicate accepts no index
    #[error("Oracle marks no index in a search space of size {search_space}")]
    NoSolutions { search_space: usize },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Noise(#[from] NoiseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = AlgorithmError::TargetOutOfRange {
            target: 9,
            search_space: 8,
        };
        assert_eq!(err.to_string(), "Target 9 out of range for search space of size 8");
    }

    #[test]
    fn test_conversions() {
        let err: AlgorithmError = StateError::InvalidState.into();
        assert!(matches!(err, AlgorithmError::State(StateError::InvalidState)));

        let err: AlgorithmError = NoiseError::InvalidConfig("x".into()).into();
        assert!(matches!(err, AlgorithmError::Noise(_)));
    }
}
