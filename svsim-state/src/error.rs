//! Error types for register and qubit operations

use thiserror::Error;

/// Errors that can occur while building or evolving a quantum state
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Amplitudes with zero total probability
    #[error("Invalid state: amplitudes have zero norm")]
    InvalidState,

    /// Amplitude count is not a power of two
    #[error("Invalid amplitude count {length}, expected 2^n")]
    InvalidLength { length: usize },

    /// Qubit index beyond the register width
    #[error("Qubit index {qubit} out of range for {num_qubits}-qubit register")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    /// Same qubit passed twice to a multi-qubit gate
    #[error("Qubit {qubit} used more than once in {gate}")]
    DuplicateQubit { qubit: usize, gate: &'static str },

    /// Basis-state index beyond 2^n
    #[error("Basis index {index} out of range for dimension {dimension}")]
    IndexOutOfRange { index: usize, dimension: usize },

    /// Two states of different sizes combined
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Register width above the supported maximum
    #[error("{num_qubits} qubits exceeds the supported maximum of {max}")]
    TooManyQubits { num_qubits: usize, max: usize },
}

/// Result type for state operations
pub type Result<T> = std::result::Result<T, StateError>;
