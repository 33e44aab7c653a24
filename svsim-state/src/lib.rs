//! State-vector register with in-place gate kernels and projective measurement
//!
//! This crate holds the numerical core of svsim:
//!
//! - [`Register`]: dense `2^n` amplitude vector with single-qubit, controlled
//!   and permutation gates, phase flips and non-unitary operators
//! - [`Qubit`]: closed-form single-qubit fast path, independent of the register
//! - [`kernels`]: the bit-indexed passes every register operation reduces to
//! - measurement: collapse, full readout and non-destructive sampling
//!
//! Bit `k` of a basis index encodes qubit `k`. Randomness is always injected
//! by the caller through a [`rand::Rng`], so seeded runs are reproducible.
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use svsim_gates::matrices::{HADAMARD, PAULI_X};
//! use svsim_state::Register;
//!
//! let mut reg = Register::zero_state(3).unwrap();
//! reg.apply_gate(0, &PAULI_X).unwrap();
//! reg.apply_gate(1, &PAULI_X).unwrap();
//! reg.apply_toffoli(0, 1, 2).unwrap();
//! assert!((reg.probability(0b111).unwrap() - 1.0).abs() < 1e-10);
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! reg.apply_gate(0, &HADAMARD).unwrap();
//! let _bit = reg.measure(0, &mut rng).unwrap();
//! assert!(reg.is_normalized(1e-10));
//! ```

pub mod amplitude;
pub mod error;
pub mod kernels;
pub mod measurement;
pub mod qubit;
pub mod register;

pub use amplitude::{probability_of, Amplitude, DISPLAY_THRESHOLD, NORMALIZATION_TOLERANCE};
pub use error::{Result, StateError};
pub use qubit::Qubit;
pub use register::{Register, MAX_QUBITS};
