//! Single-qubit gate library for svsim
//!
//! Every gate in this crate is a plain 2×2 complex matrix ([`Matrix2`]).
//! Fixed gates are `const` values evaluated at compile time; rotations and
//! phase gates are produced by small generator functions taking an angle in
//! radians.
//!
//! Multi-qubit gates (CNOT, Toffoli, ...) are not materialized as matrices.
//! The register engine in `svsim-state` applies them as bitmask passes over
//! the amplitude vector, so only the 2×2 building blocks live here.
//!
//! # Example
//!
//! ```
//! use svsim_gates::{matrices, matrix_ops};
//! use std::f64::consts::PI;
//!
//! let h = matrices::HADAMARD;
//! assert!(matrix_ops::is_unitary(&h, 1e-10));
//!
//! // RX(π) equals X up to a global phase of -i
//! let rx = matrices::rotation_x(PI);
//! assert!(matrix_ops::is_unitary(&rx, 1e-10));
//! ```

pub mod matrices;
pub mod matrix_ops;

pub use matrices::*;
pub use matrix_ops::{adjoint, approx_eq, is_unitary, multiply};

/// A 2×2 complex matrix in row-major order: `[[m00, m01], [m10, m11]]`
pub type Matrix2 = [[num_complex::Complex64; 2]; 2];
