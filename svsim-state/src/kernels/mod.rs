//! Bit-indexed amplitude kernels
//!
//! Each kernel is a single in-place pass over a `2^n` amplitude slice. Bit `k`
//! of an index encodes the classical branch of qubit `k`, so every gate reduces
//! to arithmetic on index pairs (or single indices) selected by bitmasks.
//!
//! The kernels do no validation. [`Register`](crate::Register) checks qubit
//! indices before calling in here.

pub mod controlled;
pub mod single_qubit;

pub use controlled::{
    apply_controlled, apply_controlled_swap, apply_cz, apply_multi_controlled_x,
};
pub use single_qubit::{apply_diagonal, apply_single_qubit, negate_where};
