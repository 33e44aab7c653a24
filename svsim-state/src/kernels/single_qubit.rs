//! Single-qubit kernels

use num_complex::Complex64;
use svsim_gates::Matrix2;

/// Apply a 2×2 matrix to `target` across the whole state
///
/// # Algorithm
/// With `stride = 2^target`, the indices split into blocks of `2·stride`.
/// Inside a block, index `i0` (target bit clear) pairs with `i1 = i0 + stride`
/// (target bit set), and the pair is replaced by `M · (amp[i0], amp[i1])`.
/// Every amplitude is read and written exactly once: O(2^n), no allocation,
/// and the 2^n × 2^n tensor-product matrix is never built.
pub fn apply_single_qubit(state: &mut [Complex64], matrix: &Matrix2, target: usize) {
    let stride = 1usize << target;
    let [[m00, m01], [m10, m11]] = *matrix;

    for block in state.chunks_exact_mut(stride << 1) {
        let (low, high) = block.split_at_mut(stride);
        for (a0, a1) in low.iter_mut().zip(high.iter_mut()) {
            let (v0, v1) = (*a0, *a1);
            *a0 = m00 * v0 + m01 * v1;
            *a1 = m10 * v0 + m11 * v1;
        }
    }
}

/// Apply `diag(d0, d1)` to `target`
///
/// Diagonal gates (Z, S, T, RZ, P) never mix the pair, so each amplitude is
/// just scaled by the factor for its target bit.
pub fn apply_diagonal(state: &mut [Complex64], d0: Complex64, d1: Complex64, target: usize) {
    let mask = 1usize << target;
    for (idx, amp) in state.iter_mut().enumerate() {
        *amp *= if idx & mask == 0 { d0 } else { d1 };
    }
}

/// Negate every amplitude whose index satisfies `predicate`
///
/// This is a diagonal ±1 phase operator, hence unitary for any predicate.
pub fn negate_where<F>(state: &mut [Complex64], mut predicate: F) -> usize
where
    F: FnMut(usize) -> bool,
{
    let mut flipped = 0;
    for (idx, amp) in state.iter_mut().enumerate() {
        if predicate(idx) {
            *amp = -*amp;
            flipped += 1;
        }
    }
    flipped
}
