//! Controlled and permutation kernels (CNOT, Toffoli, CZ, SWAP, Fredkin, controlled-U)
//!
//! Controls are passed as a bitmask: a kernel acts only on indices where every
//! control bit is set. An empty mask means "uncontrolled". All kernels are
//! permutations or phase multiplications on a partition of the indices, so
//! they preserve total probability exactly.

use num_complex::Complex64;
use svsim_gates::Matrix2;

/// Visit each `(i0, i1)` pair differing only in `target` whose controls are all set
#[inline]
fn for_each_controlled_pair<F>(state: &mut [Complex64], controls: usize, target: usize, mut f: F)
where
    F: FnMut(&mut Complex64, &mut Complex64),
{
    let stride = 1usize << target;
    let block_len = stride << 1;

    for (block_idx, block) in state.chunks_exact_mut(block_len).enumerate() {
        let base = block_idx * block_len;
        let (low, high) = block.split_at_mut(stride);
        for (offset, (a0, a1)) in low.iter_mut().zip(high.iter_mut()).enumerate() {
            if (base + offset) & controls == controls {
                f(a0, a1);
            }
        }
    }
}

/// Apply `matrix` to `target` wherever all `controls` bits are set
///
/// `controls` must not contain the target bit.
pub fn apply_controlled(state: &mut [Complex64], matrix: &Matrix2, controls: usize, target: usize) {
    let [[m00, m01], [m10, m11]] = *matrix;
    for_each_controlled_pair(state, controls, target, |a0, a1| {
        let (v0, v1) = (*a0, *a1);
        *a0 = m00 * v0 + m01 * v1;
        *a1 = m10 * v0 + m11 * v1;
    });
}

/// Toggle `target` wherever all `controls` bits are set
///
/// One control bit gives CNOT, two give Toffoli. Implemented as amplitude
/// swaps, no complex arithmetic.
pub fn apply_multi_controlled_x(state: &mut [Complex64], controls: usize, target: usize) {
    for_each_controlled_pair(state, controls, target, |a0, a1| std::mem::swap(a0, a1));
}

/// Negate amplitudes where both `qubit1` and `qubit2` are set
pub fn apply_cz(state: &mut [Complex64], qubit1: usize, qubit2: usize) {
    let both = (1usize << qubit1) | (1usize << qubit2);
    for (idx, amp) in state.iter_mut().enumerate() {
        if idx & both == both {
            *amp = -*amp;
        }
    }
}

/// Exchange the values of `qubit1` and `qubit2` wherever all `controls` are set
///
/// An empty control mask is a plain SWAP; one control bit gives Fredkin.
/// Only indices with `qubit1 = 1, qubit2 = 0` start a swap, so each pair is
/// exchanged once.
pub fn apply_controlled_swap(
    state: &mut [Complex64],
    controls: usize,
    qubit1: usize,
    qubit2: usize,
) {
    let mask1 = 1usize << qubit1;
    let mask2 = 1usize << qubit2;
    let flip = mask1 | mask2;

    for idx in 0..state.len() {
        if idx & controls == controls && idx & mask1 != 0 && idx & mask2 == 0 {
            state.swap(idx, idx ^ flip);
        }
    }
}
