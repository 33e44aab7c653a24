//! Complex amplitude type and probability helpers

use crate::error::{Result, StateError};
use num_complex::Complex64;

/// Complex coefficient of one basis state
pub type Amplitude = Complex64;

/// Basis states at or below this probability are hidden from `Display` output
pub const DISPLAY_THRESHOLD: f64 = 1e-10;

/// Allowed deviation of the total probability from 1
pub const NORMALIZATION_TOLERANCE: f64 = 1e-10;

/// Born-rule probability `|a|²`
#[inline]
pub fn probability_of(amplitude: Amplitude) -> f64 {
    amplitude.norm_sqr()
}

/// Sum of `|a|²` over a slice
#[inline]
pub fn total_probability(amplitudes: &[Amplitude]) -> f64 {
    amplitudes.iter().map(|a| a.norm_sqr()).sum()
}

/// Scale `amplitudes` in place so their total probability is 1
///
/// # Errors
/// Returns [`StateError::InvalidState`] when every amplitude is zero.
pub fn normalize(amplitudes: &mut [Amplitude]) -> Result<()> {
    let total = total_probability(amplitudes);
    if total <= 0.0 || !total.is_finite() {
        return Err(StateError::InvalidState);
    }

    let inv_norm = 1.0 / total.sqrt();
    for amplitude in amplitudes.iter_mut() {
        *amplitude *= inv_norm;
    }
    Ok(())
}
