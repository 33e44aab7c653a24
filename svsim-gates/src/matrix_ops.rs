//! Small 2×2 matrix algebra used to validate and compose gates
//!
//! The register never multiplies gate matrices on its hot path; these helpers
//! exist for composing gates ahead of time and for checking the unitarity of
//! anything handed to `apply_gate`.

use crate::Matrix2;
use num_complex::Complex64;

/// Matrix product `a · b`
pub fn multiply(a: &Matrix2, b: &Matrix2) -> Matrix2 {
    let mut result = [[Complex64::new(0.0, 0.0); 2]; 2];
    for (i, row) in result.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j];
        }
    }
    result
}

/// Conjugate transpose `mᴴ`
pub fn adjoint(m: &Matrix2) -> Matrix2 {
    [
        [m[0][0].conj(), m[1][0].conj()],
        [m[0][1].conj(), m[1][1].conj()],
    ]
}

/// Determinant of a 2×2 matrix
pub fn determinant(m: &Matrix2) -> Complex64 {
    m[0][0] * m[1][1] - m[0][1] * m[1][0]
}

/// Element-wise comparison within `tolerance`
pub fn approx_eq(a: &Matrix2, b: &Matrix2, tolerance: f64) -> bool {
    a.iter()
        .flatten()
        .zip(b.iter().flatten())
        .all(|(x, y)| (x - y).norm() <= tolerance)
}

/// Check `mᴴ · m ≈ I` within `tolerance`
///
/// # Example
/// ```
/// use svsim_gates::{matrices, matrix_ops::is_unitary};
///
/// assert!(is_unitary(&matrices::PAULI_Y, 1e-10));
///
/// let not_unitary = [[matrices::PAULI_X[0][1]; 2]; 2];
/// assert!(!is_unitary(&not_unitary, 1e-10));
/// ```
pub fn is_unitary(m: &Matrix2, tolerance: f64) -> bool {
    approx_eq(&multiply(&adjoint(m), m), &crate::matrices::IDENTITY, tolerance)
}

/// Check whether two gates agree up to a global phase
///
/// Finds the first entry of `a` with non-negligible magnitude, derives the
/// phase ratio from it and compares the rescaled matrices.
pub fn equal_up_to_global_phase(a: &Matrix2, b: &Matrix2, tolerance: f64) -> bool {
    let pivot = a
        .iter()
        .flatten()
        .zip(b.iter().flatten())
        .find(|(x, _)| x.norm() > tolerance);

    let Some((x, y)) = pivot else {
        return approx_eq(a, b, tolerance);
    };
    if y.norm() <= tolerance {
        return false;
    }

    let ratio = y / x;
    let scaled = [
        [a[0][0] * ratio, a[0][1] * ratio],
        [a[1][0] * ratio, a[1][1] * ratio],
    ];
    approx_eq(&scaled, b, tolerance)
}
