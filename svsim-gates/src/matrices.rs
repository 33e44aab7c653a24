//! Named gate matrices and angle-parameterized generators
//!
//! Constants cover the Pauli group, Hadamard, the phase family
//! (S, S†, T, T†) and the square roots of X and Y. Generators build
//! rotation and phase gates for an arbitrary angle.

use crate::Matrix2;
use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);

/// 1/√2
const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Identity
/// I = [[1, 0],
///      [0, 1]]
pub const IDENTITY: Matrix2 = [[ONE, ZERO], [ZERO, ONE]];

/// Pauli-X (NOT)
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: Matrix2 = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli-Y
/// Y = [[0, -i],
///      [i,  0]]
pub const PAULI_Y: Matrix2 = [[ZERO, NEG_I], [I, ZERO]];

/// Pauli-Z
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: Matrix2 = [[ONE, ZERO], [ZERO, NEG_ONE]];

/// Hadamard
/// H = 1/√2 · [[1,  1],
///             [1, -1]]
pub const HADAMARD: Matrix2 = [
    [Complex64::new(INV_SQRT2, 0.0), Complex64::new(INV_SQRT2, 0.0)],
    [Complex64::new(INV_SQRT2, 0.0), Complex64::new(-INV_SQRT2, 0.0)],
];

/// S = √Z
/// S = [[1, 0],
///      [0, i]]
pub const S_GATE: Matrix2 = [[ONE, ZERO], [ZERO, I]];

/// S†
/// S† = [[1,  0],
///       [0, -i]]
pub const S_DAGGER: Matrix2 = [[ONE, ZERO], [ZERO, NEG_I]];

/// T = √S
/// T = [[1, 0],
///      [0, e^(iπ/4)]]
pub const T_GATE: Matrix2 = [[ONE, ZERO], [ZERO, Complex64::new(INV_SQRT2, INV_SQRT2)]];

/// T†
/// T† = [[1, 0],
///       [0, e^(-iπ/4)]]
pub const T_DAGGER: Matrix2 = [[ONE, ZERO], [ZERO, Complex64::new(INV_SQRT2, -INV_SQRT2)]];

/// √X
/// SX = 1/2 · [[1+i, 1-i],
///             [1-i, 1+i]]
pub const SQRT_X: Matrix2 = [
    [Complex64::new(0.5, 0.5), Complex64::new(0.5, -0.5)],
    [Complex64::new(0.5, -0.5), Complex64::new(0.5, 0.5)],
];

/// (√X)†
/// SX† = 1/2 · [[1-i, 1+i],
///              [1+i, 1-i]]
pub const SQRT_X_DAGGER: Matrix2 = [
    [Complex64::new(0.5, -0.5), Complex64::new(0.5, 0.5)],
    [Complex64::new(0.5, 0.5), Complex64::new(0.5, -0.5)],
];

/// √Y
/// SY = (1+i)/2 · [[1, -1],
///                 [1,  1]]
pub const SQRT_Y: Matrix2 = [
    [Complex64::new(0.5, 0.5), Complex64::new(-0.5, -0.5)],
    [Complex64::new(0.5, 0.5), Complex64::new(0.5, 0.5)],
];

/// (√Y)†
/// SY† = (1-i)/2 · [[ 1, 1],
///                  [-1, 1]]
pub const SQRT_Y_DAGGER: Matrix2 = [
    [Complex64::new(0.5, -0.5), Complex64::new(0.5, -0.5)],
    [Complex64::new(-0.5, 0.5), Complex64::new(0.5, -0.5)],
];

/// Rotation about the X axis
/// RX(θ) = [[cos(θ/2),    -i·sin(θ/2)],
///          [-i·sin(θ/2),  cos(θ/2)]]
#[inline]
pub fn rotation_x(theta: f64) -> Matrix2 {
    let (sin, cos) = (theta / 2.0).sin_cos();
    [
        [Complex64::new(cos, 0.0), Complex64::new(0.0, -sin)],
        [Complex64::new(0.0, -sin), Complex64::new(cos, 0.0)],
    ]
}

/// Rotation about the Y axis
/// RY(θ) = [[cos(θ/2), -sin(θ/2)],
///          [sin(θ/2),  cos(θ/2)]]
#[inline]
pub fn rotation_y(theta: f64) -> Matrix2 {
    let (sin, cos) = (theta / 2.0).sin_cos();
    [
        [Complex64::new(cos, 0.0), Complex64::new(-sin, 0.0)],
        [Complex64::new(sin, 0.0), Complex64::new(cos, 0.0)],
    ]
}

/// Rotation about the Z axis
/// RZ(θ) = [[e^(-iθ/2), 0       ],
///          [0,         e^(iθ/2)]]
#[inline]
pub fn rotation_z(theta: f64) -> Matrix2 {
    let half = theta / 2.0;
    [
        [Complex64::from_polar(1.0, -half), ZERO],
        [ZERO, Complex64::from_polar(1.0, half)],
    ]
}

/// General phase gate
/// P(φ) = [[1, 0     ],
///         [0, e^(iφ)]]
#[inline]
pub fn phase(phi: f64) -> Matrix2 {
    [[ONE, ZERO], [ZERO, Complex64::from_polar(1.0, phi)]]
}

/// Universal single-qubit gate
/// U3(θ,φ,λ) = [[cos(θ/2),          -e^(iλ)·sin(θ/2)    ],
///              [e^(iφ)·sin(θ/2),    e^(i(φ+λ))·cos(θ/2)]]
#[inline]
pub fn u3(theta: f64, phi: f64, lambda: f64) -> Matrix2 {
    let (sin, cos) = (theta / 2.0).sin_cos();
    [
        [Complex64::new(cos, 0.0), -Complex64::from_polar(sin, lambda)],
        [
            Complex64::from_polar(sin, phi),
            Complex64::from_polar(cos, phi + lambda),
        ],
    ]
}
