//! Quadratic equations `a·x² + b·x + c = 0`.
//!
//! The coefficients here are named for the quadratic itself; when solving a
//! [`Polynomial`] they are its `b`, `c`, and `d`.
//!
//! [`Polynomial`]: polyroot_core::Polynomial

use num_complex::Complex64;

/// The two roots of a quadratic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    /// Two real roots in ascending order. Equal for a zero discriminant.
    Real([f64; 2]),
    /// A complex conjugate pair, negative imaginary part first when `a > 0`.
    Complex([Complex64; 2]),
}

impl Roots {
    /// Returns both roots as complex numbers.
    #[must_use]
    pub fn to_complex(self) -> [Complex64; 2] {
        match self {
            Roots::Real(roots) => roots.map(|x| Complex64::new(x, 0.0)),
            Roots::Complex(roots) => roots,
        }
    }
}

/// Returns `b² − 4ac`.
#[must_use]
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Solves `a·x² + b·x + c = 0` with the quadratic formula.
///
/// A negative discriminant yields a complex pair rather than `NaN`.
/// The caller must ensure `a` is non-zero.
#[must_use]
pub fn solve(a: f64, b: f64, c: f64) -> Roots {
    let delta = discriminant(a, b, c);
    let denom = 2.0 * a;

    if delta < 0.0 {
        let re = -b / denom;
        let im = delta.abs().sqrt() / denom;
        return Roots::Complex([Complex64::new(re, -im), Complex64::new(re, im)]);
    }

    let sqrt_delta = delta.sqrt();
    let x1 = (-b - sqrt_delta) / denom;
    let x2 = (-b + sqrt_delta) / denom;
    Roots::Real([x1.min(x2), x1.max(x2)])
}
