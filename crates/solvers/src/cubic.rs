//! Cubic equations `a·x³ + b·x² + c·x + d = 0` by Cardano's method.
//!
//! With `q = (3ac − b²)/(9a²)` and `r = (−2b³ + 9abc − 27a²d)/(54a³)`, the
//! sign of `q³ + r²` decides the shape of the solution set:
//!
//! - negative: three distinct real roots, found with the [`trigonometric`] form
//! - otherwise: one real root and a conjugate pair, from the radicals
//!   `s = ∛(r + √(q³ + r²))` and `t = ∛(r − √(q³ + r²))`
//!
//! A zero constant term factors out a root at `x = 0` instead.

mod trigonometric;

use num_complex::Complex64;
use polyroot_core::Polynomial;

use crate::quadratic;

/// Which formula produced the roots of a cubic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Branch {
    /// `d = 0`: one root at zero, the others from `a·x² + b·x + c`.
    FactoredZeroRoot,
    /// `q³ + r² < 0`: three real roots from the trigonometric form.
    Trigonometric { q: f64, r: f64 },
    /// `q³ + r² ≥ 0`: Cardano's radicals.
    Cardano { q: f64, r: f64 },
}

/// The three roots of a cubic and the branch that found them.
///
/// Roots are not yet coerced; real roots may appear with a zero imaginary part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    pub branch: Branch,
    pub roots: [Complex64; 3],
}

/// Solves a cubic polynomial.
///
/// The caller must ensure `polynomial.a` is non-zero.
#[must_use]
pub fn solve(polynomial: &Polynomial) -> Cubic {
    let Polynomial { a, b, c, d } = *polynomial;

    if d == 0.0 {
        let [x1, x2] = quadratic::solve(a, b, c).to_complex();
        return Cubic {
            branch: Branch::FactoredZeroRoot,
            roots: [Complex64::new(0.0, 0.0), x1, x2],
        };
    }

    let q = (3.0 * a * c - b * b) / (9.0 * a * a);
    let r = (-2.0 * b.powi(3) + 9.0 * a * b * c - 27.0 * a * a * d) / (54.0 * a.powi(3));
    let discriminant = q.powi(3) + r * r;

    if discriminant < 0.0 {
        return Cubic {
            branch: Branch::Trigonometric { q, r },
            roots: trigonometric::roots(polynomial).map(|x| Complex64::new(x, 0.0)),
        };
    }

    let shift = b / (3.0 * a);
    let sqrt_disc = discriminant.sqrt();
    let s = (r + sqrt_disc).cbrt();
    let t = (r - sqrt_disc).cbrt();

    let re = -(s + t) / 2.0 - shift;
    let im = (s - t) * 3.0_f64.sqrt() / 2.0;

    Cubic {
        branch: Branch::Cardano { q, r },
        roots: [
            Complex64::new(s + t - shift, 0.0),
            Complex64::new(re, im),
            Complex64::new(re, -im),
        ],
    }
}
