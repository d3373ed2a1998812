use std::f64::consts::PI;

use polyroot_core::Polynomial;

/// Returns the three real roots of a cubic with `q³ + r² < 0`.
///
/// Uses the depressed cubic `t³ + p·t + q = 0` (with `x = t − b/(3a)`):
///
/// `t_k = 2√(−p/3) · cos[(arccos(3q/(2p) · √(−3/p)) − 2πk) / 3]`, `k = 0, 1, 2`.
///
/// The arccos argument is clamped to `[−1, 1]`; rounding can push it just
/// outside when two roots nearly coincide.
pub(super) fn roots(polynomial: &Polynomial) -> [f64; 3] {
    let Polynomial { a, b, c, d } = *polynomial;

    let p = (3.0 * a * c - b * b) / (3.0 * a * a);
    let q = (2.0 * b.powi(3) - 9.0 * a * b * c + 27.0 * a * a * d) / (27.0 * a.powi(3));

    let amplitude = 2.0 * (-p / 3.0).sqrt();
    let angle = ((3.0 * q) / (2.0 * p) * (-3.0 / p).sqrt())
        .clamp(-1.0, 1.0)
        .acos();
    let shift = b / (3.0 * a);

    [0.0, 1.0, 2.0].map(|k| amplitude * ((angle - 2.0 * PI * k) / 3.0).cos() - shift)
}
