//! Linear equations `c·x + d = 0`.

/// Returns the root of `c·x + d = 0`.
///
/// The caller must ensure `c` is non-zero.
#[must_use]
pub fn solve(c: f64, d: f64) -> f64 {
    -d / c
}
