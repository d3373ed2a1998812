//! Complex-to-real coercion.

use num_complex::Complex64;
use polyroot_core::Solution;

/// Splits roots into real values and truly complex roots in a single pass.
///
/// A root counts as real when `|im| <= imag_tol`. Relative order is kept
/// within each sequence.
#[must_use]
pub fn partition_roots<I>(roots: I, imag_tol: f64) -> (Vec<f64>, Vec<Complex64>)
where
    I: IntoIterator<Item = Complex64>,
{
    let (real, complex): (Vec<Complex64>, Vec<Complex64>) = roots
        .into_iter()
        .partition(|z| z.im.abs() <= imag_tol);

    (real.into_iter().map(|z| z.re).collect(), complex)
}

/// Moves every complex root of `solution` with `|im| <= imag_tol` into its
/// real roots, after any real roots already present.
#[must_use]
pub fn coerce(solution: Solution, imag_tol: f64) -> Solution {
    let Solution {
        mut real_roots,
        complex_roots,
        error,
    } = solution;

    let (coerced, complex_roots) = partition_roots(complex_roots, imag_tol);
    real_roots.extend(coerced);

    Solution {
        real_roots,
        complex_roots,
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_every_zero_imaginary_root() {
        let roots = [
            Complex64::new(1.0, 0.0),
            Complex64::new(1.0, -0.0),
            Complex64::new(1.0, 0.0),
        ];
        let (real, complex) = partition_roots(roots, 0.0);
        assert_eq!(real, [1.0, 1.0, 1.0]);
        assert!(complex.is_empty());
    }

    #[test]
    fn keeps_conjugate_pairs_complex() {
        let roots = [
            Complex64::new(-2.0, 0.0),
            Complex64::new(1.0, 3.0),
            Complex64::new(1.0, -3.0),
        ];
        let (real, complex) = partition_roots(roots, 0.0);
        assert_eq!(real, [-2.0]);
        assert_eq!(complex, [Complex64::new(1.0, 3.0), Complex64::new(1.0, -3.0)]);
    }

    #[test]
    fn tolerance_widens_what_counts_as_real() {
        let roots = [Complex64::new(1.0, 1e-14), Complex64::new(1.0, -1e-14)];

        let (real, complex) = partition_roots(roots, 0.0);
        assert!(real.is_empty());
        assert_eq!(complex.len(), 2);

        let (real, complex) = partition_roots(roots, 1e-12);
        assert_eq!(real, [1.0, 1.0]);
        assert!(complex.is_empty());
    }

    #[test]
    fn coerce_appends_after_existing_real_roots() {
        let solution = Solution::new(vec![5.0], vec![Complex64::new(2.0, 0.0)]);
        let coerced = coerce(solution, 0.0);
        assert_eq!(coerced.real_roots, [5.0, 2.0]);
        assert!(coerced.complex_roots.is_empty());
        assert!(coerced.is_ok());
    }
}
