use num_complex::Complex64;

use crate::Error;

/// The roots of a polynomial equation.
///
/// A root appears in at most one of the two sequences: complex roots with a
/// zero imaginary part are reported as real. Check [`error`](Self::error)
/// before trusting either sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solution {
    /// Real roots.
    pub real_roots: Vec<f64>,
    /// Roots with a non-zero imaginary part, in conjugate pairs.
    pub complex_roots: Vec<Complex64>,
    /// Set when the equation could not be solved normally.
    pub error: Option<Error>,
}

impl Solution {
    /// Creates a solution from its real and complex roots.
    #[must_use]
    pub fn new(real_roots: Vec<f64>, complex_roots: Vec<Complex64>) -> Self {
        Self {
            real_roots,
            complex_roots,
            error: None,
        }
    }

    /// Creates a solution that only carries an error, with no roots.
    #[must_use]
    pub fn failed(error: impl Into<Error>) -> Self {
        Self {
            real_roots: Vec::new(),
            complex_roots: Vec::new(),
            error: Some(error.into()),
        }
    }

    /// Returns `true` if no error was reported.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the total number of roots across both sequences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.real_roots.len() + self.complex_roots.len()
    }

    /// Returns `true` if neither sequence holds a root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every root as a complex number, real roots first.
    pub fn roots(&self) -> impl Iterator<Item = Complex64> + '_ {
        self.real_roots
            .iter()
            .map(|&re| Complex64::new(re, 0.0))
            .chain(self.complex_roots.iter().copied())
    }
}
