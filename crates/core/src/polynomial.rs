use num_complex::Complex64;

/// A polynomial equation of the form `a·x³ + b·x² + c·x + d = 0`.
///
/// Terms from the right-hand side of the original equation have already been
/// folded in with their signs flipped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Polynomial {
    /// Cubic coefficient.
    pub a: f64,
    /// Quadratic coefficient.
    pub b: f64,
    /// Linear coefficient.
    pub c: f64,
    /// Constant term.
    pub d: f64,
}

/// The solver a polynomial dispatches to, chosen by its leading coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degree {
    Linear,
    Quadratic,
    Cubic,
}

impl Degree {
    /// Returns the highest power of `x` for this degree.
    #[must_use]
    pub fn power(self) -> u8 {
        match self {
            Degree::Linear => 1,
            Degree::Quadratic => 2,
            Degree::Cubic => 3,
        }
    }
}

impl Polynomial {
    /// Creates a polynomial from its coefficients, highest power first.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Returns the degree, checking the cubic coefficient first, then the
    /// quadratic, then the linear one.
    ///
    /// Returns `None` when only the constant term may be non-zero.
    #[must_use]
    pub fn degree(&self) -> Option<Degree> {
        if self.a != 0.0 {
            Some(Degree::Cubic)
        } else if self.b != 0.0 {
            Some(Degree::Quadratic)
        } else if self.c != 0.0 {
            Some(Degree::Linear)
        } else {
            None
        }
    }

    /// Returns `true` if every coefficient is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.a, self.b, self.c, self.d].iter().all(|k| k.is_finite())
    }

    /// Evaluates the polynomial at a real `x` using Horner's scheme.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        ((self.a * x + self.b) * x + self.c) * x + self.d
    }

    /// Evaluates the polynomial at a complex `z`.
    #[must_use]
    pub fn eval_complex(&self, z: Complex64) -> Complex64 {
        ((z * self.a + self.b) * z + self.c) * z + self.d
    }

    /// Returns the polynomial with every coefficient negated.
    ///
    /// The roots are unchanged; this is the form obtained by moving every
    /// term to the other side of the equal sign.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        Self::new(-self.a, -self.b, -self.c, -self.d)
    }
}
