use polyroot_core::{Degree, Polynomial};

use crate::cubic::Branch;

/// Events emitted by the polynomial solver, in the order they occur.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The polynomial was dispatched by its leading non-zero coefficient.
    ///
    /// `degree` is `None` when every non-constant coefficient is zero.
    Dispatched {
        polynomial: Polynomial,
        degree: Option<Degree>,
    },

    /// A quadratic discriminant was computed.
    ///
    /// Negative values lead to a complex conjugate pair.
    QuadraticDiscriminant { discriminant: f64 },

    /// The branch a cubic was solved with.
    Cubic { branch: Branch },

    /// Complex roots with a negligible imaginary part were coerced to real.
    Coerced { moved: usize },
}
