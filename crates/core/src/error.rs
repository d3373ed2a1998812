use thiserror::Error;

/// Malformed equation text, detected before any term is parsed.
///
/// Variants are listed in the order validation checks them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Error: No equal sign detected.")]
    NoEqualSign,

    #[error("Error: Double multiply sign detected.")]
    DoubleMultiplySign,

    #[error("Error: Double power sign detected.")]
    DoublePowerSign,

    #[error("Error: Double division sign detected.")]
    DoubleDivisionSign,

    #[error("Error: Double variable sign detected.")]
    DoubleVariableSign,

    #[error("Error: Multiple equal signs detected.")]
    MultipleEqualSigns,
}

/// A single term that the equation grammar does not accept.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TermError {
    #[error("empty term")]
    Empty,

    #[error("invalid coefficient in term `{term}`")]
    InvalidCoefficient { term: String },

    #[error("unsupported exponent in term `{term}`")]
    UnsupportedExponent { term: String },

    #[error("malformed term `{term}`")]
    Malformed { term: String },
}

/// Any error reported alongside (or instead of) a [`Solution`].
///
/// [`Solution`]: crate::Solution
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Term(#[from] TermError),

    /// Every non-constant coefficient summed to zero.
    #[error("Missing variable error.")]
    MissingVariable,

    /// Summing like terms left a coefficient outside the `f64` range.
    #[error("coefficient overflow in equation `{equation}`")]
    CoefficientOverflow { equation: String },
}
