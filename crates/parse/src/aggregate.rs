use polyroot_core::{Error, Polynomial, TermError};

use crate::{Term, classify, normalize, separate_by_power, validate};

/// Sums the signed coefficients of variable terms sharing one power.
#[must_use]
pub fn sum_variable_terms(terms: &[Term]) -> f64 {
    terms.iter().map(Term::value).sum()
}

/// Sums constant terms.
#[must_use]
pub fn sum_constants(terms: &[Term]) -> f64 {
    terms.iter().map(Term::value).sum()
}

/// Parses raw terms and sums their signed coefficients.
///
/// ```
/// assert_eq!(polyroot_parse::sum_raw_terms(&["1", "4", "-2"]), Ok(3.0));
/// assert_eq!(polyroot_parse::sum_raw_terms(&["x", "4x", "-2x"]), Ok(3.0));
/// ```
///
/// # Errors
///
/// Returns a [`TermError`] for the first raw term that fails to parse.
pub fn sum_raw_terms<S: AsRef<str>>(raw_terms: &[S]) -> Result<f64, TermError> {
    raw_terms
        .iter()
        .map(|raw| Term::parse(raw.as_ref()).map(|term| term.value()))
        .sum()
}

/// Parses an equation into its normalized [`Polynomial`].
///
/// # Errors
///
/// Returns [`Error::Syntax`] if the text fails validation, [`Error::Term`]
/// if a term cannot be parsed, or [`Error::CoefficientOverflow`] if like
/// terms sum past the `f64` range.
pub fn polynomial(equation: &str) -> Result<Polynomial, Error> {
    validate(equation)?;

    let classified = classify(&normalize(equation))?;
    let by_power = separate_by_power(&classified.variables);

    let polynomial = Polynomial::new(
        sum_variable_terms(&by_power.third),
        sum_variable_terms(&by_power.second),
        sum_variable_terms(&by_power.first),
        sum_constants(&classified.constants),
    );

    if !polynomial.is_finite() {
        return Err(Error::CoefficientOverflow {
            equation: equation.into(),
        });
    }

    log::debug!("parsed {equation:?} as {polynomial:?}");
    Ok(polynomial)
}
