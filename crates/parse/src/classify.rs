use polyroot_core::TermError;

use crate::{Exponent, Side, Term, balance, tokenize::EQUALS_MARKER};

/// Balanced terms split into those that carry the variable and those that don't.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classified {
    pub variables: Vec<Term>,
    pub constants: Vec<Term>,
}

/// Variable terms bucketed by exponent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ByPower {
    pub first: Vec<Term>,
    pub second: Vec<Term>,
    pub third: Vec<Term>,
}

/// Parses raw terms and separates variable terms from constants.
///
/// The [`EQUALS_MARKER`] segment switches to the right-hand side and produces
/// no term. Every term is [`balance`]d for the side it was written on, so the
/// result describes `P(x) = 0`.
///
/// # Errors
///
/// Returns a [`TermError`] for the first raw term that fails to parse.
pub fn classify<S: AsRef<str>>(raw_terms: &[S]) -> Result<Classified, TermError> {
    let mut side = Side::Left;
    let mut classified = Classified::default();

    for raw in raw_terms {
        let raw = raw.as_ref();
        if raw == EQUALS_MARKER {
            side = Side::Right;
            continue;
        }

        let term = balance(Term::parse(raw)?, side);
        if term.is_variable() {
            classified.variables.push(term);
        } else {
            classified.constants.push(term);
        }
    }

    Ok(classified)
}

/// Buckets variable terms by their exponent.
///
/// Constant terms are ignored.
#[must_use]
pub fn separate_by_power(variables: &[Term]) -> ByPower {
    let mut by_power = ByPower::default();
    for &term in variables {
        match term.exponent {
            Exponent::Cubic => by_power.third.push(term),
            Exponent::Quadratic => by_power.second.push(term),
            Exponent::Linear => by_power.first.push(term),
            Exponent::Constant => {}
        }
    }
    by_power
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::normalize;

    fn rendered(terms: &[Term]) -> Vec<String> {
        terms.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn splits_variables_and_constants() {
        let classified = classify(&normalize("x^3+x^2+3=3+x-2x^2")).expect("should classify");

        assert_eq!(rendered(&classified.variables), ["+x^3", "+x^2", "-x", "+2x^2"]);
        assert_eq!(rendered(&classified.constants), ["+3", "-3"]);
    }

    #[test]
    fn marker_produces_no_term() {
        let classified = classify(&["x", "=", "4"]).expect("should classify");
        assert_eq!(classified.variables.len(), 1);
        assert_eq!(rendered(&classified.constants), ["-4"]);
    }

    #[test]
    fn reports_the_failing_term() {
        let err = classify(&["2x", "=", "3y"]).expect_err("should fail");
        assert_eq!(err, TermError::InvalidCoefficient { term: "3y".into() });
    }

    #[test]
    fn buckets_highest_power_correctly() {
        let classified = classify(&normalize("x^3+2x^2+x-4x^3=x^2")).expect("should classify");
        let by_power = separate_by_power(&classified.variables);

        assert_eq!(rendered(&by_power.first), ["+x"]);
        assert_eq!(rendered(&by_power.second), ["+2x^2", "-x^2"]);
        assert_eq!(rendered(&by_power.third), ["+x^3", "-4x^3"]);
    }
}
