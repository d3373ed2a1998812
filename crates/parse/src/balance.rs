use crate::Term;

/// Which side of the equal sign a term was written on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Side {
    #[default]
    Left,
    Right,
}

/// Moves a term to the left-hand side of the equation.
///
/// Left-hand side terms are returned unchanged. Right-hand side terms have
/// their sign flipped, so an implicitly positive term becomes negative.
#[must_use]
pub fn balance(term: Term, side: Side) -> Term {
    match side {
        Side::Left => term,
        Side::Right => Term {
            sign: term.sign.flip(),
            ..term
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{Exponent, Sign};

    fn balanced(raw: &str, side: Side) -> String {
        let term = Term::parse(raw).expect("term should parse");
        balance(term, side).to_string()
    }

    #[test]
    fn left_side_passes_through() {
        assert_eq!(balanced("-3x", Side::Left), "-3x");
        assert_eq!(balanced("x^2", Side::Left), "+x^2");
    }

    #[test]
    fn right_side_flips_explicit_signs() {
        assert_eq!(balanced("+2x^2", Side::Right), "-2x^2");
        assert_eq!(balanced("-4", Side::Right), "+4");
    }

    #[test]
    fn right_side_negates_unsigned_terms() {
        assert_eq!(balanced("x", Side::Right), "-x");
        assert_eq!(balanced("7", Side::Right), "-7");
    }

    #[test]
    fn keeps_coefficient_and_exponent() {
        let term = Term::new(Sign::Positive, 2.5, Exponent::Cubic);
        let moved = balance(term, Side::Right);
        assert_eq!(moved, Term::new(Sign::Negative, 2.5, Exponent::Cubic));
    }
}
