//! Property-based tests for equation solving.

use std::cmp::Ordering;

use proptest::prelude::*;

use crate::{Complex64, Polynomial, Solution, solve, solve_polynomial};

/// How equation text is written; every style denotes the same polynomial.
#[derive(Debug, Clone, Copy)]
struct Style {
    /// Writes `x`, `-x^2` instead of `+1x`, `-1x^2`.
    bare_units: bool,
    /// Writes `+` before the first term of a side.
    leading_plus: bool,
    /// Writes `3.0x` instead of `3x`.
    decimals: bool,
}

fn styles() -> impl Strategy<Value = Style> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(bare_units, leading_plus, decimals)| {
        Style {
            bare_units,
            leading_plus,
            decimals,
        }
    })
}

/// Renders a term with an explicit sign, e.g. `-3x^2`, `+x`, or `+4.0`.
fn term(coefficient: i32, suffix: &str, style: Style) -> String {
    let sign = if coefficient < 0 { '-' } else { '+' };
    let magnitude = coefficient.unsigned_abs();
    let digits = if style.bare_units && magnitude == 1 && !suffix.is_empty() {
        String::new()
    } else if style.decimals {
        format!("{magnitude}.0")
    } else {
        magnitude.to_string()
    };
    format!("{sign}{digits}{suffix}")
}

/// Renders `a·x³ + b·x² + c·x + d` as one side of an equation.
fn expression([a, b, c, d]: [i32; 4], negate: bool, style: Style) -> String {
    let k = if negate { -1 } else { 1 };
    let mut text: String = [(a, "x^3"), (b, "x^2"), (c, "x"), (d, "")]
        .into_iter()
        .map(|(coefficient, suffix)| term(k * coefficient, suffix, style))
        .collect();
    if !style.leading_plus && text.starts_with('+') {
        text.remove(0);
    }
    text
}

// Strategy for small integer coefficients with at least one variable term
fn coefficients() -> impl Strategy<Value = [i32; 4]> {
    prop::array::uniform4(-10i32..=10)
        .prop_filter("needs a variable term", |[a, b, c, _]| {
            *a != 0 || *b != 0 || *c != 0
        })
}

fn polynomial_of([a, b, c, d]: [i32; 4]) -> Polynomial {
    Polynomial::new(a.into(), b.into(), c.into(), d.into())
}

/// Returns every root sorted by real then imaginary part.
///
/// Signed zeros compare equal, so `-0.0` and `0.0` parts sort together.
fn sorted_roots(solution: &Solution) -> Vec<Complex64> {
    let cmp = |l: f64, r: f64| l.partial_cmp(&r).unwrap_or(Ordering::Equal);
    let mut roots: Vec<_> = solution.roots().collect();
    roots.sort_by(|l, r| cmp(l.re, r.re).then(cmp(l.im, r.im)));
    roots
}

proptest! {
    #[test]
    fn real_roots_satisfy_the_equation(coeffs in coefficients(), style in styles()) {
        let solution = solve(&format!("{}=0", expression(coeffs, false, style)));
        let p = polynomial_of(coeffs);

        prop_assert!(solution.is_ok());
        for &x in &solution.real_roots {
            prop_assert!(p.eval(x).abs() <= 0.25, "P({x}) = {}", p.eval(x));
        }
    }

    #[test]
    fn complex_roots_come_in_conjugate_pairs(coeffs in coefficients(), style in styles()) {
        let solution = solve(&format!("{}=0", expression(coeffs, false, style)));

        prop_assert_eq!(solution.complex_roots.len() % 2, 0);
        for z in &solution.complex_roots {
            prop_assert!(z.im != 0.0);
            let has_conjugate = solution
                .complex_roots
                .iter()
                .any(|w| (*w - z.conj()).norm() <= 1e-9);
            prop_assert!(has_conjugate, "missing conjugate of {z}");
        }
    }

    #[test]
    fn mirrored_equation_has_the_same_roots(coeffs in coefficients(), style in styles()) {
        let original = solve(&format!("{}=0", expression(coeffs, false, style)));
        let swapped = solve(&format!("0={}", expression(coeffs, false, style)));
        let moved = solve(&format!("0={}", expression(coeffs, true, style)));
        let negated = solve_polynomial(&polynomial_of(coeffs).mirrored());

        let expected = sorted_roots(&original);
        for mirrored in [swapped, moved, negated] {
            let actual = sorted_roots(&mirrored);
            prop_assert_eq!(actual.len(), expected.len());
            for (l, r) in actual.iter().zip(&expected) {
                prop_assert!((l - r).norm() <= 1e-9, "{l} != {r}");
            }
        }
    }

    #[test]
    fn degree_decides_root_count(coeffs in coefficients(), style in styles()) {
        let solution = solve(&format!("{}=0", expression(coeffs, false, style)));
        let expected = polynomial_of(coeffs).degree().map_or(0, |d| usize::from(d.power()));
        prop_assert_eq!(solution.len(), expected);
    }
}
