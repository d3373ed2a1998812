//! Solve linear, quadratic, and cubic equations written as text.
//!
//! ```
//! let solution = polyroot::solve("x^2+3=1");
//!
//! assert!(solution.is_ok());
//! assert!(solution.real_roots.is_empty());
//! assert_eq!(solution.complex_roots.len(), 2);
//! ```
//!
//! # Equation syntax
//!
//! - `x` is the only variable
//! - `^` raises `x` to the power 1, 2, or 3, e.g. `x^3`
//! - terms are joined with `+` and `-`, and exactly one `=` separates the sides
//! - coefficients are plain decimals, optionally followed by `*`, e.g. `2.5x^2` or `4*x`
//!
//! `x^3+x^2+3=3+x-2x^2` is valid; `y^2=x**2` is not.
//!
//! Invalid input never panics: the returned [`Solution`] carries the error and
//! no roots.

#[cfg(test)]
mod proptests;

pub use polyroot_core::{
    Complex64, Degree, Error, Observer, Polynomial, Solution, SyntaxError, TermError,
};
pub use polyroot_parse::{self as parse, polynomial, validate};
pub use polyroot_solvers::{self as solvers, Action, Config, ConfigError, Event};

/// Parses and solves an equation.
///
/// Check [`Solution::error`] before using the roots.
#[must_use]
pub fn solve(equation: &str) -> Solution {
    solve_with(equation, &Config::default(), ())
}

/// Parses and solves an equation with an explicit config, reporting solver
/// events to `observer`.
#[must_use]
pub fn solve_with<Obs>(equation: &str, config: &Config, observer: Obs) -> Solution
where
    Obs: Observer<Event, Action>,
{
    match polynomial(equation) {
        Ok(polynomial) => polyroot_solvers::solve(&polynomial, config, observer),
        Err(error) => {
            log::warn!("rejected equation {equation:?}: {error}");
            Solution::failed(error)
        }
    }
}

/// Solves a polynomial given directly by its coefficients.
#[must_use]
pub fn solve_polynomial(polynomial: &Polynomial) -> Solution {
    polyroot_solvers::solve_unobserved(polynomial)
}
