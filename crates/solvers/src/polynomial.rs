//! Degree dispatch for polynomials of the form `a·x³ + b·x² + c·x + d = 0`.
//!
//! States are mutually exclusive and checked in order: a non-zero cubic
//! coefficient solves as a cubic, then quadratic, then linear. A polynomial
//! with no variable terms reports [`Error::MissingVariable`] with a single
//! `0.0` real root as a placeholder.

mod action;
mod config;
mod event;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use event::Event;

use polyroot_core::{Degree, Error, Observer, Polynomial, Solution};

use crate::{
    coerce::coerce,
    cubic, linear,
    quadratic::{self, Roots},
};

/// Solves a polynomial, reporting each decision to `observer`.
///
/// Complex roots with `|im| <= config.imag_tol()` are returned as real roots.
#[must_use]
pub fn solve<Obs>(polynomial: &Polynomial, config: &Config, mut observer: Obs) -> Solution
where
    Obs: Observer<Event, Action>,
{
    let degree = polynomial.degree();
    notify(
        &mut observer,
        &Event::Dispatched {
            polynomial: *polynomial,
            degree,
        },
    );

    let Polynomial { b, c, d, .. } = *polynomial;

    let solution = match degree {
        Some(Degree::Cubic) => {
            let cubic = cubic::solve(polynomial);
            notify(
                &mut observer,
                &Event::Cubic {
                    branch: cubic.branch,
                },
            );
            Solution::new(Vec::new(), cubic.roots.to_vec())
        }
        Some(Degree::Quadratic) => {
            notify(
                &mut observer,
                &Event::QuadraticDiscriminant {
                    discriminant: quadratic::discriminant(b, c, d),
                },
            );
            match quadratic::solve(b, c, d) {
                Roots::Real(roots) => Solution::new(roots.to_vec(), Vec::new()),
                Roots::Complex(roots) => Solution::new(Vec::new(), roots.to_vec()),
            }
        }
        Some(Degree::Linear) => Solution::new(vec![linear::solve(c, d)], Vec::new()),
        None => {
            return Solution {
                real_roots: vec![0.0],
                complex_roots: Vec::new(),
                error: Some(Error::MissingVariable),
            };
        }
    };

    let before = solution.complex_roots.len();
    let solution = coerce(solution, config.imag_tol());
    let moved = before - solution.complex_roots.len();
    if moved > 0 {
        notify(&mut observer, &Event::Coerced { moved });
    }

    solution
}

/// Solves a polynomial with the default config and no observation.
#[must_use]
pub fn solve_unobserved(polynomial: &Polynomial) -> Solution {
    solve(polynomial, &Config::default(), ())
}

/// Passes an event to the observer.
///
/// [`Action`] has no values, so there is never an action to handle.
fn notify<Obs: Observer<Event, Action>>(observer: &mut Obs, event: &Event) {
    if let Some(action) = observer.observe(event) {
        match action {}
    }
}
