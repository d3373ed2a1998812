//! Closed-form root solvers for polynomials of degree one to three.
//!
//! A [`Polynomial`] dispatches on its leading non-zero coefficient:
//!
//! - [`cubic`]: Cardano's method, with a trigonometric form for three real roots
//! - [`quadratic`]: the quadratic formula, complex-aware
//! - [`linear`]: a single real root
//!
//! [`polynomial::solve`] runs the dispatch and [`coerce`]s complex roots with
//! a zero imaginary part into the real roots.
//!
//! [`Polynomial`]: polyroot_core::Polynomial

pub mod coerce;
pub mod cubic;
pub mod linear;
pub mod polynomial;
pub mod quadratic;

pub use polynomial::{Action, Config, ConfigError, Event, solve, solve_unobserved};
