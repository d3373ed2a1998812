//! Turns equation text into a [`Polynomial`].
//!
//! The pipeline runs strictly one way:
//!
//! 1. [`validate`] rejects malformed text with a [`SyntaxError`]
//! 2. [`normalize`] splits the equation into raw signed terms around an `=` marker
//! 3. [`classify`] parses each raw term into a [`Term`], [`balance`]s
//!    right-hand side terms, and separates variable terms from constants
//! 4. [`separate_by_power`] buckets variable terms by exponent
//! 5. [`sum_variable_terms`] and [`sum_constants`] collapse each bucket to a
//!    single coefficient
//!
//! [`polynomial`] runs the whole pipeline.
//!
//! [`Polynomial`]: polyroot_core::Polynomial
//! [`SyntaxError`]: polyroot_core::SyntaxError

mod aggregate;
mod balance;
mod classify;
mod term;
mod tokenize;
mod validate;

pub use aggregate::{polynomial, sum_constants, sum_raw_terms, sum_variable_terms};
pub use balance::{Side, balance};
pub use classify::{ByPower, Classified, classify, separate_by_power};
pub use term::{Exponent, Sign, Term, VARIABLE};
pub use tokenize::{DELIMITER, EQUALS_MARKER, delimit, normalize};
pub use validate::validate;
