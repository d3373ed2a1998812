//! Core types for polyroot.
//!
//! This crate defines the shared types that the parser, solvers, and
//! observers build on:
//!
//! - [`Polynomial`]: the normalized form `a·x³ + b·x² + c·x + d = 0`
//! - [`Degree`]: which closed-form solver a polynomial dispatches to
//! - [`Solution`]: real roots, complex roots, and an optional error
//! - [`Error`], [`SyntaxError`], [`TermError`]: the error taxonomy
//! - [`Observer`]: receives solver events and optionally returns control actions

mod error;
mod observer;
mod polynomial;
mod solution;

pub use error::{Error, SyntaxError, TermError};
pub use num_complex::Complex64;
pub use observer::Observer;
pub use polynomial::{Degree, Polynomial};
pub use solution::Solution;
