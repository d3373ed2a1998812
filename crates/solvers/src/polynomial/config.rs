use thiserror::Error;

/// Configuration for the polynomial solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    imag_tol: f64,
}

/// Errors that can occur when validating a polynomial solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("imag_tol must be finite and non-negative")]
    ImagTol,
}

impl Default for Config {
    /// Only roots with an imaginary part of exactly zero count as real.
    fn default() -> Self {
        Self { imag_tol: 0.0 }
    }
}

impl Config {
    /// Creates a new config with a validated coercion tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `imag_tol` is negative or non-finite.
    pub fn new(imag_tol: f64) -> Result<Self, ConfigError> {
        if !imag_tol.is_finite() || imag_tol < 0.0 {
            return Err(ConfigError::ImagTol);
        }
        Ok(Self { imag_tol })
    }

    /// Returns the largest imaginary magnitude coerced to a real root.
    #[must_use]
    pub fn imag_tol(&self) -> f64 {
        self.imag_tol
    }
}
