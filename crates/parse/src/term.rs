use std::fmt;

use polyroot_core::TermError;

/// The only variable symbol the grammar accepts.
pub const VARIABLE: char = 'x';

/// The sign of a term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// Returns the opposite sign.
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// Applies this sign to a magnitude.
    #[must_use]
    pub fn apply(self, magnitude: f64) -> f64 {
        match self {
            Sign::Positive => magnitude,
            Sign::Negative => -magnitude,
        }
    }

    fn as_char(self) -> char {
        match self {
            Sign::Positive => '+',
            Sign::Negative => '-',
        }
    }
}

/// The power of the variable in a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Exponent {
    Constant,
    Linear,
    Quadratic,
    Cubic,
}

impl Exponent {
    /// Reads the exponent from the text following the variable symbol.
    ///
    /// An empty suffix means the first power.
    fn from_suffix(suffix: &str, raw: &str) -> Result<Self, TermError> {
        let Some(power) = suffix.strip_prefix('^') else {
            return if suffix.is_empty() {
                Ok(Exponent::Linear)
            } else {
                Err(TermError::Malformed { term: raw.into() })
            };
        };

        match power {
            "1" => Ok(Exponent::Linear),
            "2" => Ok(Exponent::Quadratic),
            "3" => Ok(Exponent::Cubic),
            p if !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()) => {
                Err(TermError::UnsupportedExponent { term: raw.into() })
            }
            _ => Err(TermError::Malformed { term: raw.into() }),
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Exponent::Constant => "",
            Exponent::Linear => "x",
            Exponent::Quadratic => "x^2",
            Exponent::Cubic => "x^3",
        }
    }
}

/// A signed term of an equation, such as `-3x^2` or `+4`.
///
/// The coefficient is a non-negative magnitude; [`Term::value`] applies the sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub sign: Sign,
    pub coefficient: f64,
    pub exponent: Exponent,
}

impl Term {
    /// Creates a term from its parts.
    #[must_use]
    pub fn new(sign: Sign, coefficient: f64, exponent: Exponent) -> Self {
        Self {
            sign,
            coefficient,
            exponent,
        }
    }

    /// Parses a raw term such as `x`, `-x^3`, `+2.5x^2`, `4*x`, or `-7`.
    ///
    /// A term without a leading sign is positive. A variable term without a
    /// coefficient has a coefficient of one.
    ///
    /// # Errors
    ///
    /// Returns a [`TermError`] if the text is empty, the coefficient is not a
    /// plain decimal number, or the exponent is not 1, 2, or 3.
    pub fn parse(raw: &str) -> Result<Self, TermError> {
        if raw.is_empty() {
            return Err(TermError::Empty);
        }

        let (sign, body) = if let Some(rest) = raw.strip_prefix('+') {
            (Sign::Positive, rest)
        } else if let Some(rest) = raw.strip_prefix('-') {
            (Sign::Negative, rest)
        } else {
            (Sign::Positive, raw)
        };

        if body.is_empty() {
            return Err(TermError::Malformed { term: raw.into() });
        }

        let Some((coefficient, suffix)) = body.split_once(VARIABLE) else {
            let magnitude = parse_magnitude(body, raw)?;
            return Ok(Self::new(sign, magnitude, Exponent::Constant));
        };

        let magnitude = match coefficient {
            "" => 1.0,
            c => {
                let c = c.strip_suffix('*').unwrap_or(c);
                if c.is_empty() {
                    return Err(TermError::Malformed { term: raw.into() });
                }
                parse_magnitude(c, raw)?
            }
        };
        let exponent = Exponent::from_suffix(suffix, raw)?;

        Ok(Self::new(sign, magnitude, exponent))
    }

    /// Returns the signed coefficient.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.sign.apply(self.coefficient)
    }

    /// Returns `true` if the term contains the variable.
    #[must_use]
    pub fn is_variable(&self) -> bool {
        self.exponent != Exponent::Constant
    }
}

/// Parses an unsigned decimal literal made of digits and at most one `.`.
///
/// Literals too large for an `f64` are rejected rather than read as infinity.
fn parse_magnitude(text: &str, raw: &str) -> Result<f64, TermError> {
    let plain = text.chars().all(|c| c.is_ascii_digit() || c == '.');
    match text.parse::<f64>() {
        Ok(value) if plain && value.is_finite() => Ok(value),
        _ => Err(TermError::InvalidCoefficient { term: raw.into() }),
    }
}

impl fmt::Display for Term {
    /// Writes the term with an explicit sign, omitting a unit coefficient on
    /// variable terms.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sign.as_char())?;
        #[allow(clippy::float_cmp)]
        if !self.is_variable() || self.coefficient != 1.0 {
            write!(f, "{}", self.coefficient)?;
        }
        f.write_str(self.exponent.suffix())
    }
}
