/// Separates raw terms in a delimited equation.
pub const DELIMITER: char = ';';

/// The segment that marks the boundary between the two sides.
pub const EQUALS_MARKER: &str = "=";

/// Returns `true` for characters that start a new term.
fn is_sign(c: char) -> bool {
    matches!(c, '+' | '-' | '=')
}

/// Inserts a [`DELIMITER`] before every sign so each term keeps its own sign.
///
/// The `=` sign is also followed by a delimiter, which leaves it as a
/// standalone marker segment. A sign in the first position is never preceded
/// by a delimiter. ASCII whitespace is dropped.
///
/// ```
/// assert_eq!(polyroot_parse::delimit("x^3+2x^2+x+1=0"), "x^3;+2x^2;+x;+1;=;0");
/// ```
#[must_use]
pub fn delimit(equation: &str) -> String {
    let mut delimited = String::with_capacity(equation.len() * 2);

    let chars = equation.chars().filter(|c| !c.is_ascii_whitespace());
    for (i, c) in chars.enumerate() {
        if is_sign(c) && i != 0 {
            delimited.push(DELIMITER);
        }
        delimited.push(c);
        if c == '=' {
            delimited.push(DELIMITER);
        }
    }

    delimited
}

/// Splits an equation into its raw terms, in order.
///
/// Terms before the [`EQUALS_MARKER`] segment belong to the left-hand side,
/// terms after it to the right-hand side. Empty segments are dropped.
#[must_use]
pub fn normalize(equation: &str) -> Vec<String> {
    let terms: Vec<String> = delimit(equation)
        .split(DELIMITER)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect();

    log::trace!("normalized {equation:?} into {terms:?}");
    terms
}
