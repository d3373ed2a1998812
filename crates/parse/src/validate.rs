use polyroot_core::SyntaxError;

/// Checks that the text is an actual equation before any term is parsed.
///
/// Rejects text without an `=` sign and text containing doubled operators
/// (`**`, `^^`, `//`) or a doubled variable (`xx`). An equation may contain
/// only one `=` sign.
///
/// # Errors
///
/// Returns the first [`SyntaxError`] found, checked in declaration order.
pub fn validate(equation: &str) -> Result<(), SyntaxError> {
    let checks = [
        (!equation.contains('='), SyntaxError::NoEqualSign),
        (equation.contains("**"), SyntaxError::DoubleMultiplySign),
        (equation.contains("^^"), SyntaxError::DoublePowerSign),
        (equation.contains("//"), SyntaxError::DoubleDivisionSign),
        (equation.contains("xx"), SyntaxError::DoubleVariableSign),
        (equation.matches('=').count() > 1, SyntaxError::MultipleEqualSigns),
    ];

    match checks.into_iter().find(|(failed, _)| *failed) {
        Some((_, error)) => Err(error),
        None => Ok(()),
    }
}
