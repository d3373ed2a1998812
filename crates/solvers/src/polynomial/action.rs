/// Control actions supported by the polynomial solver.
///
/// The solver is closed-form, so there is nothing for an observer to steer:
/// this type has no values and observers always return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {}
