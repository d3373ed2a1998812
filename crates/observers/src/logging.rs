use std::fmt::Debug;

use log::Level;
use polyroot_core::Observer;

/// Forwards solver events to the `log` facade.
///
/// Each event is written with its `Debug` representation under the
/// `polyroot::solver` target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
}

impl LogObserver {
    /// The target every event is logged under.
    pub const TARGET: &'static str = "polyroot::solver";

    /// Creates an observer that logs at the given level.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Returns the level events are logged at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogObserver {
    /// Logs at [`Level::Debug`].
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl<E: Debug, A> Observer<E, A> for LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        log::log!(target: Self::TARGET, self.level, "{event:?}");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use polyroot_core::Polynomial;
    use polyroot_solvers::{Config, solve};

    #[test]
    fn defaults_to_debug() {
        assert_eq!(LogObserver::default().level(), Level::Debug);
    }

    #[test]
    fn never_interferes_with_solving() {
        let p = Polynomial::new(0.0, 0.0, 2.0, 4.0);
        let solution = solve(&p, &Config::default(), LogObserver::new(Level::Trace));
        assert_eq!(solution.real_roots, [-2.0]);
    }
}
