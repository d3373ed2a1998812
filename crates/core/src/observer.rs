/// Watches a polynomial solve as it happens.
///
/// The solver reports which degree it dispatched to, the discriminant or
/// cubic branch it took, and how many roots were coerced to real. This is
/// how those decisions reach logs and tests.
///
/// The closed-form solvers use an uninhabited action type, so `observe`
/// can only ever return `None` and an observer never changes the roots.
/// The `A` parameter keeps the trait usable by a solver that does accept
/// actions.
///
/// Closures implement `Observer`, and `()` is the observer that ignores
/// every event.
pub trait Observer<E, A> {
    /// Observes a solver event; a returned action would steer the solver.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Closures taking the event by reference.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// Ignores every event.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::{Degree, Polynomial};

    fn report<Obs: Observer<Option<Degree>, ()>>(observer: &mut Obs, p: &Polynomial) -> bool {
        observer.observe(&p.degree()).is_some()
    }

    #[test]
    fn closures_and_unit_observe_events() {
        let mut seen = Vec::new();
        let mut closure = |degree: &Option<Degree>| -> Option<()> {
            seen.push(*degree);
            None
        };
        assert!(!report(&mut closure, &Polynomial::new(0.0, 1.0, 0.0, -4.0)));
        assert!(!report(&mut closure, &Polynomial::default()));
        assert_eq!(seen, [Some(Degree::Quadratic), None]);

        assert!(!report(&mut (), &Polynomial::new(1.0, 0.0, 0.0, 0.0)));
    }
}
