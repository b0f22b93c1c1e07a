/// Receives solver events and decides how a run should proceed.
///
/// Observers let callers watch or steer a drain run without changing the
/// solver API: recording samples for a plot, logging, or cutting a run short
/// once a time horizon is reached.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the run continue unchanged.
///
/// Closures automatically implement `Observer`, and `()` is a no-op observer
/// that never returns an action.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Halt;

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let mut observer = |event: &u32| {
            seen.push(*event);
            (*event == 3).then_some(Halt)
        };

        assert_eq!(observer.observe(&1), None);
        assert_eq!(observer.observe(&3), Some(Halt));
        assert_eq!(seen, vec![1, 3]);
    }

    #[test]
    fn unit_observer_never_acts() {
        let action: Option<Halt> = ().observe(&42_u32);
        assert!(action.is_none());
    }
}
