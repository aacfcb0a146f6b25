/// Receives solver events.
///
/// Observation is purely passive: solvers report evaluations and decisions as
/// they happen, and observers may record or forward them, but cannot alter
/// the search. Use `()` as the no-op observer when no diagnostics are needed.
pub trait Observer<E> {
    /// Observes a solver event.
    fn observe(&mut self, event: &E);
}

/// Blanket implementation for observer closures.
impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}

/// A no-op observer that ignores every event.
impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}
