/// Receives events from a driver and optionally returns a control action.
///
/// Drivers in this workspace (such as the benchmark sweep) emit one event per
/// unit of work. Returning `Some(action)` lets the observer steer the driver,
/// for example to stop early; returning `None` lets it continue.
///
/// The trait is implemented for:
///
/// - `()`, a no-op observer that never acts
/// - any `FnMut(&E) -> Option<A>` closure
///
/// # Example
///
/// ```
/// use pathgrid_core::Observer;
///
/// let mut seen = 0;
/// let mut observer = |event: &u32| {
///     seen += event;
///     (seen > 10).then_some("stop")
/// };
///
/// assert_eq!(observer.observe(&4), None);
/// assert_eq!(observer.observe(&8), Some("stop"));
/// ```
pub trait Observer<E, A> {
    /// Observes an event and returns an optional action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}
