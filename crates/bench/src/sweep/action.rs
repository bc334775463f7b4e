/// Control actions supported by the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the sweep and return the samples completed so far.
    StopEarly,
}
