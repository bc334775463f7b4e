use pathgrid_core::{Dims, Strategy};
use pathgrid_counters::BigUint;

/// Event emitted by the sweep after each timed strategy call.
///
/// Each size produces two events, dynamic first.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Position of the size in the sweep.
    pub index: usize,

    pub dims: Dims,

    pub strategy: Strategy,

    /// Elapsed seconds recorded by the harness for this call.
    pub seconds: f64,

    /// The path count, or `None` if the dynamic counter overflowed and the
    /// sweep is skipping overflowed sizes.
    pub count: Option<&'a BigUint>,
}
