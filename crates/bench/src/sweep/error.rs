use thiserror::Error;

use pathgrid_core::Dims;
use pathgrid_counters::BigUint;

/// Errors that can occur during a sweep.
#[derive(Debug, Error)]
pub enum Error {
    #[error("path count failed: {0}")]
    Count(#[from] pathgrid_counters::Error),

    #[error("strategies disagree on a {dims} grid: dynamic {dynamic}, combinatorial {combinatorial}")]
    Disagreement {
        dims: Dims,
        dynamic: BigUint,
        combinatorial: BigUint,
    },
}
