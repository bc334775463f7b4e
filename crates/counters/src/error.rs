use thiserror::Error;

use pathgrid_core::{DimensionError, Dims, ParseStrategyError};

/// Errors that can occur while counting paths.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid dimension: {0}")]
    InvalidDimension(#[from] DimensionError),

    #[error("invalid strategy: {0}")]
    InvalidStrategy(#[from] ParseStrategyError),

    #[error("path count for a {dims} grid overflows a u64 accumulator")]
    Overflow { dims: Dims },
}

impl Error {
    /// Returns `true` if the dynamic counter ran out of integer range.
    ///
    /// Callers can fall back to the combinatorial strategy in that case.
    #[must_use]
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }
}
