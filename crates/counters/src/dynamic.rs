//! Dynamic-programming path counter.
//!
//! # Algorithm
//!
//! Every cell in the first row and the first column can be reached in exactly
//! one way, by moving along the edge. Every other cell is reached either from
//! the cell above or the cell to its left, so:
//!
//! ```text
//! cell[i][j] = cell[i - 1][j] + cell[i][j - 1]
//! ```
//!
//! Filling the buffer in row-major order guarantees both neighbors are final
//! before they are read. The answer is the bottom-right cell.
//!
//! # Overflow
//!
//! The buffer holds `u64` values. Cell values grow monotonically toward the
//! bottom-right corner, so the fill overflows exactly when the final count
//! does not fit, first at a 35x35 grid. Additions are checked and an overflow
//! is reported as [`OverflowError`] rather than wrapping.

mod cache;

pub use cache::{CacheStats, MemoCache};

use thiserror::Error;

use pathgrid_core::{Dims, Grid};

/// The dynamic fill ran past `u64::MAX`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("u64 accumulator overflowed at cell ({row}, {col}) of a {dims} grid")]
pub struct OverflowError {
    pub dims: Dims,
    pub row: usize,
    pub col: usize,
}

/// Counts monotone paths by filling `grid`'s buffer in place.
///
/// Every cell read by the recurrence is written earlier in the same call, so
/// whatever the buffer held beforehand does not affect the result.
///
/// # Errors
///
/// Returns an [`OverflowError`] if any cell exceeds `u64::MAX`. The buffer is
/// left partially filled in that case.
pub fn count(grid: &mut Grid) -> Result<u64, OverflowError> {
    let dims = grid.dims();
    let (rows, cols) = (dims.rows(), dims.cols());
    let cells = grid.cells_mut();

    cells[..cols].fill(1);
    for row in cells.chunks_exact_mut(cols) {
        row[0] = 1;
    }

    for i in 1..rows {
        for j in 1..cols {
            let above = cells[(i - 1) * cols + j];
            let left = cells[i * cols + j - 1];
            cells[i * cols + j] = above.checked_add(left).ok_or(OverflowError {
                dims,
                row: i,
                col: j,
            })?;
        }
    }

    Ok(cells[rows * cols - 1])
}
