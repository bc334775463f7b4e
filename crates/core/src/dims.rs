use std::fmt;

use thiserror::Error;

/// Validated dimensions of a rectangular lattice.
///
/// Both `rows` and `cols` are at least one, and a buffer of `rows * cols`
/// `u64` cells stays within `isize::MAX` bytes, so a [`Grid`](crate::Grid) of
/// these dimensions can always be allocated and addressed.
///
/// Two grids with equal `Dims` have the same number of monotone paths, which
/// makes `Dims` the natural key for memoized results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(usize, usize)", into = "(usize, usize)")
)]
pub struct Dims {
    rows: usize,
    cols: usize,
}

/// Errors that can occur when validating lattice dimensions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    #[error("rows must be at least 1")]
    ZeroRows,

    #[error("cols must be at least 1")]
    ZeroCols,

    #[error("{rows}x{cols} cells do not fit in memory")]
    TooLarge { rows: usize, cols: usize },
}

impl Dims {
    /// Creates validated dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the cell buffer would
    /// exceed `isize::MAX` bytes.
    pub fn new(rows: usize, cols: usize) -> Result<Self, DimensionError> {
        if rows == 0 {
            return Err(DimensionError::ZeroRows);
        }
        if cols == 0 {
            return Err(DimensionError::ZeroCols);
        }
        let bytes = rows
            .checked_mul(cols)
            .and_then(|cells| cells.checked_mul(size_of::<u64>()));
        if bytes.is_none_or(|bytes| bytes > isize::MAX as usize) {
            return Err(DimensionError::TooLarge { rows, cols });
        }

        Ok(Self { rows, cols })
    }

    /// Returns the number of rows (grid height).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns (grid width).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        // Checked in `new`.
        self.rows * self.cols
    }

    /// Returns the dimensions with rows and columns swapped.
    #[must_use]
    pub fn transposed(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl TryFrom<(usize, usize)> for Dims {
    type Error = DimensionError;

    fn try_from((rows, cols): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(rows, cols)
    }
}

impl From<Dims> for (usize, usize) {
    fn from(dims: Dims) -> Self {
        (dims.rows, dims.cols)
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_dimensions() {
        let dims = Dims::new(3, 7).unwrap();
        assert_eq!(dims.rows(), 3);
        assert_eq!(dims.cols(), 7);
        assert_eq!(dims.cell_count(), 21);
    }

    #[test]
    fn rejects_zero_rows_or_cols() {
        assert_eq!(Dims::new(0, 5), Err(DimensionError::ZeroRows));
        assert_eq!(Dims::new(5, 0), Err(DimensionError::ZeroCols));
        assert_eq!(Dims::new(0, 0), Err(DimensionError::ZeroRows));
    }

    #[test]
    fn rejects_unaddressable_cell_count() {
        let err = Dims::new(usize::MAX, 2).unwrap_err();
        assert_eq!(
            err,
            DimensionError::TooLarge {
                rows: usize::MAX,
                cols: 2
            }
        );

        // The cell count fits in a `usize` but its bytes do not fit in `isize`.
        assert_eq!(
            Dims::new(1 << 60, 1),
            Err(DimensionError::TooLarge {
                rows: 1 << 60,
                cols: 1
            })
        );
        assert!(Dims::new(1 << 20, 1 << 20).is_ok());
    }

    #[test]
    fn transposes_and_displays() {
        let dims = Dims::try_from((2, 9)).unwrap();
        assert_eq!(dims.transposed(), Dims::new(9, 2).unwrap());
        assert_eq!(dims.to_string(), "2x9");
    }
}
