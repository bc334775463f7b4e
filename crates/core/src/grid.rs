use crate::{DimensionError, Dims};

/// A rectangular lattice with a scratch buffer for path counting.
///
/// The buffer holds one `u64` per cell in row-major order and is
/// zero-initialized at creation. Table-filling counters write into it in
/// place; closed-form counters only read the dimensions.
///
/// The buffer length always equals `rows * cols`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dims: Dims,
    cells: Vec<u64>,
}

impl Grid {
    /// Creates a grid with a zero-filled `rows x cols` buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if `rows` or `cols` is zero, or if the cell buffer
    /// would exceed `isize::MAX` bytes.
    pub fn new(rows: usize, cols: usize) -> Result<Self, DimensionError> {
        Ok(Self::from_dims(Dims::new(rows, cols)?))
    }

    /// Creates a zero-filled grid from already validated dimensions.
    #[must_use]
    pub fn from_dims(dims: Dims) -> Self {
        Self {
            dims,
            cells: vec![0; dims.cell_count()],
        }
    }

    #[must_use]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.dims.rows()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.dims.cols()
    }

    /// Returns the value at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u64> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Overwrites the value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: u64) {
        let i = self
            .index(row, col)
            .unwrap_or_else(|| panic!("cell ({row}, {col}) is outside a {} grid", self.dims));
        self.cells[i] = value;
    }

    /// Returns one row of the buffer.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[u64] {
        let cols = self.cols();
        &self.cells[row * cols..(row + 1) * cols]
    }

    /// Returns the whole buffer in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[u64] {
        &self.cells
    }

    /// Returns the whole buffer in row-major order for in-place filling.
    pub fn cells_mut(&mut self) -> &mut [u64] {
        &mut self.cells
    }

    /// Zeroes the buffer so the grid can be reused.
    pub fn reset(&mut self) {
        self.cells.fill(0);
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows() && col < self.cols()).then(|| row * self.cols() + col)
    }
}
