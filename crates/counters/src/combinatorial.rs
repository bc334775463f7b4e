//! Closed-form path counter.
//!
//! A monotone path across an `N x M` grid is a sequence of `N - 1` down moves
//! and `M - 1` right moves in some order. Choosing where the down moves go
//! among all `N + M - 2` moves fixes the path, so the count is:
//!
//! ```text
//! C(N + M - 2, N - 1)
//! ```
//!
//! The coefficient is evaluated with the multiplicative formula over
//! `k = min(N - 1, M - 1)` terms. After step `i` the accumulator equals
//! `C(n - k + i, i)`, so every division is exact and no precision is lost.

use num_bigint::BigUint;

use pathgrid_core::{Dims, Grid};

/// Counts monotone paths across `grid` without touching its buffer.
#[must_use]
pub fn count(grid: &Grid) -> BigUint {
    count_dims(grid.dims())
}

/// Counts monotone paths across a grid of the given dimensions.
#[must_use]
pub fn count_dims(dims: Dims) -> BigUint {
    let down = dims.rows() - 1;
    let right = dims.cols() - 1;
    binomial(down as u128 + right as u128, down.min(right) as u128)
}

/// Computes `C(n, k)` exactly.
///
/// Returns zero when `k > n`.
#[must_use]
pub fn binomial(n: u128, k: u128) -> BigUint {
    if k > n {
        return BigUint::from(0u8);
    }
    let k = k.min(n - k);

    let mut acc = BigUint::from(1u8);
    for i in 1..=k {
        acc *= n - k + i;
        acc /= i;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_for(rows: usize, cols: usize) -> BigUint {
        count(&Grid::new(rows, cols).unwrap())
    }

    #[test]
    fn small_binomials() {
        assert_eq!(binomial(0, 0), BigUint::from(1u8));
        assert_eq!(binomial(5, 0), BigUint::from(1u8));
        assert_eq!(binomial(5, 2), BigUint::from(10u8));
        assert_eq!(binomial(5, 5), BigUint::from(1u8));
        assert_eq!(binomial(3, 4), BigUint::from(0u8));
    }

    #[test]
    fn edges_have_a_single_path() {
        assert_eq!(count_for(1, 1), BigUint::from(1u8));
        assert_eq!(count_for(1, 40), BigUint::from(1u8));
        assert_eq!(count_for(40, 1), BigUint::from(1u8));
    }

    #[test]
    fn known_values() {
        assert_eq!(count_for(3, 3), BigUint::from(6u8));
        assert_eq!(count_for(16, 20), BigUint::from(1_855_967_520u64));
    }

    #[test]
    fn exceeds_u64_without_loss() {
        // C(68, 34)
        assert_eq!(
            count_for(35, 35),
            BigUint::from(28_453_041_475_240_576_740u128)
        );
        // C(78, 39)
        assert_eq!(
            count_for(40, 40),
            BigUint::from(27_217_014_869_199_032_015_600u128)
        );
    }

    #[test]
    fn leaves_buffer_untouched() {
        let grid = Grid::new(6, 7).unwrap();
        let _ = count(&grid);
        assert!(grid.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn symmetric_in_rows_and_cols() {
        for (rows, cols) in [(2, 9), (7, 3), (25, 60)] {
            let dims = Dims::new(rows, cols).unwrap();
            assert_eq!(count_dims(dims), count_dims(dims.transposed()));
        }
    }
}
