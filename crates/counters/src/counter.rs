
use num_bigint::BigUint;

use pathgrid_core::{Grid, Strategy};

use crate::{
    Error, combinatorial,
    dynamic::{self, MemoCache},
};

/// Counts monotone paths with a selectable [`Strategy`].
///
/// The counter owns a [`MemoCache`] for dynamic results. With memoization on
/// (the default from [`PathCounter::new`]), a second dynamic call for a grid
/// of the same dimensions returns the cached count and leaves that grid's
/// buffer untouched. Combinatorial calls are never cached.
#[derive(Debug, Clone)]
pub struct PathCounter {
    cache: MemoCache,
    memoize: bool,
}

impl Default for PathCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl PathCounter {
    /// Creates a counter that memoizes dynamic results by grid dimensions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: MemoCache::new(),
            memoize: true,
        }
    }

    /// Creates a counter that recomputes every dynamic call.
    #[must_use]
    pub fn without_memoization() -> Self {
        Self {
            cache: MemoCache::new(),
            memoize: false,
        }
    }

    #[must_use]
    pub fn is_memoizing(&self) -> bool {
        self.memoize
    }

    #[must_use]
    pub fn cache(&self) -> &MemoCache {
        &self.cache
    }

    /// Drops every memoized result.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Counts the monotone paths across `grid` using `strategy`.
    ///
    /// The dynamic strategy writes into `grid`'s buffer; the combinatorial
    /// strategy only reads its dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the dynamic strategy exceeds `u64`.
    pub fn count_paths(&mut self, grid: &mut Grid, strategy: Strategy) -> Result<BigUint, Error> {
        match strategy {
            Strategy::Dynamic => self.count_dynamic(grid).map(BigUint::from),
            Strategy::Combinatorial => Ok(combinatorial::count(grid)),
        }
    }

    /// Counts the monotone paths across `grid` using the strategy named `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStrategy`] if `tag` names no strategy, or any
    /// error [`count_paths`](Self::count_paths) returns.
    pub fn count_paths_tagged(&mut self, grid: &mut Grid, tag: &str) -> Result<BigUint, Error> {
        let strategy: Strategy = tag.parse()?;
        self.count_paths(grid, strategy)
    }

    fn count_dynamic(&mut self, grid: &mut Grid) -> Result<u64, Error> {
        let dims = grid.dims();

        if self.memoize {
            if let Some(count) = self.cache.get(dims) {
                tracing::debug!(%dims, count, "memoized dynamic count");
                return Ok(count);
            }
        }

        let count = dynamic::count(grid).map_err(|err| {
            tracing::warn!(%dims, row = err.row, col = err.col, "dynamic count overflowed");
            Error::Overflow { dims }
        })?;

        if self.memoize {
            self.cache.insert(dims, count);
        }
        Ok(count)
    }
}
