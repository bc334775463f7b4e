//! Monotone lattice path counters.
//!
//! A monotone path crosses a grid from the top-left cell to the bottom-right
//! cell moving only right or down. This crate counts such paths two ways:
//!
//! - [`dynamic`] — fills the grid's buffer with sub-results using a `u64`
//!   accumulator; fast, but overflows for large grids
//! - [`combinatorial`] — evaluates `C(rows + cols - 2, rows - 1)` exactly with
//!   arbitrary precision; never overflows
//!
//! [`PathCounter`] puts both behind one entry point selected by a
//! [`Strategy`], and memoizes dynamic results by grid dimensions.
//!
//! # Example
//!
//! ```
//! use pathgrid_core::{Grid, Strategy};
//! use pathgrid_counters::{BigUint, PathCounter};
//!
//! let mut counter = PathCounter::new();
//! let mut grid = Grid::new(3, 3)?;
//!
//! let dynamic = counter.count_paths(&mut grid, Strategy::Dynamic)?;
//! let combinatorial = counter.count_paths(&mut grid, Strategy::Combinatorial)?;
//!
//! assert_eq!(dynamic, combinatorial);
//! assert_eq!(dynamic, BigUint::from(6u32));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`Strategy`]: pathgrid_core::Strategy

mod counter;
mod error;

pub mod combinatorial;
pub mod dynamic;

pub use counter::PathCounter;
pub use dynamic::{CacheStats, MemoCache};
pub use error::Error;
pub use num_bigint::BigUint;
