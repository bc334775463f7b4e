//! Core types for the pathgrid workspace.
//!
//! This crate defines the shared abstractions that the path counters and the
//! benchmark harness build on:
//!
//! - [`Dims`] — validated `(rows, cols)` dimensions of a lattice
//! - [`Grid`] — a lattice with a mutable scratch buffer for table-filling counters
//! - [`Strategy`] — selects how monotone paths are counted
//! - [`Observer`] — receives driver events and optionally returns control actions

mod dims;
mod grid;
mod observer;
mod strategy;

pub use dims::{Dims, DimensionError};
pub use grid::Grid;
pub use observer::Observer;
pub use strategy::{ParseStrategyError, Strategy};
