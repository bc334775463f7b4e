//! Timing harness and size sweeps for the pathgrid counters.
//!
//! # Modules
//!
//! - [`harness`] — [`Harness`], which times operations and records elapsed
//!   seconds into named [`TimingSeries`]
//! - [`sweep`] — runs both counting strategies across a list of grid sizes,
//!   checks that they agree, and returns a [`Report`]
//!
//! # Features
//!
//! - `plot` — Enables [`TimingPlot`] for comparing the recorded series in a
//!   native egui window. This feature adds dependencies on `eframe` and
//!   `egui_plot`.
//! - `serde` — Derives `Serialize`/`Deserialize` for [`TimingSeries`] and
//!   [`SweepConfig`].
//!
//! # Example
//!
//! ```
//! use pathgrid_bench::{Harness, SweepConfig, sweep};
//! use pathgrid_core::Strategy;
//! use pathgrid_counters::PathCounter;
//!
//! let config = SweepConfig::new(10, 5)?;
//! let mut counter = PathCounter::new();
//! let mut harness = Harness::new();
//!
//! let report = sweep::run_unobserved(&config, &mut counter, &mut harness)?;
//!
//! assert_eq!(report.samples.len(), 10);
//! assert_eq!(harness.series().get(Strategy::Dynamic.name()).map(<[f64]>::len), Some(10));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`Harness`]: harness::Harness
//! [`TimingSeries`]: harness::TimingSeries
//! [`Report`]: sweep::Report
//! [`SweepConfig`]: sweep::SweepConfig

pub mod harness;
pub mod sweep;

#[cfg(feature = "plot")]
mod plot;

pub use harness::{Harness, TimingSeries};
pub use sweep::{Report, SweepConfig};

#[cfg(feature = "plot")]
pub use plot::{ShowConfig, TimingPlot};
