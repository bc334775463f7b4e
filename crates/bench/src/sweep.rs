//! Benchmark sweeps across grid sizes.
//!
//! A sweep walks the sizes of a [`SweepConfig`] in order. For each size it
//! builds a fresh [`Grid`], then counts its paths with
//! [`Strategy::Dynamic`] and [`Strategy::Combinatorial`], in that order. Each
//! call runs inside [`Harness::time_and_run`] under the strategy's name, so
//! the harness ends up with one `"dynamic"` and one `"combinatorial"` series
//! holding an entry per call.
//!
//! Whenever both strategies produce a count they must agree exactly; a
//! mismatch ends the sweep with [`Error::Disagreement`].
//!
//! The counter's memo cache is cleared before the first size. A cached count
//! comes back almost instantly and would make the dynamic timings meaningless
//! across runs.
//!
//! # Observer Events
//!
//! The sweep emits one [`Event`] after each strategy call. Observers can
//! return [`Action::StopEarly`] to end the sweep; sizes already completed are
//! kept in the [`Report`].
//!
//! # Overflow
//!
//! With [`OverflowPolicy::Abort`] (the default) a dynamic overflow ends the
//! sweep with [`Error::Count`]. With [`OverflowPolicy::SkipDynamic`] the sweep
//! emits an event with no count, records the size without a dynamic result,
//! and moves on.

mod action;
mod config;
mod error;
mod event;
mod report;


pub use action::Action;
pub use config::{ConfigError, OverflowPolicy, SweepConfig};
pub use error::Error;
pub use event::Event;
pub use report::{Report, Sample, Status};

use pathgrid_core::{Grid, Observer, Strategy};
use pathgrid_counters::PathCounter;

use crate::Harness;

/// Runs both strategies across every size in `config`.
///
/// Timings are appended to `harness`; existing series are kept.
/// See the [module docs](self) for event timing and overflow handling.
///
/// # Errors
///
/// Returns an error if a count fails (subject to the overflow policy) or if
/// the strategies disagree.
pub fn run<Obs>(
    config: &SweepConfig,
    counter: &mut PathCounter,
    harness: &mut Harness,
    mut observer: Obs,
) -> Result<Report, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    counter.clear_cache();
    tracing::info!(
        sizes = config.sizes().len(),
        policy = ?config.overflow_policy(),
        "starting sweep"
    );

    let mut samples = Vec::with_capacity(config.sizes().len());

    for (index, &dims) in config.sizes().iter().enumerate() {
        let mut grid = Grid::from_dims(dims);

        let dynamic = harness.time_and_run(Strategy::Dynamic.name(), || {
            counter.count_paths(&mut grid, Strategy::Dynamic)
        });
        let dynamic_seconds = last_seconds(harness, Strategy::Dynamic);
        let dynamic = match dynamic {
            Ok(count) => Some(count),
            Err(err)
                if err.is_overflow()
                    && config.overflow_policy() == OverflowPolicy::SkipDynamic =>
            {
                tracing::info!(%dims, "skipping overflowed dynamic count");
                None
            }
            Err(err) => return Err(err.into()),
        };

        let event = Event {
            index,
            dims,
            strategy: Strategy::Dynamic,
            seconds: dynamic_seconds,
            count: dynamic.as_ref(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(stopped(samples));
        }

        let combinatorial = harness.time_and_run(Strategy::Combinatorial.name(), || {
            counter.count_paths(&mut grid, Strategy::Combinatorial)
        })?;
        let combinatorial_seconds = last_seconds(harness, Strategy::Combinatorial);

        if let Some(dynamic) = &dynamic {
            if *dynamic != combinatorial {
                return Err(Error::Disagreement {
                    dims,
                    dynamic: dynamic.clone(),
                    combinatorial,
                });
            }
        }

        tracing::debug!(
            %dims,
            count = %combinatorial,
            dynamic_seconds,
            combinatorial_seconds,
            "sampled size"
        );

        let event = Event {
            index,
            dims,
            strategy: Strategy::Combinatorial,
            seconds: combinatorial_seconds,
            count: Some(&combinatorial),
        };
        let action = observer.observe(&event);

        samples.push(Sample {
            dims,
            dynamic,
            combinatorial,
            dynamic_seconds,
            combinatorial_seconds,
        });

        if let Some(Action::StopEarly) = action {
            return Ok(stopped(samples));
        }
    }

    tracing::info!(samples = samples.len(), "sweep complete");
    Ok(Report {
        status: Status::Complete,
        samples,
    })
}

/// Runs a sweep without observer support.
///
/// This is a convenience wrapper around [`run`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if a count fails (subject to the overflow policy) or if
/// the strategies disagree.
pub fn run_unobserved(
    config: &SweepConfig,
    counter: &mut PathCounter,
    harness: &mut Harness,
) -> Result<Report, Error> {
    run(config, counter, harness, ())
}

fn stopped(samples: Vec<Sample>) -> Report {
    tracing::info!(samples = samples.len(), "sweep stopped by observer");
    Report {
        status: Status::StoppedByObserver,
        samples,
    }
}

fn last_seconds(harness: &Harness, strategy: Strategy) -> f64 {
    // `time_and_run` always records, so the series is never empty here.
    harness.series().last(strategy.name()).unwrap_or_default()
}
