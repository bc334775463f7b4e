//! Times both path counters over grids of length 1 to 29 at a fixed width of 5.
//!
//! Run with: `cargo run -p pathgrid-bench --example sweep`
//!
//! Add `--features plot` to open a size-vs-time comparison window afterwards.
//! Set `RUST_LOG=pathgrid_bench=debug` to log every timed call.

use pathgrid_bench::{Harness, SweepConfig, sweep};
use pathgrid_core::Strategy;
use pathgrid_counters::PathCounter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pathgrid_bench=info,pathgrid_counters=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    let config = SweepConfig::default();
    let mut counter = PathCounter::new();
    let mut harness = Harness::new();

    let report = sweep::run_unobserved(&config, &mut counter, &mut harness)?;

    for sample in &report.samples {
        tracing::info!(
            "{:>6}  paths {:>8}  dynamic {:.9}s  combinatorial {:.9}s",
            sample.dims.to_string(),
            sample.combinatorial,
            sample.dynamic_seconds,
            sample.combinatorial_seconds,
        );
    }

    for strategy in Strategy::ALL {
        if let Some(summary) = harness.series().summary(strategy.name()) {
            tracing::info!(
                "{strategy}: {} calls, mean {:.9}s, max {:.9}s",
                summary.count,
                summary.mean,
                summary.max,
            );
        }
    }

    #[cfg(feature = "plot")]
    {
        use pathgrid_bench::{ShowConfig, TimingPlot};

        TimingPlot::from_report(&report).show(
            ShowConfig::new()
                .title("Execution time comparison")
                .legend(),
        )?;
    }

    Ok(())
}
