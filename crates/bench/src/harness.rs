//! Timing instrumentation.
//!
//! [`Harness::time_and_run`] wraps a zero-argument operation with two readings
//! of a monotonic clock and appends the elapsed seconds to a named series. The
//! operation's return value, including any `Err`, is handed back unchanged.

use std::{
    collections::BTreeMap,
    time::{Duration, Instant},
};

/// Elapsed times in seconds, keyed by logical test name.
///
/// Each series keeps its measurements in call order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingSeries {
    series: BTreeMap<String, Vec<f64>>,
}

/// Summary statistics for one named series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub total: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl TimingSeries {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `seconds` to the series `name`, creating it if absent.
    pub fn push(&mut self, name: &str, seconds: f64) {
        if let Some(values) = self.series.get_mut(name) {
            values.push(seconds);
        } else {
            self.series.insert(name.to_owned(), vec![seconds]);
        }
    }

    /// Returns the measurements recorded under `name`, in call order.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.series.get(name).map(Vec::as_slice)
    }

    /// Returns the most recent measurement recorded under `name`.
    #[must_use]
    pub fn last(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(|values| values.last().copied())
    }

    /// Returns the recorded names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Iterates over `(name, seconds)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.series
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Returns the number of named series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Summarizes the series `name`, or returns `None` if it has no entries.
    #[must_use]
    pub fn summary(&self, name: &str) -> Option<Summary> {
        let values = self.get(name).filter(|v| !v.is_empty())?;

        let total: f64 = values.iter().sum();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        #[allow(clippy::cast_precision_loss)]
        let mean = total / values.len() as f64;

        Some(Summary {
            count: values.len(),
            total,
            mean,
            min,
            max,
        })
    }

    fn clear(&mut self) {
        self.series.clear();
    }
}

/// Times operations and accumulates their elapsed seconds by name.
///
/// The harness is single-threaded and owns its [`TimingSeries`] exclusively.
#[derive(Debug, Clone, Default)]
pub struct Harness {
    series: TimingSeries,
}

impl Harness {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `elapsed` to the series `name`, creating it if absent.
    pub fn record(&mut self, name: &str, elapsed: Duration) {
        let seconds = elapsed.as_secs_f64();
        tracing::debug!(name, seconds, "recorded timing");
        self.series.push(name, seconds);
    }

    /// Runs `op`, records how long it took under `name`, and returns its result.
    ///
    /// Only the call to `op` is inside the measured interval. If `op` returns
    /// an `Err`, it is passed through unchanged and the attempt's timing is
    /// still recorded, so each series keeps one entry per call.
    pub fn time_and_run<T, F>(&mut self, name: &str, op: F) -> T
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        let result = op();
        let elapsed = start.elapsed();

        self.record(name, elapsed);
        result
    }

    #[must_use]
    pub fn series(&self) -> &TimingSeries {
        &self.series
    }

    #[must_use]
    pub fn into_series(self) -> TimingSeries {
        self.series
    }

    /// Drops every recorded series.
    pub fn clear(&mut self) {
        self.series.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn record_creates_and_appends() {
        let mut harness = Harness::new();
        harness.record("a", Duration::from_millis(250));
        harness.record("b", Duration::from_millis(1));
        harness.record("a", Duration::from_millis(500));

        let series = harness.series();
        assert_eq!(series.len(), 2);
        assert_eq!(series.get("a"), Some([0.25, 0.5].as_slice()));
        assert_eq!(series.get("b"), Some([0.001].as_slice()));
        assert_eq!(series.get("c"), None);
    }

    #[test]
    fn time_and_run_records_one_entry_per_call() {
        let mut harness = Harness::new();

        let first = harness.time_and_run("x", || 1 + 1);
        let second = harness.time_and_run("x", || "done");

        assert_eq!(first, 2);
        assert_eq!(second, "done");

        let times = harness.series().get("x").unwrap();
        assert_eq!(times.len(), 2);
        assert!(times.iter().all(|&t| t >= 0.0));
    }

    #[test]
    fn keeps_call_order() {
        let mut harness = Harness::new();
        let short = Duration::from_millis(1);
        let long = Duration::from_millis(30);

        harness.time_and_run("x", || thread::sleep(long));
        harness.time_and_run("x", || thread::sleep(short));

        let times = harness.series().get("x").unwrap();
        assert!(times[0] >= long.as_secs_f64());
        assert!(times[1] >= short.as_secs_f64());
        assert!(times[0] > times[1], "{times:?}");
    }

    #[test]
    fn elapsed_is_bounded_below_by_sleep() {
        let mut harness = Harness::new();
        let delay = Duration::from_millis(20);

        harness.time_and_run("sleep", || thread::sleep(delay));

        let recorded = harness.series().get("sleep").unwrap()[0];
        assert!(recorded >= delay.as_secs_f64(), "{recorded} < {delay:?}");
    }

    #[test]
    fn errors_pass_through_and_are_still_timed() {
        let mut harness = Harness::new();

        let result: Result<u8, &str> = harness.time_and_run("fails", || Err("boom"));

        assert_eq!(result, Err("boom"));
        assert_eq!(harness.series().get("fails").map(<[f64]>::len), Some(1));
    }

    #[test]
    fn summary_of_series() {
        let mut series = TimingSeries::new();
        for seconds in [0.2, 0.1, 0.6] {
            series.push("x", seconds);
        }

        let summary = series.summary("x").unwrap();
        assert_eq!(summary.count, 3);
        assert_relative_eq!(summary.total, 0.9, epsilon = 1e-12);
        assert_relative_eq!(summary.mean, 0.3, epsilon = 1e-12);
        assert_relative_eq!(summary.min, 0.1);
        assert_relative_eq!(summary.max, 0.6);

        assert!(series.summary("missing").is_none());
    }

    #[test]
    fn clear_and_into_series() {
        let mut harness = Harness::new();
        harness.record("a", Duration::ZERO);
        assert_eq!(harness.series().names().collect::<Vec<_>>(), ["a"]);

        harness.clear();
        assert!(harness.into_series().is_empty());
    }
}
