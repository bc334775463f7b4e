use pathgrid_core::{Dims, Strategy};
use pathgrid_counters::BigUint;

/// Indicates how the sweep terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Ran every size in the config.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// Results and timings for one grid size.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub dims: Dims,

    /// `None` if the dynamic counter overflowed and was skipped.
    pub dynamic: Option<BigUint>,

    pub combinatorial: BigUint,

    pub dynamic_seconds: f64,

    pub combinatorial_seconds: f64,
}

impl Sample {
    /// Returns the count produced by `strategy`, if any.
    #[must_use]
    pub fn count(&self, strategy: Strategy) -> Option<&BigUint> {
        match strategy {
            Strategy::Dynamic => self.dynamic.as_ref(),
            Strategy::Combinatorial => Some(&self.combinatorial),
        }
    }

    /// Returns the elapsed seconds recorded for `strategy`.
    #[must_use]
    pub fn seconds(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::Dynamic => self.dynamic_seconds,
            Strategy::Combinatorial => self.combinatorial_seconds,
        }
    }
}

/// The outcome of a sweep.
///
/// A size interrupted between its two calls is not included.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub status: Status,
    pub samples: Vec<Sample>,
}

impl Report {
    /// Returns `[rows, seconds]` pairs for `strategy`, in run order.
    ///
    /// Rows is the swept length when the config comes from
    /// [`SweepConfig::new`](super::SweepConfig::new). Sizes without a count
    /// for `strategy` are left out.
    #[must_use]
    pub fn points(&self, strategy: Strategy) -> Vec<[f64; 2]> {
        self.samples
            .iter()
            .filter(|sample| sample.count(strategy).is_some())
            .map(|sample| {
                #[allow(clippy::cast_precision_loss)]
                let rows = sample.dims.rows() as f64;
                [rows, sample.seconds(strategy)]
            })
            .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == Status::Complete
    }
}
