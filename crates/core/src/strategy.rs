use std::{fmt, str::FromStr};

use thiserror::Error;

/// Selects how monotone lattice paths are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Fill the grid's buffer with sub-results using a fixed-width accumulator.
    Dynamic,

    /// Evaluate the binomial coefficient `C(rows + cols - 2, rows - 1)` exactly.
    Combinatorial,
}

/// Error returned when parsing an unknown strategy tag.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown strategy `{0}` (expected `dynamic` or `combinatorial`)")]
pub struct ParseStrategyError(pub String);

impl Strategy {
    /// Every strategy, in the order a benchmark sweep runs them.
    pub const ALL: [Strategy; 2] = [Strategy::Dynamic, Strategy::Combinatorial];

    /// Returns the tag used to select this strategy by name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Dynamic => "dynamic",
            Strategy::Combinatorial => "combinatorial",
        }
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dynamic" => Ok(Strategy::Dynamic),
            "combinatorial" => Ok(Strategy::Combinatorial),
            other => Err(ParseStrategyError(other.to_owned())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
