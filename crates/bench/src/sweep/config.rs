use thiserror::Error;

use pathgrid_core::{DimensionError, Dims};

/// What a sweep does when the dynamic counter overflows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OverflowPolicy {
    /// Stop the sweep and return the overflow error.
    #[default]
    Abort,

    /// Drop the dynamic result for that size and keep going.
    ///
    /// The failed attempt's timing stays in the harness.
    SkipDynamic,
}

/// The grid sizes a sweep covers, in run order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Unchecked"))]
pub struct SweepConfig {
    sizes: Vec<Dims>,
    overflow_policy: OverflowPolicy,
}

/// Errors that can occur when validating a sweep config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("sweep must contain at least one size")]
    Empty,

    #[error("size #{index} is invalid: {source}")]
    InvalidSize {
        index: usize,
        #[source]
        source: DimensionError,
    },
}

impl Default for SweepConfig {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(29, 5).unwrap()
    }
}

impl SweepConfig {
    /// Creates a sweep over lengths `1..=max_length` at a fixed `width`.
    ///
    /// Each size is a grid of `length` rows and `width` columns.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_length` is zero or `width` is invalid.
    pub fn new(max_length: usize, width: usize) -> Result<Self, ConfigError> {
        Self::from_dims((1..=max_length).map(|length| (length, width)))
    }

    /// Creates a sweep over arbitrary `(rows, cols)` pairs, run in order.
    ///
    /// # Errors
    ///
    /// Returns an error if `sizes` is empty or any pair is invalid.
    pub fn from_dims<I>(sizes: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let sizes = sizes
            .into_iter()
            .enumerate()
            .map(|(index, (rows, cols))| {
                Dims::new(rows, cols).map_err(|source| ConfigError::InvalidSize { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if sizes.is_empty() {
            return Err(ConfigError::Empty);
        }

        Ok(Self {
            sizes,
            overflow_policy: OverflowPolicy::default(),
        })
    }

    /// Sets what happens when the dynamic counter overflows.
    #[must_use]
    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// Returns the sizes in run order.
    #[must_use]
    pub fn sizes(&self) -> &[Dims] {
        &self.sizes
    }

    #[must_use]
    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow_policy
    }
}

/// Deserialized form of [`SweepConfig`], validated on conversion.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct Unchecked {
    sizes: Vec<Dims>,
    #[serde(default)]
    overflow_policy: OverflowPolicy,
}

#[cfg(feature = "serde")]
impl TryFrom<Unchecked> for SweepConfig {
    type Error = ConfigError;

    fn try_from(raw: Unchecked) -> Result<Self, Self::Error> {
        if raw.sizes.is_empty() {
            return Err(ConfigError::Empty);
        }
        Ok(Self {
            sizes: raw.sizes,
            overflow_policy: raw.overflow_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_length_sweep_at_width_five() {
        let config = SweepConfig::default();

        assert_eq!(config.sizes().len(), 29);
        assert_eq!(config.sizes()[0], Dims::new(1, 5).unwrap());
        assert_eq!(config.sizes()[28], Dims::new(29, 5).unwrap());
        assert_eq!(config.overflow_policy(), OverflowPolicy::Abort);
    }

    #[test]
    fn from_dims_keeps_order() {
        let config = SweepConfig::from_dims([(4, 4), (1, 9), (4, 4)]).unwrap();
        let sizes: Vec<(usize, usize)> = config.sizes().iter().map(|&d| d.into()).collect();
        assert_eq!(sizes, [(4, 4), (1, 9), (4, 4)]);
    }

    #[test]
    fn rejects_empty_sweeps() {
        assert_eq!(SweepConfig::new(0, 5), Err(ConfigError::Empty));
        assert_eq!(SweepConfig::from_dims([]), Err(ConfigError::Empty));
    }

    #[test]
    fn rejects_invalid_sizes() {
        assert_eq!(
            SweepConfig::new(3, 0),
            Err(ConfigError::InvalidSize {
                index: 0,
                source: DimensionError::ZeroCols
            })
        );
        assert_eq!(
            SweepConfig::from_dims([(2, 2), (0, 2)]),
            Err(ConfigError::InvalidSize {
                index: 1,
                source: DimensionError::ZeroRows
            })
        );
    }

    #[test]
    fn overflow_policy_builder() {
        let config = SweepConfig::new(2, 2)
            .unwrap()
            .with_overflow_policy(OverflowPolicy::SkipDynamic);
        assert_eq!(config.overflow_policy(), OverflowPolicy::SkipDynamic);
    }
}
