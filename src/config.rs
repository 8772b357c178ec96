//! Window configuration
//!
//! A window is described by its capacity, the floor of its drift-correction
//! interval, and what it does with NaN and infinite samples.

use crate::traits::ConfigError;

/// Minimum number of appends between two forced full recomputes
pub const RECOMPUTE_FLOOR: usize = 25_000;

/// What a window does with NaN and infinite samples
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NonFinitePolicy {
    /// Store the sample like any other
    ///
    /// NaN poisons sum, mean and variance until every contaminated slot has
    /// been evicted and the next recompute runs.
    #[default]
    Propagate,
    /// Drop the sample without touching the window
    Ignore,
    /// Fail [`try_append`](crate::window::RollingStats::try_append); `append` drops
    /// the sample and logs a warning
    Reject,
}

/// Configuration for a [`RollingStats`](crate::window::RollingStats) window
///
/// # Example
///
/// ```
/// use rollstats::config::{NonFinitePolicy, WindowConfig};
///
/// let config = WindowConfig::new(1_000)
///     .with_recompute_floor(5_000)
///     .with_non_finite(NonFinitePolicy::Reject);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.recompute_interval(), 5_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowConfig {
    /// Number of samples retained
    pub capacity: usize,
    /// Lower bound of the drift-correction interval
    #[cfg_attr(feature = "serde", serde(default = "default_recompute_floor"))]
    pub recompute_floor: usize,
    /// Handling of NaN and infinite samples
    #[cfg_attr(feature = "serde", serde(default))]
    pub non_finite: NonFinitePolicy,
}

#[cfg(feature = "serde")]
fn default_recompute_floor() -> usize {
    RECOMPUTE_FLOOR
}

impl WindowConfig {
    /// Configuration with the default recompute floor and non-finite policy
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            recompute_floor: RECOMPUTE_FLOOR,
            non_finite: NonFinitePolicy::default(),
        }
    }

    pub fn with_recompute_floor(mut self, recompute_floor: usize) -> Self {
        self.recompute_floor = recompute_floor;
        self
    }

    pub fn with_non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.non_finite = policy;
        self
    }

    /// Check that the configuration describes a usable window
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.recompute_floor == 0 {
            return Err(ConfigError::ZeroRecomputeFloor);
        }
        Ok(())
    }

    /// Number of appends between two forced full recomputes
    ///
    /// `max(2 * capacity, recompute_floor)`
    pub fn recompute_interval(&self) -> usize {
        self.capacity
            .saturating_mul(2)
            .max(self.recompute_floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WindowConfig::new(10);
        assert_eq!(config.recompute_floor, RECOMPUTE_FLOOR);
        assert_eq!(config.non_finite, NonFinitePolicy::Propagate);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_recompute_interval() {
        assert_eq!(WindowConfig::new(10).recompute_interval(), 25_000);
        assert_eq!(WindowConfig::new(12_500).recompute_interval(), 25_000);
        assert_eq!(WindowConfig::new(20_000).recompute_interval(), 40_000);
        assert_eq!(
            WindowConfig::new(10).with_recompute_floor(7).recompute_interval(),
            20
        );
        assert_eq!(WindowConfig::new(usize::MAX).recompute_interval(), usize::MAX);
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            WindowConfig::new(0).validate(),
            Err(ConfigError::ZeroCapacity)
        );
        assert_eq!(
            WindowConfig::new(4).with_recompute_floor(0).validate(),
            Err(ConfigError::ZeroRecomputeFloor)
        );
    }
}
