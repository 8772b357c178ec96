//! Rolling statistics over the last N samples
//!
//! Combines the circular buffer, the moment accumulator, one extremum tracker
//! per bound and the drift corrector behind a single append/read API.

use crate::config::{NonFinitePolicy, WindowConfig};
use crate::traits::{RollingWindow, SampleError, WindowError};

use super::buffer::CircularBuffer;
use super::drift::DriftCorrector;
use super::extremum::{Bound, ExtremumTracker};
use super::moments::Moments;
use super::snapshot::WindowStats;

/// Sliding-window statistics with O(1) amortized updates
///
/// Keeps count, min, max, sum, mean, variance and standard deviation of the
/// most recent `capacity` samples. Appending a sample evicts the oldest one
/// once the window is full; moments are updated incrementally and rebuilt from
/// the buffer every `max(2 * capacity, 25_000)` appends to cancel
/// floating-point drift.
///
/// Not synchronized: share across threads only behind external locking.
///
/// # Example
///
/// ```
/// use rollstats::window::RollingStats;
///
/// let mut window = RollingStats::new(2);
/// assert_eq!(window.stats(), None);
///
/// let stats = window.append(1.0).append(0.0).stats().unwrap();
/// assert_eq!(stats.n, 2);
/// assert_eq!(stats.min, 0.0);
/// assert_eq!(stats.max, 1.0);
/// assert_eq!(stats.mean, 0.5);
/// assert_eq!(stats.variance, 0.25);
/// assert_eq!(stats.standard_deviation, 0.5);
///
/// // 1.0 is evicted
/// let stats = window.append(4.0).stats().unwrap();
/// assert_eq!(stats.min, 0.0);
/// assert_eq!(stats.sum, 4.0);
/// ```
#[derive(Clone, Debug)]
pub struct RollingStats {
    config: WindowConfig,
    buffer: CircularBuffer,
    moments: Moments,
    min: ExtremumTracker,
    max: ExtremumTracker,
    drift: DriftCorrector,
}

impl RollingStats {
    /// Create an empty window holding up to `capacity` samples
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_new`](Self::try_new) to get an
    /// error instead.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        Self::build(WindowConfig::new(capacity))
    }

    /// Create an empty window, failing on a zero capacity
    pub fn try_new(capacity: usize) -> Result<Self, WindowError> {
        Self::with_config(WindowConfig::new(capacity))
    }

    /// Create an empty window from a full configuration
    pub fn with_config(config: WindowConfig) -> Result<Self, WindowError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: WindowConfig) -> Self {
        Self {
            buffer: CircularBuffer::new(config.capacity),
            moments: Moments::new(),
            min: ExtremumTracker::new(Bound::Lower),
            max: ExtremumTracker::new(Bound::Upper),
            drift: DriftCorrector::new(config.recompute_interval()),
            config,
        }
    }

    /// Add a sample, evicting the oldest one if the window is full
    ///
    /// Non-finite samples are handled according to the configured
    /// [`NonFinitePolicy`]; under `Ignore` and `Reject` they leave the window
    /// untouched. Returns the window so calls can be chained.
    pub fn append(&mut self, value: f64) -> &mut Self {
        if !value.is_finite() {
            match self.config.non_finite {
                NonFinitePolicy::Propagate => {}
                NonFinitePolicy::Ignore => return self,
                NonFinitePolicy::Reject => {
                    log::warn!("dropping non-finite sample {}", value);
                    return self;
                }
            }
        }

        self.insert(value);
        self
    }

    /// Add a sample, failing on a non-finite one under [`NonFinitePolicy::Reject`]
    pub fn try_append(&mut self, value: f64) -> Result<&mut Self, WindowError> {
        if !value.is_finite() && self.config.non_finite == NonFinitePolicy::Reject {
            return Err(SampleError::NonFinite { value }.into());
        }
        Ok(self.append(value))
    }

    fn insert(&mut self, value: f64) {
        let slot = self.buffer.cursor();
        let evicted = self.buffer.write_and_advance(value);
        let n = self.buffer.len();

        if let Some(previous) = evicted {
            self.moments.evict(previous, n);
        }
        self.moments.insert(value, n);

        self.min.observe(slot, value, &self.buffer);
        self.max.observe(slot, value, &self.buffer);

        if self.drift.tick() {
            self.correct_drift();
        }
    }

    /// Statistics over the current window, `None` if no sample was appended yet
    pub fn stats(&self) -> Option<WindowStats> {
        let n = self.buffer.len();
        if n == 0 {
            return None;
        }

        Some(WindowStats::new(
            n,
            self.min.value()?,
            self.max.value()?,
            self.moments.sum(),
            self.moments.mean(),
            self.moments.variance(n),
        ))
    }

    /// Rebuild sum, mean and variance from the buffer and return the result
    ///
    /// Min and max are kept as tracked. Restarts the drift-correction
    /// countdown. Returns `None` on an empty window.
    pub fn recompute(&mut self) -> Option<WindowStats> {
        self.correct_drift();
        self.stats()
    }

    fn correct_drift(&mut self) {
        let sum_before = self.moments.sum();
        self.moments.recompute(self.buffer.as_slice());
        self.drift.reset();

        log::debug!(
            "recomputed moments over {} samples (sum drift {:e}, next in {} appends)",
            self.buffer.len(),
            self.moments.sum() - sum_before,
            self.drift.interval()
        );
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Check if the next append evicts a sample
    pub fn is_full(&self) -> bool {
        self.buffer.is_full()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Samples in the window, oldest first
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.buffer.iter_oldest_first()
    }

    /// Appends left before the next automatic recompute
    pub fn appends_until_recompute(&self) -> usize {
        self.drift.remaining()
    }
}

impl Extend<f64> for RollingStats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl RollingWindow for RollingStats {
    fn push(&mut self, value: f64) {
        self.append(value);
    }

    fn stats(&self) -> Option<WindowStats> {
        RollingStats::stats(self)
    }

    fn len(&self) -> usize {
        RollingStats::len(self)
    }

    fn capacity(&self) -> usize {
        RollingStats::capacity(self)
    }
}
