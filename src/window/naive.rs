//! Baseline window that recomputes everything on every read
//!
//! O(capacity) per query. Used as the reference the incremental engine is
//! checked and benchmarked against.

#[cfg(feature = "std")]
use std::collections::VecDeque;

#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;

use crate::traits::RollingWindow;

use super::snapshot::WindowStats;

/// Last `capacity` samples, with statistics computed from scratch
///
/// # Example
///
/// ```
/// use rollstats::window::NaiveWindow;
/// use rollstats::traits::RollingWindow;
///
/// let mut window = NaiveWindow::new(3);
/// for v in [1.0, 2.0, 3.0, 4.0] {
///     window.push(v);
/// }
///
/// let stats = window.stats().unwrap();
/// assert_eq!(stats.n, 3);
/// assert_eq!(stats.sum, 9.0);
/// assert_eq!(stats.min, 2.0);
/// ```
#[derive(Clone, Debug)]
pub struct NaiveWindow {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl NaiveWindow {
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");

        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Samples in the window, oldest first
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }
}

impl RollingWindow for NaiveWindow {
    fn push(&mut self, value: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    fn stats(&self) -> Option<WindowStats> {
        let n = self.samples.len();
        if n == 0 {
            return None;
        }

        let (min, max, sum) = self.samples.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), &v| (min.min(v), max.max(v), sum + v),
        );
        let mean = sum / n as f64;
        let m2: f64 = self.samples.iter().map(|v| (v - mean) * (v - mean)).sum();

        Some(WindowStats::new(n, min, max, sum, mean, m2 / n as f64))
    }

    fn len(&self) -> usize {
        self.samples.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
