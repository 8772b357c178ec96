//! Point-in-time statistics of a window

use crate::math;

/// Descriptive statistics over the samples held by a window
///
/// Only produced for a non-empty window; an empty window reports `None`
/// instead of a snapshot full of zeros.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowStats {
    /// Number of samples
    pub n: usize,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub mean: f64,
    /// Population variance
    pub variance: f64,
    /// Population standard deviation
    pub standard_deviation: f64,
}

impl WindowStats {
    /// Build a snapshot from the tracked extrema and moments
    ///
    /// The standard deviation is always derived from `variance`.
    pub fn new(n: usize, min: f64, max: f64, sum: f64, mean: f64, variance: f64) -> Self {
        Self {
            n,
            min,
            max,
            sum,
            mean,
            variance,
            standard_deviation: math::sqrt(variance),
        }
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Compare two snapshots field by field within a relative tolerance
    ///
    /// Fields close to zero are compared with `tolerance` as an absolute bound.
    pub fn relative_eq(&self, other: &Self, tolerance: f64) -> bool {
        fn close(a: f64, b: f64, tolerance: f64) -> bool {
            if a == b {
                return true;
            }
            let diff = math::abs(a - b);
            let scale = math::abs(a).max(math::abs(b));
            diff <= tolerance || diff <= tolerance * scale
        }

        self.n == other.n
            && close(self.min, other.min, tolerance)
            && close(self.max, other.max, tolerance)
            && close(self.sum, other.sum, tolerance)
            && close(self.mean, other.mean, tolerance)
            && close(self.variance, other.variance, tolerance)
            && close(self.standard_deviation, other.standard_deviation, tolerance)
    }
}
