//! Incremental sum, mean and M2 over a sliding window
//!
//! Welford's online update applied in both directions: an overwrite is a
//! removal of the evicted sample followed by an insertion of the new one.

/// Running moments of the samples currently in the window
///
/// The sample count is owned by the buffer and passed in by the caller.
///
/// # Example
///
/// ```
/// use rollstats::window::Moments;
///
/// let mut moments = Moments::new();
/// moments.insert(1.0, 1);
/// moments.insert(0.0, 2);
///
/// assert_eq!(moments.mean(), 0.5);
/// assert_eq!(moments.variance(2), 0.25);
///
/// // replace 1.0 by 3.0 in a full window of two
/// moments.evict(1.0, 2);
/// moments.insert(3.0, 2);
/// assert_eq!(moments.mean(), 1.5);
/// assert_eq!(moments.variance(2), 2.25);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Moments {
    /// Sum of the samples in the window
    sum: f64,
    /// Mean of the samples in the window
    mean: f64,
    /// Sum of squared differences from the mean (M2 in Welford's algorithm)
    m2: f64,
}

impl Moments {
    /// Create an accumulator for an empty window
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `value` from a window currently holding `n` samples
    ///
    /// Leaves the accumulator describing the other `n - 1` samples; the
    /// caller follows up with [`insert`](Self::insert) for the replacement.
    pub fn evict(&mut self, value: f64, n: usize) {
        if n <= 1 {
            *self = Self::new();
            return;
        }

        self.sum -= value;
        let mean_before = self.mean;
        self.mean = self.sum / (n - 1) as f64;
        self.m2 -= (value - mean_before) * (value - self.mean);
        self.clamp();
    }

    /// Add `value` to a window that holds `n` samples including it
    pub fn insert(&mut self, value: f64, n: usize) {
        self.sum += value;
        let mean_before = self.mean;
        self.mean = self.sum / n as f64;
        self.m2 += (value - mean_before) * (value - self.mean);
        self.clamp();
    }

    /// Rebuild sum, mean and M2 from scratch over `values`
    ///
    /// Two passes: the sum first, then squared deviations from the exact mean.
    pub fn recompute(&mut self, values: &[f64]) {
        if values.is_empty() {
            *self = Self::new();
            return;
        }

        let sum: f64 = values.iter().sum();
        let mean = sum / values.len() as f64;
        let m2 = values.iter().map(|v| (v - mean) * (v - mean)).sum();

        self.sum = sum;
        self.mean = mean;
        self.m2 = m2;
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sum of squared deviations from the mean
    pub fn m2(&self) -> f64 {
        self.m2
    }

    /// Population variance over `n` samples
    pub fn variance(&self, n: usize) -> f64 {
        if n == 0 {
            0.0
        } else {
            self.m2 / n as f64
        }
    }

    // Cancellation between nearly equal terms can leave M2 slightly negative.
    // NaN is left alone so that poisoned input stays visible.
    fn clamp(&mut self) {
        if self.m2 < 0.0 {
            self.m2 = 0.0;
        }
    }
}
