//! Countdown to the next full recompute of the moments

/// Fires once every `interval` appends
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriftCorrector {
    interval: usize,
    remaining: usize,
}

impl DriftCorrector {
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn new(interval: usize) -> Self {
        assert!(interval > 0, "recompute interval must be positive");

        Self {
            interval,
            remaining: interval,
        }
    }

    /// Count one append; returns `true` when a recompute is due
    ///
    /// The countdown is not restarted here, the caller does that through
    /// [`reset`](Self::reset) when it recomputes.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }

    pub fn reset(&mut self) {
        self.remaining = self.interval;
    }

    pub fn interval(&self) -> usize {
        self.interval
    }

    /// Appends left before the next recompute
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}
