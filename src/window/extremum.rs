//! Minimum and maximum tracking with rescan on eviction
//!
//! The tracked extremum is updated in O(1) when a new sample matches or beats
//! it. Only when the slot holding the extremum is overwritten by a sample that
//! does not replace it does the tracker fall back to an O(n) scan of the buffer.

use super::buffer::CircularBuffer;

/// Which end of the window a tracker follows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// Minimum
    Lower,
    /// Maximum
    Upper,
}

impl Bound {
    /// Fast-path test: ties go to the newest write
    #[inline]
    fn admits(self, candidate: f64, current: f64) -> bool {
        match self {
            Bound::Lower => candidate <= current,
            Bound::Upper => candidate >= current,
        }
    }

    /// Rescan test: strict, so the first hit scanning newest-first is kept
    #[inline]
    fn beats(self, candidate: f64, current: f64) -> bool {
        match self {
            Bound::Lower => candidate < current,
            Bound::Upper => candidate > current,
        }
    }
}

/// Tracks one extremum of the window and the slot holding it
#[derive(Clone, Debug)]
pub struct ExtremumTracker {
    bound: Bound,
    value: f64,
    slot: Option<usize>,
}

impl ExtremumTracker {
    pub fn new(bound: Bound) -> Self {
        Self {
            bound,
            value: match bound {
                Bound::Lower => f64::INFINITY,
                Bound::Upper => f64::NEG_INFINITY,
            },
            slot: None,
        }
    }

    pub fn bound(&self) -> Bound {
        self.bound
    }

    /// Current extremum, `None` before the first sample
    pub fn value(&self) -> Option<f64> {
        self.slot.map(|_| self.value)
    }

    /// Slot holding the current extremum
    pub fn slot(&self) -> Option<usize> {
        self.slot
    }

    /// Account for `value` having just been written to `slot`
    ///
    /// `buffer` must already contain the write. Returns `true` if a rescan
    /// was needed.
    pub fn observe(&mut self, slot: usize, value: f64, buffer: &CircularBuffer) -> bool {
        if self.slot.is_none() || self.bound.admits(value, self.value) {
            self.value = value;
            self.slot = Some(slot);
            false
        } else if self.slot == Some(slot) {
            self.rescan(buffer);
            true
        } else {
            false
        }
    }

    /// Find the extremum by scanning every written slot, newest first
    pub fn rescan(&mut self, buffer: &CircularBuffer) {
        let mut best: Option<(usize, f64)> = None;
        for (slot, value) in buffer.iter_newest_first() {
            match best {
                Some((_, current)) if !self.bound.beats(value, current) => {}
                _ => best = Some((slot, value)),
            }
        }

        if let Some((slot, value)) = best {
            log::trace!("{:?} extremum rescanned: {} at slot {}", self.bound, value, slot);
            self.value = value;
            self.slot = Some(slot);
        } else {
            *self = Self::new(self.bound);
        }
    }
}
