//! Fixed-capacity circular buffer with a wrapping write cursor

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Ring of `capacity` slots written in order, oldest slot overwritten first
///
/// Slots fill in order `0..capacity`, so while the buffer is filling the
/// written slots are exactly `0..len`. Once full, the cursor names the oldest
/// slot, which is the next one overwritten.
#[derive(Clone, Debug)]
pub struct CircularBuffer {
    slots: Vec<f64>,
    capacity: usize,
    /// Next slot to write
    cursor: usize,
}

impl CircularBuffer {
    /// Create an empty buffer
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");

        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            cursor: 0,
        }
    }

    /// Store `value` at the cursor and advance it
    ///
    /// Returns the value that was overwritten, or `None` if the slot had never
    /// been written.
    pub fn write_and_advance(&mut self, value: f64) -> Option<f64> {
        let previous = if self.slots.len() < self.capacity {
            self.slots.push(value);
            None
        } else {
            Some(core::mem::replace(&mut self.slots[self.cursor], value))
        };

        self.cursor = (self.cursor + 1) % self.capacity;
        previous
    }

    /// Number of written slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slot the next write goes to
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Value stored at `slot`, if it has been written
    pub fn get(&self, slot: usize) -> Option<f64> {
        self.slots.get(slot).copied()
    }

    /// Slot holding the most recent write
    pub fn last_slot(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some((self.cursor + self.capacity - 1) % self.capacity)
        }
    }

    /// Written slots from the most recent write backward, wrapping at 0
    pub fn iter_newest_first(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        let capacity = self.capacity;
        let cursor = self.cursor;
        (1..=self.slots.len()).map(move |back| {
            let slot = (cursor + capacity - back) % capacity;
            (slot, self.slots[slot])
        })
    }

    /// Written values in insertion order
    pub fn iter_oldest_first(&self) -> impl Iterator<Item = f64> + '_ {
        let split = if self.is_full() { self.cursor } else { 0 };
        let (newer, older) = self.slots.split_at(split);
        older.iter().chain(newer.iter()).copied()
    }

    /// Written values in storage order
    pub fn as_slice(&self) -> &[f64] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_then_overwrite() {
        let mut buffer = CircularBuffer::new(3);

        assert_eq!(buffer.write_and_advance(1.0), None);
        assert_eq!(buffer.write_and_advance(2.0), None);
        assert_eq!(buffer.write_and_advance(3.0), None);
        assert!(buffer.is_full());
        assert_eq!(buffer.cursor(), 0);

        assert_eq!(buffer.write_and_advance(4.0), Some(1.0));
        assert_eq!(buffer.write_and_advance(5.0), Some(2.0));
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.cursor(), 2);
        assert_eq!(buffer.as_slice(), &[4.0, 5.0, 3.0]);
    }

    #[test]
    fn test_capacity_one() {
        let mut buffer = CircularBuffer::new(1);

        assert_eq!(buffer.write_and_advance(7.0), None);
        assert_eq!(buffer.write_and_advance(8.0), Some(7.0));
        assert_eq!(buffer.cursor(), 0);
        assert_eq!(buffer.last_slot(), Some(0));
        assert_eq!(buffer.iter_newest_first().collect::<Vec<_>>(), vec![(0, 8.0)]);
    }

    #[test]
    fn test_iter_newest_first_while_filling() {
        let mut buffer = CircularBuffer::new(5);
        for v in [1.0, 2.0, 3.0] {
            buffer.write_and_advance(v);
        }

        let seen: Vec<_> = buffer.iter_newest_first().collect();
        assert_eq!(seen, vec![(2, 3.0), (1, 2.0), (0, 1.0)]);
    }

    #[test]
    fn test_iter_newest_first_wraps() {
        let mut buffer = CircularBuffer::new(4);
        for v in 1..=6 {
            buffer.write_and_advance(v as f64);
        }

        // slots: [5, 6, 3, 4], cursor at 2
        let seen: Vec<_> = buffer.iter_newest_first().collect();
        assert_eq!(seen, vec![(1, 6.0), (0, 5.0), (3, 4.0), (2, 3.0)]);
    }

    #[test]
    fn test_iter_oldest_first() {
        let mut buffer = CircularBuffer::new(4);
        for v in 1..=3 {
            buffer.write_and_advance(v as f64);
        }
        assert_eq!(buffer.iter_oldest_first().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0]);

        for v in 4..=6 {
            buffer.write_and_advance(v as f64);
        }
        assert_eq!(
            buffer.iter_oldest_first().collect::<Vec<_>>(),
            vec![3.0, 4.0, 5.0, 6.0]
        );
    }

    #[test]
    fn test_empty() {
        let buffer = CircularBuffer::new(3);

        assert!(buffer.is_empty());
        assert_eq!(buffer.last_slot(), None);
        assert_eq!(buffer.get(0), None);
        assert_eq!(buffer.iter_newest_first().count(), 0);
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn test_zero_capacity_panics() {
        let _ = CircularBuffer::new(0);
    }
}
