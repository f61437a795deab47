//! FIFO ring-buffer queue of pixel coordinates

use super::{Worklist, check_capacity};
use crate::coords::PixelCoord;

/// Growth factor applied when an enqueue finds the ring full.
const GROWTH_FACTOR: usize = 10;

/// Ring-buffer queue of pixel coordinates.
///
/// `slots.len()` is the current capacity. Elements live in
/// `slots[head], slots[head + 1], ...` modulo the capacity.
#[derive(Debug, Clone)]
pub struct CoordQueue {
    slots: Vec<PixelCoord>,
    head: usize,
    len: usize,
}

impl CoordQueue {
    /// Create an empty queue.
    ///
    /// # Panics
    ///
    /// Panics if `capacity <= 1`.
    pub fn new(capacity: usize) -> Self {
        check_capacity(capacity);
        Self {
            slots: vec![PixelCoord::default(); capacity],
            head: 0,
            len: 0,
        }
    }

    /// Remove all elements, keeping the current capacity.
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Number of stored coordinates.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Current capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Check whether the next enqueue will grow the storage.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Check whether the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The front element, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<PixelCoord> {
        if self.is_empty() {
            None
        } else {
            Some(self.slots[self.head])
        }
    }

    /// Append a coordinate at the back, growing x10 if the queue is full.
    pub fn enqueue(&mut self, coord: PixelCoord) {
        if self.is_full() {
            self.grow();
        }
        let tail = (self.head + self.len) % self.slots.len();
        self.slots[tail] = coord;
        self.len += 1;
    }

    /// Remove the front coordinate.
    pub fn dequeue(&mut self) -> Option<PixelCoord> {
        if self.is_empty() {
            return None;
        }
        let coord = self.slots[self.head];
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        Some(coord)
    }

    /// Reallocate with `GROWTH_FACTOR` times the capacity.
    ///
    /// Elements are copied out of the ring in logical order into the start
    /// of the new array; the head restarts at index 0.
    fn grow(&mut self) {
        let old_capacity = self.slots.len();
        let mut slots = vec![PixelCoord::default(); old_capacity * GROWTH_FACTOR];

        // First block: head .. end of the old array
        let first = (old_capacity - self.head).min(self.len);
        slots[..first].copy_from_slice(&self.slots[self.head..self.head + first]);
        // Second block: wrapped part at the start of the old array
        let second = self.len - first;
        slots[first..first + second].copy_from_slice(&self.slots[..second]);

        self.slots = slots;
        self.head = 0;
        log::trace!(
            "CoordQueue grown from {} to {}",
            old_capacity,
            self.slots.len()
        );
    }
}

impl Worklist for CoordQueue {
    fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity)
    }

    fn put(&mut self, coord: PixelCoord) {
        self.enqueue(coord);
    }

    fn take(&mut self) -> Option<PixelCoord> {
        self.dequeue()
    }

    fn len(&self) -> usize {
        self.len
    }
}
