//! LIFO stack of pixel coordinates

use super::{Worklist, check_capacity};
use crate::coords::PixelCoord;

/// Stack of pixel coordinates with doubling growth.
#[derive(Debug, Clone)]
pub struct CoordStack {
    /// Current capacity; doubles whenever a push finds the stack full
    max_size: usize,
    data: Vec<PixelCoord>,
}

impl CoordStack {
    /// Create an empty stack.
    ///
    /// # Panics
    ///
    /// Panics if `capacity <= 1`.
    pub fn new(capacity: usize) -> Self {
        check_capacity(capacity);
        Self {
            max_size: capacity,
            data: Vec::with_capacity(capacity),
        }
    }

    /// Remove all elements, keeping the current capacity.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Number of stored coordinates.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Current capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.max_size
    }

    /// Check whether the next push will grow the storage.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.data.len() == self.max_size
    }

    /// Check whether the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The top element, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<PixelCoord> {
        self.data.last().copied()
    }

    /// Push a coordinate, doubling the capacity if the stack is full.
    pub fn push(&mut self, coord: PixelCoord) {
        if self.is_full() {
            self.max_size *= 2;
            self.data.reserve_exact(self.max_size - self.data.len());
            log::trace!("CoordStack grown to {}", self.max_size);
        }
        self.data.push(coord);
    }

    /// Pop the top coordinate.
    #[inline]
    pub fn pop(&mut self) -> Option<PixelCoord> {
        self.data.pop()
    }
}

impl Worklist for CoordStack {
    fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity)
    }

    fn put(&mut self, coord: PixelCoord) {
        self.push(coord);
    }

    fn take(&mut self) -> Option<PixelCoord> {
        self.pop()
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
