//! Growable pixel-coordinate containers
//!
//! Worklists used by the explicit (non-recursive) flood-fill strategies:
//!
//! - [`CoordStack`] - LIFO, capacity doubles when full
//! - [`CoordQueue`] - FIFO ring buffer, capacity grows x10 when full
//!
//! Both start with a caller-chosen capacity, which must be greater than 1.
//! A smaller capacity is a programmer error and panics.

mod queue;
mod stack;

pub use queue::CoordQueue;
pub use stack::CoordStack;

use crate::coords::PixelCoord;

/// Capacity used by the fill strategies when they create a worklist.
pub const DEFAULT_WORKLIST_CAPACITY: usize = 64;

/// Common interface of the coordinate worklists.
///
/// `put` and `take` are the container's natural insertion and removal
/// operations: push/pop for the stack, enqueue/dequeue for the queue.
pub trait Worklist {
    /// Create an empty worklist with the given initial capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity <= 1`.
    fn with_capacity(capacity: usize) -> Self
    where
        Self: Sized;

    /// Insert a coordinate, growing the storage if full.
    fn put(&mut self, coord: PixelCoord);

    /// Remove the next coordinate, or `None` if empty.
    fn take(&mut self) -> Option<PixelCoord>;

    /// Number of stored coordinates.
    fn len(&self) -> usize;

    /// Check whether the worklist is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[inline]
fn check_capacity(capacity: usize) {
    assert!(
        capacity > 1,
        "container capacity must be greater than 1, got {capacity}"
    );
}
