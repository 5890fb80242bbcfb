//! Bounded queue over a fixed-capacity ring buffer.
//!
//! Nothing allocates after construction. A full queue refuses new
//! elements instead of overwriting old ones.

use core::fmt;

use crate::{Full, Queue, RingBuffer};

/// A bounded queue over a [`RingBuffer`].
///
/// Both ends are O(1) and nothing allocates after construction. Enqueueing
/// into a full queue fails and returns the element.
pub struct RingQueue<T> {
    ring: RingBuffer<T>,
}

impl<T> RingQueue<T> {
    /// Creates an empty queue holding at most `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ring: RingBuffer::with_capacity(capacity),
        }
    }

    /// Maximum number of queued elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Returns `true` if the next enqueue will fail.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }
}

impl<T> Queue for RingQueue<T> {
    type Item = T;

    #[inline]
    fn enqueue(&mut self, item: T) -> Result<(), Full<T>> {
        self.ring.write(item)
    }

    #[inline]
    fn dequeue(&mut self) -> Option<T> {
        self.ring.read()
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        self.ring.first()
    }

    #[inline]
    fn len(&self) -> usize {
        self.ring.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ring.iter()).finish()
    }
}
