//! Fixed-capacity circular buffer.
//!
//! The buffer allocates its slots once and never resizes. The read and write
//! cursors chase each other around the slice, wrapping at `capacity`:
//!
//! ```text
//!   read            write
//!    v                v
//! [ --, A, B, C, --, -- ]   (capacity 6, len 3 after one read)
//!       ^ oldest
//! ```
//!
//! Writes into a full buffer are refused rather than overwriting the oldest
//! element.

use core::fmt;

use pallet_collections::Full;
use tracing::trace;

/// A bounded FIFO buffer with O(1) write and read.
///
/// # Example
///
/// ```
/// use pallet_queue::RingBuffer;
///
/// let mut ring = RingBuffer::with_capacity(2);
/// assert!(ring.write('a').is_ok());
/// assert!(ring.write('b').is_ok());
/// assert!(ring.write('c').is_err());
///
/// assert_eq!(ring.read(), Some('a'));
/// assert!(ring.write('c').is_ok());
/// assert_eq!(ring.iter().collect::<String>(), "bc");
/// ```
pub struct RingBuffer<T> {
    slots: Box<[Option<T>]>,
    read: usize,
    write: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` elements.
    ///
    /// A capacity of zero is allowed; such a buffer refuses every write.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            read: 0,
            write: 0,
            len: 0,
        }
    }

    /// Maximum number of elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of elements currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the next write will be refused.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    #[inline]
    fn advance(&self, cursor: usize) -> usize {
        let next = cursor + 1;
        if next == self.capacity() { 0 } else { next }
    }

    /// Stores `value` as the newest element.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the buffer is full. Nothing is
    /// overwritten.
    pub fn write(&mut self, value: T) -> Result<(), Full<T>> {
        if self.is_full() {
            trace!(capacity = self.capacity(), "ring buffer rejected write");
            return Err(Full(value));
        }

        debug_assert!(self.slots[self.write].is_none());
        self.slots[self.write] = Some(value);
        self.write = self.advance(self.write);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the oldest element.
    pub fn read(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = self.slots[self.read].take();
        debug_assert!(value.is_some());
        self.read = self.advance(self.read);
        self.len -= 1;
        value
    }

    /// Returns the oldest element without removing it.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.read].as_ref()
    }

    /// Drops every element and resets both cursors.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.read = 0;
        self.write = 0;
        self.len = 0;
    }

    /// Iterates oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            pos: self.read,
            remaining: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("items", &DebugItems(self))
            .finish()
    }
}

struct DebugItems<'a, T>(&'a RingBuffer<T>);

impl<T: fmt::Debug> fmt::Debug for DebugItems<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Oldest-to-newest iterator over a [`RingBuffer`].
pub struct Iter<'a, T> {
    ring: &'a RingBuffer<T>,
    pos: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.ring.slots[self.pos].as_ref();
        self.pos = self.ring.advance(self.pos);
        self.remaining -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
