//! Growable double-ended buffer.
//!
//! Elements occupy a contiguous range `[head, slots.len())` of a backing
//! `Vec<Option<T>>`. Pushing at the back is a plain `Vec::push`. Pushing at
//! the front writes into the free slot just before `head`; when there is
//! none, the front headroom is doubled in one step.
//!
//! ```text
//!  slots: [ None | None | None |  a  |  b  |  c  ]
//!                              ^head
//! ```
//!
//! Popping at the front leaves empty slots behind `head`. Once `head` reaches
//! twice the tracked headroom, and the headroom is at least the initial
//! capacity, the leading `size + size / 2` empty slots are dropped and the
//! headroom halves. The threshold sits well above the growth point, so a
//! push/pop pair at the boundary cannot flip between growing and shrinking.

use core::fmt;
use core::iter::FusedIterator;
use core::slice;

use tracing::trace;

const DEFAULT_CAPACITY: usize = 10;

/// A double-ended queue with amortized O(1) push and pop at both ends.
///
/// `push`/`pop` work on the back, `push_left`/`pop_left` on the front.
///
/// # Memory
///
/// The front is trimmed only while the tracked headroom is at least the
/// construction capacity. Once a trim halves it below that, `pop_left` never
/// trims again, so a long FIFO workload (`push` then `pop_left`) keeps
/// accumulating vacated slots in front of `head`. Call [`clear`](Self::clear)
/// once drained, or use a queue from `pallet-queue`, for that pattern.
///
/// # Example
///
/// ```
/// use pallet_collections::Deque;
///
/// let mut deque = Deque::with_capacity(2);
/// deque.push(2);
/// deque.push_left(1);
/// deque.push_left(0);
/// deque.push_left(-1); // headroom exhausted: grows
///
/// assert_eq!(deque.pop_left(), Some(-1));
/// assert_eq!(deque.peek_left(), Some(&0));
/// assert_eq!(deque.peek(), Some(&2));
/// assert_eq!(deque.pop_left(), Some(0));
/// assert_eq!(deque.pop(), Some(2));
/// assert_eq!(deque.len(), 1);
/// ```
#[derive(Clone)]
pub struct Deque<T> {
    slots: Vec<Option<T>>,
    /// Index of the first logical element.
    head: usize,
    /// Headroom reserved in front of `head` by the last grow.
    size: usize,
    /// Headroom at construction; the shrink policy never goes past it twice.
    capacity: usize,
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> {
    /// Creates an empty deque with the default front headroom of 10.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty deque with `capacity` free slots at the front.
    ///
    /// A capacity of 0 is raised to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        let size = capacity.max(1);
        let mut slots = Vec::with_capacity(size);
        slots.resize_with(size, || None);
        Self {
            slots,
            head: size,
            size,
            capacity: size,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len() - self.head
    }

    /// Returns `true` if the deque holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends an element at the back.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.slots.push(Some(value));
    }

    /// Prepends an element at the front.
    pub fn push_left(&mut self, value: T) {
        if self.head == 0 {
            self.grow_front();
        }
        self.head -= 1;
        self.slots[self.head] = Some(value);
    }

    /// Removes and returns the back element.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.slots.pop().flatten()
    }

    /// Removes and returns the front element.
    pub fn pop_left(&mut self) -> Option<T> {
        let value = self.slots.get_mut(self.head)?.take()?;
        self.head += 1;

        if self.size >= self.capacity && self.head >= self.size * 2 {
            self.shrink_front();
        }
        Some(value)
    }

    /// Returns the back element.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots.last()?.as_ref()
    }

    /// Returns the front element.
    #[inline]
    pub fn peek_left(&self) -> Option<&T> {
        self.slots.get(self.head)?.as_ref()
    }

    /// Drops every element and restores the initial headroom.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.slots.resize_with(self.capacity, || None);
        self.head = self.capacity;
        self.size = self.capacity;
    }

    /// Iterates front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots[self.head..].iter(),
        }
    }

    fn grow_front(&mut self) {
        self.size *= 2;

        let mut grown = Vec::with_capacity(self.size + self.slots.len());
        grown.resize_with(self.size, || None);
        grown.append(&mut self.slots);
        self.slots = grown;
        self.head = self.size;

        trace!(new_size = self.size, len = self.len(), "deque grew front headroom");
    }

    fn shrink_front(&mut self) {
        // head >= 2 * size > removed, so only vacated slots are dropped.
        let removed = self.size + self.size / 2;
        debug_assert!(self.slots[..removed].iter().all(Option::is_none));

        self.slots.drain(..removed);
        self.head -= removed;
        self.size = (self.size / 2).max(1);

        trace!(removed, new_size = self.size, "deque trimmed front headroom");
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.slots.extend(iter.into_iter().map(Some));
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Front-to-back iterator over a [`Deque`].
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()?.as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()?.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
