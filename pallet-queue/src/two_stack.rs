//! Queue built from a pair of stacks.

use core::fmt;

use tracing::trace;

use crate::{Full, Queue};

/// A queue built from two stacks.
///
/// Enqueue pushes onto `incoming`. Dequeue pops from `outgoing`, first
/// reversing all of `incoming` into it when `outgoing` is empty. Each element
/// moves at most once, so dequeue is amortized O(1).
///
/// ```text
/// incoming: [4, 5]        (top = 5, newest)
/// outgoing: [3, 2]        (top = 2, oldest)
/// ```
#[derive(Clone)]
pub struct TwoStackQueue<T> {
    incoming: Vec<T>,
    outgoing: Vec<T>,
}

impl<T> Default for TwoStackQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TwoStackQueue<T> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    fn transfer(&mut self) {
        let moved = self.incoming.len();
        self.outgoing.extend(self.incoming.drain(..).rev());
        trace!(moved, "two-stack queue transferred");
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.outgoing.iter().rev().chain(self.incoming.iter())
    }
}

impl<T> Queue for TwoStackQueue<T> {
    type Item = T;

    #[inline]
    fn enqueue(&mut self, item: T) -> Result<(), Full<T>> {
        self.incoming.push(item);
        Ok(())
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.outgoing.is_empty() {
            if self.incoming.is_empty() {
                return None;
            }
            self.transfer();
        }
        self.outgoing.pop()
    }

    /// Peeks without transferring.
    ///
    /// With `outgoing` empty, the oldest element is the bottom of `incoming`.
    #[inline]
    fn peek(&self) -> Option<&T> {
        self.outgoing.last().or_else(|| self.incoming.first())
    }

    #[inline]
    fn len(&self) -> usize {
        self.incoming.len() + self.outgoing.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for TwoStackQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
