//! Queue over a contiguous vector with front removal.

use core::fmt;

use crate::{Full, Queue};

/// A queue over a contiguous `Vec`.
///
/// Enqueue is an amortized O(1) append. Dequeue removes index 0 and shifts
/// the remaining elements down, so it is O(n). Use it for short queues where
/// contiguous storage wins over pointer chasing.
#[derive(Clone)]
pub struct ArrayQueue<T> {
    items: Vec<T>,
}

impl<T> Default for ArrayQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayQueue<T> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Queue for ArrayQueue<T> {
    type Item = T;

    #[inline]
    fn enqueue(&mut self, item: T) -> Result<(), Full<T>> {
        self.items.push(item);
        Ok(())
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items.remove(0))
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo() {
        let mut q = ArrayQueue::new();
        for i in 0..5 {
            q.enqueue(i).unwrap();
        }
        assert_eq!(q.peek(), Some(&0));
        for i in 0..5 {
            assert_eq!(q.dequeue(), Some(i));
        }
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.peek(), None);
    }

    #[test]
    fn empty_dequeue_is_idempotent() {
        let mut q: ArrayQueue<u8> = ArrayQueue::default();
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.dequeue(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn debug_lists_fifo_order() {
        let mut q = ArrayQueue::new();
        q.enqueue("a").unwrap();
        q.enqueue("b").unwrap();
        q.dequeue();
        q.enqueue("c").unwrap();
        assert_eq!(format!("{q:?}"), r#"["b", "c"]"#);
    }
}
