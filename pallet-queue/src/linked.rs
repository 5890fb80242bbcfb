//! Queue over the arena-backed doubly-linked list.

use core::fmt;

use pallet_collections::DoublyLinkedList;

use crate::{Full, Queue};

/// A queue over an arena-backed [`DoublyLinkedList`].
///
/// Enqueue appends a node at the tail. Dequeue removes the head node by its
/// handle. Both are O(1) and never shift elements.
pub struct LinkedQueue<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            list: DoublyLinkedList::new(),
        }
    }
}

impl<T> Queue for LinkedQueue<T> {
    type Item = T;

    #[inline]
    fn enqueue(&mut self, item: T) -> Result<(), Full<T>> {
        self.list.push_back(item);
        Ok(())
    }

    #[inline]
    fn dequeue(&mut self) -> Option<T> {
        let head = self.list.front_handle()?;
        self.list.remove(head)
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    #[inline]
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.list.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo() {
        let mut q = LinkedQueue::new();
        q.enqueue(1).unwrap();
        q.enqueue(2).unwrap();
        assert_eq!(q.dequeue(), Some(1));
        q.enqueue(3).unwrap();
        assert_eq!(q.peek(), Some(&2));
        assert_eq!(q.dequeue(), Some(2));
        assert_eq!(q.dequeue(), Some(3));
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn reuses_nodes_across_cycles() {
        let mut q = LinkedQueue::new();
        for round in 0..100u32 {
            q.enqueue(round).unwrap();
            q.enqueue(round + 1000).unwrap();
            assert_eq!(q.dequeue(), Some(round));
            assert_eq!(q.dequeue(), Some(round + 1000));
        }
        assert!(q.is_empty());
    }

    #[test]
    fn empty_dequeue_is_idempotent() {
        let mut q: LinkedQueue<String> = LinkedQueue::default();
        for _ in 0..3 {
            assert_eq!(q.dequeue(), None);
            assert_eq!(q.peek(), None);
            assert_eq!(q.len(), 0);
        }
    }

    #[test]
    fn debug_lists_fifo_order() {
        let mut q = LinkedQueue::new();
        q.enqueue(3).unwrap();
        q.enqueue(1).unwrap();
        assert_eq!(format!("{q:?}"), "[3, 1]");
    }
}
