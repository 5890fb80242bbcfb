//! DoublyLinkedList - a linked list that owns its arena.

use core::fmt;

use crate::list::{ArenaListStorage, Iter};
use crate::{Handle, Key, List, Storage};

/// A doubly-linked list that owns its node arena.
///
/// Every push returns a [`Handle`] to the new node. The handle stays valid
/// until that node is removed; afterwards every method taking it returns
/// `None` (or `false`), even if the arena slot has been reused.
///
/// # Example
///
/// ```
/// use pallet_collections::DoublyLinkedList;
///
/// let mut list: DoublyLinkedList<&str> = DoublyLinkedList::new();
/// let a = list.push_back("a");
/// list.push_back("b");
///
/// assert_eq!(list.front_handle(), Some(a));
/// assert_eq!(list.remove(a), Some("a"));
/// assert_eq!(list.remove(a), None); // stale
/// assert_eq!(list.front(), Some(&"b"));
/// ```
pub struct DoublyLinkedList<T> {
    storage: ArenaListStorage<T>,
    list: List<T, ArenaListStorage<T>>,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            storage: ArenaListStorage::new(),
            list: List::new(),
        }
    }

    /// Creates an empty list with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: ArenaListStorage::with_capacity(capacity),
            list: List::new(),
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the head node's handle, or `None` if empty.
    #[inline]
    pub fn front_handle(&self) -> Option<Handle> {
        self.list.front_key()
    }

    /// Returns the tail node's handle, or `None` if empty.
    #[inline]
    pub fn back_handle(&self) -> Option<Handle> {
        self.list.back_key()
    }

    // ========================================================================
    // Insert operations
    // ========================================================================

    /// Appends a value to the tail, returning the new node's handle.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Handle {
        self.list.push_back(&mut self.storage, value)
    }

    /// Prepends a value at the head, returning the new node's handle.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Handle {
        self.list.push_front(&mut self.storage, value)
    }

    // ========================================================================
    // Remove operations
    // ========================================================================

    /// Removes and returns the front element.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.list.pop_front(&mut self.storage)
    }

    /// Removes and returns the back element.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.list.pop_back(&mut self.storage)
    }

    /// Removes the node behind `handle` in O(1).
    ///
    /// Returns `None` if the handle is stale.
    #[inline]
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        self.list.remove(&mut self.storage, handle)
    }

    /// Removes every element and invalidates every handle.
    pub fn clear(&mut self) {
        self.list.clear(&mut self.storage);
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns `true` if `handle` still refers to a node in this list.
    #[inline]
    pub fn contains(&self, handle: Handle) -> bool {
        handle.is_some() && self.storage.contains(handle)
    }

    /// Returns a reference to the value behind `handle`.
    #[inline]
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.list.get(&self.storage, handle)
    }

    /// Returns a mutable reference to the value behind `handle`.
    #[inline]
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.list.get_mut(&mut self.storage, handle)
    }

    /// Returns a reference to the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.list.front(&self.storage)
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.list.back(&self.storage)
    }

    /// Handle of the node after `handle`, or `None` at the tail.
    #[inline]
    pub fn next_handle(&self, handle: Handle) -> Option<Handle> {
        self.list.next_key(&self.storage, handle)
    }

    /// Iterates front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, ArenaListStorage<T>, Handle> {
        self.list.iter(&self.storage)
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let list: DoublyLinkedList<u64> = DoublyLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.front_handle(), None);
        assert_eq!(list.back_handle(), None);
    }

    #[test]
    fn head_handle_tracks_front() {
        let mut list = DoublyLinkedList::new();

        let a = list.push_back(1);
        let b = list.push_back(2);
        let z = list.push_front(0);

        assert_eq!(list.front_handle(), Some(z));
        assert_eq!(list.back_handle(), Some(b));
        assert_eq!(list.next_handle(z), Some(a));
        assert_eq!(list.get(a), Some(&1));

        list.remove(z);
        assert_eq!(list.front_handle(), Some(a));
    }

    #[test]
    fn remove_by_handle_from_anywhere() {
        let mut list: DoublyLinkedList<u64> = (1..=5).collect();
        let handles: Vec<_> = {
            let mut out = Vec::new();
            let mut h = list.front_handle();
            while let Some(cur) = h {
                out.push(cur);
                h = list.next_handle(cur);
            }
            out
        };

        assert_eq!(list.remove(handles[2]), Some(3));
        assert_eq!(list.remove(handles[0]), Some(1));
        assert_eq!(list.remove(handles[4]), Some(5));

        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec![2, 4]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn stale_handle_never_aliases() {
        let mut list = DoublyLinkedList::new();

        let old = list.push_back("old");
        assert_eq!(list.pop_front(), Some("old"));
        assert!(!list.contains(old));

        let new = list.push_back("new");
        assert!(list.contains(new));
        assert!(!list.contains(old));
        assert_eq!(list.get(old), None);
        assert_eq!(list.get_mut(old), None);
        assert_eq!(list.remove(old), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn clear_invalidates_handles() {
        let mut list = DoublyLinkedList::new();
        let a = list.push_back(1);
        list.push_back(2);

        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.get(a), None);
        assert_eq!(list.pop_back(), None);
    }

    #[test]
    fn get_mut_updates_value() {
        let mut list = DoublyLinkedList::with_capacity(4);
        let a = list.push_back(10);
        *list.get_mut(a).unwrap() += 5;
        assert_eq!(list.back(), Some(&15));
    }

    #[test]
    fn debug_lists_values_in_order() {
        let list: DoublyLinkedList<u64> = [3, 1, 2].into_iter().collect();
        assert_eq!(format!("{list:?}"), "[3, 1, 2]");
    }
}
