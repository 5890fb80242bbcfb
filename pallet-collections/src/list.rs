//! Doubly-linked list over external storage.
//!
//! Nodes live in a [`Storage`] and link to each other through storage keys.
//! The list itself only tracks head, tail and length, so pushing, popping
//! and removing a node by key are all O(1).
//!
//! # Storage Invariant
//!
//! A list instance must always be used with the same storage instance.
//! Passing a different storage yields wrong results (never memory
//! unsafety). This is the caller's responsibility, as with the `slab` crate.
//!
//! Several lists may share one storage. Every node is stamped with the id
//! of the list that inserted it, and a list ignores keys whose node carries
//! another id, so one list can never unlink another's nodes.
//!
//! # Bounded vs Unbounded Storage
//!
//! ```
//! use pallet_collections::{Arena, FixedArena, List, ListNode};
//!
//! // Bounded storage - fallible insertion
//! let mut storage: FixedArena<ListNode<u64>> = FixedArena::with_capacity(16);
//! let mut list: List<u64, FixedArena<ListNode<u64>>> = List::new();
//! let key = list.try_push_back(&mut storage, 42).unwrap();
//!
//! // Unbounded storage - infallible insertion
//! let mut storage: Arena<ListNode<u64>> = Arena::new();
//! let mut list: List<u64, Arena<ListNode<u64>>> = List::new();
//! let key = list.push_back(&mut storage, 42);
//! assert_eq!(list.remove(&mut storage, key), Some(42));
//! ```

use core::marker::PhantomData;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::key::{Handle, Key};
use crate::storage::{Arena, BoundedStorage, Full, Storage, UnboundedStorage};

/// Growable list storage backed by an [`Arena`].
pub type ArenaListStorage<T> = Arena<ListNode<T, Handle>>;

/// Growable list storage backed by `slab::Slab`.
#[cfg(feature = "slab")]
pub type SlabListStorage<T> = slab::Slab<ListNode<T, usize>>;

/// A node in the linked list.
///
/// Wraps user data with prev/next links. Users reach the data through the
/// list's accessors; the links are an implementation detail.
#[derive(Debug)]
pub struct ListNode<T, K: Key = Handle> {
    pub(crate) data: T,
    pub(crate) prev: K,
    pub(crate) next: K,
    owner: usize,
}

impl<T, K: Key> ListNode<T, K> {
    #[inline]
    fn new(data: T, owner: usize) -> Self {
        Self {
            data,
            prev: K::NONE,
            next: K::NONE,
            owner,
        }
    }
}

static NEXT_LIST_ID: AtomicUsize = AtomicUsize::new(0);

/// A doubly-linked list over external storage.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `S`: Storage type (e.g., [`ArenaListStorage<T>`])
/// - `K`: Key type (default [`Handle`])
#[derive(Debug)]
pub struct List<T, S, K: Key = Handle>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    id: usize,
    head: K,
    tail: K,
    len: usize,
    _marker: PhantomData<(T, S)>,
}

impl<T, S, K: Key> Default for List<T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Base impl - works with any Storage
// =============================================================================

impl<T, S, K: Key> List<T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    /// Creates an empty list with a fresh owner id.
    #[inline]
    pub fn new() -> Self {
        Self {
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
            head: K::NONE,
            tail: K::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the head node's key, or `None` if empty.
    #[inline]
    pub fn front_key(&self) -> Option<K> {
        self.head.is_some().then_some(self.head)
    }

    /// Returns the tail node's key, or `None` if empty.
    #[inline]
    pub fn back_key(&self) -> Option<K> {
        self.tail.is_some().then_some(self.tail)
    }

    /// Returns the key following `key`, or `None` at the tail.
    pub fn next_key(&self, storage: &S, key: K) -> Option<K> {
        let next = self.node(storage, key)?.next;
        next.is_some().then_some(next)
    }

    /// Returns the key preceding `key`, or `None` at the head.
    pub fn prev_key(&self, storage: &S, key: K) -> Option<K> {
        let prev = self.node(storage, key)?.prev;
        prev.is_some().then_some(prev)
    }

    /// Node behind `key`, if it is alive and was inserted by this list.
    #[inline]
    fn node<'a>(&self, storage: &'a S, key: K) -> Option<&'a ListNode<T, K>> {
        storage.get(key).filter(|node| node.owner == self.id)
    }

    // ========================================================================
    // Remove operations (unlink + deallocate)
    // ========================================================================

    /// Removes and returns the front element.
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn pop_front(&mut self, storage: &mut S) -> Option<T> {
        let key = self.front_key()?;
        self.remove(storage, key)
    }

    /// Removes and returns the back element.
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn pop_back(&mut self, storage: &mut S) -> Option<T> {
        let key = self.back_key()?;
        self.remove(storage, key)
    }

    /// Removes an element by key in O(1).
    ///
    /// Returns `None` if the key is stale or its node belongs to another
    /// list, leaving both lists untouched.
    pub fn remove(&mut self, storage: &mut S, key: K) -> Option<T> {
        if !self.unlink(storage, key) {
            return None;
        }
        storage.remove(key).map(|node| node.data)
    }

    // ========================================================================
    // Linking
    // ========================================================================

    fn link_back(&mut self, storage: &mut S, key: K) {
        let tail = self.tail;
        match storage.get_mut(key) {
            Some(node) => {
                node.prev = tail;
                node.next = K::NONE;
            }
            None => {
                debug_assert!(false, "linking a key that is not in storage");
                return;
            }
        }

        match storage.get_mut(tail) {
            Some(prev) => prev.next = key,
            None => self.head = key,
        }

        self.tail = key;
        self.len += 1;
    }

    fn link_front(&mut self, storage: &mut S, key: K) {
        let head = self.head;
        match storage.get_mut(key) {
            Some(node) => {
                node.next = head;
                node.prev = K::NONE;
            }
            None => {
                debug_assert!(false, "linking a key that is not in storage");
                return;
            }
        }

        match storage.get_mut(head) {
            Some(next) => next.prev = key,
            None => self.tail = key,
        }

        self.head = key;
        self.len += 1;
    }

    /// Detaches `key` from its neighbours. Returns `false` if it is not linked here.
    fn unlink(&mut self, storage: &mut S, key: K) -> bool {
        let Some(node) = self.node(storage, key) else {
            return false;
        };
        let prev = node.prev;
        let next = node.next;
        debug_assert!(self.len > 0, "owned node in an empty list");

        match storage.get_mut(prev) {
            Some(p) => p.next = next,
            None => self.head = next,
        }
        match storage.get_mut(next) {
            Some(n) => n.prev = prev,
            None => self.tail = prev,
        }

        if let Some(node) = storage.get_mut(key) {
            node.prev = K::NONE;
            node.next = K::NONE;
        }

        self.len -= 1;
        true
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a reference to the element at the given key.
    ///
    /// Returns `None` if the key is stale or belongs to another list.
    #[inline]
    pub fn get<'a>(&self, storage: &'a S, key: K) -> Option<&'a T> {
        self.node(storage, key).map(|node| &node.data)
    }

    /// Returns a mutable reference to the element at the given key.
    ///
    /// Returns `None` if the key is stale or belongs to another list.
    #[inline]
    pub fn get_mut<'a>(&self, storage: &'a mut S, key: K) -> Option<&'a mut T> {
        storage
            .get_mut(key)
            .filter(|node| node.owner == self.id)
            .map(|node| &mut node.data)
    }

    /// Returns a reference to the front element.
    #[inline]
    pub fn front<'a>(&self, storage: &'a S) -> Option<&'a T> {
        self.get(storage, self.head)
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back<'a>(&self, storage: &'a S) -> Option<&'a T> {
        self.get(storage, self.tail)
    }

    /// Returns `true` if `key` is the head of this list.
    #[inline]
    pub fn is_head(&self, key: K) -> bool {
        self.head.is_some() && self.head == key
    }

    /// Returns `true` if `key` is the tail of this list.
    #[inline]
    pub fn is_tail(&self, key: K) -> bool {
        self.tail.is_some() && self.tail == key
    }

    /// Removes every element, deallocating the nodes.
    pub fn clear(&mut self, storage: &mut S) {
        let mut key = self.head;
        while let Some(node) = storage.remove(key) {
            key = node.next;
        }

        self.head = K::NONE;
        self.tail = K::NONE;
        self.len = 0;
    }

    /// Iterates front to back.
    #[inline]
    pub fn iter<'a>(&self, storage: &'a S) -> Iter<'a, T, S, K> {
        Iter {
            storage,
            front: self.head,
            back: self.tail,
            remaining: self.len,
            _marker: PhantomData,
        }
    }
}

// =============================================================================
// Bounded storage impl - fallible insertion
// =============================================================================

impl<T, S, K: Key> List<T, S, K>
where
    S: BoundedStorage<ListNode<T, K>, Key = K>,
{
    /// Pushes a value to the back of the list.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if storage is full.
    #[inline]
    pub fn try_push_back(&mut self, storage: &mut S, value: T) -> Result<K, Full<T>> {
        let key = storage
            .try_insert(ListNode::new(value, self.id))
            .map_err(|e| Full(e.0.data))?;
        self.link_back(storage, key);
        Ok(key)
    }

    /// Pushes a value to the front of the list.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if storage is full.
    #[inline]
    pub fn try_push_front(&mut self, storage: &mut S, value: T) -> Result<K, Full<T>> {
        let key = storage
            .try_insert(ListNode::new(value, self.id))
            .map_err(|e| Full(e.0.data))?;
        self.link_front(storage, key);
        Ok(key)
    }
}

// =============================================================================
// Unbounded storage impl - infallible insertion
// =============================================================================

impl<T, S, K: Key> List<T, S, K>
where
    S: UnboundedStorage<ListNode<T, K>, Key = K>,
{
    /// Pushes a value to the back of the list, returning its key.
    #[inline]
    pub fn push_back(&mut self, storage: &mut S, value: T) -> K {
        let key = storage.insert(ListNode::new(value, self.id));
        self.link_back(storage, key);
        key
    }

    /// Pushes a value to the front of the list, returning its key.
    #[inline]
    pub fn push_front(&mut self, storage: &mut S, value: T) -> K {
        let key = storage.insert(ListNode::new(value, self.id));
        self.link_front(storage, key);
        key
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Front-to-back iterator over a [`List`].
pub struct Iter<'a, T, S, K: Key> {
    storage: &'a S,
    front: K,
    back: K,
    remaining: usize,
    _marker: PhantomData<T>,
}

impl<'a, T: 'a, S, K: Key> Iterator for Iter<'a, T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.storage.get(self.front)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, S, K: Key> DoubleEndedIterator for Iter<'a, T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.storage.get(self.back)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.data)
    }
}

impl<'a, T: 'a, S, K: Key> ExactSizeIterator for Iter<'a, T, S, K> where
    S: Storage<ListNode<T, K>, Key = K>
{
}
