//! Storage traits and the arena that backs the linked list.
//!
//! Storage provides insert/remove/get where keys stay valid until the value
//! is removed. Node-based structures ([`List`](crate::List)) link their nodes
//! through these keys instead of pointers.
//!
//! ```text
//! Storage<T>              - get, get_mut, remove, len
//!     │
//!     ├── BoundedStorage<T>   - fixed capacity, try_insert -> Result<Key, Full<T>>
//!     │
//!     └── UnboundedStorage<T> - growable, insert -> Key
//! ```

use core::fmt;

use tracing::trace;

use crate::key::{Handle, Key};

/// Slot-addressed storage with stable keys.
///
/// Implementations must keep a key valid until the value behind it is
/// removed, and must make `get`/`get_mut`/`remove` O(1).
pub trait Storage<T> {
    /// Key type for this storage.
    type Key: Key;

    /// Number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slots are occupied.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes and returns the value at `key`, if present.
    fn remove(&mut self, key: Self::Key) -> Option<T>;

    /// Returns a reference to the value at `key`, if present.
    fn get(&self, key: Self::Key) -> Option<&T>;

    /// Returns a mutable reference to the value at `key`, if present.
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T>;

    /// Returns `true` if `key` refers to a live value.
    #[inline]
    fn contains(&self, key: Self::Key) -> bool {
        self.get(key).is_some()
    }
}

/// Storage with a fixed number of slots.
pub trait BoundedStorage<T>: Storage<T> {
    /// Inserts a value, returning its key.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` when every slot is occupied.
    fn try_insert(&mut self, value: T) -> Result<Self::Key, Full<T>>;

    /// Maximum number of occupied slots.
    fn capacity(&self) -> usize;
}

/// Storage that grows on demand.
pub trait UnboundedStorage<T>: Storage<T> {
    /// Inserts a value, returning its key.
    fn insert(&mut self, value: T) -> Self::Key;
}

/// Error returned when a fixed-capacity structure is full.
///
/// Carries the value that could not be stored so the caller can retry or
/// route it elsewhere.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Full(..)")
    }
}

impl<T> fmt::Display for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage is full")
    }
}

impl<T> std::error::Error for Full<T> {}

// =============================================================================
// Arena - growable, generation-checked
// =============================================================================

const FREE_NONE: u32 = u32::MAX;

enum Slot<T> {
    Occupied { value: T, generation: u32 },
    Vacant { next_free: u32, generation: u32 },
}

/// Growable slot storage addressed by generation-checked [`Handle`]s.
///
/// Removed slots go onto a free list and are reused by later inserts. Each
/// reuse bumps the slot's generation, so a handle to a removed value never
/// aliases the value that took its place.
///
/// # Example
///
/// ```
/// use pallet_collections::{Arena, Storage, UnboundedStorage};
///
/// let mut arena: Arena<&str> = Arena::new();
/// let a = arena.insert("a");
/// assert_eq!(arena.remove(a), Some("a"));
///
/// let b = arena.insert("b");
/// assert_eq!(a.index(), b.index()); // slot reused
/// assert_eq!(arena.get(a), None);   // old handle is stale
/// assert_eq!(arena.get(b), Some(&"b"));
/// ```
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: u32,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    /// Creates an empty arena.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: FREE_NONE,
            len: 0,
        }
    }

    /// Creates an empty arena with room for `capacity` values before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: FREE_NONE,
            len: 0,
        }
    }

    /// Number of slots allocated so far, occupied or not.
    #[inline]
    pub fn slots(&self) -> usize {
        self.slots.len()
    }

    /// Drops every value and invalidates every outstanding handle.
    pub fn clear(&mut self) {
        // Keep generations monotonic so pre-clear handles stay stale.
        let mut next_free = FREE_NONE;
        for (i, slot) in self.slots.iter_mut().enumerate().rev() {
            let generation = match slot {
                Slot::Occupied { generation, .. } => generation.wrapping_add(1),
                Slot::Vacant { generation, .. } => *generation,
            };
            *slot = Slot::Vacant {
                next_free,
                generation,
            };
            next_free = i as u32;
        }
        self.free_head = next_free;
        self.len = 0;
    }

    fn slot(&self, handle: Handle) -> Option<&T> {
        match self.slots.get(handle.index() as usize)? {
            Slot::Occupied { value, generation } if *generation == handle.generation() => {
                Some(value)
            }
            _ => None,
        }
    }

    fn slot_mut(&mut self, handle: Handle) -> Option<&mut T> {
        match self.slots.get_mut(handle.index() as usize)? {
            Slot::Occupied { value, generation } if *generation == handle.generation() => {
                Some(value)
            }
            _ => None,
        }
    }

    fn insert_slot(&mut self, value: T) -> Handle {
        self.len += 1;

        if self.free_head != FREE_NONE {
            let index = self.free_head;
            let slot = &mut self.slots[index as usize];
            let generation = match *slot {
                Slot::Vacant {
                    next_free,
                    generation,
                } => {
                    self.free_head = next_free;
                    generation
                }
                Slot::Occupied { .. } => unreachable!("free list points at an occupied slot"),
            };
            *slot = Slot::Occupied { value, generation };
            return Handle::new(index, generation);
        }

        let index = self.slots.len();
        debug_assert!(index < FREE_NONE as usize, "arena index space exhausted");
        if index == self.slots.capacity() {
            trace!(slots = index, "arena reallocating");
        }
        self.slots.push(Slot::Occupied {
            value,
            generation: 0,
        });
        Handle::new(index as u32, 0)
    }
}

impl<T> Storage<T> for Arena<T> {
    type Key = Handle;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn remove(&mut self, key: Handle) -> Option<T> {
        let index = key.index() as usize;
        match self.slots.get(index) {
            Some(Slot::Occupied { generation, .. }) if *generation == key.generation() => {}
            _ => return None,
        }

        let vacant = Slot::Vacant {
            next_free: self.free_head,
            generation: key.generation().wrapping_add(1),
        };
        self.free_head = index as u32;
        self.len -= 1;

        match core::mem::replace(&mut self.slots[index], vacant) {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    #[inline]
    fn get(&self, key: Handle) -> Option<&T> {
        self.slot(key)
    }

    #[inline]
    fn get_mut(&mut self, key: Handle) -> Option<&mut T> {
        self.slot_mut(key)
    }
}

impl<T> UnboundedStorage<T> for Arena<T> {
    #[inline]
    fn insert(&mut self, value: T) -> Handle {
        self.insert_slot(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Arena<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (i, slot) in self.slots.iter().enumerate() {
            if let Slot::Occupied { value, generation } = slot {
                map.entry(&Handle::new(i as u32, *generation), value);
            }
        }
        map.finish()
    }
}

// =============================================================================
// FixedArena - arena with a hard slot limit
// =============================================================================

/// An [`Arena`] that refuses inserts past a fixed capacity.
///
/// # Example
///
/// ```
/// use pallet_collections::{BoundedStorage, FixedArena};
///
/// let mut arena: FixedArena<u64> = FixedArena::with_capacity(1);
/// assert!(arena.try_insert(1).is_ok());
/// assert_eq!(arena.try_insert(2).unwrap_err().into_inner(), 2);
/// ```
pub struct FixedArena<T> {
    inner: Arena<T>,
    capacity: usize,
}

impl<T> FixedArena<T> {
    /// Creates an arena that holds at most `capacity` values.
    ///
    /// All slots are reserved up front; inserts never reallocate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arena::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns `true` if no further insert can succeed.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.inner.len() >= self.capacity
    }

    /// Drops every value and invalidates every outstanding handle.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<T> Storage<T> for FixedArena<T> {
    type Key = Handle;

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    fn remove(&mut self, key: Handle) -> Option<T> {
        self.inner.remove(key)
    }

    #[inline]
    fn get(&self, key: Handle) -> Option<&T> {
        self.inner.get(key)
    }

    #[inline]
    fn get_mut(&mut self, key: Handle) -> Option<&mut T> {
        self.inner.get_mut(key)
    }
}

impl<T> BoundedStorage<T> for FixedArena<T> {
    #[inline]
    fn try_insert(&mut self, value: T) -> Result<Handle, Full<T>> {
        if self.is_full() {
            return Err(Full(value));
        }
        Ok(self.inner.insert_slot(value))
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: fmt::Debug> fmt::Debug for FixedArena<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedArena")
            .field("capacity", &self.capacity)
            .field("slots", &self.inner)
            .finish()
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

#[cfg(feature = "slab")]
impl<T> Storage<T> for slab::Slab<T> {
    type Key = usize;

    #[inline]
    fn len(&self) -> usize {
        slab::Slab::len(self)
    }

    #[inline]
    fn remove(&mut self, key: usize) -> Option<T> {
        self.try_remove(key)
    }

    #[inline]
    fn get(&self, key: usize) -> Option<&T> {
        slab::Slab::get(self, key)
    }

    #[inline]
    fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        slab::Slab::get_mut(self, key)
    }
}

#[cfg(feature = "slab")]
impl<T> UnboundedStorage<T> for slab::Slab<T> {
    #[inline]
    fn insert(&mut self, value: T) -> usize {
        slab::Slab::insert(self, value)
    }
}
