//! Linear and priority containers with explicit cost models.
//!
//! # Data Structures
//!
//! | Structure | Use Case | Key Operations |
//! |-----------|----------|----------------|
//! | [`BinaryHeap`] | Priority queues | O(log n) push/pop, O(1) peek |
//! | [`Deque`] | Double-ended buffers | Amortized O(1) push/pop at both ends |
//! | [`DoublyLinkedList`] | FIFO queues, removal by handle | O(1) push/pop/remove |
//! | [`List`] | Several lists over one storage pool | O(1) push/pop/remove |
//!
//! # Storage and Handles
//!
//! Linked structures keep their nodes in a [`Storage`] and link them through
//! keys rather than pointers:
//!
//! ```text
//! Storage (Arena)     - owns nodes, hands out generation-checked handles
//! List                - links handles, doesn't own data
//! DoublyLinkedList    - List + Arena bundled together
//! ```
//!
//! A [`Handle`] stays valid until its node is removed. After that every
//! lookup with it returns `None`, even when the slot has been reused.
//!
//! ```
//! use pallet_collections::DoublyLinkedList;
//!
//! let mut list: DoublyLinkedList<u64> = DoublyLinkedList::new();
//! let key = list.push_back(42);
//! assert_eq!(list.remove(key), Some(42));
//! assert_eq!(list.get(key), None);
//! ```
//!
//! # Errors
//!
//! Reading or removing from an empty structure returns `None`. Inserting
//! into bounded storage that has no free slot returns `Err(Full(value))`,
//! handing the value back. Nothing here panics in normal use.
//!
//! # Feature Flags
//!
//! - `slab` - Enable [`Storage`] impl for `slab::Slab`

#![warn(missing_docs)]

pub mod deque;
pub mod heap;
pub mod key;
pub mod list;
pub mod owned;
pub mod storage;

pub use deque::Deque;
pub use heap::{BinaryHeap, Compare, MaxFirst, MinFirst};
pub use key::{Handle, Key};
pub use list::{ArenaListStorage, List, ListNode};
pub use owned::DoublyLinkedList;
pub use storage::{Arena, BoundedStorage, FixedArena, Full, Storage, UnboundedStorage};

#[cfg(feature = "slab")]
pub use list::SlabListStorage;
