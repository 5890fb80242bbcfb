//! Convenience wrappers that own their storage.
//!
//! [`DoublyLinkedList`] bundles a [`List`](crate::List) with the
//! [`Arena`](crate::Arena) its nodes live in, so callers don't have to pass
//! `&mut storage` to every method.
//!
//! Use the raw [`List`](crate::List) when several lists should share one
//! storage pool, or when the storage must be bounded or slab-backed.
//!
//! # Example
//!
//! ```
//! use pallet_collections::DoublyLinkedList;
//!
//! let mut list: DoublyLinkedList<u64> = DoublyLinkedList::new();
//! list.push_back(1);
//! let two = list.push_back(2);
//! list.push_back(3);
//!
//! assert_eq!(list.remove(two), Some(2));
//! assert_eq!(list.pop_front(), Some(1));
//! assert_eq!(list.pop_front(), Some(3));
//! ```

mod list;

pub use list::DoublyLinkedList;
