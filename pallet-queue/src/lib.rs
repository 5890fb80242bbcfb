//! # pallet-queue
//!
//! Four FIFO queues with different cost models behind one [`Queue`] trait,
//! plus the fixed-capacity [`RingBuffer`] the bounded variant is built on.
//!
//! ## Variants
//!
//! | Queue | enqueue | dequeue | Bounded |
//! |-------|---------|---------|---------|
//! | [`ArrayQueue`] | O(1) amortized | O(n) | no |
//! | [`LinkedQueue`] | O(1) | O(1) | no |
//! | [`RingQueue`] | O(1) | O(1) | yes |
//! | [`TwoStackQueue`] | O(1) | O(1) amortized | no |
//!
//! Only [`RingQueue`] can refuse an element. When it does, the element comes
//! back inside [`Full`] so the caller decides what to drop.
//!
//! ## Example
//!
//! ```
//! use pallet_queue::{Queue, RingQueue, TwoStackQueue};
//!
//! fn drain<Q: Queue<Item = u32>>(q: &mut Q) -> Vec<u32> {
//!     std::iter::from_fn(|| q.dequeue()).collect()
//! }
//!
//! let mut ring = RingQueue::with_capacity(2);
//! ring.enqueue(1).unwrap();
//! ring.enqueue(2).unwrap();
//! assert_eq!(ring.enqueue(3).unwrap_err().into_inner(), 3);
//!
//! let mut stacks = TwoStackQueue::new();
//! stacks.enqueue(1).unwrap();
//! stacks.enqueue(2).unwrap();
//!
//! assert_eq!(drain(&mut ring), drain(&mut stacks));
//! ```

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

mod array;
mod bounded;
mod linked;
pub mod ring;
mod two_stack;

pub use array::ArrayQueue;
pub use bounded::RingQueue;
pub use linked::LinkedQueue;
pub use pallet_collections::Full;
pub use ring::RingBuffer;
pub use two_stack::TwoStackQueue;

/// A first-in, first-out queue.
///
/// Every implementation hands elements back in the order they were
/// accepted. `dequeue` and `peek` return `None` on an empty queue.
pub trait Queue {
    /// Element type.
    type Item;

    /// Adds an element at the tail.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(item))` if the queue is bounded and has no room.
    /// The queue is left unchanged.
    fn enqueue(&mut self, item: Self::Item) -> Result<(), Full<Self::Item>>;

    /// Removes and returns the oldest element.
    fn dequeue(&mut self) -> Option<Self::Item>;

    /// Returns the element the next `dequeue` would return.
    fn peek(&self) -> Option<&Self::Item>;

    /// Number of elements currently queued.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is queued.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
