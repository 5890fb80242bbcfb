//! Array-backed binary heap ordered by a [`Compare`] capability.
//!
//! The heap keeps its elements in a dense `Vec` laid out as an implicit
//! binary tree: the children of position `i` live at `2i + 1` and `2i + 2`,
//! its parent at `(i - 1) / 2`. The element most favoured by the comparator
//! is always at position 0.
//!
//! The comparator is plain data fixed at construction. [`MinFirst`] and
//! [`MaxFirst`] cover the common cases; any `fn(&T, &T) -> bool` works too.
//!
//! ```
//! use pallet_collections::{BinaryHeap, MaxFirst};
//!
//! let mut heap = BinaryHeap::with_comparator(MaxFirst);
//! heap.extend([5, 3, 8, 1]);
//! assert_eq!(heap.pop(), Some(8));
//! assert_eq!(heap.peek(), Some(&5));
//! ```

use core::fmt;

/// Strict weak ordering used to arrange a [`BinaryHeap`].
///
/// `less(a, b)` returns `true` when `a` should come out of the heap before
/// `b`.
pub trait Compare<T: ?Sized> {
    /// Returns `true` if `a` is strictly favoured over `b`.
    fn less(&self, a: &T, b: &T) -> bool;
}

/// Smallest element first (`a < b`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinFirst;

/// Largest element first (`a > b`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaxFirst;

impl<T: PartialOrd + ?Sized> Compare<T> for MinFirst {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: PartialOrd + ?Sized> Compare<T> for MaxFirst {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T> Compare<T> for fn(&T, &T) -> bool {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

#[inline]
const fn parent(child: usize) -> usize {
    (child - 1) / 2
}

#[inline]
const fn left_child(parent: usize) -> usize {
    2 * parent + 1
}

#[inline]
const fn right_child(parent: usize) -> usize {
    2 * parent + 2
}

/// A priority queue implemented as an array-backed binary heap.
///
/// # Example
///
/// ```
/// use pallet_collections::BinaryHeap;
///
/// // Min-heap by default
/// let mut heap: BinaryHeap<u32> = BinaryHeap::new();
/// for x in [5, 3, 8, 1, 9, 2] {
///     heap.push(x);
/// }
/// assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 5, 8, 9]);
///
/// // Any function pointer can order the heap
/// let by_len: fn(&String, &String) -> bool = |a, b| a.len() < b.len();
/// let mut words = BinaryHeap::with_comparator(by_len);
/// words.extend(["ccc", "a", "bb"].map(String::from));
/// assert_eq!(words.pop().as_deref(), Some("a"));
/// ```
#[derive(Clone)]
pub struct BinaryHeap<T, C = MinFirst> {
    data: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T> + Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T> + Default> BinaryHeap<T, C> {
    /// Creates an empty heap using the comparator's default value.
    #[inline]
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }

    /// Creates an empty heap with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, C::default())
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`.
    #[inline]
    pub const fn with_comparator(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty heap ordered by `cmp` with room for `capacity` elements.
    #[inline]
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the capacity of the backing vector.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the comparator.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the most favoured element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Pushes an element onto the heap. O(log n).
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the most favoured element. O(log n).
    ///
    /// Returns `None` if the heap is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let top = self.data.pop();
        self.sift_down(0);
        top
    }

    /// Drops every element.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Elements in heap order (not sorted).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap, returning the backing vector in heap order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in pop order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        while let Some(value) = self.pop() {
            out.push(value);
        }
        out
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = parent(child);
            if !self.cmp.less(&self.data[child], &self.data[parent]) {
                break;
            }
            self.data.swap(child, parent);
            child = parent;
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        let len = self.data.len();
        loop {
            let left = left_child(parent);
            let right = right_child(parent);

            // Each child is tested against the running candidate, so the
            // winner is the extreme of {parent, left, right}.
            let mut candidate = parent;
            if left < len && self.cmp.less(&self.data[left], &self.data[candidate]) {
                candidate = left;
            }
            if right < len && self.cmp.less(&self.data[right], &self.data[candidate]) {
                candidate = right;
            }

            if candidate == parent {
                return;
            }
            self.data.swap(parent, candidate);
            parent = candidate;
        }
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_heap_invariant<T, C: Compare<T>>(heap: &BinaryHeap<T, C>) {
        let data = heap.as_slice();
        for i in 1..data.len() {
            assert!(
                !heap.comparator().less(&data[i], &data[parent(i)]),
                "heap order violated at position {i}"
            );
        }
    }

    #[test]
    fn new_is_empty() {
        let mut heap: BinaryHeap<u32> = BinaryHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), None);
        assert_eq!(heap.pop(), None);
        assert_eq!(heap.len(), 0);
    }

    #[test]
    fn index_math() {
        assert_eq!(left_child(0), 1);
        assert_eq!(right_child(0), 2);
        assert_eq!(left_child(3), 7);
        assert_eq!(right_child(3), 8);
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(7), 3);
        assert_eq!(parent(8), 3);
    }

    #[test]
    fn min_heap_round_trip() {
        let mut heap: BinaryHeap<i32> = BinaryHeap::new();
        for x in [5, 3, 8, 1, 9, 2] {
            heap.push(x);
            assert_heap_invariant(&heap);
        }

        let mut out = Vec::new();
        while let Some(x) = heap.pop() {
            assert_heap_invariant(&heap);
            out.push(x);
        }
        assert_eq!(out, vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn max_heap_order() {
        let heap: BinaryHeap<i32, MaxFirst> = [5, 3, 8, 1, 9, 2].into_iter().collect();
        assert_eq!(heap.peek(), Some(&9));
        assert_eq!(heap.into_sorted_vec(), vec![9, 8, 5, 3, 2, 1]);
    }

    #[test]
    fn function_pointer_comparator() {
        #[derive(Debug, PartialEq)]
        struct Job {
            deadline: u64,
            name: &'static str,
        }

        fn earliest(a: &Job, b: &Job) -> bool {
            a.deadline < b.deadline
        }

        let mut heap = BinaryHeap::with_comparator(earliest as fn(&Job, &Job) -> bool);
        heap.push(Job { deadline: 30, name: "c" });
        heap.push(Job { deadline: 10, name: "a" });
        heap.push(Job { deadline: 20, name: "b" });

        let names: Vec<_> = heap.into_sorted_vec().into_iter().map(|j| j.name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn sift_down_picks_extreme_child() {
        // Root replaced by 9 must swap with the smaller child (2), not the
        // first child that merely beats the parent (4).
        let mut heap: BinaryHeap<i32> = BinaryHeap::new();
        heap.extend([1, 4, 2, 9]);
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.peek(), Some(&2));
        assert_heap_invariant(&heap);
    }

    #[test]
    fn duplicates() {
        let heap: BinaryHeap<u8> = [3, 1, 3, 1, 2, 2].into_iter().collect();
        assert_eq!(heap.into_sorted_vec(), vec![1, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn interleaved_push_pop() {
        let mut heap: BinaryHeap<u32> = BinaryHeap::with_capacity(8);
        heap.push(10);
        heap.push(4);
        assert_eq!(heap.pop(), Some(4));
        heap.push(7);
        heap.push(1);
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(7));
        heap.push(3);
        assert_eq!(heap.pop(), Some(3));
        assert_eq!(heap.pop(), Some(10));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn clear_and_into_vec() {
        let mut heap: BinaryHeap<u32> = [2, 1].into_iter().collect();
        assert_eq!(heap.clone().into_vec(), vec![1, 2]);
        heap.clear();
        assert!(heap.is_empty());
    }

    #[test]
    fn stress_push_pop() {
        let mut heap: BinaryHeap<u32> = BinaryHeap::with_capacity(1024);

        for i in 0..1000u32 {
            heap.push((i * 7 + 13) % 1000); // Deterministic scramble
        }
        assert_heap_invariant(&heap);

        let mut last = 0;
        while let Some(x) = heap.pop() {
            assert!(x >= last, "heap order violated");
            last = x;
        }
    }

    #[test]
    fn debug_shows_heap_order() {
        let heap: BinaryHeap<u32> = [3, 1, 2].into_iter().collect();
        assert_eq!(format!("{heap:?}"), "[1, 3, 2]");
    }

    #[test]
    #[ignore]
    fn bench_heap_push_pop() {
        use hdrhistogram::Histogram;
        use rand::{Rng, SeedableRng, rngs::StdRng};
        use std::time::Instant;

        const HEAP_SIZE: usize = 1024;
        const ITERATIONS: usize = 100_000;

        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut heap: BinaryHeap<u64> = BinaryHeap::with_capacity(HEAP_SIZE + 1);
        for _ in 0..HEAP_SIZE {
            heap.push(rng.random_range(0..1_000_000));
        }

        let mut push_hist = Histogram::<u64>::new(3).unwrap();
        let mut pop_hist = Histogram::<u64>::new(3).unwrap();

        for _ in 0..ITERATIONS {
            let start = Instant::now();
            let top = std::hint::black_box(heap.pop());
            pop_hist.record(start.elapsed().as_nanos() as u64).unwrap();

            let next = top.unwrap_or(0) + rng.random_range(0..1_000);
            let start = Instant::now();
            heap.push(next);
            push_hist.record(start.elapsed().as_nanos() as u64).unwrap();
        }

        for (name, hist) in [("push", &push_hist), ("pop", &pop_hist)] {
            println!(
                "{:6} p50: {:4} ns | p99: {:4} ns | p999: {:5} ns | max: {:6} ns",
                name,
                hist.value_at_quantile(0.50),
                hist.value_at_quantile(0.99),
                hist.value_at_quantile(0.999),
                hist.max(),
            );
        }
    }
}
