//! Value-only priority queue
//!
//! [`PriorityQueue`] hides entries and priorities: `add` a number, `remove`
//! the number that currently has the highest precedence. Adding a number
//! that is already queued moves it forward by one step instead of queuing it
//! twice.
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::queue::PriorityQueue;
//!
//! let mut queue: PriorityQueue<i64> = PriorityQueue::new();
//! queue.add(0);
//! queue.add(1);
//! queue.add(1);
//! queue.add(1);
//!
//! // 1 was added three times, so its priority (-1) beats 0's
//! assert_eq!(queue.remove(), Some(1));
//! assert_eq!(queue.remove(), Some(0));
//! assert_eq!(queue.remove(), None);
//! ```

use std::marker::PhantomData;

use crate::indexed::IndexedBinaryHeap;
use crate::key::Key;
use crate::traits::Heap;

/// A priority queue of bare numeric values
///
/// # Type Parameters
/// - `V`: The value type
/// - `H`: The underlying heap (defaults to [`IndexedBinaryHeap`])
#[derive(Debug, Clone)]
pub struct PriorityQueue<V, H = IndexedBinaryHeap<V>> {
    heap: H,
    _phantom: PhantomData<V>,
}

impl<V: Key, H: Heap<V>> PriorityQueue<V, H> {
    /// Creates a new empty queue
    pub fn new() -> Self {
        Self::from_heap(H::new())
    }

    /// Wraps an existing heap
    pub fn from_heap(heap: H) -> Self {
        Self {
            heap,
            _phantom: PhantomData,
        }
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of distinct values queued
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Adds `value`, or raises its priority if it is already queued
    pub fn add(&mut self, value: V) {
        self.heap.insert(value)
    }

    /// Returns the value that would be removed next
    pub fn peek(&self) -> Option<&V> {
        self.heap.peek().map(|entry| &entry.value)
    }

    /// Removes and returns the value with the highest precedence
    pub fn remove(&mut self) -> Option<V> {
        self.heap.remove_top().map(|entry| entry.value)
    }

    /// Unwraps the underlying heap
    pub fn into_inner(self) -> H {
        self.heap
    }
}

impl<V: Key, H: Heap<V>> Default for PriorityQueue<V, H> {
    fn default() -> Self {
        Self::new()
    }
}
