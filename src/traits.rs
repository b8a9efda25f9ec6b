//! Common traits and types for the heap
//!
//! - [`Entry`]: a (value, priority) pair stored in one heap slot
//! - [`HeapError`]: why a validating insert was refused
//! - [`Heap`]: the interface shared by every queue shape in this crate
//!
//! Unlike a textbook heap, the caller never supplies a priority. A value's
//! priority starts out equal to the value itself and drops by one each time
//! the same value is inserted again, so frequently inserted values move
//! toward the front of the queue.

use std::fmt;

use crate::key::Key;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The value is not a usable key (a non-finite float, or a value the
    /// slot index cannot represent)
    InvalidArgument,
    /// The value's priority is already the smallest its type can hold
    PriorityUnderflow,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidArgument => {
                write!(f, "value cannot be used as a heap key")
            }
            HeapError::PriorityUnderflow => {
                write!(f, "priority cannot be decreased any further")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A value together with its current priority
///
/// `value` identifies the entry and never changes. `priority` starts equal to
/// `value` and is decremented on every repeated insert of that value. Lower
/// priorities are removed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry<V> {
    pub value: V,
    pub priority: V,
}

impl<V: Key> Entry<V> {
    /// Creates the entry for a value seen for the first time
    pub fn new(value: V) -> Self {
        Self {
            value,
            priority: value,
        }
    }
}

/// Base trait for the priority queue
///
/// # Example
///
/// ```rust
/// use indexed_heap::{Entry, Heap, IndexedBinaryHeap};
///
/// let mut heap: IndexedBinaryHeap<i64> = IndexedBinaryHeap::new();
/// heap.insert(3);
/// for _ in 0..4 {
///     heap.insert(5);
/// }
///
/// assert_eq!(heap.len(), 2);
/// assert_eq!(heap.remove_top(), Some(Entry { value: 5, priority: 2 }));
/// assert_eq!(heap.remove_top(), Some(Entry { value: 3, priority: 3 }));
/// assert_eq!(heap.remove_top(), None);
/// ```
pub trait Heap<V: Key> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns the number of distinct values in the heap
    fn len(&self) -> usize;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts a value, or raises its priority by one if already present
    ///
    /// Values outside the key type's contract are ignored.
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, value: V);

    /// Returns the entry with the minimum priority without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&Entry<V>>;

    /// Removes and returns the entry with the minimum priority
    ///
    /// An empty heap yields `None`; this is an ordinary outcome, not an error.
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove_top(&mut self) -> Option<Entry<V>>;
}
