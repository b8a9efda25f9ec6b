//! Indexed binary heap priority queue
//!
//! A min-heap keyed by numeric value in which inserting a value that is
//! already queued raises its priority instead of storing a duplicate.
//!
//! Each value starts with a priority equal to itself. Every repeated insert
//! lowers that priority by one, and lower priorities are removed first. A
//! reverse index from value to heap slot keeps both insert and removal at
//! O(log n).
//!
//! # Modules
//!
//! - [`indexed`]: [`IndexedBinaryHeap`], the core structure
//! - [`slots`]: reverse index backends (hash map or dense array)
//! - [`key`]: which numeric types can be used as values
//! - [`queue`]: [`PriorityQueue`](queue::PriorityQueue), a facade dealing in
//!   bare values
//!
//! # Features
//!
//! - `float-keys`: accept finite `OrderedFloat<f32>` / `OrderedFloat<f64>`
//!   values
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::{Entry, Heap, IndexedBinaryHeap};
//!
//! let mut heap: IndexedBinaryHeap<i64> = IndexedBinaryHeap::new();
//! heap.insert(0);
//! heap.insert(0);
//!
//! assert_eq!(heap.len(), 1);
//! assert_eq!(heap.remove_top(), Some(Entry { value: 0, priority: -1 }));
//! assert_eq!(heap.remove_top(), None);
//! ```

pub mod indexed;
pub mod key;
pub mod queue;
pub mod slots;
pub mod traits;

pub use indexed::IndexedBinaryHeap;
pub use key::{DenseKey, Key};
pub use traits::{Entry, Heap, HeapError};
