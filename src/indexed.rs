//! Indexed Binary Heap implementation
//!
//! A binary min-heap over (value, priority) [`Entry`] pairs, augmented with a
//! reverse index from value to heap slot. The index makes "is this value
//! already queued, and where" an O(1) question, which is what lets a repeated
//! insert bump the existing entry's priority in O(log n) instead of adding a
//! duplicate.
//!
//! The storage vector and the reverse index change together: every push, pop
//! and swap updates both before the operation returns.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `insert`     | O(log n)   |
//! | `remove_top` | O(log n)   |
//! | `peek`       | O(1)       |
//! | `contains`   | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::{Entry, Heap, IndexedBinaryHeap};
//!
//! let mut heap: IndexedBinaryHeap<i64> = IndexedBinaryHeap::new();
//! heap.insert(3);
//! heap.insert(2);
//! heap.insert(1);
//! heap.insert(3); // priority 2
//! heap.insert(3); // priority 1
//! heap.insert(3); // priority 0
//!
//! assert_eq!(heap.remove_top(), Some(Entry { value: 3, priority: 0 }));
//! assert_eq!(heap.remove_top(), Some(Entry { value: 1, priority: 1 }));
//! assert_eq!(heap.remove_top(), Some(Entry { value: 2, priority: 2 }));
//! assert_eq!(heap.remove_top(), None);
//! ```

use crate::key::Key;
use crate::slots::{HashSlots, SlotIndex};
use crate::traits::{Entry, Heap, HeapError};

/// A binary min-heap with a value-to-slot index
///
/// `S` selects the reverse index; see [`crate::slots`].
#[derive(Debug, Clone)]
pub struct IndexedBinaryHeap<V, S = HashSlots<V>> {
    /// Entries in heap order, root at index 0
    entries: Vec<Entry<V>>,
    slots: S,
}

#[inline]
fn parent(index: usize) -> usize {
    (index + 1) / 2 - 1
}

#[inline]
fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right_child(index: usize) -> usize {
    2 * index + 2
}

impl<V: Key> IndexedBinaryHeap<V> {
    /// Creates an empty heap with room for `capacity` distinct values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            slots: HashSlots::with_capacity(capacity),
        }
    }
}

impl<V: Key, S: SlotIndex<V>> IndexedBinaryHeap<V, S> {
    /// Creates an empty heap using the given reverse index
    ///
    /// Any values already tracked by `slots` are discarded.
    pub fn with_slots(mut slots: S) -> Self {
        slots.clear();
        Self {
            entries: Vec::new(),
            slots,
        }
    }

    /// Inserts `value`, or decrements its priority if already present
    ///
    /// This is the validating form of [`Heap::insert`].
    ///
    /// # Errors
    /// - [`HeapError::InvalidArgument`] if the value is not a valid key or the
    ///   reverse index cannot hold it
    /// - [`HeapError::PriorityUnderflow`] if the value is present and its
    ///   priority is already the minimum of its type
    ///
    /// The heap is unchanged when an error is returned.
    pub fn try_insert(&mut self, value: V) -> Result<(), HeapError> {
        if !value.is_valid() || !self.slots.accepts(&value) {
            return Err(HeapError::InvalidArgument);
        }

        match self.slots.get(&value) {
            Some(slot) => {
                let entry = &mut self.entries[slot];
                entry.priority = entry
                    .priority
                    .checked_decrement()
                    .ok_or(HeapError::PriorityUnderflow)?;
                log::trace!("bumped {:?} to priority {:?}", value, entry.priority);
                // A smaller priority can only move the entry toward the root
                self.sift_up(slot);
            }
            None => {
                // Index first: if it cannot grow, storage is still untouched
                let slot = self.entries.len();
                self.slots.set(value, slot);
                self.entries.push(Entry::new(value));
                log::trace!("queued {:?}", value);
                self.sift_up(slot);
            }
        }

        Ok(())
    }

    /// Returns true if `value` is queued
    pub fn contains(&self, value: &V) -> bool {
        self.slots.get(value).is_some()
    }

    /// Current priority of `value`, if queued
    pub fn priority_of(&self, value: &V) -> Option<V> {
        self.slots.get(value).map(|slot| self.entries[slot].priority)
    }

    /// Current heap slot of `value`, if queued
    pub fn slot_of(&self, value: &V) -> Option<usize> {
        self.slots.get(value)
    }

    /// The reverse index backing this heap
    pub fn slot_index(&self) -> &S {
        &self.slots
    }

    /// The entries in heap order
    ///
    /// Slot 0 is the minimum; beyond that only the heap property holds.
    pub fn as_slice(&self) -> &[Entry<V>] {
        &self.entries
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.slots.clear();
    }

    /// Swaps two slots and records both new positions
    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.slots.set(self.entries[a].value, a);
        self.slots.set(self.entries[b].value, b);
    }

    /// Move entry at index up to maintain heap property
    ///
    /// Out-of-range indices are ignored.
    fn sift_up(&mut self, mut index: usize) {
        if index >= self.entries.len() {
            return;
        }

        // Every step goes through `swap`, which keeps the index in sync
        while index > 0 {
            let parent = parent(index);
            if self.entries[index].priority < self.entries[parent].priority {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move entry at index down to maintain heap property
    ///
    /// On a tie between the children the left one wins: the right child must
    /// be strictly smaller than the best candidate so far to be chosen.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        // As in `sift_up`, moves only happen through `swap`
        loop {
            let left = left_child(index);
            let right = right_child(index);
            let mut smallest = index;

            if left < len && self.entries[left].priority < self.entries[smallest].priority {
                smallest = left;
            }
            if right < len && self.entries[right].priority < self.entries[smallest].priority {
                smallest = right;
            }

            if smallest != index {
                self.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<V: Key, S: SlotIndex<V> + Default> Heap<V> for IndexedBinaryHeap<V, S> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            slots: S::default(),
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, value: V) {
        if let Err(err) = self.try_insert(value) {
            log::warn!("ignoring insert of {:?}: {}", value, err);
        }
    }

    fn peek(&self) -> Option<&Entry<V>> {
        self.entries.first()
    }

    fn remove_top(&mut self) -> Option<Entry<V>> {
        let last = self.entries.pop()?;

        if self.entries.is_empty() {
            // `last` was the root
            self.slots.remove(&last.value);
            log::trace!("removed {:?}, heap now empty", last.value);
            return Some(last);
        }

        let top = std::mem::replace(&mut self.entries[0], last);
        self.slots.remove(&top.value);
        self.slots.set(last.value, 0);
        self.sift_down(0);

        log::trace!("removed {:?} at priority {:?}", top.value, top.priority);
        Some(top)
    }
}

impl<V: Key, S: SlotIndex<V> + Default> Default for IndexedBinaryHeap<V, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Key, S: SlotIndex<V> + Default> Extend<V> for IndexedBinaryHeap<V, S> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.entries.reserve(lower);
        self.slots.reserve(lower);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<V: Key, S: SlotIndex<V> + Default> FromIterator<V> for IndexedBinaryHeap<V, S> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
