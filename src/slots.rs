//! Pluggable reverse indexes mapping a value to its heap slot
//!
//! The heap never scans its storage to find a value: every lookup goes through
//! a [`SlotIndex`]. Two backends are provided:
//!
//! - [`HashSlots`]: default, accepts any key, backed by `FxHashMap`
//! - [`DenseSlots`]: a flat array indexed by the value itself, for keys that
//!   are small non-negative integers
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::{Heap, IndexedBinaryHeap};
//! use indexed_heap::slots::DenseSlots;
//!
//! let mut heap: IndexedBinaryHeap<i32, DenseSlots<i32>> =
//!     IndexedBinaryHeap::with_slots(DenseSlots::with_universe(1024));
//! heap.insert(7);
//! heap.insert(7);
//! assert_eq!(heap.priority_of(&7), Some(6));
//!
//! // Outside the universe: refused
//! assert!(heap.try_insert(4096).is_err());
//! ```

use std::marker::PhantomData;

use rustc_hash::FxHashMap;

use crate::key::{DenseKey, Key};

/// Trait for reverse-index backends
///
/// Implementations must keep exactly one slot per stored value; the heap
/// calls [`set`](SlotIndex::set) on every move and
/// [`remove`](SlotIndex::remove) when a value leaves.
pub trait SlotIndex<V> {
    /// Current slot of `value`, if stored
    fn get(&self, value: &V) -> Option<usize>;

    /// Records that `value` now lives at `slot`
    fn set(&mut self, value: V, slot: usize);

    /// Forgets `value`, returning its last slot
    fn remove(&mut self, value: &V) -> Option<usize>;

    /// Whether this index is able to hold `value` at all
    fn accepts(&self, _value: &V) -> bool {
        true
    }

    /// Number of values tracked
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    /// Hint that `additional` more values are about to arrive
    fn reserve(&mut self, _additional: usize) {}
}

// ============================================================================
// HashSlots - default
// ============================================================================

/// Hash map backed index
#[derive(Debug, Clone)]
pub struct HashSlots<V> {
    map: FxHashMap<V, usize>,
}

impl<V> HashSlots<V> {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }
}

impl<V> Default for HashSlots<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Key> SlotIndex<V> for HashSlots<V> {
    #[inline]
    fn get(&self, value: &V) -> Option<usize> {
        self.map.get(value).copied()
    }

    #[inline]
    fn set(&mut self, value: V, slot: usize) {
        self.map.insert(value, slot);
    }

    #[inline]
    fn remove(&mut self, value: &V) -> Option<usize> {
        self.map.remove(value)
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn clear(&mut self) {
        self.map.clear();
    }

    fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional);
    }
}

// ============================================================================
// DenseSlots - array indexed by value
// ============================================================================

/// Array backed index for non-negative integer keys
///
/// Position `v` of the array holds the slot of value `v`. The array grows to
/// the largest value seen and never shrinks, not even on `remove` or `clear`,
/// so memory follows the largest value ever stored rather than the number of
/// live entries. Use [`with_universe`](DenseSlots::with_universe) to put a
/// hard bound on that range; without one, values from
/// [`DEFAULT_UNIVERSE`](DenseSlots::DEFAULT_UNIVERSE) upward are refused.
#[derive(Debug, Clone)]
pub struct DenseSlots<V> {
    slots: Vec<Option<usize>>,
    count: usize,
    universe: Option<usize>,
    _phantom: PhantomData<V>,
}

impl<V> DenseSlots<V> {
    /// Exclusive bound on values accepted by an index built with
    /// [`new`](DenseSlots::new)
    pub const DEFAULT_UNIVERSE: usize = 1 << 20;

    /// Creates an index that grows on demand up to
    /// [`DEFAULT_UNIVERSE`](DenseSlots::DEFAULT_UNIVERSE)
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            count: 0,
            universe: None,
            _phantom: PhantomData,
        }
    }

    /// Creates an index that only accepts values in `0..universe`
    ///
    /// The backing array is allocated up front.
    pub fn with_universe(universe: usize) -> Self {
        Self {
            slots: vec![None; universe],
            count: 0,
            universe: Some(universe),
            _phantom: PhantomData,
        }
    }

    /// The exclusive upper bound on accepted values
    pub fn universe(&self) -> usize {
        self.universe.unwrap_or(Self::DEFAULT_UNIVERSE)
    }
}

impl<V> Default for DenseSlots<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: DenseKey> SlotIndex<V> for DenseSlots<V> {
    #[inline]
    fn get(&self, value: &V) -> Option<usize> {
        value
            .to_index()
            .and_then(|i| self.slots.get(i).copied().flatten())
    }

    fn set(&mut self, value: V, slot: usize) {
        // Unrepresentable values were refused by `accepts`
        let Some(i) = value.to_index() else {
            return;
        };
        if i >= self.slots.len() {
            self.slots.resize(i + 1, None);
        }
        if self.slots[i].replace(slot).is_none() {
            self.count += 1;
        }
    }

    fn remove(&mut self, value: &V) -> Option<usize> {
        let old = value
            .to_index()
            .and_then(|i| self.slots.get_mut(i))
            .and_then(Option::take);
        if old.is_some() {
            self.count -= 1;
        }
        old
    }

    fn accepts(&self, value: &V) -> bool {
        value.to_index().is_some_and(|i| i < self.universe())
    }

    fn len(&self) -> usize {
        self.count
    }

    fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
        self.count = 0;
    }
}
