//! Bounded proofs for the indexed heap
//!
//! Values are drawn from a small range and stored through `DenseSlots`, which
//! keeps the state space small enough for Kani while still covering repeated
//! inserts of the same value.

#[cfg(kani)]
use indexed_heap::slots::DenseSlots;
#[cfg(kani)]
use indexed_heap::{Entry, Heap, IndexedBinaryHeap};

#[cfg(kani)]
type SmallHeap = IndexedBinaryHeap<i8, DenseSlots<i8>>;

#[cfg(kani)]
fn any_small_value() -> i8 {
    let value: i8 = kani::any();
    kani::assume(value >= 0 && value < 4);
    value
}

#[cfg(kani)]
fn assert_structure(heap: &SmallHeap) {
    let entries = heap.as_slice();
    for i in 0..entries.len() {
        if i > 0 {
            assert!(entries[i].priority >= entries[(i + 1) / 2 - 1].priority);
        }
        assert!(heap.slot_of(&entries[i].value) == Some(i));
    }
}

/// Proof: Empty heap reports empty and removes nothing
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(5)]
fn verify_empty_heap() {
    let mut heap: SmallHeap = IndexedBinaryHeap::new();

    assert!(heap.is_empty());
    assert!(heap.len() == 0);
    assert!(heap.peek().is_none());
    assert!(heap.remove_top().is_none());
}

/// Proof: A repeated insert lowers priority by one without growing the heap
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(5)]
fn verify_repeat_insert_decrements() {
    let mut heap: SmallHeap = IndexedBinaryHeap::new();
    let value = any_small_value();

    heap.insert(value);
    heap.insert(value);

    assert!(heap.len() == 1);
    assert!(heap.remove_top() == Some(Entry { value, priority: value - 1 }));
}

/// Proof: Any three inserts leave a consistent heap whose root is the minimum
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_three_inserts_consistent() {
    let mut heap: SmallHeap = IndexedBinaryHeap::new();
    let a = any_small_value();
    let b = any_small_value();
    let c = any_small_value();

    heap.insert(a);
    heap.insert(b);
    heap.insert(c);
    assert_structure(&heap);

    let top = heap.peek().map(|e| e.priority);
    for entry in heap.as_slice() {
        assert!(Some(entry.priority) >= top);
    }
}

/// Proof: Removing the top keeps the remaining entries consistent
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_remove_top_consistent() {
    let mut heap: SmallHeap = IndexedBinaryHeap::new();
    heap.insert(any_small_value());
    heap.insert(any_small_value());
    heap.insert(any_small_value());
    heap.insert(any_small_value());

    let before = heap.len();
    let top = heap.remove_top();
    assert!(top.is_some());
    assert!(heap.len() == before - 1);
    if let Some(entry) = top {
        assert!(!heap.contains(&entry.value));
    }
    assert_structure(&heap);
}
