//! Indexed heap benchmarks
//!
//! Compares the two reverse index backends on insert-heavy, bump-heavy and
//! drain workloads.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench indexed_heap
//!
//! # Only the dense backend
//! cargo bench --bench indexed_heap -- 'dense'
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use indexed_heap::slots::{DenseSlots, HashSlots, SlotIndex};
use indexed_heap::{Heap, IndexedBinaryHeap};

/// Deterministic pseudo-random values in `0..range`
fn values(count: usize, range: i64, seed: u64) -> Vec<i64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            ((state >> 33) % range as u64) as i64
        })
        .collect()
}

fn insert_all<S: SlotIndex<i64> + Default>(input: &[i64]) -> usize {
    let mut heap: IndexedBinaryHeap<i64, S> = IndexedBinaryHeap::new();
    for &v in input {
        heap.insert(v);
    }
    heap.len()
}

fn insert_and_drain<S: SlotIndex<i64> + Default>(input: &[i64]) -> i64 {
    let mut heap: IndexedBinaryHeap<i64, S> = input.iter().copied().collect();
    let mut checksum = 0i64;
    while let Some(entry) = heap.remove_top() {
        checksum = checksum.wrapping_add(entry.priority);
    }
    checksum
}

/// Mostly distinct values: the heap grows to roughly the input size
fn benchmark_distinct_inserts(c: &mut Criterion) {
    let mut group = c.benchmark_group("distinct_inserts");

    for &size in &[1_000usize, 10_000, 100_000] {
        let input = values(size, (size * 8) as i64, 42);

        group.bench_with_input(BenchmarkId::new("hash", size), &input, |b, input| {
            b.iter(|| black_box(insert_all::<HashSlots<i64>>(input)));
        });
        group.bench_with_input(BenchmarkId::new("dense", size), &input, |b, input| {
            b.iter(|| black_box(insert_all::<DenseSlots<i64>>(input)));
        });
    }

    group.finish();
}

/// A small key range: almost every insert bumps an existing entry
fn benchmark_repeat_inserts(c: &mut Criterion) {
    let mut group = c.benchmark_group("repeat_inserts");

    for &size in &[1_000usize, 10_000, 100_000] {
        let input = values(size, 256, 7);

        group.bench_with_input(BenchmarkId::new("hash", size), &input, |b, input| {
            b.iter(|| black_box(insert_all::<HashSlots<i64>>(input)));
        });
        group.bench_with_input(BenchmarkId::new("dense", size), &input, |b, input| {
            b.iter(|| black_box(insert_all::<DenseSlots<i64>>(input)));
        });
    }

    group.finish();
}

fn benchmark_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_and_drain");
    group.sample_size(20);

    for &size in &[10_000usize, 100_000] {
        let input = values(size, (size * 2) as i64, 99);

        group.bench_with_input(BenchmarkId::new("hash", size), &input, |b, input| {
            b.iter(|| black_box(insert_and_drain::<HashSlots<i64>>(input)));
        });
        group.bench_with_input(BenchmarkId::new("dense", size), &input, |b, input| {
            b.iter(|| black_box(insert_and_drain::<DenseSlots<i64>>(input)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_distinct_inserts,
    benchmark_repeat_inserts,
    benchmark_drain,
);

criterion_main!(benches);
