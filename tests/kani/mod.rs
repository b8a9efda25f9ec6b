//! Kani proof harnesses
//!
//! This module contains the Kani verification proofs for the heap.
//!
//! - `heap_proofs.rs`: bounded proofs of heap order and index consistency

#[cfg(kani)]
#[path = "heap_proofs.rs"]
mod heap_proofs;
