//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::enumerate::enumerate_from;
use crate::types::{Index, IndexedPair};
use std::cell::Cell;
use std::rc::Rc;

/// Enumerate `values` from `start` and collect as plain tuples.
///
/// This is the canonical implementation used across all tests.
pub fn pairs_from<T: Clone>(values: &[T], start: Index) -> Vec<(Index, T)> {
    enumerate_from(values.iter().cloned(), start)
        .map(IndexedPair::into_tuple)
        .collect()
}

/// The pairs an adapter must produce, computed without the adapter.
pub fn expected_pairs<T: Clone>(values: &[T], start: Index) -> Vec<(Index, T)> {
    let mut out = Vec::with_capacity(values.len());
    let mut index = start;
    for value in values {
        out.push((index, value.clone()));
        index += 1;
    }
    out
}

/// Unbounded counting source: 0, 1, 2, ...
pub fn counting_source() -> impl Iterator<Item = u64> {
    0u64..
}

/// A source that records how many elements have been pulled from it.
///
/// Used to prove the adapter is lazy: building it or taking a prefix must not
/// pull more than the consumer asked for.
pub struct PullCounter<I> {
    inner: I,
    pulls: Rc<Cell<usize>>,
}

impl<I> PullCounter<I> {
    /// Wrap `inner`, returning the source and a handle to its pull count.
    pub fn new(inner: I) -> (Self, Rc<Cell<usize>>) {
        let pulls = Rc::new(Cell::new(0));
        (
            Self {
                inner,
                pulls: Rc::clone(&pulls),
            },
            pulls,
        )
    }
}

impl<I: Iterator> Iterator for PullCounter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.inner.next()?;
        self.pulls.set(self.pulls.get() + 1);
        Some(item)
    }
}
