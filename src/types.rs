// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The value the pairing producer hands out.
//!
//! An `IndexedPair` is nothing more than a position and the element found at
//! that position. It exists as a named type (rather than a bare tuple) so the
//! invariant has somewhere to live and so rendering and serialization have a
//! single point of truth.
//!
//! # Invariants
//!
//! - **pair-index**: the n-th pair produced by an adapter configured with
//!   `start` carries `index == start + n`. Nothing in this type enforces that on
//!   its own; `ValidatedPairs` in `verify` does, and `contracts` checks it in
//!   debug builds.
//!
//! Pairs are immutable once produced. The producer keeps no reference to a pair
//! after handing it out.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Signed position carried by every pair.
///
/// Signed because a negative start offset is valid and indices walk through
/// zero without special-casing.
pub type Index = i64;

/// Offset used when the caller does not supply one.
pub const DEFAULT_START: Index = 0;

/// An `(index, value)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexedPair<T> {
    pub index: Index,
    pub value: T,
}

impl<T> IndexedPair<T> {
    #[inline]
    pub const fn new(index: Index, value: T) -> Self {
        Self { index, value }
    }

    /// Borrow the value, keeping the index.
    #[inline]
    pub fn borrowed(&self) -> IndexedPair<&T> {
        IndexedPair {
            index: self.index,
            value: &self.value,
        }
    }

    /// Transform the value, keeping the index.
    #[inline]
    pub fn map<U, F>(self, f: F) -> IndexedPair<U>
    where
        F: FnOnce(T) -> U,
    {
        IndexedPair {
            index: self.index,
            value: f(self.value),
        }
    }

    #[inline]
    pub fn into_tuple(self) -> (Index, T) {
        (self.index, self.value)
    }
}

impl<T> From<(Index, T)> for IndexedPair<T> {
    #[inline]
    fn from((index, value): (Index, T)) -> Self {
        Self { index, value }
    }
}

impl<T> From<IndexedPair<T>> for (Index, T) {
    #[inline]
    fn from(pair: IndexedPair<T>) -> Self {
        pair.into_tuple()
    }
}

impl<T: PartialEq> PartialEq<(Index, T)> for IndexedPair<T> {
    fn eq(&self, other: &(Index, T)) -> bool {
        self.index == other.0 && self.value == other.1
    }
}

impl<T: fmt::Display> fmt::Display for IndexedPair<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.index, self.value)
    }
}

// Serialized as a two-element array, `[index, value]`, to match the tuple shape.
impl<T: Serialize> Serialize for IndexedPair<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.index, &self.value).serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for IndexedPair<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <(Index, T)>::deserialize(deserializer).map(IndexedPair::from)
    }
}
