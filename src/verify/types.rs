// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type wrappers that make an inconsistent pair run unrepresentable.
//!
//! Instead of re-checking indices everywhere a `Vec<IndexedPair<T>>` is passed
//! around, wrap it once. Construction checks every index; afterwards the
//! wrapper guarantees the run is `start, start + 1, ...` with no gaps.
//!
//! | Type              | What's Guaranteed                                 |
//! |-------------------|---------------------------------------------------|
//! | `ValidatedPairs`  | first index is `start`, each next index is +1     |
//!
//! # Example
//!
//! ```
//! use tally::{enumerate_from, ValidatedPairs};
//!
//! let pairs: Vec<_> = enumerate_from(["a", "b"], -1).collect();
//! let run = ValidatedPairs::new(pairs, -1).unwrap();
//! assert_eq!(run.end(), Some(1));
//! ```

use crate::contracts::check_pairs_consecutive;
use crate::types::{Index, IndexedPair};
use serde::Serialize;
use std::fmt;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// The first pair does not carry the configured start.
    WrongFirstIndex { expected: Index, actual: Index },
    /// A pair does not follow its predecessor by exactly one.
    NonConsecutiveIndex {
        position: usize,
        previous: Index,
        actual: Index,
    },
    /// More pairs than the index domain can number from `start`.
    IndexOverflow { start: Index, len: usize },
    /// The run and its source have different lengths.
    LengthMismatch { pairs_len: usize, source_len: usize },
    /// A pair's value differs from the source element at the same position.
    ValueMismatch { position: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::WrongFirstIndex { expected, actual } => {
                write!(f, "first index {} != start {}", actual, expected)
            }
            InvariantError::NonConsecutiveIndex {
                position,
                previous,
                actual,
            } => {
                write!(
                    f,
                    "pairs[{}].index {} does not follow {}",
                    position, actual, previous
                )
            }
            InvariantError::IndexOverflow { start, len } => {
                write!(f, "{} pairs from start {} overflow i64", len, start)
            }
            InvariantError::LengthMismatch {
                pairs_len,
                source_len,
            } => {
                write!(f, "pairs.len() {} != source.len() {}", pairs_len, source_len)
            }
            InvariantError::ValueMismatch { position } => {
                write!(f, "pairs[{}].value differs from source[{}]", position, position)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// A run of pairs whose indices are `start, start + 1, ...` without gaps.
///
/// # Invariants (enforced at construction)
/// - `pairs[0].index == start` (when non-empty)
/// - `pairs[i].index == pairs[i - 1].index + 1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPairs<T> {
    start: Index,
    pairs: Vec<IndexedPair<T>>,
}

impl<T> ValidatedPairs<T> {
    /// Validate `pairs` as a run starting at `start`.
    pub fn new(pairs: Vec<IndexedPair<T>>, start: Index) -> Result<Self, InvariantError> {
        check_indices(start, &pairs)?;
        check_pairs_consecutive(start, &pairs);
        Ok(Self { start, pairs })
    }

    /// The configured start, also valid for an empty run.
    pub fn start(&self) -> Index {
        self.start
    }

    /// Index of the last pair, or `None` for an empty run.
    pub fn end(&self) -> Option<Index> {
        self.pairs.last().map(|p| p.index)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Look up a pair by its index (not its position).
    pub fn get(&self, index: Index) -> Option<&IndexedPair<T>> {
        let position = index.checked_sub(self.start)?;
        usize::try_from(position)
            .ok()
            .and_then(|p| self.pairs.get(p))
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexedPair<T>> {
        self.pairs.iter()
    }

    pub fn as_slice(&self) -> &[IndexedPair<T>] {
        &self.pairs
    }

    /// Drop the guarantee and take the pairs back.
    pub fn into_inner(self) -> Vec<IndexedPair<T>> {
        self.pairs
    }
}

/// Walk the indices of `pairs`, expecting `start, start + 1, ...`.
fn check_indices<T>(start: Index, pairs: &[IndexedPair<T>]) -> Result<(), InvariantError> {
    let mut expected = start;
    for (position, pair) in pairs.iter().enumerate() {
        if pair.index != expected {
            return Err(if position == 0 {
                InvariantError::WrongFirstIndex {
                    expected: start,
                    actual: pair.index,
                }
            } else {
                InvariantError::NonConsecutiveIndex {
                    position,
                    previous: expected - 1,
                    actual: pair.index,
                }
            });
        }
        // INVARIANT: the last pair may sit at i64::MAX; only a pair after it overflows.
        if position + 1 < pairs.len() {
            expected = expected
                .checked_add(1)
                .ok_or(InvariantError::IndexOverflow {
                    start,
                    len: pairs.len(),
                })?;
        }
    }
    Ok(())
}

/// Outcome of checking a run against its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub start: Index,
    pub pairs_checked: usize,
    pub first_index: Option<Index>,
    pub last_index: Option<Index>,
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.first_index, self.last_index) {
            (Some(first), Some(last)) => write!(
                f,
                "{} pairs verified, indices {}..={}",
                self.pairs_checked, first, last
            ),
            _ => write!(f, "0 pairs verified (empty run from start {})", self.start),
        }
    }
}

/// Check that `pairs` is exactly what enumerating `source` from `start` yields:
/// same length, consecutive indices, and matching values at every position.
pub fn verify_against_source<T: PartialEq>(
    source: &[T],
    start: Index,
    pairs: &[IndexedPair<T>],
) -> Result<VerificationReport, InvariantError> {
    if pairs.len() != source.len() {
        return Err(InvariantError::LengthMismatch {
            pairs_len: pairs.len(),
            source_len: source.len(),
        });
    }

    check_indices(start, pairs)?;
    if let Some(position) = pairs
        .iter()
        .zip(source)
        .position(|(pair, value)| pair.value != *value)
    {
        return Err(InvariantError::ValueMismatch { position });
    }

    Ok(VerificationReport {
        start,
        pairs_checked: pairs.len(),
        first_index: pairs.first().map(|p| p.index),
        last_index: pairs.last().map(|p| p.index),
    })
}
