// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The pairing producer: an iterator adapter that walks a source and tags
//! every element with a signed position.
//!
//! `std::iter::Enumerate` always starts at zero and counts in `usize`. This
//! adapter starts wherever the caller asks, including below zero, and counts in
//! `i64` so indices walk through zero without special cases.
//!
//! # How it stays correct
//!
//! The only state beyond the source is `next`, the index the next front pull
//! will carry. Every path that hands out a pair (`next`, `nth`, `fold`,
//! `next_back`) derives its index from `next` with checked arithmetic, so
//! **pair-index** (`index == start + n`) holds no matter how pulls are mixed.
//!
//! `next` becomes `None` after a pair with index `i64::MAX` is produced. If the
//! source yields anything after that, there is no index to give it and the
//! adapter panics rather than wrap. The standard library's `Enumerate` makes
//! the same call for `usize` in debug builds; here it holds in release too.
//!
//! # Calling conventions
//!
//! ```
//! use tally::{enumerate, enumerate_from, EnumerateArgs, IndexedIteratorExt};
//!
//! // Positional
//! let a: Vec<(i64, i32)> = enumerate_from([1, 2, 3], 5).map(Into::into).collect();
//! // Named
//! let b: Vec<(i64, i32)> = EnumerateArgs { iterable: [1, 2, 3], start: 5 }
//!     .into_iter()
//!     .map(Into::into)
//!     .collect();
//! // Method
//! let c: Vec<(i64, i32)> = [1, 2, 3].into_iter().indexed_from(5).map(Into::into).collect();
//!
//! assert_eq!(a, vec![(5, 1), (6, 2), (7, 3)]);
//! assert_eq!(a, b);
//! assert_eq!(b, c);
//! assert_eq!(enumerate(Vec::<u8>::new()).count(), 0);
//! ```

use crate::contracts::check_counter_advanced;
use crate::types::{Index, IndexedPair, DEFAULT_START};
use crate::verify::InvariantError;
use std::iter::FusedIterator;

/// Lazy `(index, value)` producer over any iterator.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Enumerate<I> {
    iter: I,
    start: Index,
    next: Option<Index>,
}

impl<I> Enumerate<I> {
    /// Wrap `iter`, numbering its first element `start`.
    #[inline]
    pub fn new(iter: I, start: Index) -> Self {
        Self {
            iter,
            start,
            next: Some(start),
        }
    }

    /// The offset this adapter was created with.
    #[inline]
    pub fn start(&self) -> Index {
        self.start
    }

    /// Index the next front pull will carry, or `None` once `i64::MAX` has
    /// been handed out.
    #[inline]
    pub fn next_index(&self) -> Option<Index> {
        self.next
    }

    /// How many more pairs can be produced before the index would overflow.
    ///
    /// Saturates at `u64::MAX` (only reachable from `start == i64::MIN`).
    pub fn remaining_capacity(&self) -> u64 {
        match self.next {
            Some(n) => Index::MAX.abs_diff(n).saturating_add(1),
            None => 0,
        }
    }

    /// Fail up front if `len` more pairs would run past `i64::MAX`.
    ///
    /// Callers that know their source length use this to turn the overflow
    /// panic into an `InvariantError` before pulling anything.
    pub fn check_room(&self, len: usize) -> Result<(), InvariantError> {
        let fits = u64::try_from(len).is_ok_and(|len| len <= self.remaining_capacity());
        if fits {
            Ok(())
        } else {
            Err(InvariantError::IndexOverflow {
                start: self.start,
                len,
            })
        }
    }

    /// Give back the source, dropping the counter.
    #[inline]
    pub fn into_inner(self) -> I {
        self.iter
    }

    /// Claim the index for an element `skipped` positions past the front and
    /// move the counter past it.
    #[inline]
    fn claim(&mut self, skipped: usize) -> Index {
        let before = self.next;
        let index = offset(before, skipped);
        self.next = index.checked_add(1);
        check_counter_advanced(before, self.next, skipped);
        index
    }
}

/// `base + ahead`, panicking when the result is not an `Index`.
#[inline]
fn offset(base: Option<Index>, ahead: usize) -> Index {
    // INVARIANT: no wrap. The sum is taken in i128, where it cannot overflow.
    base.and_then(|n| Index::try_from(i128::from(n) + ahead as i128).ok())
        .unwrap_or_else(|| index_overflow(base, ahead))
}

#[cold]
#[inline(never)]
fn index_overflow(base: Option<Index>, ahead: usize) -> ! {
    match base {
        Some(n) => panic!(
            "Contract violation: pair index overflow - {} + {} exceeds i64::MAX",
            n, ahead
        ),
        None => panic!(
            "Contract violation: pair index overflow - source yielded an element after index i64::MAX"
        ),
    }
}

impl<I: Iterator> Iterator for Enumerate<I> {
    type Item = IndexedPair<I::Item>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.iter.next()?;
        let index = self.claim(0);
        Some(IndexedPair::new(index, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let value = self.iter.nth(n)?;
        let index = self.claim(n);
        Some(IndexedPair::new(index, value))
    }

    #[inline]
    fn count(self) -> usize {
        self.iter.count()
    }

    #[inline]
    fn fold<Acc, F>(self, init: Acc, mut f: F) -> Acc
    where
        F: FnMut(Acc, Self::Item) -> Acc,
    {
        let mut next = self.next;
        self.iter.fold(init, move |acc, value| {
            let index = offset(next, 0);
            next = index.checked_add(1);
            f(acc, IndexedPair::new(index, value))
        })
    }
}

impl<I> DoubleEndedIterator for Enumerate<I>
where
    I: ExactSizeIterator + DoubleEndedIterator,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let value = self.iter.next_back()?;
        // INVARIANT: whatever is still in front of this element keeps its own index.
        let index = offset(self.next, self.iter.len());
        Some(IndexedPair::new(index, value))
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        let value = self.iter.nth_back(n)?;
        let index = offset(self.next, self.iter.len());
        Some(IndexedPair::new(index, value))
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Enumerate<I> {
    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<I: FusedIterator> FusedIterator for Enumerate<I> {}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Pair every element of `iterable` with its position, starting at 0.
#[inline]
pub fn enumerate<I: IntoIterator>(iterable: I) -> Enumerate<I::IntoIter> {
    Enumerate::new(iterable.into_iter(), DEFAULT_START)
}

/// Pair every element of `iterable` with its position, starting at `start`.
#[inline]
pub fn enumerate_from<I: IntoIterator>(iterable: I, start: Index) -> Enumerate<I::IntoIter> {
    Enumerate::new(iterable.into_iter(), start)
}

/// Named-argument form of [`enumerate_from`].
///
/// Build it as a struct literal or through [`EnumerateArgs::new`] and
/// [`EnumerateArgs::start`]; either way it iterates exactly like the positional
/// call with the same values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerateArgs<I> {
    pub iterable: I,
    pub start: Index,
}

impl<I> EnumerateArgs<I> {
    /// Arguments with the default start of 0.
    pub fn new(iterable: I) -> Self {
        Self {
            iterable,
            start: DEFAULT_START,
        }
    }

    pub fn start(mut self, start: Index) -> Self {
        self.start = start;
        self
    }
}

impl<I: IntoIterator> IntoIterator for EnumerateArgs<I> {
    type Item = IndexedPair<I::Item>;
    type IntoIter = Enumerate<I::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        enumerate_from(self.iterable, self.start)
    }
}

impl<I: IntoIterator> From<EnumerateArgs<I>> for Enumerate<I::IntoIter> {
    fn from(args: EnumerateArgs<I>) -> Self {
        args.into_iter()
    }
}

/// Method-call form for anything that is already an iterator.
pub trait IndexedIteratorExt: Iterator + Sized {
    /// Pair elements with positions starting at 0.
    fn indexed(self) -> Enumerate<Self> {
        Enumerate::new(self, DEFAULT_START)
    }

    /// Pair elements with positions starting at `start`.
    fn indexed_from(self, start: Index) -> Enumerate<Self> {
        Enumerate::new(self, start)
    }
}

impl<I: Iterator> IndexedIteratorExt for I {}
