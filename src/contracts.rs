// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the pairing producer.
//!
//! Debug-mode assertions that state the invariants the adapter relies on.
//! They are:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **Early failure detection** while tests run
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function           | Property                                        |
//! |-----------------------------|-------------------------------------------------|
//! | `check_pair_index`          | n-th pair carries `start + n`                   |
//! | `check_pairs_consecutive`   | a materialized run starts at `start`, steps by 1|
//! | `check_counter_advanced`    | the counter moves by exactly `skipped + 1`      |
//!
//! # Usage
//!
//! ```ignore
//! use tally::contracts::*;
//!
//! // In debug builds, this panics if invariant is violated
//! check_pairs_consecutive(start, &pairs);
//!
//! // In release builds, this is a no-op
//! ```

use crate::types::{Index, IndexedPair};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

// INVARIANT: the default offset is the identity offset.
const _: () = assert!(crate::types::DEFAULT_START == 0);

// ============================================================================
// PAIR CONTRACTS
// ============================================================================

/// Check that the pair at `position` carries `start + position`.
///
/// # Panics (debug builds only)
/// Panics if the index disagrees, or if `start + position` is not an `i64`.
#[inline]
pub fn check_pair_index(start: Index, position: usize, index: Index) {
    let expected = Index::try_from(i128::from(start) + position as i128).ok();

    debug_assert!(
        expected == Some(index),
        "Contract violation: pair-index - pair {} carries {} but start {} + {} = {:?}",
        position,
        index,
        start,
        position,
        expected
    );
}

/// Check that a materialized run of pairs starts at `start` and steps by one.
///
/// # Panics (debug builds only)
/// Panics on the first pair whose index breaks the sequence.
#[inline]
pub fn check_pairs_consecutive<T>(start: Index, pairs: &[IndexedPair<T>]) {
    for (position, pair) in pairs.iter().enumerate() {
        check_pair_index(start, position, pair.index);
    }
}

// ============================================================================
// COUNTER CONTRACTS
// ============================================================================

/// Check that claiming an element `skipped` places past the front moved the
/// counter by exactly `skipped + 1`.
///
/// `after == None` means the counter ran off the end of `i64`, which is only
/// allowed when the claimed index was `i64::MAX`.
///
/// # Panics (debug builds only)
/// Panics if the counter moved by any other amount or went backwards.
#[inline]
pub fn check_counter_advanced(before: Option<Index>, after: Option<Index>, skipped: usize) {
    let claimed = before.and_then(|b| Index::try_from(i128::from(b) + skipped as i128).ok());

    match after {
        Some(after) => debug_assert!(
            claimed.and_then(|c| c.checked_add(1)) == Some(after),
            "Contract violation: counter advance - {:?} + {} + 1 != {}",
            before,
            skipped,
            after
        ),
        None => debug_assert!(
            claimed == Some(Index::MAX),
            "Contract violation: counter exhausted early - claimed {:?} from {:?} + {}",
            claimed,
            before,
            skipped
        ),
    }
}
