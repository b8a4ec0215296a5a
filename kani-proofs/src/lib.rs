// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the pairing adapter's index arithmetic.
//!
//! This standalone crate extracts the counter logic from `src/enumerate.rs`
//! and proves it correct for every `i64` start and every skip distance.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No wrap**: a claimed index is always exactly `next + skipped`
//! 2. **Monotone**: after a claim, the counter sits exactly one past the index
//! 3. **Exhaustion**: the counter becomes `None` only after `i64::MAX` is claimed
//! 4. **Back pulls**: the index from the back equals `next + remaining`

/// Index type carried by every pair.
pub type Index = i64;

// ============================================================================
// COUNTER ARITHMETIC (copied from src/enumerate.rs)
// ============================================================================

/// `base + ahead`, or `None` when the result is not an `Index`.
///
/// The adapter panics where this returns `None`.
pub fn offset(base: Option<Index>, ahead: usize) -> Option<Index> {
    base.and_then(|n| Index::try_from(i128::from(n) + ahead as i128).ok())
}

/// Claim the element `skipped` places past the front.
///
/// Returns `(index, next)` or `None` on overflow.
pub fn claim(next: Option<Index>, skipped: usize) -> Option<(Index, Option<Index>)> {
    let index = offset(next, skipped)?;
    Some((index, index.checked_add(1)))
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify a claim never wraps: the index is the exact mathematical sum.
    #[kani::proof]
    fn verify_claim_is_exact_sum() {
        let start: Index = kani::any();
        let skipped: usize = kani::any();

        if let Some((index, _)) = claim(Some(start), skipped) {
            kani::assert(
                i128::from(index) == i128::from(start) + skipped as i128,
                "claimed index must equal start + skipped",
            );
        } else {
            kani::assert(
                i128::from(start) + skipped as i128 > i128::from(Index::MAX),
                "claim may only fail when the sum exceeds i64::MAX",
            );
        }
    }

    /// Verify the counter moves to exactly one past the claimed index.
    #[kani::proof]
    fn verify_counter_advances_by_one() {
        let start: Index = kani::any();
        let skipped: usize = kani::any();

        if let Some((index, next)) = claim(Some(start), skipped) {
            match next {
                Some(n) => kani::assert(n == index + 1, "next must be index + 1"),
                None => kani::assert(index == Index::MAX, "counter may run off only after MAX"),
            }
        }
    }

    /// Verify an exhausted counter can never hand out another index.
    #[kani::proof]
    fn verify_exhausted_counter_claims_nothing() {
        let skipped: usize = kani::any();
        kani::assert(claim(None, skipped).is_none(), "no index after i64::MAX");
    }

    /// Verify that two single-step claims equal one claim skipping one.
    #[kani::proof]
    fn verify_next_next_equals_nth_one() {
        let start: Index = kani::any();
        kani::assume(start < Index::MAX);

        let (first, after_first) = claim(Some(start), 0).unwrap();
        let (second, after_second) = claim(after_first, 0).unwrap();
        let (skipped, after_skip) = claim(Some(start), 1).unwrap();

        kani::assert(first == start, "first claim is start");
        kani::assert(second == skipped, "next;next == nth(1)");
        kani::assert(after_second == after_skip, "counters agree");
    }

    /// Verify back pulls land where a forward walk would have put them.
    #[kani::proof]
    fn verify_back_index_matches_forward() {
        let start: Index = kani::any();
        let remaining: usize = kani::any();
        kani::assume(remaining < 1 << 20);

        if let Some(back) = offset(Some(start), remaining) {
            // Walking forward `remaining` times from `start` lands on `back`.
            kani::assert(
                i128::from(back) - i128::from(start) == remaining as i128,
                "back index must be start + remaining",
            );
        }
    }
}
