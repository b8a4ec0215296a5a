// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: type-level invariants for materialized pair runs.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level wrappers** (`ValidatedPairs`) that can only be built from a
//!    run satisfying **pair-index**. Once you hold one, the invariant is a given.
//!
//! 2. **Runtime contracts** (`crate::contracts`) that panic in debug builds when
//!    the adapter itself misbehaves.
//!
//! `verify_against_source` ties the two together: it checks a run of pairs
//! against the source it claims to come from and reports what it found.

mod types;

pub use types::*;
