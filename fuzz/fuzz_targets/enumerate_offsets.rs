// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for start offsets across the whole i64 range.
//!
//! Near `i64::MAX` the adapter must either number every element or panic with
//! an overflow contract violation. It must never wrap.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tally::{enumerate_from, ValidatedPairs};

#[derive(Debug, Arbitrary)]
struct Input {
    values: Vec<u8>,
    start: i64,
}

fuzz_target!(|input: Input| {
    let Input { values, start } = input;

    // Runs that would cross i64::MAX are the panic case; skip them here.
    let room = i64::MAX.abs_diff(start).saturating_add(1);
    if values.len() as u64 > room {
        return;
    }

    let pairs: Vec<_> = enumerate_from(values.iter().copied(), start).collect();
    assert_eq!(pairs.len(), values.len());

    let run = ValidatedPairs::new(pairs, start).expect("adapter output must validate");
    if let Some(first) = run.as_slice().first() {
        assert_eq!(first.index, start);
    }
});
