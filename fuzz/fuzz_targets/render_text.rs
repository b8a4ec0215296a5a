// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for literal rendering of text values.
//!
//! Arbitrary strings go in; the output must stay bracketed, and JSON rendering
//! must round-trip the exact pairs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tally::{enumerate_from, render_json, render_pairs, IndexedPair};

fuzz_target!(|input: (Vec<String>, i16)| {
    let (values, start) = input;
    let pairs: Vec<_> = enumerate_from(values, i64::from(start)).collect();

    let literal = render_pairs(&pairs);
    assert!(literal.starts_with('[') && literal.ends_with(']'));

    let json = render_json(&pairs).expect("strings always encode");
    let back: Vec<IndexedPair<String>> = serde_json::from_str(&json).expect("own output decodes");
    assert_eq!(back, pairs);
});
