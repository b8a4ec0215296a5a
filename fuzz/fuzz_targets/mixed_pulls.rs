// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for interleaved front and back pulls.
//!
//! Whatever order elements leave the adapter in, each one must carry the index
//! it would have had in a plain forward walk.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tally::enumerate_from;

#[derive(Debug, Arbitrary)]
enum Pull {
    Front,
    Back,
    Nth(u8),
    NthBack(u8),
}

#[derive(Debug, Arbitrary)]
struct Input {
    values: Vec<u16>,
    start: i32,
    script: Vec<Pull>,
}

fuzz_target!(|input: Input| {
    let start = i64::from(input.start);
    let forward: Vec<_> = enumerate_from(input.values.clone(), start).collect();
    let mut iter = enumerate_from(input.values, start);

    for pull in input.script {
        let got = match pull {
            Pull::Front => iter.next(),
            Pull::Back => iter.next_back(),
            Pull::Nth(k) => iter.nth(usize::from(k)),
            Pull::NthBack(k) => iter.nth_back(usize::from(k)),
        };
        if let Some(pair) = got {
            let position = usize::try_from(pair.index - start).expect("index below start");
            assert_eq!(Some(&pair), forward.get(position));
        }
    }
});
