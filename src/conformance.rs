// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The reference conformance cases as data.
//!
//! Eight calls, each with the literal output it must print. They cover the
//! empty source, the default start, positive and negative offsets, a thousand-
//! element range, and every mix of positional and named arguments. Expected
//! output is written out (or, for the range, generated by plain formatting)
//! without going through the adapter, so a case can actually fail.

use crate::enumerate::{enumerate, enumerate_from, EnumerateArgs};
use crate::render::render_pairs;
use crate::types::{Index, IndexedPair};
use serde::Serialize;
use std::fmt::Write;

/// Where a case's elements come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A literal list of integers.
    List(Vec<i64>),
    /// `0..n`, pulled lazily.
    Range(i64),
}

impl Source {
    fn values(&self) -> Box<dyn Iterator<Item = i64> + '_> {
        match self {
            Source::List(values) => Box::new(values.iter().copied()),
            Source::Range(n) => Box::new(0..*n),
        }
    }
}

/// How the arguments are passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CallStyle {
    /// `enumerate(seq)` / `enumerate(seq, n)`
    Positional,
    /// `enumerate(seq, start=n)`
    StartByName,
    /// `enumerate(iterable=seq)` / `enumerate(iterable=seq, start=n)`
    AllByName,
}

#[derive(Debug, Clone)]
pub struct Case {
    pub name: &'static str,
    /// The call as a caller would write it.
    pub call: &'static str,
    pub source: Source,
    pub start: Option<Index>,
    pub style: CallStyle,
    pub expected: String,
}

impl Case {
    /// Evaluate the call through the library.
    pub fn evaluate(&self) -> Vec<IndexedPair<i64>> {
        let values = self.source.values();
        match (self.style, self.start) {
            (CallStyle::Positional, None) => enumerate(values).collect(),
            (CallStyle::Positional, Some(start)) => enumerate_from(values, start).collect(),
            (_, None) => EnumerateArgs::new(values).into_iter().collect(),
            (_, Some(start)) => EnumerateArgs {
                iterable: values,
                start,
            }
            .into_iter()
            .collect(),
        }
    }

    pub fn run(&self) -> CaseOutcome {
        let actual = render_pairs(&self.evaluate());
        CaseOutcome {
            name: self.name,
            call: self.call,
            style: self.style,
            passed: actual == self.expected,
            expected: self.expected.clone(),
            actual,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseOutcome {
    pub name: &'static str,
    pub call: &'static str,
    pub style: CallStyle,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
}

/// Number of elements in the range case.
pub const RANGE_LEN: i64 = 1000;

/// `[(0, 0), (1, 1), ..., (n-1, n-1)]`, built by formatting alone.
fn identity_range_literal(n: i64) -> String {
    let mut out = String::from("[");
    for i in 0..n {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "({}, {})", i, i);
    }
    out.push(']');
    out
}

/// All reference cases, in script order.
pub fn cases() -> Vec<Case> {
    let abc = || Source::List(vec![1, 2, 3]);
    vec![
        Case {
            name: "empty",
            call: "enumerate([])",
            source: Source::List(Vec::new()),
            start: None,
            style: CallStyle::Positional,
            expected: "[]".to_string(),
        },
        Case {
            name: "default_start",
            call: "enumerate([1, 2, 3])",
            source: abc(),
            start: None,
            style: CallStyle::Positional,
            expected: "[(0, 1), (1, 2), (2, 3)]".to_string(),
        },
        Case {
            name: "positive_start",
            call: "enumerate([1, 2, 3], 5)",
            source: abc(),
            start: Some(5),
            style: CallStyle::Positional,
            expected: "[(5, 1), (6, 2), (7, 3)]".to_string(),
        },
        Case {
            name: "negative_start",
            call: "enumerate([1, 2, 3], -5)",
            source: abc(),
            start: Some(-5),
            style: CallStyle::Positional,
            expected: "[(-5, 1), (-4, 2), (-3, 3)]".to_string(),
        },
        Case {
            name: "range",
            call: "enumerate(range(1000))",
            source: Source::Range(RANGE_LEN),
            start: None,
            style: CallStyle::Positional,
            expected: identity_range_literal(RANGE_LEN),
        },
        Case {
            name: "start_by_name",
            call: "enumerate([1, 2, 3], start=1)",
            source: abc(),
            start: Some(1),
            style: CallStyle::StartByName,
            expected: "[(1, 1), (2, 2), (3, 3)]".to_string(),
        },
        Case {
            name: "iterable_by_name",
            call: "enumerate(iterable=[1, 2, 3])",
            source: abc(),
            start: None,
            style: CallStyle::AllByName,
            expected: "[(0, 1), (1, 2), (2, 3)]".to_string(),
        },
        Case {
            name: "all_by_name",
            call: "enumerate(iterable=[1, 2, 3], start=1)",
            source: abc(),
            start: Some(1),
            style: CallStyle::AllByName,
            expected: "[(1, 1), (2, 2), (3, 3)]".to_string(),
        },
    ]
}

/// Run every case and collect the outcomes.
pub fn run_all() -> Vec<CaseOutcome> {
    cases().iter().map(Case::run).collect()
}
