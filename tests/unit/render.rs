//! Snapshot tests for the literal rendering of pair runs.
//!
//! The expected strings are exactly what the reference script prints, one
//! line per call.

use tally::conformance::{self, Source, RANGE_LEN};
use tally::{enumerate, enumerate_from, render_json, render_pairs, EnumerateArgs, IndexedPair};

/// The reference script's output, in order.
const SNAPSHOT: &[&str] = &[
    "[]",
    "[(0, 1), (1, 2), (2, 3)]",
    "[(5, 1), (6, 2), (7, 3)]",
    "[(-5, 1), (-4, 2), (-3, 3)]",
    // range(1000) is checked separately below
    "",
    "[(1, 1), (2, 2), (3, 3)]",
    "[(0, 1), (1, 2), (2, 3)]",
    "[(1, 1), (2, 2), (3, 3)]",
];

#[test]
fn test_script_output_line_by_line() {
    let lines: Vec<String> = vec![
        render_pairs(&enumerate(Vec::<i64>::new()).collect::<Vec<_>>()),
        render_pairs(&enumerate([1, 2, 3]).collect::<Vec<_>>()),
        render_pairs(&enumerate_from([1, 2, 3], 5).collect::<Vec<_>>()),
        render_pairs(&enumerate_from([1, 2, 3], -5).collect::<Vec<_>>()),
        String::new(),
        render_pairs(&enumerate_from([1, 2, 3], 1).collect::<Vec<_>>()),
        render_pairs(&EnumerateArgs::new([1, 2, 3]).into_iter().collect::<Vec<_>>()),
        render_pairs(
            &EnumerateArgs {
                iterable: [1, 2, 3],
                start: 1,
            }
            .into_iter()
            .collect::<Vec<_>>(),
        ),
    ];

    assert_eq!(lines.len(), SNAPSHOT.len());
    for (i, (line, expected)) in lines.iter().zip(SNAPSHOT).enumerate() {
        assert_eq!(line, expected, "line {} differs", i + 1);
    }
}

#[test]
fn test_range_line() {
    let pairs: Vec<_> = enumerate(0..RANGE_LEN).collect();
    let line = render_pairs(&pairs);

    assert!(line.starts_with("[(0, 0), (1, 1), (2, 2), "));
    assert!(line.ends_with(", (998, 998), (999, 999)]"));
    assert_eq!(line.matches("), (").count(), 999);
}

#[test]
fn test_conformance_table_matches_snapshot() {
    let outcomes = conformance::run_all();
    for (i, outcome) in outcomes.iter().enumerate() {
        assert!(outcome.passed, "{} failed", outcome.call);
        if !SNAPSHOT[i].is_empty() {
            assert_eq!(outcome.actual, SNAPSHOT[i]);
        }
    }
}

#[test]
fn test_range_case_uses_lazy_source() {
    let range = conformance::cases()
        .into_iter()
        .find(|c| c.name == "range")
        .map(|c| c.source);
    assert_eq!(range, Some(Source::Range(RANGE_LEN)));
}

#[test]
fn test_string_values_are_quoted() {
    let pairs: Vec<_> = enumerate_from(["a", "it's"], 1).collect();
    assert_eq!(render_pairs(&pairs), "[(1, 'a'), (2, \"it's\")]");
}

#[test]
fn test_json_rendering() {
    let pairs: Vec<IndexedPair<i64>> = enumerate_from([1, 2, 3], -5).collect();
    assert_eq!(render_json(&pairs).unwrap(), "[[-5,1],[-4,2],[-3,3]]");

    let empty: Vec<IndexedPair<i64>> = Vec::new();
    assert_eq!(render_json(&empty).unwrap(), "[]");

    let back: Vec<IndexedPair<i64>> = serde_json::from_str("[[-5,1],[-4,2],[-3,3]]").unwrap();
    assert_eq!(back, pairs);
}
