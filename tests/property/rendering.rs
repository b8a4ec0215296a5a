//! Rendering must agree with hand-formatted output for any integer run.

use proptest::prelude::*;
use tally::{enumerate_from, render_json, render_pairs, Index, IndexedPair};

/// Format `[(i, v), ...]` with nothing but `format!`.
fn hand_rendered(values: &[i64], start: Index) -> String {
    let items: Vec<String> = values
        .iter()
        .enumerate()
        .map(|(n, v)| format!("({}, {})", start + n as Index, v))
        .collect();
    format!("[{}]", items.join(", "))
}

proptest! {
    #[test]
    fn prop_literal_matches_hand_rendering(
        values in prop::collection::vec(any::<i64>(), 0..64),
        start in -1_000_000i64..1_000_000,
    ) {
        let pairs: Vec<_> = enumerate_from(values.clone(), start).collect();
        prop_assert_eq!(render_pairs(&pairs), hand_rendered(&values, start));
    }

    #[test]
    fn prop_json_roundtrips(
        values in prop::collection::vec(any::<i64>(), 0..64),
        start in any::<i32>(),
    ) {
        let start = Index::from(start);
        let pairs: Vec<_> = enumerate_from(values, start).collect();
        let json = render_json(&pairs).unwrap();
        let back: Vec<IndexedPair<i64>> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, pairs);
    }
}
