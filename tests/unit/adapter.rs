//! Reference behavior of the pairing producer.
//!
//! One test per documented scenario: empty source, default start, positive
//! and negative offsets, unbounded sources, and named versus positional calls.

use super::common::{assert_pair_index, counting_source, tuples, PullCounter, ABC, INTERESTING_STARTS};
use tally::{enumerate, enumerate_from, Enumerate, EnumerateArgs, Index, IndexedIteratorExt};

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_empty_source_yields_no_pairs() {
    assert!(tuples(enumerate(Vec::<i64>::new())).is_empty());
    for &start in INTERESTING_STARTS {
        assert!(tuples(enumerate_from(Vec::<i64>::new(), start)).is_empty());
    }
}

#[test]
fn test_default_start() {
    assert_eq!(tuples(enumerate(ABC)), vec![(0, 1), (1, 2), (2, 3)]);
}

#[test]
fn test_start_five() {
    assert_eq!(tuples(enumerate_from(ABC, 5)), vec![(5, 1), (6, 2), (7, 3)]);
}

#[test]
fn test_start_negative_five() {
    assert_eq!(
        tuples(enumerate_from(ABC, -5)),
        vec![(-5, 1), (-4, 2), (-3, 3)]
    );
}

#[test]
fn test_every_interesting_start() {
    for &start in INTERESTING_STARTS {
        let pairs: Vec<_> = enumerate_from(ABC, start).collect();
        assert_pair_index(&ABC, start, &pairs);
    }
}

#[test]
fn test_range_of_one_thousand() {
    let pairs: Vec<_> = enumerate(0..1000i64).collect();
    assert_eq!(pairs.len(), 1000);
    for pair in &pairs {
        assert_eq!(pair.index, pair.value);
    }
}

#[test]
fn test_unbounded_source_truncated() {
    let (source, pulls) = PullCounter::new(counting_source());
    let prefix = tuples(enumerate(source).take(5));

    assert_eq!(prefix, vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    assert_eq!(pulls.get(), 5, "take(5) must pull exactly five elements");
}

#[test]
fn test_unbounded_source_with_negative_start() {
    let prefix = tuples(enumerate_from(counting_source(), -2).take(4));
    assert_eq!(prefix, vec![(-2, 0), (-1, 1), (0, 2), (1, 3)]);
}

// ============================================================================
// CALLING CONVENTIONS
// ============================================================================

#[test]
fn test_start_by_name_matches_positional() {
    let by_name = tuples(EnumerateArgs::new(ABC).start(1).into_iter());
    let positional = tuples(enumerate_from(ABC, 1));
    assert_eq!(by_name, positional);
    assert_eq!(by_name, vec![(1, 1), (2, 2), (3, 3)]);
}

#[test]
fn test_iterable_by_name_matches_positional() {
    let by_name = tuples(EnumerateArgs::new(ABC).into_iter());
    assert_eq!(by_name, tuples(enumerate(ABC)));
}

#[test]
fn test_all_by_name_struct_literal() {
    let args = EnumerateArgs {
        iterable: ABC,
        start: 1,
    };
    assert_eq!(args.clone(), EnumerateArgs::new(ABC).start(1));
    assert_eq!(tuples(args.into_iter()), tuples(enumerate_from(ABC, 1)));
}

#[test]
fn test_for_loop_over_named_args() {
    let mut seen = Vec::new();
    for pair in EnumerateArgs::new(vec!["a", "b"]).start(-1) {
        seen.push((pair.index, pair.value));
    }
    assert_eq!(seen, vec![(-1, "a"), (0, "b")]);
}

#[test]
fn test_method_form() {
    let pairs = tuples(ABC.iter().copied().indexed_from(5));
    assert_eq!(pairs, tuples(enumerate_from(ABC, 5)));
    assert_eq!(tuples(ABC.iter().indexed()), vec![(0, &1), (1, &2), (2, &3)]);
}

#[test]
fn test_adapter_reports_its_configuration() {
    let mut iter: Enumerate<_> = enumerate_from(ABC, -5);
    assert_eq!(iter.start(), -5);
    assert_eq!(iter.next_index(), Some(-5));
    iter.next();
    assert_eq!(iter.start(), -5);
    assert_eq!(iter.next_index(), Some(-4));
}

#[test]
fn test_overflow_boundary() {
    let pairs = tuples(enumerate_from(ABC, Index::MAX - 2));
    assert_eq!(pairs.last(), Some(&(Index::MAX, 3)));

    let result = std::panic::catch_unwind(|| enumerate_from(ABC, Index::MAX - 1).count_pairs());
    assert!(result.is_err(), "a third element after i64::MAX - 1 must panic");
}

/// Pull every pair through `next` (as opposed to `count`, which never needs
/// an index).
trait CountPairs {
    fn count_pairs(self) -> usize;
}

impl<I: Iterator> CountPairs for I {
    fn count_pairs(mut self) -> usize {
        let mut n = 0;
        while self.next().is_some() {
            n += 1;
        }
        n
    }
}
