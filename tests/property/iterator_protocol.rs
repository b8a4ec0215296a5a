//! The rest of the `Iterator` protocol must agree with plain `next`.

use super::common::tuples;
use proptest::prelude::*;
use tally::{enumerate_from, Index, IndexedPair};

fn values_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..128)
}

fn start_strategy() -> impl Strategy<Value = Index> {
    any::<i32>().prop_map(Index::from)
}

/// A scripted pull from either end.
#[derive(Debug, Clone, Copy)]
enum Pull {
    Front,
    Back,
    Nth(usize),
    NthBack(usize),
}

fn pull_strategy() -> impl Strategy<Value = Pull> {
    prop_oneof![
        Just(Pull::Front),
        Just(Pull::Back),
        (0usize..8).prop_map(Pull::Nth),
        (0usize..8).prop_map(Pull::NthBack),
    ]
}

proptest! {
    /// Property: `size_hint` and `len` forward the source's.
    #[test]
    fn prop_size_hint_forwards(values in values_strategy(), start in start_strategy()) {
        let iter = enumerate_from(values.clone(), start);
        prop_assert_eq!(iter.size_hint(), (values.len(), Some(values.len())));
        prop_assert_eq!(iter.len(), values.len());
    }

    /// Property: `count` never disagrees with the number of `next` calls.
    #[test]
    fn prop_count_matches(values in values_strategy(), start in start_strategy()) {
        prop_assert_eq!(
            enumerate_from(values.clone(), start).count(),
            tuples(enumerate_from(values, start)).len()
        );
    }

    /// Property: `nth(k)` returns what k+1 calls to `next` would.
    #[test]
    fn prop_nth_matches_next(values in values_strategy(), start in start_strategy(), k in 0usize..160) {
        let by_nth = enumerate_from(values.clone(), start).nth(k);
        let by_next = enumerate_from(values, start).skip(k).next();
        prop_assert_eq!(by_nth, by_next);
    }

    /// Property: `last` is the final pair `next` would produce.
    #[test]
    fn prop_last_matches(values in values_strategy(), start in start_strategy()) {
        let last = enumerate_from(values.clone(), start).last();
        let expected = values
            .last()
            .map(|v| IndexedPair::new(start + values.len() as Index - 1, *v));
        prop_assert_eq!(last, expected);
    }

    /// Property: any interleaving of front and back pulls hands every element
    /// the index it would have had in a plain forward walk.
    #[test]
    fn prop_mixed_pulls_keep_indices(
        values in values_strategy(),
        start in start_strategy(),
        script in prop::collection::vec(pull_strategy(), 0..64),
    ) {
        let forward: Vec<_> = enumerate_from(values.clone(), start).collect();
        let mut iter = enumerate_from(values, start);

        for pull in script {
            let got = match pull {
                Pull::Front => iter.next(),
                Pull::Back => iter.next_back(),
                Pull::Nth(k) => iter.nth(k),
                Pull::NthBack(k) => iter.nth_back(k),
            };
            if let Some(pair) = got {
                let position = usize::try_from(pair.index - start).unwrap();
                prop_assert_eq!(Some(&pair), forward.get(position));
            }
        }
    }

    /// Property: `rev` yields the forward sequence reversed.
    #[test]
    fn prop_rev_is_reverse(values in values_strategy(), start in start_strategy()) {
        let mut forward = tuples(enumerate_from(values.clone(), start));
        forward.reverse();
        prop_assert_eq!(forward, tuples(enumerate_from(values, start).rev()));
    }
}
