//! Tests for the verification layer against adapter output.

use super::common::ABC;
use tally::{
    enumerate_from, verify_against_source, IndexedPair, InvariantError, ValidatedPairs,
};

#[test]
fn test_adapter_output_always_validates() {
    for start in [-5, 0, 5] {
        let pairs: Vec<_> = enumerate_from(ABC, start).collect();
        let report = verify_against_source(&ABC, start, &pairs).unwrap();
        assert_eq!(report.first_index, Some(start));
        assert_eq!(report.last_index, Some(start + 2));

        let run = ValidatedPairs::new(pairs, start).unwrap();
        assert_eq!(run.len(), 3);
        assert_eq!(run.get(start + 1).map(|p| p.value), Some(2));
    }
}

#[test]
fn test_empty_report() {
    let report = verify_against_source::<i64>(&[], 3, &[]).unwrap();
    assert_eq!(report.pairs_checked, 0);
    assert_eq!(report.to_string(), "0 pairs verified (empty run from start 3)");
}

#[test]
fn test_shifted_run_rejected() {
    let pairs: Vec<_> = enumerate_from(ABC, 1).collect();
    assert_eq!(
        verify_against_source(&ABC, 0, &pairs),
        Err(InvariantError::WrongFirstIndex {
            expected: 0,
            actual: 1
        })
    );
}

#[test]
fn test_truncated_run_rejected() {
    let pairs: Vec<_> = enumerate_from(ABC, 0).take(2).collect();
    let err = verify_against_source(&ABC, 0, &pairs).unwrap_err();
    assert_eq!(err.to_string(), "pairs.len() 2 != source.len() 3");
}

#[test]
fn test_reordered_run_rejected() {
    let mut pairs: Vec<_> = enumerate_from(ABC, 0).collect();
    pairs.swap(1, 2);
    assert!(matches!(
        ValidatedPairs::new(pairs, 0),
        Err(InvariantError::NonConsecutiveIndex { position: 1, .. })
    ));
}

#[test]
fn test_validated_pairs_roundtrip_inner() {
    let pairs = vec![IndexedPair::new(-1, 'x'), IndexedPair::new(0, 'y')];
    let run = ValidatedPairs::new(pairs.clone(), -1).unwrap();
    assert_eq!(run.as_slice(), pairs.as_slice());
    assert_eq!(run.iter().count(), 2);
    assert_eq!(run.into_inner(), pairs);
}

#[test]
fn test_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(InvariantError::ValueMismatch { position: 4 });
    assert_eq!(err.to_string(), "pairs[4].value differs from source[4]");
}
