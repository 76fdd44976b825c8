//! Property tests for score coercion
//!
//! Covers coercion totality over valid numeric shapes, atomic failure on the
//! first bad key, and determinism under parallel invocation.

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use crate::error::JudgeError;
use crate::score::{coerce_scores, SCORE_KEYS};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

/// A coercible score value paired with the integer it must normalize to.
fn coercible_value_strategy() -> impl Strategy<Value = (Value, i32)> {
    prop_oneof![
        (-100..=100i32).prop_map(|i| (json!(i), i)),
        (-100.0..100.0f64).prop_map(|f| (json!(f), f.round() as i32)),
        (-100..=100i32).prop_map(|i| (json!(i.to_string()), i)),
        (-100.0..100.0f64).prop_map(|f| (json!(f.to_string()), f.round() as i32)),
    ]
}

/// A value no coercion can rescue.
fn uncoercible_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(|s| json!(format!("x{}", s))),
        any::<bool>().prop_map(|b| json!(b)),
        Just(json!([1, 2, 3])),
        Just(json!({"nested": 1})),
    ]
}

/// A complete decoded response over all five dimensions.
fn full_response_strategy() -> impl Strategy<Value = (Map<String, Value>, Vec<i32>)> {
    prop::collection::vec(coercible_value_strategy(), SCORE_KEYS.len()).prop_map(|values| {
        let mut map = Map::new();
        let mut expected = Vec::new();
        for (key, (value, want)) in SCORE_KEYS.iter().zip(values) {
            map.insert((*key).to_string(), value);
            expected.push(want);
        }
        (map, expected)
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Any mix of integer / float / numeric-string values coerces, and each
    /// dimension lands on its rounded integer.
    #[test]
    fn prop_coercible_values_normalize((map, expected) in full_response_strategy()) {
        let scores = coerce_scores(&map, &SCORE_KEYS).unwrap();
        prop_assert_eq!(scores.len(), SCORE_KEYS.len());
        for (key, want) in SCORE_KEYS.iter().zip(&expected) {
            prop_assert_eq!(scores.get(key), Some(*want), "key: {}", key);
        }
        prop_assert_eq!(scores.total(), expected.iter().sum::<i32>());
    }

    /// Dropping any one required key fails with MissingScore naming that key.
    #[test]
    fn prop_missing_key_detected(
        (mut map, _) in full_response_strategy(),
        index in 0..SCORE_KEYS.len()
    ) {
        let dropped = SCORE_KEYS[index];
        map.remove(dropped);

        let err = coerce_scores(&map, &SCORE_KEYS).unwrap_err();
        match err {
            JudgeError::MissingScore { key } => prop_assert_eq!(key, dropped),
            other => prop_assert!(false, "Expected MissingScore, got {:?}", other),
        }
    }

    /// Poisoning any one key fails with InvalidScore carrying that key and the
    /// raw offending value.
    #[test]
    fn prop_invalid_value_detected(
        (mut map, _) in full_response_strategy(),
        index in 0..SCORE_KEYS.len(),
        bad in uncoercible_value_strategy()
    ) {
        let poisoned = SCORE_KEYS[index];
        map.insert(poisoned.to_string(), bad.clone());

        let err = coerce_scores(&map, &SCORE_KEYS).unwrap_err();
        match err {
            JudgeError::InvalidScore { key, value, .. } => {
                prop_assert_eq!(key, poisoned);
                prop_assert_eq!(value, bad);
            }
            other => prop_assert!(false, "Expected InvalidScore, got {:?}", other),
        }
    }

    /// Coercion is referentially transparent: many threads hammering the same
    /// input all observe the identical result.
    #[test]
    fn prop_parallel_invocations_agree((map, _) in full_response_strategy()) {
        let baseline = coerce_scores(&map, &SCORE_KEYS).unwrap();

        let results: Vec<_> = std::thread::scope(|scope| {
            (0..8)
                .map(|_| scope.spawn(|| coerce_scores(&map, &SCORE_KEYS).unwrap()))
                .collect::<Vec<_>>()
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        for scores in results {
            prop_assert_eq!(&scores, &baseline);
        }
    }
}
