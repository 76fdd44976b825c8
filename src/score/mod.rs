//! Score coercion module
//!
//! AI judges return score values in whatever shape the model felt like that
//! day: integers, floats, numeric strings. This module normalizes a decoded
//! response object into a validated integer score per dimension.

#[cfg(test)]
mod property_tests;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{JudgeError, Result};

/// The five score dimensions every judgment must cover, in validation order.
///
/// Owned by the domain model; callers pass these (or a subset for tests) into
/// [`coerce_scores`] explicitly rather than the coercion reaching for a global.
pub const SCORE_KEYS: [&str; 5] = ["empathy", "humor", "brevity", "originality", "expression"];

/// Validated integer scores, complete over exactly the required keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreSet {
    scores: AHashMap<String, i32>,
}

impl ScoreSet {
    /// Score for a dimension, if present.
    pub fn get(&self, key: &str) -> Option<i32> {
        self.scores.get(key).copied()
    }

    /// Sum over all dimensions, used for ranking.
    pub fn total(&self) -> i32 {
        self.scores.values().sum()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate over (dimension, score) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.scores.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Coerce a decoded response object into a [`ScoreSet`] over `required_keys`.
///
/// Keys are validated in the order given and the first failure aborts the
/// whole coercion; there are no partial results. Integral JSON numbers are
/// used as-is, anything else is parsed as a float and rounded
/// half-away-from-zero (`f64::round`, matching the scripting-language `.round`
/// the judges' prompt contract was written against).
pub fn coerce_scores(decoded: &Map<String, Value>, required_keys: &[&str]) -> Result<ScoreSet> {
    let mut scores = AHashMap::with_capacity(required_keys.len());

    for &key in required_keys {
        let value = match decoded.get(key) {
            None | Some(Value::Null) => {
                return Err(JudgeError::MissingScore {
                    key: key.to_string(),
                })
            }
            Some(value) => value,
        };
        scores.insert(key.to_string(), coerce_one(key, value)?);
    }

    Ok(ScoreSet { scores })
}

fn coerce_one(key: &str, value: &Value) -> Result<i32> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return i32::try_from(i).map_err(|_| invalid(key, value, None));
            }
            match n.as_f64() {
                Some(f) => checked_i32(key, value, f.round()),
                None => Err(invalid(key, value, None)),
            }
        }
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(f) => checked_i32(key, value, f.round()),
            Err(e) => Err(invalid(key, value, Some(e))),
        },
        _ => Err(invalid(key, value, None)),
    }
}

/// Reject non-finite and out-of-range values after rounding.
fn checked_i32(key: &str, value: &Value, rounded: f64) -> Result<i32> {
    if rounded.is_finite() && rounded >= i32::MIN as f64 && rounded <= i32::MAX as f64 {
        Ok(rounded as i32)
    } else {
        Err(invalid(key, value, None))
    }
}

fn invalid(key: &str, value: &Value, source: Option<std::num::ParseFloatError>) -> JudgeError {
    JudgeError::InvalidScore {
        key: key.to_string(),
        value: value.clone(),
        source,
    }
}
