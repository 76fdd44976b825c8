//! Judgment parsing pipeline
//!
//! Glues the normalizer together for the judging worker: fence extraction,
//! JSON decoding, score coercion and comment sanitization in one call.


use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::comment::{sanitize_comment, DEFAULT_MAX_COMMENT_LEN};
use crate::error::{JudgeError, Result};
use crate::extract::extract_json;
use crate::score::{coerce_scores, ScoreSet, SCORE_KEYS};

/// One persona judge's validated verdict on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judgment {
    pub scores: ScoreSet,
    pub comment: Option<String>,
}

impl Judgment {
    /// Sum over all score dimensions, used for ranking.
    pub fn total(&self) -> i32 {
        self.scores.total()
    }
}

/// Parse a raw AI response into a [`Judgment`] using the domain defaults:
/// the five [`SCORE_KEYS`] dimensions and a 30-character comment cap.
pub fn parse_judgment(raw: &str) -> Result<Judgment> {
    parse_judgment_with(raw, &SCORE_KEYS, DEFAULT_MAX_COMMENT_LEN)
}

/// Parse a raw AI response with explicit required keys and comment cap.
///
/// Stateless and referentially transparent; the orchestrator may retry or
/// fan out persona judgments in parallel without coordination.
pub fn parse_judgment_with(
    raw: &str,
    required_keys: &[&str],
    max_comment_len: usize,
) -> Result<Judgment> {
    let payload = extract_json(raw);
    let decoded: Value = serde_json::from_str(payload)?;
    let object = decoded.as_object().ok_or(JudgeError::NotAnObject)?;

    let scores = coerce_scores(object, required_keys)?;
    let comment = match object.get("comment") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => sanitize_comment(Some(s), max_comment_len),
        // Judges occasionally emit a bare number or similar; stringify it
        // rather than dropping the remark.
        Some(other) => sanitize_comment(Some(&other.to_string()), max_comment_len),
    };

    Ok(Judgment { scores, comment })
}
