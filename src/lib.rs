//! Aruaru Judge Core - judgment response normalizer for the aruaru AI judging pipeline
//!
//! This crate turns the raw, inconsistently formatted text an AI persona judge
//! returns into a validated score record: it strips markdown code fences,
//! coerces heterogeneous numeric values into integer scores and sanitizes the
//! judge's commentary. Optional Python bindings (feature `python`) let the
//! judging worker call in-process via PyO3.
//!
//! Every function here is pure and synchronous; retry and fan-out policy
//! belongs to the orchestrator.

pub mod comment;
pub mod error;
pub mod extract;
pub mod judgment;
pub mod score;

pub use crate::comment::{sanitize_comment, DEFAULT_MAX_COMMENT_LEN};
pub use crate::error::{JudgeError, Result};
pub use crate::extract::extract_json;
pub use crate::judgment::{parse_judgment, parse_judgment_with, Judgment};
pub use crate::score::{coerce_scores, ScoreSet, SCORE_KEYS};

// ============================================================================
// Python Bindings
// ============================================================================

#[cfg(feature = "python")]
mod python {
    use pyo3::prelude::*;
    use std::collections::HashMap;

    use crate::comment::DEFAULT_MAX_COMMENT_LEN;
    use crate::judgment::Judgment;
    use crate::score::SCORE_KEYS;

    /// A judgment flattened into types pyo3 converts natively.
    type PyJudgment = (HashMap<String, i32>, Option<String>);

    fn flatten(judgment: Judgment) -> PyJudgment {
        let scores = judgment
            .scores
            .iter()
            .map(|(key, score)| (key.to_string(), score))
            .collect();
        (scores, judgment.comment)
    }

    /// Extract the most likely JSON payload from a raw AI response.
    #[pyfunction]
    fn extract_json(text: &str) -> String {
        crate::extract::extract_json(text).to_string()
    }

    /// Trim and truncate a judge comment; None passes through.
    #[pyfunction]
    #[pyo3(signature = (comment, max_len=DEFAULT_MAX_COMMENT_LEN))]
    fn sanitize_comment(comment: Option<String>, max_len: usize) -> Option<String> {
        crate::comment::sanitize_comment(comment.as_deref(), max_len)
    }

    /// Parse a raw AI response into (scores, comment) with domain defaults.
    ///
    /// # Raises
    /// KeyError for a missing score, ValueError for anything else malformed
    #[pyfunction]
    fn judge_response(raw: &str) -> PyResult<PyJudgment> {
        Ok(flatten(crate::judgment::parse_judgment(raw)?))
    }

    /// Parse a raw AI response with explicit score keys and comment cap.
    #[pyfunction]
    #[pyo3(signature = (raw, required_keys, max_comment_len=DEFAULT_MAX_COMMENT_LEN))]
    fn judge_response_with(
        raw: &str,
        required_keys: Vec<String>,
        max_comment_len: usize,
    ) -> PyResult<PyJudgment> {
        let keys: Vec<&str> = required_keys.iter().map(String::as_str).collect();
        Ok(flatten(crate::judgment::parse_judgment_with(
            raw,
            &keys,
            max_comment_len,
        )?))
    }

    /// Parse a raw AI response asynchronously.
    ///
    /// Runs the parse in a background thread via Tokio's spawn_blocking so the
    /// worker's asyncio loop stays responsive while persona judgments fan out
    /// in parallel.
    ///
    /// # Returns
    /// A Python awaitable resolving to (scores, comment)
    #[pyfunction]
    fn judge_response_async(py: Python<'_>, raw: String) -> PyResult<Bound<'_, PyAny>> {
        pyo3_async_runtimes::tokio::future_into_py(py, async move {
            let judgment = tokio::task::spawn_blocking(move || {
                crate::judgment::parse_judgment(&raw).map_err(PyErr::from)
            })
            .await
            .map_err(|e| {
                PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                    "Judging task panicked: {}",
                    e
                ))
            })??;

            Ok(flatten(judgment))
        })
    }

    /// Python module definition
    #[pymodule]
    fn aruaru_judge_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(extract_json, m)?)?;
        m.add_function(wrap_pyfunction!(sanitize_comment, m)?)?;
        m.add_function(wrap_pyfunction!(judge_response, m)?)?;
        m.add_function(wrap_pyfunction!(judge_response_with, m)?)?;
        m.add_function(wrap_pyfunction!(judge_response_async, m)?)?;
        m.add("SCORE_KEYS", SCORE_KEYS.to_vec())?;
        m.add("DEFAULT_MAX_COMMENT_LEN", DEFAULT_MAX_COMMENT_LEN)?;
        Ok(())
    }
}
