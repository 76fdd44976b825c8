//! Error types for the judgment response normalizer

use std::num::ParseFloatError;
use thiserror::Error;

/// Main error type for judgment response normalization
#[derive(Error, Debug)]
pub enum JudgeError {
    /// A required score key was absent or null in the decoded response.
    #[error("Missing score: {key}")]
    MissingScore { key: String },

    /// A required score key held a value that could not be coerced to an
    /// integer score. Carries the raw value and, where the failure came from
    /// numeric parsing, the underlying cause.
    #[error("Invalid score for {key}: {value}")]
    InvalidScore {
        key: String,
        value: serde_json::Value,
        #[source]
        source: Option<ParseFloatError>,
    },

    /// The extracted payload was not decodable as JSON.
    #[error("Invalid JSON in response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The decoded response was valid JSON but not an object.
    #[error("Response is not a JSON object")]
    NotAnObject,
}

impl JudgeError {
    /// Key of the score dimension this error refers to, if any.
    pub fn score_key(&self) -> Option<&str> {
        match self {
            JudgeError::MissingScore { key } | JudgeError::InvalidScore { key, .. } => Some(key),
            _ => None,
        }
    }
}

#[cfg(feature = "python")]
impl From<JudgeError> for pyo3::PyErr {
    fn from(err: JudgeError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyKeyError, PyValueError};
        match err {
            JudgeError::MissingScore { key } => {
                PyKeyError::new_err(format!("Missing score: {}", key))
            }
            JudgeError::InvalidScore { key, value, .. } => {
                PyValueError::new_err(format!("Invalid score for {}: {}", key, value))
            }
            JudgeError::InvalidJson(e) => {
                PyValueError::new_err(format!("Invalid JSON in response: {}", e))
            }
            JudgeError::NotAnObject => PyValueError::new_err("Response is not a JSON object"),
        }
    }
}

/// Result type alias for the judgment response normalizer
pub type Result<T> = std::result::Result<T, JudgeError>;
