//! Code-fence JSON extractor
//!
//! AI judges are asked for pure JSON but frequently wrap their answer in a
//! markdown code fence, sometimes with explanatory prose around it. This
//! module pulls the most likely JSON payload out of such a response.

use once_cell::sync::Lazy;
use regex::Regex;

/// Fence explicitly tagged as JSON. The tag is the stronger signal of
/// intentional JSON, so it is always tried before the generic fence.
static JSON_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```json\s*\n(.*?)```").expect("valid fence regex"));

/// Untagged fence: backticks followed directly by a newline.
static ANY_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```\s*\n(.*?)```").expect("valid fence regex"));

/// Extract the most likely JSON payload from a raw AI response.
///
/// Text without any triple-backtick marker is assumed to already be raw JSON
/// and is returned unchanged. Otherwise the first `json`-tagged fence wins,
/// then the first generic fence. If a fence marker is present but neither
/// pattern matches (e.g. only a `ruby`-tagged fence), the original text is
/// returned unchanged; extraction never fails.
pub fn extract_json(text: &str) -> &str {
    if !text.contains("```") {
        return text;
    }

    if let Some(caps) = JSON_FENCE.captures(text) {
        if let Some(inner) = caps.get(1) {
            return inner.as_str().trim();
        }
    }

    if let Some(caps) = ANY_FENCE.captures(text) {
        if let Some(inner) = caps.get(1) {
            return inner.as_str().trim();
        }
    }

    text
}
