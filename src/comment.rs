//! Judge comment sanitizer

/// Maximum comment length persisted alongside a judgment, in characters.
pub const DEFAULT_MAX_COMMENT_LEN: usize = 30;

/// Trim and hard-truncate a judge comment to at most `max_len` characters.
///
/// `None` passes through unchanged. Truncation counts Unicode scalar values,
/// not bytes; judge commentary is typically Japanese and a byte cutoff would
/// split a character. Trailing whitespace exposed by the cutoff is removed so
/// the function is a fixed point under repeated application. Never fails.
pub fn sanitize_comment(comment: Option<&str>, max_len: usize) -> Option<String> {
    let trimmed = comment?.trim();
    let cut: String = trimmed.chars().take(max_len).collect();
    Some(cut.trim_end().to_string())
}
