//! Readable messages from the service's error documents.
//!
//! Validation errors arrive wrapped in repeated context prefixes, e.g.
//! `"validation failure list:\nvalidation failure list:\nname.1 in body ..."`.
//! Only the innermost line is worth showing to a caller.

/// Return the last non-empty line of `raw`, trimmed.
///
/// Empty or whitespace-only input yields an empty string.
pub fn extract_error_message(raw: &str) -> String {
    raw.trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .last()
        .unwrap_or_default()
        .to_string()
}
