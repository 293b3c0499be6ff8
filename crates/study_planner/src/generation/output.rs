//! Cleanup and parsing of raw model text.

use super::error::GenerationError;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

// Opening fence with an optional language tag, e.g. "```json"
static OPENING_FENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```[A-Za-z0-9_+\-]*[ \t]*\r?\n?").unwrap());
static CLOSING_FENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n?[ \t]*```$").unwrap());

/// Removes a leading and trailing markdown code fence from `text`.
///
/// Text without fences is returned trimmed.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let start = OPENING_FENCE_REGEX
        .find(trimmed)
        .map_or(0, |m| m.end());
    let body = &trimmed[start..];
    let end = CLOSING_FENCE_REGEX
        .find(body)
        .map_or(body.len(), |m| m.start());
    body[..end].trim()
}

/// Strips code fences from `text` and parses what remains as JSON.
pub fn parse_model_output(text: &str) -> Result<Value, GenerationError> {
    serde_json::from_str(strip_code_fences(text)).map_err(|e| GenerationError::MalformedOutput {
        message: e.to_string(),
    })
}
