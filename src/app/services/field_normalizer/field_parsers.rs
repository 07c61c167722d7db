//! Field parsing utilities for raw record values
//!
//! Milepost-like fields arrive with unit suffixes, stray whitespace, and
//! thousands separators ("MP 10.5", "1,234.5"). Parsing scrubs everything
//! that cannot be part of a signed decimal number before converting.

use regex::Regex;
use std::sync::OnceLock;

/// Characters that survive milepost scrubbing: digits, `.`, `-`
fn milepost_scrub_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^0-9.\-]").expect("static scrub pattern is valid"))
}

/// Parse a milepost-like value into a finite float.
///
/// Returns `None` for empty, unparseable, or non-finite input. Never panics
/// and never errors; the caller decides whether a missing position rejects
/// the record or merely drops a derived value.
pub fn parse_milepost(raw: &str) -> Option<f64> {
    let scrubbed = milepost_scrub_pattern().replace_all(raw, "");
    if scrubbed.is_empty() {
        return None;
    }

    scrubbed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Resolve a text field to its trimmed value or a fixed placeholder.
///
/// Empty and absent values both fall back to the placeholder; the result is
/// never empty when the placeholder is non-empty.
pub fn text_or(value: Option<&str>, placeholder: &str) -> String {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => placeholder.to_string(),
    }
}

/// Resolve an optional text field: trimmed non-empty value or `None`
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_string)
}
