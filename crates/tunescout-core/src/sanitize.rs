//! Sanitization of lyrics lookup identifiers.

use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("disallowed chars pattern"));

/// Removes every character outside `[A-Za-z0-9_\s-]`, then trims.
pub fn sanitize_identifier(value: &str) -> String {
    DISALLOWED_CHARS_RE.replace_all(value, "").trim().to_string()
}
