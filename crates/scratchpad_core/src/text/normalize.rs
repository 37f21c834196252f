//! Line-oriented text cleanup.
//!
//! # Responsibility
//! - Strip blank lines from a multi-line text.
//! - Trim and collapse space runs per line.
//!
//! # Invariants
//! - Both transforms are pure, total and idempotent.
//! - Anchoring is per physical line; `\n`, `\r` and `\r\n` all end a line.
//! - Only the literal space character is trimmed or collapsed. Tabs are kept.

use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^[ \t]*\r?\n").expect("valid blank line regex"));
static EDGE_SPACES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^ +| +$").expect("valid edge spaces regex"));
static SPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" {2,}").expect("valid space run regex"));

/// Removes every line made only of spaces and tabs, terminator included.
///
/// A trailing fragment without a terminator is left alone, so `"a\n  "`
/// stays unchanged.
pub fn remove_empty_lines(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    BLANK_LINE_RE.replace_all(text, "").into_owned()
}

/// Strips leading/trailing spaces on every line, then collapses interior
/// runs of spaces to one.
///
/// A line holding only spaces becomes empty but is not removed.
pub fn trim_and_collapse_whitespace(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let trimmed = EDGE_SPACES_RE.replace_all(text, "");
    SPACE_RUN_RE.replace_all(&trimmed, " ").into_owned()
}
