//! Lenient JSONC value parser.
//!
//! Comments and a trailing comma are stripped with a fixed sequence of
//! regex passes, then the remainder is parsed as strict JSON. Each pass
//! works on the output of the previous one.
//!
//! The passes are not string-aware: a `//` inside a string value that
//! follows a quote or word character is treated as a comment.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::core::Translations;

// Whole-line comments: `   // text`
static LINE_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*//.*$").unwrap());

// Block comments, possibly spanning lines.
static BLOCK_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

// `"key": "value", // text` keeps the comma.
static COMMA_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m),(\s*)//.*$").unwrap());

// `"key": "value" // text` on the last entry (no comma).
static INLINE_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)(["0-9A-Za-z_])(\s*)//.*$"#).unwrap());

// `,` directly before a closing bracket.
static TRAILING_COMMA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\s*[}\]])").unwrap());

/// Remove comments and a trailing comma so the text parses as strict JSON.
pub fn strip_jsonc(content: &str) -> String {
    let text = LINE_COMMENT_REGEX.replace_all(content, "");
    let text = BLOCK_COMMENT_REGEX.replace_all(&text, "");
    let text = COMMA_COMMENT_REGEX.replace_all(&text, ",${1}");
    let text = INLINE_COMMENT_REGEX.replace_all(&text, "${1}${2}");
    let text = TRAILING_COMMA_REGEX.replace_all(&text, "${1}");
    text.into_owned()
}

/// Parse a master file into its key/value pairs.
///
/// The document must be a single object whose values are all strings.
pub fn parse_jsonc_values(content: &str) -> Result<Translations> {
    let json = strip_jsonc(content);
    serde_json::from_str(&json).context("Invalid JSON after removing comments")
}
