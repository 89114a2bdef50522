//! Order-preserving line scanner for master files.
//!
//! Keeps standalone comments and single-line entries in source order. It
//! does not understand JSON nesting; master files are flat with one entry
//! per line, and anything else is skipped.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::OrderedItem;

// `"key": "value"` - the value runs to the last quote on the line.
static ENTRY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"([^"]+)"\s*:\s*"(.*)""#).unwrap());

const LINE_COMMENT_MARKER: &str = "//";

/// Classification of a single trimmed source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `// text`, with the marker and surrounding whitespace removed (may be empty).
    Comment(&'a str),
    /// `"key": "value"`, value still escaped.
    Entry { key: &'a str, value: &'a str },
    /// Braces, blank lines, multi-line or malformed syntax.
    Other,
}

/// Classify one line of a master file.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    if let Some(rest) = trimmed.strip_prefix(LINE_COMMENT_MARKER) {
        return LineKind::Comment(rest.trim());
    }

    match ENTRY_REGEX.captures(trimmed) {
        Some(captures) => match (captures.get(1), captures.get(2)) {
            (Some(key), Some(value)) => LineKind::Entry {
                key: key.as_str(),
                value: value.as_str(),
            },
            _ => LineKind::Other,
        },
        None => LineKind::Other,
    }
}

/// Parse a master file into comments and entries, in source order.
///
/// Empty comments and unmatched lines produce nothing.
pub fn parse_jsonc_items(content: &str) -> Vec<OrderedItem> {
    content
        .split('\n')
        .filter_map(|line| match classify_line(line) {
            LineKind::Comment("") | LineKind::Other => None,
            LineKind::Comment(text) => Some(OrderedItem::comment(text)),
            LineKind::Entry { key, value } => {
                Some(OrderedItem::entry(key, value.replace("\\\"", "\"")))
            }
        })
        .collect()
}
