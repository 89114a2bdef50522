use indexmap::IndexMap;

/// Key/value pairs of one master file, in source order.
///
/// A key that appears twice keeps its first position and its last value.
pub type Translations = IndexMap<String, String>;

/// One human-visible line of a master file, kept in source order.
///
/// Used where the target format can carry the author's annotations
/// (Android string resources).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderedItem {
    /// A standalone `// comment` line, marker and surrounding whitespace removed.
    Comment(String),
    /// A single-line `"key": "value"` entry. `\"` in the value is already unescaped.
    Entry { key: String, value: String },
}

impl OrderedItem {
    pub fn comment(text: impl Into<String>) -> Self {
        OrderedItem::Comment(text.into())
    }

    pub fn entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        OrderedItem::Entry {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns the key for entries, `None` for comments.
    pub fn key(&self) -> Option<&str> {
        match self {
            OrderedItem::Comment(_) => None,
            OrderedItem::Entry { key, .. } => Some(key),
        }
    }
}
