//! Common utility functions shared across the codebase.

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result};

/// Converts an underscore-delimited name to PascalCase.
///
/// Each `_`-separated segment gets its first character uppercased; the rest
/// of the segment is left as is.
///
/// # Examples
///
/// ```
/// use lingo::utils::to_pascal_case;
///
/// assert_eq!(to_pascal_case("common"), "Common");
/// assert_eq!(to_pascal_case("user_profile"), "UserProfile");
/// assert_eq!(to_pascal_case("myHTTP_api"), "MyHTTPApi");
/// ```
pub fn to_pascal_case(name: &str) -> String {
    name.split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Escapes text for an Android string resource body.
///
/// `&`, `<`, `>` and `"` become XML entities. `'` becomes `\'`, which is
/// Android's own string-resource escape rather than an XML entity.
///
/// # Examples
///
/// ```
/// use lingo::utils::escape_xml;
///
/// assert_eq!(escape_xml("Tom & Jerry's <b>"), "Tom &amp; Jerry\\'s &lt;b&gt;");
/// ```
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("\\'"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Lexically normalizes a path: drops `.` components and resolves `..`
/// against the preceding component where there is one.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Deletes `dir` and everything below it, if it exists.
pub fn remove_dir_if_exists(dir: &Path) -> Result<bool> {
    if !dir.exists() {
        return Ok(false);
    }
    fs::remove_dir_all(dir)
        .with_context(|| format!("Failed to remove directory: {}", dir.display()))?;
    Ok(true)
}

/// Writes `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Creates `dir` and its parents.
pub fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))
}
