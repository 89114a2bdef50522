//! Master directory loader.
//!
//! Layout: `<master_root>/<language>/<module>.jsonc`. Languages and modules
//! are visited in sorted order so output does not depend on the filesystem's
//! listing order.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use walkdir::{DirEntry, WalkDir};

use crate::core::{
    Repository,
    parsers::{parse_jsonc_items, parse_jsonc_values},
};

/// Extension of master translation files.
pub const MASTER_FILE_EXTENSION: &str = "jsonc";

/// Load every master file under `master_root`.
///
/// Fails on the first file that cannot be read or parsed; nothing is
/// returned for the other files in that case.
pub fn load_repository(master_root: impl AsRef<Path>) -> Result<Repository> {
    let master_root = master_root.as_ref();

    if !master_root.exists() {
        bail!(
            "Master directory '{}' does not exist.\n\
             Hint: Check your .lingorc.json 'masterRoot' setting.",
            master_root.display()
        );
    }

    if !master_root.is_dir() {
        bail!("'{}' is not a directory.", master_root.display());
    }

    let mut repo = Repository::default();

    for language_entry in sorted_children(master_root)? {
        if !language_entry.file_type().is_dir() {
            continue;
        }
        let language = language_entry.file_name().to_string_lossy().to_string();

        for module_entry in sorted_children(language_entry.path())? {
            let path = module_entry.path();
            if !module_entry.file_type().is_file() || !is_master_file(path) {
                continue;
            }
            let Some(module) = path.file_stem().map(|s| s.to_string_lossy().to_string()) else {
                continue;
            };

            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read master file: {}", path.display()))?;
            let translations = parse_jsonc_values(&content)
                .with_context(|| format!("Failed to parse master file: {}", path.display()))?;
            let items = parse_jsonc_items(&content);

            repo.insert(&module, &language, translations, items);
        }

        repo.languages.push(language);
    }

    Ok(repo)
}

/// Immediate children of `dir`, sorted by file name, symlinks followed.
fn sorted_children(dir: &Path) -> Result<Vec<DirEntry>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| {
            entry.with_context(|| format!("Cannot access directory: {}", dir.display()))
        })
        .collect()
}

fn is_master_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(MASTER_FILE_EXTENSION)
}
