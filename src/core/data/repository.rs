use std::collections::BTreeMap;

use super::item::{OrderedItem, Translations};

/// `module -> language -> key/value pairs`.
pub type ValueMap = BTreeMap<String, BTreeMap<String, Translations>>;

/// `module -> language -> comments and entries in source order`.
pub type RawMap = BTreeMap<String, BTreeMap<String, Vec<OrderedItem>>>;

/// Everything loaded from the master directory.
///
/// Built once by the loader and only read afterwards. Both maps are filled
/// from the same file contents, so they always hold the same
/// (module, language) pairs.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    /// Every language directory, sorted, including ones without module files.
    pub languages: Vec<String>,
    pub values: ValueMap,
    pub raw: RawMap,
}

impl Repository {
    /// Module names in sorted order.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Key/value pairs of `module` for `language`, if that file exists.
    pub fn translations(&self, module: &str, language: &str) -> Option<&Translations> {
        self.values.get(module)?.get(language)
    }

    /// Ordered items of `module` for `language`, if that file exists.
    pub fn items(&self, module: &str, language: &str) -> Option<&[OrderedItem]> {
        self.raw
            .get(module)?
            .get(language)
            .map(|items| items.as_slice())
    }

    /// Record one parsed master file under `[module][language]`.
    pub fn insert(
        &mut self,
        module: &str,
        language: &str,
        translations: Translations,
        items: Vec<OrderedItem>,
    ) {
        self.values
            .entry(module.to_string())
            .or_default()
            .insert(language.to_string(), translations);
        self.raw
            .entry(module.to_string())
            .or_default()
            .insert(language.to_string(), items);
    }

    /// Number of (module, language) pairs loaded.
    pub fn file_count(&self) -> usize {
        self.values.values().map(|langs| langs.len()).sum()
    }
}
