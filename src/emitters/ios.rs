//! iOS string catalog (`.xcstrings`) emitter.
//!
//! One catalog per module, holding every language. The key set of a catalog
//! is the union of the module's keys across languages; a language that lacks
//! a key simply has no localization for it.

use std::{collections::BTreeMap, io};

use anyhow::{Context, Result};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};

use super::{EmitContext, GeneratedFile};
use crate::{
    core::{Platform, PlatformNames, Repository, Translations},
    utils::{create_dir, to_pascal_case, write_file},
};

pub const CATALOG_EXTENSION: &str = "xcstrings";
pub const CATALOG_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringCatalog {
    pub source_language: String,
    pub strings: IndexMap<String, CatalogEntry>,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub extraction_state: ExtractionState,
    pub localizations: IndexMap<String, Localization>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtractionState {
    /// Key is maintained by hand, not extracted from source code.
    Manual,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Localization {
    pub string_unit: StringUnit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringUnit {
    pub state: TranslationState,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TranslationState {
    Translated,
}

/// Build the catalog of one module.
///
/// Keys are ordered by first appearance, walking `languages` in order.
/// Empty values get no localization.
pub fn build_catalog(
    translations: &BTreeMap<String, Translations>,
    languages: &[String],
    source_language: &str,
    names: &PlatformNames,
) -> StringCatalog {
    let present: Vec<(&String, &Translations)> = languages
        .iter()
        .filter_map(|lang| translations.get(lang).map(|t| (lang, t)))
        .collect();

    let keys: IndexSet<&String> = present.iter().flat_map(|(_, t)| t.keys()).collect();

    let strings = keys
        .into_iter()
        .map(|key| {
            let localizations = present
                .iter()
                .filter_map(|(lang, t)| {
                    let value = t.get(key).filter(|v| !v.is_empty())?;
                    Some((
                        lang.to_string(),
                        Localization {
                            string_unit: StringUnit {
                                state: TranslationState::Translated,
                                value: names.substitute(value, Platform::Ios),
                            },
                        },
                    ))
                })
                .collect();
            (
                key.clone(),
                CatalogEntry {
                    extraction_state: ExtractionState::Manual,
                    localizations,
                },
            )
        })
        .collect();

    StringCatalog {
        source_language: source_language.to_string(),
        strings,
        version: CATALOG_VERSION.to_string(),
    }
}

/// Pretty printer matching Xcode's layout: two-space indent, `" : "` between
/// object keys and values.
struct XcstringsFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl XcstringsFormatter<'_> {
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl Formatter for XcstringsFormatter<'_> {
    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b" : ")
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }
}

/// Serialize a catalog the way Xcode writes it (no trailing newline).
pub fn render_catalog(catalog: &StringCatalog) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, XcstringsFormatter::new());
    catalog
        .serialize(&mut serializer)
        .context("Failed to serialize string catalog")?;
    String::from_utf8(buf).context("String catalog is not valid UTF-8")
}

/// Catalog file name for a module: `user_profile` -> `UserProfile.xcstrings`.
pub fn catalog_file_name(module: &str) -> String {
    format!("{}.{}", to_pascal_case(module), CATALOG_EXTENSION)
}

pub fn emit_ios(repo: &Repository, ctx: &EmitContext<'_>) -> Result<Vec<GeneratedFile>> {
    let ios_dir = ctx.platform_dir(Platform::Ios);
    create_dir(&ios_dir)?;

    let mut generated = Vec::new();
    for (module, translations) in &repo.values {
        let catalog = build_catalog(
            translations,
            &repo.languages,
            ctx.source_language,
            ctx.platform_names,
        );
        let path = ios_dir.join(catalog_file_name(module));
        write_file(&path, &render_catalog(&catalog)?)?;
        generated.push(GeneratedFile::new(Platform::Ios, module, None, path));
    }

    Ok(generated)
}
