//! Android string resource emitter.
//!
//! Walks the ordered items of each (language, module) file so comments and
//! entry order survive into `strings_<module>.xml`.

use std::fmt::Write;

use anyhow::Result;

use super::{EmitContext, GeneratedFile};
use crate::{
    core::{OrderedItem, Platform, PlatformNames, Repository},
    utils::{create_dir, escape_xml, write_file},
};

const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n";
const XML_FOOTER: &str = "</resources>\n";

/// Resource directory for a language.
///
/// The source language owns the default `values` directory; every other
/// language gets `values-<code>` with the code unchanged.
pub fn values_dir_name(language: &str, source_language: &str) -> String {
    if language == source_language {
        "values".to_string()
    } else {
        format!("values-{}", language)
    }
}

pub fn strings_file_name(module: &str) -> String {
    format!("strings_{}.xml", module)
}

/// Render one `strings_<module>.xml` document from its ordered items.
pub fn render_strings_xml(items: &[OrderedItem], names: &PlatformNames) -> String {
    let mut xml = String::from(XML_HEADER);

    for item in items {
        match item {
            OrderedItem::Comment(text) => {
                let _ = write!(xml, "\n    <!-- {} -->\n", text);
            }
            OrderedItem::Entry { key, value } => {
                let escaped = escape_xml(&names.substitute(value, Platform::Android));
                let _ = writeln!(xml, "    <string name=\"{}\">{}</string>", key, escaped);
            }
        }
    }

    xml.push_str(XML_FOOTER);
    xml
}

pub fn emit_android(repo: &Repository, ctx: &EmitContext<'_>) -> Result<Vec<GeneratedFile>> {
    let android_dir = ctx.platform_dir(Platform::Android);
    let mut generated = Vec::new();

    for language in &repo.languages {
        let values_dir = android_dir.join(values_dir_name(language, ctx.source_language));
        create_dir(&values_dir)?;

        for (module, by_language) in &repo.raw {
            let Some(items) = by_language.get(language) else {
                continue;
            };
            let path = values_dir.join(strings_file_name(module));
            write_file(&path, &render_strings_xml(items, ctx.platform_names))?;
            generated.push(GeneratedFile::new(
                Platform::Android,
                module,
                Some(language.as_str()),
                path,
            ));
        }
    }

    Ok(generated)
}
