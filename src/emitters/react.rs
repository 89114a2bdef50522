//! React flat JSON emitter.

use anyhow::{Context, Result};
use indexmap::IndexMap;

use super::{EmitContext, GeneratedFile};
use crate::{
    core::{Platform, PlatformNames, Repository, Translations},
    utils::{create_dir, write_file},
};

/// Render one `<module>.json` file: keys in source order, values substituted,
/// two-space indentation, no trailing newline.
pub fn render_react_json(translations: &Translations, names: &PlatformNames) -> Result<String> {
    let substituted: IndexMap<&str, String> = translations
        .iter()
        .map(|(key, value)| (key.as_str(), names.substitute(value, Platform::React)))
        .collect();
    serde_json::to_string_pretty(&substituted).context("Failed to serialize JSON")
}

pub fn emit_react(repo: &Repository, ctx: &EmitContext<'_>) -> Result<Vec<GeneratedFile>> {
    let react_dir = ctx.platform_dir(Platform::React);
    let mut generated = Vec::new();

    for language in &repo.languages {
        let language_dir = react_dir.join(language);
        create_dir(&language_dir)?;

        for module in repo.modules() {
            let Some(translations) = repo.translations(module, language) else {
                continue;
            };
            let path = language_dir.join(format!("{}.json", module));
            write_file(&path, &render_react_json(translations, ctx.platform_names)?)?;
            generated.push(GeneratedFile::new(
                Platform::React,
                module,
                Some(language.as_str()),
                path,
            ));
        }
    }

    Ok(generated)
}
