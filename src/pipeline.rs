//! Build pipeline: reset the output tree, load the master files, run the emitters.
//!
//! Everything runs sequentially. The output root is removed before the master
//! files are loaded, so a run that fails on a malformed file leaves no output
//! behind rather than a mix of old and new files.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::{
    config::Config,
    core::{Platform, PlatformNames, load_repository},
    emitters::{EmitContext, GeneratedFile, emit},
    utils::{normalize_path, remove_dir_if_exists},
};

/// Resolved settings for one build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub master_root: PathBuf,
    pub output_root: PathBuf,
    pub source_language: String,
    pub platform_names: PlatformNames,
    /// Emitters to run, in this order.
    pub platforms: Vec<Platform>,
}

impl BuildOptions {
    /// Options for every platform, taken from `config`. Relative roots are
    /// resolved against `base_dir`.
    pub fn from_config(config: &Config, base_dir: &Path) -> Self {
        Self {
            master_root: base_dir.join(&config.master_root),
            output_root: base_dir.join(&config.output_root),
            source_language: config.source_language.clone(),
            platform_names: config.platform_names.clone(),
            platforms: Platform::all(),
        }
    }

    /// The output root is deleted before loading, so it must not hold the master files.
    pub fn validate(&self) -> Result<()> {
        if self.source_language.trim().is_empty() {
            bail!("Source language must not be empty");
        }
        let master = normalize_path(&self.master_root);
        let output = normalize_path(&self.output_root);
        if master.starts_with(&output) {
            bail!(
                "Output directory '{}' contains the master directory '{}'",
                self.output_root.display(),
                self.master_root.display()
            );
        }
        Ok(())
    }
}

/// What a build did.
#[derive(Debug, Clone, Default)]
pub struct BuildSummary {
    pub modules: Vec<String>,
    pub languages: Vec<String>,
    /// True if a previous output tree was deleted.
    pub cleaned: bool,
    pub files: Vec<GeneratedFile>,
}

impl BuildSummary {
    pub fn files_for(&self, platform: Platform) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter().filter(move |f| f.platform == platform)
    }
}

pub fn build(options: &BuildOptions) -> Result<BuildSummary> {
    options.validate()?;
    let cleaned = remove_dir_if_exists(&options.output_root)?;

    let repo = load_repository(&options.master_root)?;

    let ctx = EmitContext {
        output_root: &options.output_root,
        source_language: &options.source_language,
        platform_names: &options.platform_names,
    };

    let mut files = Vec::new();
    for platform in &options.platforms {
        files.extend(emit(*platform, &repo, &ctx)?);
    }

    Ok(BuildSummary {
        modules: repo.modules().map(str::to_string).collect(),
        languages: repo.languages.clone(),
        cleaned,
        files,
    })
}
