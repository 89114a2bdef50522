//! Platform emitters.
//!
//! Each emitter reads the loaded [`Repository`] and writes one output tree
//! under `<output_root>/<platform>/`:
//!
//! - `ios`: `ios/<Module>.xcstrings`, one catalog per module
//! - `android`: `android/values[-<lang>]/strings_<module>.xml`
//! - `react`: `react/<lang>/<module>.json`

pub mod android;
pub mod ios;
pub mod react;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::{Platform, PlatformNames, Repository};

/// Settings shared by all emitters.
#[derive(Debug, Clone, Copy)]
pub struct EmitContext<'a> {
    pub output_root: &'a Path,
    pub source_language: &'a str,
    pub platform_names: &'a PlatformNames,
}

impl EmitContext<'_> {
    pub fn platform_dir(&self, platform: Platform) -> PathBuf {
        self.output_root.join(platform.dir_name())
    }
}

/// A file written by an emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub platform: Platform,
    pub module: String,
    /// `None` for files that hold every language (iOS catalogs).
    pub language: Option<String>,
    pub path: PathBuf,
}

impl GeneratedFile {
    pub fn new(platform: Platform, module: &str, language: Option<&str>, path: PathBuf) -> Self {
        Self {
            platform,
            module: module.to_string(),
            language: language.map(str::to_string),
            path,
        }
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Run the emitter for `platform`.
pub fn emit(
    platform: Platform,
    repo: &Repository,
    ctx: &EmitContext<'_>,
) -> Result<Vec<GeneratedFile>> {
    match platform {
        Platform::Ios => ios::emit_ios(repo, ctx),
        Platform::Android => android::emit_android(repo, ctx),
        Platform::React => react::emit_react(repo, ctx),
    }
}
