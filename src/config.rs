use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::PlatformNames;

pub const CONFIG_FILE_NAME: &str = ".lingorc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_master_root")]
    pub master_root: String,
    #[serde(default = "default_output_root")]
    pub output_root: String,
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default)]
    pub platform_names: PlatformNames,
}

fn default_master_root() -> String {
    "./master".to_string()
}

fn default_output_root() -> String {
    "./translations".to_string()
}

fn default_source_language() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            master_root: default_master_root(),
            output_root: default_output_root(),
            source_language: default_source_language(),
            platform_names: PlatformNames::default(),
        }
    }
}

impl Config {
    /// Validate the raw path fields. Resolved paths and the source language
    /// are checked by `BuildOptions::validate`.
    pub fn validate(&self) -> Result<()> {
        if self.master_root.trim().is_empty() {
            bail!("'masterRoot' must not be empty");
        }
        if self.output_root.trim().is_empty() {
            bail!("'outputRoot' must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
