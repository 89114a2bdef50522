//! Output platforms, their display names and `{{platform}}` substitution.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Reserved token replaced with the platform display name at emission time.
pub const PLATFORM_PLACEHOLDER: &str = "{{platform}}";

/// Output platform. Each one has its own emitter and display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum Platform {
    Ios,
    Android,
    React,
}

impl Platform {
    pub fn all() -> Vec<Platform> {
        vec![Platform::Ios, Platform::Android, Platform::React]
    }

    /// Human-readable label used in console output.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Android => "Android",
            Platform::React => "React",
        }
    }

    /// Subdirectory of the output root owned by this platform.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::React => "react",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// Display names substituted for [`PLATFORM_PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformNames {
    #[serde(default = "default_ios_name")]
    pub ios: String,
    #[serde(default = "default_android_name")]
    pub android: String,
    #[serde(default = "default_react_name")]
    pub react: String,
}

fn default_ios_name() -> String {
    "iOS".to_string()
}

fn default_android_name() -> String {
    "Android".to_string()
}

fn default_react_name() -> String {
    "React".to_string()
}

impl Default for PlatformNames {
    fn default() -> Self {
        Self {
            ios: default_ios_name(),
            android: default_android_name(),
            react: default_react_name(),
        }
    }
}

impl PlatformNames {
    pub fn get(&self, platform: Platform) -> &str {
        match platform {
            Platform::Ios => &self.ios,
            Platform::Android => &self.android,
            Platform::React => &self.react,
        }
    }

    /// Replace every [`PLATFORM_PLACEHOLDER`] in `text` with the name of `platform`.
    pub fn substitute(&self, text: &str, platform: Platform) -> String {
        substitute_platform(text, self.get(platform))
    }
}

/// Replace every [`PLATFORM_PLACEHOLDER`] in `text` with `name`.
///
/// # Examples
///
/// ```
/// use lingo::core::substitute_platform;
///
/// assert_eq!(substitute_platform("Open {{platform}} settings", "iOS"), "Open iOS settings");
/// assert_eq!(substitute_platform("No token", "iOS"), "No token");
/// ```
pub fn substitute_platform(text: &str, name: &str) -> String {
    text.replace(PLATFORM_PLACEHOLDER, name)
}
