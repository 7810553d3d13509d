//! Configuration file support for uiwrap.
//!
//! Two configuration file locations are read:
//! - Global: `~/.uiwrap/config.toml` - User-wide defaults
//! - Project: `.uiwrap/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::wrap::WrapOptions;

/// uiwrap configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Wrap settings
    pub wrap: WrapConfig,
}

/// Settings applied to every wrap invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapConfig {
    /// Generator command recorded in rules (e.g. `${FLTK_FLUID_EXE}`)
    pub generator: Option<String>,

    /// Extension of generated headers
    pub header_extension: Option<String>,

    /// Extension of generated implementation files
    pub impl_extension: Option<String>,

    /// Definition that enables wrapping
    pub enable_variable: Option<String>,

    /// Definition the generated file list is published under
    pub published_variable: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        let wrap = other.wrap;
        if wrap.generator.is_some() {
            self.wrap.generator = wrap.generator;
        }
        if wrap.header_extension.is_some() {
            self.wrap.header_extension = wrap.header_extension;
        }
        if wrap.impl_extension.is_some() {
            self.wrap.impl_extension = wrap.impl_extension;
        }
        if wrap.enable_variable.is_some() {
            self.wrap.enable_variable = wrap.enable_variable;
        }
        if wrap.published_variable.is_some() {
            self.wrap.published_variable = wrap.published_variable;
        }
    }

    /// Wrap options with unset values taken from the defaults.
    pub fn wrap_options(&self) -> WrapOptions {
        let defaults = WrapOptions::default();
        let wrap = &self.wrap;
        WrapOptions {
            generator: wrap.generator.clone().unwrap_or(defaults.generator),
            header_extension: wrap
                .header_extension
                .clone()
                .unwrap_or(defaults.header_extension),
            impl_extension: wrap.impl_extension.clone().unwrap_or(defaults.impl_extension),
            enable_variable: wrap
                .enable_variable
                .clone()
                .unwrap_or(defaults.enable_variable),
            published_variable: wrap
                .published_variable
                .clone()
                .unwrap_or(defaults.published_variable),
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.uiwrap/config.toml)
/// 2. Global config (~/.uiwrap/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

/// Get the global uiwrap config directory (~/.uiwrap).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".uiwrap"))
}

/// Get the global config path (~/.uiwrap/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.uiwrap/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".uiwrap").join("config.toml")
}
