//! Global context for uiwrap operations.
//!
//! Provides centralized access to the working directory, the manifest
//! location, and configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::manifest::{find_manifest, ManifestError};
use crate::util::config::{global_config_path, load_config, project_config_path, Config};

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Explicit manifest path, overriding the upward search
    manifest_path: Option<PathBuf>,

    /// Whether to use colors in output
    color: bool,
}

impl GlobalContext {
    /// Create a new GlobalContext rooted at the process working directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::with_cwd(cwd))
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        GlobalContext {
            cwd,
            manifest_path: None,
            color: true,
        }
    }

    /// Use an explicit manifest instead of searching for one.
    pub fn with_manifest_path(mut self, path: Option<PathBuf>) -> Self {
        self.manifest_path = path.map(|p| if p.is_absolute() { p } else { self.cwd.join(p) });
        self
    }

    /// Set color output.
    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Find `Wrap.toml`, honouring an explicit manifest path.
    pub fn find_manifest(&self) -> Result<PathBuf, ManifestError> {
        match &self.manifest_path {
            Some(path) if path.is_file() => Ok(path.clone()),
            Some(path) => Err(ManifestError::NotFound {
                dir: path.parent().unwrap_or(&self.cwd).to_path_buf(),
            }),
            None => find_manifest(&self.cwd),
        }
    }

    /// Load global and project configuration for the project at `project_root`.
    pub fn load_config(&self, project_root: &Path) -> Config {
        let global = global_config_path();
        load_config(global.as_deref(), &project_config_path(project_root))
    }
}
