//! `Wrap.toml` project manifest.
//!
//! The manifest seeds a build description: project directories, build-wide
//! definitions, named source lists, and the wrap invocations to run in
//! declaration order.
//!
//! ```toml
//! [project]
//! name = "viewer"
//! output_dir = "build"
//!
//! [definitions]
//! WRAP_ENABLE = "ON"
//!
//! [sources]
//! FORMS = ["main_window.fl", { file = "about.fl", wrap_exclude = true }]
//!
//! [[wrap_ui]]
//! args = ["viewer", "HDRS", "SRCS", "FORMS"]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::core::source_file::SourceFile;
use crate::core::source_list::{SourceListId, SourceLists};

/// Manifest file name.
pub const MANIFEST_NAME: &str = "Wrap.toml";

/// Errors locating a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("could not find `Wrap.toml` in `{}` or any parent directory", dir.display())]
    NotFound { dir: PathBuf },
}

/// Search `start` and its ancestors for `Wrap.toml`.
pub fn find_manifest(start: &Path) -> Result<PathBuf, ManifestError> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(MANIFEST_NAME);
        if candidate.is_file() {
            return Ok(candidate);
        }
        if !current.pop() {
            return Err(ManifestError::NotFound {
                dir: start.to_path_buf(),
            });
        }
    }
}

/// A parsed project manifest with directories resolved.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Project name
    pub name: String,

    /// Directory interface files are read from
    pub source_dir: String,

    /// Directory generated files are written to
    pub output_dir: String,

    /// Build-wide definitions
    pub definitions: BTreeMap<String, String>,

    /// Source lists, files rooted at `source_dir`
    pub sources: SourceLists,

    /// Wrap invocations in declaration order
    pub invocations: Vec<Invocation>,

    /// Directory containing the manifest
    pub manifest_dir: PathBuf,
}

/// One `[[wrap_ui]]` entry: the raw positional arguments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Invocation {
    pub args: Vec<String>,
}

impl Invocation {
    /// Library name, if one was given.
    pub fn library(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    project: RawProject,
    #[serde(default)]
    definitions: BTreeMap<String, String>,
    #[serde(default)]
    sources: BTreeMap<String, Vec<RawSourceEntry>>,
    #[serde(default)]
    wrap_ui: Vec<Invocation>,
}

#[derive(Debug, Deserialize)]
struct RawProject {
    name: String,
    source_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSourceEntry {
    Simple(String),
    Detailed {
        file: String,
        #[serde(default)]
        wrap_exclude: bool,
    },
}

impl Manifest {
    /// Load a manifest from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest: {}", path.display()))?;

        Self::parse(&content, path)
    }

    /// Parse manifest content. Relative directories resolve against the
    /// manifest's own directory.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let raw: RawManifest = toml::from_str(content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        let manifest_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();

        if raw.project.name.trim().is_empty() {
            anyhow::bail!("manifest at {} has an empty project name", path.display());
        }

        let source_dir = resolve_dir(&manifest_dir, raw.project.source_dir.as_deref());
        let output_dir = resolve_dir(
            &manifest_dir,
            Some(raw.project.output_dir.as_deref().unwrap_or(Path::new("build"))),
        );

        let mut sources = SourceLists::new();
        for (list, entries) in raw.sources {
            let id = SourceListId::new(list);
            sources.declare(id.clone());
            for entry in entries {
                let (file, wrap_exclude) = match entry {
                    RawSourceEntry::Simple(file) => (file, false),
                    RawSourceEntry::Detailed { file, wrap_exclude } => (file, wrap_exclude),
                };
                if file.rsplit('/').next().map_or(true, str::is_empty) {
                    anyhow::bail!(
                        "source list `{}` in {} has an entry without a file name: {:?}",
                        id,
                        path.display(),
                        file
                    );
                }
                let file = SourceFile::parse(&file, &source_dir).with_wrap_exclude(wrap_exclude);
                sources.push(&id, file);
            }
        }

        Ok(Manifest {
            name: raw.project.name,
            source_dir,
            output_dir,
            definitions: raw.definitions,
            sources,
            invocations: raw.wrap_ui,
            manifest_dir,
        })
    }
}

/// Join `dir` onto `base` and render with forward slashes, the separator
/// generated paths are built with.
fn resolve_dir(base: &Path, dir: Option<&Path>) -> String {
    let joined = match dir {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) if dir != Path::new(".") => base.join(dir),
        _ => base.to_path_buf(),
    };
    let rendered = joined.to_string_lossy().replace('\\', "/");
    match rendered.trim_end_matches('/') {
        "" => "/".to_string(),
        trimmed => trimmed.to_string(),
    }
}
