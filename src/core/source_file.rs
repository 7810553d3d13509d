//! Source file records held in source lists.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single entry of a source list.
///
/// The name is the file name without its final extension and may carry a
/// relative directory prefix (`forms/main` for `forms/main.fl`). The full
/// path is always `directory/name.extension`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Base name without extension
    name: String,

    /// Extension without the leading dot
    extension: String,

    /// Directory the file lives in
    directory: String,

    /// Excluded from wrapping
    #[serde(default)]
    wrap_exclude: bool,

    /// Full paths this file must be regenerated after
    #[serde(default)]
    depends: Vec<String>,
}

impl SourceFile {
    /// Create a source file from its parts.
    pub fn new(
        name: impl Into<String>,
        directory: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        SourceFile {
            name: name.into(),
            extension: extension.into(),
            directory: directory.into(),
            wrap_exclude: false,
            depends: Vec::new(),
        }
    }

    /// Split a relative file name such as `forms/about.fl` into a record
    /// rooted at `directory`.
    ///
    /// A file without an extension keeps an empty extension.
    pub fn parse(file: &str, directory: impl Into<String>) -> Self {
        let (name, extension) = split_extension(file);
        SourceFile::new(name, directory, extension)
    }

    /// Mark this file as excluded from wrapping.
    pub fn with_wrap_exclude(mut self, exclude: bool) -> Self {
        self.wrap_exclude = exclude;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn wrap_exclude(&self) -> bool {
        self.wrap_exclude
    }

    pub fn set_wrap_exclude(&mut self, exclude: bool) {
        self.wrap_exclude = exclude;
    }

    /// `name.extension`, or just `name` when there is no extension.
    pub fn file_name(&self) -> String {
        if self.extension.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.name, self.extension)
        }
    }

    /// `directory/name.extension`
    pub fn full_path(&self) -> String {
        format!("{}/{}", self.directory, self.file_name())
    }

    pub fn depends(&self) -> &[String] {
        &self.depends
    }

    /// Record a dependency edge on another full path.
    pub fn add_depend(&mut self, path: impl Into<String>) {
        self.depends.push(path.into());
    }
}

impl fmt::Display for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_path())
    }
}

/// Split on the last `.` of the final path component.
fn split_extension(file: &str) -> (&str, &str) {
    let component_start = file.rfind('/').map(|i| i + 1).unwrap_or(0);
    match file[component_start..].rfind('.') {
        // A leading dot names a hidden file, not an extension
        Some(0) | None => (file, ""),
        Some(dot) => {
            let dot = component_start + dot;
            (&file[..dot], &file[dot + 1..])
        }
    }
}
