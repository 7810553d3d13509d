//! In-memory build description.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::builder::command::CustomCommand;
use crate::builder::description::BuildDescription;
use crate::core::manifest::Manifest;
use crate::core::source_file::SourceFile;
use crate::core::source_list::{SourceListId, SourceLists};

/// Build state for one configuration run.
///
/// Owns every definition, source list, and declared rule. Invocations
/// borrow it mutably in turn; whatever they commit stays for the rest of
/// the run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildState {
    /// Source directory
    source_dir: String,

    /// Output directory
    output_dir: String,

    /// Build-wide definitions
    definitions: BTreeMap<String, String>,

    /// Source lists
    sources: SourceLists,

    /// Declared rules in declaration order
    commands: Vec<CustomCommand>,
}

impl BuildState {
    /// Create an empty state rooted at the given directories.
    pub fn new(source_dir: impl Into<String>, output_dir: impl Into<String>) -> Self {
        BuildState {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Seed a state from a project manifest.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        BuildState {
            source_dir: manifest.source_dir.clone(),
            output_dir: manifest.output_dir.clone(),
            definitions: manifest.definitions.clone(),
            sources: manifest.sources.clone(),
            commands: Vec::new(),
        }
    }

    /// Builder-style definition.
    pub fn with_definition(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.definitions.insert(key.into(), value.into());
        self
    }

    /// Builder-style source list.
    pub fn with_list(mut self, id: impl Into<SourceListId>, files: Vec<SourceFile>) -> Self {
        let id = id.into();
        self.sources.declare(id.clone());
        for file in files {
            self.sources.push(&id, file);
        }
        self
    }

    pub fn commands(&self) -> &[CustomCommand] {
        &self.commands
    }

    /// Mutable access to source lists between invocations.
    pub fn sources_mut(&mut self) -> &mut SourceLists {
        &mut self.sources
    }
}

impl BuildDescription for BuildState {
    fn definition(&self, key: &str) -> Option<&str> {
        self.definitions.get(key).map(String::as_str)
    }

    fn current_directory(&self) -> &str {
        &self.source_dir
    }

    fn current_output_directory(&self) -> &str {
        &self.output_dir
    }

    fn sources(&self) -> &SourceLists {
        &self.sources
    }

    fn add_source(&mut self, file: SourceFile, list: &SourceListId) {
        self.sources.push(list, file);
    }

    fn add_definition(&mut self, key: &str, value: String) {
        self.definitions.insert(key.to_string(), value);
    }

    fn add_custom_command(&mut self, command: CustomCommand) {
        self.commands.push(command);
    }
}
