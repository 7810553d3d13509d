//! Named source lists.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::source_file::SourceFile;

/// Identifier of a source list.
///
/// Invocation arguments are plain strings; they become `SourceListId`s as
/// soon as they enter the crate and are compared as such from then on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceListId(String);

impl SourceListId {
    pub fn new(name: impl Into<String>) -> Self {
        SourceListId(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceListId {
    fn from(s: &str) -> Self {
        SourceListId::new(s)
    }
}

/// Every source list known to a build description, keyed by id.
///
/// Files inside a list keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceLists {
    lists: BTreeMap<SourceListId, Vec<SourceFile>>,
}

impl SourceLists {
    pub fn new() -> Self {
        SourceLists {
            lists: BTreeMap::new(),
        }
    }

    /// Declare a list, keeping any files it already holds.
    pub fn declare(&mut self, id: SourceListId) {
        self.lists.entry(id).or_default();
    }

    pub fn get(&self, id: &SourceListId) -> Option<&[SourceFile]> {
        self.lists.get(id).map(Vec::as_slice)
    }

    pub fn get_mut(&mut self, id: &SourceListId) -> Option<&mut Vec<SourceFile>> {
        self.lists.get_mut(id)
    }

    pub fn contains(&self, id: &SourceListId) -> bool {
        self.lists.contains_key(id)
    }

    /// Append a file, creating the list if it does not exist yet.
    pub fn push(&mut self, id: &SourceListId, file: SourceFile) {
        self.lists.entry(id.clone()).or_default().push(file);
    }

    /// Number of files in a list (0 for unknown lists).
    pub fn len_of(&self, id: &SourceListId) -> usize {
        self.lists.get(id).map_or(0, Vec::len)
    }

    /// List ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &SourceListId> {
        self.lists.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
