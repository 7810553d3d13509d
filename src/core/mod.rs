//! Core data structures for uiwrap.
//!
//! - Source files and typed source lists
//! - Wrap invocation requests
//! - The `Wrap.toml` project manifest

pub mod manifest;
pub mod request;
pub mod source_file;
pub mod source_list;

pub use manifest::{find_manifest, Invocation, Manifest, ManifestError, MANIFEST_NAME};
pub use request::WrapRequest;
pub use source_file::SourceFile;
pub use source_list::{SourceListId, SourceLists};
