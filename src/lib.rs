//! uiwrap - declares code-generation rules for UI interface definitions
//!
//! This crate turns interface definition files listed in a library's source
//! lists into generated header/implementation pairs: it registers the
//! generated files as sources, declares one generator rule per file, and
//! publishes every generated path for later build steps.

pub mod builder;
pub mod core;
pub mod ops;
pub mod util;
pub mod wrap;

/// Test utilities and fixtures for uiwrap unit tests.
///
/// This module is only available when compiling with `--cfg test`.
#[cfg(test)]
pub mod test_support;

pub use builder::{BuildDescription, BuildState, CustomCommand, RuleGraph};
pub use crate::core::{Manifest, SourceFile, SourceListId, SourceLists, WrapRequest};
pub use wrap::{invoke, Emission, GeneratedPair, WrapError, WrapErrorKind, WrapOptions, WrapUi};
