//! Test utilities for uiwrap unit tests.
//!
//! Provides manifest text builders and pre-populated build states so tests
//! can exercise wrap invocations without touching the filesystem.

pub mod fixtures;

use crate::builder::state::BuildState;
use crate::core::source_file::SourceFile;

pub use fixtures::*;

/// Build state rooted at `/src` and `/out` with wrapping enabled.
///
/// - `FORMS`: `A.fl`, `B.fl` (excluded)
/// - `HDRS`: empty
/// - `SRCS`: `main.cxx`
pub fn forms_state() -> BuildState {
    BuildState::new("/src", "/out")
        .with_definition("WRAP_ENABLE", "ON")
        .with_list(
            "FORMS",
            vec![
                SourceFile::new("A", "/src", "fl"),
                SourceFile::new("B", "/src", "fl").with_wrap_exclude(true),
            ],
        )
        .with_list("HDRS", Vec::new())
        .with_list("SRCS", vec![SourceFile::new("main", "/src", "cxx")])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::manifest::Manifest;
    use std::path::Path;

    #[test]
    fn test_fixture_renders_parseable_manifest() {
        let text = ManifestFixture::new("demo")
            .without_definitions()
            .list("FORMS", &["a.fl", "b.fl"])
            .excluded("FORMS", "c.fl")
            .wrap(&["demo", "HDRS", "SRCS", "FORMS"])
            .render();

        let manifest = Manifest::parse(&text, Path::new("/p/Wrap.toml")).unwrap();
        assert!(manifest.definitions.is_empty());
        assert_eq!(manifest.invocations[0].args.len(), 4);
    }
}
