//! The `wrap_ui` command.
//!
//! A wrap invocation turns interface definition files into generated
//! header/implementation pairs in two passes:
//!
//! 1. [`WrapUi::initial_pass`] validates the invocation, selects eligible
//!    files, and registers the generated files into the target's header and
//!    source lists.
//! 2. [`WrapUi::final_pass`] declares one generator rule per pair and
//!    extends the published list of generated files.
//!
//! ```rust,ignore
//! let mut state = BuildState::from_manifest(&manifest);
//! let wrap = WrapUi::initial_pass(&["viewer", "HDRS", "SRCS", "FORMS"], &mut state, &options)?;
//! let emission = wrap.final_pass(&mut state);
//! ```

pub mod emit;
pub mod errors;
pub mod expand;
pub mod pair;

use serde::{Deserialize, Serialize};

use crate::builder::description::BuildDescription;
use crate::core::request::WrapRequest;

pub use emit::{emit, Emission};
pub use errors::{WrapError, WrapErrorKind};
pub use expand::{check_enabled, expand, register};
pub use pair::GeneratedPair;

/// Default generator command recorded in rules.
pub const DEFAULT_GENERATOR: &str = "${WRAP_GENERATOR_EXE}";

/// Definition that must be true for wrapping to run.
pub const DEFAULT_ENABLE_VARIABLE: &str = "WRAP_ENABLE";

/// Definition the generated file list is published under.
pub const DEFAULT_PUBLISHED_VARIABLE: &str = "GENERATED_WRAPPED_FILES";

/// Knobs of a wrap invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapOptions {
    /// Generator command, usually an unresolved placeholder
    pub generator: String,

    /// Extension of generated headers
    pub header_extension: String,

    /// Extension of generated implementation files
    pub impl_extension: String,

    /// Enable switch definition
    pub enable_variable: String,

    /// Published list definition
    pub published_variable: String,
}

impl Default for WrapOptions {
    fn default() -> Self {
        WrapOptions {
            generator: DEFAULT_GENERATOR.to_string(),
            header_extension: "h".to_string(),
            impl_extension: "cxx".to_string(),
            enable_variable: DEFAULT_ENABLE_VARIABLE.to_string(),
            published_variable: DEFAULT_PUBLISHED_VARIABLE.to_string(),
        }
    }
}

/// A wrap invocation that passed its initial pass.
#[derive(Debug, Clone)]
pub struct WrapUi {
    request: WrapRequest,
    pairs: Vec<GeneratedPair>,
    options: WrapOptions,
}

impl WrapUi {
    /// Validate the invocation and register generated sources.
    ///
    /// Fails before touching `description` when the arguments, the enable
    /// switch, or any scan list is invalid.
    pub fn initial_pass<S: AsRef<str>>(
        args: &[S],
        description: &mut dyn BuildDescription,
        options: &WrapOptions,
    ) -> Result<Self, WrapError> {
        let request = WrapRequest::from_args(args)?;
        check_enabled(description, &options.enable_variable)?;

        let pairs = expand(
            &request,
            description.sources(),
            description.current_directory(),
            description.current_output_directory(),
            options,
        )?;
        register(&pairs, &request, description);

        tracing::info!(
            "{}: wrapping {} interface file(s)",
            request.library(),
            pairs.len()
        );

        Ok(WrapUi {
            request,
            pairs,
            options: options.clone(),
        })
    }

    pub fn request(&self) -> &WrapRequest {
        &self.request
    }

    pub fn pairs(&self) -> &[GeneratedPair] {
        &self.pairs
    }

    /// Declare the generator rules and commit the extended published list.
    pub fn final_pass(self, description: &mut dyn BuildDescription) -> Emission {
        let prior = description
            .definition(&self.options.published_variable)
            .map(str::to_string);

        let emission = emit(
            &self.pairs,
            self.request.library(),
            &self.options.generator,
            prior.as_deref(),
        );

        for command in &emission.commands {
            description.add_custom_command(command.clone());
        }
        description.add_definition(&self.options.published_variable, emission.published.clone());

        emission
    }
}

/// Run both passes of one invocation.
pub fn invoke<S: AsRef<str>>(
    args: &[S],
    description: &mut dyn BuildDescription,
    options: &WrapOptions,
) -> Result<Emission, WrapError> {
    Ok(WrapUi::initial_pass(args, description, options)?.final_pass(description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::state::BuildState;
    use crate::core::source_file::SourceFile;
    use crate::core::source_list::SourceListId;
    use crate::test_support::forms_state;

    fn impl_options() -> WrapOptions {
        WrapOptions {
            impl_extension: "impl".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_included_and_excluded_scenario() {
        let mut state = forms_state();
        let emission = invoke(&["libA", "HDRS", "SRCS", "FORMS"], &mut state, &impl_options())
            .unwrap();

        let hdrs = state.sources().get(&SourceListId::new("HDRS")).unwrap();
        assert_eq!(hdrs.len(), 1);
        assert_eq!(hdrs[0].file_name(), "A.h");
        assert_eq!(state.sources().len_of(&SourceListId::new("SRCS")), 2);

        assert_eq!(state.commands().len(), 1);
        assert_eq!(
            state.commands()[0].args,
            ["-h", "/out/A.h", "-o", "/out/A.impl", "/src/A.fl"]
        );
        assert_eq!(emission.commands, state.commands());
        assert_eq!(
            state.definition(DEFAULT_PUBLISHED_VARIABLE),
            Some("/out/A.h /out/A.impl")
        );
    }

    #[test]
    fn test_counts_match_eligible_files() {
        let mut state = BuildState::new("/src", "/out")
            .with_definition(DEFAULT_ENABLE_VARIABLE, "ON")
            .with_list(
                "FORMS",
                vec![
                    SourceFile::new("a", "/src", "fl"),
                    SourceFile::new("b", "/src", "fl").with_wrap_exclude(true),
                    SourceFile::new("c", "/src", "fl"),
                    SourceFile::new("d", "/src", "fl"),
                ],
            )
            .with_list("HDRS", vec![SourceFile::new("config", "/src", "h")]);

        invoke(&["lib", "HDRS", "SRCS", "FORMS"], &mut state, &WrapOptions::default()).unwrap();

        assert_eq!(state.sources().len_of(&SourceListId::new("HDRS")), 1 + 3);
        assert_eq!(state.sources().len_of(&SourceListId::new("SRCS")), 3);
        assert_eq!(state.commands().len(), 3);
        assert!(state.commands().iter().all(|c| c.trigger != "/src/b.fl"));

        for file in state.sources().get(&SourceListId::new("SRCS")).unwrap() {
            let header = format!("/out/{}.h", file.name());
            let interface = format!("/src/{}.fl", file.name());
            assert!(file.depends().contains(&header));
            assert!(file.depends().contains(&interface));
        }
    }

    #[test]
    fn test_undefined_switch_leaves_state_untouched() {
        let mut state = BuildState::new("/src", "/out")
            .with_list("FORMS", vec![SourceFile::new("A", "/src", "fl")]);
        let before = state.sources().clone();

        let err = invoke(&["libA", "HDRS", "SRCS", "FORMS"], &mut state, &WrapOptions::default())
            .unwrap_err();

        assert_eq!(err.kind(), WrapErrorKind::Config);
        assert_eq!(state.sources(), &before);
        assert!(state.commands().is_empty());
        assert_eq!(state.definition(DEFAULT_PUBLISHED_VARIABLE), None);
    }

    #[test]
    fn test_bad_list_leaves_state_untouched() {
        let mut state = forms_state();
        let before = state.sources().clone();

        let err = invoke(
            &["libA", "HDRS", "SRCS", "FORMS", "NOPE"],
            &mut state,
            &WrapOptions::default(),
        )
        .unwrap_err();

        assert_eq!(err.kind(), WrapErrorKind::BadList);
        assert_eq!(state.sources(), &before);
        assert!(state.commands().is_empty());
    }

    #[test]
    fn test_arity_error() {
        let mut state = forms_state();
        let err = invoke(&["libA", "HDRS", "SRCS"], &mut state, &WrapOptions::default())
            .unwrap_err();
        assert_eq!(err.kind(), WrapErrorKind::Arity);
    }

    #[test]
    fn test_published_list_accumulates_across_invocations() {
        let mut state = forms_state().with_list(
            "MORE",
            vec![
                SourceFile::new("C", "/src", "fl"),
                SourceFile::new("D", "/src", "fl"),
            ],
        );
        let options = WrapOptions::default();

        let first = invoke(&["libA", "HDRS", "SRCS", "FORMS"], &mut state, &options).unwrap();
        let second = invoke(&["libB", "HDRS2", "SRCS2", "MORE"], &mut state, &options).unwrap();

        let expected: Vec<String> = first
            .generated
            .iter()
            .chain(second.generated.iter())
            .cloned()
            .collect();
        assert_eq!(
            state.definition(DEFAULT_PUBLISHED_VARIABLE),
            Some(expected.join(" ").as_str())
        );
        assert_eq!(expected.len(), 6);
        assert_eq!(state.commands().len(), 3);
        assert_eq!(state.commands()[2].target, "libB");
    }

    #[test]
    fn test_failed_invocation_keeps_prior_published_list() {
        let mut state = forms_state();
        let options = WrapOptions::default();
        invoke(&["libA", "HDRS", "SRCS", "FORMS"], &mut state, &options).unwrap();
        let published = state.definition(DEFAULT_PUBLISHED_VARIABLE).map(str::to_string);

        assert!(invoke(&["libB", "HDRS", "SRCS", "MISSING"], &mut state, &options).is_err());
        assert_eq!(
            state.definition(DEFAULT_PUBLISHED_VARIABLE).map(str::to_string),
            published
        );
    }

    // Expanding the same list again registers every eligible file a second time.
    #[test]
    fn test_rerun_registers_files_twice() {
        let mut state = forms_state();
        let options = WrapOptions::default();
        let args = ["libA", "HDRS", "SRCS", "FORMS"];

        invoke(&args, &mut state, &options).unwrap();
        invoke(&args, &mut state, &options).unwrap();

        let hdrs = state.sources().get(&SourceListId::new("HDRS")).unwrap();
        assert_eq!(hdrs.len(), 2);
        assert_eq!(hdrs[0], hdrs[1]);
        assert_eq!(state.commands().len(), 2);
        assert_eq!(state.commands()[0].output, state.commands()[1].output);
        assert_eq!(
            state.definition(DEFAULT_PUBLISHED_VARIABLE),
            Some("/out/A.h /out/A.cxx /out/A.h /out/A.cxx")
        );
    }

    #[test]
    fn test_rerun_after_excluding_registers_nothing() {
        let mut state = forms_state();
        let options = WrapOptions::default();
        let args = ["libA", "HDRS", "SRCS", "FORMS"];

        invoke(&args, &mut state, &options).unwrap();

        let forms = state
            .sources_mut()
            .get_mut(&SourceListId::new("FORMS"))
            .unwrap();
        forms.iter_mut().for_each(|file| file.set_wrap_exclude(true));

        let emission = invoke(&args, &mut state, &options).unwrap();
        assert!(emission.commands.is_empty());
        assert!(emission.generated.is_empty());
        assert_eq!(state.sources().len_of(&SourceListId::new("HDRS")), 1);
        assert_eq!(state.sources().len_of(&SourceListId::new("SRCS")), 2);
        assert_eq!(state.commands().len(), 1);
        assert_eq!(
            state.definition(DEFAULT_PUBLISHED_VARIABLE),
            Some("/out/A.h /out/A.cxx")
        );
    }

    #[test]
    fn test_scan_list_doubling_as_header_list() {
        let mut state = forms_state();
        invoke(&["libA", "FORMS", "SRCS", "FORMS"], &mut state, &WrapOptions::default()).unwrap();

        let forms = state.sources().get(&SourceListId::new("FORMS")).unwrap();
        let names: Vec<_> = forms.iter().map(SourceFile::file_name).collect();
        assert_eq!(names, ["A.fl", "B.fl", "A.h"]);
        assert_eq!(state.commands().len(), 1);
    }

    #[test]
    fn test_initial_pass_exposes_pairs() {
        let mut state = forms_state();
        let wrap =
            WrapUi::initial_pass(&["libA", "HDRS", "SRCS", "FORMS"], &mut state, &WrapOptions::default())
                .unwrap();
        assert_eq!(wrap.request().library(), "libA");
        assert_eq!(wrap.pairs().len(), 1);
        assert!(state.commands().is_empty());

        let emission = wrap.final_pass(&mut state);
        assert_eq!(emission.generated, ["/out/A.h", "/out/A.cxx"]);
        assert_eq!(state.commands().len(), 1);
    }
}
