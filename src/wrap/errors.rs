//! Wrap invocation errors and diagnostics.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::Diagnostic;

/// Error raised by a wrap invocation. Aborts only that invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum WrapError {
    #[error("called with incorrect number of arguments (expected at least 4, got {given})")]
    #[diagnostic(code(uiwrap::wrap::arity))]
    Arity { given: usize },

    #[error("called with {variable} undefined")]
    #[diagnostic(code(uiwrap::wrap::undefined))]
    Undefined { variable: String },

    #[error("called with {variable} off: `{value}`")]
    #[diagnostic(code(uiwrap::wrap::disabled))]
    Disabled { variable: String, value: String },

    #[error("bad source list `{list}` passed to wrap_ui")]
    #[diagnostic(code(uiwrap::wrap::bad_list))]
    BadList { list: String, known: Vec<String> },
}

/// Coarse error classes of a wrap invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapErrorKind {
    /// Too few positional arguments
    Arity,
    /// Enable switch missing or off
    Config,
    /// Unknown scan list
    BadList,
}

impl WrapError {
    pub fn kind(&self) -> WrapErrorKind {
        match self {
            WrapError::Arity { .. } => WrapErrorKind::Arity,
            WrapError::Undefined { .. } | WrapError::Disabled { .. } => WrapErrorKind::Config,
            WrapError::BadList { .. } => WrapErrorKind::BadList,
        }
    }

    /// Convert to a user-facing diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            WrapError::Arity { given } => Diagnostic::error(self.to_string())
                .with_context(format!("received {} argument(s)", given))
                .with_suggestion(
                    "Pass `library header_list source_list scan_list...` to wrap_ui",
                ),

            WrapError::Undefined { variable } => Diagnostic::error(self.to_string())
                .with_suggestion(format!("Add `{} = \"ON\"` under [definitions]", variable)),

            WrapError::Disabled { variable, value } => Diagnostic::error(self.to_string())
                .with_context(format!("`{}` is a false value", value))
                .with_suggestion(format!("Set `{}` to ON to enable wrapping", variable)),

            WrapError::BadList { list, known } => {
                let mut diag = Diagnostic::error(self.to_string());
                if known.is_empty() {
                    diag = diag.with_context("no source lists are defined");
                } else {
                    diag = diag.with_context(format!("known source lists: {}", known.join(", ")));
                }
                diag.with_suggestion(format!("Define `{}` under [sources]", list))
            }
        }
    }
}
