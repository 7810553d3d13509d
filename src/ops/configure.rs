//! Run every wrap invocation of a manifest.

use serde::Serialize;

use crate::builder::command::CustomCommand;
use crate::builder::description::BuildDescription;
use crate::builder::state::BuildState;
use crate::core::manifest::{Invocation, Manifest};
use crate::wrap::{invoke, WrapError, WrapOptions};

/// A wrap invocation that failed.
#[derive(Debug, Clone)]
pub struct InvocationFailure {
    /// Position in the manifest, from 0
    pub index: usize,

    /// Library name, when one was given
    pub library: Option<String>,

    pub error: WrapError,
}

/// Outcome of a configuration run.
#[derive(Debug, Clone)]
pub struct ConfigureResult {
    /// Final build state
    pub state: BuildState,

    /// Invocations that failed, in manifest order
    pub failures: Vec<InvocationFailure>,

    /// Published variable name
    pub published_variable: String,
}

/// Serializable view of a configuration run.
#[derive(Debug, Serialize)]
pub struct ConfigurePlan<'a> {
    pub commands: &'a [CustomCommand],
    pub published: Vec<&'a str>,
    pub state: &'a BuildState,
}

impl ConfigureResult {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Paths of the published list, in order.
    pub fn published_files(&self) -> Vec<&str> {
        self.state
            .definition(&self.published_variable)
            .map(|value| value.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn plan(&self) -> ConfigurePlan<'_> {
        ConfigurePlan {
            commands: self.state.commands(),
            published: self.published_files(),
            state: &self.state,
        }
    }
}

/// Run the manifest's invocations in order against a fresh build state.
///
/// A failing invocation is recorded and the run moves on; whatever earlier
/// invocations committed stays in place.
pub fn configure(manifest: &Manifest, options: &WrapOptions) -> ConfigureResult {
    let state = BuildState::from_manifest(manifest);
    run_invocations(state, &manifest.invocations, options)
}

/// Run invocations in order against an existing state.
pub fn run_invocations(
    mut state: BuildState,
    invocations: &[Invocation],
    options: &WrapOptions,
) -> ConfigureResult {
    let mut failures = Vec::new();

    for (index, invocation) in invocations.iter().enumerate() {
        tracing::debug!("wrap_ui({})", invocation.args.join(" "));
        match invoke(invocation.args.as_slice(), &mut state, options) {
            Ok(emission) => {
                tracing::info!(
                    "{}: declared {} rule(s)",
                    invocation.library().unwrap_or("?"),
                    emission.commands.len()
                );
            }
            Err(error) => {
                tracing::debug!("wrap_ui #{} failed: {}", index, error);
                failures.push(InvocationFailure {
                    index,
                    library: invocation.library().map(str::to_string),
                    error,
                });
            }
        }
    }

    ConfigureResult {
        state,
        failures,
        published_variable: options.published_variable.clone(),
    }
}
