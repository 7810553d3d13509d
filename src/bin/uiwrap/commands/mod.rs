//! Command implementations

pub mod configure;
pub mod files;
pub mod order;

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::GlobalArgs;
use uiwrap::core::Manifest;
use uiwrap::ops::{configure as run_configure, ConfigureResult};
use uiwrap::util::diagnostic::{self, suggestions};
use uiwrap::util::GlobalContext;

/// A finished configuration run and where it came from.
pub struct Session {
    pub ctx: GlobalContext,
    pub manifest_path: PathBuf,
    pub result: ConfigureResult,
}

/// Locate and load the manifest, then run every invocation.
pub fn configure_session(global: &GlobalArgs) -> Result<Session> {
    let mut ctx = GlobalContext::new()?.with_manifest_path(global.manifest_path.clone());
    ctx.set_color(!global.no_color);

    let manifest_path = ctx
        .find_manifest()
        .map_err(|e| anyhow::anyhow!("{}\n{}", e, suggestions::NO_MANIFEST))?;
    let manifest = Manifest::load(&manifest_path)?;

    let config = ctx.load_config(&manifest.manifest_dir);
    let options = config.wrap_options();

    tracing::debug!("using manifest {}", manifest_path.display());
    let result = run_configure(&manifest, &options);

    Ok(Session {
        ctx,
        manifest_path,
        result,
    })
}

impl Session {
    /// Print a diagnostic per failed invocation and fail if there was any.
    pub fn check_failures(&self) -> Result<()> {
        for failure in &self.result.failures {
            let diag = failure
                .error
                .to_diagnostic()
                .with_location(&self.manifest_path)
                .with_context(format!(
                    "in wrap_ui #{}{}",
                    failure.index + 1,
                    failure
                        .library
                        .as_deref()
                        .map(|lib| format!(" ({})", lib))
                        .unwrap_or_default()
                ));
            diagnostic::emit(&diag, self.ctx.color());
        }

        if !self.result.is_success() {
            anyhow::bail!(
                "{} wrap_ui invocation(s) failed",
                self.result.failures.len()
            );
        }
        Ok(())
    }
}
