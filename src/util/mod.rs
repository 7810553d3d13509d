//! Shared utilities

pub mod config;
pub mod context;
pub mod diagnostic;
pub mod flags;

pub use config::Config;
pub use context::GlobalContext;
pub use diagnostic::Diagnostic;
