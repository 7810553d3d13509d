//! High-level operations.
//!
//! This module contains the implementation of uiwrap commands.

pub mod configure;

pub use configure::{configure, run_invocations, ConfigurePlan, ConfigureResult, InvocationFailure};
