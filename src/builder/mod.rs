//! Build description and rule declarations.
//!
//! Wrap invocations read and extend a [`BuildDescription`]; [`BuildState`]
//! is the in-memory one used for a configuration run. Declared rules can be
//! ordered through [`RuleGraph`].

pub mod command;
pub mod description;
pub mod graph;
pub mod state;

pub use command::CustomCommand;
pub use description::BuildDescription;
pub use graph::{GraphError, RuleGraph};
pub use state::BuildState;
