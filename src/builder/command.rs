//! Custom build rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A declared custom build rule.
///
/// The rule is only a declaration: the build graph owner decides when to
/// run `command` based on `trigger` and `depends`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomCommand {
    /// File whose change triggers the rule
    pub trigger: String,

    /// Program to execute (may be an unresolved `${VAR}` placeholder)
    pub command: String,

    /// Arguments
    pub args: Vec<String>,

    /// Additional inputs the rule must be re-run after
    pub depends: Vec<String>,

    /// Declared output
    pub output: String,

    /// Target the rule belongs to
    pub target: String,
}

impl CustomCommand {
    /// Command line as a single string, for display.
    pub fn command_line(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for CustomCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} -> {}", self.target, self.trigger, self.output)
    }
}
