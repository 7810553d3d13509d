//! The build-description interface wrap invocations run against.

use crate::builder::command::CustomCommand;
use crate::core::source_file::SourceFile;
use crate::core::source_list::{SourceListId, SourceLists};

/// Read/write access to the build description of the current directory.
///
/// Implementations are driven from a single thread, one invocation at a
/// time; nothing here synchronizes.
pub trait BuildDescription {
    /// Value of a build-wide definition, or `None` when undefined.
    fn definition(&self, key: &str) -> Option<&str>;

    /// Directory interface files are resolved against.
    fn current_directory(&self) -> &str;

    /// Directory generated files are placed in.
    fn current_output_directory(&self) -> &str;

    /// All known source lists.
    fn sources(&self) -> &SourceLists;

    /// Append a file to a source list, creating the list if needed.
    fn add_source(&mut self, file: SourceFile, list: &SourceListId);

    /// Set a build-wide definition, replacing any previous value.
    fn add_definition(&mut self, key: &str, value: String);

    /// Declare a custom build rule.
    fn add_custom_command(&mut self, command: CustomCommand);
}
