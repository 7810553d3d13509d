//! Wrap invocation arguments.

use serde::{Deserialize, Serialize};

use crate::core::source_list::SourceListId;
use crate::wrap::errors::WrapError;

/// Minimum positional arguments: library, header list, source list, one scan list.
pub const MIN_ARGS: usize = 4;

/// Parameters of one wrap invocation.
///
/// Built once from the positional invocation arguments
/// `(library, header_list, source_list, scan_list...)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapRequest {
    library: String,
    header_list: SourceListId,
    source_list: SourceListId,
    scan_lists: Vec<SourceListId>,
}

impl WrapRequest {
    /// Parse positional invocation arguments.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, WrapError> {
        if args.len() < MIN_ARGS {
            return Err(WrapError::Arity { given: args.len() });
        }

        Ok(WrapRequest {
            library: args[0].as_ref().to_string(),
            header_list: SourceListId::new(args[1].as_ref()),
            source_list: SourceListId::new(args[2].as_ref()),
            scan_lists: args[3..]
                .iter()
                .map(|name| SourceListId::new(name.as_ref()))
                .collect(),
        })
    }

    pub fn library(&self) -> &str {
        &self.library
    }

    pub fn header_list(&self) -> &SourceListId {
        &self.header_list
    }

    pub fn source_list(&self) -> &SourceListId {
        &self.source_list
    }

    /// Scan lists in invocation order. Never empty.
    pub fn scan_lists(&self) -> &[SourceListId] {
        &self.scan_lists
    }
}
