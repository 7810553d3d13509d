//! Generated header/implementation pairs.

use serde::Serialize;

use crate::core::source_file::SourceFile;

/// Generation record for one eligible interface file.
///
/// Carries the interface path together with both generated descriptors so
/// the emission stage never has to line up separate lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPair {
    /// Full path of the interface definition file
    pub interface: String,

    /// Generated header descriptor
    pub header: SourceFile,

    /// Generated implementation descriptor
    pub implementation: SourceFile,
}

impl GeneratedPair {
    /// Build the pair for `interface_file`, placing outputs in `output_dir`.
    ///
    /// The header depends on the interface file; the implementation depends
    /// on the header and the interface file.
    pub fn new(
        interface_file: &SourceFile,
        source_dir: &str,
        output_dir: &str,
        header_extension: &str,
        impl_extension: &str,
    ) -> Self {
        let interface = SourceFile::new(
            interface_file.name(),
            source_dir,
            interface_file.extension(),
        )
        .full_path();

        let mut header = SourceFile::new(interface_file.name(), output_dir, header_extension);
        let mut implementation =
            SourceFile::new(interface_file.name(), output_dir, impl_extension);

        implementation.add_depend(header.full_path());
        implementation.add_depend(interface.clone());
        header.add_depend(interface.clone());

        GeneratedPair {
            interface,
            header,
            implementation,
        }
    }

    pub fn header_path(&self) -> String {
        self.header.full_path()
    }

    pub fn implementation_path(&self) -> String {
        self.implementation.full_path()
    }
}
