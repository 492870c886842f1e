use crate::domain::ContactFileName;
use crate::error::RowResult;
use std::path::PathBuf;

/// Destination for serialized contacts.
///
/// Provides abstraction over where artifacts are persisted, enabling
/// different implementations (output directory, in-memory mock).
pub trait ContactSink {
    /// Store one serialized card under `name`, replacing any earlier card
    /// stored under the same name. Returns the location written.
    fn write(&self, name: &ContactFileName, vcard: &str) -> RowResult<PathBuf>;
}
