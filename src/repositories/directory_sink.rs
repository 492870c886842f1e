use crate::domain::ContactFileName;
use crate::error::{RowError, RowResult};
use crate::repositories::traits::ContactSink;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Contact sink writing one `.vcf` file per contact into a directory.
///
/// The directory must already exist. Files are written as UTF-8 and an
/// existing file with the same name is truncated, so the last contact
/// sanitizing to a given name wins.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create a sink for the given output directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path an artifact with this name is written to.
    pub fn path_for(&self, name: &ContactFileName) -> PathBuf {
        self.dir.join(name.file_name())
    }
}

impl ContactSink for DirectorySink {
    fn write(&self, name: &ContactFileName, vcard: &str) -> RowResult<PathBuf> {
        let path = self.path_for(name);

        let written = File::create(&path).and_then(|mut file| {
            file.write_all(vcard.as_bytes())?;
            file.flush()
        });

        if let Err(source) = written {
            // Remove whatever was created so no partial card is left behind.
            if path.exists() {
                let _ = fs::remove_file(&path);
            }
            return Err(RowError::Io { path, source });
        }

        debug!(path = %path.display(), bytes = vcard.len(), "Wrote vCard");
        Ok(path)
    }
}
