use csv_vcard::domain::ContactFileName;
use csv_vcard::error::{RowError, RowResult};
use csv_vcard::repositories::ContactSink;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock contact sink for testing.
///
/// Provides an in-memory implementation of ContactSink that can be
/// configured to fail for chosen file names and tracks every write for
/// verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactSink {
    cards: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<Mutex<Vec<String>>>,
    failing: Arc<Mutex<HashSet<String>>>,
}

#[allow(dead_code)]
impl MockContactSink {
    /// Create a new empty MockContactSink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write under `name` fail with an I/O error.
    pub fn fail_for(&self, name: &str) {
        self.failing.lock().unwrap().insert(name.to_string());
    }

    /// Get the card stored under a file name (without extension).
    pub fn card(&self, name: &str) -> Option<String> {
        self.cards.lock().unwrap().get(name).cloned()
    }

    /// Number of distinct cards currently stored.
    pub fn card_count(&self) -> usize {
        self.cards.lock().unwrap().len()
    }

    /// File names written, in call order, including overwrites.
    pub fn write_log(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl ContactSink for MockContactSink {
    fn write(&self, name: &ContactFileName, vcard: &str) -> RowResult<PathBuf> {
        let path = PathBuf::from(name.file_name());

        if self.failing.lock().unwrap().contains(name.as_str()) {
            return Err(RowError::Io {
                path,
                source: std::io::Error::new(std::io::ErrorKind::Other, "mock write failure"),
            });
        }

        self.writes.lock().unwrap().push(name.as_str().to_string());
        self.cards
            .lock()
            .unwrap()
            .insert(name.as_str().to_string(), vcard.to_string());
        Ok(path)
    }
}
