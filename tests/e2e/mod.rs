//! End-to-end test utilities.
//!
//! This module provides scratch directories and CSV files for tests that
//! run whole conversions against the filesystem.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

pub mod fixtures;

static SCRATCH_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A temporary directory removed when dropped.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    /// Create a fresh, empty directory under the system temp dir.
    pub fn new(label: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "csv-vcard-{}-{}-{}",
            label,
            std::process::id(),
            SCRATCH_COUNTER.fetch_add(1, Ordering::SeqCst)
        ));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).expect("create scratch dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a subdirectory and return its path.
    pub fn subdir(&self, name: &str) -> PathBuf {
        let dir = self.path.join(name);
        fs::create_dir_all(&dir).expect("create subdir");
        dir
    }

    /// Write a file inside the directory and return its path.
    pub fn write_file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let file = self.path.join(name);
        fs::write(&file, contents).expect("write scratch file");
        file
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Sorted names of the regular `.vcf` files in a directory.
pub fn vcf_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read output dir")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".vcf"))
        .collect();
    names.sort();
    names
}
