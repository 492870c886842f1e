//! Error types for the CSV to vCard converter.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Row-level failures ([`RowError`]) are recoverable and only skip the offending row;
//! source-level failures ([`SourceError`]) abort the run.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a whole conversion run.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The CSV file could not be opened or read
    #[error("Failed to open source table {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The header row could not be read
    #[error("Failed to read CSV headers: {0}")]
    Header(String),

    /// The configured input encoding is not known
    #[error("Unknown input encoding: {0}")]
    UnknownEncoding(String),
}

/// Errors that cause a single row to be skipped.
#[derive(Error, Debug)]
pub enum RowError {
    /// The CSV reader rejected the record
    #[error("CSV record error: {0}")]
    Csv(String),

    /// The contact could not be rendered as vCard text
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Writing the artifact failed
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while reading vCard text back into contacts.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VcardError {
    /// Content appeared before `BEGIN:VCARD`
    #[error("Expected BEGIN:VCARD at line {line}")]
    MissingBegin { line: usize },

    /// A card was opened but never closed
    #[error("Card starting at line {line} has no END:VCARD")]
    UnterminatedCard { line: usize },

    /// A content line has no `name:value` structure
    #[error("Malformed content line {line}: {content}")]
    MalformedLine { line: usize, content: String },

    /// A TYPE parameter carries a label outside the known vocabulary
    #[error("Unknown {property} category: {value}")]
    UnknownCategory { property: String, value: String },
}

/// Convenience type alias for Results with SourceError
pub type SourceResult<T> = Result<T, SourceError>;

/// Convenience type alias for Results with RowError
pub type RowResult<T> = Result<T, RowError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with VcardError
pub type VcardResult<T> = Result<T, VcardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RowError::Csv("record 4: found record with 2 fields".to_string());
        assert_eq!(
            err.to_string(),
            "CSV record error: record 4: found record with 2 fields"
        );

        let err = ConfigError::InvalidValue {
            var: "VCARD_OUTPUT_DIR".to_string(),
            reason: "Cannot be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for VCARD_OUTPUT_DIR: Cannot be empty"
        );

        let err = SourceError::Header("empty file".to_string());
        assert_eq!(err.to_string(), "Failed to read CSV headers: empty file");
    }

    #[test]
    fn test_io_error_variants() {
        let err = RowError::Io {
            path: PathBuf::from("out/Ann.vcf"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("out/Ann.vcf"));
        assert!(err.to_string().contains("denied"));

        let err = SourceError::Open {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.csv"));
    }

    #[test]
    fn test_vcard_error_display() {
        let err = VcardError::UnknownCategory {
            property: "TEL".to_string(),
            value: "SATELLITE".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown TEL category: SATELLITE");
    }
}
