//! Configuration management for the CSV to vCard converter.
//!
//! This module handles loading and validating configuration from environment
//! variables, optionally seeded from a `.env` file.

use crate::error::{ConfigError, ConfigResult};
use crate::source::DEFAULT_ENCODING;
use encoding_rs::Encoding;
use std::env;
use std::path::PathBuf;

/// Configuration for a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// CSV file to convert (default: "contacts.csv")
    pub input_path: PathBuf,

    /// Directory receiving one `.vcf` per contact (default: "vcards")
    pub output_dir: PathBuf,

    /// Encoding label of the input file (default: "iso-8859-1")
    pub input_encoding: String,

    /// Where to write the JSON run report, if anywhere
    pub report_path: Option<PathBuf>,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `VCARD_INPUT_PATH`: CSV file to convert (default: "contacts.csv")
    /// - `VCARD_OUTPUT_DIR`: Output directory (default: "vcards")
    /// - `VCARD_INPUT_ENCODING`: Input encoding label (default: "iso-8859-1")
    /// - `VCARD_REPORT_PATH`: JSON report destination (default: none)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let input_path = Self::parse_env_path("VCARD_INPUT_PATH")?.unwrap_or(defaults.input_path);
        let output_dir = Self::parse_env_path("VCARD_OUTPUT_DIR")?.unwrap_or(defaults.output_dir);
        let report_path = Self::parse_env_path("VCARD_REPORT_PATH")?;

        let input_encoding =
            env::var("VCARD_INPUT_ENCODING").unwrap_or(defaults.input_encoding);
        Self::validate_encoding(&input_encoding)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            input_path,
            output_dir,
            input_encoding,
            report_path,
            log_level,
        })
    }

    /// Override the input and output locations from positional arguments.
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        if let Some(input) = args.next() {
            self.input_path = PathBuf::from(input);
        }
        if let Some(output) = args.next() {
            self.output_dir = PathBuf::from(output);
        }
        self
    }

    /// Parse an environment variable as a non-empty path.
    fn parse_env_path(var_name: &str) -> ConfigResult<Option<PathBuf>> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(Some(PathBuf::from(val))),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must be valid UTF-8".to_string(),
            }),
        }
    }

    /// Check that the label names an encoding we can decode.
    fn validate_encoding(label: &str) -> ConfigResult<()> {
        if Encoding::for_label(label.trim().as_bytes()).is_none() {
            return Err(ConfigError::InvalidValue {
                var: "VCARD_INPUT_ENCODING".to_string(),
                reason: format!("Unknown encoding label: {}", label),
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: PathBuf::from("contacts.csv"),
            output_dir: PathBuf::from("vcards"),
            input_encoding: DEFAULT_ENCODING.to_string(),
            report_path: None,
            log_level: "info".to_string(),
        }
    }
}
