//! ContactFileName value object.

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use std::fmt;

static INVALID_CHARS_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"[^a-zA-Z0-9_]").expect("Failed to compile file name regex")
});

/// Name used when sanitization leaves nothing behind.
pub const UNKNOWN_FILE_NAME: &str = "Unknown";

/// A sanitized base name for an output artifact.
///
/// Built from a contact's given name: spaces become underscores and every
/// character outside `[A-Za-z0-9_]` is dropped. The result is never empty.
///
/// # Example
///
/// ```
/// use csv_vcard::domain::ContactFileName;
///
/// let name = ContactFileName::from_given_name("O'Brien 2nd");
/// assert_eq!(name.as_str(), "OBrien_2nd");
/// assert_eq!(name.file_name(), "OBrien_2nd.vcf");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactFileName(String);

impl ContactFileName {
    /// Extension of every written artifact.
    pub const EXTENSION: &'static str = "vcf";

    /// Sanitize a given name into a file name.
    pub fn from_given_name(given_name: &str) -> Self {
        let underscored = given_name.replace(' ', "_");
        let sanitized = INVALID_CHARS_REGEX.replace_all(&underscored, "");

        if sanitized.is_empty() {
            Self(UNKNOWN_FILE_NAME.to_string())
        } else {
            Self(sanitized.into_owned())
        }
    }

    /// Get the base name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the base name with the `.vcf` extension.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, Self::EXTENSION)
    }
}

impl Serialize for ContactFileName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for ContactFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
