//! EmailCategory value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Category of an email address. Every mapped address is an internet address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmailCategory {
    #[default]
    Internet,
}

impl EmailCategory {
    /// Get the TYPE parameter label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internet => "INTERNET",
        }
    }
}

impl FromStr for EmailCategory {
    type Err = ValidationError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        if label.eq_ignore_ascii_case("INTERNET") {
            Ok(Self::Internet)
        } else {
            Err(ValidationError::UnknownEmailCategory(label.to_string()))
        }
    }
}

impl Serialize for EmailCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EmailCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
