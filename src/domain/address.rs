//! AddressCategory value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Location category of a postal address (`ADR;TYPE=...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressCategory {
    Home,
    Work,
    Other,
}

impl AddressCategory {
    /// Every category, in the order addresses are emitted.
    pub const ALL: [AddressCategory; 3] = [Self::Home, Self::Work, Self::Other];

    /// Get the TYPE parameter label (the category name upper-cased).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::Work => "WORK",
            Self::Other => "OTHER",
        }
    }
}

impl FromStr for AddressCategory {
    type Err = ValidationError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| ValidationError::UnknownAddressCategory(label.to_string()))
    }
}

impl Serialize for AddressCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AddressCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for AddressCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
