//! PhoneCategory value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The kind of telephone number, as written in a `TEL;TYPE=...` parameter.
///
/// Several source columns may map onto the same category (for example both
/// "Home Fax" and "Business Fax" are [`PhoneCategory::Fax`]).
///
/// # Example
///
/// ```
/// use csv_vcard::domain::PhoneCategory;
///
/// let category: PhoneCategory = "TTY-TDD".parse().unwrap();
/// assert_eq!(category, PhoneCategory::TtyTdd);
/// assert_eq!(category.as_str(), "TTY-TDD");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneCategory {
    Voice,
    Home,
    Cell,
    Pager,
    Fax,
    Work,
    Other,
    Callback,
    Car,
    Isdn,
    Radio,
    TtyTdd,
    Telex,
}

impl PhoneCategory {
    /// Every category, in declaration order.
    pub const ALL: [PhoneCategory; 13] = [
        Self::Voice,
        Self::Home,
        Self::Cell,
        Self::Pager,
        Self::Fax,
        Self::Work,
        Self::Other,
        Self::Callback,
        Self::Car,
        Self::Isdn,
        Self::Radio,
        Self::TtyTdd,
        Self::Telex,
    ];

    /// Get the TYPE parameter label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Voice => "VOICE",
            Self::Home => "HOME",
            Self::Cell => "CELL",
            Self::Pager => "PAGER",
            Self::Fax => "FAX",
            Self::Work => "WORK",
            Self::Other => "OTHER",
            Self::Callback => "CALLBACK",
            Self::Car => "CAR",
            Self::Isdn => "ISDN",
            Self::Radio => "RADIO",
            Self::TtyTdd => "TTY-TDD",
            Self::Telex => "TELEX",
        }
    }
}

impl FromStr for PhoneCategory {
    type Err = ValidationError;

    /// Parse a TYPE label, ignoring ASCII case.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| ValidationError::UnknownPhoneCategory(label.to_string()))
    }
}

// Serde support - serialize as label
impl Serialize for PhoneCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

// Serde support - deserialize from label with validation
impl<'de> Deserialize<'de> for PhoneCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_category_labels_round_trip() {
        for category in PhoneCategory::ALL {
            assert_eq!(category.as_str().parse::<PhoneCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_phone_category_case_insensitive() {
        assert_eq!("cell".parse::<PhoneCategory>().unwrap(), PhoneCategory::Cell);
        assert_eq!("tty-tdd".parse::<PhoneCategory>().unwrap(), PhoneCategory::TtyTdd);
    }

    #[test]
    fn test_phone_category_unknown() {
        let err = "SATELLITE".parse::<PhoneCategory>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownPhoneCategory("SATELLITE".to_string()));
    }

    #[test]
    fn test_phone_category_serialization() {
        let json = serde_json::to_string(&PhoneCategory::TtyTdd).unwrap();
        assert_eq!(json, "\"TTY-TDD\"");

        let category: PhoneCategory = serde_json::from_str("\"FAX\"").unwrap();
        assert_eq!(category, PhoneCategory::Fax);
    }
}
