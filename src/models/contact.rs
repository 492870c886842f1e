//! Contact model representing one converted address book entry.

use crate::domain::{AddressCategory, EmailCategory, PhoneCategory};
use serde::{Deserialize, Serialize};

/// Structured name components (the vCard `N` property).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct StructuredName {
    /// Family (last) name
    pub family: String,

    /// Given (first) name
    pub given: String,

    /// Additional (middle) names
    pub additional: String,

    /// Honorific prefix (e.g. "Dr")
    pub prefix: String,

    /// Honorific suffix (e.g. "Jr")
    pub suffix: String,
}

impl StructuredName {
    /// Build the display name.
    ///
    /// Components are joined with one space in prefix, given, additional,
    /// family, suffix order and only the ends are trimmed. An empty middle
    /// component therefore leaves a doubled space in the result.
    pub fn formatted_name(&self) -> String {
        [
            self.prefix.as_str(),
            self.given.as_str(),
            self.additional.as_str(),
            self.family.as_str(),
            self.suffix.as_str(),
        ]
        .join(" ")
        .trim()
        .to_string()
    }
}

/// Organization and department (the vCard `ORG` property).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Organization {
    pub company: String,
    pub department: String,
}

/// Email address entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailEntry {
    /// The email address
    pub address: String,

    /// TYPE label
    #[serde(default)]
    pub category: EmailCategory,
}

impl EmailEntry {
    /// Create an internet email entry.
    pub fn internet(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            category: EmailCategory::Internet,
        }
    }
}

/// Phone number entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhoneEntry {
    /// The phone number, as written in the source
    pub number: String,

    /// TYPE label
    pub category: PhoneCategory,
}

impl PhoneEntry {
    pub fn new(number: impl Into<String>, category: PhoneCategory) -> Self {
        Self {
            number: number.into(),
            category,
        }
    }
}

/// Postal address entry (the vCard `ADR` property).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostalAddress {
    /// TYPE label
    pub category: AddressCategory,

    #[serde(default)]
    pub po_box: String,

    #[serde(default)]
    pub extended: String,

    #[serde(default)]
    pub street: String,

    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub region: String,

    #[serde(default)]
    pub postal_code: String,

    #[serde(default)]
    pub country: String,
}

impl PostalAddress {
    /// Create an address with every component empty.
    pub fn empty(category: AddressCategory) -> Self {
        Self {
            category,
            po_box: String::new(),
            extended: String::new(),
            street: String::new(),
            city: String::new(),
            region: String::new(),
            postal_code: String::new(),
            country: String::new(),
        }
    }

    /// Components in `ADR` value order.
    pub fn components(&self) -> [&str; 7] {
        [
            &self.po_box,
            &self.extended,
            &self.street,
            &self.city,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
    }
}

/// A converted contact.
///
/// Always carries a structured name and a formatted name; every other
/// section is optional and may be empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Contact {
    /// Structured name
    pub name: StructuredName,

    /// Display name
    pub formatted_name: String,

    /// Company and department
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,

    /// Job title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    /// Email addresses, in source column order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<EmailEntry>,

    /// Phone numbers, in phone table order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<PhoneEntry>,

    /// Postal addresses, at most one per category
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<PostalAddress>,
}

impl Contact {
    /// Create a contact from a structured name, deriving the formatted name.
    pub fn new(name: StructuredName) -> Self {
        let formatted_name = name.formatted_name();
        Self {
            name,
            formatted_name,
            ..Default::default()
        }
    }

    /// Whether any section beyond the name is populated.
    pub fn has_optional_sections(&self) -> bool {
        self.organization.is_some()
            || self.job_title.is_some()
            || !self.emails.is_empty()
            || !self.phones.is_empty()
            || !self.addresses.is_empty()
    }

    /// Get the address for a category, if one was emitted.
    pub fn address(&self, category: AddressCategory) -> Option<&PostalAddress> {
        self.addresses.iter().find(|a| a.category == category)
    }

    /// Get all phone numbers of one category, in order.
    pub fn phones_of(&self, category: PhoneCategory) -> Vec<&str> {
        self.phones
            .iter()
            .filter(|p| p.category == category)
            .map(|p| p.number.as_str())
            .collect()
    }
}
