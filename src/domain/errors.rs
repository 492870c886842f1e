//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The label is not a known phone category.
    UnknownPhoneCategory(String),

    /// The label is not a known address category.
    UnknownAddressCategory(String),

    /// The label is not a known email category.
    UnknownEmailCategory(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPhoneCategory(label) => write!(f, "Unknown phone category: {}", label),
            Self::UnknownAddressCategory(label) => {
                write!(f, "Unknown address category: {}", label)
            }
            Self::UnknownEmailCategory(label) => write!(f, "Unknown email category: {}", label),
        }
    }
}

impl std::error::Error for ValidationError {}
