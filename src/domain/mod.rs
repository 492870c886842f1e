//! Domain value objects and types.
//!
//! This module contains the controlled vocabularies used to tag emails,
//! phone numbers and postal addresses, plus the sanitized file name an
//! output artifact is stored under. Category labels parse from and render
//! to the exact upper-case strings used in vCard TYPE parameters.

pub mod address;
pub mod email;
pub mod errors;
pub mod file_name;
pub mod phone;

pub use address::AddressCategory;
pub use email::EmailCategory;
pub use errors::ValidationError;
pub use file_name::ContactFileName;
pub use phone::PhoneCategory;
