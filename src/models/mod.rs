//! Data models for the conversion.
//!
//! This module contains the decoded source [`Row`] and the destination
//! [`Contact`] with its name, organization, email, phone and address parts.

pub mod contact;
pub mod row;

pub use contact::{Contact, EmailEntry, Organization, PhoneEntry, PostalAddress, StructuredName};
pub use row::Row;
