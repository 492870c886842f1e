//! Maps a decoded [`Row`] onto a [`Contact`].

use super::columns::{
    AddressColumns, ADDRESS_COLUMNS, COMPANY, DEPARTMENT, EMAIL_COLUMNS, FIRST_NAME, JOB_TITLE,
    LAST_NAME, MIDDLE_NAME, PHONE_COLUMNS, SUFFIX, TITLE,
};
use crate::models::{
    Contact, EmailEntry, Organization, PhoneEntry, PostalAddress, Row, StructuredName,
};

/// Placeholder used in progress lines for an absent name column.
const UNKNOWN: &str = "Unknown";

/// Build a contact from one row.
///
/// Lookups never fail: a missing column, or one a short record did not
/// reach, reads as the empty string.
pub fn map_row(row: &Row) -> Contact {
    let mut contact = Contact::new(map_name(row));
    contact.organization = map_organization(row);
    contact.job_title = map_job_title(row);
    contact.emails = map_emails(row);
    contact.phones = map_phones(row);
    contact.addresses = map_addresses(row);

    contact
}

/// Text identifying the row in progress output: first and last name, each
/// replaced by `Unknown` only when the column is absent.
pub fn progress_label(row: &Row) -> String {
    format!(
        "{} {}",
        row.lookup(FIRST_NAME).unwrap_or(UNKNOWN),
        row.lookup(LAST_NAME).unwrap_or(UNKNOWN)
    )
}

fn map_name(row: &Row) -> StructuredName {
    StructuredName {
        family: row.get(LAST_NAME).to_string(),
        given: row.get(FIRST_NAME).to_string(),
        additional: row.get(MIDDLE_NAME).to_string(),
        prefix: row.get(TITLE).to_string(),
        suffix: row.get(SUFFIX).to_string(),
    }
}

fn map_organization(row: &Row) -> Option<Organization> {
    let company = row.get(COMPANY);
    let department = row.get(DEPARTMENT);

    if company.trim().is_empty() && department.trim().is_empty() {
        return None;
    }

    Some(Organization {
        company: company.to_string(),
        department: department.to_string(),
    })
}

// The title is kept whenever the raw value is non-empty, whitespace included.
fn map_job_title(row: &Row) -> Option<String> {
    let title = row.get(JOB_TITLE);
    (!title.is_empty()).then(|| title.to_string())
}

fn map_emails(row: &Row) -> Vec<EmailEntry> {
    EMAIL_COLUMNS
        .iter()
        .map(|column| row.get_trimmed(column))
        .filter(|address| !address.is_empty())
        .map(EmailEntry::internet)
        .collect()
}

fn map_phones(row: &Row) -> Vec<PhoneEntry> {
    PHONE_COLUMNS
        .iter()
        .filter_map(|(column, category)| {
            let number = row.get_trimmed(column);
            (!number.is_empty()).then(|| PhoneEntry::new(number, *category))
        })
        .collect()
}

fn map_addresses(row: &Row) -> Vec<PostalAddress> {
    ADDRESS_COLUMNS
        .iter()
        .filter(|group| has_address(row, group))
        .map(|group| map_address(row, group))
        .collect()
}

fn has_address(row: &Row, group: &AddressColumns) -> bool {
    group
        .all()
        .iter()
        .any(|column| !row.get_trimmed(column).is_empty())
}

fn map_address(row: &Row, group: &AddressColumns) -> PostalAddress {
    PostalAddress {
        category: group.category,
        po_box: row.get_trimmed(group.po_box).to_string(),
        extended: row.get_trimmed(group.street_2).to_string(),
        street: row.get_trimmed(group.street).to_string(),
        city: row.get_trimmed(group.city).to_string(),
        region: row.get_trimmed(group.region).to_string(),
        postal_code: row.get_trimmed(group.postal_code).to_string(),
        country: row.get_trimmed(group.country).to_string(),
    }
}
