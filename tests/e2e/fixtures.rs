//! Test fixtures for address book exports.
//!
//! Provides the Outlook-style header used by the converter and helpers for
//! building CSV text with proper quoting.

#![allow(dead_code)]

/// Full header of an Outlook contacts export, in export order.
pub const OUTLOOK_HEADERS: &[&str] = &[
    "Title",
    "First Name",
    "Middle Name",
    "Last Name",
    "Suffix",
    "Company",
    "Department",
    "Job Title",
    "Business Street",
    "Business Street 2",
    "Business Street 3",
    "Business City",
    "Business State",
    "Business Postal Code",
    "Business Country",
    "Home Street",
    "Home Street 2",
    "Home Street 3",
    "Home City",
    "Home State",
    "Home Postal Code",
    "Home Country",
    "Other Street",
    "Other Street 2",
    "Other Street 3",
    "Other City",
    "Other State",
    "Other Postal Code",
    "Other Country",
    "Assistant's Phone",
    "Business Fax",
    "Business Phone",
    "Business Phone 2",
    "Callback",
    "Car Phone",
    "Company Main Phone",
    "Home Fax",
    "Home Phone",
    "Home Phone 2",
    "ISDN",
    "Mobile Phone",
    "Other Fax",
    "Other Phone",
    "Pager",
    "Primary Phone",
    "Radio Phone",
    "TTY/TDD Phone",
    "Telex",
    "Business Address",
    "Business Address PO Box",
    "Home Address",
    "Home Address PO Box",
    "Other Address",
    "Other Address PO Box",
    "E-mail 1 Address",
    "E-mail 2 Address",
    "E-mail 3 Address",
    "Notes",
];

/// Build one record under `headers`, leaving unnamed columns empty.
pub fn record(headers: &[&str], values: &[(&str, &str)]) -> Vec<String> {
    headers
        .iter()
        .map(|header| {
            values
                .iter()
                .rev()
                .find(|(column, _)| column == header)
                .map(|(_, value)| value.to_string())
                .unwrap_or_default()
        })
        .collect()
}

/// Render a header and records as CSV text.
pub fn csv_text(headers: &[&str], records: &[Vec<String>]) -> String {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    writer.write_record(headers).expect("write header");
    for record in records {
        writer.write_record(record).expect("write record");
    }
    let bytes = writer.into_inner().expect("flush csv");
    String::from_utf8(bytes).expect("csv is utf-8")
}

/// Render rows against the full Outlook header.
pub fn outlook_csv(rows: &[&[(&str, &str)]]) -> String {
    let records: Vec<Vec<String>> = rows
        .iter()
        .map(|values| record(OUTLOOK_HEADERS, values))
        .collect();
    csv_text(OUTLOOK_HEADERS, &records)
}

/// A contact with every section populated.
pub fn full_contact() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Title", "Dr"),
        ("First Name", "Ann"),
        ("Middle Name", "B"),
        ("Last Name", "Lee"),
        ("Suffix", "PhD"),
        ("Company", "Acme; Sons, Ltd"),
        ("Department", "R&D"),
        ("Job Title", "Chief Engineer"),
        ("E-mail 1 Address", "ann@example.com"),
        ("E-mail 2 Address", "ann.lee@work.example.com"),
        ("E-mail 3 Address", "a.lee@home.example.com"),
        ("Primary Phone", "+44 20 7946 0000"),
        ("Mobile Phone", "+44 7700 900123"),
        ("Business Phone", "+44 20 7946 0001"),
        ("Business Phone 2", "+44 20 7946 0002"),
        ("Business Fax", "+44 20 7946 0003"),
        ("Home Fax", "+44 20 7946 0004"),
        ("TTY/TDD Phone", "+44 20 7946 0005"),
        ("Home Street", "5 Oak Rd"),
        ("Home Street 2", "Flat 2"),
        ("Home City", "York"),
        ("Home Postal Code", "YO1 7HH"),
        ("Home Country", "United Kingdom"),
        ("Business Street", "1 Main St"),
        ("Business Address PO Box", "PO Box 12"),
        ("Business City", "Leeds"),
        ("Business State", "West Yorkshire"),
        ("Business Country", "United Kingdom"),
        ("Notes", "Met at the\nconference"),
    ]
}
