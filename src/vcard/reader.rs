//! vCard reader.
//!
//! Parses the text produced by [`super::writer`] (and ordinary vCard 3.0
//! files) back into contacts. Only the properties the converter writes are
//! recognized; everything else is skipped.

use crate::domain::{AddressCategory, EmailCategory, PhoneCategory};
use crate::error::{VcardError, VcardResult};
use crate::models::{Contact, EmailEntry, Organization, PhoneEntry, PostalAddress};

/// A logical (unfolded) content line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ContentLine {
    name: String,
    types: Vec<String>,
    value: String,
}

impl ContentLine {
    /// Whether this is `BEGIN:VCARD` / `END:VCARD` for the given marker.
    fn is_marker(&self, name: &str) -> bool {
        self.name == name && self.value.trim().eq_ignore_ascii_case("VCARD")
    }
}

/// Parse every card in `text`.
///
/// # Errors
///
/// Fails on content outside a card, an unterminated card, a line without a
/// `name:value` shape, or a TYPE label outside the known vocabulary.
pub fn parse_cards(text: &str) -> VcardResult<Vec<Contact>> {
    let mut cards = Vec::new();
    let mut current: Option<(usize, Contact)> = None;

    for (line_no, logical) in unfold(text) {
        if logical.trim().is_empty() {
            continue;
        }

        let line = parse_content_line(line_no, &logical)?;

        if current.is_none() {
            if !line.is_marker("BEGIN") {
                return Err(VcardError::MissingBegin { line: line_no });
            }
            current = Some((line_no, Contact::default()));
            continue;
        }

        if line.is_marker("END") {
            if let Some((_, contact)) = current.take() {
                cards.push(contact);
            }
        } else if let Some((_, contact)) = current.as_mut() {
            apply_property(contact, &line)?;
        }
    }

    if let Some((line, _)) = current {
        return Err(VcardError::UnterminatedCard { line });
    }

    Ok(cards)
}

/// Join continuation lines onto the line they continue.
fn unfold(text: &str) -> Vec<(usize, String)> {
    let mut lines: Vec<(usize, String)> = Vec::new();

    for (index, physical) in text.lines().enumerate() {
        let physical = physical.strip_suffix('\r').unwrap_or(physical);
        let continuation = physical.starts_with(' ') || physical.starts_with('\t');

        match lines.last_mut() {
            Some((_, previous)) if continuation => previous.push_str(&physical[1..]),
            _ => lines.push((index + 1, physical.to_string())),
        }
    }

    lines
}

fn parse_content_line(line: usize, logical: &str) -> VcardResult<ContentLine> {
    let colon = find_unquoted(logical, ':').ok_or_else(|| VcardError::MalformedLine {
        line,
        content: logical.to_string(),
    })?;
    let (head, value) = (&logical[..colon], &logical[colon + 1..]);

    let mut segments = split_unquoted(head, ';').into_iter();
    let raw_name = segments.next().unwrap_or_default();
    // Group prefixes such as `item1.TEL` are dropped.
    let name = raw_name
        .rsplit('.')
        .next()
        .unwrap_or(raw_name)
        .trim()
        .to_ascii_uppercase();

    if name.is_empty() {
        return Err(VcardError::MalformedLine {
            line,
            content: logical.to_string(),
        });
    }

    let mut types = Vec::new();
    for param in segments {
        match param.split_once('=') {
            Some((key, values)) if key.trim().eq_ignore_ascii_case("TYPE") => {
                types.extend(
                    values
                        .trim()
                        .trim_matches('"')
                        .split(',')
                        .map(|v| v.trim().to_ascii_uppercase()),
                );
            }
            Some(_) => {}
            // vCard 2.1 style bare parameter, e.g. `TEL;CELL:...`
            None => types.push(param.trim().to_ascii_uppercase()),
        }
    }

    Ok(ContentLine {
        name,
        types,
        value: value.to_string(),
    })
}

fn apply_property(contact: &mut Contact, line: &ContentLine) -> VcardResult<()> {
    match line.name.as_str() {
        "N" => {
            let mut parts = split_structured(&line.value).into_iter();
            let name = &mut contact.name;
            name.family = parts.next().unwrap_or_default();
            name.given = parts.next().unwrap_or_default();
            name.additional = parts.next().unwrap_or_default();
            name.prefix = parts.next().unwrap_or_default();
            name.suffix = parts.next().unwrap_or_default();
        }
        "FN" => contact.formatted_name = unescape(&line.value),
        "ORG" => {
            let mut parts = split_structured(&line.value).into_iter();
            contact.organization = Some(Organization {
                company: parts.next().unwrap_or_default(),
                department: parts.next().unwrap_or_default(),
            });
        }
        "TITLE" => contact.job_title = Some(unescape(&line.value)),
        "EMAIL" => {
            let category = match first_type(line) {
                Some(label) => label.parse::<EmailCategory>().map_err(|_| unknown(line, label))?,
                None => EmailCategory::Internet,
            };
            contact.emails.push(EmailEntry {
                address: unescape(&line.value),
                category,
            });
        }
        "TEL" => {
            let category = match first_type(line) {
                Some(label) => label.parse::<PhoneCategory>().map_err(|_| unknown(line, label))?,
                None => PhoneCategory::Voice,
            };
            contact.phones.push(PhoneEntry::new(unescape(&line.value), category));
        }
        "ADR" => {
            let category = match first_type(line) {
                Some(label) => {
                    label.parse::<AddressCategory>().map_err(|_| unknown(line, label))?
                }
                None => AddressCategory::Work,
            };
            let mut parts = split_structured(&line.value).into_iter();
            let mut address = PostalAddress::empty(category);
            address.po_box = parts.next().unwrap_or_default();
            address.extended = parts.next().unwrap_or_default();
            address.street = parts.next().unwrap_or_default();
            address.city = parts.next().unwrap_or_default();
            address.region = parts.next().unwrap_or_default();
            address.postal_code = parts.next().unwrap_or_default();
            address.country = parts.next().unwrap_or_default();
            contact.addresses.push(address);
        }
        _ => {}
    }

    Ok(())
}

/// First TYPE label that is not the PREF marker.
fn first_type(line: &ContentLine) -> Option<&str> {
    line.types
        .iter()
        .map(String::as_str)
        .find(|label| !label.is_empty() && *label != "PREF")
}

fn unknown(line: &ContentLine, label: &str) -> VcardError {
    VcardError::UnknownCategory {
        property: line.name.clone(),
        value: label.to_string(),
    }
}

/// Split a structured value on unescaped semicolons and unescape each part.
fn split_structured(value: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut escaped = false;

    for ch in value.chars() {
        if escaped {
            current.push('\\');
            current.push(ch);
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == ';' {
            parts.push(unescape(&current));
            current.clear();
        } else {
            current.push(ch);
        }
    }
    if escaped {
        current.push('\\');
    }
    parts.push(unescape(&current));

    parts
}

/// Reverse text escaping.
pub fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}

fn find_unquoted(text: &str, needle: char) -> Option<usize> {
    let mut quoted = false;
    for (index, ch) in text.char_indices() {
        match ch {
            '"' => quoted = !quoted,
            c if c == needle && !quoted => return Some(index),
            _ => {}
        }
    }
    None
}

fn split_unquoted(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut quoted = false;

    for (index, ch) in text.char_indices() {
        match ch {
            '"' => quoted = !quoted,
            c if c == separator && !quoted => {
                parts.push(&text[start..index]);
                start = index + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);

    parts
}
