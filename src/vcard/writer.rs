//! vCard 3.0 writer.
//!
//! Properties are written in a fixed order (N, FN, ORG, TITLE, EMAIL, TEL,
//! ADR) so output diffs cleanly against reference files. Lines end in CRLF
//! and are folded at 75 octets.

use crate::error::{RowError, RowResult};
use crate::models::Contact;
use std::fmt::{self, Write};

/// Version written in every card.
pub const VERSION: &str = "3.0";

/// Maximum octets in one physical line, excluding the CRLF.
pub const MAX_LINE_OCTETS: usize = 75;

const CRLF: &str = "\r\n";

/// Render a contact as a complete vCard.
///
/// # Errors
///
/// Returns `RowError::Serialization` if the text could not be assembled.
pub fn to_vcard(contact: &Contact) -> RowResult<String> {
    let mut out = String::new();
    write_vcard(&mut out, contact).map_err(|e| RowError::Serialization(e.to_string()))?;
    Ok(out)
}

/// Write a contact as a complete vCard into any text sink.
pub fn write_vcard<W: Write>(out: &mut W, contact: &Contact) -> fmt::Result {
    write_line(out, "BEGIN", None, "VCARD")?;
    write_line(out, "VERSION", None, VERSION)?;

    let name = &contact.name;
    write_line(
        out,
        "N",
        None,
        &structured(&[
            name.family.as_str(),
            name.given.as_str(),
            name.additional.as_str(),
            name.prefix.as_str(),
            name.suffix.as_str(),
        ]),
    )?;
    write_line(out, "FN", None, &escape_text(&contact.formatted_name))?;

    if let Some(org) = &contact.organization {
        write_line(
            out,
            "ORG",
            None,
            &structured(&[org.company.as_str(), org.department.as_str()]),
        )?;
    }
    if let Some(title) = &contact.job_title {
        write_line(out, "TITLE", None, &escape_text(title))?;
    }

    for email in &contact.emails {
        write_line(
            out,
            "EMAIL",
            Some(email.category.as_str()),
            &escape_text(&email.address),
        )?;
    }
    for phone in &contact.phones {
        write_line(
            out,
            "TEL",
            Some(phone.category.as_str()),
            &escape_text(&phone.number),
        )?;
    }
    for address in &contact.addresses {
        write_line(
            out,
            "ADR",
            Some(address.category.as_str()),
            &structured(&address.components()),
        )?;
    }

    write_line(out, "END", None, "VCARD")
}

fn write_line<W: Write>(
    out: &mut W,
    name: &str,
    type_param: Option<&str>,
    value: &str,
) -> fmt::Result {
    let mut line = String::with_capacity(name.len() + value.len() + 16);
    line.push_str(name);
    if let Some(label) = type_param {
        line.push_str(";TYPE=");
        line.push_str(&param_value(label));
    }
    line.push(':');
    line.push_str(value);

    out.write_str(&fold_line(&line))?;
    out.write_str(CRLF)
}

/// Escape a text value: backslash, comma, semicolon and line breaks.
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            ',' => escaped.push_str("\\,"),
            ';' => escaped.push_str("\\;"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                escaped.push_str("\\n");
            }
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(ch),
        }
    }

    escaped
}

/// Escape each component and join with bare semicolons.
fn structured(components: &[&str]) -> String {
    components
        .iter()
        .map(|c| escape_text(c))
        .collect::<Vec<_>>()
        .join(";")
}

/// Quote a parameter value when it carries a separator.
fn param_value(value: &str) -> String {
    if value.contains([':', ';', ',']) {
        format!("\"{}\"", value.replace('"', ""))
    } else {
        value.to_string()
    }
}

/// Fold a logical line into physical lines of at most 75 octets.
///
/// Continuation lines start with a single space, which counts toward the
/// limit. Multi-byte characters are never split.
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut folded = String::with_capacity(line.len() + (line.len() / MAX_LINE_OCTETS + 1) * 3);
    let mut width = 0;

    for ch in line.chars() {
        let len = ch.len_utf8();
        if width + len > MAX_LINE_OCTETS {
            folded.push_str(CRLF);
            folded.push(' ');
            width = 1;
        }
        folded.push(ch);
        width += len;
    }

    folded
}
