//! Row model: one decoded CSV record keyed by column header.

use serde::Serialize;
use std::fmt;

/// A single record from the source table.
///
/// Fields keep the header order of the source so that diagnostics print the
/// row the way it appeared in the file. When a header name repeats, the last
/// column with that name wins on lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Row {
    /// 1-based record number in the source (the header is not counted)
    pub record: usize,

    /// Column name and value pairs, in header order
    fields: Vec<(String, String)>,
}

impl Row {
    /// Build a row from a header and the record's values.
    ///
    /// Values beyond the header width are dropped. A record shorter than the
    /// header keeps only the columns it reached, so the rest read as absent.
    pub fn from_record<H, V>(record: usize, headers: &[H], values: &[V]) -> Self
    where
        H: AsRef<str>,
        V: AsRef<str>,
    {
        let fields = headers
            .iter()
            .zip(values.iter())
            .map(|(header, value)| (header.as_ref().to_string(), value.as_ref().to_string()))
            .collect();

        Self { record, fields }
    }

    /// Build a row from `(column, value)` pairs.
    pub fn from_pairs<K, V>(record: usize, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        Self { record, fields }
    }

    /// Look up a column, distinguishing an absent column from an empty one.
    pub fn lookup(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Look up a column, defaulting to the empty string when absent.
    pub fn get(&self, column: &str) -> &str {
        self.lookup(column).unwrap_or("")
    }

    /// Look up a column and trim surrounding whitespace.
    pub fn get_trimmed(&self, column: &str) -> &str {
        self.get(column).trim()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {:?}", name, value)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_lookup_defaults_to_empty() {
        let row = Row::from_pairs(1, [("First Name", "Ann")]);
        assert_eq!(row.get("First Name"), "Ann");
        assert_eq!(row.get("Last Name"), "");
        assert_eq!(row.lookup("Last Name"), None);
    }

    #[test]
    fn test_row_trimmed_lookup() {
        let row = Row::from_pairs(1, [("E-mail 1 Address", "  ann@example.com ")]);
        assert_eq!(row.get_trimmed("E-mail 1 Address"), "ann@example.com");
        assert_eq!(row.get("E-mail 1 Address"), "  ann@example.com ");
    }

    #[test]
    fn test_row_duplicate_header_last_wins() {
        let row = Row::from_record(1, &["Notes", "Notes"], &["first", "second"]);
        assert_eq!(row.get("Notes"), "second");
    }

    #[test]
    fn test_row_short_record_reads_missing_as_empty() {
        let row = Row::from_record(2, &["First Name", "Last Name", "Company"], &["Ann"]);
        assert_eq!(row.get("First Name"), "Ann");
        assert_eq!(row.lookup("Company"), None);
        assert_eq!(row.get("Company"), "");
        assert_eq!(row.to_string(), r#"{"First Name": "Ann"}"#);
    }

    #[test]
    fn test_row_long_record_drops_extra_values() {
        let row = Row::from_record(3, &["First Name"], &["Ann", "extra"]);
        assert_eq!(row.to_string(), r#"{"First Name": "Ann"}"#);
    }

    #[test]
    fn test_row_display() {
        let row = Row::from_pairs(1, [("First Name", "Ann"), ("Last Name", "Lee")]);
        assert_eq!(
            row.to_string(),
            r#"{"First Name": "Ann", "Last Name": "Lee"}"#
        );
    }
}
