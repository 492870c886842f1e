//! CSV source with legacy encoding support.

use crate::error::{RowError, RowResult, SourceError, SourceResult};
use crate::models::Row;
use csv::{ReaderBuilder, StringRecordsIntoIter};
use encoding_rs::Encoding;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, warn};

/// Encoding label used when none is configured.
///
/// Resolves to windows-1252, the WHATWG superset of ISO-8859-1. Bytes
/// 0x80-0x9F therefore decode to printable characters such as `€` and `“`,
/// not to the C1 controls a strict Latin-1 decode would give.
pub const DEFAULT_ENCODING: &str = "iso-8859-1";

/// Iterator over the rows of a CSV file.
///
/// The whole file is decoded up front; records are then parsed lazily in
/// source order. A record the CSV reader rejects is yielded as an error and
/// iteration continues with the next record.
pub struct CsvSource {
    headers: Vec<String>,
    records: StringRecordsIntoIter<Cursor<Vec<u8>>>,
    next_record: usize,
    replaced_bytes: bool,
}

impl CsvSource {
    /// Open a CSV file and read its header row.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Open` if the file cannot be read,
    /// `SourceError::UnknownEncoding` for an unrecognized label, or
    /// `SourceError::Header` if the header row cannot be parsed.
    pub fn open(path: impl AsRef<Path>, encoding_label: &str) -> SourceResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), bytes = bytes.len(), "Read source table");
        Self::from_bytes(&bytes, encoding_label)
    }

    /// Decode raw bytes and read the header row.
    ///
    /// Undecodable sequences are replaced with U+FFFD. A byte order mark
    /// overrides the configured encoding.
    pub fn from_bytes(bytes: &[u8], encoding_label: &str) -> SourceResult<Self> {
        let encoding = Encoding::for_label(encoding_label.trim().as_bytes())
            .ok_or_else(|| SourceError::UnknownEncoding(encoding_label.to_string()))?;

        let (text, used, replaced_bytes) = encoding.decode(bytes);
        if replaced_bytes {
            warn!(
                encoding = used.name(),
                "Source contains undecodable bytes; replaced with U+FFFD"
            );
        }

        let mut source = Self::from_text(text.into_owned())?;
        source.replaced_bytes = replaced_bytes;
        Ok(source)
    }

    /// Read already decoded CSV text.
    pub fn from_text(text: String) -> SourceResult<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(Cursor::new(text.into_bytes()));

        let headers = reader
            .headers()
            .map_err(|e| SourceError::Header(e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();

        Ok(Self {
            headers,
            records: reader.into_records(),
            next_record: 1,
            replaced_bytes: false,
        })
    }

    /// Column names from the header row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Whether decoding replaced any bytes.
    pub fn had_replacements(&self) -> bool {
        self.replaced_bytes
    }
}

impl Iterator for CsvSource {
    type Item = RowResult<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.records.next()?;
        let record_no = self.next_record;
        self.next_record += 1;

        Some(match result {
            Ok(record) => {
                let values: Vec<&str> = record.iter().collect();
                Ok(Row::from_record(record_no, &self.headers, &values))
            }
            Err(e) => Err(RowError::Csv(format!("record {}: {}", record_no, e))),
        })
    }
}
