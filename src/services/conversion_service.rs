//! Conversion service layer.
//!
//! Drives rows through the record mapper, the vCard writer and a sink. Each
//! row is converted on its own: a failing row is reported and skipped, and
//! the run carries on with the next one.

use super::report::{ConversionReport, RowOutcome};
use crate::domain::ContactFileName;
use crate::error::{RowResult, SourceResult};
use crate::mapping::{map_row, progress_label};
use crate::metrics::{Metrics, RowTimer};
use crate::models::Row;
use crate::repositories::ContactSink;
use crate::source::CsvSource;
use crate::vcard::to_vcard;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// A row that was written successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenContact {
    pub file_name: ContactFileName,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Converts rows to vCards and hands them to a [`ContactSink`].
pub struct ConversionService<S: ContactSink> {
    sink: S,
}

impl<S: ContactSink> ConversionService<S> {
    /// Create a new conversion service.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// The sink artifacts are written to.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Map, serialize and store one row.
    ///
    /// The card is rendered completely in memory before the sink is touched,
    /// so a serialization failure never leaves a file behind.
    pub fn convert_row(&self, row: &Row) -> RowResult<WrittenContact> {
        let contact = map_row(row);
        let vcard = to_vcard(&contact)?;
        let file_name = ContactFileName::from_given_name(&contact.name.given);
        let path = self.sink.write(&file_name, &vcard)?;

        Ok(WrittenContact {
            file_name,
            path,
            bytes: vcard.len(),
        })
    }

    /// Convert every row, in order, collecting one outcome per row.
    pub fn convert<I>(&self, rows: I) -> ConversionReport
    where
        I: IntoIterator<Item = RowResult<Row>>,
    {
        let started_at = Utc::now();
        let metrics = Metrics::new();
        let mut outcomes = Vec::new();

        for (index, next) in rows.into_iter().enumerate() {
            let timer = RowTimer::new(metrics.clone());

            let row = match next {
                Ok(row) => row,
                Err(e) => {
                    error!(record = index + 1, "Error reading contact: {}", e);
                    timer.complete_with_error();
                    outcomes.push(RowOutcome::Failed {
                        record: index + 1,
                        raw_row: None,
                        error: e.to_string(),
                    });
                    continue;
                }
            };

            info!("Processing contact: {}", progress_label(&row));

            match self.convert_row(&row) {
                Ok(written) => {
                    timer.complete(written.bytes);
                    outcomes.push(RowOutcome::Written {
                        record: row.record,
                        file_name: written.file_name,
                        path: written.path,
                        bytes: written.bytes,
                    });
                }
                Err(e) => {
                    error!(record = row.record, "Error processing contact: {}", row);
                    error!(record = row.record, "Exception: {}", e);
                    timer.complete_with_error();
                    outcomes.push(RowOutcome::Failed {
                        record: row.record,
                        raw_row: Some(row.to_string()),
                        error: e.to_string(),
                    });
                }
            }
        }

        let summary = metrics.summary();
        info!(
            rows_total = summary.rows_total,
            rows_written = summary.rows_written,
            rows_failed = summary.rows_failed,
            bytes_written = summary.bytes_written,
            "Conversion finished"
        );

        ConversionReport {
            started_at,
            finished_at: Utc::now(),
            summary,
            outcomes,
        }
    }

    /// Open a CSV file and convert all of its rows.
    ///
    /// # Errors
    ///
    /// Only failing to open or read the source is an error; row failures are
    /// recorded in the report.
    pub fn convert_file(
        &self,
        path: impl AsRef<Path>,
        encoding_label: &str,
    ) -> SourceResult<ConversionReport> {
        let path = path.as_ref();
        let source = CsvSource::open(path, encoding_label)?;
        info!(
            path = %path.display(),
            columns = source.headers().len(),
            "Converting contacts"
        );
        Ok(self.convert(source))
    }
}
