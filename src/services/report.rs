//! Per-run conversion report.

use crate::domain::ContactFileName;
use crate::metrics::MetricsSummary;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Result of converting one source record.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RowOutcome {
    /// The record was written as a vCard
    Written {
        record: usize,
        file_name: ContactFileName,
        path: PathBuf,
        bytes: usize,
    },

    /// The record was skipped
    Failed {
        record: usize,
        /// The record as read, when the CSV reader produced one
        #[serde(skip_serializing_if = "Option::is_none")]
        raw_row: Option<String>,
        error: String,
    },
}

impl RowOutcome {
    /// 1-based record number in the source.
    pub fn record(&self) -> usize {
        match self {
            Self::Written { record, .. } | Self::Failed { record, .. } => *record,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }
}

/// Everything that happened during one conversion run.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub summary: MetricsSummary,
    /// One entry per source record, in source order
    pub outcomes: Vec<RowOutcome>,
}

impl ConversionReport {
    /// Outcomes of records that were written.
    pub fn written(&self) -> impl Iterator<Item = &RowOutcome> {
        self.outcomes.iter().filter(|o| o.is_written())
    }

    /// Outcomes of records that were skipped.
    pub fn failures(&self) -> impl Iterator<Item = &RowOutcome> {
        self.outcomes.iter().filter(|o| !o.is_written())
    }

    /// Whether every record was written.
    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(RowOutcome::is_written)
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
