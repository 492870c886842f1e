//! Basic metrics instrumentation for conversion runs.
//!
//! Provides counters for rows seen, written and failed, bytes written, and
//! the time spent converting rows.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for one conversion run.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Rows read from the source, successful or not
    rows_total: Arc<AtomicU64>,

    /// Rows written as a vCard
    rows_written: Arc<AtomicU64>,

    /// Rows skipped because of an error
    rows_failed: Arc<AtomicU64>,

    /// Total bytes of vCard text written
    bytes_written: Arc<AtomicU64>,

    /// Total time spent converting rows, in microseconds
    row_duration_total_us: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            rows_total: Arc::new(AtomicU64::new(0)),
            rows_written: Arc::new(AtomicU64::new(0)),
            rows_failed: Arc::new(AtomicU64::new(0)),
            bytes_written: Arc::new(AtomicU64::new(0)),
            row_duration_total_us: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a row written with its size and duration.
    pub fn record_written(&self, bytes: usize, duration: Duration) {
        self.rows_written.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(bytes as u64, Ordering::Relaxed);
        self.record_row(duration);
    }

    /// Record a row that failed.
    pub fn record_failed(&self, duration: Duration) {
        self.rows_failed.fetch_add(1, Ordering::Relaxed);
        self.record_row(duration);
    }

    fn record_row(&self, duration: Duration) {
        self.rows_total.fetch_add(1, Ordering::Relaxed);
        self.row_duration_total_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    /// Get total rows seen.
    pub fn rows_total(&self) -> u64 {
        self.rows_total.load(Ordering::Relaxed)
    }

    /// Get total rows written.
    pub fn rows_written(&self) -> u64 {
        self.rows_written.load(Ordering::Relaxed)
    }

    /// Get total rows failed.
    pub fn rows_failed(&self) -> u64 {
        self.rows_failed.load(Ordering::Relaxed)
    }

    /// Get total bytes written.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written.load(Ordering::Relaxed)
    }

    /// Get average per-row duration in microseconds.
    pub fn row_duration_avg_us(&self) -> f64 {
        let total = self.row_duration_total_us.load(Ordering::Relaxed);
        let count = self.rows_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            rows_total: self.rows_total(),
            rows_written: self.rows_written(),
            rows_failed: self.rows_failed(),
            bytes_written: self.bytes_written(),
            row_duration_avg_us: self.row_duration_avg_us(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSummary {
    pub rows_total: u64,
    pub rows_written: u64,
    pub rows_failed: u64,
    pub bytes_written: u64,
    pub row_duration_avg_us: f64,
}

/// Helper for timing one row.
pub struct RowTimer {
    start: Instant,
    metrics: Metrics,
}

impl RowTimer {
    /// Start timing a row.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing for a written row.
    pub fn complete(self, bytes: usize) {
        let duration = self.start.elapsed();
        self.metrics.record_written(bytes, duration);
    }

    /// Complete the timing for a failed row.
    pub fn complete_with_error(self) {
        let duration = self.start.elapsed();
        self.metrics.record_failed(duration);
    }
}
