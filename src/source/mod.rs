//! Tabular input.
//!
//! Reads a header-driven CSV file in a legacy single-byte encoding and
//! yields one [`Row`](crate::models::Row) per record.

pub mod csv_source;

pub use csv_source::{CsvSource, DEFAULT_ENCODING};
