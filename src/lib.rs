//! csv-vcard - convert address book CSV exports into vCard files.
//!
//! Each CSV row (one contact, columns keyed by header name) is mapped onto a
//! fixed contact schema, rendered as a vCard 3.0 card and written to its own
//! `.vcf` file named after the contact's given name.
//!
//! # Architecture
//!
//! - **models**: Source rows and the destination contact structure
//! - **domain**: Category vocabularies and the sanitized output file name
//! - **mapping**: Column tables and the record mapper
//! - **vcard**: vCard writer and reader
//! - **source**: CSV reading with legacy encoding support
//! - **repositories**: Where serialized cards are stored
//! - **services**: The per-row fail-and-continue conversion loop
//! - **metrics**: Run counters
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod domain;
pub mod error;
pub mod mapping;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod services;
pub mod source;
pub mod vcard;

// Re-export commonly used types
pub use config::Config;
pub use domain::{AddressCategory, ContactFileName, EmailCategory, PhoneCategory};
pub use error::{ConfigError, RowError, SourceError, VcardError};
pub use mapping::map_row;
pub use metrics::{Metrics, MetricsSummary, RowTimer};
pub use models::{Contact, Row};
pub use repositories::{ContactSink, DirectorySink};
pub use services::{ConversionReport, ConversionService, RowOutcome};
pub use source::CsvSource;
pub use vcard::{parse_cards, to_vcard};
