//! Application service layer.
//!
//! Services contain the conversion workflow and orchestrate the record
//! mapper, the vCard writer and the contact sink.

mod conversion_service;
mod report;

pub use conversion_service::{ConversionService, WrittenContact};
pub use report::{ConversionReport, RowOutcome};
