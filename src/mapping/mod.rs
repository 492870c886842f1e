//! Record mapping from source rows to contacts.
//!
//! The column to field mapping is kept as static ordered tables in
//! [`columns`]; [`record_mapper`] walks those tables to build a [`Contact`].
//!
//! [`Contact`]: crate::models::Contact

pub mod columns;
pub mod record_mapper;

pub use record_mapper::{map_row, progress_label};
