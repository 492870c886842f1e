//! vCard 3.0 text grammar.
//!
//! - **writer**: renders a [`Contact`](crate::models::Contact) as a card
//! - **reader**: parses cards back, used to verify written output

pub mod reader;
pub mod writer;

pub use reader::parse_cards;
pub use writer::{to_vcard, write_vcard};
