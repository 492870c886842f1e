pub mod mock_contact_sink;

pub use mock_contact_sink::MockContactSink;
