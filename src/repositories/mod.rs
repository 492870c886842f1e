mod directory_sink;
mod traits;

pub use directory_sink::DirectorySink;
pub use traits::ContactSink;
