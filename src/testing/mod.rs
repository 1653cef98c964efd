pub mod ports;

pub use ports::{MemoryDocumentStore, MemoryTemplateSource, RecordingEnvPublisher, TestFiles};
