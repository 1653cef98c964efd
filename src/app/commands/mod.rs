pub mod get_ref;
pub mod output;
pub mod render;

/// Version of the JSON run summary layout.
pub const SCHEMA_VERSION: u32 = 1;
