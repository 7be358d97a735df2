//! Data models for extraction output.

mod record;

pub use record::{Director, ExtractionRecord, DEFAULT_ID_TYPE};
