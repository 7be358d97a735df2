//! Certificate field extraction module.

mod parser;
pub mod rules;
pub mod sections;

pub use parser::CertificateParser;

use crate::blocks::Block;
use crate::models::ExtractionRecord;

/// Trait for certificate record extractors.
pub trait RecordExtractor {
    /// Extract a record from the OCR block graph.
    fn extract(&self, blocks: &[Block]) -> ExtractionRecord;

    /// Extract a record from an already-linearized line sequence.
    fn extract_from_lines(&self, lines: &[String]) -> ExtractionRecord;
}
