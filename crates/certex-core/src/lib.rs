//! Core library for business-registration certificate OCR processing.
//!
//! This crate provides:
//! - OCR block-graph indexing and line linearization
//! - Party-section scanning (director / member / lodger particulars)
//! - Heuristic field extraction (company name, registration number,
//!   incorporation date, legal type, address, phone, directors)
//!
//! The engine is a pure transformation: one block graph in, one
//! [`ExtractionRecord`] out. Absent fields are `None`, never errors.

pub mod blocks;
pub mod certificate;
pub mod error;
pub mod models;

pub use blocks::{blocks_from_json, linearize, Block, BlockIndex, BlockType};
pub use certificate::{CertificateParser, RecordExtractor};
pub use certificate::sections::{Section, SectionKind, SectionMap};
pub use error::{CertexError, Result};
pub use models::{Director, ExtractionRecord};
