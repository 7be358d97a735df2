//! Extraction record models.
//!
//! The record shape mirrors what the persistence and notification layers
//! consume downstream: scalar fields are explicit nulls when absent, never
//! placeholder strings, and the director list preserves first-detected order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identity document type assigned to directors when none is inferred.
pub const DEFAULT_ID_TYPE: &str = "NRIC";

/// Structured fields extracted from one certificate document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    /// Registered company name.
    pub company_name: Option<String>,

    /// Company registration number (new 12-digit format with the
    /// bracketed old-format suffix where present).
    pub registration_number: Option<String>,

    /// Incorporation date as printed, `DD/MM/YYYY` when normalized.
    pub incorporation_date: Option<String>,

    /// Legal entity type (e.g. `SDN. BHD.`).
    pub company_type: Option<String>,

    /// Business address, joined from its source lines.
    pub business_address: Option<String>,

    /// Business phone number, digits only when re-grouped.
    pub business_phone: Option<String>,

    /// Directors in first-detected order.
    #[serde(default)]
    pub directors: Vec<Director>,
}

/// A director found inside a director-particulars section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Director {
    /// Director name as printed; the dedup key together with `id_number`.
    pub name: String,

    /// Identity document type. Defaulted, not inferred.
    pub id_type: String,

    /// Identity number (12-digit or 6-2-4 hyphenated NRIC shape).
    pub id_number: Option<String>,

    /// Email address; assigned at most once across the whole record.
    pub email: Option<String>,

    /// Consent selection flag written by a downstream step. The engine
    /// never sets it, but it must survive re-serialization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,

    /// Any further fields attached downstream, carried through untouched.
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl Director {
    /// Create a director with only a name; identity and email stay null.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id_type: DEFAULT_ID_TYPE.to_string(),
            id_number: None,
            email: None,
            selected: None,
            extra: Map::new(),
        }
    }
}
