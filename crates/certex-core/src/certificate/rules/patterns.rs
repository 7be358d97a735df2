//! Common regex patterns for certificate field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Registration number: 12-digit new format with bracketed old-format suffix
    pub static ref REGISTRATION_FULL: Regex = Regex::new(
        r"^\d{12}\s*\(\d{7}-[A-Z]\)$"
    ).unwrap();

    pub static ref REGISTRATION_EMBEDDED: Regex = Regex::new(
        r"\d{12}\s*\(\d{7}-[A-Z]\)"
    ).unwrap();

    pub static ref REGISTRATION_BARE: Regex = Regex::new(
        r"^\d{12}$"
    ).unwrap();

    pub static ref REGISTRATION_SUFFIX: Regex = Regex::new(
        r"\(\d{7}-[A-Z]\)"
    ).unwrap();

    pub static ref TRAILING_DIGITS: Regex = Regex::new(
        r"(\d+)\s*$"
    ).unwrap();

    // Legal-suffix tokens marking company-name lines
    pub static ref LEGAL_SUFFIX: Regex = Regex::new(
        r"(?i)\bSDN\.?\s*BHD\.?|\bBHD\.?|\bPLT\b"
    ).unwrap();

    // Date shapes accepted for the incorporation date
    pub static ref DATE_SLASH: Regex = Regex::new(
        r"^\d{2}/\d{2}/\d{4}$"
    ).unwrap();

    pub static ref DATE_DASH: Regex = Regex::new(
        r"^\d{2}-\d{2}-\d{4}$"
    ).unwrap();

    pub static ref DATE_COMPACT: Regex = Regex::new(
        r"^\d{8}$"
    ).unwrap();

    // Phone patterns
    pub static ref PHONE_RUN: Regex = Regex::new(
        r"\b\d{8,12}\b"
    ).unwrap();

    pub static ref PHONE_GROUPED: Regex = Regex::new(
        r"\d{2}-\d{4}\s*\d{4}"
    ).unwrap();

    pub static ref PHONE_COUNTRY: Regex = Regex::new(
        r"\+60\s*([\d\s\-]+)"
    ).unwrap();

    pub static ref DIGITS_ONLY: Regex = Regex::new(
        r"^\d{8,}$"
    ).unwrap();

    // Identity numbers: compact NRIC or hyphenated 6-2-4 shape
    pub static ref NRIC_COMPACT: Regex = Regex::new(
        r"^\d{12}$"
    ).unwrap();

    pub static ref NRIC_HYPHENATED: Regex = Regex::new(
        r"^\d{6}-\d{2}-\d{4}$"
    ).unwrap();

    // Email token
    pub static ref EMAIL: Regex = Regex::new(
        r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}"
    ).unwrap();

    // Director-name shapes
    pub static ref UPPERCASE_NAME: Regex = Regex::new(
        r"^[A-Z][A-Z\s]+$"
    ).unwrap();

    pub static ref PATRONYMIC: Regex = Regex::new(
        r"\b(?:A/L|A/P|BIN|BINTI)\b"
    ).unwrap();

    // Address scoring
    pub static ref POSTCODE: Regex = Regex::new(
        r"\b\d{5}\b"
    ).unwrap();

    pub static ref UNIT_DASHED: Regex = Regex::new(
        r"([A-Z])-(\d{1,2})-(\d{2})"
    ).unwrap();

    pub static ref WHITESPACE_RUN: Regex = Regex::new(
        r"\s+"
    ).unwrap();

    pub static ref DUPLICATE_COMMA: Regex = Regex::new(
        r",\s*,"
    ).unwrap();

    /// Weighted address indicators: unit/lot/street/place/building tokens.
    /// Postal codes and the country name are scored separately (higher).
    pub static ref ADDRESS_INDICATORS: Vec<Regex> = [
        // Building/unit patterns
        r"(?i)\b[A-Z]?\d{1,3}-\d{1,3}(?:-\d{1,3})?[A-Z]?\b",
        r"(?i)\bLOT\s+\w+",
        r"(?i)\bUNIT\s+\d+",
        r"(?i)\bNO\.?\s*\d+",
        // Street patterns
        r"(?i)\bJALAN\s+\w+",
        r"(?i)\bPERSIARAN\s+\w+",
        r"(?i)\bLORONG\s+\w+",
        // Area patterns
        r"(?i)\bTAMAN\s+\w+",
        r"(?i)\bBANDAR\s+\w+",
        // Building names
        r"(?i)\bWISMA\s+\w+",
        r"(?i)\bMENARA\s+\w+",
        r"(?i)\bPLAZA\s+\w+",
        r"(?i)\bRESIDENCE\b",
        r"(?i)\bCONDOMINIUM\b",
        // Postal code followed by a place name
        r"\d{5}\s+\w+",
        // States and federal territories
        r"(?i)\bKUALA\s+LUMPUR\b",
        r"(?i)\bSELANGOR\b",
        r"(?i)\bJOHOR\b",
        r"(?i)\bPENANG\b",
        r"(?i)\bPERAK\b",
        r"(?i)\bSABAH\b",
        r"(?i)\bSARAWAK\b",
        r"(?i)\bKEDAH\b",
        r"(?i)\bKELANTAN\b",
        r"(?i)\bTERENGGANU\b",
        r"(?i)\bPAHANG\b",
        r"(?i)\bNEGERI\s+SEMBILAN\b",
        r"(?i)\bMELAKA\b",
        r"(?i)\bPERLIS\b",
        r"(?i)\bPUTRAJAYA\b",
        r"(?i)\bLABUAN\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect();
}
