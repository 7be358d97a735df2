//! Certificate parser combining the block layer with the field rule chains.

use tracing::{debug, info};

use crate::blocks::{blocks_from_json, linearize, Block, BlockIndex};
use crate::error::Result;
use crate::models::ExtractionRecord;

use super::rules::{
    extract_business_address, extract_business_phone, extract_company_name, extract_directors,
    extract_incorporation_date, extract_registration_number, DirectorWindows,
};
use super::sections::SectionMap;
use super::RecordExtractor;

/// Heuristic field extractor over one OCR block graph.
///
/// A pure, synchronous transformation: one call takes one block graph and
/// returns one record, building its own line and section data from scratch
/// and mutating nothing shared. The window sizes are empirically tuned
/// against observed documents and exposed as knobs rather than invariants.
pub struct CertificateParser {
    /// Lines searched past a director-section start for a closing marker.
    director_lookahead: usize,
    /// Section length assumed when no closing marker is found.
    director_span: usize,
    /// Proximity windows of the director extractor.
    windows: DirectorWindows,
}

impl CertificateParser {
    /// Create a parser with default window sizes.
    pub fn new() -> Self {
        Self {
            director_lookahead: 50,
            director_span: 31,
            windows: DirectorWindows::default(),
        }
    }

    /// Set the closing-marker look-ahead of the section scanner.
    pub fn with_director_lookahead(mut self, lines: usize) -> Self {
        self.director_lookahead = lines;
        self
    }

    /// Set the fallback director-section length.
    pub fn with_director_span(mut self, lines: usize) -> Self {
        self.director_span = lines;
        self
    }

    /// Set the forward search window for identity numbers and emails.
    pub fn with_id_window(mut self, lines: usize) -> Self {
        self.windows.id_window = lines;
        self
    }

    /// Set the backward email search window.
    pub fn with_email_back_window(mut self, lines: usize) -> Self {
        self.windows.email_back = lines;
        self
    }

    /// Set the certification-stamp suppression window.
    pub fn with_stamp_window(mut self, lines: usize) -> Self {
        self.windows.stamp_window = lines;
        self
    }

    /// Parse a provider JSON document (full analysis response or bare
    /// block array). The only fallible entry point; a valid but empty or
    /// noisy block list still yields an all-null record.
    pub fn parse_json(&self, input: &str) -> Result<ExtractionRecord> {
        let blocks = blocks_from_json(input)?;
        Ok(self.parse_blocks(&blocks))
    }

    /// Extract a record from the block graph: index and linearize the
    /// blocks, run the rule chains, then fill still-empty fields from the
    /// provider's detected key/value pairs.
    pub fn parse_blocks(&self, blocks: &[Block]) -> ExtractionRecord {
        let index = BlockIndex::build(blocks);
        let lines = linearize(blocks);
        let mut record = self.parse_lines(&lines);

        // Form-field fallback for fields the line rules missed.
        for (key, value) in index.key_value_pairs() {
            let key = key.to_lowercase();
            if record.company_name.is_none() && key.contains("proposed name") {
                record.company_name = Some(value);
            } else if record.incorporation_date.is_none() && key.contains("incorporation date") {
                record.incorporation_date = Some(value);
            } else if record.business_address.is_none() && key.contains("business address") {
                record.business_address = Some(value);
            }
        }

        record
    }

    /// Extract a record from an already-linearized line sequence.
    pub fn parse_lines(&self, lines: &[String]) -> ExtractionRecord {
        info!("extracting certificate fields from {} lines", lines.len());

        let sections = SectionMap::scan(lines, self.director_lookahead, self.director_span);
        debug!("found {} party sections", sections.sections().len());

        let company = extract_company_name(lines);
        let (company_name, company_type) = match company {
            Some(c) => (Some(c.name), c.company_type),
            None => (None, None),
        };

        let record = ExtractionRecord {
            company_name,
            company_type,
            registration_number: extract_registration_number(lines),
            incorporation_date: extract_incorporation_date(lines),
            business_address: extract_business_address(lines),
            business_phone: extract_business_phone(lines),
            directors: extract_directors(lines, &sections, &self.windows),
        };

        debug!(
            company = record.company_name.as_deref().unwrap_or("-"),
            registration = record.registration_number.as_deref().unwrap_or("-"),
            directors = record.directors.len(),
            "extraction finished"
        );

        record
    }
}

impl Default for CertificateParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordExtractor for CertificateParser {
    fn extract(&self, blocks: &[Block]) -> ExtractionRecord {
        self.parse_blocks(blocks)
    }

    fn extract_from_lines(&self, lines: &[String]) -> ExtractionRecord {
        self.parse_lines(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    fn certificate_lines() -> Vec<String> {
        lines(&[
            "Proposed name",
            "GREENFIELD HOLDINGS SDN. BHD.",
            "202401042728 (1588573-M)",
            "Incorporation Date",
            "17012025",
            "Business Address",
            "NO. 12, JALAN AMPANG",
            "50450 KUALA LUMPUR",
            "Business Phone",
            "0312345678",
            "PARTICULARS OF DIRECTOR",
            "TAN WEI MING",
            "850315025639",
            "tan@company.com",
            "PARTICULARS OF MEMBER",
            "LIM SOOK YEE",
            "900101016999",
            "lim@members.com",
        ])
    }

    #[test]
    fn test_full_certificate() {
        let parser = CertificateParser::new();
        let record = parser.parse_lines(&certificate_lines());

        assert_eq!(
            record.company_name.as_deref(),
            Some("GREENFIELD HOLDINGS SDN. BHD.")
        );
        assert_eq!(record.company_type.as_deref(), Some("SDN. BHD."));
        assert_eq!(
            record.registration_number.as_deref(),
            Some("202401042728 (1588573-M)")
        );
        assert_eq!(record.incorporation_date.as_deref(), Some("17/01/2025"));
        assert_eq!(
            record.business_address.as_deref(),
            Some("NO. 12, JALAN AMPANG 50450 KUALA LUMPUR")
        );
        assert_eq!(record.business_phone.as_deref(), Some("0312345678"));

        assert_eq!(record.directors.len(), 1);
        assert_eq!(record.directors[0].name, "TAN WEI MING");
        assert_eq!(
            record.directors[0].id_number.as_deref(),
            Some("850315025639")
        );
        assert_eq!(
            record.directors[0].email.as_deref(),
            Some("tan@company.com")
        );
    }

    #[test]
    fn test_determinism() {
        let parser = CertificateParser::new();
        let lines = certificate_lines();

        let first = serde_json::to_string(&parser.parse_lines(&lines)).unwrap();
        let second = serde_json::to_string(&parser.parse_lines(&lines)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input_yields_null_record() {
        let parser = CertificateParser::new();
        let record = parser.parse_blocks(&[]);

        assert_eq!(record, ExtractionRecord::default());
        assert!(record.directors.is_empty());
    }

    #[test]
    fn test_parse_json_line_blocks_end_to_end() {
        let json = r#"{"Blocks": [
            {"BlockType": "PAGE", "Id": "p1"},
            {"BlockType": "LINE", "Id": "l1", "Text": "Proposed name"},
            {"BlockType": "LINE", "Id": "l2", "Text": "GREENFIELD HOLDINGS SDN. BHD."},
            {"BlockType": "LINE", "Id": "l3", "Text": "202401042728 (1588573-M)"},
            {"BlockType": "LINE", "Id": "l4", "Text": "Incorporation Date"},
            {"BlockType": "LINE", "Id": "l5", "Text": "17/01/2025"},
            {"BlockType": "LINE", "Id": "l6", "Text": "PARTICULARS OF DIRECTOR"},
            {"BlockType": "LINE", "Id": "l7", "Text": "TAN WEI MING"},
            {"BlockType": "LINE", "Id": "l8", "Text": "850315025639"},
            {"BlockType": "WORD", "Id": "w1", "Text": "ignored"}
        ]}"#;

        let parser = CertificateParser::new();
        let record = parser.parse_json(json).unwrap();

        assert_eq!(
            record.company_name.as_deref(),
            Some("GREENFIELD HOLDINGS SDN. BHD.")
        );
        assert_eq!(
            record.registration_number.as_deref(),
            Some("202401042728 (1588573-M)")
        );
        assert_eq!(record.incorporation_date.as_deref(), Some("17/01/2025"));
        assert_eq!(record.directors.len(), 1);
        assert_eq!(record.directors[0].name, "TAN WEI MING");
        assert_eq!(
            record.directors[0].id_number.as_deref(),
            Some("850315025639")
        );
    }

    #[test]
    fn test_key_value_fallback_fills_missing_fields() {
        let json = r#"{"Blocks": [
            {"BlockType": "KEY_VALUE_SET", "Id": "k1", "EntityTypes": ["KEY"],
             "Relationships": [
                {"Type": "CHILD", "Ids": ["w1", "w2"]},
                {"Type": "VALUE", "Ids": ["v1"]}
             ]},
            {"BlockType": "KEY_VALUE_SET", "Id": "v1", "EntityTypes": ["VALUE"],
             "Relationships": [{"Type": "CHILD", "Ids": ["w3", "w4"]}]},
            {"BlockType": "WORD", "Id": "w1", "Text": "Proposed"},
            {"BlockType": "WORD", "Id": "w2", "Text": "name"},
            {"BlockType": "WORD", "Id": "w3", "Text": "GREENFIELD"},
            {"BlockType": "WORD", "Id": "w4", "Text": "HOLDINGS"}
        ]}"#;

        let parser = CertificateParser::new();
        let record = parser.parse_json(json).unwrap();

        // No LINE blocks, so the line rules found nothing; the detected
        // form field supplies the name.
        assert_eq!(record.company_name.as_deref(), Some("GREENFIELD HOLDINGS"));
        assert_eq!(record.company_type, None);
    }

    #[test]
    fn test_parse_json_rejects_non_block_document() {
        let parser = CertificateParser::new();
        assert!(parser.parse_json("42").is_err());
    }

    #[test]
    fn test_director_span_knob() {
        let mut texts = vec!["PARTICULARS OF DIRECTOR".to_string()];
        texts.extend((0..5).map(|i| format!("filler {i}")));
        texts.push("TAN WEI MING".to_string());

        let narrow = CertificateParser::new().with_director_span(3);
        assert!(narrow.parse_lines(&texts).directors.is_empty());

        let wide = CertificateParser::new().with_director_span(10);
        assert_eq!(wide.parse_lines(&texts).directors.len(), 1);
    }
}
