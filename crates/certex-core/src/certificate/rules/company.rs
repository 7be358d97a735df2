//! Company name and legal-type extraction.

use super::patterns::{LEGAL_SUFFIX, REGISTRATION_SUFFIX};

/// Keywords that disqualify a line from the standalone-name rule: they mark
/// form captions ("Company Name", "Registration No", "Nature of Business"),
/// not the name itself.
const CAPTION_KEYWORDS: [&str; 3] = ["NAME", "REGISTRATION", "BUSINESS"];

/// Longest line still plausible as a standalone company name.
const MAX_NAME_LEN: usize = 64;

/// A matched company name with its derived legal type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyName {
    pub name: String,
    pub company_type: Option<String>,
}

/// Extract the company name, first matching rule wins:
/// 1. a "Proposed name" label followed by a legal-suffix line;
/// 2. a short standalone legal-suffix line free of caption keywords;
/// 3. a line carrying both a legal suffix and a bracketed registration
///    number, whose name is the substring before the bracket.
pub fn extract_company_name(lines: &[String]) -> Option<CompanyName> {
    proposed_name_rule(lines)
        .or_else(|| standalone_rule(lines))
        .or_else(|| inline_registration_rule(lines))
}

fn proposed_name_rule(lines: &[String]) -> Option<CompanyName> {
    for (i, line) in lines.iter().enumerate() {
        if !line.to_uppercase().contains("PROPOSED NAME") {
            continue;
        }
        let Some(next) = lines.get(i + 1) else { continue };
        let next = next.trim();
        if !next.is_empty() && LEGAL_SUFFIX.is_match(next) {
            return Some(CompanyName {
                name: next.to_string(),
                company_type: company_type_of(next),
            });
        }
    }
    None
}

fn standalone_rule(lines: &[String]) -> Option<CompanyName> {
    lines
        .iter()
        .map(|l| l.trim())
        .find(|line| {
            !line.is_empty()
                && line.len() <= MAX_NAME_LEN
                && LEGAL_SUFFIX.is_match(line)
                // Lines carrying the registration bracket belong to rule 3.
                && !REGISTRATION_SUFFIX.is_match(line)
                && {
                    let upper = line.to_uppercase();
                    !CAPTION_KEYWORDS.iter().any(|k| upper.contains(k))
                }
        })
        .map(|line| CompanyName {
            name: line.to_string(),
            company_type: company_type_of(line),
        })
}

fn inline_registration_rule(lines: &[String]) -> Option<CompanyName> {
    for line in lines {
        let line = line.trim();
        if !LEGAL_SUFFIX.is_match(line) || !REGISTRATION_SUFFIX.is_match(line) {
            continue;
        }
        let Some(bracket) = line.find('(') else { continue };
        let name = line[..bracket].trim().trim_end_matches(',').trim();
        if !name.is_empty() {
            return Some(CompanyName {
                name: name.to_string(),
                company_type: company_type_of(name),
            });
        }
    }
    None
}

/// Derive the legal entity type from the suffix token of a name line.
pub fn company_type_of(name: &str) -> Option<String> {
    let upper = name.to_uppercase();
    if upper.contains("SDN") {
        Some("SDN. BHD.".to_string())
    } else if upper.contains("BHD") {
        Some("BHD.".to_string())
    } else if upper.contains("PLT") {
        Some("PLT".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_proposed_name_label() {
        let lines = lines(&["Proposed name", "GREENFIELD HOLDINGS SDN. BHD."]);
        let result = extract_company_name(&lines).unwrap();

        assert_eq!(result.name, "GREENFIELD HOLDINGS SDN. BHD.");
        assert_eq!(result.company_type.as_deref(), Some("SDN. BHD."));
    }

    #[test]
    fn test_standalone_name_skips_captions() {
        let lines = lines(&[
            "Company Name / SDN BHD registration form",
            "GREENFIELD HOLDINGS SDN. BHD.",
        ]);
        let result = extract_company_name(&lines).unwrap();

        assert_eq!(result.name, "GREENFIELD HOLDINGS SDN. BHD.");
    }

    #[test]
    fn test_name_before_registration_bracket() {
        let lines = lines(&["GREENFIELD HOLDINGS SDN. BHD. (1588573-M)"]);
        let result = extract_company_name(&lines).unwrap();

        assert_eq!(result.name, "GREENFIELD HOLDINGS SDN. BHD.");
        assert_eq!(result.company_type.as_deref(), Some("SDN. BHD."));
    }

    #[test]
    fn test_no_match_is_none() {
        let lines = lines(&["PARTICULARS OF DIRECTOR", "TAN WEI MING"]);
        assert_eq!(extract_company_name(&lines), None);
    }
}
