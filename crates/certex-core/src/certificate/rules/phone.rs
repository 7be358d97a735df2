//! Business phone extraction.

use super::patterns::{DIGITS_ONLY, PHONE_COUNTRY, PHONE_GROUPED, PHONE_RUN};

/// Lines searched below a phone label for the number itself.
const LABEL_WINDOW: usize = 3;

/// Extract the business phone number, first matching rule wins:
/// 1. a phone-label line followed within three lines by an 8-12 digit run;
/// 2. a `+60` country-code line with grouped digits, re-joined after
///    stripping separators;
/// 3. a standalone all-digit line of eight or more digits.
pub fn extract_business_phone(lines: &[String]) -> Option<String> {
    labeled_rule(lines)
        .or_else(|| country_code_rule(lines))
        .or_else(|| standalone_rule(lines))
}

fn labeled_rule(lines: &[String]) -> Option<String> {
    for (i, line) in lines.iter().enumerate() {
        if !line.to_uppercase().contains("BUSINESS PHONE") {
            continue;
        }
        for candidate in lines.iter().skip(i + 1).take(LABEL_WINDOW) {
            if let Some(m) = PHONE_RUN.find(candidate) {
                return Some(m.as_str().to_string());
            }
        }
    }
    None
}

fn country_code_rule(lines: &[String]) -> Option<String> {
    for line in lines {
        if !line.contains("+60") || !PHONE_GROUPED.is_match(line) {
            continue;
        }
        if let Some(caps) = PHONE_COUNTRY.captures(line) {
            let digits: String = caps[1].chars().filter(|c| c.is_ascii_digit()).collect();
            if !digits.is_empty() {
                return Some(digits);
            }
        }
    }
    None
}

fn standalone_rule(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| DIGITS_ONLY.is_match(l))
        .find_map(|l| PHONE_RUN.find(l))
        .map(|m| m.as_str().to_string())
}
