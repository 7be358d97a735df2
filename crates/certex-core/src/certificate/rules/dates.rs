//! Incorporation date extraction.

use chrono::NaiveDate;

use super::patterns::{DATE_COMPACT, DATE_DASH, DATE_SLASH};

/// Extract the incorporation date.
///
/// Primary rule: a date-label line followed by a value line in
/// `DD/MM/YYYY`, `DD-MM-YYYY`, or unseparated `DDMMYYYY` form; the last is
/// normalized to `DD/MM/YYYY` when it denotes a real calendar date.
/// Fallback: any standalone `DD-MM-YYYY`-shaped line.
pub fn extract_incorporation_date(lines: &[String]) -> Option<String> {
    labeled_rule(lines).or_else(|| standalone_rule(lines))
}

fn labeled_rule(lines: &[String]) -> Option<String> {
    for (i, line) in lines.iter().enumerate() {
        if !line.to_uppercase().contains("INCORPORATION DATE") {
            continue;
        }
        let Some(value) = lines.get(i + 1) else { continue };
        if let Some(date) = parse_value(value.trim()) {
            return Some(date);
        }
    }
    None
}

fn standalone_rule(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .map(|l| l.trim())
        .find(|l| DATE_DASH.is_match(l))
        .map(|l| l.to_string())
}

fn parse_value(value: &str) -> Option<String> {
    if DATE_SLASH.is_match(value) || DATE_DASH.is_match(value) {
        return Some(value.to_string());
    }
    if DATE_COMPACT.is_match(value) {
        return normalize_compact(value);
    }
    None
}

/// `DDMMYYYY` -> `DD/MM/YYYY`, rejecting digit runs that are not dates
/// (an 8-digit phone number or amount must not pass).
fn normalize_compact(value: &str) -> Option<String> {
    let day: u32 = value[0..2].parse().ok()?;
    let month: u32 = value[2..4].parse().ok()?;
    let year: i32 = value[4..8].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)?;
    Some(format!("{:02}/{:02}/{:04}", day, month, year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_labeled_slash_date() {
        let lines = lines(&["Incorporation Date", "17/01/2025"]);
        assert_eq!(
            extract_incorporation_date(&lines).as_deref(),
            Some("17/01/2025")
        );
    }

    #[test]
    fn test_labeled_compact_date_is_normalized() {
        let lines = lines(&["Incorporation Date", "17012025"]);
        assert_eq!(
            extract_incorporation_date(&lines).as_deref(),
            Some("17/01/2025")
        );
    }

    #[test]
    fn test_compact_non_date_is_rejected() {
        // Month 24 does not exist; this is not a date.
        let lines = lines(&["Incorporation Date", "20240101"]);
        assert_eq!(extract_incorporation_date(&lines), None);
    }

    #[test]
    fn test_dash_date_kept_as_printed() {
        let lines = lines(&["Incorporation Date", "17-01-2025"]);
        assert_eq!(
            extract_incorporation_date(&lines).as_deref(),
            Some("17-01-2025")
        );
    }

    #[test]
    fn test_standalone_dash_fallback() {
        let lines = lines(&["GREENFIELD HOLDINGS SDN. BHD.", "17-01-2025"]);
        assert_eq!(
            extract_incorporation_date(&lines).as_deref(),
            Some("17-01-2025")
        );
    }

    #[test]
    fn test_label_without_value_is_none() {
        let lines = lines(&["Incorporation Date"]);
        assert_eq!(extract_incorporation_date(&lines), None);
    }
}
