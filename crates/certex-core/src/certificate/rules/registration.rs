//! Registration number extraction.
//!
//! The new-format registration number is a 12-digit token usually followed
//! by the old-format number in brackets, e.g. `202401042728 (1588573-M)`.
//! OCR splits or embeds this token in several ways; the four shapes below
//! are attempted in order and the first match wins.

use super::patterns::{
    REGISTRATION_BARE, REGISTRATION_EMBEDDED, REGISTRATION_FULL, REGISTRATION_SUFFIX,
    TRAILING_DIGITS,
};

pub fn extract_registration_number(lines: &[String]) -> Option<String> {
    full_line_rule(lines)
        .or_else(|| embedded_rule(lines))
        .or_else(|| split_line_rule(lines))
        .or_else(|| suffix_recovery_rule(lines))
}

/// Shape 1: a line that is exactly the 12-digit-plus-bracket token.
fn full_line_rule(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .map(|l| l.trim())
        .find(|l| REGISTRATION_FULL.is_match(l))
        .map(|l| l.to_string())
}

/// Shape 2: the same token embedded in a longer line.
fn embedded_rule(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .find_map(|l| REGISTRATION_EMBEDDED.find(l))
        .map(|m| m.as_str().to_string())
}

/// Shape 3: a bare 12-digit line immediately followed by the bracketed
/// suffix on its own line; concatenated.
fn split_line_rule(lines: &[String]) -> Option<String> {
    for window in lines.windows(2) {
        let first = window[0].trim();
        let second = window[1].trim();
        if REGISTRATION_BARE.is_match(first)
            && REGISTRATION_SUFFIX
                .find(second)
                .is_some_and(|m| m.as_str() == second)
        {
            return Some(format!("{first} {second}"));
        }
    }
    None
}

/// Shape 4: a bracketed suffix anywhere; recover the digit run leading up
/// to it, or fall back to the suffix alone.
fn suffix_recovery_rule(lines: &[String]) -> Option<String> {
    for line in lines {
        let Some(m) = REGISTRATION_SUFFIX.find(line) else {
            continue;
        };
        let prefix = &line[..m.start()];
        return Some(match TRAILING_DIGITS.captures(prefix) {
            Some(caps) => format!("{} {}", &caps[1], m.as_str()),
            None => m.as_str().to_string(),
        });
    }
    None
}
