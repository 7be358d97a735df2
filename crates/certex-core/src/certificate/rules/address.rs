//! Business address extraction.
//!
//! Two-phase strategy. Phase 1 collects the lines following an explicit
//! address label until a stop keyword. Phase 2 is the fallback for noisy
//! scans where the label or its value lines were garbled: every line is
//! scored against weighted address indicators, high-scoring lines are
//! extended into consecutive runs, and the best run is kept.

use super::patterns::{ADDRESS_INDICATORS, DUPLICATE_COMMA, POSTCODE, UNIT_DASHED, WHITESPACE_RUN};

/// Keywords ending phase-1 collection: contact fields and section markers.
const STOP_KEYWORDS: [&str; 7] = [
    "BUSINESS PHONE",
    "FAX",
    "EMAIL",
    "OFFICE NO NIL",
    "PARTICULARS",
    "DIRECTOR",
    "MEMBER",
];

/// Vendor footer lines that leak into the line sequence on every page.
const FOOTER_MARKERS: [&str; 2] = [
    "SURUHANJAYA SYARIKAT MALAYSIA",
    "COMPANIES COMMISSION OF MALAYSIA",
];

/// Lines at or past a business-nature description are no longer address.
const NATURE_MARKER: &str = "NATURE OF BUSINESS";

/// Minimum indicator score for a line to join an existing run in phase 2.
const MIN_RUN_EXTEND_SCORE: u32 = 3;

/// Maximum index gap between phase-2 run members.
const MAX_RUN_GAP: usize = 2;

pub fn extract_business_address(lines: &[String]) -> Option<String> {
    let labeled = labeled_address(lines, "BUSINESS ADDRESS")
        .or_else(|| labeled_address(lines, "REGISTERED ADDRESS"));

    let incomplete = match &labeled {
        None => true,
        Some(addr) => addr.contains("NIL") || addr == "Office No",
    };

    if incomplete {
        scored_address(lines).or(labeled)
    } else {
        labeled
    }
}

/// Phase 1: collect non-empty lines after an address label, skipping
/// placeholder and footer lines, until a stop keyword or nature description.
fn labeled_address(lines: &[String], label: &str) -> Option<String> {
    for (i, line) in lines.iter().enumerate() {
        if !line.to_uppercase().contains(label) {
            continue;
        }

        let mut parts: Vec<&str> = Vec::new();
        for candidate in &lines[i + 1..] {
            let candidate = candidate.trim();
            if candidate.is_empty() {
                break;
            }
            let upper = candidate.to_uppercase();
            if upper.contains(NATURE_MARKER) || STOP_KEYWORDS.iter().any(|k| upper.contains(k)) {
                break;
            }
            if upper == "NIL" || FOOTER_MARKERS.iter().any(|k| upper.contains(k)) {
                continue;
            }
            parts.push(candidate);
        }

        if !parts.is_empty() {
            return Some(parts.join(" "));
        }
    }
    None
}

/// Phase 2: weighted indicator scoring with greedy consecutive-run grouping.
fn scored_address(lines: &[String]) -> Option<String> {
    let candidates: Vec<(usize, &str, u32)> = lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| {
            let line = line.trim();
            let score = score_line(line)?;
            Some((i, line, score))
        })
        .collect();

    if candidates.is_empty() {
        return None;
    }

    // Extend each candidate into its run of nearby qualifying lines and
    // keep the run with the highest combined score.
    let mut best_run: &[(usize, &str, u32)] = &[];
    let mut best_score = 0;

    for start in 0..candidates.len() {
        let mut end = start + 1;
        let mut last_index = candidates[start].0;
        let mut total = candidates[start].2;

        while end < candidates.len() {
            let (index, _, score) = candidates[end];
            if index > last_index + MAX_RUN_GAP || score < MIN_RUN_EXTEND_SCORE {
                break;
            }
            last_index = index;
            total += score;
            end += 1;
        }

        if total > best_score {
            best_score = total;
            best_run = &candidates[start..end];
        }
    }

    let joined = best_run
        .iter()
        .map(|&(_, line, _)| line)
        .collect::<Vec<_>>()
        .join(", ");

    let normalized = normalize(&joined);
    (!normalized.is_empty()).then_some(normalized)
}

fn score_line(line: &str) -> Option<u32> {
    if line.is_empty() {
        return None;
    }
    let upper = line.to_uppercase();
    if upper == "BUSINESS ADDRESS" || upper == "REGISTERED ADDRESS" || upper == "NIL" {
        return None;
    }
    if STOP_KEYWORDS.iter().any(|k| upper.contains(k))
        || FOOTER_MARKERS.iter().any(|k| upper.contains(k))
    {
        return None;
    }

    let mut score = ADDRESS_INDICATORS.iter().filter(|p| p.is_match(line)).count() as u32;
    if POSTCODE.is_match(line) {
        score += 2;
    }
    if upper.contains("MALAYSIA") {
        score += 2;
    }

    (score > 0).then_some(score)
}

/// Clean common OCR artifacts out of the joined address: unit numbers split
/// across dashes, duplicate punctuation, and whitespace runs.
fn normalize(address: &str) -> String {
    let address = UNIT_DASHED.replace_all(address, "$1$2$3");
    let address = WHITESPACE_RUN.replace_all(&address, " ");
    let address = DUPLICATE_COMMA.replace_all(&address, ",");
    address.trim_matches([',', ' ']).to_string()
}
