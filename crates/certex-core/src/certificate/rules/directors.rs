//! Director extraction.
//!
//! Candidate names are only taken from lines labeled as director-section by
//! the section scanner; member and lodger sections contain identically
//! shaped name/id/email triples that must never leak into the output.

use std::collections::HashSet;

use tracing::debug;

use super::patterns::{EMAIL, NRIC_COMPACT, NRIC_HYPHENATED, PATRONYMIC, UPPERCASE_NAME};
use crate::certificate::sections::SectionMap;
use crate::models::Director;

/// Bounded windows steering the per-candidate proximity searches.
#[derive(Debug, Clone)]
pub struct DirectorWindows {
    /// Lines scanned forward of a name for its identity number and email.
    pub id_window: usize,
    /// Lines scanned backward of a name for an email printed above it.
    pub email_back: usize,
    /// Backward window in which a certification-stamp marker disqualifies
    /// a candidate line.
    pub stamp_window: usize,
    /// Forward window of the email-repair pass around a name repetition.
    pub repair_forward: usize,
    /// Backward window of the email-repair pass.
    pub repair_back: usize,
}

impl Default for DirectorWindows {
    fn default() -> Self {
        Self {
            id_window: 15,
            email_back: 8,
            stamp_window: 3,
            repair_forward: 15,
            repair_back: 5,
        }
    }
}

/// Lines matching the name shape that are headers, role labels, or
/// race/nationality labels rather than names.
const EXCLUDED_KEYWORDS: [&str; 21] = [
    "OTHER RACE",
    "NATIONALITY",
    "DESIGNATION",
    "PARTICULARS",
    "DIRECTOR",
    "MEMBER",
    "NAME",
    "NRIC",
    "PASSPORT",
    "EMAIL",
    "COMPANY REGISTRATION",
    "REGISTRATION",
    "CHINESE",
    "MALAY",
    "INDIAN",
    "CERTIFIED COPY",
    "CERTIFI ED COPY",
    "COMPANY SECRETARY",
    "COMPAN SECRETARY",
    "COPY",
    "SECRETARY",
];

/// Certification-stamp text overlapping director particulars on scanned
/// copies; name-shaped lines near a stamp are false positives.
const STAMP_MARKERS: [&str; 4] = [
    "CERTIFIED TRUE COPY",
    "CERTIFI ED",
    "COMPANY SECRETARY",
    "COMPAN SECRETARY",
];

/// Recognized email top-level domains.
const EMAIL_TLDS: [&str; 5] = [".com", ".io", ".my", ".net", ".org"];

/// Extract directors from every director-kind section, deduplicated by
/// `(name, id_number)` in first-seen order, each email assigned at most
/// once across the whole pass.
pub fn extract_directors(
    lines: &[String],
    sections: &SectionMap,
    windows: &DirectorWindows,
) -> Vec<Director> {
    let mut directors: Vec<Director> = Vec::new();
    let mut seen: HashSet<(String, Option<String>)> = HashSet::new();
    let mut used_emails: HashSet<String> = HashSet::new();

    for section in sections.director_sections() {
        let end = section.end.min(lines.len());

        for i in section.start + 1..end {
            // A fallback-length director section can run past a later
            // marker; the label array has the later section win, so only
            // director-labeled lines may produce or feed a candidate.
            if !sections.is_director(i) {
                continue;
            }
            let line = lines[i].trim();
            if line.is_empty()
                || near_stamp(lines, i, windows.stamp_window)
                || !is_candidate_name(line)
            {
                continue;
            }

            let mut director = Director::new(line);

            // Identity number and email: bounded forward search.
            for j in i + 1..(i + 1 + windows.id_window).min(end) {
                if !sections.is_director(j) {
                    break;
                }
                let candidate = lines[j].trim();

                if director.id_number.is_none()
                    && (NRIC_COMPACT.is_match(candidate) || NRIC_HYPHENATED.is_match(candidate))
                {
                    director.id_number = Some(candidate.to_string());
                }

                if director.email.is_none() {
                    if let Some(email) = email_token(candidate) {
                        if !used_emails.contains(&email) {
                            director.email = Some(email);
                        }
                    }
                }
            }

            // Email printed above the name: short backward search.
            if director.email.is_none() {
                let back_start = i.saturating_sub(windows.email_back).max(section.start);
                for candidate in lines[back_start..i].iter() {
                    if let Some(email) = email_token(candidate.trim()) {
                        if !used_emails.contains(&email) {
                            director.email = Some(email);
                            break;
                        }
                    }
                }
            }

            let key = (director.name.clone(), director.id_number.clone());
            if !seen.insert(key) {
                continue;
            }
            if let Some(email) = &director.email {
                used_emails.insert(email.clone());
            }
            directors.push(director);
        }
    }

    repair_emails(lines, sections, windows, &mut directors, &mut used_emails);

    debug!("extracted {} unique directors", directors.len());
    directors
}

/// Greedy nearest-first matching between directors still missing an email
/// and unassigned emails on director-labeled lines: for each director, scan
/// repetitions of its name and take the closest free email within the
/// window; each assignment removes the email from the shared pool.
fn repair_emails(
    lines: &[String],
    sections: &SectionMap,
    windows: &DirectorWindows,
    directors: &mut [Director],
    used_emails: &mut HashSet<String>,
) {
    let email_lines: Vec<(usize, String)> = lines
        .iter()
        .enumerate()
        .filter(|&(i, _)| sections.is_director(i))
        .filter_map(|(i, line)| email_token(line.trim()).map(|email| (i, email)))
        .collect();

    if email_lines.is_empty() {
        return;
    }

    for director in directors.iter_mut().filter(|d| d.email.is_none()) {
        let mut best: Option<(usize, &str)> = None;

        for (name_index, line) in lines.iter().enumerate() {
            if !sections.is_director(name_index) || !line.contains(&director.name) {
                continue;
            }

            let low = name_index.saturating_sub(windows.repair_back);
            let high = name_index + windows.repair_forward;

            for (email_index, email) in &email_lines {
                if *email_index < low || *email_index > high || used_emails.contains(email) {
                    continue;
                }
                let distance = name_index.abs_diff(*email_index);
                if best.map_or(true, |(d, _)| distance < d) {
                    best = Some((distance, email.as_str()));
                }
            }
        }

        if let Some((_, email)) = best {
            used_emails.insert(email.to_string());
            director.email = Some(email.to_string());
        }
    }
}

fn near_stamp(lines: &[String], index: usize, window: usize) -> bool {
    lines[index.saturating_sub(window)..=index].iter().any(|l| {
        let upper = l.to_uppercase();
        STAMP_MARKERS.iter().any(|m| upper.contains(m))
    })
}

fn is_candidate_name(line: &str) -> bool {
    if PATRONYMIC.is_match(line) {
        return true;
    }
    UPPERCASE_NAME.is_match(line)
        && line.split_whitespace().count() >= 2
        && !line.chars().any(|c| c.is_ascii_digit())
        && !EXCLUDED_KEYWORDS.iter().any(|k| line.contains(k))
}

/// Extract an email-shaped token with a recognized top-level domain.
fn email_token(line: &str) -> Option<String> {
    let token = EMAIL.find(line)?.as_str();
    let lower = token.to_lowercase();
    EMAIL_TLDS
        .iter()
        .any(|tld| lower.contains(tld))
        .then(|| token.to_string())
}
