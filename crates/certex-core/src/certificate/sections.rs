//! Section scanning for party-particulars blocks.
//!
//! Certificates interleave "PARTICULARS OF DIRECTOR", "PARTICULARS OF
//! MEMBER", and lodger blocks whose layouts look alike. Director detection
//! must stay strictly inside director sections, so the scanner assigns every
//! line a section label in one linear pass; extractors consult the label
//! array instead of re-scanning neighboring lines per candidate.

/// Kind of party section a line belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SectionKind {
    Director,
    Member,
    Lodger,
    #[default]
    Unknown,
}

/// A contiguous half-open range of line indices with one section label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    /// Index of the marker line opening the section.
    pub start: usize,
    /// One past the last line of the section.
    pub end: usize,
}

/// Per-line section labels plus the section list they were derived from.
#[derive(Debug, Clone)]
pub struct SectionMap {
    sections: Vec<Section>,
    labels: Vec<SectionKind>,
}

const DIRECTOR_MARKER: &str = "PARTICULARS OF DIRECTOR";
const MEMBER_MARKER: &str = "PARTICULARS OF MEMBER";
const LODGER_MARKER: &str = "LODGER";

fn marker_kind(line: &str) -> Option<SectionKind> {
    let upper = line.to_uppercase();
    if upper.contains(DIRECTOR_MARKER) {
        Some(SectionKind::Director)
    } else if upper.contains(MEMBER_MARKER) {
        Some(SectionKind::Member)
    } else if upper.contains(LODGER_MARKER) {
        Some(SectionKind::Lodger)
    } else {
        None
    }
}

impl SectionMap {
    /// Scan the line sequence once and label every line.
    ///
    /// A director section ends at the earliest later marker line within
    /// `lookahead` lines of its start; absent one, `span` lines past the
    /// start. OCR frequently garbles or drops closing headers, so the
    /// bounded window trades occasional over-inclusion of trailing lines
    /// for tolerance of missing markers. Member and lodger sections run to
    /// the next marker or the end of the document. A later section start
    /// always closes the previous section; sections never overlap.
    pub fn scan(lines: &[String], lookahead: usize, span: usize) -> Self {
        let markers: Vec<(usize, SectionKind)> = lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| marker_kind(line).map(|kind| (i, kind)))
            .collect();

        let mut sections = Vec::with_capacity(markers.len());
        for (pos, &(start, kind)) in markers.iter().enumerate() {
            let next_marker = markers.get(pos + 1).map(|&(i, _)| i);

            let end = match kind {
                SectionKind::Director => match next_marker {
                    Some(n) if n <= start + lookahead => n,
                    _ => (start + span).min(lines.len()),
                },
                _ => next_marker.unwrap_or(lines.len()),
            };

            sections.push(Section { kind, start, end });
        }

        let mut labels = vec![SectionKind::Unknown; lines.len()];
        for section in &sections {
            for label in &mut labels[section.start..section.end] {
                *label = section.kind;
            }
        }

        Self { sections, labels }
    }

    /// Section label of a line.
    pub fn kind_at(&self, index: usize) -> SectionKind {
        self.labels
            .get(index)
            .copied()
            .unwrap_or(SectionKind::Unknown)
    }

    /// Whether a line sits inside a director-kind section.
    pub fn is_director(&self, index: usize) -> bool {
        self.kind_at(index) == SectionKind::Director
    }

    /// All sections in document order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Director sections in document order.
    pub fn director_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections
            .iter()
            .filter(|s| s.kind == SectionKind::Director)
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
    fn test_member_marker_closes_director_section() {
        let lines = lines(&[
            "PARTICULARS OF DIRECTOR",
            "TAN WEI MING",
            "850315025639",
            "PARTICULARS OF MEMBER",
            "LIM SOOK YEE",
        ]);

        let map = SectionMap::scan(&lines, 50, 31);

        assert_eq!(
            map.sections(),
            &[
                Section { kind: SectionKind::Director, start: 0, end: 3 },
                Section { kind: SectionKind::Member, start: 3, end: 5 },
            ]
        );
        assert!(map.is_director(1));
        assert!(!map.is_director(4));
    }

    #[test]
    fn test_missing_closing_marker_falls_back_to_span() {
        let mut texts = vec!["PARTICULARS OF DIRECTOR".to_string()];
        texts.extend((0..60).map(|i| format!("FILLER LINE {i}")));

        let map = SectionMap::scan(&texts, 50, 31);

        assert_eq!(map.sections()[0].end, 31);
        assert!(map.is_director(30));
        assert_eq!(map.kind_at(31), SectionKind::Unknown);
    }

    #[test]
    fn test_marker_beyond_lookahead_is_ignored() {
        let mut texts = vec!["PARTICULARS OF DIRECTOR".to_string()];
        texts.extend((0..55).map(|i| format!("FILLER LINE {i}")));
        texts.push("PARTICULARS OF MEMBER".to_string());

        let map = SectionMap::scan(&texts, 50, 31);

        assert_eq!(map.sections()[0].end, 31);
        assert_eq!(map.sections()[1].kind, SectionKind::Member);
    }

    #[test]
    fn test_repeated_director_sections_do_not_overlap() {
        let lines = lines(&[
            "PARTICULARS OF DIRECTOR",
            "TAN WEI MING",
            "PARTICULARS OF DIRECTOR",
            "LEE AH KOW",
            "PARTICULARS OF LODGER",
            "WONG KAM FAI",
        ]);

        let map = SectionMap::scan(&lines, 50, 31);
        let director_ends: Vec<usize> = map.director_sections().map(|s| s.end).collect();

        assert_eq!(director_ends, vec![2, 4]);
        assert_eq!(map.kind_at(5), SectionKind::Lodger);
    }

    #[test]
    fn test_empty_document() {
        let map = SectionMap::scan(&[], 50, 31);
        assert!(map.sections().is_empty());
        assert_eq!(map.kind_at(0), SectionKind::Unknown);
    }
}
