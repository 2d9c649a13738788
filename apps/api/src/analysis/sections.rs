//! Section locator: decides which named sections a resume contains and
//! extracts each section's textual span.
//!
//! Two matching rules, both case-insensitive via the lowercased document
//! text:
//! 1. Header line: the keyword alone on a line, optionally wrapped in
//!    `#`/whitespace markers and a trailing colon.
//! 2. Plain substring anywhere in the text.
//!
//! Detection tries both rules keyword-by-keyword; extraction tries the
//! header rule for every keyword before falling back to substrings, then
//! cuts the body at the nearest header line belonging to any other section.
//! The asymmetry is deliberate and scoring depends on it.

use serde::{Deserialize, Serialize};

use crate::analysis::catalog::{section_keywords, SectionKind, SECTION_CATALOG};
use crate::analysis::document::Document;

/// Which sections were detected, one flag per catalog kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPresence {
    pub contact: bool,
    pub skills: bool,
    pub experience: bool,
    pub education: bool,
    pub projects: bool,
    pub certifications: bool,
}

impl SectionPresence {
    pub fn get(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::Contact => self.contact,
            SectionKind::Skills => self.skills,
            SectionKind::Experience => self.experience,
            SectionKind::Education => self.education,
            SectionKind::Projects => self.projects,
            SectionKind::Certifications => self.certifications,
        }
    }

    fn set(&mut self, kind: SectionKind, present: bool) {
        match kind {
            SectionKind::Contact => self.contact = present,
            SectionKind::Skills => self.skills = present,
            SectionKind::Experience => self.experience = present,
            SectionKind::Education => self.education = present,
            SectionKind::Projects => self.projects = present,
            SectionKind::Certifications => self.certifications = present,
        }
    }

    /// Number of sections detected.
    pub fn count_present(&self) -> usize {
        [
            self.contact,
            self.skills,
            self.experience,
            self.education,
            self.projects,
            self.certifications,
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

/// True when `line` is the keyword alone, allowing `#`/whitespace markers
/// before it and colons/whitespace after it.
fn is_header_line(line: &str, keyword: &str) -> bool {
    let rest = line.trim_start_matches(|c: char| c == '#' || c.is_whitespace());
    match rest.strip_prefix(keyword) {
        Some(after) => after.chars().all(|c| c == ':' || c.is_whitespace()),
        None => false,
    }
}

/// Byte offset of the first line matching the header rule for `keyword`.
fn find_header_start(text: &str, keyword: &str) -> Option<usize> {
    let mut offset = 0;
    for line in text.split('\n') {
        if is_header_line(line, keyword) {
            return Some(offset);
        }
        offset += line.len() + 1;
    }
    None
}

/// Detects which catalog sections appear in the document.
pub fn detect_sections(doc: &Document) -> SectionPresence {
    let mut presence = SectionPresence::default();
    for (kind, keywords) in SECTION_CATALOG {
        let found = keywords.iter().any(|kw| {
            find_header_start(&doc.normalized, kw).is_some() || doc.normalized.contains(kw)
        });
        presence.set(*kind, found);
    }
    presence
}

/// Extracts the body of `kind` from the document, header line included.
///
/// Returns an empty slice when no keyword for the kind matches at all.
/// A substring-fallback start can land mid-paragraph and drag in unrelated
/// text; that is accepted heuristic behavior.
pub fn extract_section_text(doc: &Document, kind: SectionKind) -> &str {
    let keywords = section_keywords(kind);

    let mut start = keywords
        .iter()
        .find_map(|kw| find_header_start(&doc.normalized, kw));
    if start.is_none() {
        start = keywords.iter().find_map(|kw| doc.normalized.find(kw));
    }
    let start = match start {
        Some(offset) => offset,
        None => return "",
    };

    let remaining = &doc.normalized[start..];

    // Cut at the nearest header line belonging to any other section kind.
    let mut end = remaining.len();
    for (other, other_keywords) in SECTION_CATALOG {
        if *other == kind {
            continue;
        }
        for kw in *other_keywords {
            if let Some(pos) = find_header_start(remaining, kw) {
                if pos < end {
                    end = pos;
                }
            }
        }
    }

    &remaining[..end]
}
