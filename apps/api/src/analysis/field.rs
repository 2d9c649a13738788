//! Keyword-frequency classifier for the document's primary professional
//! field.

use crate::analysis::catalog::{SectionKind, FIELD_CATALOG};
use crate::analysis::document::Document;
use crate::analysis::sections::extract_section_text;

/// Minimum keyword hits before a field label is trusted.
const MIN_HITS: usize = 2;

/// Sections whose extracted bodies form the classification corpus.
const CORPUS_SECTIONS: [SectionKind; 4] = [
    SectionKind::Education,
    SectionKind::Skills,
    SectionKind::Projects,
    SectionKind::Experience,
];

/// Labels the document's primary field, or `None` when no field reaches
/// the hit threshold.
///
/// The corpus is the newline-joined extracted bodies of the education,
/// skills, projects, and experience sections, falling back to the whole
/// text when none of them extract anything. Fields are scored by how many
/// of their catalog phrases occur as substrings; the first field to reach
/// a new maximum wins, and later fields with an equal count do not
/// replace it.
pub fn detect_field(doc: &Document) -> Option<&'static str> {
    let parts: Vec<&str> = CORPUS_SECTIONS
        .iter()
        .map(|kind| extract_section_text(doc, *kind))
        .filter(|body| !body.is_empty())
        .collect();
    let corpus = if parts.is_empty() {
        doc.normalized.clone()
    } else {
        parts.join("\n")
    };

    let mut best_field = None;
    let mut best_hits = 0;
    for (label, keywords) in FIELD_CATALOG {
        let hits = keywords.iter().filter(|kw| corpus.contains(*kw)).count();
        if hits > best_hits {
            best_hits = hits;
            best_field = Some(*label);
        }
    }

    if best_hits >= MIN_HITS {
        best_field
    } else {
        None
    }
}
