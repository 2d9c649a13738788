//! ATS readiness estimate: how well the document's structure suits
//! automated keyword screening.
//!
//! Independent of the five category scores. Starts at a baseline of 50 and
//! applies additive/subtractive structural adjustments; every adjustment is
//! independent, so ordering only affects feedback order, not the clamped
//! value.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::catalog::SectionKind;
use crate::analysis::document::Document;
use crate::analysis::sections::SectionPresence;

const BASELINE: i32 = 50;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.\-]+@[\w.\-]+\.\w+").unwrap());

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?\d{1,3}[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

static LIST_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?m)^\s*[-•*]\s+").unwrap(),
        Regex::new(r"(?m)^\s*\d+[.)]\s+").unwrap(),
    ]
});

static WIDE_GAP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {3,}").unwrap());

/// Readiness score with the structural feedback that produced it.
#[derive(Debug, Clone)]
pub struct ReadinessResult {
    pub score: i32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Scores ATS readiness from structural signals, clamped to 0..=100.
pub fn score_ats_readiness(doc: &Document, presence: &SectionPresence) -> ReadinessResult {
    let mut score = BASELINE;
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let text = &doc.normalized;

    let core_sections = [
        SectionKind::Skills,
        SectionKind::Experience,
        SectionKind::Education,
    ];
    let core_present = core_sections
        .iter()
        .filter(|kind| presence.get(**kind))
        .count();
    if core_present == core_sections.len() {
        score += 15;
        strengths.push("Core sections are clearly present".to_string());
    } else if core_present >= 2 {
        score += 8;
        strengths.push("Most core sections are present".to_string());
    } else {
        weaknesses.push("Missing one or more core sections that ATS tools expect".to_string());
    }

    let has_email = EMAIL_PATTERN.is_match(text);
    let has_phone = PHONE_PATTERN.is_match(text);
    if has_email && has_phone {
        score += 10;
        strengths.push("Contact info is easy to parse".to_string());
    } else if has_email || has_phone {
        score += 4;
        weaknesses.push("Consider including both email and phone".to_string());
    } else {
        weaknesses.push("ATS may struggle to find your contact info".to_string());
    }

    let has_bullets = LIST_PATTERNS.iter().any(|pattern| pattern.is_match(text));
    if has_bullets {
        score += 10;
        strengths.push("Bullets improve ATS scanability".to_string());
    } else {
        weaknesses.push("Add bullet points to improve ATS readability".to_string());
    }

    if doc.average_line_length() > 140.0 {
        weaknesses.push("Some lines are very long; shorten for ATS readability".to_string());
        score -= 5;
    }

    let estimated_pages = doc.estimated_pages();
    if estimated_pages <= 2.0 {
        score += 10;
        strengths.push("ATS-friendly length (1–2 pages)".to_string());
    } else if estimated_pages <= 3.0 {
        score += 2;
        weaknesses.push("Resume slightly long".to_string());
    } else {
        score -= 8;
        weaknesses.push("Resume too long; shorten to 1–2 pages".to_string());
    }

    // Columns and tables flatten badly in ATS text extraction; runs of
    // spaces or pipe walls are the tell.
    let many_wide_gaps = WIDE_GAP.find_iter(text).count() > 10;
    let many_pipes = text.matches('|').count() > 15;
    if many_wide_gaps || many_pipes {
        score -= 8;
        weaknesses.push("Layout may use tables or columns; ATS prefers simple layouts".to_string());
    }

    let non_ascii_count = text.chars().filter(|c| !c.is_ascii()).count();
    if non_ascii_count > 30 {
        score -= 7;
        weaknesses.push("Too many special symbols; ATS prefers simple characters".to_string());
    }

    ReadinessResult {
        score: score.clamp(0, 100),
        strengths,
        weaknesses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::sections::detect_sections;

    fn readiness(text: &str) -> ReadinessResult {
        let doc = Document::new(text);
        let presence = detect_sections(&doc);
        score_ats_readiness(&doc, &presence)
    }

    #[test]
    fn test_structured_resume_scores_above_baseline() {
        let result = readiness(
            "SKILLS\n- Python\n- Rust\n\
             EXPERIENCE\n- Engineer (2020-2023)\n\
             EDUCATION\n- BSc Computer Science\n\
             john@example.com +1 123-456-7890\n",
        );
        // Core sections +15, contact +10, bullets +10, short +10.
        assert_eq!(result.score, 95);
        assert!(result
            .strengths
            .iter()
            .any(|s| s == "Core sections are clearly present"));
    }

    #[test]
    fn test_unstructured_long_text_scores_below_baseline() {
        // No email, no phone, no bullets, well over 3 estimated pages.
        let text = "plain words without structure ".repeat(400);
        let result = readiness(&text);
        assert!(result.score < BASELINE, "score was {}", result.score);
        assert!(result
            .weaknesses
            .iter()
            .any(|w| w == "Add bullet points to improve ATS readability"));
        assert!(result
            .weaknesses
            .iter()
            .any(|w| w == "Resume too long; shorten to 1–2 pages"));
    }

    #[test]
    fn test_single_contact_channel_gets_partial_credit() {
        let result = readiness("SKILLS\n- Python\nreach me at john@example.com\n");
        assert!(result
            .weaknesses
            .iter()
            .any(|w| w == "Consider including both email and phone"));
    }

    #[test]
    fn test_tabular_layout_penalized() {
        let mut text = String::from("SKILLS\n- Python\nEXPERIENCE\n- Engineer\nEDUCATION\n- BSc\n");
        for _ in 0..20 {
            text.push_str("cell | cell | cell\n");
        }
        let with_pipes = readiness(&text);
        assert!(with_pipes
            .weaknesses
            .iter()
            .any(|w| w.contains("tables or columns")));
    }

    #[test]
    fn test_non_ascii_heavy_text_penalized() {
        let mut text = String::from("SKILLS\n- Python\n");
        text.push_str(&"★".repeat(40));
        let result = readiness(&text);
        assert!(result
            .weaknesses
            .iter()
            .any(|w| w.contains("special symbols")));
    }

    #[test]
    fn test_score_clamped_to_bounds() {
        assert!((0..=100).contains(&readiness("").score));
        let hostile = format!("{}{}", "|".repeat(100), "★".repeat(100)).repeat(30);
        assert!((0..=100).contains(&readiness(&hostile).score));
    }

    #[test]
    fn test_very_long_lines_penalized() {
        let long_line = "a ".repeat(120);
        let text = format!("SKILLS\n{long_line}\n{long_line}\n");
        let result = readiness(&text);
        assert!(result
            .weaknesses
            .iter()
            .any(|w| w.contains("very long")));
    }
}
