//! Report aggregation: runs the locator, the scorers, and the classifier
//! over one document and merges their outputs into the boundary report.

use serde::{Deserialize, Serialize};

use crate::analysis::categories::{
    score_education, score_experience, score_formatting, score_projects, score_skills,
};
use crate::analysis::document::Document;
use crate::analysis::field::detect_field;
use crate::analysis::readiness::score_ats_readiness;
use crate::analysis::sections::{detect_sections, SectionPresence};

/// Per-category scores, each rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionScores {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub projects: f64,
    pub formatting: f64,
}

/// The full analysis result returned to the transport boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Total score, 0-10, one decimal.
    pub score: f64,
    pub sections: SectionScores,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub detected_sections: SectionPresence,
    /// ATS readiness estimate, 0-100.
    pub ats_readiness: i32,
    /// Detected primary field label, absent when classification is unsure.
    pub field: Option<String>,
}

/// Analyzes resume text into a full report.
///
/// Pure and deterministic: identical text yields an identical report.
/// Never fails; empty or garbage input degrades into zero scores and
/// weaknesses.
pub fn analyze(text: &str) -> AnalysisReport {
    let doc = Document::new(text);
    let presence = detect_sections(&doc);
    let field = detect_field(&doc);

    let skills = score_skills(&doc, &presence);
    let experience = score_experience(&doc, &presence);
    let education = score_education(&doc, &presence);
    let projects = score_projects(&doc, &presence);
    let formatting = score_formatting(&doc, &presence);
    let readiness = score_ats_readiness(&doc, &presence);

    let total =
        skills.score + experience.score + education.score + projects.score + formatting.score;

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    for result in [&skills, &experience, &education, &projects, &formatting] {
        strengths.extend(result.strengths.iter().cloned());
        weaknesses.extend(result.weaknesses.iter().cloned());
    }
    strengths.extend(readiness.strengths);
    weaknesses.extend(readiness.weaknesses);

    match field {
        Some(label) => strengths.push(format!("Primary field detected as: {}", title_case(label))),
        None => weaknesses
            .push("Could not clearly detect your primary field of study or work.".to_string()),
    }

    AnalysisReport {
        score: round1(total),
        sections: SectionScores {
            skills: round1(skills.score),
            experience: round1(experience.score),
            education: round1(education.score),
            projects: round1(projects.score),
            formatting: round1(formatting.score),
        },
        strengths,
        weaknesses,
        detected_sections: presence,
        ats_readiness: readiness.score,
        field: field.map(String::from),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Uppercases the first letter of each alphabetic run, e.g.
/// "software / it" becomes "Software / It".
fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_word = false;
    for ch in label.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}
