//! The five category scorers: skills, experience, education, projects, and
//! formatting.
//!
//! Each scorer is a pure function over the document and the detected
//! sections. Shared shape: missing section yields zero plus a weakness,
//! empty body yields zero plus a weakness, otherwise a small battery of
//! additive signals runs and the sum is clamped to the category ceiling.
//! Feedback strings are emitted in the order the signals fire.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::catalog::{SectionKind, SKILL_KEYWORDS};
use crate::analysis::document::Document;
use crate::analysis::sections::{extract_section_text, SectionPresence};

pub const SKILLS_CEILING: f64 = 2.0;
pub const EXPERIENCE_CEILING: f64 = 3.0;
pub const EDUCATION_CEILING: f64 = 1.0;
pub const PROJECTS_CEILING: f64 = 2.0;
pub const FORMATTING_CEILING: f64 = 2.0;

/// Bounded score plus the feedback the signals produced, in firing order.
#[derive(Debug, Clone, Default)]
pub struct CategoryResult {
    pub score: f64,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

static ORGANIZED_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(programming|language|tool|framework|technology)[:\s]").unwrap()
});

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{4}[-–—]\d{4}|\d{4}\s*[-–—]\s*present|jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec")
        .unwrap()
});

static ACHIEVEMENT_PATTERNS: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    [
        Regex::new(r"\d+%").unwrap(),
        Regex::new(r"\$\d+").unwrap(),
        Regex::new(r"\d+\+").unwrap(),
        Regex::new(r"increased|decreased|improved|reduced|achieved|delivered|managed|led").unwrap(),
        Regex::new(r"\d+\s*(users|customers|projects|team members|employees)").unwrap(),
    ]
});

static PROJECT_INDICATORS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"project\s+\d+").unwrap(),
        Regex::new(r"(?m)^\s*[-•*]\s+[a-z]").unwrap(),
        Regex::new(r"(?m)^\s*\d+[.)]\s+[a-z]").unwrap(),
    ]
});

static FOUR_DIGIT_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").unwrap());

static BULLET_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"[-•*]\s+").unwrap(),
        Regex::new(r"(?m)^\s*[-•*]").unwrap(),
    ]
});

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.\-]+@[\w.\-]+\.\w+").unwrap());

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?\d{1,3}[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

const ACTION_VERBS: &[&str] = &[
    "developed",
    "designed",
    "implemented",
    "created",
    "built",
    "managed",
    "led",
    "improved",
    "optimized",
    "delivered",
    "achieved",
    "collaborated",
];

const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "degree",
    "diploma",
    "certificate",
];

const INSTITUTION_KEYWORDS: &[&str] = &["university", "college", "institute", "school"];

/// Skills: item variety, technology vocabulary hits, organizing labels.
pub fn score_skills(doc: &Document, presence: &SectionPresence) -> CategoryResult {
    let mut result = CategoryResult::default();

    if !presence.skills {
        result
            .weaknesses
            .push("Skills section not clearly identified".to_string());
        return result;
    }

    let body = extract_section_text(doc, SectionKind::Skills);
    if body.is_empty() {
        result
            .weaknesses
            .push("Skills section is empty or not found".to_string());
        return result;
    }

    // Items are comma- or newline-separated.
    let skill_count = body.matches([',', '\n']).count() + 1;
    if skill_count < 5 {
        result.weaknesses.push(format!(
            "Only {skill_count} skills listed - consider adding more"
        ));
    } else if skill_count >= 10 {
        result
            .strengths
            .push(format!("Good variety of skills ({skill_count} skills listed)"));
        result.score += 0.5;
    } else {
        result.score += 0.3;
    }

    let vocabulary_hits = SKILL_KEYWORDS.iter().filter(|kw| body.contains(*kw)).count();
    if vocabulary_hits >= 5 {
        result
            .strengths
            .push("Strong technical skills with relevant technologies".to_string());
        result.score += 0.8;
    } else if vocabulary_hits >= 3 {
        result.score += 0.5;
    } else {
        result
            .weaknesses
            .push("Consider adding more technical skills relevant to your field".to_string());
    }

    if ORGANIZED_LABEL.is_match(body) {
        result.strengths.push("Skills are well-organized".to_string());
        result.score += 0.7;
    } else {
        result.score += 0.3;
    }

    result.score = result.score.min(SKILLS_CEILING);
    result
}

/// Experience: dated positions, quantified achievements, action verbs.
pub fn score_experience(doc: &Document, presence: &SectionPresence) -> CategoryResult {
    let mut result = CategoryResult::default();

    if !presence.experience {
        result
            .weaknesses
            .push("Work experience section not clearly identified".to_string());
        return result;
    }

    let body = extract_section_text(doc, SectionKind::Experience);
    if body.is_empty() {
        result
            .weaknesses
            .push("Experience section is empty".to_string());
        return result;
    }

    let date_matches = DATE_PATTERN.find_iter(body).count();
    if date_matches >= 2 {
        result
            .strengths
            .push(format!("Multiple positions listed ({date_matches} positions)"));
        result.score += 1.0;
    } else if date_matches == 1 {
        result.score += 0.5;
    } else {
        result
            .weaknesses
            .push("No dates found in experience section".to_string());
    }

    let achievement_count: usize = ACHIEVEMENT_PATTERNS
        .iter()
        .map(|pattern| pattern.find_iter(body).count())
        .sum();
    if achievement_count >= 5 {
        result
            .strengths
            .push("Strong use of quantifiable achievements".to_string());
        result.score += 1.5;
    } else if achievement_count >= 2 {
        result
            .strengths
            .push("Some measurable achievements present".to_string());
        result.score += 1.0;
    } else {
        result
            .weaknesses
            .push("Add more quantifiable achievements (numbers, percentages, metrics)".to_string());
        result.score += 0.3;
    }

    let verb_count = ACTION_VERBS.iter().filter(|verb| body.contains(*verb)).count();
    if verb_count >= 5 {
        result.strengths.push("Strong use of action verbs".to_string());
        result.score += 0.5;
    } else {
        result.score += 0.2;
    }

    result.score = result.score.min(EXPERIENCE_CEILING);
    result
}

/// Education: degree keyword, institution keyword, a graduation year.
pub fn score_education(doc: &Document, presence: &SectionPresence) -> CategoryResult {
    let mut result = CategoryResult::default();

    if !presence.education {
        result
            .weaknesses
            .push("Education section not clearly identified".to_string());
        return result;
    }

    let body = extract_section_text(doc, SectionKind::Education);
    if body.is_empty() {
        result
            .weaknesses
            .push("Education section is empty".to_string());
        return result;
    }

    if DEGREE_KEYWORDS.iter().any(|kw| body.contains(kw)) {
        result
            .strengths
            .push("Education credentials clearly listed".to_string());
        result.score += 0.5;
    } else {
        result
            .weaknesses
            .push("Degree information not clearly stated".to_string());
    }

    if INSTITUTION_KEYWORDS.iter().any(|kw| body.contains(kw)) {
        result.score += 0.3;
    } else {
        result
            .weaknesses
            .push("Institution name not clearly mentioned".to_string());
    }

    if FOUR_DIGIT_YEAR.is_match(body) {
        result.score += 0.2;
    }

    result.score = result.score.min(EDUCATION_CEILING);
    result
}

/// Projects: delimiter count, technical detail, links.
pub fn score_projects(doc: &Document, presence: &SectionPresence) -> CategoryResult {
    let mut result = CategoryResult::default();

    if !presence.projects {
        result
            .weaknesses
            .push("Projects section not found - consider adding one".to_string());
        return result;
    }

    let body = extract_section_text(doc, SectionKind::Projects);
    if body.is_empty() {
        result
            .weaknesses
            .push("Projects section is empty".to_string());
        return result;
    }

    // Best count across the delimiter patterns; the short-capitalized-line
    // fallback runs over the lowercased body, so it only ever confirms zero.
    let mut project_count = PROJECT_INDICATORS
        .iter()
        .map(|pattern| pattern.find_iter(body).count())
        .max()
        .unwrap_or(0);
    if project_count == 0 {
        project_count = body
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .filter(|line| {
                line.chars().count() < 80
                    && line.chars().next().is_some_and(char::is_uppercase)
            })
            .count();
    }

    if project_count >= 3 {
        result
            .strengths
            .push(format!("Good number of projects listed ({project_count})"));
        result.score += 1.0;
    } else if project_count >= 2 {
        result.strengths.push("At least 2 projects listed".to_string());
        result.score += 0.8;
    } else if project_count == 1 {
        result
            .weaknesses
            .push("Only 1 project listed - consider adding more".to_string());
        result.score += 0.4;
    } else {
        result
            .weaknesses
            .push("No clear projects identified".to_string());
        return result;
    }

    let tech_mentions = SKILL_KEYWORDS[..10]
        .iter()
        .filter(|kw| body.contains(*kw))
        .count();
    if tech_mentions >= 3 {
        result
            .strengths
            .push("Projects include relevant technical details".to_string());
        result.score += 0.7;
    } else if tech_mentions >= 1 {
        result.score += 0.4;
    } else {
        result
            .weaknesses
            .push("Add more technical details to project descriptions".to_string());
    }

    if ["github", "gitlab", "demo", "link", "url"]
        .iter()
        .any(|kw| body.contains(kw))
    {
        result
            .strengths
            .push("Projects include links or references".to_string());
        result.score += 0.3;
    }

    result.score = result.score.min(PROJECTS_CEILING);
    result
}

/// Formatting: bullets, length, section organization, visible contact info.
/// Operates on the whole document rather than one section.
pub fn score_formatting(doc: &Document, presence: &SectionPresence) -> CategoryResult {
    let mut result = CategoryResult::default();
    let text = &doc.normalized;

    // A word-less document earns no structural credit; the length and
    // organization bonuses below would otherwise reward emptiness.
    if doc.word_count() == 0 {
        result
            .weaknesses
            .push("Consider using bullet points for better readability".to_string());
        result
            .weaknesses
            .push("Contact information not clearly visible".to_string());
        return result;
    }

    let has_bullets = BULLET_PATTERNS.iter().any(|pattern| pattern.is_match(text));
    if has_bullets {
        result
            .strengths
            .push("Uses bullet points for readability".to_string());
        result.score += 0.5;
    } else {
        result
            .weaknesses
            .push("Consider using bullet points for better readability".to_string());
    }

    let estimated_pages = doc.estimated_pages();
    if estimated_pages <= 2.0 {
        result
            .strengths
            .push(format!("Appropriate length (~{estimated_pages:.1} pages)"));
        result.score += 0.7;
    } else if estimated_pages <= 3.0 {
        result.score += 0.4;
        result.weaknesses.push(format!(
            "Resume is a bit long (~{estimated_pages:.1} pages) - consider condensing"
        ));
    } else {
        result.weaknesses.push(format!(
            "Resume is too long (~{estimated_pages:.1} pages) - aim for 1-2 pages"
        ));
    }

    if presence.count_present() >= 4 {
        result
            .strengths
            .push("Well-organized with clear sections".to_string());
        result.score += 0.5;
    } else {
        result.score += 0.2;
    }

    let has_contact = EMAIL_PATTERN.is_match(text) || PHONE_PATTERN.is_match(text);
    if has_contact {
        result
            .strengths
            .push("Contact information present".to_string());
        result.score += 0.3;
    } else {
        result
            .weaknesses
            .push("Contact information not clearly visible".to_string());
    }

    result.score = result.score.min(FORMATTING_CEILING);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::sections::detect_sections;

    fn analyzed(text: &str) -> (Document, SectionPresence) {
        let doc = Document::new(text);
        let presence = detect_sections(&doc);
        (doc, presence)
    }

    #[test]
    fn test_skills_scenario_exceeds_threshold() {
        let (doc, presence) = analyzed(
            "SKILLS\nPython, JavaScript, React, Node.js, Docker, AWS, SQL, MongoDB\n",
        );
        let result = score_skills(&doc, &presence);
        // 10 items counting separators (+0.5), 5+ vocabulary hits (+0.8),
        // no organizing label (+0.3).
        assert!(result.score > 0.8, "score was {}", result.score);
        assert!(result.score <= SKILLS_CEILING);
        assert!(result
            .strengths
            .iter()
            .any(|s| s.contains("technical skills")));
    }

    #[test]
    fn test_skills_missing_section_is_zero_with_weakness() {
        let (doc, presence) = analyzed("nothing resume-like here at all");
        let result = score_skills(&doc, &presence);
        assert_eq!(result.score, 0.0);
        assert_eq!(
            result.weaknesses,
            vec!["Skills section not clearly identified".to_string()]
        );
        assert!(result.strengths.is_empty());
    }

    #[test]
    fn test_skills_organizing_label_adds_strength() {
        let (doc, presence) = analyzed(
            "SKILLS\nProgramming: Python, Java, JavaScript, React, Docker, AWS\n",
        );
        let result = score_skills(&doc, &presence);
        assert!(result.strengths.iter().any(|s| s == "Skills are well-organized"));
    }

    #[test]
    fn test_experience_scenario_scores_dates_and_achievements() {
        let (doc, presence) = analyzed(
            "EXPERIENCE\n\
             Software Engineer at Tech Corp (2020-2023)\n\
             - Increased system performance by 50%\n\
             - Managed a team of 5 developers\n\
             Intern (2018-2020)\n",
        );
        let result = score_experience(&doc, &presence);
        // Two year ranges (+1.0) and several achievement hits (>=1.0).
        assert!(result.score >= 2.0, "score was {}", result.score);
        assert!(result.score <= EXPERIENCE_CEILING);
        assert!(result
            .strengths
            .iter()
            .any(|s| s.contains("positions")));
    }

    #[test]
    fn test_experience_without_dates_flags_weakness() {
        let (doc, presence) = analyzed("EXPERIENCE\nDid some things at a company\n");
        let result = score_experience(&doc, &presence);
        assert!(result
            .weaknesses
            .iter()
            .any(|w| w == "No dates found in experience section"));
    }

    #[test]
    fn test_experience_clamped_at_ceiling() {
        // Max out every signal: many dates, many achievements, many verbs.
        let (doc, presence) = analyzed(
            "EXPERIENCE\n\
             Lead (2015-2017), Senior (2017-2019), Staff (2019-2021)\n\
             increased 10%, reduced 20%, improved 30%, delivered 40%, achieved 50%\n\
             developed designed implemented created built managed led\n",
        );
        let result = score_experience(&doc, &presence);
        assert_eq!(result.score, EXPERIENCE_CEILING);
    }

    #[test]
    fn test_education_full_signals() {
        let (doc, presence) = analyzed(
            "EDUCATION\nBachelor of Science in Computer Science\nUniversity of Technology (2016-2020)\n",
        );
        let result = score_education(&doc, &presence);
        assert!((result.score - EDUCATION_CEILING).abs() < 1e-9);
        assert!(result
            .strengths
            .iter()
            .any(|s| s == "Education credentials clearly listed"));
    }

    #[test]
    fn test_education_without_degree_or_institution() {
        let (doc, presence) = analyzed("EDUCATION\nSelf-taught since 2015\n");
        let result = score_education(&doc, &presence);
        assert!(result
            .weaknesses
            .iter()
            .any(|w| w == "Degree information not clearly stated"));
        assert!(result
            .weaknesses
            .iter()
            .any(|w| w == "Institution name not clearly mentioned"));
        // Year alone still counts.
        assert!((result.score - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_projects_numbered_list_with_links() {
        let (doc, presence) = analyzed(
            "PROJECTS\n\
             1. E-commerce Website\n\
             - Built with React and Node.js\n\
             - GitHub: github.com/user/project\n\
             2. Machine Learning Model\n\
             - Used Python and TensorFlow\n\
             3. Chat Server\n",
        );
        let result = score_projects(&doc, &presence);
        assert!(result
            .strengths
            .iter()
            .any(|s| s.contains("Good number of projects")));
        assert!(result
            .strengths
            .iter()
            .any(|s| s == "Projects include links or references"));
        assert!(result.score <= PROJECTS_CEILING);
    }

    #[test]
    fn test_projects_single_project_partial_credit() {
        let (doc, presence) = analyzed("PROJECTS\nproject 1: a small python tool\n");
        let result = score_projects(&doc, &presence);
        assert!(result
            .weaknesses
            .iter()
            .any(|w| w == "Only 1 project listed - consider adding more"));
        // 0.4 for the single project + 0.4 for one tech mention.
        assert!((result.score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_projects_no_delimiters_early_returns() {
        // Body has prose only; the lowercased fallback finds no uppercase
        // starts, so the count stays zero.
        let (doc, presence) = analyzed("PROJECTS\nassorted prose about tinkering\n");
        let result = score_projects(&doc, &presence);
        assert_eq!(result.score, 0.0);
        assert!(result
            .weaknesses
            .iter()
            .any(|w| w == "No clear projects identified"));
    }

    #[test]
    fn test_formatting_bullets_and_contact() {
        let (doc, presence) = analyzed(
            "John Doe\n\
             - Email: john@example.com\n\
             - Phone: 123-456-7890\n\
             SKILLS\n- Python\n- JavaScript\n\
             EXPERIENCE\n- Software Engineer\n",
        );
        let result = score_formatting(&doc, &presence);
        assert!(result
            .strengths
            .iter()
            .any(|s| s == "Uses bullet points for readability"));
        assert!(result
            .strengths
            .iter()
            .any(|s| s == "Contact information present"));
        // Bullets (+0.5), short length (+0.7), only 3 detected sections
        // (+0.2), contact info (+0.3).
        assert!((result.score - 1.7).abs() < 1e-9);
    }

    #[test]
    fn test_formatting_long_resume_flagged() {
        let text = format!("EXPERIENCE\n{}", "word ".repeat(1800));
        let (doc, presence) = analyzed(&text);
        let result = score_formatting(&doc, &presence);
        assert!(result
            .weaknesses
            .iter()
            .any(|w| w.starts_with("Resume is too long")));
    }

    #[test]
    fn test_formatting_empty_document_scores_zero() {
        let (doc, presence) = analyzed("   \n  \n");
        let result = score_formatting(&doc, &presence);
        assert_eq!(result.score, 0.0);
        assert!(result.strengths.is_empty());
        assert!(!result.weaknesses.is_empty());
    }

    #[test]
    fn test_all_scores_bounded_on_adversarial_text() {
        let text = "skills experience education projects certifications email\n".repeat(50);
        let (doc, presence) = analyzed(&text);
        assert!(score_skills(&doc, &presence).score <= SKILLS_CEILING);
        assert!(score_experience(&doc, &presence).score <= EXPERIENCE_CEILING);
        assert!(score_education(&doc, &presence).score <= EDUCATION_CEILING);
        assert!(score_projects(&doc, &presence).score <= PROJECTS_CEILING);
        assert!(score_formatting(&doc, &presence).score <= FORMATTING_CEILING);
    }
}
