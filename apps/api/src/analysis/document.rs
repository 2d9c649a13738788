//! Immutable per-request view of the uploaded resume text.
//!
//! Built once per analysis call and shared read-only by every scorer.
//! All keyword matching runs against the lowercased copy; the trimmed
//! line list keeps the original casing.

/// The resume text plus the derived views the scorers work from.
#[derive(Debug, Clone)]
pub struct Document {
    /// Original extracted text, untouched.
    pub raw: String,
    /// Lowercased copy used for all keyword and pattern matching.
    pub normalized: String,
    /// Trimmed, non-blank lines of the original text.
    pub lines: Vec<String>,
}

impl Document {
    pub fn new(text: &str) -> Self {
        Self {
            raw: text.to_string(),
            normalized: text.to_lowercase(),
            lines: text
                .split('\n')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    /// Whitespace-separated word count over the whole text.
    pub fn word_count(&self) -> usize {
        self.normalized.split_whitespace().count()
    }

    /// Rough page estimate at 500 words per page.
    pub fn estimated_pages(&self) -> f64 {
        self.word_count() as f64 / 500.0
    }

    /// Mean character length of the non-blank lines (0.0 when there are none).
    pub fn average_line_length(&self) -> f64 {
        if self.lines.is_empty() {
            return 0.0;
        }
        let total: usize = self.lines.iter().map(|line| line.chars().count()).sum();
        total as f64 / self.lines.len() as f64
    }
}
