//! Static keyword catalogs driving section detection, scoring, and field
//! classification.
//!
//! Iteration order is semantic: section detection and extraction take the
//! first keyword hit, and the field classifier keeps the first field to
//! reach a new maximum, so reordering these tables changes output.

use serde::{Deserialize, Serialize};

/// The fixed set of resume sections the locator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Contact,
    Skills,
    Experience,
    Education,
    Projects,
    Certifications,
}

/// Header/keyword synonyms per section kind, tried in order.
pub const SECTION_CATALOG: &[(SectionKind, &[&str])] = &[
    (
        SectionKind::Contact,
        &[
            "email", "phone", "address", "linkedin", "github", "contact", "mobile",
        ],
    ),
    (
        SectionKind::Skills,
        &[
            "skills",
            "technical skills",
            "competencies",
            "proficiencies",
            "expertise",
        ],
    ),
    (
        SectionKind::Experience,
        &[
            "experience",
            "work experience",
            "employment",
            "professional experience",
            "work history",
        ],
    ),
    (
        SectionKind::Education,
        &[
            "education",
            "academic",
            "qualifications",
            "degree",
            "university",
            "college",
        ],
    ),
    (
        SectionKind::Projects,
        &["projects", "project", "portfolio", "personal projects"],
    ),
    (
        SectionKind::Certifications,
        &[
            "certifications",
            "certificates",
            "certification",
            "credentials",
        ],
    ),
];

/// Returns the synonym list for a section kind.
pub fn section_keywords(kind: SectionKind) -> &'static [&'static str] {
    SECTION_CATALOG
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}

/// Technology vocabulary matched against skills and projects bodies.
/// The projects scorer only consults the first 10 terms.
pub const SKILL_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "react",
    "node",
    "sql",
    "html",
    "css",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "git",
    "github",
    "gitlab",
    "machine learning",
    "deep learning",
    "data science",
    "analytics",
    "agile",
    "scrum",
    "ci/cd",
    "devops",
    "microservices",
    "api",
    "rest",
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "elasticsearch",
    "tensorflow",
    "pytorch",
    "pandas",
    "numpy",
    "scikit-learn",
];

/// Professional-field labels with the keyword phrases diagnostic of each.
/// Declared order doubles as the tie-break order for classification.
pub const FIELD_CATALOG: &[(&str, &[&str])] = &[
    (
        "software / it",
        &[
            "computer science",
            "software engineering",
            "software engineer",
            "full stack",
            "frontend",
            "backend",
            "web development",
            "developer",
            "programmer",
            "cloud computing",
            "devops",
        ],
    ),
    (
        "data / ai",
        &[
            "data science",
            "data scientist",
            "machine learning",
            "deep learning",
            "artificial intelligence",
            "ml engineer",
            "data engineer",
            "analytics",
            "business intelligence",
        ],
    ),
    (
        "cybersecurity",
        &[
            "cyber security",
            "cybersecurity",
            "information security",
            "infosec",
            "penetration testing",
            "security analyst",
            "security engineer",
        ],
    ),
    (
        "mechanical engineering",
        &[
            "mechanical engineering",
            "mechanical engineer",
            "thermodynamics",
            "cad",
            "solidworks",
        ],
    ),
    (
        "electrical / electronics",
        &[
            "electrical engineering",
            "electronics engineering",
            "embedded systems",
            "circuit design",
            "fpga",
        ],
    ),
    (
        "business / management",
        &[
            "business administration",
            "mba",
            "management",
            "project management",
            "product manager",
            "business analyst",
        ],
    ),
    (
        "finance",
        &[
            "finance",
            "financial analyst",
            "accounting",
            "investment",
            "banking",
            "portfolio management",
        ],
    ),
    (
        "marketing",
        &[
            "marketing",
            "digital marketing",
            "seo",
            "content marketing",
            "brand management",
        ],
    ),
];
