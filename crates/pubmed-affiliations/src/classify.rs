//! Affiliation heuristics.
//!
//! An author counts as non-academic when their lower-cased affiliation
//! contains one of [`COMPANY_KEYWORDS`]. Corresponding authors are found by the
//! literal phrase [`CORRESPONDING_AUTHOR_MARKER`]. Both checks are independent.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::AuthorRecord;

/// Substrings that mark a commercial affiliation.
pub const COMPANY_KEYWORDS: &[&str] =
    &["pharma", "biotech", "therapeutics", "biosciences", "laboratories", "scientific"];

/// Phrase that marks the corresponding author's affiliation.
pub const CORRESPONDING_AUTHOR_MARKER: &str = "corresponding author";

static COMPANY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("({})", COMPANY_KEYWORDS.join("|"))).expect("valid company keyword pattern")
});

/// True if the affiliation looks commercial.
#[must_use]
pub fn is_non_academic(affiliation: &str) -> bool {
    COMPANY_PATTERN.is_match(&affiliation.to_lowercase())
}

/// True if the affiliation marks the corresponding author.
#[must_use]
pub fn is_corresponding_author(affiliation: &str) -> bool {
    affiliation.to_lowercase().contains(CORRESPONDING_AUTHOR_MARKER)
}

/// Per-paper result of running both heuristics over an author list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorClassification {
    /// Names of authors with a commercial affiliation, in author order.
    pub non_academic_authors: Vec<String>,

    /// Raw affiliations of those authors, parallel to `non_academic_authors`.
    pub company_affiliations: Vec<String>,

    /// Email of the last author marked as corresponding.
    pub corresponding_email: Option<String>,
}

impl AuthorClassification {
    /// Run both heuristics over an author list.
    #[must_use]
    pub fn from_authors(authors: &[AuthorRecord]) -> Self {
        let mut classification = Self::default();

        for author in authors {
            let affiliation = author.affiliation.as_deref().unwrap_or("");

            if is_non_academic(affiliation) {
                classification.non_academic_authors.push(author.name_or_default().to_string());
                classification
                    .company_affiliations
                    .push(author.affiliation_or_default().to_string());
            }

            // Last match wins.
            if is_corresponding_author(affiliation) {
                classification.corresponding_email = Some(author.email_or_default().to_string());
            }
        }

        classification
    }
}
