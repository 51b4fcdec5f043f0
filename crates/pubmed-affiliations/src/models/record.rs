//! Output row of the CSV report.

use serde::Serialize;

use super::{DocumentSummary, NOT_AVAILABLE};
use crate::classify::AuthorClassification;

/// One row of the report, one per PMID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperRecord {
    /// PubMed identifier.
    #[serde(rename = "PubMed ID")]
    pub pubmed_id: String,

    /// Paper title or "N/A".
    #[serde(rename = "Title")]
    pub title: String,

    /// Publication date or "N/A".
    #[serde(rename = "Publication Date")]
    pub publication_date: String,

    /// Comma-joined non-academic author names or "N/A".
    #[serde(rename = "Non-Academic Author")]
    pub non_academic_authors: String,

    /// Comma-joined company affiliations or "N/A".
    #[serde(rename = "Company Affiliation")]
    pub company_affiliations: String,

    /// Corresponding author email or "N/A".
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_author_email: String,
}

impl PaperRecord {
    /// Column names, in serialization order.
    pub const HEADERS: [&'static str; 6] = [
        "PubMed ID",
        "Title",
        "Publication Date",
        "Non-Academic Author",
        "Company Affiliation",
        "Corresponding Author Email",
    ];

    /// Build a row from a PMID and its summary.
    ///
    /// A missing summary yields a row of defaults, so every identifier from
    /// the search stage produces exactly one row.
    #[must_use]
    pub fn from_summary(pubmed_id: &str, summary: Option<&DocumentSummary>) -> Self {
        let fallback = DocumentSummary::default();
        let summary = summary.unwrap_or(&fallback);
        let authors = AuthorClassification::from_authors(&summary.authors);

        Self {
            pubmed_id: pubmed_id.to_string(),
            title: summary.title_or_default().to_string(),
            publication_date: summary.pubdate_or_default().to_string(),
            non_academic_authors: join_or_na(&authors.non_academic_authors),
            company_affiliations: join_or_na(&authors.company_affiliations),
            corresponding_author_email: authors
                .corresponding_email
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }

    /// True if any author was flagged as non-academic.
    #[must_use]
    pub fn has_non_academic_author(&self) -> bool {
        self.non_academic_authors != NOT_AVAILABLE
    }
}

fn join_or_na(values: &[String]) -> String {
    if values.is_empty() { NOT_AVAILABLE.to_string() } else { values.join(", ") }
}
