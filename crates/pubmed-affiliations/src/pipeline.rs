//! Search -> summary -> classify.
//!
//! API failures never escape this module: they are reported and the run
//! continues with an empty result, so the caller always gets rows to write.

use crate::client::PubMedClient;
use crate::error::{ClientError, ClientResult};
use crate::models::{PaperRecord, SummaryResponse};

/// Search PubMed for `query` and build one report row per PMID found.
///
/// Returns an empty list when the search fails, finds nothing, or the summary
/// request fails. With `debug` set, raw API responses are printed.
pub async fn fetch_research_papers(
    client: &PubMedClient,
    query: &str,
    max_results: u32,
    debug: bool,
) -> Vec<PaperRecord> {
    let ids = match search_ids(client, query, max_results, debug).await {
        Ok(ids) => ids,
        Err(e) => {
            report_failure(Stage::Search, &e);
            return Vec::new();
        }
    };

    if ids.is_empty() {
        tracing::info!(query, "No papers matched");
        return Vec::new();
    }

    let summaries = match fetch_summaries(client, &ids, debug).await {
        Ok(summaries) => summaries,
        Err(e) => {
            report_failure(Stage::Summary, &e);
            return Vec::new();
        }
    };

    let records = build_records(&ids, &summaries);
    tracing::info!(
        papers = records.len(),
        flagged = records.iter().filter(|r| r.has_non_academic_author()).count(),
        "Classified papers"
    );
    records
}

/// One row per id, in id order, whether or not the summary covers it.
#[must_use]
pub fn build_records(ids: &[String], summaries: &SummaryResponse) -> Vec<PaperRecord> {
    ids.iter()
        .map(|id| {
            let summary = summaries.document(id);
            if summary.is_none() {
                tracing::debug!(pmid = %id, "No summary returned, using defaults");
            }
            PaperRecord::from_summary(id, summary.as_ref())
        })
        .collect()
}

async fn search_ids(
    client: &PubMedClient,
    query: &str,
    max_results: u32,
    debug: bool,
) -> ClientResult<Vec<String>> {
    let response = client.esearch(query, max_results).await?;

    if debug {
        println!("ESearch Response: {}", response.raw);
    }

    if let Some(reason) = response.data.error() {
        tracing::warn!(reason, "ESearch reported a query error");
    }

    let ids = response.data.ids().to_vec();
    tracing::debug!(count = ids.len(), "ESearch returned ids");
    Ok(ids)
}

async fn fetch_summaries(
    client: &PubMedClient,
    ids: &[String],
    debug: bool,
) -> ClientResult<SummaryResponse> {
    let response = client.esummary(ids).await?;

    if debug {
        println!("ESummary Response: {}", response.raw);
    }

    if response.data.is_empty() {
        tracing::warn!(requested = ids.len(), "ESummary returned no documents");
    }

    Ok(response.data)
}

/// Request stage, for failure reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Search,
    Summary,
}

impl Stage {
    /// Fixed message shown on the console when this stage fails.
    const fn console_message(self) -> &'static str {
        match self {
            Self::Search => "Error fetching data from PubMed API.",
            Self::Summary => "Error fetching summary data from PubMed API.",
        }
    }
}

/// Print the stage's console message and log the error details.
///
/// The message goes to stderr directly so it survives `RUST_LOG=off`.
fn report_failure(stage: Stage, error: &ClientError) {
    eprintln!("{}", stage.console_message());
    tracing::error!(
        stage = ?stage,
        error = %error,
        status = ?error.status(),
        retryable = error.is_retryable(),
        retry_after = ?error.retry_after(),
        "PubMed request failed"
    );
}
