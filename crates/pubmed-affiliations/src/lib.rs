//! PubMed Affiliation Exporter
//!
//! Searches PubMed through the NCBI E-utilities API, fetches summary metadata
//! for every hit, flags authors whose affiliation looks commercial, and writes
//! one CSV row per paper.
//!
//! # Pipeline
//!
//! - **ESearch**: query text -> ordered PMIDs
//! - **ESummary**: all PMIDs in one request -> titles, dates, author lists
//! - **Classify**: keyword heuristic on each author's affiliation, plus
//!   corresponding-author email lookup
//! - **Export**: fixed six-column CSV
//!
//! API failures are reported and yield an empty report; they never abort the run.
//!
//! # Example
//!
//! ```no_run
//! use pubmed_affiliations::{config::Config, formatters, pipeline, PubMedClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PubMedClient::new(Config::new(std::env::var("NCBI_API_KEY").ok()))?;
//!     let papers = pipeline::fetch_research_papers(&client, "crispr", 20, false).await;
//!     formatters::save_to_csv(&papers, "research_papers.csv")?;
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod pipeline;

pub use client::PubMedClient;
pub use config::Config;
pub use error::{ClientError, ExportError};
pub use models::PaperRecord;
