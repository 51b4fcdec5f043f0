//! Fuzzing library for pubmed-affiliations.
//!
//! This crate provides fuzzing targets for the lenient E-utilities response
//! models and the affiliation heuristics.
//!
//! # Usage
//!
//! ```bash
//! cd crates/sentinel-fuzz
//! cargo +nightly fuzz run fuzz_summary_parse -- -max_total_time=60
//! ```

pub use pubmed_affiliations::{classify, models};
