#![no_main]

use libfuzzer_sys::fuzz_target;
use pubmed_affiliations::models::SearchResponse;

fuzz_target!(|data: &[u8]| {
    // Try to parse arbitrary bytes as an ESearch body
    // Should never panic, only return Ok or Err
    if let Ok(response) = serde_json::from_slice::<SearchResponse>(data) {
        let _ = response.ids();
    }
});
