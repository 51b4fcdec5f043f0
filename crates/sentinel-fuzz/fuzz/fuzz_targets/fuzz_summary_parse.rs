#![no_main]

use libfuzzer_sys::fuzz_target;
use pubmed_affiliations::models::{PaperRecord, SummaryResponse};

fuzz_target!(|data: &[u8]| {
    // Any JSON body must decode, and every key must build a row without panicking
    if let Ok(response) = serde_json::from_slice::<SummaryResponse>(data) {
        for id in response.result.keys() {
            let summary = response.document(id);
            let _ = PaperRecord::from_summary(id, summary.as_ref());
        }
    }
});
