#![no_main]

use libfuzzer_sys::fuzz_target;
use pubmed_affiliations::classify::{is_corresponding_author, is_non_academic};

fuzz_target!(|data: &[u8]| {
    if let Ok(affiliation) = std::str::from_utf8(data) {
        let _ = is_non_academic(affiliation);
        let _ = is_corresponding_author(affiliation);
    }
});
