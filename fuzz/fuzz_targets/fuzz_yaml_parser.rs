//! Fuzz target for `bounties.yml` parsing.
//!
//! Goal: neither the lenient model builder nor the strict typed parser may **panic**.
//! Errors are fine.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_yaml_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = bounties_repo::fuzz::parse_directory(text);
        let _ = bounties_repo::fuzz::parse_companies(text);
    }
});
