//! Fuzz target for the README table renderer.
//!
//! Goal: any company text renders to exactly one row per company, below a two-line header.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_table_render
//! ```

#![no_main]

use arbitrary::Arbitrary;
use bounties_render::{TableOptions, render_directory_table};
use bounties_types::{Company, Reward};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Entry {
    company: String,
    url: String,
    contact: String,
    rewards: Option<Vec<u8>>,
    notes: Option<String>,
}

#[derive(Arbitrary, Debug)]
struct TableInput {
    entries: Vec<Entry>,
    name_max_len: u8,
}

fuzz_target!(|input: TableInput| {
    if input.entries.len() > 50 {
        return;
    }

    let companies: Vec<Company> = input
        .entries
        .into_iter()
        .map(|e| Company {
            company: e.company,
            url: e.url,
            contact: e.contact,
            rewards: e
                .rewards
                .map(|tags| tags.iter().map(|t| Reward::ALL[*t as usize % 4]).collect()),
            notes: e.notes,
        })
        .collect();

    let opts = TableOptions {
        name_max_len: input.name_max_len as usize,
        ..TableOptions::default()
    };
    let table = render_directory_table(&companies, &opts);

    if companies.is_empty() {
        assert!(table.is_empty());
    } else {
        assert_eq!(table.lines().count(), companies.len() + 2);
    }
});
