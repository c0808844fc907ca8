//! Data file adapters: read `bounties.yml` and turn it into the validation model.
//!
//! This crate is allowed to do filesystem IO. Everything else in the workspace sees the data
//! file only through [`DirectoryModel`] or typed [`Companies`].

#![forbid(unsafe_code)]

mod parse;

use anyhow::Context;
use bounties_domain::model::DirectoryModel;
use bounties_types::{Companies, RepoPath};
use camino::Utf8Path;

pub use parse::{parse_companies, parse_directory, to_yaml};

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Parse arbitrary text as a directory and convert every entry that can be converted.
    ///
    /// **Never panics** on any input.
    pub fn parse_directory(text: &str) -> anyhow::Result<usize> {
        let model = parse::parse_directory(&RepoPath::default(), text)?;
        Ok(model
            .entries
            .iter()
            .filter_map(|e| e.to_company())
            .count())
    }

    /// Strict typed parse of arbitrary text. **Never panics** on any input.
    pub fn parse_companies(text: &str) -> anyhow::Result<()> {
        let _ = parse::parse_companies(text)?;
        Ok(())
    }
}

/// Read the data file under `repo_root` and build the model the checks run on.
pub fn load_directory(repo_root: &Utf8Path, data_path: &RepoPath) -> anyhow::Result<DirectoryModel> {
    let text = read_data_file(repo_root, data_path)?;
    let model = parse::parse_directory(data_path, &text)
        .with_context(|| format!("parse {}", data_path.as_str()))?;
    tracing::debug!(
        path = data_path.as_str(),
        entries = model.entries.len(),
        "loaded directory"
    );
    Ok(model)
}

/// Read the data file under `repo_root` as typed records, failing on any schema violation.
pub fn load_companies(repo_root: &Utf8Path, data_path: &RepoPath) -> anyhow::Result<Companies> {
    let text = read_data_file(repo_root, data_path)?;
    parse::parse_companies(&text).with_context(|| format!("parse {}", data_path.as_str()))
}

fn read_data_file(repo_root: &Utf8Path, data_path: &RepoPath) -> anyhow::Result<String> {
    let abs = data_path.under(repo_root);
    std::fs::read_to_string(&abs).with_context(|| format!("read {}", abs))
}
