//! Stable DTOs and IDs used across the bounties workspace.
//!
//! This crate is intentionally boring:
//! - the directory schema (`Reward`, `Company`, `Companies`)
//! - data types for the emitted validation report
//! - stable string IDs and codes
//! - canonical repo-relative path handling
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod company;
pub mod explain;
pub mod ids;
pub mod path;
pub mod receipt;

pub use company::{Companies, Company, Directory, Reward, UnknownReward, parse_http_url};
pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use path::RepoPath;
pub use receipt::{
    BountiesData, BountiesReport, Finding, Location, ReportEnvelope, SCHEMA_REPORT_V1, Severity,
    ToolMeta, Verdict,
};
