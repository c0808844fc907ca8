//! Use case orchestration for bounties.
//!
//! This crate provides the application layer: use cases that coordinate the domain, repo, and
//! render layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod readme;
mod render;
mod report;
mod table;

#[cfg(test)]
mod test_support;

pub use check::{CheckInput, CheckOutput, run_check, verdict_exit_code};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use readme::{ReadmeOutput, run_readme, update_readme};
pub use render::{render_annotations, render_markdown};
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
pub use table::{TableOutput, run_table};
