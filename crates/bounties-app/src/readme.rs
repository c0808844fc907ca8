//! The `readme` use case: keep the generated table inside the README current.

use anyhow::Context;
use bounties_render::{Markers, SpliceError, splice_between_markers};
use bounties_types::RepoPath;

use crate::check::CheckInput;
use crate::table::{TableOutput, run_table};

#[derive(Clone, Debug)]
pub struct ReadmeOutput {
    pub table: TableOutput,
    pub readme_path: RepoPath,
    /// New README text; `None` when the directory failed validation.
    pub updated: Option<String>,
    /// Whether `updated` differs from the README on disk.
    pub changed: bool,
}

/// Render the table and splice it into the README. Nothing is written; the caller decides.
pub fn run_readme(input: CheckInput<'_>) -> anyhow::Result<ReadmeOutput> {
    let repo_root = input.repo_root;
    let table = run_table(input)?;
    let readme_path = table.check.resolved_config.readme_path.clone();

    let Some(rendered) = table.table.as_deref() else {
        return Ok(ReadmeOutput {
            table,
            readme_path,
            updated: None,
            changed: false,
        });
    };

    let abs = readme_path.under(repo_root);
    let current = std::fs::read_to_string(&abs).with_context(|| format!("read {}", abs))?;
    let (updated, changed) = update_readme(&current, rendered, &table.check.resolved_config.markers)
        .with_context(|| format!("update {}", readme_path.as_str()))?;

    tracing::info!(path = readme_path.as_str(), changed, "readme spliced");

    Ok(ReadmeOutput {
        table,
        readme_path,
        updated: Some(updated),
        changed,
    })
}

/// Splice `table` into `current`, reporting whether anything changed.
pub fn update_readme(
    current: &str,
    table: &str,
    markers: &Markers,
) -> Result<(String, bool), SpliceError> {
    let updated = splice_between_markers(current, table, markers)?;
    let changed = updated != current;
    Ok((updated, changed))
}
