//! The `table` use case: check the directory, then render it as a Markdown table.

use bounties_domain::model::DirectoryModel;
use bounties_types::{Companies, Verdict};

use crate::check::{CheckInput, CheckOutput, run_check};

#[derive(Clone, Debug)]
pub struct TableOutput {
    pub check: CheckOutput,
    /// `None` when the check failed; a failing directory is never rendered.
    pub table: Option<String>,
    /// Indexes of entries left out because they could not be converted.
    pub skipped: Vec<u32>,
}

pub fn run_table(input: CheckInput<'_>) -> anyhow::Result<TableOutput> {
    let check = run_check(input)?;

    if check.report.verdict == Verdict::Fail {
        tracing::warn!(
            findings = check.report.findings.len(),
            "directory failed validation; table not rendered"
        );
        return Ok(TableOutput {
            check,
            table: None,
            skipped: Vec::new(),
        });
    }

    let (companies, skipped) = companies_from_model(&check.model);
    let table = bounties_render::render_directory_table(&companies, &check.resolved_config.table);
    tracing::debug!(rows = companies.len(), skipped = skipped.len(), "rendered table");

    Ok(TableOutput {
        check,
        table: Some(table),
        skipped,
    })
}

fn companies_from_model(model: &DirectoryModel) -> (Companies, Vec<u32>) {
    let mut companies = Companies::with_capacity(model.entries.len());
    let mut skipped = Vec::new();
    for entry in &model.entries {
        match entry.to_company() {
            Some(company) => companies.push(company),
            None => {
                tracing::warn!(
                    entry = entry.index,
                    path = model.path.as_str(),
                    "skipping entry without text company/url/contact"
                );
                skipped.push(entry.index);
            }
        }
    }
    (companies, skipped)
}
