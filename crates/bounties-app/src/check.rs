//! The `check` use case: validate the directory and produce a report.

use anyhow::Context;
use bounties_domain::model::DirectoryModel;
use bounties_domain::report::DomainReport;
use bounties_settings::{BountiesConfigV1, Overrides, ResolvedConfig};
use bounties_types::{BountiesReport, ReportEnvelope, SCHEMA_REPORT_V1, Verdict};
use camino::Utf8Path;
use time::OffsetDateTime;

use crate::report::tool_meta;

/// Input shared by the check, table and readme use cases.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Repository root path.
    pub repo_root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: BountiesReport,
    /// The directory as loaded, for use cases that go on to render it.
    pub model: DirectoryModel,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, load the data file, evaluate, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        BountiesConfigV1::default()
    } else {
        bounties_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved =
        bounties_settings::resolve_config(cfg, input.overrides.clone()).context("resolve config")?;

    let model = bounties_repo::load_directory(input.repo_root, &resolved.data_path)
        .context("load directory")?;

    let DomainReport {
        verdict,
        findings,
        data,
        counts,
    } = bounties_domain::evaluate(&model, &resolved.effective);

    tracing::info!(
        verdict = ?verdict,
        entries = data.entries_scanned,
        errors = counts.error,
        warnings = counts.warning,
        info = counts.info,
        "check finished"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        findings,
        data,
    };

    Ok(CheckOutput {
        report,
        model,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
