use crate::{RenderableFinding, RenderableReport, RenderableSeverity, RenderableVerdictStatus};
use std::collections::BTreeMap;

/// Markdown summary suitable for a PR comment.
///
/// Findings are grouped per directory entry (document-level findings first); within a group
/// the report's own order is kept.
pub fn render_markdown(report: &RenderableReport) -> String {
    let data = &report.data;
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };

    let mut out = String::from("# Bounties report\n\n");
    out.push_str(&format!("- Verdict: **{verdict}**\n"));
    out.push_str(&format!(
        "- Data: `{}` ({} entries)\n",
        data.data_file, data.entries_scanned
    ));
    out.push_str(&format!(
        "- Findings: {} shown of {}\n\n",
        data.findings_emitted, data.findings_total
    ));

    if let Some(reason) = &data.truncated_reason {
        out.push_str(&format!("> Note: {reason}\n\n"));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    let mut groups: BTreeMap<Option<u32>, Vec<&RenderableFinding>> = BTreeMap::new();
    for f in &report.findings {
        let entry = f.location.as_ref().and_then(|l| l.entry);
        groups.entry(entry).or_default().push(f);
    }

    for (entry, findings) in groups {
        match entry {
            Some(i) => out.push_str(&format!("## Entry #{i}\n\n")),
            None => out.push_str("## Data file\n\n"),
        }
        for f in findings {
            push_finding(&mut out, f);
        }
        out.push('\n');
    }

    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}

fn push_finding(out: &mut String, f: &RenderableFinding) {
    let sev = match f.severity {
        RenderableSeverity::Info => "INFO",
        RenderableSeverity::Warning => "WARN",
        RenderableSeverity::Error => "ERROR",
    };
    out.push_str(&format!("- **{sev}** `{}` ({})", f.code, f.check_id));
    match f.location.as_ref().and_then(|l| l.pointer.as_deref()) {
        Some(ptr) => out.push_str(&format!(" at `{ptr}`: ")),
        None => out.push_str(": "),
    }
    out.push_str(&f.message);
    out.push('\n');

    if let Some(help) = &f.help {
        out.push_str(&format!("  - Fix: {help}\n"));
    }
    if let Some(url) = &f.url {
        out.push_str(&format!("  - Docs: {url}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableData, RenderableLocation};

    fn data(emitted: u32, total: u32, truncated: Option<&str>) -> RenderableData {
        RenderableData {
            data_file: "bounties.yml".to_string(),
            entries_scanned: 3,
            findings_emitted: emitted,
            findings_total: total,
            truncated_reason: truncated.map(str::to_string),
        }
    }

    fn at_entry(entry: u32, pointer: &str) -> Option<RenderableLocation> {
        Some(RenderableLocation {
            path: "bounties.yml".to_string(),
            entry: Some(entry),
            pointer: Some(pointer.to_string()),
        })
    }

    fn finding(
        severity: RenderableSeverity,
        code: &str,
        location: Option<RenderableLocation>,
    ) -> RenderableFinding {
        RenderableFinding {
            severity,
            check_id: "company.reward_values".to_string(),
            code: code.to_string(),
            message: format!("{code} here"),
            location,
            help: None,
            url: None,
        }
    }

    #[test]
    fn renders_empty_report() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Pass,
            findings: Vec::new(),
            data: data(0, 0, None),
        };
        insta::assert_snapshot!(render_markdown(&report), @r"
        # Bounties report

        - Verdict: **PASS**
        - Data: `bounties.yml` (3 entries)
        - Findings: 0 shown of 0

        No findings.
        ");
    }

    #[test]
    fn groups_findings_by_entry() {
        let mut first = finding(
            RenderableSeverity::Error,
            "unknown_reward",
            at_entry(2, "/companies/2/rewards/0"),
        );
        first.help = Some("Use one of: bounty, recognition, swag, other.".to_string());
        first.url = Some("https://example.com/docs".to_string());

        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            findings: vec![
                first,
                finding(RenderableSeverity::Warning, "duplicate_reward", at_entry(0, "/companies/0/rewards/1")),
                finding(RenderableSeverity::Info, "runtime_error", None),
            ],
            data: data(3, 4, Some("findings truncated to max_findings=3")),
        };

        insta::assert_snapshot!(render_markdown(&report), @r"
        # Bounties report

        - Verdict: **FAIL**
        - Data: `bounties.yml` (3 entries)
        - Findings: 3 shown of 4

        > Note: findings truncated to max_findings=3

        ## Data file

        - **INFO** `runtime_error` (company.reward_values): runtime_error here

        ## Entry #0

        - **WARN** `duplicate_reward` (company.reward_values) at `/companies/0/rewards/1`: duplicate_reward here

        ## Entry #2

        - **ERROR** `unknown_reward` (company.reward_values) at `/companies/2/rewards/0`: unknown_reward here
          - Fix: Use one of: bounty, recognition, swag, other.
          - Docs: https://example.com/docs
        ");
    }
}
