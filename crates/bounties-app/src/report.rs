use anyhow::Context;
use bounties_render::{
    RenderableData, RenderableFinding, RenderableLocation, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use bounties_types::{
    BountiesData, BountiesReport, Finding, ReportEnvelope, SCHEMA_REPORT_V1, Severity, ToolMeta,
    Verdict, ids,
};
use time::OffsetDateTime;

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "bounties".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

pub fn parse_report_json(text: &str) -> anyhow::Result<BountiesReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse bounties report")
}

pub fn serialize_report(report: &BountiesReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &BountiesReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            data_file: report.data.data_file.clone(),
            entries_scanned: report.data.entries_scanned,
            findings_emitted: report.data.findings_emitted,
            findings_total: report.data.findings_total,
            truncated_reason: report.data.truncated_reason.clone(),
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        check_id: f.check_id.clone(),
        code: f.code.clone(),
        message: f.message.clone(),
        location: f.location.as_ref().map(|loc| RenderableLocation {
            path: loc.path.as_str().to_string(),
            entry: loc.entry,
            pointer: loc.pointer.clone(),
        }),
        help: f.help.clone(),
        url: f.url.clone(),
    }
}

/// A failing report carrying a single `tool.runtime` finding, so CI still gets an artifact.
pub fn runtime_error_report(message: &str, data_file: &str) -> BountiesReport {
    let now = OffsetDateTime::now_utc();
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            location: None,
            help: Some("Fix the tool error and re-run bounties.".to_string()),
            url: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: BountiesData {
            profile: "unknown".to_string(),
            data_file: data_file.to_string(),
            entries_scanned: 0,
            findings_total: 1,
            findings_emitted: 1,
            truncated_reason: None,
        },
    }
}
