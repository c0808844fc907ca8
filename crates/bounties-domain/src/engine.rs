use crate::checks;
use crate::fingerprint::fingerprint_for_finding;
use crate::model::DirectoryModel;
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{DomainReport, SeverityCounts};
use bounties_types::{BountiesData, Finding, Severity, Verdict};

pub fn evaluate(model: &DirectoryModel, cfg: &EffectiveConfig) -> DomainReport {
    let mut findings: Vec<Finding> = Vec::new();

    checks::run_all(model, cfg, &mut findings);

    for f in &mut findings {
        if f.fingerprint.is_none() {
            f.fingerprint = Some(fingerprint_for_finding(f));
        }
    }

    // Deterministic ordering before truncation.
    findings.sort_by(compare_findings);

    let total = findings.len() as u32;

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let verdict = compute_verdict(&emitted, cfg.fail_on);
    let counts = SeverityCounts::from_findings(&emitted);

    let data = BountiesData {
        profile: cfg.profile.clone(),
        data_file: model.path.as_str().to_string(),
        entries_scanned: model.entries.len() as u32,
        findings_total: total,
        findings_emitted: emitted.len() as u32,
        truncated_reason,
    };

    DomainReport {
        verdict,
        findings: emitted,
        data,
        counts,
    }
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}

fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning -> info)
    // 2) location.path (missing last)
    // 3) location.entry (missing last)
    // 4) location.pointer
    // 5) check_id
    // 6) code
    // 7) message
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };
    let key = |f: &Finding| match &f.location {
        Some(l) => (
            l.path.as_str().to_string(),
            l.entry.unwrap_or(u32::MAX),
            l.pointer.clone().unwrap_or_default(),
        ),
        None => ("~".to_string(), u32::MAX, String::new()),
    };
    let (ap, ae, aptr) = key(a);
    let (bp, be, bptr) = key(b);

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then(ap.cmp(&bp))
        .then(ae.cmp(&be))
        .then(aptr.cmp(&bptr))
        .then(a.check_id.cmp(&b.check_id))
        .then(a.code.cmp(&b.code))
        .then(a.message.cmp(&b.message))
}
