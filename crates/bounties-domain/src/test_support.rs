use crate::model::{DirectoryModel, EntryModel, RawField};
use crate::policy::{CheckPolicy, EffectiveConfig, FailOn};
use bounties_types::{RepoPath, Severity};
use std::collections::BTreeMap;

pub fn text(s: &str) -> RawField {
    RawField::Text(s.to_string())
}

/// A fully valid entry; tests break the field they care about.
pub fn entry(index: u32, company: &str) -> EntryModel {
    let slug: String = company
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    EntryModel {
        index,
        company: text(company),
        url: text(&format!("https://{slug}.example/security")),
        contact: text(&format!("security@{slug}.example")),
        ..EntryModel::default()
    }
}

pub fn model(entries: Vec<EntryModel>) -> DirectoryModel {
    DirectoryModel {
        path: RepoPath::new("bounties.yml"),
        entries,
    }
}

pub fn config_with_check(check_id: &str, severity: Severity) -> EffectiveConfig {
    config_with_check_allow(check_id, severity, Vec::new())
}

pub fn config_with_check_allow(
    check_id: &str,
    severity: Severity,
    allow: Vec<&str>,
) -> EffectiveConfig {
    let mut policy = CheckPolicy::enabled(severity);
    policy.allow = allow.into_iter().map(|s| s.to_string()).collect();

    let mut checks = BTreeMap::new();
    checks.insert(check_id.to_string(), policy);

    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks,
    }
}

/// Every known check enabled at one severity.
pub fn config_all(severity: Severity) -> EffectiveConfig {
    let checks = bounties_types::explain::all_check_ids()
        .iter()
        .map(|id| (id.to_string(), CheckPolicy::enabled(severity)))
        .collect();
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks,
    }
}
