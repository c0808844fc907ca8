use crate::policy::CheckPolicy;
use bounties_types::{Finding, Location};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde_json::Value;

/// Compile allowlist entries as case-sensitive globs.
///
/// Patterns are validated in `bounties-settings`; an invalid one here is skipped.
pub fn build_allowlist(allow: &[String]) -> Option<GlobSet> {
    if allow.is_empty() {
        return None;
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in allow {
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }
    builder.build().ok()
}

pub fn is_allowed(allow: Option<&GlobSet>, value: &str) -> bool {
    allow.map(|set| set.is_match(value)).unwrap_or(false)
}

pub struct FindingSpec<'a> {
    pub check_id: &'a str,
    pub code: &'a str,
    pub message: String,
    pub location: Location,
    pub help: Option<String>,
    pub data: Value,
}

pub fn finding(policy: &CheckPolicy, spec: FindingSpec<'_>) -> Finding {
    Finding {
        severity: policy.severity,
        check_id: spec.check_id.to_string(),
        code: spec.code.to_string(),
        message: spec.message,
        location: Some(spec.location),
        help: spec.help,
        url: None,
        fingerprint: None,
        data: spec.data,
    }
}
