use bounties_domain::policy::{CheckPolicy, EffectiveConfig, FailOn};
use bounties_types::Severity;
use std::collections::BTreeMap;

pub const DEFAULT_PROFILE: &str = "strict";

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> anyhow::Result<EffectiveConfig> {
    match profile {
        "strict" => Ok(strict_profile()),
        "lenient" => Ok(lenient_profile()),
        other => anyhow::bail!("unknown profile: {other} (expected 'strict' or 'lenient')"),
    }
}

/// Schema violations and malformed links fail; cosmetic issues warn.
fn strict_profile() -> EffectiveConfig {
    use bounties_types::ids::*;
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks: checks(&[
            (CHECK_COMPANY_REQUIRED_FIELDS, Severity::Error),
            (CHECK_COMPANY_FIELD_TYPES, Severity::Error),
            (CHECK_COMPANY_REWARD_VALUES, Severity::Error),
            (CHECK_COMPANY_URL_FORMAT, Severity::Error),
            (CHECK_COMPANY_CONTACT_FORMAT, Severity::Error),
            (CHECK_DIRECTORY_DUPLICATES, Severity::Error),
            (CHECK_COMPANY_REWARD_DUPLICATES, Severity::Warning),
            (CHECK_COMPANY_UNKNOWN_FIELDS, Severity::Warning),
        ]),
    }
}

/// Only schema violations fail; everything else is advisory.
fn lenient_profile() -> EffectiveConfig {
    use bounties_types::ids::*;
    EffectiveConfig {
        profile: "lenient".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks: checks(&[
            (CHECK_COMPANY_REQUIRED_FIELDS, Severity::Error),
            (CHECK_COMPANY_FIELD_TYPES, Severity::Error),
            (CHECK_COMPANY_REWARD_VALUES, Severity::Error),
            (CHECK_COMPANY_URL_FORMAT, Severity::Warning),
            (CHECK_COMPANY_CONTACT_FORMAT, Severity::Warning),
            (CHECK_DIRECTORY_DUPLICATES, Severity::Warning),
            (CHECK_COMPANY_REWARD_DUPLICATES, Severity::Info),
            (CHECK_COMPANY_UNKNOWN_FIELDS, Severity::Info),
        ]),
    }
}

fn checks(entries: &[(&str, Severity)]) -> BTreeMap<String, CheckPolicy> {
    entries
        .iter()
        .map(|(id, sev)| (id.to_string(), CheckPolicy::enabled(*sev)))
        .collect()
}
