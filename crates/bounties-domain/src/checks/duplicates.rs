use super::utils::{FindingSpec, build_allowlist, finding, is_allowed};
use crate::model::{DirectoryModel, EntryModel};
use crate::policy::{CheckPolicy, EffectiveConfig};
use bounties_types::{Finding, ids};
use serde_json::json;
use std::collections::HashMap;

/// Report the second and later entries sharing a company name or a security page URL.
///
/// Allowlist globs are matched against the trimmed company name and the trimmed URL.
pub fn run(model: &DirectoryModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_DIRECTORY_DUPLICATES) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);

    let mut names: HashMap<String, u32> = HashMap::new();
    let mut urls: HashMap<String, u32> = HashMap::new();

    for entry in &model.entries {
        if let Some(name) = entry.company.non_blank() {
            if !is_allowed(allow.as_ref(), name) {
                check_seen(
                    &mut names,
                    name.to_lowercase(),
                    Dup {
                        policy,
                        model,
                        entry,
                        field: "company",
                        value: name,
                        code: ids::CODE_DUPLICATE_COMPANY,
                    },
                    out,
                );
            }
        }

        if let Some(url) = entry.url.non_blank() {
            let exempt = is_allowed(allow.as_ref(), url)
                || entry
                    .company
                    .non_blank()
                    .is_some_and(|name| is_allowed(allow.as_ref(), name));
            if !exempt {
                check_seen(
                    &mut urls,
                    normalize_url(url),
                    Dup {
                        policy,
                        model,
                        entry,
                        field: "url",
                        value: url,
                        code: ids::CODE_DUPLICATE_URL,
                    },
                    out,
                );
            }
        }
    }
}

struct Dup<'a> {
    policy: &'a CheckPolicy,
    model: &'a DirectoryModel,
    entry: &'a EntryModel,
    field: &'static str,
    value: &'a str,
    code: &'static str,
}

fn check_seen(seen: &mut HashMap<String, u32>, key: String, dup: Dup<'_>, out: &mut Vec<Finding>) {
    let Some(&first) = seen.get(&key) else {
        seen.insert(key, dup.entry.index);
        return;
    };

    out.push(finding(
        dup.policy,
        FindingSpec {
            check_id: ids::CHECK_DIRECTORY_DUPLICATES,
            code: dup.code,
            message: format!(
                "entry #{} repeats the {} '{}' of entry #{}",
                dup.entry.index, dup.field, dup.value, first
            ),
            location: dup
                .entry
                .location(&dup.model.path, dup.entry.field_pointer(dup.field)),
            help: Some(
                "Merge the entries, or allowlist the name in bounties.toml if both are distinct programmes."
                    .to_string(),
            ),
            data: json!({ "value": dup.value, "first_entry": first }),
        },
    ));
}

/// Case-insensitive, ignoring surrounding whitespace and trailing slashes.
fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_lowercase()
}
