use super::utils::{FindingSpec, finding};
use crate::model::{DirectoryModel, RawField};
use crate::policy::EffectiveConfig;
use bounties_types::{Finding, ids};
use serde_json::json;

pub fn run(model: &DirectoryModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_COMPANY_REQUIRED_FIELDS) else {
        return;
    };

    for entry in &model.entries {
        // Non-mapping entries are reported once, by company.field_types.
        if entry.shape_error.is_some() {
            continue;
        }

        for (field, value) in entry.required_fields() {
            let (code, message, pointer) = match value {
                RawField::Missing => (
                    ids::CODE_MISSING_FIELD,
                    format!("{} is missing required field '{}'", entry.display_name(), field),
                    entry.pointer(),
                ),
                RawField::Null => (
                    ids::CODE_EMPTY_FIELD,
                    format!("{} has an empty '{}'", entry.display_name(), field),
                    entry.field_pointer(field),
                ),
                RawField::Text(s) if s.trim().is_empty() => (
                    ids::CODE_EMPTY_FIELD,
                    format!("{} has a blank '{}'", entry.display_name(), field),
                    entry.field_pointer(field),
                ),
                RawField::Text(_) | RawField::WrongType(_) => continue,
            };

            out.push(finding(
                policy,
                FindingSpec {
                    check_id: ids::CHECK_COMPANY_REQUIRED_FIELDS,
                    code,
                    message,
                    location: entry.location(&model.path, pointer),
                    help: Some(format!("Set '{field}' to a non-empty value.")),
                    data: json!({ "field": field }),
                },
            ));
        }
    }
}
