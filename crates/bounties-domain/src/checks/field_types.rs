use super::utils::{FindingSpec, finding};
use crate::model::{DirectoryModel, EntryModel, RawField, RawRewards};
use crate::policy::{CheckPolicy, EffectiveConfig};
use bounties_types::{Finding, ids};
use serde_json::json;

pub fn run(model: &DirectoryModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_COMPANY_FIELD_TYPES) else {
        return;
    };

    for entry in &model.entries {
        if let Some(found) = &entry.shape_error {
            out.push(wrong_type(
                policy,
                model,
                entry,
                entry.pointer(),
                format!("entry #{} is a {found}, expected a mapping", entry.index),
                None,
                "mapping",
                found,
            ));
            continue;
        }

        let scalars = entry
            .required_fields()
            .into_iter()
            .chain([("notes", &entry.notes)]);
        for (field, value) in scalars {
            if let RawField::WrongType(found) = value {
                out.push(wrong_type(
                    policy,
                    model,
                    entry,
                    entry.field_pointer(field),
                    format!(
                        "{} has a {found} for '{field}', expected text",
                        entry.display_name()
                    ),
                    Some(field),
                    "string",
                    found,
                ));
            }
        }

        match &entry.rewards {
            RawRewards::WrongType(found) => out.push(wrong_type(
                policy,
                model,
                entry,
                entry.field_pointer("rewards"),
                format!(
                    "{} has a {found} for 'rewards', expected a list",
                    entry.display_name()
                ),
                Some("rewards"),
                "sequence",
                found,
            )),
            RawRewards::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    let found = match item {
                        RawField::WrongType(kind) => kind.as_str(),
                        RawField::Null => "null",
                        RawField::Text(_) | RawField::Missing => continue,
                    };
                    out.push(wrong_type(
                        policy,
                        model,
                        entry,
                        format!("{}/{i}", entry.field_pointer("rewards")),
                        format!(
                            "{} has a {found} in 'rewards', expected a reward tag",
                            entry.display_name()
                        ),
                        Some("rewards"),
                        "string",
                        found,
                    ));
                }
            }
            RawRewards::Missing | RawRewards::Null => {}
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn wrong_type(
    policy: &CheckPolicy,
    model: &DirectoryModel,
    entry: &EntryModel,
    pointer: String,
    message: String,
    field: Option<&str>,
    expected: &str,
    found: &str,
) -> Finding {
    finding(
        policy,
        FindingSpec {
            check_id: ids::CHECK_COMPANY_FIELD_TYPES,
            code: ids::CODE_WRONG_TYPE,
            message,
            location: entry.location(&model.path, pointer),
            help: Some(format!("Write this value as a YAML {expected}.")),
            data: json!({ "field": field, "expected": expected, "found": found }),
        },
    )
}
