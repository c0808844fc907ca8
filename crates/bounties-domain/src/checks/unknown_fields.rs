use super::utils::{FindingSpec, finding};
use crate::model::{DirectoryModel, KNOWN_FIELDS};
use crate::policy::EffectiveConfig;
use bounties_types::{Finding, ids};
use serde_json::json;

pub fn run(model: &DirectoryModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_COMPANY_UNKNOWN_FIELDS) else {
        return;
    };

    for entry in &model.entries {
        for key in &entry.unknown_keys {
            let help = match suggest(key) {
                Some(known) => format!("Did you mean '{known}'?"),
                None => format!("Known fields are: {}.", KNOWN_FIELDS.join(", ")),
            };

            out.push(finding(
                policy,
                FindingSpec {
                    check_id: ids::CHECK_COMPANY_UNKNOWN_FIELDS,
                    code: ids::CODE_UNKNOWN_FIELD,
                    message: format!(
                        "{} has unknown field '{}', which is ignored",
                        entry.display_name(),
                        key
                    ),
                    location: entry.location(&model.path, entry.field_pointer(key)),
                    help: Some(help),
                    data: json!({ "value": key }),
                },
            ));
        }
    }
}

/// Likely intended key for common slips.
fn suggest(key: &str) -> Option<&'static str> {
    let folded = key.trim().to_ascii_lowercase();
    if let Some(known) = KNOWN_FIELDS.into_iter().find(|k| *k == folded) {
        return Some(known);
    }
    match folded.as_str() {
        "reward" | "bounty" | "bounties" => Some("rewards"),
        "note" | "comment" | "comments" | "description" => Some("notes"),
        "name" | "org" | "organization" | "organisation" => Some("company"),
        "email" | "mail" | "report" | "submit" => Some("contact"),
        "link" | "website" | "policy" | "security_url" => Some("url"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::suggest;

    #[test]
    fn suggests_close_keys() {
        assert_eq!(suggest("reward"), Some("rewards"));
        assert_eq!(suggest("Notes"), Some("notes"));
        assert_eq!(suggest("email"), Some("contact"));
        assert_eq!(suggest("twitter"), None);
    }
}
