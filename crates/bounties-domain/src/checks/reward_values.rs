use super::utils::{FindingSpec, finding};
use crate::model::DirectoryModel;
use crate::policy::EffectiveConfig;
use bounties_types::{Finding, Reward, ids};
use serde_json::json;

pub fn run(model: &DirectoryModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_COMPANY_REWARD_VALUES) else {
        return;
    };

    let allowed: Vec<&str> = Reward::ALL.iter().map(|r| r.as_str()).collect();

    for entry in &model.entries {
        for (i, item) in entry.rewards.items().iter().enumerate() {
            let Some(tag) = item.text() else { continue };
            if tag.parse::<Reward>().is_ok() {
                continue;
            }

            let help = match near_miss(tag) {
                Some(r) => format!("Did you mean '{r}'? Rewards are lowercase tags."),
                None => format!(
                    "Use one of: {}. Put programme details in 'notes'.",
                    allowed.join(", ")
                ),
            };

            out.push(finding(
                policy,
                FindingSpec {
                    check_id: ids::CHECK_COMPANY_REWARD_VALUES,
                    code: ids::CODE_UNKNOWN_REWARD,
                    message: format!("{} lists unknown reward '{}'", entry.display_name(), tag),
                    location: entry
                        .location(&model.path, format!("{}/{i}", entry.field_pointer("rewards"))),
                    help: Some(help),
                    data: json!({ "value": tag, "allowed": allowed }),
                },
            ));
        }
    }
}

/// A tag that only differs from a known reward by case or surrounding whitespace.
fn near_miss(tag: &str) -> Option<Reward> {
    let folded = tag.trim().to_ascii_lowercase();
    Reward::ALL.into_iter().find(|r| r.as_str() == folded)
}
