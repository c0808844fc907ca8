use super::utils::{FindingSpec, finding};
use crate::model::DirectoryModel;
use crate::policy::EffectiveConfig;
use bounties_types::{Finding, Reward, ids};
use serde_json::json;
use std::collections::BTreeMap;

pub fn run(model: &DirectoryModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_COMPANY_REWARD_DUPLICATES) else {
        return;
    };

    for entry in &model.entries {
        let mut first_seen: BTreeMap<Reward, usize> = BTreeMap::new();

        for (i, item) in entry.rewards.items().iter().enumerate() {
            let Some(reward) = item.text().and_then(|t| t.parse::<Reward>().ok()) else {
                continue;
            };
            let Some(&first) = first_seen.get(&reward) else {
                first_seen.insert(reward, i);
                continue;
            };

            out.push(finding(
                policy,
                FindingSpec {
                    check_id: ids::CHECK_COMPANY_REWARD_DUPLICATES,
                    code: ids::CODE_DUPLICATE_REWARD,
                    message: format!(
                        "{} lists reward '{}' more than once",
                        entry.display_name(),
                        reward
                    ),
                    location: entry
                        .location(&model.path, format!("{}/{i}", entry.field_pointer("rewards"))),
                    help: Some("Remove the repeated reward.".to_string()),
                    data: json!({ "value": reward.as_str(), "first_index": first }),
                },
            ));
        }
    }
}
