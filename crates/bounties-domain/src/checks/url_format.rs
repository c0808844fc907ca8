use super::utils::{FindingSpec, finding};
use crate::model::DirectoryModel;
use crate::policy::EffectiveConfig;
use bounties_types::{Finding, ids, parse_http_url};
use serde_json::json;

pub fn run(model: &DirectoryModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_COMPANY_URL_FORMAT) else {
        return;
    };

    for entry in &model.entries {
        // Blank or absent URLs belong to company.required_fields.
        let Some(url) = entry.url.non_blank() else {
            continue;
        };
        if parse_http_url(url).is_some() {
            continue;
        }

        let help = if url.contains("://") {
            "Use an http:// or https:// URL with a host name.".to_string()
        } else {
            format!("Add the scheme, e.g. 'https://{url}'.")
        };

        out.push(finding(
            policy,
            FindingSpec {
                check_id: ids::CHECK_COMPANY_URL_FORMAT,
                code: ids::CODE_INVALID_URL,
                message: format!(
                    "{} has a security page URL that is not an absolute http(s) URL: {}",
                    entry.display_name(),
                    url
                ),
                location: entry.location(&model.path, entry.field_pointer("url")),
                help: Some(help),
                data: json!({ "value": url }),
            },
        ));
    }
}
