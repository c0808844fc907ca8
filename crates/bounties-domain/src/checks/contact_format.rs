use super::utils::{FindingSpec, finding};
use crate::model::DirectoryModel;
use crate::policy::EffectiveConfig;
use bounties_types::{Finding, ids, parse_http_url};
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^[^@\s<>()\[\],;:"]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$"#,
    )
    .expect("email pattern is a valid regex")
});

pub fn run(model: &DirectoryModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_COMPANY_CONTACT_FORMAT) else {
        return;
    };

    for entry in &model.entries {
        let Some(contact) = entry.contact.non_blank() else {
            continue;
        };
        if is_valid_contact(contact) {
            continue;
        }

        out.push(finding(
            policy,
            FindingSpec {
                check_id: ids::CHECK_COMPANY_CONTACT_FORMAT,
                code: ids::CODE_INVALID_CONTACT,
                message: format!(
                    "{} has a contact that is neither an email address nor an http(s) URL: {}",
                    entry.display_name(),
                    contact
                ),
                location: entry.location(&model.path, entry.field_pointer("contact")),
                help: Some(
                    "Use the disclosure email address, a mailto: link, or the submission page URL."
                        .to_string(),
                ),
                data: json!({ "value": contact }),
            },
        ));
    }
}

/// Email address, `mailto:` URI (query allowed), or absolute http(s) URL.
pub fn is_valid_contact(contact: &str) -> bool {
    if parse_http_url(contact).is_some() {
        return true;
    }
    if let Some(rest) = strip_prefix_ignore_case(contact, "mailto:") {
        let address = rest.split('?').next().unwrap_or(rest);
        return is_email(address);
    }
    is_email(contact)
}

pub fn is_email(s: &str) -> bool {
    EMAIL.is_match(s)
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &s[prefix.len()..])
}
