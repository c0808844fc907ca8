//! The directory schema: one `Company` per disclosure program.
//!
//! These are pure value types. Loading, validation and rendering live in other crates.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Incentive a company offers to reporters.
///
/// Closed set: anything other than these four tags is invalid.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Reward {
    Bounty,
    Recognition,
    Swag,
    Other,
}

impl Reward {
    pub const ALL: [Reward; 4] = [
        Reward::Bounty,
        Reward::Recognition,
        Reward::Swag,
        Reward::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Reward::Bounty => "bounty",
            Reward::Recognition => "recognition",
            Reward::Swag => "swag",
            Reward::Other => "other",
        }
    }
}

impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown reward '{0}' (expected bounty|recognition|swag|other)")]
pub struct UnknownReward(pub String);

impl FromStr for Reward {
    type Err = UnknownReward;

    /// Exact, case-sensitive match on the lowercase tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Reward::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownReward(s.to_string()))
    }
}

/// One directory entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Company {
    /// Display name of the organization.
    pub company: String,
    /// Link to the organization's security policy page.
    pub url: String,
    /// Email address or URL for reporting.
    pub contact: String,

    /// Incentives offered, in authored order. `None` means unspecified, not "no rewards".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewards: Option<Vec<Reward>>,

    /// Free-form supplementary information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Company {
    pub fn new(
        company: impl Into<String>,
        url: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            url: url.into(),
            contact: contact.into(),
            rewards: None,
            notes: None,
        }
    }

    pub fn with_rewards(mut self, rewards: impl IntoIterator<Item = Reward>) -> Self {
        self.rewards = Some(rewards.into_iter().collect());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Rewards in authored order; empty when unspecified.
    pub fn rewards(&self) -> &[Reward] {
        self.rewards.as_deref().unwrap_or_default()
    }

    /// Host of the security page, if `url` is an absolute http(s) URL.
    pub fn host(&self) -> Option<String> {
        parse_http_url(self.url.trim()).and_then(|url| url.host_str().map(str::to_string))
    }
}

/// Parse an absolute `http`/`https` URL that names a host.
///
/// Values containing whitespace are rejected outright: the URL parser would strip or
/// percent-encode it, but the text is linked verbatim from the README.
pub fn parse_http_url(text: &str) -> Option<Url> {
    if text.chars().any(char::is_whitespace) {
        return None;
    }
    let url = Url::parse(text).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    url.host_str().filter(|host| !host.is_empty())?;
    Some(url)
}

/// The directory: presentation order, no identity key.
pub type Companies = Vec<Company>;

/// Top-level shape of `bounties.yml`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Directory {
    #[schemars(with = "Option<Companies>")]
    #[serde(default, deserialize_with = "null_as_empty")]
    pub companies: Companies,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Companies, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v: Option<Companies> = Option::deserialize(deserializer)?;
    Ok(v.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> Company {
        Company::new(
            "Acme Corp",
            "https://acme.example/security",
            "security@acme.example",
        )
    }

    #[test]
    fn reward_parses_only_known_tags() {
        for r in Reward::ALL {
            assert_eq!(r.as_str().parse::<Reward>(), Ok(r));
        }
        assert_eq!(
            "cash".parse::<Reward>(),
            Err(UnknownReward("cash".to_string()))
        );
        assert!("Bounty".parse::<Reward>().is_err());
    }

    #[test]
    fn full_record_conforms() {
        let yaml = r#"
company: Acme Corp
url: https://acme.example/security
contact: security@acme.example
rewards: [bounty, swag]
notes: 90-day disclosure window
"#;
        let c: Company = serde_yaml::from_str(yaml).expect("parse");
        assert_eq!(
            c,
            acme()
                .with_rewards([Reward::Bounty, Reward::Swag])
                .with_notes("90-day disclosure window")
        );
    }

    #[test]
    fn record_without_optionals_conforms() {
        let yaml = r#"
company: Acme Corp
url: https://acme.example/security
contact: security@acme.example
"#;
        let c: Company = serde_yaml::from_str(yaml).expect("parse");
        assert_eq!(c, acme());
        assert!(c.rewards.is_none());
        assert!(c.rewards().is_empty());
    }

    #[test]
    fn unknown_reward_is_rejected() {
        let yaml = r#"
company: Acme Corp
url: https://acme.example/security
contact: security@acme.example
rewards: [cash]
"#;
        let err = serde_yaml::from_str::<Company>(yaml).expect_err("cash is not a reward");
        assert!(err.to_string().contains("cash"), "{err}");
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let yaml = "company: Acme Corp\nurl: https://acme.example/security\n";
        assert!(serde_yaml::from_str::<Company>(yaml).is_err());
    }

    #[test]
    fn absent_optionals_are_not_serialized() {
        let json = serde_json::to_value(acme()).expect("serialize");
        let obj = json.as_object().expect("object");
        assert!(!obj.contains_key("rewards"));
        assert!(!obj.contains_key("notes"));
    }

    #[test]
    fn empty_rewards_stays_distinct_from_absent() {
        let c = acme().with_rewards([]);
        let json = serde_json::to_string(&c).expect("serialize");
        let back: Company = serde_json::from_str(&json).expect("parse");
        assert_eq!(back.rewards, Some(Vec::new()));
    }

    #[test]
    fn http_urls_need_scheme_and_host() {
        let host = |s: &str| parse_http_url(s).and_then(|u| u.host_str().map(str::to_string));
        assert_eq!(host("https://acme.example/security").as_deref(), Some("acme.example"));
        assert_eq!(host("HTTP://www.Acme.example").as_deref(), Some("www.acme.example"));
        assert_eq!(
            host("https://user@acme.example:8443/x?y#z").as_deref(),
            Some("acme.example")
        );
        assert_eq!(host("https://[::1]:8080/").as_deref(), Some("[::1]"));
        assert!(parse_http_url("acme.example/security").is_none());
        assert!(parse_http_url("ftp://acme.example").is_none());
        assert!(parse_http_url("https://acme example").is_none());
        assert!(parse_http_url("https://acme.example/sec urity").is_none());
    }

    #[test]
    fn malformed_authorities_are_not_urls() {
        assert!(parse_http_url("https://acme.example:notaport/").is_none());
        assert!(parse_http_url("https://<b>/").is_none());
        assert!(parse_http_url("https://").is_none());
    }

    #[test]
    fn company_host_comes_from_url() {
        assert_eq!(acme().host().as_deref(), Some("acme.example"));
        let relative = Company::new("Acme Corp", "acme.example/security", "security@acme.example");
        assert_eq!(relative.host(), None);
    }

    #[test]
    fn null_companies_is_empty_directory() {
        let d: Directory = serde_yaml::from_str("companies:\n").expect("parse");
        assert!(d.companies.is_empty());
        let d: Directory = serde_yaml::from_str("{}").expect("parse");
        assert!(d.companies.is_empty());
    }
}
