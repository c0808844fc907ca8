//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.
//! Examples are `bounties.yml` snippets.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after data file examples.
    pub examples: ExamplePair,
}

/// Before and after `bounties.yml` snippets.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Entry that would trigger a finding.
    pub before: &'static str,
    /// Entry that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_COMPANY_REQUIRED_FIELDS => Some(explain_required_fields()),
        ids::CHECK_COMPANY_FIELD_TYPES => Some(explain_field_types()),
        ids::CHECK_COMPANY_REWARD_VALUES => Some(explain_reward_values()),
        ids::CHECK_COMPANY_REWARD_DUPLICATES => Some(explain_reward_duplicates()),
        ids::CHECK_COMPANY_URL_FORMAT => Some(explain_url_format()),
        ids::CHECK_COMPANY_CONTACT_FORMAT => Some(explain_contact_format()),
        ids::CHECK_COMPANY_UNKNOWN_FIELDS => Some(explain_unknown_fields()),
        ids::CHECK_DIRECTORY_DUPLICATES => Some(explain_duplicates()),

        // Codes
        ids::CODE_MISSING_FIELD => Some(retitle(explain_required_fields(), "Missing Field")),
        ids::CODE_EMPTY_FIELD => Some(retitle(explain_required_fields(), "Empty Field")),
        ids::CODE_WRONG_TYPE => Some(retitle(explain_field_types(), "Wrong Field Type")),
        ids::CODE_UNKNOWN_REWARD => Some(retitle(explain_reward_values(), "Unknown Reward")),
        ids::CODE_DUPLICATE_REWARD => {
            Some(retitle(explain_reward_duplicates(), "Duplicate Reward"))
        }
        ids::CODE_INVALID_URL => Some(retitle(explain_url_format(), "Invalid URL")),
        ids::CODE_INVALID_CONTACT => Some(retitle(explain_contact_format(), "Invalid Contact")),
        ids::CODE_UNKNOWN_FIELD => Some(retitle(explain_unknown_fields(), "Unknown Field")),
        ids::CODE_DUPLICATE_COMPANY => Some(retitle(explain_duplicates(), "Duplicate Company")),
        ids::CODE_DUPLICATE_URL => Some(retitle(explain_duplicates(), "Duplicate URL")),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_COMPANY_REQUIRED_FIELDS,
        ids::CHECK_COMPANY_FIELD_TYPES,
        ids::CHECK_COMPANY_REWARD_VALUES,
        ids::CHECK_COMPANY_REWARD_DUPLICATES,
        ids::CHECK_COMPANY_URL_FORMAT,
        ids::CHECK_COMPANY_CONTACT_FORMAT,
        ids::CHECK_COMPANY_UNKNOWN_FIELDS,
        ids::CHECK_DIRECTORY_DUPLICATES,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_MISSING_FIELD,
        ids::CODE_EMPTY_FIELD,
        ids::CODE_WRONG_TYPE,
        ids::CODE_UNKNOWN_REWARD,
        ids::CODE_DUPLICATE_REWARD,
        ids::CODE_INVALID_URL,
        ids::CODE_INVALID_CONTACT,
        ids::CODE_UNKNOWN_FIELD,
        ids::CODE_DUPLICATE_COMPANY,
        ids::CODE_DUPLICATE_URL,
    ]
}

fn retitle(mut exp: Explanation, title: &'static str) -> Explanation {
    exp.title = title;
    exp
}

fn explain_required_fields() -> Explanation {
    Explanation {
        title: "Required Fields",
        description: "\
Every directory entry must name the company, link to its security policy page,
and say where to send reports. `company`, `url` and `contact` are required and
must not be blank.

Entries missing any of these cannot be rendered: the README row would have no
name, no icon, or no submission link.",
        remediation: "\
Fill in all three fields. If the company has no dedicated policy page, link the
page that documents its disclosure process (often /.well-known/security.txt).",
        examples: ExamplePair {
            before: r#"- company: Acme Corp
  contact: security@acme.example"#,
            after: r#"- company: Acme Corp
  url: https://acme.example/security
  contact: security@acme.example"#,
        },
    }
}

fn explain_field_types() -> Explanation {
    Explanation {
        title: "Field Types",
        description: "\
Each entry is a mapping. `company`, `url`, `contact` and `notes` are text;
`rewards` is a list of reward tags. A list where text is expected (or text
where a list is expected) is rejected rather than guessed at.",
        remediation: "\
Write text fields as plain scalars and `rewards` as a YAML list, even when it
holds a single reward.",
        examples: ExamplePair {
            before: r#"- company: Acme Corp
  url: https://acme.example/security
  contact: security@acme.example
  rewards: bounty"#,
            after: r#"- company: Acme Corp
  url: https://acme.example/security
  contact: security@acme.example
  rewards: [bounty]"#,
        },
    }
}

fn explain_reward_values() -> Explanation {
    Explanation {
        title: "Reward Values",
        description: "\
Rewards are a closed set: `bounty` (cash payouts), `recognition` (hall of fame
or public thanks), `swag` (merchandise), and `other`. Anything else has no
badge and cannot be rendered.",
        remediation: "\
Use one of the four tags. Put specifics (amounts, programme names) in `notes`.",
        examples: ExamplePair {
            before: r#"- company: Acme Corp
  url: https://acme.example/security
  contact: security@acme.example
  rewards: [cash]"#,
            after: r#"- company: Acme Corp
  url: https://acme.example/security
  contact: security@acme.example
  rewards: [bounty]
  notes: Up to $5,000 for critical issues"#,
        },
    }
}

fn explain_reward_duplicates() -> Explanation {
    Explanation {
        title: "Duplicate Rewards",
        description: "\
A reward listed twice renders two identical badges in the same row.",
        remediation: "List each reward once.",
        examples: ExamplePair {
            before: r#"  rewards: [bounty, swag, bounty]"#,
            after: r#"  rewards: [bounty, swag]"#,
        },
    }
}

fn explain_url_format() -> Explanation {
    Explanation {
        title: "Security Page URL",
        description: "\
`url` must be an absolute http(s) URL with a host. The host is also used to
fetch the company icon, so scheme-less or relative links render broken rows.",
        remediation: "Use the full URL including `https://`.",
        examples: ExamplePair {
            before: r#"  url: acme.example/security"#,
            after: r#"  url: https://acme.example/security"#,
        },
    }
}

fn explain_contact_format() -> Explanation {
    Explanation {
        title: "Contact Format",
        description: "\
`contact` is where reporters submit findings. It must be an email address, a
`mailto:` link, or an http(s) URL (for example a submission form or a
HackerOne/Bugcrowd page).",
        remediation: "\
Use the disclosure mailbox or the programme page. Bare email addresses are
linked as `mailto:` automatically.",
        examples: ExamplePair {
            before: r#"  contact: ask for Bob in support"#,
            after: r#"  contact: mailto:security@acme.example"#,
        },
    }
}

fn explain_unknown_fields() -> Explanation {
    Explanation {
        title: "Unknown Fields",
        description: "\
Only `company`, `url`, `contact`, `rewards` and `notes` are read. Any other key
is ignored, which usually means a typo (`reward`, `note`, `email`).",
        remediation: "Rename the key to one of the five known fields, or remove it.",
        examples: ExamplePair {
            before: r#"  reward: [bounty]"#,
            after: r#"  rewards: [bounty]"#,
        },
    }
}

fn explain_duplicates() -> Explanation {
    Explanation {
        title: "Duplicate Entries",
        description: "\
Two entries share a company name or a security page URL (compared
case-insensitively, ignoring surrounding whitespace). The directory has no key
field, so duplicates usually mean the same company was added twice.",
        remediation: "\
Merge the entries. If two distinct programmes legitimately share a name, add
the name to the check's `allow` list in bounties.toml.",
        examples: ExamplePair {
            before: r#"- company: Acme Corp
  url: https://acme.example/security
  contact: security@acme.example
- company: acme corp
  url: https://acme.example/security
  contact: https://acme.example/report"#,
            after: r#"- company: Acme Corp
  url: https://acme.example/security
  contact: security@acme.example
  notes: Also accepts reports via https://acme.example/report"#,
        },
    }
}
