use anyhow::Context;
use bounties_domain::model::{DirectoryModel, EntryModel, RawField, RawRewards};
use bounties_types::{Companies, Company, Directory, RepoPath};
use serde_yaml::{Mapping, Value};

/// Build the loosely-typed model. Only document-level shape problems are errors; anything
/// wrong inside an entry is preserved for the checks to report.
///
/// Unquoted numbers and booleans are kept as wrong types rather than read as text, so a
/// document the checks pass is one [`parse_companies`] also accepts.
pub fn parse_directory(path: &RepoPath, text: &str) -> anyhow::Result<DirectoryModel> {
    let root = parse_value(text)?;

    let companies = match untag(&root) {
        Value::Null => None,
        Value::Mapping(map) => map.get("companies").map(untag),
        other => anyhow::bail!(
            "top level must be a mapping with a `companies` list, found a {}",
            kind(other)
        ),
    };

    let items: &[Value] = match companies {
        None | Some(Value::Null) => &[],
        Some(Value::Sequence(items)) => items.as_slice(),
        Some(other) => anyhow::bail!("`companies` must be a list, found a {}", kind(other)),
    };

    let mut entries = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let index = u32::try_from(i).context("too many directory entries")?;
        entries.push(match untag(item) {
            Value::Mapping(map) => entry_from_mapping(index, map),
            other => EntryModel {
                index,
                shape_error: Some(kind(other).to_string()),
                ..EntryModel::default()
            },
        });
    }

    Ok(DirectoryModel {
        path: path.clone(),
        entries,
    })
}

/// Strict typed parse: any schema violation is an error.
pub fn parse_companies(text: &str) -> anyhow::Result<Companies> {
    let root = parse_value(text)?;
    if root.is_null() {
        return Ok(Companies::new());
    }
    let dir: Directory = serde_yaml::from_value(root).context("decode directory")?;
    Ok(dir.companies)
}

pub fn to_yaml(companies: &[Company]) -> anyhow::Result<String> {
    let dir = Directory {
        companies: companies.to_vec(),
    };
    serde_yaml::to_string(&dir).context("serialize directory")
}

fn parse_value(text: &str) -> anyhow::Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_yaml::from_str(text).context("parse YAML")
}

fn entry_from_mapping(index: u32, map: &Mapping) -> EntryModel {
    let mut entry = EntryModel {
        index,
        ..EntryModel::default()
    };

    for (key, value) in map {
        let key = key_text(key);
        match key.as_str() {
            "company" => entry.company = scalar_field(value),
            "url" => entry.url = scalar_field(value),
            "contact" => entry.contact = scalar_field(value),
            "notes" => entry.notes = scalar_field(value),
            "rewards" => entry.rewards = rewards_field(value),
            _ => entry.unknown_keys.push(key),
        }
    }

    entry
}

fn scalar_field(value: &Value) -> RawField {
    match untag(value) {
        Value::Null => RawField::Null,
        Value::String(s) => RawField::Text(s.clone()),
        other => RawField::WrongType(kind(other).to_string()),
    }
}

fn rewards_field(value: &Value) -> RawRewards {
    match untag(value) {
        Value::Null => RawRewards::Null,
        Value::Sequence(items) => RawRewards::List(items.iter().map(scalar_field).collect()),
        other => RawRewards::WrongType(kind(other).to_string()),
    }
}

fn key_text(key: &Value) -> String {
    match untag(key) {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "~".to_string(),
        other => format!("<{}>", kind(other)),
    }
}

/// Custom tags (`!foo bar`) carry no meaning in the data file; look through them.
fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounties_types::Reward;

    fn parse(text: &str) -> DirectoryModel {
        parse_directory(&RepoPath::default(), text).expect("parse")
    }

    #[test]
    fn empty_and_null_documents_are_empty_directories() {
        for text in ["", "   \n", "# nothing yet\n", "companies:\n", "companies: []\n", "{}\n"] {
            assert!(parse(text).entries.is_empty(), "{text:?}");
        }
    }

    #[test]
    fn captures_fields_as_authored() {
        let model = parse(
            r#"companies:
  - company: Acme Corp
    url: https://acme.example/security
    contact: security@acme.example
    rewards: [bounty, cash, ~, [swag]]
    notes:
    programme: private
"#,
        );
        let e = &model.entries[0];
        assert_eq!(e.company.text(), Some("Acme Corp"));
        assert_eq!(e.notes, RawField::Null);
        assert_eq!(
            e.rewards,
            RawRewards::List(vec![
                RawField::Text("bounty".to_string()),
                RawField::Text("cash".to_string()),
                RawField::Null,
                RawField::WrongType("sequence".to_string()),
            ])
        );
        assert_eq!(e.unknown_keys, vec!["programme".to_string()]);
    }

    #[test]
    fn non_string_scalars_and_containers_are_wrong_types() {
        let model = parse(
            "companies:\n  - company: 1984\n    url: true\n    contact: {email: a@b.example}\n    rewards: bounty\n  - company: \"1984\"\n    rewards: [1, swag]\n",
        );
        let e = &model.entries[0];
        assert_eq!(e.company, RawField::WrongType("number".to_string()));
        assert_eq!(e.url, RawField::WrongType("boolean".to_string()));
        assert_eq!(e.contact, RawField::WrongType("mapping".to_string()));
        assert_eq!(e.rewards, RawRewards::WrongType("string".to_string()));
        assert_eq!(e.notes, RawField::Missing);

        let quoted = &model.entries[1];
        assert_eq!(quoted.company.text(), Some("1984"));
        assert_eq!(
            quoted.rewards,
            RawRewards::List(vec![
                RawField::WrongType("number".to_string()),
                RawField::Text("swag".to_string()),
            ])
        );
    }

    #[test]
    fn non_mapping_entries_are_kept_with_shape_error() {
        let model = parse("companies:\n  - just a string\n  - company: Acme\n");
        assert_eq!(model.entries.len(), 2);
        assert_eq!(model.entries[0].shape_error.as_deref(), Some("string"));
        assert_eq!(model.entries[1].index, 1);
        assert!(model.entries[1].shape_error.is_none());
    }

    #[test]
    fn document_shape_errors_abort() {
        let path = RepoPath::default();
        assert!(parse_directory(&path, "- company: Acme\n").is_err());
        assert!(parse_directory(&path, "companies: Acme\n").is_err());
        assert!(parse_directory(&path, "companies: [\n").is_err());
    }

    #[test]
    fn strict_parse_rejects_unknown_reward() {
        let ok = "companies:\n  - company: Acme Corp\n    url: https://acme.example/security\n    contact: security@acme.example\n    rewards: [bounty, swag]\n";
        let companies = parse_companies(ok).expect("valid");
        assert_eq!(companies[0].rewards(), &[Reward::Bounty, Reward::Swag]);

        let bad = ok.replace("[bounty, swag]", "[cash]");
        assert!(parse_companies(&bad).is_err());
    }

    #[test]
    fn to_yaml_omits_absent_optionals() {
        let yaml = to_yaml(&[Company::new("Acme Corp", "https://acme.example", "a@acme.example")])
            .expect("yaml");
        assert!(!yaml.contains("rewards"));
        assert!(!yaml.contains("notes"));
        assert_eq!(parse_companies(&yaml).expect("parse").len(), 1);
    }
}
