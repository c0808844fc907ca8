use bounties_types::{Company, Location, RepoPath, Reward};

/// The five keys a directory entry may carry.
pub const KNOWN_FIELDS: [&str; 5] = ["company", "url", "contact", "rewards", "notes"];

/// A data file as authored, before any validation.
///
/// Loosely typed on purpose: every shape problem must survive loading so it can be reported.
#[derive(Clone, Debug, Default)]
pub struct DirectoryModel {
    pub path: RepoPath,
    pub entries: Vec<EntryModel>,
}

/// A scalar field as it appeared in the document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RawField {
    #[default]
    Missing,
    /// Key present with an explicit null (`notes:`).
    Null,
    Text(String),
    /// Present but not a scalar; carries the YAML kind (`sequence`, `mapping`, ...).
    WrongType(String),
}

impl RawField {
    pub fn text(&self) -> Option<&str> {
        match self {
            RawField::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Text with surrounding whitespace removed, `None` when blank or absent.
    pub fn non_blank(&self) -> Option<&str> {
        self.text().map(str::trim).filter(|s| !s.is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RawRewards {
    #[default]
    Missing,
    Null,
    List(Vec<RawField>),
    WrongType(String),
}

impl RawRewards {
    pub fn items(&self) -> &[RawField] {
        match self {
            RawRewards::List(items) => items,
            _ => &[],
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct EntryModel {
    /// Position in `companies`, zero-based.
    pub index: u32,
    /// Set when the sequence item is not a mapping; all fields are then `Missing`.
    pub shape_error: Option<String>,
    pub company: RawField,
    pub url: RawField,
    pub contact: RawField,
    pub rewards: RawRewards,
    pub notes: RawField,
    /// Keys outside [`KNOWN_FIELDS`], in authored order.
    pub unknown_keys: Vec<String>,
}

impl EntryModel {
    pub fn pointer(&self) -> String {
        format!("/companies/{}", self.index)
    }

    pub fn field_pointer(&self, field: &str) -> String {
        format!("/companies/{}/{}", self.index, escape_pointer_token(field))
    }

    pub fn location(&self, path: &RepoPath, pointer: String) -> Location {
        Location {
            path: path.clone(),
            entry: Some(self.index),
            pointer: Some(pointer),
        }
    }

    /// Required text fields paired with their key, in declaration order.
    pub fn required_fields(&self) -> [(&'static str, &RawField); 3] {
        [
            ("company", &self.company),
            ("url", &self.url),
            ("contact", &self.contact),
        ]
    }

    /// Name used in finding messages.
    pub fn display_name(&self) -> String {
        match self.company.non_blank() {
            Some(name) => format!("'{name}'"),
            None => format!("entry #{}", self.index),
        }
    }

    /// Convert to the typed schema.
    ///
    /// Returns `None` when a required field is not text. Reward tags that do not parse are
    /// dropped; a `rewards` list that is not a list is treated as unspecified.
    pub fn to_company(&self) -> Option<Company> {
        let mut company = Company::new(
            self.company.text()?.trim(),
            self.url.text()?.trim(),
            self.contact.text()?.trim(),
        );
        if let RawRewards::List(items) = &self.rewards {
            company = company.with_rewards(
                items
                    .iter()
                    .filter_map(|item| item.text()?.trim().parse::<Reward>().ok()),
            );
        }
        if let RawField::Text(notes) = &self.notes {
            company = company.with_notes(notes.clone());
        }
        Some(company)
    }
}

/// RFC 6901 escaping for a single reference token.
fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}
