use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Repo-relative path of a data file, as it appears in findings.
///
/// Always forward slashes, never a leading `./`, never empty.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct RepoPath(String);

impl Default for RepoPath {
    fn default() -> Self {
        RepoPath::new("bounties.yml")
    }
}

impl RepoPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while let Some(rest) = v.strip_prefix("./") {
            v = rest.to_string();
        }
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve against a repository root on disk.
    pub fn under(&self, root: &Utf8Path) -> Utf8PathBuf {
        root.join(&self.0)
    }
}

impl From<&Utf8Path> for RepoPath {
    fn from(value: &Utf8Path) -> Self {
        RepoPath::new(value.as_str())
    }
}

impl From<&str> for RepoPath {
    fn from(value: &str) -> Self {
        RepoPath::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_separators_and_dot_prefix() {
        assert_eq!(RepoPath::new(".\\data\\bounties.yml").as_str(), "data/bounties.yml");
        assert_eq!(RepoPath::new("././bounties.yml").as_str(), "bounties.yml");
        assert_eq!(RepoPath::new("").as_str(), ".");
    }

    #[test]
    fn resolves_under_root() {
        let p = RepoPath::new(".github/README.md");
        assert_eq!(
            p.under(Utf8Path::new("/repo")),
            Utf8PathBuf::from("/repo/.github/README.md")
        );
    }
}
