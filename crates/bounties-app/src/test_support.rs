use crate::CheckInput;
use bounties_settings::Overrides;
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub const ACME: &str = r#"companies:
  - company: Acme Corp
    url: https://acme.example/security
    contact: security@acme.example
    rewards: [bounty, swag]
    notes: 90-day disclosure window
"#;

pub const README: &str =
    "# Security contacts\n\n<!-- bounties-start -->\nstale\n<!-- bounties-end -->\n\nThanks!\n";

/// A throwaway repository root.
pub struct Repo {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl Repo {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path");
        Self { _tmp: tmp, root }
    }

    pub fn with_data(data: &str) -> Self {
        let repo = Self::new();
        repo.write("bounties.yml", data);
        repo
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn write(&self, rel: &str, contents: &str) {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    pub fn input<'a>(&'a self, config_text: &'a str) -> CheckInput<'a> {
        CheckInput {
            repo_root: self.root(),
            config_text,
            overrides: Overrides::default(),
        }
    }
}
