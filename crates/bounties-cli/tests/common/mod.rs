#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Command for the bounties binary, with ambient log configuration cleared.
#[allow(deprecated)]
pub fn bounties_cmd() -> Command {
    let mut cmd = Command::cargo_bin("bounties").expect("bounties binary not found");
    cmd.env_remove("RUST_LOG").env_remove("LOG_LEVEL");
    cmd
}

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("bounties-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Copy a fixture into a temp dir so commands that write can run against it.
pub fn fixture_copy(name: &str) -> TempDir {
    let tmp = TempDir::new().expect("temp dir");
    copy_dir(&fixture(name), tmp.path());
    tmp
}

fn copy_dir(from: &Path, to: &Path) {
    std::fs::create_dir_all(to).expect("create dir");
    for entry in std::fs::read_dir(from).expect("read fixture dir") {
        let entry = entry.expect("dir entry");
        let target = to.join(entry.file_name());
        if entry.file_type().expect("file type").is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            std::fs::copy(entry.path(), target).expect("copy fixture file");
        }
    }
}
