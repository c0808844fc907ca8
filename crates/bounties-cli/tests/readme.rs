mod common;

use common::{bounties_cmd, fixture, fixture_copy};
use predicates::prelude::*;

#[test]
fn table_prints_expected_markdown() {
    let expected = std::fs::read_to_string(fixture("clean").join("expected.table.md"))
        .expect("expected table");
    bounties_cmd()
        .arg("--repo-root")
        .arg(fixture("clean"))
        .arg("table")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn table_of_empty_directory_is_empty() {
    bounties_cmd()
        .arg("--repo-root")
        .arg(fixture("empty"))
        .arg("table")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn table_refuses_failing_directory() {
    bounties_cmd()
        .arg("--repo-root")
        .arg(fixture("invalid_reward"))
        .arg("table")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("failed validation"));
}

#[test]
fn readme_check_passes_when_current() {
    bounties_cmd()
        .arg("--repo-root")
        .arg(fixture("clean"))
        .args(["readme", "--check"])
        .assert()
        .success();
}

#[test]
fn readme_check_flags_stale_readme() {
    bounties_cmd()
        .arg("--repo-root")
        .arg(fixture("stale_readme"))
        .args(["readme", "--check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("out of date"));
}

#[test]
fn readme_rewrites_stale_readme_to_match_clean() {
    let tmp = fixture_copy("stale_readme");
    bounties_cmd()
        .arg("--repo-root")
        .arg(tmp.path())
        .arg("readme")
        .assert()
        .success();

    let written =
        std::fs::read_to_string(tmp.path().join(".github/README.md")).expect("readme written");
    let expected = std::fs::read_to_string(fixture("clean").join(".github/README.md"))
        .expect("clean readme");
    assert_eq!(written, expected);

    bounties_cmd()
        .arg("--repo-root")
        .arg(tmp.path())
        .args(["readme", "--check"])
        .assert()
        .success();
}

#[test]
fn readme_uses_configured_paths_markers_and_name_length() {
    let tmp = fixture_copy("lenient_config");
    bounties_cmd()
        .arg("--repo-root")
        .arg(tmp.path())
        .arg("readme")
        .assert()
        .success();

    let written = std::fs::read_to_string(tmp.path().join("README.md")).expect("readme");
    assert!(written.contains("<!-- table:start -->\nCompany | Rewards"));
    assert!(written.contains("Initrode I...</a>"));
    assert!(written.ends_with("<!-- table:end -->\n"));
}

#[test]
fn readme_without_markers_is_a_runtime_error() {
    bounties_cmd()
        .arg("--repo-root")
        .arg(fixture("missing_markers"))
        .args(["readme", "--check"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("start marker not found"));
}
