//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Reward tag acceptance (closed set)
//! - Findings ordering determinism
//! - Conversion of valid entries to the typed schema

use crate::engine::evaluate;
use crate::model::{EntryModel, RawField, RawRewards};
use crate::test_support::{config_all, model, text};
use bounties_types::{Reward, Severity, ids};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_reward() -> impl Strategy<Value = Reward> {
    prop_oneof![
        Just(Reward::Bounty),
        Just(Reward::Recognition),
        Just(Reward::Swag),
        Just(Reward::Other),
    ]
}

/// Lowercase tags that are not rewards.
fn arb_bogus_tag() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,12}")
        .unwrap()
        .prop_filter("must not be a reward", |s| s.parse::<Reward>().is_err())
}

fn arb_slug() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9]{0,15}").unwrap()
}

fn arb_valid_entry() -> impl Strategy<Value = (String, Vec<Reward>, Option<String>)> {
    (
        arb_slug(),
        prop::collection::vec(arb_reward(), 0..4),
        prop::option::of("[A-Za-z0-9 ,.-]{1,40}"),
    )
}

fn build_entry(index: u32, slug: &str, rewards: &[Reward], notes: Option<&str>) -> EntryModel {
    EntryModel {
        index,
        company: text(&format!("{slug} {index}")),
        url: text(&format!("https://{slug}{index}.example/security")),
        contact: text(&format!("security@{slug}{index}.example")),
        rewards: RawRewards::List(rewards.iter().map(|r| text(r.as_str())).collect()),
        notes: notes.map(text).unwrap_or(RawField::Missing),
        ..EntryModel::default()
    }
}

proptest! {
    #[test]
    fn any_non_reward_tag_is_rejected(tag in arb_bogus_tag()) {
        let mut entry = build_entry(0, "acme", &[], None);
        entry.rewards = RawRewards::List(vec![text(&tag)]);

        let report = evaluate(&model(vec![entry]), &config_all(Severity::Error));

        let unknown: Vec<_> = report
            .findings
            .iter()
            .filter(|f| f.code == ids::CODE_UNKNOWN_REWARD)
            .collect();
        prop_assert_eq!(unknown.len(), 1);
        prop_assert_eq!(unknown[0].data["value"].as_str(), Some(tag.as_str()));
    }

    #[test]
    fn distinct_valid_entries_produce_no_findings(
        entries in prop::collection::vec(arb_valid_entry(), 0..8)
    ) {
        let built: Vec<EntryModel> = entries
            .iter()
            .enumerate()
            .map(|(i, (slug, rewards, notes))| {
                let mut unique = rewards.clone();
                unique.sort();
                unique.dedup();
                build_entry(i as u32, slug, &unique, notes.as_deref())
            })
            .collect();

        let report = evaluate(&model(built), &config_all(Severity::Error));
        prop_assert!(report.findings.is_empty(), "{:#?}", report.findings);
        prop_assert_eq!(report.data.entries_scanned as usize, entries.len());
    }

    #[test]
    fn evaluation_is_deterministic(
        tags in prop::collection::vec("[a-zA-Z]{0,8}", 0..6),
        urls in prop::collection::vec("[a-z:/.]{0,20}", 0..6),
    ) {
        let built: Vec<EntryModel> = urls
            .iter()
            .enumerate()
            .map(|(i, url)| {
                let mut e = build_entry(i as u32, "co", &[], None);
                e.url = text(url);
                e.rewards = RawRewards::List(tags.iter().map(|t| text(t)).collect());
                e
            })
            .collect();

        let cfg = config_all(Severity::Warning);
        let a = evaluate(&model(built.clone()), &cfg);
        let b = evaluate(&model(built), &cfg);
        prop_assert_eq!(a.findings, b.findings);
        prop_assert_eq!(a.verdict, b.verdict);
    }

    #[test]
    fn valid_entries_convert_preserving_reward_order(
        (slug, rewards, notes) in arb_valid_entry()
    ) {
        let entry = build_entry(0, &slug, &rewards, notes.as_deref());
        let company = entry.to_company().expect("valid entry converts");
        prop_assert_eq!(company.rewards(), rewards.as_slice());
        prop_assert_eq!(company.notes, notes);
    }
}
