//! End-to-end curation tests: concrete derivation scenarios and the
//! properties every run must satisfy.

use std::collections::BTreeSet;

use rootsift_core::character::char_len;
use rootsift_core::{DerivationKind, ReasonCategory, RemovalReason};
use rootsift_en::{AcceptedSet, CurationConfig, CurationOutcome, Curator, Lexicon, Resolver};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

const POPULAR: &[&str] = &["play", "happy", "universe", "amazing", "stop", "love", "car"];

const GENERAL: &[&str] = &[
    "played", "playing", "player", "plays", "unhappy", "happiness", "universal", "stopped",
    "stopping", "loving", "lovely", "carpet", "cars", "category", "cat", "rhythm", "vacuum",
    "co-op", "think", "rebuild", "build", "building", "walk", "walked", "walker", "runner",
    "run", "running", "agree", "agreed", "hope", "hoping", "hopeful", "xylophone", "quiz",
    "quizzes", "stop",
];

fn fixture() -> Lexicon {
    let mut lexicon = Lexicon::new();
    lexicon.extend_from(POPULAR.iter().copied(), true);
    lexicon.extend_from(GENERAL.iter().copied(), false);
    lexicon
}

fn loose() -> CurationConfig {
    CurationConfig {
        min_word_length: 1,
        ..CurationConfig::full()
    }
}

fn curate(config: CurationConfig, lexicon: &Lexicon) -> CurationOutcome {
    Curator::new(config).expect("valid config").run(lexicon)
}

fn plain(words: &[&str]) -> Lexicon {
    words.iter().copied().collect()
}

fn cited_root<'a>(outcome: &'a CurationOutcome, word: &str) -> Option<&'a str> {
    outcome.removed.get(word).and_then(RemovalReason::root)
}

fn kind(outcome: &CurationOutcome, word: &str) -> Option<DerivationKind> {
    match outcome.removed.get(word) {
        Some(RemovalReason::Derived(d)) => Some(d.kind),
        _ => None,
    }
}

fn word_set(outcome: &CurationOutcome) -> BTreeSet<String> {
    outcome.accepted.iter().map(str::to_string).collect()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn run_running_runs() {
    let outcome = curate(loose(), &plain(&["run", "running", "runs"]));
    assert_eq!(outcome.sorted_words(), vec!["run"]);
    assert_eq!(cited_root(&outcome, "running"), Some("run"));
    assert_eq!(cited_root(&outcome, "runs"), Some("run"));
}

#[test]
fn stop_stopped_uses_doubled_consonant() {
    let outcome = curate(loose(), &plain(&["stop", "stopped"]));
    assert_eq!(cited_root(&outcome, "stopped"), Some("stop"));
    assert_eq!(kind(&outcome, "stopped"), Some(DerivationKind::DoubledConsonant));
    assert_eq!(
        outcome.removed["stopped"].to_string(),
        "root form 'stop' (with doubled consonant) exists"
    );
}

#[test]
fn love_loving_restores_final_e() {
    let outcome = curate(loose(), &plain(&["love", "loving"]));
    assert_eq!(cited_root(&outcome, "loving"), Some("love"));
    assert_eq!(kind(&outcome, "loving"), Some(DerivationKind::FinalERestored));
}

#[test]
fn cat_category_both_kept() {
    let outcome = curate(loose(), &plain(&["cat", "category"]));
    assert_eq!(outcome.sorted_words(), vec!["cat", "category"]);
    assert!(outcome.removed.is_empty());
}

#[test]
fn popular_word_survives_artificial_root() {
    let resolver = Resolver::from_config(&loose());
    let mut lexicon = Lexicon::new();
    lexicon.insert("amazing", true);
    let mut accepted = AcceptedSet::new();
    accepted.insert("amaz", false);
    assert!(resolver.resolve("amazing", &lexicon, &accepted).is_keep());

    // Same through a full run.
    lexicon.insert("amaz", false);
    let outcome = curate(loose(), &lexicon);
    assert!(outcome.accepted.contains("amaz"));
    assert!(outcome.accepted.contains("amazing"));
}

#[test]
fn profanity_short_circuits() {
    let curator = Curator::new(CurationConfig::full())
        .unwrap()
        .with_profanity_filter(Box::new(|w: &str| w == "xxxxx" || w == "abcde"));
    let outcome = curator.run(&plain(&["xxxxx", "abcde", "apple"]));
    // "xxxxx" would fail the vowel check, "abcde" would pass validity.
    assert_eq!(outcome.removed.get("xxxxx"), Some(&RemovalReason::Profanity));
    assert_eq!(outcome.removed.get("abcde"), Some(&RemovalReason::Profanity));
    assert!(outcome.accepted.contains("apple"));
}

#[test]
fn basic_preset_strips_plurals_and_ing() {
    let outcome = curate(
        CurationConfig::basic(),
        &plain(&["cat", "cats", "jump", "jumping", "jumped", "a"]),
    );
    assert_eq!(kind(&outcome, "cats"), Some(DerivationKind::SimplerForm));
    assert_eq!(cited_root(&outcome, "jumping"), Some("jump"));
    // No "ed" rule in the basic table.
    assert!(outcome.accepted.contains("jumped"));
    assert!(outcome.accepted.contains("a"));
}

#[test]
fn mixed_fixture() {
    let outcome = curate(loose(), &fixture());

    let expected_roots = [
        ("played", "play"),
        ("playing", "play"),
        ("player", "play"),
        ("plays", "play"),
        ("unhappy", "happy"),
        ("happiness", "happy"),
        ("universal", "universe"),
        ("stopping", "stop"),
        ("lovely", "love"),
        ("carpet", "car"),
        ("cars", "car"),
        ("rebuild", "build"),
        ("building", "build"),
        ("walked", "walk"),
        ("walker", "walk"),
        ("runner", "run"),
        ("agreed", "agree"),
        ("hoping", "hope"),
        ("hopeful", "hope"),
    ];
    for (word, root) in expected_roots {
        assert_eq!(cited_root(&outcome, word), Some(root), "root of {word}");
    }

    assert_eq!(kind(&outcome, "unhappy"), Some(DerivationKind::Prefix));
    assert_eq!(kind(&outcome, "happiness"), Some(DerivationKind::ModifiedPopularRoot));
    assert_eq!(kind(&outcome, "carpet"), Some(DerivationKind::PopularPrefix));

    assert_eq!(outcome.removed.get("rhythm"), Some(&RemovalReason::NoVowels));
    assert_eq!(outcome.removed.get("co-op"), Some(&RemovalReason::NonAlphabetic));
    assert_eq!(
        outcome.removed.get("vacuum"),
        Some(&RemovalReason::UnusualCombination { combination: "uu".into() })
    );
    assert_eq!(
        outcome.removed.get("quizzes"),
        Some(&RemovalReason::UnusualCombination { combination: "zz".into() })
    );
    assert_eq!(
        outcome.removed.get("think"),
        Some(&RemovalReason::UncommonEnding { ending: "nk".into() })
    );

    for kept in ["cat", "category", "quiz", "xylophone", "amazing", "walk", "build", "agree"] {
        assert!(outcome.accepted.contains(kept), "{kept} should be kept");
    }
}

#[test]
fn default_minimum_length_applies() {
    let outcome = curate(CurationConfig::full(), &fixture());
    assert_eq!(
        outcome.removed.get("stop"),
        Some(&RemovalReason::TooShort { min: 5 })
    );
    // With "stop" rejected there is no root for "stopped".
    assert!(outcome.accepted.contains("stopped"));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn runs_are_deterministic() {
    for config in [loose(), CurationConfig::full(), CurationConfig::basic()] {
        let first = curate(config.clone(), &fixture());
        let second = curate(config, &fixture());
        assert_eq!(word_set(&first), word_set(&second));
        assert_eq!(first.removed, second.removed);
    }
}

#[test]
fn cited_roots_are_shorter() {
    for config in [loose(), CurationConfig::full(), CurationConfig::basic()] {
        let outcome = curate(config, &fixture());
        for (word, reason) in &outcome.removed {
            if let Some(root) = reason.root() {
                assert!(char_len(root) < char_len(word), "{word} cites {root}");
                assert!(outcome.accepted.contains(root), "{root} must be accepted");
            }
        }
    }
}

#[test]
fn popular_words_never_removed_as_derivatives() {
    let lexicon = fixture();
    let outcome = curate(loose(), &lexicon);
    for word in POPULAR {
        assert!(outcome.accepted.contains(word), "{word} should be kept");
    }

    let outcome = curate(CurationConfig::full(), &lexicon);
    for word in POPULAR {
        if let Some(reason) = outcome.removed.get(*word) {
            assert_ne!(reason.category(), ReasonCategory::Derivation, "{word}");
        }
    }

    let bypass = CurationConfig {
        popular_bypasses_filters: true,
        ..CurationConfig::full()
    };
    let outcome = curate(bypass, &lexicon);
    for word in POPULAR {
        assert!(outcome.accepted.contains(word), "{word} should bypass filters");
    }
}

#[test]
fn every_word_lands_in_exactly_one_output() {
    let lexicon = fixture();
    let outcome = curate(loose(), &lexicon);
    for (word, _) in lexicon.iter() {
        let kept = outcome.accepted.contains(word);
        let removed = outcome.removed.contains_key(word);
        assert!(kept ^ removed, "{word}: kept={kept} removed={removed}");
    }
    assert_eq!(outcome.accepted.len() + outcome.removed.len(), lexicon.len());
}

#[test]
fn curated_output_is_a_fixed_point() {
    let lexicon = fixture();
    for config in [loose(), CurationConfig::full(), CurationConfig::basic()] {
        let first = curate(config.clone(), &lexicon);

        let mut survivors = Lexicon::new();
        for word in first.accepted.iter() {
            survivors.insert(word, lexicon.is_popular(word));
        }
        let second = curate(config, &survivors);

        assert!(second.removed.is_empty(), "newly removed: {:?}", second.removed);
        assert_eq!(word_set(&first), word_set(&second));
    }
}

#[test]
fn rerun_without_popular_tags_can_remove_more() {
    let mut lexicon = Lexicon::new();
    lexicon.insert("amazing", true);
    lexicon.insert("amaz", false);
    let first = curate(loose(), &lexicon);
    assert!(first.removed.is_empty());

    // The written list carries no popularity, so "amazing" loses its override.
    let plain_rerun: Lexicon = first.accepted.iter().collect();
    let second = curate(loose(), &plain_rerun);
    assert_eq!(cited_root(&second, "amazing"), Some("amaz"));

    let mut tagged_rerun = plain_rerun.clone();
    tagged_rerun.insert("amazing", true);
    assert!(curate(loose(), &tagged_rerun).removed.is_empty());
}

#[test]
fn empty_input_is_not_an_error() {
    let outcome = curate(CurationConfig::full(), &Lexicon::new());
    assert!(outcome.accepted.is_empty());
    assert!(outcome.removed.is_empty());
}
