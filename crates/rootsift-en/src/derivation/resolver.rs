// Resolver: runs the derivation rule table in priority order.

use rootsift_core::Decision;

use super::DerivationRule;
use super::accepted::AcceptedSet;
use super::rules::{LastLetter, PrefixRule, SharedPrefixScan, SuffixRule};
use crate::config::CurationConfig;
use crate::lexicon::Lexicon;

/// An ordered table of derivation rules.
///
/// Priority: popularity override, last-letter truncation, suffix rules in
/// table order, prefix rules in table order, shared-prefix scan. The first
/// rule that finds a root decides.
pub struct Resolver {
    rules: Vec<Box<dyn DerivationRule>>,
}

impl Resolver {
    /// Build the rule table a configuration describes.
    pub fn from_config(config: &CurationConfig) -> Self {
        let mut rules: Vec<Box<dyn DerivationRule>> = Vec::new();

        if config.strip_last_letter {
            rules.push(Box::new(LastLetter));
        }
        for suffix in &config.suffixes {
            rules.push(Box::new(SuffixRule::new(suffix.as_str())));
        }
        for prefix in &config.prefixes {
            rules.push(Box::new(PrefixRule::new(prefix.as_str())));
        }
        if config.shared_prefix_scan {
            rules.push(Box::new(SharedPrefixScan::new(config.max_root_delta)));
        }

        Self { rules }
    }

    /// Use an explicit rule table.
    pub fn with_rules(rules: Vec<Box<dyn DerivationRule>>) -> Self {
        Self { rules }
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Decide whether `word` is an independent root.
    ///
    /// Does not modify `accepted`; the caller inserts kept words.
    pub fn resolve(&self, word: &str, lexicon: &Lexicon, accepted: &AcceptedSet) -> Decision {
        if lexicon.is_popular(word) {
            return Decision::Keep;
        }

        for rule in &self.rules {
            if let Some(derivation) = rule.find_root(word, accepted) {
                tracing::trace!(word, rule = rule.name(), root = %derivation.root, "derivation found");
                return Decision::Remove(derivation.into());
            }
        }

        Decision::Keep
    }
}
