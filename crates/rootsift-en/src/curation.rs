// Curator: top-level integration point for one curation pass.
//
// Owns the validity filter, the derivation resolver and the profanity
// guard built from a configuration, and runs a lexicon through them in
// processing order.
//
// Design notes:
// - A run is a single sequential pass. Each decision reads the accepted
//   set produced by earlier decisions, so words are never reordered or
//   revisited.
// - The accepted set and removal log are owned by the run and returned
//   to the caller; nothing is written anywhere until the caller decides.

use std::collections::BTreeMap;

use rootsift_core::{Decision, ReasonCategory, RemovalReason};
use serde::Serialize;

use crate::config::{ConfigError, CurationConfig};
use crate::derivation::{AcceptedSet, Resolver};
use crate::lexicon::Lexicon;
use crate::order::processing_order;
use crate::profanity::{ProfanityFilter, ProfanityGuard};
use crate::validity::ValidityFilter;

/// Rejected words and why, ordered by word.
pub type RemovalLog = BTreeMap<String, RemovalReason>;

/// How often a progress event is logged.
const PROGRESS_INTERVAL: usize = 1000;

/// Result of a full curation pass.
#[derive(Debug, Clone)]
pub struct CurationOutcome {
    pub accepted: AcceptedSet,
    pub removed: RemovalLog,
    pub stats: CurationStats,
}

impl CurationOutcome {
    /// Accepted words, sorted.
    pub fn sorted_words(&self) -> Vec<&str> {
        self.accepted.sorted()
    }

    /// The decision recorded for `word`, if it was part of the run.
    pub fn decision_for(&self, word: &str) -> Option<Decision> {
        if self.accepted.contains(word) {
            return Some(Decision::Keep);
        }
        self.removed
            .get(word)
            .map(|reason| Decision::Remove(reason.clone()))
    }
}

/// Summary counts for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CurationStats {
    pub input_words: usize,
    pub popular_words: usize,
    pub kept: usize,
    pub removed: usize,
    pub removed_by_category: BTreeMap<ReasonCategory, usize>,
    /// Word length -> number of kept words of that length.
    pub kept_length_distribution: BTreeMap<usize, usize>,
}

impl CurationStats {
    fn collect(lexicon: &Lexicon, accepted: &AcceptedSet, removed: &RemovalLog) -> Self {
        let mut removed_by_category = BTreeMap::new();
        for reason in removed.values() {
            *removed_by_category.entry(reason.category()).or_insert(0) += 1;
        }
        let mut kept_length_distribution = BTreeMap::new();
        for word in accepted.iter() {
            *kept_length_distribution
                .entry(word.chars().count())
                .or_insert(0) += 1;
        }
        Self {
            input_words: lexicon.len(),
            popular_words: lexicon.popular_count(),
            kept: accepted.len(),
            removed: removed.len(),
            removed_by_category,
            kept_length_distribution,
        }
    }
}

/// Owns every component needed to curate a lexicon.
pub struct Curator {
    config: CurationConfig,
    validity: ValidityFilter,
    resolver: Resolver,
    profanity: ProfanityGuard,
}

impl Curator {
    /// Build a curator with the built-in profanity deny-list.
    pub fn new(config: CurationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            validity: ValidityFilter::from_config(&config),
            resolver: Resolver::from_config(&config),
            profanity: ProfanityGuard::fallback_only(),
            config,
        })
    }

    /// Use `filter` as the profanity classifier. The built-in list stays
    /// in place as the fallback.
    pub fn with_profanity_filter(mut self, filter: Box<dyn ProfanityFilter>) -> Self {
        self.profanity = ProfanityGuard::new(Some(filter));
        self
    }

    pub fn config(&self) -> &CurationConfig {
        &self.config
    }

    /// Decide one word against the current accepted set.
    ///
    /// Checks run in order: profanity, validity, derivation. Popular words
    /// skip the first two when `popular_bypasses_filters` is set.
    pub fn evaluate(&self, word: &str, lexicon: &Lexicon, accepted: &AcceptedSet) -> Decision {
        let bypass = self.config.popular_bypasses_filters && lexicon.is_popular(word);
        if !bypass {
            if self.profanity.is_profane(word) {
                return Decision::Remove(RemovalReason::Profanity);
            }
            if let Err(reason) = self.validity.check(word) {
                return Decision::Remove(reason);
            }
        }
        self.resolver.resolve(word, lexicon, accepted)
    }

    /// Curate a whole lexicon in one pass.
    pub fn run(&self, lexicon: &Lexicon) -> CurationOutcome {
        let schedule = processing_order(lexicon);
        let total = schedule.len();
        tracing::info!(
            words = total,
            popular = lexicon.popular_count(),
            "starting curation run"
        );

        let mut accepted = AcceptedSet::new();
        let mut removed = RemovalLog::new();

        for (i, item) in schedule.iter().enumerate() {
            if i > 0 && i % PROGRESS_INTERVAL == 0 {
                tracing::debug!(processed = i, total, "curation progress");
            }
            match self.evaluate(item.word, lexicon, &accepted) {
                Decision::Keep => {
                    accepted.insert(item.word, item.popular);
                }
                Decision::Remove(reason) => {
                    tracing::debug!(word = item.word, %reason, "removed");
                    removed.insert(item.word.to_string(), reason);
                }
            }
        }

        if self.profanity.is_degraded() {
            tracing::debug!("profanity checks used the built-in deny-list");
        }

        let stats = CurationStats::collect(lexicon, &accepted, &removed);
        tracing::info!(kept = stats.kept, removed = stats.removed, "curation run complete");

        CurationOutcome {
            accepted,
            removed,
            stats,
        }
    }
}
