//! English root-derivation engine for curating word-game word lists.
//!
//! Given a [`Lexicon`] of candidate words, a [`Curator`] decides for each
//! word whether it is an independent entry or a derivative of a shorter
//! accepted word ("stopped" of "stop", "loving" of "love"), and records a
//! reason for every removal.
//!
//! # Architecture
//!
//! - [`config`] -- Rule tables, thresholds, presets, TOML loading
//! - [`lexicon`] -- Candidate words with popularity; source parsing
//! - [`validity`] -- Structural word checks
//! - [`profanity`] -- Injected profanity predicate with a built-in fallback
//! - [`derivation`] -- Derivation rules, accepted set and resolver
//! - [`order`] -- Shortest-first processing order
//! - [`curation`] -- The curation run and its outcome
//! - [`report`] -- Output writers
//!
//! ```
//! use rootsift_en::{CurationConfig, Curator, Lexicon};
//!
//! let config = CurationConfig { min_word_length: 1, ..CurationConfig::full() };
//! let curator = Curator::new(config).unwrap();
//! let lexicon: Lexicon = ["stop", "stopped"].into_iter().collect();
//! let outcome = curator.run(&lexicon);
//! assert_eq!(outcome.sorted_words(), vec!["stop"]);
//! ```

pub mod config;
pub mod curation;
pub mod derivation;
pub mod lexicon;
pub mod order;
pub mod profanity;
pub mod report;
pub mod validity;

pub use config::{ConfigError, CurationConfig, Preset};
pub use curation::{CurationOutcome, CurationStats, Curator, RemovalLog};
pub use derivation::{AcceptedSet, DerivationRule, Resolver};
pub use lexicon::Lexicon;
pub use profanity::{DenyList, ProfanityError, ProfanityFilter, ProfanityGuard};
pub use validity::ValidityFilter;
