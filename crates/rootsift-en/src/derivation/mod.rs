// Root-derivation resolution
//
// Decides whether a word is a derivative of a shorter, already accepted
// word. Architecture:
//   - `accepted`: the growing set of accepted roots
//   - `rules`: individual rules (DerivationRule trait)
//   - `resolver`: ordered rule table plus the popularity override

pub mod accepted;
pub mod resolver;
pub mod rules;

use rootsift_core::Derivation;

pub use accepted::AcceptedSet;
pub use resolver::Resolver;
pub use rules::{LastLetter, PrefixRule, SharedPrefixScan, SuffixRule};

/// Trait for derivation rules.
///
/// A rule inspects `word` and, if it can explain it as derived from some
/// word in `accepted`, returns that derivation. Every returned root is
/// strictly shorter than `word`. Rules are stateless and read-only.
pub trait DerivationRule {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn find_root(&self, word: &str, accepted: &AcceptedSet) -> Option<Derivation>;
}
