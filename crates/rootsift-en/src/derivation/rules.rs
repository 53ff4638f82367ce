// Individual derivation rules: each proposes a shorter accepted root for
// a word by undoing one class of English word formation.

use rootsift_core::character::{char_len, char_prefix, ends_with_doubled_consonant, without_last_char};
use rootsift_core::{Derivation, DerivationKind};

use super::DerivationRule;
use super::accepted::AcceptedSet;

// ---------------------------------------------------------------------------
// LastLetter
// ---------------------------------------------------------------------------

/// Drop the final letter ("cats" -> "cat", "bakery" -> "baker").
///
/// The lightweight pass relies on this alone for plurals.
pub struct LastLetter;

impl DerivationRule for LastLetter {
    fn name(&self) -> &'static str {
        "last-letter"
    }

    fn find_root(&self, word: &str, accepted: &AcceptedSet) -> Option<Derivation> {
        let root = without_last_char(word).filter(|r| !r.is_empty())?;
        accepted
            .contains(root)
            .then(|| Derivation::new(root, DerivationKind::SimplerForm))
    }
}

// ---------------------------------------------------------------------------
// SuffixRule
// ---------------------------------------------------------------------------

/// Strip one suffix, then try the spelling repairs English applies at the
/// morpheme boundary.
///
/// For `root = word - suffix`, checked in order:
/// 1. doubled final consonant undone ("stopped" -> "stopp" -> "stop")
/// 2. the bare root ("walked" -> "walk")
/// 3. elided final "e" restored ("loving" -> "lov" -> "love")
/// 4. trailing "e" dropped ("freeer" -> "free" -> "fre")
pub struct SuffixRule {
    suffix: String,
}

impl SuffixRule {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    fn derivation(&self, root: impl Into<String>, kind: DerivationKind) -> Derivation {
        Derivation::with_affix(root, kind, &self.suffix)
    }
}

impl DerivationRule for SuffixRule {
    fn name(&self) -> &'static str {
        "suffix"
    }

    fn find_root(&self, word: &str, accepted: &AcceptedSet) -> Option<Derivation> {
        let root = word.strip_suffix(self.suffix.as_str())?;
        if root.is_empty() {
            return None;
        }

        if ends_with_doubled_consonant(root) {
            if let Some(shorter) = without_last_char(root) {
                if accepted.contains(shorter) {
                    return Some(self.derivation(shorter, DerivationKind::DoubledConsonant));
                }
            }
        }

        if accepted.contains(root) {
            return Some(self.derivation(root, DerivationKind::Suffix));
        }

        // Restoring the "e" must still leave a strictly shorter root.
        if char_len(&self.suffix) > 1 {
            let restored = format!("{root}e");
            if accepted.contains(&restored) {
                return Some(self.derivation(restored, DerivationKind::FinalERestored));
            }
        }

        if let Some(dropped) = root.strip_suffix('e') {
            if !dropped.is_empty() && accepted.contains(dropped) {
                return Some(self.derivation(dropped, DerivationKind::FinalEDropped));
            }
        }

        None
    }
}

// ---------------------------------------------------------------------------
// PrefixRule
// ---------------------------------------------------------------------------

/// Strip one prefix ("unhappy" -> "happy").
pub struct PrefixRule {
    prefix: String,
}

impl PrefixRule {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl DerivationRule for PrefixRule {
    fn name(&self) -> &'static str {
        "prefix"
    }

    fn find_root(&self, word: &str, accepted: &AcceptedSet) -> Option<Derivation> {
        let root = word.strip_prefix(self.prefix.as_str())?;
        (!root.is_empty() && accepted.contains(root))
            .then(|| Derivation::with_affix(root, DerivationKind::Prefix, &self.prefix))
    }
}

// ---------------------------------------------------------------------------
// SharedPrefixScan
// ---------------------------------------------------------------------------

/// Heuristic catch-all: a shorter accepted word that the word starts with.
///
/// Only roots within `max_delta` characters of the word are considered.
/// A popular root additionally matches when all but its last letter is a
/// prefix of the word ("universe" -> "universal"). Candidates are tried
/// longest first.
///
/// Known to over-match unrelated pairs ("car" / "carpet").
pub struct SharedPrefixScan {
    max_delta: usize,
}

impl SharedPrefixScan {
    pub fn new(max_delta: usize) -> Self {
        Self { max_delta }
    }
}

impl DerivationRule for SharedPrefixScan {
    fn name(&self) -> &'static str {
        "shared-prefix"
    }

    fn find_root(&self, word: &str, accepted: &AcceptedSet) -> Option<Derivation> {
        let len = char_len(word);
        let min_root_len = len.saturating_sub(self.max_delta).max(1);

        for root_len in (min_root_len..len).rev() {
            let candidate = char_prefix(word, root_len)?;
            if let Some(popular) = accepted.popularity(candidate) {
                let kind = if popular {
                    DerivationKind::PopularPrefix
                } else {
                    DerivationKind::SharedPrefix
                };
                return Some(Derivation::new(candidate, kind));
            }
        }

        // Popular roots are indexed by stem only when longer than two letters.
        for root_len in (min_root_len.max(3)..len).rev() {
            let stem = char_prefix(word, root_len - 1)?;
            if let Some(root) = accepted.popular_roots_with_stem(stem).first() {
                return Some(Derivation::new(
                    root.as_str(),
                    DerivationKind::ModifiedPopularRoot,
                ));
            }
        }

        None
    }
}
