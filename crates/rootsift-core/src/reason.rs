// Curation decisions and the reasons attached to removed words.
//
// Reasons are typed so the engine can reason about them (which root was
// cited, which category of check fired) and rendered through `Display`
// into the one-line strings written to the removal log.

use std::fmt;

use serde::Serialize;

/// How a longer word was traced back to its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivationKind {
    /// The word minus its last letter is accepted.
    SimplerForm,
    /// A suffix was stripped and the remainder is accepted.
    Suffix,
    /// A suffix was stripped, then a doubled final consonant undone.
    DoubledConsonant,
    /// A suffix was stripped, then an elided final "e" restored.
    FinalERestored,
    /// A suffix was stripped, then a trailing "e" dropped.
    FinalEDropped,
    /// A prefix was stripped and the remainder is accepted.
    Prefix,
    /// A shorter accepted word is a plain string prefix.
    SharedPrefix,
    /// A shorter popular accepted word is a plain string prefix.
    PopularPrefix,
    /// A shorter popular accepted word, minus its last letter, is a prefix.
    ModifiedPopularRoot,
}

/// A derivation found by one of the resolver's rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Derivation {
    /// The accepted root the word derives from.
    pub root: String,
    /// Which rule produced the match.
    pub kind: DerivationKind,
    /// The stripped suffix or prefix, for affix rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affix: Option<String>,
}

impl Derivation {
    pub fn new(root: impl Into<String>, kind: DerivationKind) -> Self {
        Self {
            root: root.into(),
            kind,
            affix: None,
        }
    }

    pub fn with_affix(root: impl Into<String>, kind: DerivationKind, affix: &str) -> Self {
        Self {
            root: root.into(),
            kind,
            affix: Some(affix.to_string()),
        }
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = &self.root;
        match self.kind {
            DerivationKind::SimplerForm => write!(f, "simpler form '{root}' exists"),
            DerivationKind::Suffix => write!(f, "root form '{root}' exists"),
            DerivationKind::DoubledConsonant => {
                write!(f, "root form '{root}' (with doubled consonant) exists")
            }
            DerivationKind::FinalERestored => {
                write!(f, "root form '{root}' (with final e restored) exists")
            }
            DerivationKind::FinalEDropped => {
                write!(f, "root form '{root}' (without final e) exists")
            }
            DerivationKind::Prefix => match &self.affix {
                Some(prefix) => write!(f, "root form '{root}' exists (with prefix '{prefix}')"),
                None => write!(f, "root form '{root}' exists"),
            },
            DerivationKind::SharedPrefix => write!(f, "derived from root '{root}'"),
            DerivationKind::PopularPrefix => write!(f, "derived from popular root '{root}'"),
            DerivationKind::ModifiedPopularRoot => {
                write!(f, "derived from modified popular root '{root}'")
            }
        }
    }
}

/// Coarse grouping of removal reasons, used for run statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCategory {
    Profanity,
    Validity,
    Derivation,
}

/// Why a word was removed from the curated list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RemovalReason {
    /// The profanity predicate flagged the word.
    Profanity,
    /// Fewer characters than the configured minimum.
    TooShort { min: usize },
    /// Contains something other than `a`-`z`, or is empty.
    NonAlphabetic,
    /// Contains none of a, e, i, o, u.
    NoVowels,
    /// Contains a banned letter pair.
    UnusualCombination { combination: String },
    /// Ends with a banned letter pair.
    UncommonEnding { ending: String },
    /// Explained by a shorter accepted root.
    Derived(Derivation),
}

impl RemovalReason {
    pub fn category(&self) -> ReasonCategory {
        match self {
            RemovalReason::Profanity => ReasonCategory::Profanity,
            RemovalReason::Derived(_) => ReasonCategory::Derivation,
            _ => ReasonCategory::Validity,
        }
    }

    /// The cited root, for derivation removals.
    pub fn root(&self) -> Option<&str> {
        match self {
            RemovalReason::Derived(d) => Some(&d.root),
            _ => None,
        }
    }
}

impl From<Derivation> for RemovalReason {
    fn from(derivation: Derivation) -> Self {
        RemovalReason::Derived(derivation)
    }
}

impl fmt::Display for RemovalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemovalReason::Profanity => f.write_str("profanity"),
            RemovalReason::TooShort { min } => write!(f, "too short (under {min} characters)"),
            RemovalReason::NonAlphabetic => f.write_str("non-alphabetic characters"),
            RemovalReason::NoVowels => f.write_str("no vowels"),
            RemovalReason::UnusualCombination { combination } => {
                write!(f, "unusual letter combination '{combination}'")
            }
            RemovalReason::UncommonEnding { ending } => write!(f, "uncommon ending '{ending}'"),
            RemovalReason::Derived(d) => fmt::Display::fmt(d, f),
        }
    }
}

/// Outcome of evaluating one candidate word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Keep,
    Remove(RemovalReason),
}

impl Decision {
    pub fn is_keep(&self) -> bool {
        matches!(self, Decision::Keep)
    }

    pub fn reason(&self) -> Option<&RemovalReason> {
        match self {
            Decision::Keep => None,
            Decision::Remove(reason) => Some(reason),
        }
    }
}

impl From<RemovalReason> for Decision {
    fn from(reason: RemovalReason) -> Self {
        Decision::Remove(reason)
    }
}
