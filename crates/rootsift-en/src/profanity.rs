// Profanity predicate: an injected capability with a static fallback.
//
// The engine never depends on a particular classifier. Callers pass any
// `ProfanityFilter`; when none is given, or the given one reports that it
// is unavailable, words are checked against a small built-in deny-list.

use std::cell::Cell;
use std::path::Path;

use hashbrown::HashSet;

/// Minimal deny-list used when no classifier is available.
pub const BUILTIN_DENY_LIST: &[&str] = &[
    "ass", "fuck", "shit", "damn", "cunt", "bitch", "cock", "dick", "bastard", "whore", "slut",
    "pussy", "nigger", "nigga", "fag", "faggot", "retard", "porn", "anal", "cum", "rape",
    "dildo",
];

/// Error returned by a classifier that cannot answer.
#[derive(Debug, thiserror::Error)]
pub enum ProfanityError {
    #[error("profanity classifier unavailable: {0}")]
    Unavailable(String),
}

/// Trait for profanity classifiers.
///
/// Implementations receive a normalized (lowercase, trimmed) word.
pub trait ProfanityFilter {
    fn is_profane(&self, word: &str) -> Result<bool, ProfanityError>;
}

impl<F> ProfanityFilter for F
where
    F: Fn(&str) -> bool,
{
    fn is_profane(&self, word: &str) -> Result<bool, ProfanityError> {
        Ok(self(word))
    }
}

// ---------------------------------------------------------------------------
// DenyList
// ---------------------------------------------------------------------------

/// Exact-match deny-list.
#[derive(Debug, Clone, Default)]
pub struct DenyList {
    words: HashSet<String>,
}

impl DenyList {
    /// The built-in fallback list.
    pub fn builtin() -> Self {
        Self::from_words(BUILTIN_DENY_LIST.iter().copied())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Load from text, one term per line. Blank lines and `#` comments are
    /// ignored.
    pub fn from_text(content: &str) -> Self {
        Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        )
    }

    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&content))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl ProfanityFilter for DenyList {
    fn is_profane(&self, word: &str) -> Result<bool, ProfanityError> {
        Ok(self.contains(word))
    }
}

// ---------------------------------------------------------------------------
// ProfanityGuard
// ---------------------------------------------------------------------------

/// Wraps an optional classifier and falls back to the built-in list.
///
/// Never fails: an unavailable classifier degrades to the fallback for the
/// rest of the run, with a single warning.
pub struct ProfanityGuard {
    primary: Option<Box<dyn ProfanityFilter>>,
    fallback: DenyList,
    degraded: Cell<bool>,
}

impl ProfanityGuard {
    /// `None` means no classifier is available; the fallback is used directly.
    pub fn new(primary: Option<Box<dyn ProfanityFilter>>) -> Self {
        Self {
            primary,
            fallback: DenyList::builtin(),
            degraded: Cell::new(false),
        }
    }

    /// Guard that only consults the built-in list.
    pub fn fallback_only() -> Self {
        Self::new(None)
    }

    /// Whether the guard is answering from the fallback list.
    pub fn is_degraded(&self) -> bool {
        self.primary.is_none() || self.degraded.get()
    }

    pub fn is_profane(&self, word: &str) -> bool {
        if let Some(primary) = self.primary.as_ref().filter(|_| !self.degraded.get()) {
            match primary.is_profane(word) {
                Ok(result) => return result,
                Err(e) => {
                    tracing::warn!(error = %e, "falling back to built-in profanity list");
                    self.degraded.set(true);
                }
            }
        }
        self.fallback.contains(word)
    }
}

impl Default for ProfanityGuard {
    fn default() -> Self {
        Self::fallback_only()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl ProfanityFilter for Broken {
        fn is_profane(&self, _word: &str) -> Result<bool, ProfanityError> {
            Err(ProfanityError::Unavailable("model not loaded".into()))
        }
    }

    #[test]
    fn builtin_list() {
        let list = DenyList::builtin();
        assert!(list.contains("shit"));
        assert!(!list.contains("shitake"));
        assert_eq!(list.len(), BUILTIN_DENY_LIST.len());
    }

    #[test]
    fn deny_list_from_text() {
        let list = DenyList::from_text("# custom\nDarn\n\n heck \n");
        assert_eq!(list.len(), 2);
        assert!(list.contains("darn"));
        assert!(list.contains("heck"));
    }

    #[test]
    fn closures_are_filters() {
        let guard = ProfanityGuard::new(Some(Box::new(|w: &str| w == "xxxxx")));
        assert!(guard.is_profane("xxxxx"));
        assert!(!guard.is_profane("shit")); // primary answered; fallback unused
        assert!(!guard.is_degraded());
    }

    #[test]
    fn absent_classifier_uses_fallback() {
        let guard = ProfanityGuard::fallback_only();
        assert!(guard.is_degraded());
        assert!(guard.is_profane("dildo"));
        assert!(!guard.is_profane("apple"));
    }

    #[test]
    fn unavailable_classifier_degrades() {
        let guard = ProfanityGuard::new(Some(Box::new(Broken)));
        assert!(!guard.is_degraded());
        assert!(guard.is_profane("whore"));
        assert!(guard.is_degraded());
        assert!(!guard.is_profane("apple"));
    }

    #[test]
    fn deny_list_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"gosh\n").unwrap();
        let list = DenyList::from_file(file.path()).unwrap();
        assert!(list.contains("gosh"));
    }
}
