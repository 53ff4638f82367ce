//! Candidate word collection with popularity metadata.
//!
//! A [`Lexicon`] is built once from one or more word sources before a run
//! and is read-only while the run resolves words. Merging sources is a
//! union in which a word is popular if any source marked it popular.

use hashbrown::HashMap;
use hashbrown::HashSet;

/// Per-word metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Entry {
    /// The word came from a high-priority (curated) source.
    pub popular: bool,
}

/// The set of candidate words for one curation run.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, Entry>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word. Popularity is OR-ed with any existing entry.
    pub fn insert(&mut self, word: impl Into<String>, popular: bool) {
        let entry = self.entries.entry(word.into()).or_default();
        entry.popular |= popular;
    }

    /// Add every word of a source with the same popularity.
    pub fn extend_from<I, S>(&mut self, words: I, popular: bool)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            self.insert(word, popular);
        }
    }

    /// Union another lexicon into this one.
    pub fn merge(&mut self, other: Lexicon) {
        for (word, entry) in other.entries {
            self.insert(word, entry.popular);
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Whether `word` is present and marked popular.
    pub fn is_popular(&self, word: &str) -> bool {
        self.entries.get(word).is_some_and(|e| e.popular)
    }

    pub fn get(&self, word: &str) -> Option<Entry> {
        self.entries.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn popular_count(&self) -> usize {
        self.entries.values().filter(|e| e.popular).count()
    }

    /// Iterate over words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Entry)> {
        self.entries.iter().map(|(w, e)| (w.as_str(), *e))
    }
}

impl<S: Into<String>> FromIterator<S> for Lexicon {
    /// Collect non-popular words.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut lexicon = Lexicon::new();
        lexicon.extend_from(iter, false);
        lexicon
    }
}

// ---------------------------------------------------------------------------
// Source parsing
// ---------------------------------------------------------------------------

/// Parse word-list text into normalized tokens.
///
/// - blank lines, lines starting with `#` and lines containing `#!comment`
///   are skipped;
/// - CSV and TSV lines are reduced to their first field;
/// - tokens are trimmed and lowercased.
///
/// Tokens are not validated here; malformed ones are left for the
/// validity filter to reject with a reason.
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#') && !trimmed.contains("#!comment")
        })
        .filter_map(|line| {
            let field = line.split(',').next()?.split('\t').next()?;
            let word = field.trim().to_lowercase();
            (!word.is_empty()).then_some(word)
        })
        .collect()
}

/// Drop repeated words, keeping the first occurrence of each.
///
/// Returns `(unique, duplicates)` where `duplicates` lists each repeated
/// word once, in order of its first repetition.
pub fn dedupe_preserving_order<I, S>(words: I) -> (Vec<String>, Vec<String>)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut unique = Vec::new();
    let mut duplicates = Vec::new();

    for word in words {
        let word = word.into();
        if seen.contains(&word) {
            if reported.insert(word.clone()) {
                duplicates.push(word);
            }
        } else {
            seen.insert(word.clone());
            unique.push(word);
        }
    }

    (unique, duplicates)
}
