// The growing set of words accepted as independent roots during a run.

use hashbrown::HashMap;
use rootsift_core::character::{char_len, without_last_char};

/// Words confirmed as roots so far, with their popularity.
///
/// Grows monotonically: words are inserted, never removed. Popular words
/// longer than two characters are also indexed by their stem (the word
/// minus its last letter) for the modified-popular-root scan.
#[derive(Debug, Clone, Default)]
pub struct AcceptedSet {
    words: HashMap<String, bool>,
    popular_stems: HashMap<String, Vec<String>>,
}

impl AcceptedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a word. Returns `false` if it was already present.
    pub fn insert(&mut self, word: &str, popular: bool) -> bool {
        if self.words.contains_key(word) {
            return false;
        }
        self.words.insert(word.to_string(), popular);
        if popular && char_len(word) > 2 {
            if let Some(stem) = without_last_char(word) {
                self.popular_stems
                    .entry(stem.to_string())
                    .or_default()
                    .push(word.to_string());
            }
        }
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// `Some(popular)` if the word is accepted.
    pub fn popularity(&self, word: &str) -> Option<bool> {
        self.words.get(word).copied()
    }

    /// Popular accepted words whose stem is `stem`, in acceptance order.
    pub fn popular_roots_with_stem(&self, stem: &str) -> &[String] {
        self.popular_stems
            .get(stem)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over accepted words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    /// Accepted words sorted alphabetically.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_unstable();
        words
    }
}
