// Processing order: shortest first, popular first within a length,
// alphabetical otherwise.
//
// Every rule only ever cites a strictly shorter root, so visiting words by
// ascending length guarantees each candidate root has been decided before
// any word that might derive from it.

use std::cmp::Reverse;

use rootsift_core::character::char_len;

use crate::lexicon::Lexicon;

/// A word scheduled for evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled<'a> {
    pub word: &'a str,
    pub popular: bool,
    pub length: usize,
}

/// Order the lexicon for a curation run.
///
/// The order is total: (length ascending, popular first, text ascending).
pub fn processing_order(lexicon: &Lexicon) -> Vec<Scheduled<'_>> {
    let mut schedule: Vec<Scheduled<'_>> = lexicon
        .iter()
        .map(|(word, entry)| Scheduled {
            word,
            popular: entry.popular,
            length: char_len(word),
        })
        .collect();
    schedule.sort_unstable_by_key(|s| (s.length, Reverse(s.popular), s.word));
    schedule
}
