// Structural validity checks run before derivation analysis.
//
// Checks, first failure wins:
//   1. minimum length
//   2. charset ^[a-z]+$
//   3. at least one of a e i o u
//   4. no unusual letter combination anywhere
//   5. no uncommon ending

use rootsift_core::RemovalReason;
use rootsift_core::character::{char_len, has_vowel, is_ascii_lower_word};

use crate::config::CurationConfig;

/// Pure word-shape filter built from the configuration tables.
#[derive(Debug, Clone)]
pub struct ValidityFilter {
    min_length: usize,
    unusual_combinations: Vec<String>,
    uncommon_endings: Vec<String>,
}

impl ValidityFilter {
    pub fn new(
        min_length: usize,
        unusual_combinations: Vec<String>,
        uncommon_endings: Vec<String>,
    ) -> Self {
        Self {
            min_length,
            unusual_combinations,
            uncommon_endings,
        }
    }

    pub fn from_config(config: &CurationConfig) -> Self {
        Self::new(
            config.min_word_length,
            config.unusual_combinations.clone(),
            config.uncommon_endings.clone(),
        )
    }

    /// Return `Ok(())` for a structurally valid word, or the first failing check.
    pub fn check(&self, word: &str) -> Result<(), RemovalReason> {
        if char_len(word) < self.min_length {
            return Err(RemovalReason::TooShort {
                min: self.min_length,
            });
        }
        if !is_ascii_lower_word(word) {
            return Err(RemovalReason::NonAlphabetic);
        }
        if !has_vowel(word) {
            return Err(RemovalReason::NoVowels);
        }
        if let Some(combo) = self
            .unusual_combinations
            .iter()
            .find(|c| word.contains(c.as_str()))
        {
            return Err(RemovalReason::UnusualCombination {
                combination: combo.clone(),
            });
        }
        if let Some(ending) = self
            .uncommon_endings
            .iter()
            .find(|e| word.ends_with(e.as_str()))
        {
            return Err(RemovalReason::UncommonEnding {
                ending: ending.clone(),
            });
        }
        Ok(())
    }

    pub fn is_valid(&self, word: &str) -> bool {
        self.check(word).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> ValidityFilter {
        ValidityFilter::from_config(&CurationConfig::full())
    }

    #[test]
    fn accepts_ordinary_words() {
        let filter = full();
        assert!(filter.is_valid("apple"));
        assert!(filter.is_valid("running"));
    }

    #[test]
    fn length_is_checked_first() {
        // Too short and non-alphabetic: length wins.
        assert_eq!(full().check("b4"), Err(RemovalReason::TooShort { min: 5 }));
    }

    #[test]
    fn charset() {
        let filter = full();
        assert_eq!(filter.check("co-operate"), Err(RemovalReason::NonAlphabetic));
        assert_eq!(filter.check("Apple"), Err(RemovalReason::NonAlphabetic));
        assert_eq!(filter.check("apple2"), Err(RemovalReason::NonAlphabetic));
    }

    #[test]
    fn empty_word_with_zero_minimum() {
        let filter = ValidityFilter::new(0, Vec::new(), Vec::new());
        assert_eq!(filter.check(""), Err(RemovalReason::NonAlphabetic));
    }

    #[test]
    fn vowels_required() {
        assert_eq!(full().check("rhythm"), Err(RemovalReason::NoVowels));
        assert_eq!(full().check("crwth"), Err(RemovalReason::NoVowels));
    }

    #[test]
    fn unusual_combination() {
        assert_eq!(
            full().check("vacuum"),
            Err(RemovalReason::UnusualCombination {
                combination: "uu".into()
            })
        );
    }

    #[test]
    fn uncommon_ending() {
        assert_eq!(
            full().check("ridg"),
            Err(RemovalReason::TooShort { min: 5 })
        );
        assert_eq!(
            full().check("abridg"),
            Err(RemovalReason::UncommonEnding { ending: "dg".into() })
        );
        assert_eq!(
            full().check("think"),
            Err(RemovalReason::UncommonEnding { ending: "nk".into() })
        );
    }

    #[test]
    fn combination_beats_ending() {
        // "jjdg" style words hit the combination check first.
        assert_eq!(
            full().check("ajjdg"),
            Err(RemovalReason::UnusualCombination {
                combination: "jj".into()
            })
        );
    }

    #[test]
    fn basic_filter_only_checks_charset_and_vowels() {
        let filter = ValidityFilter::from_config(&CurationConfig::basic());
        assert!(filter.is_valid("a"));
        assert!(filter.is_valid("vacuum"));
        assert!(filter.is_valid("think"));
        assert_eq!(filter.check("hmm"), Err(RemovalReason::NoVowels));
    }
}
