// Letter classification and small string helpers for English word lists.
//
// Candidate words are plain ASCII after normalization, but every helper
// here works on `char`s so that a stray non-ASCII token is classified
// rather than sliced mid-codepoint.

// ---------------------------------------------------------------------------
// English letter classes
// ---------------------------------------------------------------------------

/// English vowels (lowercase): a e i o u.
///
/// `y` is deliberately absent; a word whose only vowel-like letter is `y`
/// ("rhythm", "gym") does not count as having a vowel.
const ENGLISH_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Check whether a character is an English vowel (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    ENGLISH_VOWELS.contains(&c.to_ascii_lowercase())
}

/// Check whether a character is an English consonant (case-insensitive).
///
/// Any ASCII letter that is not a vowel, `y` included.
pub fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

/// Check whether a word contains at least one vowel.
pub fn has_vowel(word: &str) -> bool {
    word.chars().any(is_vowel)
}

/// Check whether a word is non-empty and made of `a`-`z` only.
///
/// Equivalent to matching `^[a-z]+$`.
pub fn is_ascii_lower_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

// ---------------------------------------------------------------------------
// Character-safe slicing
// ---------------------------------------------------------------------------

/// Return the word with its final character removed.
///
/// Returns `None` for an empty word.
pub fn without_last_char(word: &str) -> Option<&str> {
    let last = word.chars().next_back()?;
    Some(&word[..word.len() - last.len_utf8()])
}

/// Number of characters (not bytes) in a word.
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Return the first `n` characters of a word, or `None` if it is shorter.
pub fn char_prefix(word: &str, n: usize) -> Option<&str> {
    if n == 0 {
        return Some("");
    }
    match word.char_indices().nth(n) {
        Some((idx, _)) => Some(&word[..idx]),
        None if char_len(word) == n => Some(word),
        None => None,
    }
}

/// Check whether the word ends in two identical consonants ("stopp", "runn").
pub fn ends_with_doubled_consonant(word: &str) -> bool {
    let mut tail = word.chars().rev();
    match (tail.next(), tail.next()) {
        (Some(last), Some(before)) => last == before && is_consonant(last),
        _ => false,
    }
}
