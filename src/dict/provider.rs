//! Dictionary type backing validation and secret-word selection
//!
//! Two tiers per word length: the full set answers admissibility queries,
//! the common pool supplies secret words. Read-only once built; loaded at
//! startup and shared for the life of the process.

use super::embedded;
use crate::core::{MAX_WORD_LEN, MIN_WORD_LEN, Word};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Fatal dictionary problems, checked once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryError {
    /// No admissible words at all for a supported length
    MissingLength(usize),
    /// Admissible words exist but none are eligible as secrets
    EmptyCommonPool(usize),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLength(len) => {
                write!(f, "no words of length {len} available")
            }
            Self::EmptyCommonPool(len) => {
                write!(f, "no common words of length {len} to draw secrets from")
            }
        }
    }
}

impl std::error::Error for DictionaryError {}

/// Word sets grouped by length
#[derive(Debug, Default)]
pub struct Dictionary {
    full: FxHashMap<usize, FxHashSet<String>>,
    common: FxHashMap<usize, Vec<Word>>,
}

impl Dictionary {
    /// Create an empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the dictionary from the embedded word lists
    #[must_use]
    pub fn embedded() -> Self {
        let mut dict = Self::new();

        for len in MIN_WORD_LEN..=MAX_WORD_LEN {
            dict.add_words(embedded::full_list(len).iter().copied());
            dict.add_common(embedded::common_list(len).iter().copied());
            debug!(
                "loaded length {len}: {} words, {} common",
                dict.words_of_length(len).map_or(0, FxHashSet::len),
                dict.common_words_of_length(len).len()
            );
        }

        dict
    }

    /// Add words to the full (admissibility) tier
    ///
    /// Words are grouped by their own length; entries that do not form a
    /// valid `Word` are skipped.
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for text in words {
            if let Ok(word) = Word::new(text.as_ref()) {
                self.full
                    .entry(word.len())
                    .or_default()
                    .insert(word.text().to_string());
            }
        }
    }

    /// Add words to the common (secret pool) tier
    ///
    /// Common words are admissible by definition, so each one is also added
    /// to the full tier. Invalid entries are skipped.
    pub fn add_common<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for text in words {
            if let Ok(word) = Word::new(text.as_ref()) {
                self.full
                    .entry(word.len())
                    .or_default()
                    .insert(word.text().to_string());

                let pool = self.common.entry(word.len()).or_default();
                if !pool.contains(&word) {
                    pool.push(word);
                }
            }
        }
    }

    /// Whether `word` is an admissible dictionary word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.full
            .get(&word.len())
            .is_some_and(|set| set.contains(word))
    }

    /// All admissible words of a length, if any
    #[must_use]
    pub fn words_of_length(&self, len: usize) -> Option<&FxHashSet<String>> {
        self.full.get(&len)
    }

    /// The secret-word pool for a length, empty if none
    #[must_use]
    pub fn common_words_of_length(&self, len: usize) -> &[Word] {
        self.common.get(&len).map_or(&[], Vec::as_slice)
    }

    /// Verify every supported length can host a round
    ///
    /// # Errors
    /// Returns the first length with no admissible words or an empty
    /// secret pool. Callers treat this as fatal at startup; no round can
    /// be constructed for a missing length.
    pub fn ensure_complete(&self) -> Result<(), DictionaryError> {
        for len in MIN_WORD_LEN..=MAX_WORD_LEN {
            if self.words_of_length(len).is_none_or(FxHashSet::is_empty) {
                return Err(DictionaryError::MissingLength(len));
            }
            if self.common_words_of_length(len).is_empty() {
                return Err(DictionaryError::EmptyCommonPool(len));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dictionary_contains_nothing() {
        let dict = Dictionary::new();
        assert!(!dict.contains("apple"));
        assert!(dict.words_of_length(5).is_none());
        assert!(dict.common_words_of_length(5).is_empty());
    }

    #[test]
    fn add_words_groups_by_length() {
        let mut dict = Dictionary::new();
        dict.add_words(["cat", "apple", "dog"]);

        assert!(dict.contains("cat"));
        assert!(dict.contains("apple"));
        assert_eq!(dict.words_of_length(3).unwrap().len(), 2);
        assert_eq!(dict.words_of_length(5).unwrap().len(), 1);
    }

    #[test]
    fn add_words_skips_invalid_entries() {
        let mut dict = Dictionary::new();
        dict.add_words(["apple", "no", "sp4de", "toolongtobe"]);

        assert!(dict.contains("apple"));
        assert!(dict.words_of_length(2).is_none());
        assert_eq!(dict.words_of_length(5).unwrap().len(), 1);
    }

    #[test]
    fn common_words_are_also_admissible() {
        let mut dict = Dictionary::new();
        dict.add_common(["apple"]);

        assert!(dict.contains("apple"));
        assert_eq!(dict.common_words_of_length(5).len(), 1);
    }

    #[test]
    fn common_pool_deduplicates() {
        let mut dict = Dictionary::new();
        dict.add_common(["apple", "apple", "APPLE"]);
        assert_eq!(dict.common_words_of_length(5).len(), 1);
    }

    #[test]
    fn ensure_complete_reports_first_gap() {
        let mut dict = Dictionary::new();
        for word in ["cat", "tree", "apple", "garden", "journey", "mountain"] {
            dict.add_common([word]);
        }
        // Length 9 missing entirely
        assert_eq!(
            dict.ensure_complete(),
            Err(DictionaryError::MissingLength(9))
        );

        // Full tier alone is not enough; secrets need a common pool
        dict.add_words(["adventure"]);
        assert_eq!(
            dict.ensure_complete(),
            Err(DictionaryError::EmptyCommonPool(9))
        );

        dict.add_common(["adventure"]);
        assert!(dict.ensure_complete().is_ok());
    }

    #[test]
    fn lookup_is_case_sensitive_post_normalization() {
        // Dictionary stores normalized words; callers pass normalized text
        let mut dict = Dictionary::new();
        dict.add_words(["Apple"]);
        assert!(dict.contains("apple"));
    }
}
