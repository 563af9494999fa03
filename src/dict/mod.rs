//! Word dictionary for the game
//!
//! Provides embedded word lists compiled into the binary, a runtime file
//! loader, and the `Dictionary` type the validator and session draw from.

mod embedded;
pub mod loader;
mod provider;

pub use provider::{Dictionary, DictionaryError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_WORD_LEN, MIN_WORD_LEN};

    #[test]
    fn embedded_lists_cover_every_length() {
        let dict = Dictionary::embedded();
        assert!(dict.ensure_complete().is_ok());
    }

    #[test]
    fn embedded_counts_match_consts() {
        assert_eq!(embedded::WORDS_5.len(), embedded::WORDS_5_COUNT);
        assert_eq!(embedded::COMMON_5.len(), embedded::COMMON_5_COUNT);
        assert_eq!(embedded::WORDS_9.len(), embedded::WORDS_9_COUNT);
        assert_eq!(embedded::COMMON_9.len(), embedded::COMMON_9_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for len in MIN_WORD_LEN..=MAX_WORD_LEN {
            for &word in embedded::full_list(len) {
                assert_eq!(word.len(), len, "Word '{word}' is not {len} letters");
                assert!(
                    word.bytes().all(|b| b.is_ascii_lowercase()),
                    "Word '{word}' contains non-lowercase chars"
                );
            }
        }
    }

    #[test]
    fn common_tier_is_subset_of_full() {
        let dict = Dictionary::embedded();

        for len in MIN_WORD_LEN..=MAX_WORD_LEN {
            for word in dict.common_words_of_length(len) {
                assert!(
                    dict.contains(word.text()),
                    "Common word '{word}' missing from full tier"
                );
            }
        }
    }

    #[test]
    fn embedded_contains_everyday_words() {
        let dict = Dictionary::embedded();
        for word in ["cat", "tree", "apple", "garden", "weather", "mountain"] {
            assert!(dict.contains(word), "expected '{word}' in dictionary");
        }
    }
}
