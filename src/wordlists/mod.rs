//! Word lists
//!
//! The default dictionary and common-word list are compiled into the binary;
//! `loader` reads replacements from disk.

mod embedded;
pub mod loader;

pub use embedded::{COMMON_WORDS, COMMON_WORDS_COUNT, DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn common_words_count_matches_const() {
        assert_eq!(COMMON_WORDS.len(), COMMON_WORDS_COUNT);
    }

    #[test]
    fn dictionary_words_are_five_lowercase_letters() {
        for &word in DICTIONARY {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_is_sorted_without_repeats() {
        assert!(DICTIONARY.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn common_words_are_rank_stripped() {
        for &word in COMMON_WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Common word '{word}' still has a rank or other characters"
            );
        }
        assert_eq!(COMMON_WORDS.first(), Some(&"which"));
    }

    #[test]
    fn most_common_words_are_in_dictionary() {
        let dictionary: FxHashSet<&str> = DICTIONARY.iter().copied().collect();
        for &word in &COMMON_WORDS[..10] {
            assert!(dictionary.contains(word), "'{word}' not in dictionary");
        }
    }
}
