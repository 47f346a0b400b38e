//! Letter-count search over a candidate set

use crate::core::{CandidateSet, Word};

/// Candidates containing `letter` exactly `quantity` times
///
/// The letter is matched ignoring ASCII case. A quantity of zero finds the
/// words without the letter.
///
/// # Examples
/// ```
/// use wordle_assistant::commands::search_letter_count;
/// use wordle_assistant::core::{CandidateSet, Word};
///
/// let words: CandidateSet = ["sheep", "speed", "crane"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let found = search_letter_count(&words, 'e', 2);
/// assert_eq!(found.len(), 2);
/// ```
#[must_use]
pub fn search_letter_count(candidates: &CandidateSet, letter: char, quantity: usize) -> Vec<Word> {
    if !letter.is_ascii_alphabetic() {
        return Vec::new();
    }
    let letter = letter.to_ascii_lowercase() as u8;
    candidates
        .iter()
        .filter(|word| word.count_of(letter) == quantity)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn set() -> CandidateSet {
        ["sheep", "speed", "eerie", "crane", "fuzzy"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect()
    }

    #[rstest]
    #[case('e', 0, &["fuzzy"])]
    #[case('e', 1, &["crane"])]
    #[case('e', 2, &["sheep", "speed"])]
    #[case('e', 3, &["eerie"])]
    #[case('Z', 2, &["fuzzy"])]
    #[case('q', 1, &[])]
    #[case('1', 0, &[])]
    fn counts_exact_occurrences(
        #[case] letter: char,
        #[case] quantity: usize,
        #[case] expected: &[&str],
    ) {
        let found = search_letter_count(&set(), letter, quantity);
        let texts: Vec<&str> = found.iter().map(Word::text).collect();
        assert_eq!(texts, expected);
    }
}
