//! Common-word preference ranking
//!
//! Orders candidates by an external usage-frequency list instead of letter
//! statistics: the answer to a daily puzzle is usually an everyday word.

use crate::core::{CandidateSet, Word};
use rustc_hash::FxHashSet;

/// Candidates in common-list order, padded with the rest in dictionary order
///
/// Takes the common words that are still candidates, in the order the list
/// gives them (repeats ignored). If fewer than `top_n` remain, the other
/// candidates follow in lexicographic order. At most `top_n` words are returned.
///
/// # Examples
/// ```
/// use wordle_assistant::core::{CandidateSet, Word};
/// use wordle_assistant::solver::rank_common;
///
/// let words = |list: &[&str]| -> Vec<Word> {
///     list.iter().map(|w| Word::new(*w).unwrap()).collect()
/// };
/// let candidates: CandidateSet = words(&["abbey", "crane", "sheep", "water"]).into_iter().collect();
/// let common = words(&["water", "about", "sheep"]);
///
/// let ranked = rank_common(&candidates, &common, 3);
/// let texts: Vec<&str> = ranked.iter().map(Word::text).collect();
/// assert_eq!(texts, ["water", "sheep", "abbey"]);
/// ```
#[must_use]
pub fn rank_common(candidates: &CandidateSet, common_words: &[Word], top_n: usize) -> Vec<Word> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut ranked: Vec<Word> = Vec::with_capacity(top_n.min(candidates.len()));

    for word in common_words {
        if ranked.len() >= top_n {
            return ranked;
        }
        if let Some(candidate) = candidates.get(word.text())
            && seen.insert(candidate.text())
        {
            ranked.push(candidate.clone());
        }
    }

    for candidate in candidates {
        if ranked.len() >= top_n {
            break;
        }
        if seen.insert(candidate.text()) {
            ranked.push(candidate.clone());
        }
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn keeps_common_list_order() {
        let candidates: CandidateSet = words(&["abbey", "crane", "sheep", "water"])
            .into_iter()
            .collect();
        let common = words(&["water", "sheep", "crane"]);
        assert_eq!(
            texts(&rank_common(&candidates, &common, 3)),
            ["water", "sheep", "crane"]
        );
    }

    #[test]
    fn pads_with_remaining_candidates_lexicographically() {
        let candidates: CandidateSet = words(&["speed", "abbey", "crane", "sheep"])
            .into_iter()
            .collect();
        let common = words(&["sheep"]);
        assert_eq!(
            texts(&rank_common(&candidates, &common, 10)),
            ["sheep", "abbey", "crane", "speed"]
        );
    }

    #[test]
    fn ignores_common_words_that_are_not_candidates_and_repeats() {
        let candidates: CandidateSet = words(&["crane", "slate"]).into_iter().collect();
        let common = words(&["about", "slate", "slate", "other"]);
        assert_eq!(
            texts(&rank_common(&candidates, &common, 5)),
            ["slate", "crane"]
        );
    }

    #[test]
    fn truncates_to_top_n() {
        let candidates: CandidateSet = words(&["crane", "slate", "water"]).into_iter().collect();
        let common = words(&["water", "crane", "slate"]);
        assert_eq!(texts(&rank_common(&candidates, &common, 1)), ["water"]);
        assert!(rank_common(&candidates, &common, 0).is_empty());
    }

    #[test]
    fn huge_top_n_returns_every_candidate() {
        let candidates: CandidateSet = words(&["crane", "slate"]).into_iter().collect();
        assert_eq!(
            texts(&rank_common(&candidates, &[], usize::MAX)),
            ["crane", "slate"]
        );
    }

    #[test]
    fn empty_common_list_is_dictionary_order() {
        let candidates: CandidateSet = words(&["water", "crane"]).into_iter().collect();
        assert_eq!(texts(&rank_common(&candidates, &[], 5)), ["crane", "water"]);
    }
}
