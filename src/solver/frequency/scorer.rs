//! Frequency-based candidate scoring and ranking
//!
//! A word scores well when its letters, letter positions and letter pairs are
//! common among the remaining candidates: whatever feedback it draws, it then
//! speaks to many of them. A bonus for distinct letters discourages guesses
//! that spend a slot on a repeat.

use super::tables::{FrequencyTables, distinct_pairs};
use crate::core::{CandidateSet, Word};
use crate::error::ConfigError;
use rayon::prelude::*;
use serde::Deserialize;
use std::cmp::Ordering;

/// Weights of the four score terms
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Sum of letter frequencies over the word's distinct letters
    pub letter: f64,
    /// Sum of positional frequencies over the word's positions
    pub position: f64,
    /// Sum of pair frequencies over the word's distinct adjacent pairs
    pub pair: f64,
    /// Distinct letters divided by word length
    pub uniqueness: f64,
}

impl ScoreWeights {
    /// Create weights, rejecting negative or non-finite values
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidWeight` naming the first bad weight.
    pub fn new(letter: f64, position: f64, pair: f64, uniqueness: f64) -> Result<Self, ConfigError> {
        let weights = Self {
            letter,
            position,
            pair,
            uniqueness,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Check that every weight is finite and non-negative
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidWeight` naming the first bad weight.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("letter", self.letter),
            ("position", self.position),
            ("pair", self.pair),
            ("uniqueness", self.uniqueness),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            letter: 0.3,
            position: 0.4,
            pair: 0.2,
            uniqueness: 0.1,
        }
    }
}

/// A candidate and its score against the set it was ranked in
#[derive(Debug, Clone, PartialEq)]
pub struct RankedWord {
    pub word: Word,
    pub score: f64,
}

impl RankedWord {
    /// Higher score first, then dictionary order
    #[must_use]
    pub fn rank_order(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Score a word against precomputed tables
///
/// Always finite and non-negative for valid weights.
#[must_use]
pub fn score_word(word: &Word, tables: &FrequencyTables, weights: &ScoreWeights) -> f64 {
    let unique = word.unique_letters();

    let letter_sum: f64 = unique.iter().map(|&c| tables.letter_frequency(c)).sum();

    let position_sum: f64 = word
        .chars()
        .iter()
        .enumerate()
        .map(|(i, &c)| tables.position_frequency(i, c))
        .sum();

    let pair_sum: f64 = distinct_pairs(word)
        .into_iter()
        .map(|pair| tables.pair_frequency(pair))
        .sum();

    let uniqueness = if word.is_empty() {
        0.0
    } else {
        unique.len() as f64 / word.len() as f64
    };

    weights.letter * letter_sum
        + weights.position * position_sum
        + weights.pair * pair_sum
        + weights.uniqueness * uniqueness
}

/// Rank candidates by frequency score
///
/// Scores are computed in parallel; the result is sorted by descending score
/// with ties in dictionary order, then cut to `top_n` entries.
///
/// # Examples
/// ```
/// use wordle_assistant::core::{CandidateSet, Word};
/// use wordle_assistant::solver::frequency::{ScoreWeights, rank};
///
/// let candidates: CandidateSet = ["edcba", "abcde", "zzzzz"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let ranked = rank(&candidates, 2, &ScoreWeights::default());
/// assert_eq!(ranked.len(), 2);
/// // Mirror images tie; dictionary order decides
/// assert_eq!(ranked[0].word.text(), "abcde");
/// assert_eq!(ranked[1].word.text(), "edcba");
/// ```
#[must_use]
pub fn rank(candidates: &CandidateSet, top_n: usize, weights: &ScoreWeights) -> Vec<RankedWord> {
    if top_n == 0 {
        return Vec::new();
    }

    let tables = FrequencyTables::build(candidates);
    let words: Vec<&Word> = candidates.iter().collect();

    let mut ranked: Vec<RankedWord> = words
        .par_iter()
        .map(|&word| RankedWord {
            word: word.clone(),
            score: score_word(word, &tables, weights),
        })
        .collect();

    ranked.sort_by(RankedWord::rank_order);
    ranked.truncate(top_n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> CandidateSet {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn default_weights() {
        let weights = ScoreWeights::default();
        assert!((weights.letter - 0.3).abs() < f64::EPSILON);
        assert!((weights.position - 0.4).abs() < f64::EPSILON);
        assert!((weights.pair - 0.2).abs() < f64::EPSILON);
        assert!((weights.uniqueness - 0.1).abs() < f64::EPSILON);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn invalid_weights_rejected() {
        assert!(matches!(
            ScoreWeights::new(-0.1, 0.4, 0.2, 0.1),
            Err(ConfigError::InvalidWeight { name: "letter", .. })
        ));
        assert!(matches!(
            ScoreWeights::new(0.3, 0.4, f64::NAN, 0.1),
            Err(ConfigError::InvalidWeight { name: "pair", .. })
        ));
    }

    #[test]
    fn score_of_single_candidate_is_maximal_for_itself() {
        // Against a set containing only SLATE, every term is saturated
        let candidates = set(&["slate"]);
        let tables = FrequencyTables::build(&candidates);
        let word = Word::new("slate").unwrap();
        let score = score_word(&word, &tables, &ScoreWeights::default());
        // 0.3*5 + 0.4*5 + 0.2*4 + 0.1*1
        assert!((score - 4.4).abs() < 1e-9);
    }

    #[test]
    fn repeated_letters_score_lower() {
        let candidates = set(&["crane", "crate", "grate", "irate", "trace", "eerie"]);
        let ranked = rank(&candidates, 10, &ScoreWeights::default());
        assert_eq!(ranked.len(), 6);
        assert_eq!(ranked.last().map(|r| r.word.text()), Some("eerie"));
    }

    #[test]
    fn ranking_is_sorted_and_truncated() {
        let candidates = set(&["crane", "crate", "grate", "irate", "trace", "slate"]);
        let ranked = rank(&candidates, 3, &ScoreWeights::default());
        assert_eq!(ranked.len(), 3);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn ties_broken_lexicographically() {
        let candidates = set(&["edcba", "abcde"]);
        for _ in 0..5 {
            let ranked = rank(&candidates, 2, &ScoreWeights::default());
            assert!((ranked[0].score - ranked[1].score).abs() < f64::EPSILON);
            assert_eq!(ranked[0].word.text(), "abcde");
            assert_eq!(ranked[1].word.text(), "edcba");
        }
    }

    #[test]
    fn zero_top_n_is_empty() {
        assert!(rank(&set(&["crane"]), 0, &ScoreWeights::default()).is_empty());
    }

    #[test]
    fn empty_candidates_rank_empty() {
        assert!(rank(&CandidateSet::new(), 5, &ScoreWeights::default()).is_empty());
    }

    #[test]
    fn scores_are_finite_and_non_negative() {
        let candidates = set(&["sheep", "speed", "fuzzy", "mamma", "crane"]);
        let tables = FrequencyTables::build(&candidates);
        for text in ["aaaaa", "zzzzz", "crane", "qxjvk", "sheep"] {
            let word = Word::new(text).unwrap();
            let score = score_word(&word, &tables, &ScoreWeights::default());
            assert!(score.is_finite() && score >= 0.0, "{text}: {score}");
        }
    }
}
