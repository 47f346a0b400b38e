//! Letter frequency tables for a candidate set
//!
//! All frequencies are fractions of the current candidate set, so a value of
//! 0.5 means half of the remaining words have the feature.

use crate::core::{CandidateSet, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Letter, positional and adjacent-pair frequencies of a candidate set
#[derive(Debug, Clone, Default)]
pub struct FrequencyTables {
    letters: FxHashMap<u8, f64>,
    positions: Vec<FxHashMap<u8, f64>>,
    pairs: FxHashMap<[u8; 2], f64>,
}

impl FrequencyTables {
    /// Build tables from the candidates
    ///
    /// An empty set gives all-zero tables.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{CandidateSet, Word};
    /// use wordle_assistant::solver::frequency::FrequencyTables;
    ///
    /// let candidates: CandidateSet = ["sheep", "speed"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let tables = FrequencyTables::build(&candidates);
    ///
    /// assert!((tables.letter_frequency(b'e') - 1.0).abs() < 1e-9);
    /// assert!((tables.letter_frequency(b'd') - 0.5).abs() < 1e-9);
    /// assert!((tables.position_frequency(1, b'h') - 0.5).abs() < 1e-9);
    /// assert!((tables.pair_frequency(*b"ee") - 1.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn build(candidates: &CandidateSet) -> Self {
        let total = candidates.len();
        if total == 0 {
            return Self::default();
        }

        let length = candidates.word_length().unwrap_or_default();
        let mut letter_counts: FxHashMap<u8, usize> = FxHashMap::default();
        let mut position_counts: Vec<FxHashMap<u8, usize>> = vec![FxHashMap::default(); length];
        let mut pair_counts: FxHashMap<[u8; 2], usize> = FxHashMap::default();

        for word in candidates {
            for letter in word.unique_letters() {
                *letter_counts.entry(letter).or_insert(0) += 1;
            }
            for (i, &letter) in word.chars().iter().enumerate().take(length) {
                *position_counts[i].entry(letter).or_insert(0) += 1;
            }
            for pair in distinct_pairs(word) {
                *pair_counts.entry(pair).or_insert(0) += 1;
            }
        }

        let fraction = |count: usize| count as f64 / total as f64;

        Self {
            letters: letter_counts
                .into_iter()
                .map(|(k, v)| (k, fraction(v)))
                .collect(),
            positions: position_counts
                .into_iter()
                .map(|counts| counts.into_iter().map(|(k, v)| (k, fraction(v))).collect())
                .collect(),
            pairs: pair_counts
                .into_iter()
                .map(|(k, v)| (k, fraction(v)))
                .collect(),
        }
    }

    /// Fraction of candidates containing `letter` at least once
    #[must_use]
    pub fn letter_frequency(&self, letter: u8) -> f64 {
        self.letters.get(&letter).copied().unwrap_or(0.0)
    }

    /// Fraction of candidates with `letter` at `position`
    #[must_use]
    pub fn position_frequency(&self, position: usize, letter: u8) -> f64 {
        self.positions
            .get(position)
            .and_then(|counts| counts.get(&letter))
            .copied()
            .unwrap_or(0.0)
    }

    /// Fraction of candidates containing the adjacent `pair`
    #[must_use]
    pub fn pair_frequency(&self, pair: [u8; 2]) -> f64 {
        self.pairs.get(&pair).copied().unwrap_or(0.0)
    }
}

/// Adjacent letter pairs of a word, each listed once, in sorted order
#[must_use]
pub fn distinct_pairs(word: &Word) -> Vec<[u8; 2]> {
    let pairs: FxHashSet<[u8; 2]> = word.chars().windows(2).map(|w| [w[0], w[1]]).collect();
    let mut pairs: Vec<[u8; 2]> = pairs.into_iter().collect();
    pairs.sort_unstable();
    pairs
}
