//! Suggestion strategies
//!
//! Defines the Ranker trait and the two named ranking modes.

use super::common::rank_common;
use super::frequency::{RankedWord, ScoreWeights, rank};
use crate::core::{CandidateSet, Word};
use crate::error::ConfigError;
use std::fmt;

/// Ordered next-guess suggestions
#[derive(Debug, Clone, PartialEq)]
pub enum Suggestions {
    /// Frequency ranking with scores
    Scored(Vec<RankedWord>),
    /// Common-word ranking (no scores)
    Common(Vec<Word>),
}

impl Suggestions {
    /// Suggested words, best first
    #[must_use]
    pub fn words(&self) -> Vec<&Word> {
        match self {
            Self::Scored(ranked) => ranked.iter().map(|r| &r.word).collect(),
            Self::Common(words) => words.iter().collect(),
        }
    }

    /// Best suggestion
    #[must_use]
    pub fn first(&self) -> Option<&Word> {
        match self {
            Self::Scored(ranked) => ranked.first().map(|r| &r.word),
            Self::Common(words) => words.first(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Scored(ranked) => ranked.len(),
            Self::Common(words) => words.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A way of ordering the current candidates as next-guess suggestions
pub trait Ranker {
    /// Suggest up to `top_n` candidates, best first
    fn suggest(&self, candidates: &CandidateSet, top_n: usize) -> Suggestions;
}

/// Letter/position/pair frequency ranking
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyRanker {
    pub weights: ScoreWeights,
}

impl FrequencyRanker {
    #[must_use]
    pub const fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }
}

impl Ranker for FrequencyRanker {
    fn suggest(&self, candidates: &CandidateSet, top_n: usize) -> Suggestions {
        Suggestions::Scored(rank(candidates, top_n, &self.weights))
    }
}

/// Prefer words from an ordered common-word list
#[derive(Debug, Clone, Default)]
pub struct CommonWordsRanker {
    pub common_words: Vec<Word>,
}

impl CommonWordsRanker {
    #[must_use]
    pub const fn new(common_words: Vec<Word>) -> Self {
        Self { common_words }
    }
}

impl Ranker for CommonWordsRanker {
    fn suggest(&self, candidates: &CandidateSet, top_n: usize) -> Suggestions {
        Suggestions::Common(rank_common(candidates, &self.common_words, top_n))
    }
}

/// Named ranking mode, selectable at runtime
#[derive(Debug, Clone)]
pub enum RankingMode {
    /// Frequency heuristic (default)
    Frequency(FrequencyRanker),
    /// Common-word preference
    Common(CommonWordsRanker),
}

impl RankingMode {
    /// Build a mode from its name
    ///
    /// Supported names: "frequency" (alias "freq"), "common" (alias "common-words").
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownMode` for any other name.
    pub fn from_name(
        name: &str,
        weights: ScoreWeights,
        common_words: Vec<Word>,
    ) -> Result<Self, ConfigError> {
        match name.to_ascii_lowercase().as_str() {
            "frequency" | "freq" => Ok(Self::Frequency(FrequencyRanker::new(weights))),
            "common" | "common-words" => Ok(Self::Common(CommonWordsRanker::new(common_words))),
            _ => Err(ConfigError::UnknownMode(name.to_string())),
        }
    }

    /// Mode name as accepted by `from_name`
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Common(_) => "common",
        }
    }
}

impl Default for RankingMode {
    fn default() -> Self {
        Self::Frequency(FrequencyRanker::default())
    }
}

impl Ranker for RankingMode {
    fn suggest(&self, candidates: &CandidateSet, top_n: usize) -> Suggestions {
        match self {
            Self::Frequency(r) => r.suggest(candidates, top_n),
            Self::Common(r) => r.suggest(candidates, top_n),
        }
    }
}

impl fmt::Display for RankingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn candidates() -> CandidateSet {
        words(&["crane", "crate", "eerie", "water"]).into_iter().collect()
    }

    #[test]
    fn frequency_mode_returns_scores() {
        let mode = RankingMode::from_name("frequency", ScoreWeights::default(), Vec::new()).unwrap();
        let suggestions = mode.suggest(&candidates(), 2);
        assert!(matches!(suggestions, Suggestions::Scored(_)));
        assert_eq!(suggestions.len(), 2);
        assert_eq!(mode.name(), "frequency");
    }

    #[test]
    fn common_mode_follows_list() {
        let mode =
            RankingMode::from_name("common", ScoreWeights::default(), words(&["water", "eerie"]))
                .unwrap();
        let suggestions = mode.suggest(&candidates(), 3);
        let texts: Vec<&str> = suggestions.words().into_iter().map(Word::text).collect();
        assert_eq!(texts, ["water", "eerie", "crane"]);
        assert_eq!(suggestions.first().map(Word::text), Some("water"));
    }

    #[test]
    fn unknown_mode_is_error() {
        assert!(matches!(
            RankingMode::from_name("entropy", ScoreWeights::default(), Vec::new()),
            Err(ConfigError::UnknownMode(_))
        ));
    }

    #[test]
    fn empty_candidates_give_empty_suggestions() {
        let suggestions = RankingMode::default().suggest(&CandidateSet::new(), 5);
        assert!(suggestions.is_empty());
        assert!(suggestions.first().is_none());
    }
}
