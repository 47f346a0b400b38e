//! Auto-play solve command
//!
//! Plays a puzzle with a known target: evaluate the guess, filter, then take
//! the top suggestion as the next guess.

use crate::core::{CandidateSet, GuessFeedback, Word};
use crate::error::InvalidWordError;
use crate::solver::{Ranker, filter};

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub start: Word,
    pub target: Word,
    pub max_rounds: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(start: Word, target: Word) -> Self {
        Self {
            start,
            target,
            max_rounds: 6,
        }
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub target: Word,
}

impl SolveResult {
    /// Number of guesses played
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.steps.len()
    }
}

/// A single guess in the solution path
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub feedback: GuessFeedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

impl GuessStep {
    #[must_use]
    pub const fn word(&self) -> &Word {
        self.feedback.word()
    }
}

/// Auto-play from `config.start` until solved or out of rounds
///
/// # Errors
///
/// Returns `InvalidWordError` if the starting word or the target is not in
/// the dictionary.
pub fn solve_word<R: Ranker + ?Sized>(
    config: &SolveConfig,
    dictionary: &CandidateSet,
    ranker: &R,
) -> Result<SolveResult, InvalidWordError> {
    for word in [&config.start, &config.target] {
        if !dictionary.contains(word.text()) {
            return Err(InvalidWordError {
                word: word.text().to_string(),
            });
        }
    }

    let mut candidates = dictionary.clone();
    let mut guess = config.start.clone();
    let mut steps: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_rounds {
        let candidates_before = candidates.len();
        let feedback = GuessFeedback::evaluate(&guess, &config.target);
        candidates = filter(&candidates, &feedback);
        let solved = feedback.is_solved();

        steps.push(GuessStep {
            feedback,
            candidates_before,
            candidates_after: candidates.len(),
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                steps,
                target: config.target.clone(),
            });
        }

        match ranker.suggest(&candidates, 1).first() {
            Some(next) => guess = next.clone(),
            None => break,
        }
    }

    Ok(SolveResult {
        success: false,
        steps,
        target: config.target.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterOutcome;
    use crate::solver::RankingMode;
    use crate::wordlists::DICTIONARY;
    use crate::wordlists::loader::dictionary_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn dictionary() -> CandidateSet {
        dictionary_from_slice(DICTIONARY, 5)
    }

    #[test]
    fn first_guess_correct_takes_one_round() {
        let config = SolveConfig::new(word("crane"), word("crane"));
        let result = solve_word(&config, &dictionary(), &RankingMode::default()).unwrap();
        assert!(result.success);
        assert_eq!(result.rounds(), 1);
        assert_eq!(result.steps[0].candidates_after, 1);
    }

    #[test]
    fn solves_within_limit_and_records_history() {
        let config = SolveConfig::new(word("crane"), word("sheep"));
        let result = solve_word(&config, &dictionary(), &RankingMode::default()).unwrap();

        assert!(result.rounds() <= 6);
        assert_eq!(result.steps[0].word().text(), "crane");
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
        if result.success {
            let last = result.steps.last().unwrap();
            assert_eq!(last.word().text(), "sheep");
            assert!(last.feedback.outcomes().iter().all(|&o| o == LetterOutcome::Correct));
        }
    }

    #[test]
    fn respects_max_rounds() {
        let mut config = SolveConfig::new(word("fuzzy"), word("sheep"));
        config.max_rounds = 1;
        let result = solve_word(&config, &dictionary(), &RankingMode::default()).unwrap();
        assert!(!result.success);
        assert_eq!(result.rounds(), 1);
    }

    #[test]
    fn words_outside_dictionary_rejected() {
        let config = SolveConfig::new(word("zzzzz"), word("sheep"));
        let err = solve_word(&config, &dictionary(), &RankingMode::default()).unwrap_err();
        assert_eq!(err.word, "zzzzz");

        let config = SolveConfig::new(word("crane"), word("qqqqq"));
        assert!(solve_word(&config, &dictionary(), &RankingMode::default()).is_err());
    }

    #[test]
    fn tiny_dictionary_converges() {
        let dictionary: CandidateSet = ["sheep", "speed", "spree"].iter().map(|w| word(w)).collect();
        let config = SolveConfig::new(word("spree"), word("sheep"));
        let result = solve_word(&config, &dictionary, &RankingMode::default()).unwrap();
        // spree =+-=+ leaves only sheep
        assert!(result.success);
        assert_eq!(result.rounds(), 2);
    }
}
