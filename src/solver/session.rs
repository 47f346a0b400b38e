//! Puzzle session state
//!
//! The session owns the dictionary and the current candidate set and threads
//! them through `filter` one round at a time. The core functions never see
//! this state; they receive the current set and return the next one.

use super::filter::filter;
use super::strategy::{Ranker, Suggestions};
use crate::core::{CandidateSet, GuessFeedback, Word};
use crate::error::InvalidWordError;

/// State of the puzzle after a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundStatus {
    /// Exactly one candidate remains
    Solved(Word),
    /// No candidate matches the feedback given so far
    Contradiction,
    /// More than one candidate remains
    Open(usize),
}

/// Summary of one applied round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub before: usize,
    pub after: usize,
    pub status: RoundStatus,
}

/// A puzzle in progress
#[derive(Debug, Clone)]
pub struct Session {
    dictionary: CandidateSet,
    current: CandidateSet,
    history: Vec<GuessFeedback>,
}

impl Session {
    /// Start a session over the full dictionary
    #[must_use]
    pub fn new(dictionary: CandidateSet) -> Self {
        Self {
            current: dictionary.clone(),
            dictionary,
            history: Vec::new(),
        }
    }

    /// The full dictionary
    #[must_use]
    pub const fn dictionary(&self) -> &CandidateSet {
        &self.dictionary
    }

    /// Candidates consistent with every round so far
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.current
    }

    /// Feedback applied so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[GuessFeedback] {
        &self.history
    }

    /// Check that a guess is a dictionary word
    ///
    /// # Errors
    /// Returns `InvalidWordError` when the word is not in the dictionary.
    pub fn validate_guess(&self, word: &Word) -> Result<(), InvalidWordError> {
        if self.dictionary.contains(word.text()) {
            Ok(())
        } else {
            Err(InvalidWordError {
                word: word.text().to_string(),
            })
        }
    }

    /// Apply one round of feedback
    pub fn apply(&mut self, feedback: GuessFeedback) -> RoundReport {
        let before = self.current.len();
        self.current = filter(&self.current, &feedback);
        let after = self.current.len();

        log::debug!(
            "applied {} ({}): {before} -> {after} candidates",
            feedback.word(),
            feedback.outcomes().len()
        );
        self.history.push(feedback);

        RoundReport {
            before,
            after,
            status: self.status(),
        }
    }

    /// Current puzzle state
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        match self.current.len() {
            0 => RoundStatus::Contradiction,
            1 => self
                .current
                .solution()
                .map_or(RoundStatus::Contradiction, |w| RoundStatus::Solved(w.clone())),
            n => RoundStatus::Open(n),
        }
    }

    /// Drop the last round and rebuild the candidates from the dictionary
    ///
    /// Returns the removed feedback, or `None` if there was nothing to undo.
    pub fn undo(&mut self) -> Option<GuessFeedback> {
        let removed = self.history.pop()?;
        self.current = self
            .history
            .iter()
            .fold(self.dictionary.clone(), |candidates, feedback| {
                filter(&candidates, feedback)
            });
        log::debug!("undid {}: {} candidates", removed.word(), self.current.len());
        Some(removed)
    }

    /// Forget all rounds
    pub fn reset(&mut self) {
        self.current = self.dictionary.clone();
        self.history.clear();
        log::info!("session reset to {} words", self.dictionary.len());
    }

    /// Ask a ranker for suggestions from the current candidates
    pub fn suggest<R: Ranker + ?Sized>(&self, ranker: &R, top_n: usize) -> Suggestions {
        ranker.suggest(&self.current, top_n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SymbolTable;
    use crate::solver::RankingMode;

    fn dictionary() -> CandidateSet {
        ["sheep", "speed", "spree", "those", "these", "chose", "crane", "slate"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect()
    }

    fn feedback(text: &str) -> GuessFeedback {
        GuessFeedback::parse(text, &SymbolTable::ARITHMETIC, 5).unwrap()
    }

    #[test]
    fn new_session_starts_with_dictionary() {
        let session = Session::new(dictionary());
        assert_eq!(session.candidates(), session.dictionary());
        assert!(session.history().is_empty());
        assert_eq!(session.status(), RoundStatus::Open(8));
    }

    #[test]
    fn apply_shrinks_and_reports() {
        let mut session = Session::new(dictionary());
        let report = session.apply(feedback("spree =+-=+"));
        assert_eq!(report.before, 8);
        assert_eq!(report.after, 1);
        assert_eq!(
            report.status,
            RoundStatus::Solved(Word::new("sheep").unwrap())
        );
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn contradiction_is_reported_not_raised() {
        let mut session = Session::new(dictionary());
        let report = session.apply(feedback("sheep -----"));
        assert_eq!(report.after, 0);
        assert_eq!(report.status, RoundStatus::Contradiction);
    }

    #[test]
    fn undo_replays_remaining_history() {
        let mut session = Session::new(dictionary());
        session.apply(feedback("crane ----+"));
        let after_first = session.candidates().clone();
        session.apply(feedback("those -----"));
        assert!(session.candidates().len() < after_first.len());

        let removed = session.undo().unwrap();
        assert_eq!(removed.word().text(), "those");
        assert_eq!(session.candidates(), &after_first);

        session.undo();
        assert_eq!(session.candidates(), session.dictionary());
        assert!(session.undo().is_none());
    }

    #[test]
    fn reset_restores_dictionary() {
        let mut session = Session::new(dictionary());
        session.apply(feedback("crane -----"));
        session.reset();
        assert_eq!(session.candidates().len(), 8);
        assert!(session.history().is_empty());
    }

    #[test]
    fn validate_guess_checks_dictionary() {
        let session = Session::new(dictionary());
        assert!(session.validate_guess(&Word::new("sheep").unwrap()).is_ok());
        let err = session
            .validate_guess(&Word::new("zzzzz").unwrap())
            .unwrap_err();
        assert_eq!(err.word, "zzzzz");
    }

    #[test]
    fn suggest_uses_current_candidates() {
        let mut session = Session::new(dictionary());
        session.apply(feedback("crane ----+"));
        let suggestions = session.suggest(&RankingMode::default(), 20);
        assert_eq!(suggestions.len(), session.candidates().len());
    }
}
