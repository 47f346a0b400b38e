//! Constraint filtering
//!
//! Reduces a candidate set to the words consistent with one round of feedback.
//!
//! Each candidate is checked in three ordered passes over the feedback:
//! 1. Correct: the candidate has the letter at that position.
//! 2. Absent: a letter guessed once is banned outright. A letter guessed more
//!    than once is only excluded from that position.
//! 3. Present: the candidate has the letter, but not at that position.
//!
//! Guess letter counts are computed once per call, so the Absent pass does not
//! depend on the order in which the other passes run.

use crate::core::{CandidateSet, GuessFeedback, LetterOutcome, Word};
use rustc_hash::FxHashMap;

/// Candidates consistent with `feedback`
///
/// Returns a new set; the input is left untouched and the result is always a
/// subset of it. An empty result means no candidate matches (usually a
/// mistyped code) and is not an error.
///
/// # Examples
/// ```
/// use wordle_assistant::core::{CandidateSet, GuessFeedback, SymbolTable, Word};
/// use wordle_assistant::solver::filter;
///
/// let candidates: CandidateSet = ["sheep", "speed"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let feedback = GuessFeedback::parse("spree =+-=+", &SymbolTable::ARITHMETIC, 5).unwrap();
///
/// let remaining = filter(&candidates, &feedback);
/// assert_eq!(remaining.len(), 1);
/// assert!(remaining.contains("sheep"));
/// ```
#[must_use]
pub fn filter(candidates: &CandidateSet, feedback: &GuessFeedback) -> CandidateSet {
    let guess_counts = feedback.guess_counts();
    candidates.filtered(|candidate| is_consistent(candidate, feedback, &guess_counts))
}

/// Check one candidate against the feedback
fn is_consistent(
    candidate: &Word,
    feedback: &GuessFeedback,
    guess_counts: &FxHashMap<u8, usize>,
) -> bool {
    if candidate.len() != feedback.len() {
        return false;
    }

    passes_correct(candidate, feedback)
        && passes_absent(candidate, feedback, guess_counts)
        && passes_present(candidate, feedback)
}

fn passes_correct(candidate: &Word, feedback: &GuessFeedback) -> bool {
    feedback
        .iter()
        .enumerate()
        .filter(|(_, f)| f.outcome == LetterOutcome::Correct)
        .all(|(i, f)| candidate.char_at(i) == f.letter)
}

fn passes_absent(
    candidate: &Word,
    feedback: &GuessFeedback,
    guess_counts: &FxHashMap<u8, usize>,
) -> bool {
    feedback
        .iter()
        .enumerate()
        .filter(|(_, f)| f.outcome == LetterOutcome::Absent)
        .all(|(i, f)| {
            let guessed = guess_counts.get(&f.letter).copied().unwrap_or(0);
            if guessed > 1 {
                // Capped: only this position is ruled out
                candidate.char_at(i) != f.letter
            } else {
                !candidate.has_letter(f.letter)
            }
        })
}

fn passes_present(candidate: &Word, feedback: &GuessFeedback) -> bool {
    feedback
        .iter()
        .enumerate()
        .filter(|(_, f)| f.outcome == LetterOutcome::Present)
        .all(|(i, f)| candidate.has_letter(f.letter) && candidate.char_at(i) != f.letter)
}
