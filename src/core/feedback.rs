//! Letter-by-letter guess feedback
//!
//! A `GuessFeedback` pairs each letter of a guess with one of three outcomes.
//! It is produced by evaluating a guess against a known target, or by parsing
//! the `"<word> <code>"` text a player copies from the game.

use super::{SymbolTable, Word};
use crate::error::ParseError;
use rustc_hash::FxHashMap;

/// Outcome for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterOutcome {
    /// Letter does not occur in the target (see the filter for repeated letters)
    Absent,
    /// Letter occurs in the target, but not at this position
    Present,
    /// Letter occupies this exact position in the target
    Correct,
}

/// One guessed letter and its outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterFeedback {
    pub letter: u8,
    pub outcome: LetterOutcome,
}

/// Feedback for a whole guess, index-aligned to the guessed word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessFeedback {
    guess: Word,
    outcomes: Vec<LetterOutcome>,
}

impl GuessFeedback {
    /// Pair a guessed word with per-position outcomes
    ///
    /// # Errors
    /// Returns `ParseError::CodeLength` if the number of outcomes differs from the
    /// word length.
    pub fn from_parts(guess: Word, outcomes: Vec<LetterOutcome>) -> Result<Self, ParseError> {
        if outcomes.len() != guess.len() {
            return Err(ParseError::CodeLength {
                expected: guess.len(),
                actual: outcomes.len(),
            });
        }
        Ok(Self { guess, outcomes })
    }

    /// Feedback for `guess` when `target` is the answer
    ///
    /// Each position is judged on its own: a match is Correct, a letter missing
    /// from the target is Absent, anything else is Present. Repeated letters are
    /// not rationed against the target's letter counts here.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{GuessFeedback, SymbolTable, Word};
    ///
    /// let guess = Word::new("spree").unwrap();
    /// let target = Word::new("sheep").unwrap();
    /// let feedback = GuessFeedback::evaluate(&guess, &target);
    /// assert_eq!(feedback.encode(&SymbolTable::ARITHMETIC), "=+-=+");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(guess.len(), target.len(), "guess and target lengths differ");

        let outcomes = guess
            .chars()
            .iter()
            .enumerate()
            .map(|(i, &letter)| {
                if target.chars().get(i) == Some(&letter) {
                    LetterOutcome::Correct
                } else if !target.has_letter(letter) {
                    LetterOutcome::Absent
                } else {
                    LetterOutcome::Present
                }
            })
            .collect();

        Self {
            guess: guess.clone(),
            outcomes,
        }
    }

    /// Parse `"<word> <code>"` using the given symbol table
    ///
    /// Surrounding whitespace is ignored. The text is split at the first space;
    /// the word must be `word_length` letters and the code must hold one known
    /// symbol per letter.
    ///
    /// # Errors
    /// Returns `ParseError` describing the first problem found.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{GuessFeedback, LetterOutcome, SymbolTable};
    ///
    /// let feedback = GuessFeedback::parse("crane bygbb", &SymbolTable::COLORS, 5).unwrap();
    /// assert_eq!(feedback.word().text(), "crane");
    /// assert_eq!(feedback.outcomes()[2], LetterOutcome::Correct);
    ///
    /// assert!(GuessFeedback::parse("crane", &SymbolTable::COLORS, 5).is_err());
    /// ```
    pub fn parse(text: &str, symbols: &SymbolTable, word_length: usize) -> Result<Self, ParseError> {
        let (word, code) = text
            .trim()
            .split_once(' ')
            .ok_or(ParseError::MissingSeparator)?;

        let guess = Word::with_length(word, word_length).map_err(|source| {
            ParseError::InvalidWord {
                word: word.to_string(),
                source,
            }
        })?;

        let code_len = code.chars().count();
        if code_len != word_length {
            return Err(ParseError::CodeLength {
                expected: word_length,
                actual: code_len,
            });
        }

        let outcomes = code
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                symbols
                    .outcome(symbol)
                    .ok_or(ParseError::UnknownSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { guess, outcomes })
    }

    /// The guessed word
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.guess
    }

    /// Outcomes in guess order
    #[must_use]
    pub fn outcomes(&self) -> &[LetterOutcome] {
        &self.outcomes
    }

    /// Number of positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// True only for zero-length feedback, which `Word` rules out
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Iterate over (letter, outcome) pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = LetterFeedback> + '_ {
        self.guess
            .chars()
            .iter()
            .zip(&self.outcomes)
            .map(|(&letter, &outcome)| LetterFeedback { letter, outcome })
    }

    /// True when every letter is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcomes.iter().all(|&o| o == LetterOutcome::Correct)
    }

    /// How many times each letter occurs in the guess
    #[must_use]
    pub fn guess_counts(&self) -> FxHashMap<u8, usize> {
        self.guess.char_counts()
    }

    /// Render the outcomes as a code string
    #[must_use]
    pub fn encode(&self, symbols: &SymbolTable) -> String {
        self.outcomes.iter().map(|&o| symbols.symbol(o)).collect()
    }
}
