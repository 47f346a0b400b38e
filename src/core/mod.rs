//! Core domain types for the puzzle
//!
//! Words, feedback, symbol tables and candidate sets. Everything here is a
//! plain value with no I/O.

mod candidates;
mod feedback;
mod symbols;
mod word;

pub use candidates::CandidateSet;
pub use feedback::{GuessFeedback, LetterFeedback, LetterOutcome};
pub use symbols::SymbolTable;
pub use word::{DEFAULT_WORD_LENGTH, Word, WordError};
