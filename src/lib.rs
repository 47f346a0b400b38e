//! Wordle Assistant
//!
//! Narrows the candidate answers of a Wordle-style puzzle from per-letter
//! feedback and ranks the survivors as next guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assistant::core::{CandidateSet, GuessFeedback, SymbolTable, Word};
//! use wordle_assistant::solver::{ScoreWeights, filter, rank};
//!
//! let candidates: CandidateSet = ["sheep", "speed", "spree", "crane"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! // "spree" against the answer "sheep"
//! let feedback = GuessFeedback::parse("spree =+-=+", &SymbolTable::ARITHMETIC, 5).unwrap();
//! let remaining = filter(&candidates, &feedback);
//! assert_eq!(remaining.solution().map(Word::text), Some("sheep"));
//!
//! let ranked = rank(&candidates, 3, &ScoreWeights::default());
//! assert_eq!(ranked.len(), 3);
//! ```

// Core domain types
pub mod core;

// Filtering and ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod config;
pub mod error;
