//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    write_benchmark_result, write_candidates, write_feedback, write_round_report,
    write_solve_result, write_starting_words, write_suggestions, write_word_list,
};
