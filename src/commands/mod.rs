//! Command implementations

pub mod benchmark;
pub mod reverse;
pub mod search;
pub mod shell;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use reverse::{DEFAULT_REVERSE_ROUNDS, StartingWord, reverse_solve};
pub use search::search_letter_count;
pub use shell::{Flow, Shell};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
