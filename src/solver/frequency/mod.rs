//! Frequency-heuristic ranking
//!
//! Scores each candidate by how common its letters, positions and letter
//! pairs are within the current candidate set.

mod scorer;
mod tables;

pub use scorer::{RankedWord, ScoreWeights, rank, score_word};
pub use tables::{FrequencyTables, distinct_pairs};
