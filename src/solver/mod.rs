//! Candidate filtering and next-guess ranking
//!
//! `filter` narrows a candidate set with one round of feedback. The rankers
//! order what is left as suggestions, and `Session` threads the set through
//! successive rounds.

mod common;
mod filter;
pub mod frequency;
mod session;
mod strategy;

pub use common::rank_common;
pub use filter::filter;
pub use frequency::{RankedWord, ScoreWeights, rank};
pub use session::{RoundReport, RoundStatus, Session};
pub use strategy::{CommonWordsRanker, FrequencyRanker, Ranker, RankingMode, Suggestions};
