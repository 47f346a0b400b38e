//! Benchmark command
//!
//! Auto-plays a random sample of dictionary targets and reports how many
//! rounds the ranking needed.

use super::solve::{SolveConfig, solve_word};
use crate::core::{CandidateSet, Word};
use crate::solver::Ranker;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Benchmark settings
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Number of targets to sample
    pub count: usize,
    /// First guess; the top-ranked dictionary word when unset
    pub first_word: Option<Word>,
    pub max_rounds: usize,
    /// Sampling seed; random when unset
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 50,
            first_word: None,
            max_rounds: 6,
            seed: None,
            show_progress: false,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub first_word: Option<Word>,
    pub seed: u64,
    pub total_words: usize,
    pub solved: usize,
    pub failed: Vec<Word>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Rounds needed by solved targets -> number of targets
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

/// Sample targets and auto-play each one
#[must_use]
pub fn run_benchmark<R: Ranker + Sync + ?Sized>(
    dictionary: &CandidateSet,
    ranker: &R,
    config: &BenchmarkConfig,
) -> BenchmarkResult {
    let start = Instant::now();
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut targets: Vec<&Word> = dictionary.iter().choose_multiple(&mut rng, config.count);
    targets.sort();
    log::info!("benchmarking {} targets (seed {seed})", targets.len());

    let first_word = config
        .first_word
        .clone()
        .or_else(|| ranker.suggest(dictionary, 1).first().cloned());

    let progress = if config.show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<(&Word, Option<usize>)> = targets
        .par_iter()
        .map(|&target| {
            let rounds = first_word.as_ref().and_then(|first| {
                let mut solve = SolveConfig::new(first.clone(), target.clone());
                solve.max_rounds = config.max_rounds;
                solve_word(&solve, dictionary, ranker)
                    .ok()
                    .filter(|r| r.success)
                    .map(|r| r.rounds())
            });
            progress.inc(1);
            (target, rounds)
        })
        .collect();
    progress.finish_and_clear();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failed = Vec::new();
    for (target, rounds) in &outcomes {
        match rounds {
            Some(n) => *distribution.entry(*n).or_insert(0) += 1,
            None => failed.push((*target).clone()),
        }
    }

    let solved: usize = distribution.values().sum();
    let total_guesses: usize = distribution.iter().map(|(n, count)| n * count).sum();

    BenchmarkResult {
        first_word,
        seed,
        total_words: targets.len(),
        solved,
        failed,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: distribution.keys().next().copied().unwrap_or(0),
        max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::RankingMode;
    use crate::wordlists::DICTIONARY;
    use crate::wordlists::loader::dictionary_from_slice;

    fn dictionary() -> CandidateSet {
        dictionary_from_slice(DICTIONARY, 5)
    }

    fn config(count: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            count,
            seed: Some(7),
            ..BenchmarkConfig::default()
        }
    }

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(&dictionary(), &RankingMode::default(), &config(10));

        assert_eq!(result.total_words, 10);
        assert_eq!(result.solved + result.failed.len(), 10);
        assert!(result.first_word.is_some());
        assert!(result.max_guesses <= 6);
        if result.solved > 0 {
            assert!(result.min_guesses >= 1);
            assert!(result.average_guesses >= result.min_guesses as f64);
            assert!(result.average_guesses <= result.max_guesses as f64);
        }
    }

    #[test]
    fn distribution_sums_to_solved() {
        let result = run_benchmark(&dictionary(), &RankingMode::default(), &config(10));
        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
    }

    #[test]
    fn same_seed_same_sample() {
        let a = run_benchmark(&dictionary(), &RankingMode::default(), &config(8));
        let b = run_benchmark(&dictionary(), &RankingMode::default(), &config(8));
        assert_eq!(a.seed, 7);
        assert_eq!(a.distribution, b.distribution);
        assert_eq!(a.failed, b.failed);
    }

    #[test]
    fn forced_first_word() {
        let mut cfg = config(5);
        cfg.first_word = Some(Word::new("crane").unwrap());
        let result = run_benchmark(&dictionary(), &RankingMode::default(), &cfg);
        assert_eq!(result.first_word.map(|w| w.text().to_string()), Some("crane".to_string()));
        assert_eq!(result.total_words, 5);
    }

    #[test]
    fn count_larger_than_dictionary_uses_everything() {
        let small: CandidateSet = ["sheep", "speed", "spree"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let result = run_benchmark(&small, &RankingMode::default(), &config(50));
        assert_eq!(result.total_words, 3);
        assert_eq!(result.solved, 3);
    }

    #[test]
    fn empty_dictionary() {
        let result = run_benchmark(&CandidateSet::new(), &RankingMode::default(), &config(5));
        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert!(result.first_word.is_none());
    }
}
