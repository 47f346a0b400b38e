//! Reverse solve: which starting words reach a known target quickly

use super::solve::{SolveConfig, solve_word};
use crate::core::{CandidateSet, Word};
use crate::error::InvalidWordError;
use crate::solver::Ranker;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// Default round limit for reverse solving
pub const DEFAULT_REVERSE_ROUNDS: usize = 2;

/// A starting word and the rounds it needed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartingWord {
    pub word: Word,
    pub rounds: usize,
}

/// Every dictionary word whose auto-play solves `target` within `max_rounds`
///
/// Results are sorted by rounds, then alphabetically. With `show_progress`,
/// a progress bar is drawn on stderr.
///
/// # Errors
///
/// Returns `InvalidWordError` if the target is not in the dictionary.
pub fn reverse_solve<R: Ranker + Sync + ?Sized>(
    target: &Word,
    dictionary: &CandidateSet,
    ranker: &R,
    max_rounds: usize,
    show_progress: bool,
) -> Result<Vec<StartingWord>, InvalidWordError> {
    if !dictionary.contains(target.text()) {
        return Err(InvalidWordError {
            word: target.text().to_string(),
        });
    }

    let progress = if show_progress {
        let pb = ProgressBar::new(dictionary.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb.set_message(format!("reverse solving {target}"));
        pb
    } else {
        ProgressBar::hidden()
    };

    let starts: Vec<&Word> = dictionary.iter().collect();
    let mut found: Vec<StartingWord> = starts
        .par_iter()
        .filter_map(|&start| {
            let mut config = SolveConfig::new(start.clone(), target.clone());
            config.max_rounds = max_rounds;
            let result = solve_word(&config, dictionary, ranker).ok();
            progress.inc(1);
            result
                .filter(|r| r.success)
                .map(|r| StartingWord {
                    word: start.clone(),
                    rounds: r.rounds(),
                })
        })
        .collect();

    progress.finish_and_clear();
    found.sort_by(|a, b| a.rounds.cmp(&b.rounds).then_with(|| a.word.cmp(&b.word)));
    log::info!(
        "{} of {} starting words solve {target} within {max_rounds} rounds",
        found.len(),
        dictionary.len()
    );
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::RankingMode;

    fn set(words: &[&str]) -> CandidateSet {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn target_itself_is_one_round() {
        let dictionary = set(&["sheep", "speed", "spree", "crane"]);
        let target = Word::new("sheep").unwrap();
        let found = reverse_solve(&target, &dictionary, &RankingMode::default(), 2, false).unwrap();

        assert_eq!(found[0].word.text(), "sheep");
        assert_eq!(found[0].rounds, 1);
        assert!(found.iter().all(|s| s.rounds <= 2));
    }

    #[test]
    fn results_sorted_by_rounds_then_word() {
        let dictionary = set(&["sheep", "speed", "spree", "crane", "slate", "those"]);
        let target = Word::new("spree").unwrap();
        let found = reverse_solve(&target, &dictionary, &RankingMode::default(), 3, false).unwrap();
        assert!(found.windows(2).all(|w| {
            (w[0].rounds, &w[0].word) <= (w[1].rounds, &w[1].word)
        }));
    }

    #[test]
    fn single_round_limit_only_finds_target() {
        let dictionary = set(&["sheep", "speed", "spree"]);
        let target = Word::new("speed").unwrap();
        let found = reverse_solve(&target, &dictionary, &RankingMode::default(), 1, false).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].word.text(), "speed");
    }

    #[test]
    fn unknown_target_rejected() {
        let dictionary = set(&["sheep"]);
        let target = Word::new("zzzzz").unwrap();
        assert!(reverse_solve(&target, &dictionary, &RankingMode::default(), 2, false).is_err());
    }
}
