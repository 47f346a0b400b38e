//! Wordle Assistant - CLI
//!
//! Command shell, terminal UI and one-shot commands for narrowing Wordle
//! candidates from feedback.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use wordle_assistant::{
    commands::{
        BenchmarkConfig, DEFAULT_REVERSE_ROUNDS, Shell, SolveConfig, reverse_solve, run_benchmark,
        search_letter_count, solve_word,
    },
    config::{Config, Settings},
    core::{CandidateSet, GuessFeedback, SymbolTable, Word},
    error::InvalidWordError,
    output::{
        write_benchmark_result, write_candidates, write_feedback, write_round_report,
        write_solve_result, write_starting_words, write_suggestions, write_word_list,
    },
    solver::{Ranker, Session},
    wordlists::{
        COMMON_WORDS, DICTIONARY,
        loader::{dictionary_from_slice, load_common_words, load_dictionary, words_from_slice},
    },
};

/// Most candidates printed by `suggest`
const CANDIDATE_LIMIT: usize = 50;

#[derive(Parser)]
#[command(
    name = "wordle_assistant",
    about = "Narrow Wordle candidates from feedback and rank the next guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: wordle_assistant.toml in the current directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Dictionary file, one word per line (default: embedded list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Common-word file, most common first (default: embedded list)
    #[arg(long, global = true)]
    common_words: Option<PathBuf>,

    /// Feedback symbols: 'arithmetic' (-+=), 'colors' (byg) or three characters
    #[arg(short, long, global = true)]
    symbols: Option<String>,

    /// Ranking mode: frequency or common
    #[arg(short, long, global = true)]
    mode: Option<String>,

    /// Number of suggestions to show
    #[arg(short, long, global = true)]
    top: Option<usize>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive command shell (default)
    Shell,

    /// Interactive terminal UI
    Play,

    /// Apply feedback rounds and print the remaining candidates and suggestions
    Suggest {
        /// Feedback rounds such as "crane -+=--", in order
        rounds: Vec<String>,
    },

    /// Show the feedback a guess gets against a target
    Evaluate { guess: String, target: String },

    /// Auto-play from a starting guess towards a known target
    Solve {
        guess: String,
        target: String,

        /// Maximum rounds (default from config)
        #[arg(long)]
        max_rounds: Option<usize>,
    },

    /// List starting words that solve a target quickly
    ReverseSolve {
        target: String,

        /// Maximum rounds a starting word may need
        #[arg(long, default_value_t = DEFAULT_REVERSE_ROUNDS)]
        max_rounds: usize,
    },

    /// Dictionary words containing a letter exactly `quantity` times
    Search { quantity: usize, letter: char },

    /// Auto-play a random sample of targets and report statistics
    Benchmark {
        /// Number of random targets
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// First guess (default: top-ranked dictionary word)
        #[arg(short = 'f', long)]
        first_word: Option<String>,

        /// Sampling seed for a repeatable run
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Config file values with command-line overrides applied
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_file(path)?,
        None => Config::load(&std::env::current_dir().context("no current directory")?)?,
    };

    if let Some(path) = &cli.dictionary {
        config.dictionary = Some(path.clone());
    }
    if let Some(path) = &cli.common_words {
        config.common_words = Some(path.clone());
    }
    if let Some(symbols) = &cli.symbols {
        config.symbols = SymbolTable::from_name(symbols)
            .with_context(|| format!("invalid --symbols '{symbols}'"))?;
    }
    if let Some(mode) = &cli.mode {
        config.mode.clone_from(mode);
    }
    if let Some(top) = cli.top {
        config.top_n = top;
    }
    config.validate()?;
    Ok(config)
}

/// Load the dictionary and common-word list the config points at
fn load_word_lists(config: &Config) -> Result<(CandidateSet, Vec<Word>)> {
    let length = config.word_length;

    let dictionary = match &config.dictionary {
        Some(path) => load_dictionary(path, length)?,
        None => dictionary_from_slice(DICTIONARY, length),
    };
    if dictionary.is_empty() {
        bail!("the embedded dictionary has no {length}-letter words; pass --dictionary");
    }

    let common_words = match &config.common_words {
        Some(path) => load_common_words(path, length)?,
        None => words_from_slice(COMMON_WORDS, length),
    };

    log::info!(
        "{} dictionary words, {} common words",
        dictionary.len(),
        common_words.len()
    );
    Ok((dictionary, common_words))
}

fn parse_word(text: &str, config: &Config) -> Result<Word> {
    Word::with_length(text, config.word_length).with_context(|| format!("invalid word '{text}'"))
}

/// A word that must also be in the active dictionary
fn dictionary_word(text: &str, config: &Config, dictionary: &CandidateSet) -> Result<Word> {
    let word = parse_word(text, config)?;
    if !dictionary.contains(word.text()) {
        return Err(InvalidWordError {
            word: word.text().to_string(),
        }
        .into());
    }
    Ok(word)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let (dictionary, common_words) = load_word_lists(&config)?;
    let settings = config.settings(common_words)?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => run_shell_command(dictionary, settings),
        Commands::Play => run_play_command(dictionary, settings),
        Commands::Suggest { rounds } => run_suggest_command(&rounds, dictionary, &settings, &config),
        Commands::Evaluate { guess, target } => {
            let guess = dictionary_word(&guess, &config, &dictionary)?;
            let target = dictionary_word(&target, &config, &dictionary)?;
            let feedback = GuessFeedback::evaluate(&guess, &target);
            write_feedback(&mut io::stdout().lock(), &feedback, &settings.symbols)?;
            Ok(())
        }
        Commands::Solve {
            guess,
            target,
            max_rounds,
        } => {
            let mut solve = SolveConfig::new(parse_word(&guess, &config)?, parse_word(&target, &config)?);
            solve.max_rounds = max_rounds.unwrap_or(settings.max_rounds);
            let result = solve_word(&solve, &dictionary, &settings.mode)?;
            write_solve_result(&mut io::stdout().lock(), &result, &settings.symbols, true)?;
            Ok(())
        }
        Commands::ReverseSolve { target, max_rounds } => {
            let target = parse_word(&target, &config)?;
            let found = reverse_solve(&target, &dictionary, &settings.mode, max_rounds, true)?;
            write_starting_words(&mut io::stdout().lock(), &target, &found)?;
            Ok(())
        }
        Commands::Search { quantity, letter } => {
            let found = search_letter_count(&dictionary, letter, quantity);
            let mut out = io::stdout().lock();
            writeln!(out, "{} words with '{letter}' exactly {quantity} time(s):", found.len())?;
            write_word_list(&mut out, &found)?;
            Ok(())
        }
        Commands::Benchmark {
            count,
            first_word,
            seed,
        } => {
            let first_word = first_word
                .map(|text| parse_word(&text, &config))
                .transpose()?;
            let benchmark = BenchmarkConfig {
                count,
                first_word,
                max_rounds: settings.max_rounds,
                seed,
                show_progress: true,
            };
            println!("Running benchmark on {count} random words...");
            let result = run_benchmark(&dictionary, &settings.mode, &benchmark);
            write_benchmark_result(&mut io::stdout().lock(), &result)?;
            Ok(())
        }
    }
}

fn run_shell_command(dictionary: CandidateSet, settings: Settings) -> Result<()> {
    let mut shell = Shell::new(Session::new(dictionary), settings, io::stdout());
    shell.run(io::stdin().lock())
}

fn run_play_command(dictionary: CandidateSet, settings: Settings) -> Result<()> {
    use wordle_assistant::interactive::{App, run_tui};

    let app = App::new(Session::new(dictionary), settings);
    run_tui(app)
}

fn run_suggest_command(
    rounds: &[String],
    dictionary: CandidateSet,
    settings: &Settings,
    config: &Config,
) -> Result<()> {
    let mut session = Session::new(dictionary);
    let mut out = io::stdout().lock();

    for round in rounds {
        let feedback = GuessFeedback::parse(round, &settings.symbols, config.word_length)
            .with_context(|| format!("invalid feedback '{round}'"))?;
        session.validate_guess(feedback.word())?;
        write_feedback(&mut out, &feedback, &settings.symbols)?;
        let report = session.apply(feedback);
        write_round_report(&mut out, &report)?;
    }

    write_candidates(&mut out, session.candidates(), CANDIDATE_LIMIT)?;
    let suggestions = settings.mode.suggest(session.candidates(), settings.top_n);
    write_suggestions(&mut out, &suggestions, session.candidates().len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> CandidateSet {
        ["crane", "slate"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect()
    }

    #[test]
    fn dictionary_word_accepts_known_words() {
        let word = dictionary_word("CRANE", &Config::default(), &dictionary()).unwrap();
        assert_eq!(word.text(), "crane");
    }

    #[test]
    fn dictionary_word_rejects_unknown_words() {
        let err = dictionary_word("zzzzz", &Config::default(), &dictionary()).unwrap_err();
        assert!(err.downcast_ref::<InvalidWordError>().is_some());
        assert!(dictionary_word("cran", &Config::default(), &dictionary()).is_err());
    }
}
