//! Line-oriented command shell
//!
//! Reads commands such as `guess crane -+=--` and keeps a `Session` across
//! them. Output goes to any writer so the shell runs the same against a
//! terminal or an in-memory buffer.

use super::reverse::{DEFAULT_REVERSE_ROUNDS, reverse_solve};
use super::search::search_letter_count;
use super::solve::{SolveConfig, solve_word};
use crate::config::Settings;
use crate::core::{DEFAULT_WORD_LENGTH, GuessFeedback, Word};
use crate::output::{
    write_candidates, write_feedback, write_round_report, write_solve_result,
    write_starting_words, write_suggestions, write_word_list,
};
use crate::solver::{Ranker, RankingMode, Session};
use anyhow::{Context, Result, bail};
use colored::Colorize;
use std::collections::VecDeque;
use std::fs::{self, File};
use std::io::{BufRead, Write};

const PROMPT: &str = "(wordle) ";

/// Most candidates printed by the `candidates` command
const CANDIDATE_LIMIT: usize = 100;

const HELP: &str = "\
Commands:
  guess <word> <code>       apply feedback for a guess, e.g. guess crane -+=--
  evaluate <guess> <target> show the feedback a guess would get
  solve <guess> <target>    auto-play from a starting guess
  reversesolve <target>     starting words that solve the target quickly
  search <quantity> <letter> candidates with the letter exactly that many times
  top [n]                   show the best n suggestions
  mode [frequency|common]   show or switch the ranking mode
  candidates                list the remaining candidates
  undo                      drop the last guess
  reset                     start over with the full dictionary
  record <file>             save the following commands to a file
  playback <file>           run the commands in a file
  help                      show this message
  bye | quit                exit";

/// Whether the shell should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive command shell over a session
pub struct Shell<W: Write> {
    session: Session,
    settings: Settings,
    recording: Option<File>,
    pending: VecDeque<String>,
    out: W,
}

impl<W: Write> Shell<W> {
    #[must_use]
    pub const fn new(session: Session, settings: Settings, out: W) -> Self {
        Self {
            session,
            settings,
            recording: None,
            pending: VecDeque::new(),
            out,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn mode(&self) -> &RankingMode {
        &self.settings.mode
    }

    #[must_use]
    pub const fn is_recording(&self) -> bool {
        self.recording.is_some()
    }

    /// Lines queued by `playback` and not yet run
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn into_output(self) -> W {
        self.out
    }

    /// Read and run commands until `bye` or end of input
    ///
    /// Queued playback lines run before the next line is read from `input`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        writeln!(
            self.out,
            "{}\n{} words loaded, ranking by {}. Type help for commands.",
            "Wordle assistant".bright_cyan().bold(),
            self.session.dictionary().len(),
            self.settings.mode
        )?;

        let mut lines = input.lines();
        loop {
            let line = if let Some(queued) = self.pending.pop_front() {
                writeln!(self.out, "{PROMPT}{queued}")?;
                queued
            } else {
                write!(self.out, "{PROMPT}")?;
                self.out.flush()?;
                match lines.next() {
                    Some(line) => line.context("failed to read input")?,
                    None => break,
                }
            };

            if self.handle_line(&line)? == Flow::Quit {
                break;
            }
        }

        self.stop_recording();
        Ok(())
    }

    /// Run one input line
    ///
    /// The line is lowercased, recorded if a recording is active, and
    /// executed. Command failures are reported to the output, not returned.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to the output or recording file fails.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim().to_lowercase();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        let (command, args) = line
            .split_once(char::is_whitespace)
            .map_or((line.as_str(), ""), |(c, a)| (c, a.trim()));

        if command != "playback"
            && let Some(file) = self.recording.as_mut()
        {
            writeln!(file, "{line}").context("failed to write recording")?;
        }

        match self.execute(command, args) {
            Ok(flow) => Ok(flow),
            Err(e) => {
                log::debug!("command '{line}' failed: {e:#}");
                writeln!(self.out, "{} {e:#}", "error:".red().bold())?;
                Ok(Flow::Continue)
            }
        }
    }

    fn execute(&mut self, command: &str, args: &str) -> Result<Flow> {
        match command {
            "guess" => self.guess(args)?,
            "evaluate" => self.evaluate(args)?,
            "solve" => self.solve(args)?,
            "reversesolve" => self.reverse_solve(args)?,
            "search" => self.search(args)?,
            "top" => self.top(args)?,
            "mode" => self.switch_mode(args)?,
            "candidates" => {
                write_candidates(&mut self.out, self.session.candidates(), CANDIDATE_LIMIT)?;
            }
            "undo" => match self.session.undo() {
                Some(removed) => writeln!(
                    self.out,
                    "Undid {}. {} candidates.",
                    removed.word(),
                    self.session.candidates().len()
                )?,
                None => writeln!(self.out, "Nothing to undo.")?,
            },
            "reset" => {
                self.session.reset();
                writeln!(
                    self.out,
                    "Game was reset, using {} words.",
                    self.session.dictionary().len()
                )?;
            }
            "record" => self.record(args)?,
            "playback" => self.playback(args)?,
            "help" | "?" => writeln!(self.out, "{HELP}")?,
            "bye" | "quit" | "exit" => {
                self.stop_recording();
                writeln!(self.out, "Thank you.")?;
                return Ok(Flow::Quit);
            }
            other => bail!("unknown command '{other}' (type help for commands)"),
        }
        Ok(Flow::Continue)
    }

    fn word_length(&self) -> usize {
        self.session
            .dictionary()
            .word_length()
            .unwrap_or(DEFAULT_WORD_LENGTH)
    }

    /// Parse a word argument and require it to be in the dictionary
    fn dictionary_word(&self, text: &str) -> Result<Word> {
        let word = Word::with_length(text, self.word_length())
            .with_context(|| format!("invalid word '{text}'"))?;
        self.session.validate_guess(&word)?;
        Ok(word)
    }

    fn two_words(&self, args: &str, usage: &str) -> Result<(Word, Word)> {
        let mut parts = args.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(a), Some(b), None) => Ok((self.dictionary_word(a)?, self.dictionary_word(b)?)),
            _ => bail!("usage: {usage}"),
        }
    }

    fn guess(&mut self, args: &str) -> Result<()> {
        let feedback = GuessFeedback::parse(args, &self.settings.symbols, self.word_length())?;
        self.session.validate_guess(feedback.word())?;

        write_feedback(&mut self.out, &feedback, &self.settings.symbols)?;
        let report = self.session.apply(feedback);
        write_round_report(&mut self.out, &report)?;

        if report.after > 1 {
            let suggestions = self.session.suggest(&self.settings.mode, self.settings.top_n);
            write_suggestions(&mut self.out, &suggestions, report.after)?;
        }
        Ok(())
    }

    fn evaluate(&mut self, args: &str) -> Result<()> {
        let (guess, target) = self.two_words(args, "evaluate <guess> <target>")?;
        let feedback = GuessFeedback::evaluate(&guess, &target);
        write_feedback(&mut self.out, &feedback, &self.settings.symbols)?;
        Ok(())
    }

    fn solve(&mut self, args: &str) -> Result<()> {
        let (start, target) = self.two_words(args, "solve <guess> <target>")?;
        let mut config = SolveConfig::new(start, target);
        config.max_rounds = self.settings.max_rounds;

        let result = solve_word(&config, self.session.dictionary(), &self.settings.mode)?;
        write_solve_result(&mut self.out, &result, &self.settings.symbols, true)?;
        Ok(())
    }

    fn reverse_solve(&mut self, args: &str) -> Result<()> {
        let target = self.dictionary_word(args)?;
        let found = reverse_solve(
            &target,
            self.session.dictionary(),
            &self.settings.mode,
            DEFAULT_REVERSE_ROUNDS,
            false,
        )?;
        write_starting_words(&mut self.out, &target, &found)?;
        Ok(())
    }

    fn search(&mut self, args: &str) -> Result<()> {
        let mut parts = args.split_whitespace();
        let (Some(quantity), Some(letter), None) = (parts.next(), parts.next(), parts.next())
        else {
            bail!("usage: search <quantity> <letter>");
        };
        let quantity: usize = quantity
            .parse()
            .with_context(|| format!("invalid quantity '{quantity}'"))?;
        let mut chars = letter.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            bail!("expected a single letter, got '{letter}'");
        };

        let found = search_letter_count(self.session.candidates(), letter, quantity);
        writeln!(
            self.out,
            "{} candidates with '{letter}' exactly {quantity} time(s):",
            found.len()
        )?;
        write_word_list(&mut self.out, &found)?;
        Ok(())
    }

    fn top(&mut self, args: &str) -> Result<()> {
        let top_n = if args.is_empty() {
            self.settings.top_n
        } else {
            args.parse()
                .with_context(|| format!("invalid count '{args}'"))?
        };
        let suggestions = self.settings.mode.suggest(self.session.candidates(), top_n);
        write_suggestions(&mut self.out, &suggestions, self.session.candidates().len())?;
        Ok(())
    }

    fn switch_mode(&mut self, args: &str) -> Result<()> {
        if !args.is_empty() {
            self.settings.mode = RankingMode::from_name(
                args,
                self.settings.weights,
                self.settings.common_words.clone(),
            )?;
            log::info!("ranking mode set to {}", self.settings.mode);
        }
        writeln!(self.out, "Ranking mode: {}", self.settings.mode)?;
        Ok(())
    }

    fn record(&mut self, args: &str) -> Result<()> {
        if args.is_empty() {
            bail!("usage: record <file>");
        }
        self.stop_recording();
        let file = File::create(args).with_context(|| format!("failed to create {args}"))?;
        self.recording = Some(file);
        writeln!(self.out, "Recording commands to {args}.")?;
        Ok(())
    }

    fn playback(&mut self, args: &str) -> Result<()> {
        if args.is_empty() {
            bail!("usage: playback <file>");
        }
        self.stop_recording();
        let content = fs::read_to_string(args).with_context(|| format!("failed to read {args}"))?;
        let before = self.pending.len();
        self.pending.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
        );
        log::info!("queued {} lines from {args}", self.pending.len() - before);
        Ok(())
    }

    fn stop_recording(&mut self) {
        if let Some(mut file) = self.recording.take()
            && let Err(e) = file.flush()
        {
            log::warn!("failed to flush recording: {e}");
        }
    }
}
