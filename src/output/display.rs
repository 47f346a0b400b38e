//! Display functions for command results
//!
//! Every function writes to the given writer so the shell can be driven
//! against an in-memory buffer.

use super::formatters::{create_progress_bar, feedback_tiles, feedback_to_emoji};
use crate::commands::{BenchmarkResult, SolveResult, StartingWord};
use crate::core::{CandidateSet, GuessFeedback, SymbolTable, Word};
use crate::solver::{RoundReport, RoundStatus, Suggestions};
use colored::Colorize;
use std::io::{self, Write};

/// Words listed per line by `write_word_list`
const WORDS_PER_LINE: usize = 10;

/// Print feedback as tiles, emoji and code
///
/// # Errors
/// Returns any error from the writer.
pub fn write_feedback<W: Write + ?Sized>(
    out: &mut W,
    feedback: &GuessFeedback,
    symbols: &SymbolTable,
) -> io::Result<()> {
    writeln!(
        out,
        "{}  {}  {}",
        feedback_tiles(feedback),
        feedback_to_emoji(feedback),
        feedback.encode(symbols).bright_black()
    )
}

/// Print a word list, several words per line
///
/// # Errors
/// Returns any error from the writer.
pub fn write_word_list<'a, W, I>(out: &mut W, words: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a Word>,
{
    let words: Vec<&Word> = words.into_iter().collect();
    for chunk in words.chunks(WORDS_PER_LINE) {
        let line: Vec<&str> = chunk.iter().map(|w| w.text()).collect();
        writeln!(out, "  {}", line.join(" "))?;
    }
    Ok(())
}

/// Print ranked suggestions
///
/// # Errors
/// Returns any error from the writer.
pub fn write_suggestions<W: Write + ?Sized>(
    out: &mut W,
    suggestions: &Suggestions,
    candidate_count: usize,
) -> io::Result<()> {
    if suggestions.is_empty() {
        return writeln!(out, "{}", "No suggestions: no candidates remain.".red());
    }

    writeln!(
        out,
        "{}",
        format!("Top {} of {candidate_count} candidates:", suggestions.len())
            .bright_cyan()
            .bold()
    )?;

    match suggestions {
        Suggestions::Scored(ranked) => {
            let best = ranked.first().map_or(0.0, |r| r.score);
            for (i, r) in ranked.iter().enumerate() {
                writeln!(
                    out,
                    "  {:>3}. {}  {:>7.3} {}",
                    i + 1,
                    r.word.text().to_uppercase().bright_yellow(),
                    r.score,
                    create_progress_bar(r.score, best, 20).green()
                )?;
            }
        }
        Suggestions::Common(words) => {
            for (i, word) in words.iter().enumerate() {
                writeln!(
                    out,
                    "  {:>3}. {}",
                    i + 1,
                    word.text().to_uppercase().bright_yellow()
                )?;
            }
        }
    }
    Ok(())
}

/// Print the outcome of one applied round
///
/// # Errors
/// Returns any error from the writer.
pub fn write_round_report<W: Write + ?Sized>(out: &mut W, report: &RoundReport) -> io::Result<()> {
    writeln!(out, "Candidates: {} → {}", report.before, report.after)?;
    match &report.status {
        RoundStatus::Solved(word) => writeln!(
            out,
            "{}",
            format!("✅ Solved: {}", word.text().to_uppercase())
                .green()
                .bold()
        ),
        RoundStatus::Contradiction => writeln!(
            out,
            "{}",
            "❌ No candidates remain. Check the feedback, then undo or reset."
                .red()
                .bold()
        ),
        RoundStatus::Open(_) => Ok(()),
    }
}

/// Print the result of solving a word
///
/// # Errors
/// Returns any error from the writer.
pub fn write_solve_result<W: Write + ?Sized>(
    out: &mut W,
    result: &SolveResult,
    symbols: &SymbolTable,
    verbose: bool,
) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    for (i, step) in result.steps.iter().enumerate() {
        write!(out, "Turn {}: ", i + 1)?;
        write_feedback(out, &step.feedback, symbols)?;

        if verbose {
            writeln!(
                out,
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            )?;
        }
    }

    writeln!(out)?;
    if result.success {
        writeln!(
            out,
            "{}",
            format!("✅ Solved in {} guesses!", result.rounds())
                .green()
                .bold()
        )
    } else {
        writeln!(
            out,
            "{}",
            format!("❌ Failed to solve in {} guesses", result.rounds())
                .red()
                .bold()
        )
    }
}

/// Print reverse-solve starting words grouped by rounds
///
/// # Errors
/// Returns any error from the writer.
pub fn write_starting_words<W: Write + ?Sized>(
    out: &mut W,
    target: &Word,
    found: &[StartingWord],
) -> io::Result<()> {
    if found.is_empty() {
        return writeln!(
            out,
            "No starting word solves {} in time.",
            target.text().to_uppercase()
        );
    }

    writeln!(
        out,
        "{}",
        format!(
            "{} starting words solve {}:",
            found.len(),
            target.text().to_uppercase()
        )
        .bright_cyan()
        .bold()
    )?;

    for group in found.chunk_by(|a, b| a.rounds == b.rounds) {
        writeln!(out, " {} round(s):", group[0].rounds)?;
        write_word_list(out, group.iter().map(|s| &s.word))?;
    }
    Ok(())
}

/// Print candidates, truncated to `limit` words
///
/// # Errors
/// Returns any error from the writer.
pub fn write_candidates<W: Write + ?Sized>(
    out: &mut W,
    candidates: &CandidateSet,
    limit: usize,
) -> io::Result<()> {
    writeln!(out, "{} candidates:", candidates.len())?;
    write_word_list(out, candidates.iter().take(limit))?;
    if candidates.len() > limit {
        writeln!(out, "  … and {} more", candidates.len() - limit)?;
    }
    Ok(())
}

/// Print the result of a benchmark
///
/// # Errors
/// Returns any error from the writer.
pub fn write_benchmark_result<W: Write + ?Sized>(
    out: &mut W,
    result: &BenchmarkResult,
) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "BENCHMARK RESULTS".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    writeln!(out, "\n📊 {}", "Performance:".bright_cyan().bold())?;
    if let Some(first) = &result.first_word {
        writeln!(out, "   First guess:      {}", first.text().to_uppercase())?;
    }
    writeln!(out, "   Seed:             {}", result.seed)?;
    writeln!(out, "   Words tested:     {}", result.total_words)?;
    writeln!(
        out,
        "   Solved:           {}",
        format!("{}", result.solved).green()
    )?;
    writeln!(
        out,
        "   Failed:           {}",
        format!("{}", result.failed.len()).red()
    )?;
    writeln!(
        out,
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    )?;
    writeln!(
        out,
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    )?;
    writeln!(
        out,
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    )?;
    writeln!(
        out,
        "   Time taken:       {:.2}s",
        result.duration.as_secs_f64()
    )?;

    writeln!(out, "\n📈 {}", "Distribution:".bright_cyan().bold())?;
    for (&rounds, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words.max(1) as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        writeln!(out, "   {rounds}: {} {count:4} ({pct:5.1}%)", bar.green())?;
    }

    if !result.failed.is_empty() {
        writeln!(out, "\n{}", "Unsolved:".red().bold())?;
        write_word_list(out, &result.failed)?;
    }
    Ok(())
}
