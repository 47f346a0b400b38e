//! Formatting utilities for terminal output

use crate::core::{GuessFeedback, LetterOutcome};
use colored::{ColoredString, Colorize};

/// Emoji square for an outcome
#[must_use]
pub const fn outcome_emoji(outcome: LetterOutcome) -> char {
    match outcome {
        LetterOutcome::Absent => '⬜',
        LetterOutcome::Present => '🟨',
        LetterOutcome::Correct => '🟩',
    }
}

/// Format feedback as an emoji row
#[must_use]
pub fn feedback_to_emoji(feedback: &GuessFeedback) -> String {
    feedback.outcomes().iter().map(|&o| outcome_emoji(o)).collect()
}

/// One letter as a coloured tile
#[must_use]
pub fn letter_tile(letter: u8, outcome: LetterOutcome) -> ColoredString {
    let text = format!(" {} ", char::from(letter).to_ascii_uppercase());
    match outcome {
        LetterOutcome::Absent => text.white().on_bright_black().bold(),
        LetterOutcome::Present => text.black().on_yellow().bold(),
        LetterOutcome::Correct => text.black().on_green().bold(),
    }
}

/// Format feedback as a row of coloured letter tiles
#[must_use]
pub fn feedback_tiles(feedback: &GuessFeedback) -> String {
    feedback
        .iter()
        .map(|lf| letter_tile(lf.letter, lf.outcome).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Clamped to [0, width]
        ((value / max) * width as f64).clamp(0.0, width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn feedback(guess: &str, target: &str) -> GuessFeedback {
        GuessFeedback::evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn emoji_all_absent() {
        assert_eq!(feedback_to_emoji(&feedback("fuzzy", "sheep")), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_all_correct() {
        assert_eq!(feedback_to_emoji(&feedback("sheep", "sheep")), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_mixed() {
        assert_eq!(feedback_to_emoji(&feedback("spree", "sheep")), "🟩🟨⬜🟩🟨");
    }

    #[test]
    fn tiles_contain_uppercase_letters() {
        let tiles = feedback_tiles(&feedback("crane", "slate"));
        for letter in ["C", "R", "A", "N", "E"] {
            assert!(tiles.contains(letter));
        }
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
