//! TUI application state and logic

use crate::config::Settings;
use crate::core::{DEFAULT_WORD_LENGTH, GuessFeedback};
use crate::solver::{RankingMode, RoundStatus, Session, Suggestions};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: Session,
    pub settings: Settings,
    pub suggestions: Suggestions,
    pub history: Vec<HistoryEntry>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    Solved,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub feedback: GuessFeedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_solved: usize,
    /// Rounds needed per solved game, index 1..=6, 7+ in the last slot
    pub guess_distribution: [usize; 8],
}

impl Statistics {
    fn record_solve(&mut self, rounds: usize) {
        self.total_games += 1;
        self.games_solved += 1;
        self.guess_distribution[rounds.min(7)] += 1;
    }

    /// Take back a solve that was undone
    fn unrecord_solve(&mut self, rounds: usize) {
        self.total_games = self.total_games.saturating_sub(1);
        self.games_solved = self.games_solved.saturating_sub(1);
        let slot = &mut self.guess_distribution[rounds.min(7)];
        *slot = slot.saturating_sub(1);
    }
}

impl App {
    #[must_use]
    pub fn new(session: Session, settings: Settings) -> Self {
        let mut app = Self {
            session,
            settings,
            suggestions: Suggestions::Scored(Vec::new()),
            history: Vec::new(),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
        };
        app.add_message(
            &format!(
                "Welcome! Type '<word> <code>' using {} (absent, present, correct).",
                app.settings.symbols
            ),
            MessageStyle::Info,
        );
        app.compute_suggestions();
        app
    }

    pub fn compute_suggestions(&mut self) {
        self.suggestions = self
            .session
            .suggest(&self.settings.mode, self.settings.top_n);
    }

    /// Parse and apply a `<word> <code>` line
    pub fn handle_feedback(&mut self, input: &str) {
        let word_length = self
            .session
            .dictionary()
            .word_length()
            .unwrap_or(DEFAULT_WORD_LENGTH);

        let feedback = match GuessFeedback::parse(input, &self.settings.symbols, word_length) {
            Ok(feedback) => feedback,
            Err(e) => {
                self.add_message(&format!("Invalid input: {e}"), MessageStyle::Error);
                return;
            }
        };
        if let Err(e) = self.session.validate_guess(feedback.word()) {
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }

        let report = self.session.apply(feedback.clone());
        self.history.push(HistoryEntry {
            feedback,
            candidates_before: report.before,
            candidates_after: report.after,
        });
        self.input_buffer.clear();
        self.compute_suggestions();

        match report.status {
            RoundStatus::Solved(word) => {
                let rounds = self.history.len();
                self.stats.record_solve(rounds);
                self.input_mode = InputMode::Solved;
                self.add_message(
                    &format!("🎉 The answer is {} ({rounds} guesses)", word.text().to_uppercase()),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            RoundStatus::Contradiction => {
                self.add_message(
                    "No candidates remain - feedback may be wrong. Ctrl-U to undo.",
                    MessageStyle::Error,
                );
            }
            RoundStatus::Open(count) => {
                self.add_message(&format!("{count} candidates remaining"), MessageStyle::Info);
            }
        }
    }

    pub fn new_game(&mut self) {
        if self.input_mode != InputMode::Solved && !self.history.is_empty() {
            self.stats.total_games += 1;
        }
        self.session.reset();
        self.history.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message("New game started!", MessageStyle::Info);
        self.compute_suggestions();
    }

    pub fn undo_last(&mut self) {
        if self.session.undo().is_some() {
            if self.input_mode == InputMode::Solved {
                self.stats.unrecord_solve(self.history.len());
            }
            self.history.pop();
            self.input_mode = InputMode::Feedback;
            self.compute_suggestions();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    /// Switch between frequency and common-word ranking
    pub fn toggle_mode(&mut self) {
        let next = match self.settings.mode {
            RankingMode::Frequency(_) => "common",
            RankingMode::Common(_) => "frequency",
        };
        match RankingMode::from_name(
            next,
            self.settings.weights,
            self.settings.common_words.clone(),
        ) {
            Ok(mode) => {
                self.settings.mode = mode;
                self.compute_suggestions();
                self.add_message(
                    &format!("Ranking by {}", self.settings.mode),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.session.candidates().len()
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match (key.code, ctrl) {
            (KeyCode::Char('c'), true) | (KeyCode::Esc, _) => self.should_quit = true,
            (KeyCode::Char('u'), true) => self.undo_last(),
            (KeyCode::Char('n'), true) => self.new_game(),
            (KeyCode::Tab, _) => self.toggle_mode(),
            _ => match self.input_mode {
                InputMode::Solved => match key.code {
                    KeyCode::Char('q') => self.should_quit = true,
                    KeyCode::Char('n') => self.new_game(),
                    _ => {}
                },
                InputMode::Feedback => match key.code {
                    KeyCode::Char(c) => self.input_buffer.push(c),
                    KeyCode::Backspace => {
                        self.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        let input = self.input_buffer.clone();
                        self.handle_feedback(&input);
                    }
                    _ => {}
                },
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("terminal UI failed: {err:#}");
        return Err(err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only key presses (Windows also reports releases)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
