//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::LetterOutcome;
use crate::output::formatters::feedback_to_emoji;
use crate::solver::Suggestions;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Candidates listed by name when at most this many remain
const CANDIDATE_LIST_LIMIT: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE ASSISTANT")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_suggestions(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(" Suggestions ({}) ", app.settings.mode);

    let lines: Vec<Line> = match &app.suggestions {
        s if s.is_empty() => vec![Line::from("No suggestion available")],
        Suggestions::Scored(ranked) => ranked
            .iter()
            .enumerate()
            .map(|(i, r)| {
                Line::from(vec![
                    Span::raw(format!("{:>3}. ", i + 1)),
                    Span::styled(
                        r.word.text().to_uppercase(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  {:.3}", r.score), Style::default().fg(Color::Cyan)),
                ])
            })
            .collect(),
        Suggestions::Common(words) => words
            .iter()
            .enumerate()
            .map(|(i, w)| {
                Line::from(vec![
                    Span::raw(format!("{:>3}. ", i + 1)),
                    Span::styled(
                        w.text().to_uppercase(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect(),
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn outcome_color(outcome: LetterOutcome) -> Color {
    match outcome {
        LetterOutcome::Absent => Color::DarkGray,
        LetterOutcome::Present => Color::Yellow,
        LetterOutcome::Correct => Color::Green,
    }
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, entry)| {
            let mut spans = vec![Span::raw(format!("{}: ", i + 1))];
            spans.extend(entry.feedback.iter().map(|lf| {
                Span::styled(
                    format!(" {} ", char::from(lf.letter).to_ascii_uppercase()),
                    Style::default()
                        .fg(Color::Black)
                        .bg(outcome_color(lf.outcome))
                        .add_modifier(Modifier::BOLD),
                )
            }));
            spans.push(Span::raw(format!(
                " {} {} → {}",
                feedback_to_emoji(&entry.feedback),
                entry.candidates_before,
                entry.candidates_after
            )));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history = List::new(items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Search space gauge
            Constraint::Percentage(50), // Candidates
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.dictionary().len().max(1);
    let remaining = app.candidates_count();
    let eliminated = total.saturating_sub(remaining);
    let progress_pct = (eliminated * 100 / total).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Search Space ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{remaining}/{total} candidates remain"));

    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let count = app.candidates_count();
    let content: Vec<Line> = if count == 0 {
        vec![Line::from(Span::styled(
            "No candidates match the feedback",
            Style::default().fg(Color::Red),
        ))]
    } else if count <= CANDIDATE_LIST_LIMIT {
        app.session
            .candidates()
            .iter()
            .map(|w| Line::from(format!("  {}", w.text().to_uppercase())))
            .collect()
    } else {
        vec![Line::from(format!("{count} candidates remaining"))]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Solved => (
            " Solved! | n: new game  q: quit ".to_string(),
            "",
            Color::Green,
        ),
        InputMode::Feedback => (
            format!(" Enter '<word> <code>' with symbols {} ", app.settings.symbols),
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let solved_pct = if app.stats.total_games > 0 {
        app.stats.games_solved as f64 / app.stats.total_games as f64 * 100.0
    } else {
        0.0
    };
    let text = format!(
        "Games: {} | Solved: {solved_pct:.0}% | Enter: submit  Ctrl-U: undo  Ctrl-N: new  Tab: mode  Esc: quit",
        app.stats.total_games
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
