//! TUI rendering with ratatui
//!
//! Board, stopwatch and message panels for the Quickle game.

use super::app::{App, MessageStyle};
use crate::game::{GameStatus, Tile, TileStatus, Variant};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};
use std::time::{Instant, SystemTime};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant, wall_clock: SystemTime) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),   // Board and side panel
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, now, wall_clock, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("⚡ Q U I C K L E")
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

/// Colours for one tile
pub fn tile_style(status: TileStatus) -> Style {
    match status {
        TileStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        TileStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        TileStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        TileStatus::Typing => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        TileStatus::Hidden => Style::default().fg(Color::White).bg(Color::Blue),
        TileStatus::Empty => Style::default().fg(Color::DarkGray),
    }
}

fn tile_span(tile: Tile) -> Span<'static> {
    let text = match tile.letter {
        Some(letter) => format!(" {letter} "),
        None => " · ".to_string(),
    };
    Span::styled(text, tile_style(tile.status))
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from("")];
    for row in app.session.board() {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for tile in row {
            spans.push(tile_span(tile));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, now: Instant, wall_clock: SystemTime, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Stopwatch
            Constraint::Min(6),    // Result or score
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_timer(f, app, now, chunks[0]);
    render_result(f, app, wall_clock, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_timer(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let limit = app.session.variant().time_limit().as_secs();
    let (percent, label, color) = match app.session.timer_reading(now) {
        Some(elapsed) => {
            let secs = elapsed.as_secs();
            let color = if secs * 4 > limit * 3 {
                Color::Red
            } else if secs * 2 > limit {
                Color::Yellow
            } else {
                Color::Green
            };
            let percent = u16::try_from(secs * 100 / limit.max(1)).unwrap_or(100);
            (percent, format!("{secs:02}s / {limit}s"), color)
        }
        None => (0, "clock starts on the last guess".to_string(), Color::DarkGray),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Last Guess ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(label);
    f.render_widget(gauge, area);
}

fn render_result(f: &mut Frame, app: &App, wall_clock: SystemTime, area: Rect) {
    let session = &app.session;
    let mut lines = vec![Line::from(vec![
        Span::raw("Score: "),
        Span::styled(
            format!("{:+}", session.score()),
            Style::default()
                .fg(if session.score() < 0 {
                    Color::Red
                } else {
                    Color::Yellow
                })
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    match session.status() {
        GameStatus::Playing => {
            lines.push(Line::from(format!(
                "Guess {} of {}",
                session.attempts_used() + 1,
                crate::game::MAX_ATTEMPTS
            )));
        }
        GameStatus::Won { .. } | GameStatus::Lost => {
            lines.push(Line::from(""));
            lines.extend(session.share_grid().lines().map(|line| Line::from(line.to_string())));
            if let Some(countdown) = app.countdown(wall_clock) {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    countdown,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Result ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mode_text = match (app.allows_new_game(), app.session.variant()) {
        (true, Variant::Classic) => "Mode: Practice",
        (true, Variant::Blind) => "Mode: Practice (blind)",
        (false, Variant::Classic) => "Mode: Daily",
        (false, Variant::Blind) => "Mode: Daily (blind)",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        app.stats.played,
        app.stats.win_percentage(),
        app.stats.current_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if !app.session.is_finished() {
        "Esc: Quit | Enter: Submit | Backspace: Delete"
    } else if app.allows_new_game() {
        "q: Quit | n: New Game"
    } else {
        "q: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
