//! TUI application state and logic

use crate::commands::{GameSetup, countdown_message};
use crate::game::{GameError, GameSession, GameStatus, MAX_ATTEMPTS, Statistics, Variant};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant, SystemTime};

/// Redraw interval while waiting for keys, so the stopwatch keeps moving
const TICK_RATE: Duration = Duration::from_millis(200);

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    setup: &'a GameSetup,
    pub session: GameSession<'a>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    recorded: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Start the first game
    ///
    /// # Errors
    /// Returns [`GameError::NoTargetWords`] if no target can be chosen.
    pub fn new(setup: &'a GameSetup) -> Result<Self, GameError> {
        let mut app = Self {
            setup,
            session: setup.new_session()?,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            recorded: false,
        };
        let intro = match setup.variant() {
            Variant::Classic => format!("Guess the word in {MAX_ATTEMPTS} tries. Enter submits."),
            Variant::Blind => format!("Blind mode: colours appear after guess {MAX_ATTEMPTS}."),
        };
        app.add_message(&intro, MessageStyle::Info);
        Ok(app)
    }

    #[must_use]
    pub const fn allows_new_game(&self) -> bool {
        self.setup.allows_new_game()
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if self.session.is_finished() && self.allows_new_game() => {
                self.new_game();
            }
            KeyCode::Char('q') if self.session.is_finished() => self.should_quit = true,
            KeyCode::Char(c) => {
                self.session.push_letter(c);
            }
            KeyCode::Backspace => {
                self.session.pop_letter();
            }
            KeyCode::Enter => self.submit(now),
            _ => {}
        }
    }

    pub fn submit(&mut self, now: Instant) {
        match self.session.submit(now) {
            Ok(_) => {
                if let Err(err) = self.setup.record_progress(&self.session) {
                    tracing::warn!(error = %err, "failed to record daily progress");
                    self.add_message(&format!("{err:#}"), MessageStyle::Error);
                }
                if self.session.is_finished() {
                    self.finish_game();
                } else if self.session.timer_reading(now).is_some() {
                    self.add_message("Last guess! The clock is running.", MessageStyle::Error);
                }
            }
            Err(GameError::GameOver) => {}
            Err(GameError::TimeUp) => {
                self.add_message(&GameError::TimeUp.to_string(), MessageStyle::Error);
                self.finish_game();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Let the clock run out a blind game between key presses
    pub fn tick(&mut self, now: Instant) {
        if self.session.expire(now) {
            self.add_message(&GameError::TimeUp.to_string(), MessageStyle::Error);
            self.finish_game();
        }
    }

    /// Record statistics once per finished game
    fn finish_game(&mut self) {
        if self.recorded {
            return;
        }
        self.recorded = true;
        self.stats
            .record(self.session.status(), self.session.score());

        let text = match self.session.status() {
            GameStatus::Won { attempts } => {
                format!("Solved in {attempts}! {:+} points", self.session.score())
            }
            GameStatus::Lost => format!(
                "The word was {}. {:+} points",
                self.session.target(),
                self.session.score()
            ),
            GameStatus::Playing => return,
        };
        let style = if matches!(self.session.status(), GameStatus::Won { .. }) {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        self.add_message(&text, style);

        if self.allows_new_game() {
            self.add_message("Press 'n' for a new word or 'q' to quit.", MessageStyle::Info);
        } else {
            self.add_message("Come back tomorrow! Press 'q' to quit.", MessageStyle::Info);
        }
    }

    pub fn new_game(&mut self) {
        match self.setup.new_session() {
            Ok(session) => {
                self.session = session;
                self.recorded = false;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Countdown line shown once the daily game is over
    #[must_use]
    pub fn countdown(&self, now: SystemTime) -> Option<String> {
        (self.session.is_finished() && !self.allows_new_game()).then(|| countdown_message(now))
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let app = res?;
    if app.session.is_finished() {
        println!("{}", app.session.share_grid());
    }
    Ok(())
}

fn run_app<'a, B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App<'a>,
) -> Result<App<'a>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app, Instant::now(), SystemTime::now()))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit {
            return Ok(app);
        }
    }
}
