//! A single Quickle game
//!
//! The session owns everything that changes while a game is played: the row
//! being typed, the submitted guesses, the sixth-guess stopwatch and the
//! score. Front ends drive it with key-level operations and render
//! [`GameSession::board`].
//!
//! In [`Variant::Blind`] the colours stay hidden until the game ends, only the
//! sixth guess decides the result, and the last-row clock ends the game when
//! it runs out.

use super::MAX_ATTEMPTS;
use super::scoring::{BLIND_TIME_LIMIT, LOSS_PENALTY, SIXTH_GUESS_TIME_LIMIT, points_for_win};
use super::tile::{Tile, TileStatus};
use crate::core::{Feedback, WORD_LENGTH, Word};
use crate::wordlists::Dictionary;
use std::fmt::Write as _;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won { attempts: usize },
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Rule set a session is played under
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// Feedback after every guess; a correct guess wins at once
    #[default]
    Classic,
    /// Feedback withheld until the end; the sixth guess decides
    Blind,
}

impl Variant {
    /// Length of the last-row clock
    #[must_use]
    pub const fn time_limit(self) -> Duration {
        match self {
            Self::Classic => SIXTH_GUESS_TIME_LIMIT,
            Self::Blind => BLIND_TIME_LIMIT,
        }
    }
}

/// One submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: Feedback,
}

/// Reasons a guess or a game start is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Not enough letters ({entered} of 5)")]
    IncompleteGuess { entered: usize },
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),
    #[error("Word not found in dictionary: {0}")]
    NotInDictionary(String),
    #[error("The game is already over")]
    GameOver,
    #[error("Time's up! You lost!")]
    TimeUp,
    #[error("Today's Quickle has already been played")]
    AlreadyPlayed,
    #[error("No target words available")]
    NoTargetWords,
}

/// State of one game
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    target: Word,
    dictionary: &'a Dictionary,
    variant: Variant,
    history: Vec<GuessRecord>,
    input: String,
    status: GameStatus,
    score: i32,
    timer_started: Option<Instant>,
}

impl<'a> GameSession<'a> {
    #[must_use]
    pub const fn new(target: Word, dictionary: &'a Dictionary, variant: Variant) -> Self {
        Self {
            target,
            dictionary,
            variant,
            history: Vec::new(),
            input: String::new(),
            status: GameStatus::Playing,
            score: 0,
            timer_started: None,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Whether the board may show colours yet
    #[must_use]
    pub const fn feedback_visible(&self) -> bool {
        matches!(self.variant, Variant::Classic) || self.is_finished()
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.input
    }

    /// Type a letter into the active row
    ///
    /// Returns `false` (and changes nothing) for non-letters, a full row, or
    /// a finished game.
    pub fn push_letter(&mut self, letter: char) -> bool {
        if self.is_finished() || !letter.is_ascii_alphabetic() || self.input.len() >= WORD_LENGTH
        {
            return false;
        }
        self.input.push(letter.to_ascii_uppercase());
        true
    }

    /// Remove the last typed letter
    pub fn pop_letter(&mut self) -> bool {
        !self.is_finished() && self.input.pop().is_some()
    }

    /// Discard the active row
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Submit the active row
    ///
    /// `now` stamps the sixth-guess stopwatch: it starts when the fifth guess
    /// misses and is read when the sixth is submitted.
    ///
    /// # Errors
    /// - [`GameError::GameOver`] if the game already finished
    /// - [`GameError::TimeUp`] if a blind game's clock ran out; the game is lost
    /// - [`GameError::IncompleteGuess`] unless exactly five letters are typed
    /// - [`GameError::NotInDictionary`] for unknown words; the typed row is kept
    pub fn submit(&mut self, now: Instant) -> Result<Feedback, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        if self.expire(now) {
            return Err(GameError::TimeUp);
        }

        let entered = self.input.len();
        if entered != WORD_LENGTH {
            return Err(GameError::IncompleteGuess { entered });
        }
        let word =
            Word::new(self.input.as_str()).map_err(|_| GameError::IncompleteGuess { entered })?;

        if !self.dictionary.contains(&word) {
            tracing::debug!(guess = word.text(), "rejected guess outside dictionary");
            return Err(GameError::NotInDictionary(word.text().to_string()));
        }

        let feedback = Feedback::calculate(&word, &self.target);
        let attempt = self.history.len() + 1;
        self.input.clear();
        self.history.push(GuessRecord { word, feedback });

        tracing::debug!(attempt, feedback = %feedback, "guess submitted");

        let decides = match self.variant {
            Variant::Classic => feedback.is_solved(),
            Variant::Blind => attempt >= MAX_ATTEMPTS,
        };

        if decides && feedback.is_solved() {
            let elapsed = self
                .timer_reading(now)
                .unwrap_or(Duration::ZERO)
                .min(SIXTH_GUESS_TIME_LIMIT);
            let points = points_for_win(attempt, elapsed);
            self.score += points;
            self.status = GameStatus::Won { attempts: attempt };
            self.timer_started = None;
            tracing::info!(attempts = attempt, points, "game won");
        } else if attempt >= MAX_ATTEMPTS {
            self.score -= LOSS_PENALTY;
            self.status = GameStatus::Lost;
            self.timer_started = None;
            tracing::info!(penalty = LOSS_PENALTY, "game lost");
        } else if attempt == MAX_ATTEMPTS - 1 {
            self.timer_started = Some(now);
            tracing::debug!("sixth-guess timer started");
        }

        Ok(feedback)
    }

    /// Current sixth-guess stopwatch reading, capped at the variant's limit
    ///
    /// `None` unless the last row is in play.
    #[must_use]
    pub fn timer_reading(&self, now: Instant) -> Option<Duration> {
        let limit = self.variant.time_limit();
        self.timer_started
            .map(|start| now.saturating_duration_since(start).min(limit))
    }

    /// End a blind game whose last-row clock has run out
    ///
    /// Returns `true` if this call lost the game. Classic games never expire.
    pub fn expire(&mut self, now: Instant) -> bool {
        let Some(start) = self.timer_started else {
            return false;
        };
        if self.variant != Variant::Blind
            || self.is_finished()
            || now.saturating_duration_since(start) < BLIND_TIME_LIMIT
        {
            return false;
        }

        self.input.clear();
        self.score -= LOSS_PENALTY;
        self.status = GameStatus::Lost;
        self.timer_started = None;
        tracing::info!(penalty = LOSS_PENALTY, "blind game timed out");
        true
    }

    /// Six rows of five tiles, ready to render
    #[must_use]
    pub fn board(&self) -> [[Tile; WORD_LENGTH]; MAX_ATTEMPTS] {
        let mut rows = [[Tile::EMPTY; WORD_LENGTH]; MAX_ATTEMPTS];

        let visible = self.feedback_visible();
        for (row, record) in rows.iter_mut().zip(&self.history) {
            for (position, tile) in row.iter_mut().enumerate() {
                let status = if visible {
                    record.feedback[position].into()
                } else {
                    TileStatus::Hidden
                };
                *tile = Tile::new(record.word.letter_at(position), status);
            }
        }

        if !self.is_finished()
            && let Some(row) = rows.get_mut(self.history.len())
        {
            for (tile, letter) in row.iter_mut().zip(self.input.chars()) {
                *tile = Tile::new(letter, TileStatus::Typing);
            }
        }

        rows
    }

    /// Spoiler-free result grid, e.g. "Quickle 3/6" followed by emoji rows
    ///
    /// A blind game in progress shows the header only.
    #[must_use]
    pub fn share_grid(&self) -> String {
        let result = match self.status {
            GameStatus::Won { attempts } => attempts.to_string(),
            GameStatus::Lost => "X".to_string(),
            GameStatus::Playing => "-".to_string(),
        };

        let mut grid = format!("Quickle {result}/{MAX_ATTEMPTS}");
        if !self.feedback_visible() {
            return grid;
        }
        for record in &self.history {
            let _ = write!(grid, "\n{}", record.feedback.to_emoji());
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&[
            "quick", "crane", "slate", "speed", "erase", "pious", "abide", "hotel",
        ]))
    }

    fn session(dictionary: &Dictionary) -> GameSession<'_> {
        GameSession::new(Word::new("quick").unwrap(), dictionary, Variant::Classic)
    }

    fn blind_session(dictionary: &Dictionary) -> GameSession<'_> {
        GameSession::new(Word::new("quick").unwrap(), dictionary, Variant::Blind)
    }

    fn type_word(game: &mut GameSession<'_>, word: &str) {
        for letter in word.chars() {
            game.push_letter(letter);
        }
    }

    fn guess(game: &mut GameSession<'_>, word: &str, now: Instant) -> Result<Feedback, GameError> {
        type_word(game, word);
        game.submit(now)
    }

    #[test]
    fn typing_is_limited_to_five_letters() {
        let dictionary = dictionary();
        let mut game = session(&dictionary);

        assert!(game.push_letter('c'));
        assert!(!game.push_letter('1'));
        type_word(&mut game, "raneXYZ");

        assert_eq!(game.current_input(), "CRANE");
        assert!(game.pop_letter());
        assert_eq!(game.current_input(), "CRAN");

        game.clear_input();
        assert_eq!(game.current_input(), "");
        assert!(!game.pop_letter());
    }

    #[test]
    fn incomplete_row_is_rejected() {
        let dictionary = dictionary();
        let mut game = session(&dictionary);
        type_word(&mut game, "cra");

        assert_eq!(
            game.submit(Instant::now()),
            Err(GameError::IncompleteGuess { entered: 3 })
        );
        assert_eq!(game.attempts_used(), 0);
    }

    #[test]
    fn unknown_word_is_rejected_and_kept() {
        let dictionary = dictionary();
        let mut game = session(&dictionary);

        assert_eq!(
            guess(&mut game, "zzzzz", Instant::now()),
            Err(GameError::NotInDictionary("ZZZZZ".to_string()))
        );
        assert_eq!(game.current_input(), "ZZZZZ");
        assert_eq!(game.attempts_used(), 0);
    }

    #[test]
    fn winning_first_guess_scores_25() {
        let dictionary = dictionary();
        let mut game = session(&dictionary);

        let feedback = guess(&mut game, "quick", Instant::now()).unwrap();

        assert!(feedback.is_solved());
        assert_eq!(game.status(), GameStatus::Won { attempts: 1 });
        assert_eq!(game.score(), 25);
        assert_eq!(
            guess(&mut game, "crane", Instant::now()),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn six_misses_lose_with_penalty() {
        let dictionary = dictionary();
        let mut game = session(&dictionary);
        let now = Instant::now();

        for word in ["crane", "slate", "speed", "erase", "hotel", "abide"] {
            guess(&mut game, word, now).unwrap();
        }

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.score(), -LOSS_PENALTY);
        assert_eq!(game.timer_reading(now), None);
    }

    #[test]
    fn timer_starts_after_fifth_miss() {
        let dictionary = dictionary();
        let mut game = session(&dictionary);
        let start = Instant::now();

        for word in ["crane", "slate", "speed", "erase"] {
            guess(&mut game, word, start).unwrap();
        }
        assert_eq!(game.timer_reading(start), None);

        guess(&mut game, "hotel", start).unwrap();
        assert_eq!(
            game.timer_reading(start + Duration::from_secs(4)),
            Some(Duration::from_secs(4))
        );
        assert_eq!(
            game.timer_reading(start + Duration::from_secs(40)),
            Some(SIXTH_GUESS_TIME_LIMIT)
        );
    }

    #[test]
    fn sixth_guess_win_is_timed() {
        let dictionary = dictionary();
        let mut game = session(&dictionary);
        let start = Instant::now();

        for word in ["crane", "slate", "speed", "erase", "hotel"] {
            guess(&mut game, word, start).unwrap();
        }
        guess(&mut game, "quick", start + Duration::from_secs(7)).unwrap();

        assert_eq!(game.status(), GameStatus::Won { attempts: 6 });
        assert_eq!(game.score(), 3);
    }

    #[test]
    fn late_sixth_guess_win_scores_as_full_clock() {
        let dictionary = dictionary();
        let mut game = session(&dictionary);
        let start = Instant::now();

        for word in ["crane", "slate", "speed", "erase", "hotel"] {
            guess(&mut game, word, start).unwrap();
        }
        let late = start + Duration::from_secs(20);
        assert_eq!(game.timer_reading(late), Some(SIXTH_GUESS_TIME_LIMIT));
        guess(&mut game, "quick", late).unwrap();

        assert_eq!(game.status(), GameStatus::Won { attempts: 6 });
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn classic_game_never_expires() {
        let dictionary = dictionary();
        let mut game = session(&dictionary);
        let start = Instant::now();

        for word in ["crane", "slate", "speed", "erase", "hotel"] {
            guess(&mut game, word, start).unwrap();
        }
        assert!(!game.expire(start + Duration::from_secs(600)));
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn blind_board_hides_colours_until_the_end() {
        let dictionary = dictionary();
        let mut game = blind_session(&dictionary);
        let start = Instant::now();

        guess(&mut game, "quick", start).unwrap();
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.board()[0][0], Tile::new('Q', TileStatus::Hidden));
        assert_eq!(game.share_grid(), "Quickle -/6");

        for word in ["crane", "slate", "speed", "erase"] {
            guess(&mut game, word, start).unwrap();
        }
        assert_eq!(
            game.timer_reading(start + Duration::from_secs(30)),
            Some(Duration::from_secs(30))
        );
        guess(&mut game, "hotel", start).unwrap();

        // an early correct guess does not count; only the sixth row decides
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.score(), -LOSS_PENALTY);
        assert_eq!(game.board()[0][0], Tile::new('Q', TileStatus::Correct));
        assert!(game.share_grid().starts_with("Quickle X/6\n🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn blind_sixth_guess_wins() {
        let dictionary = dictionary();
        let mut game = blind_session(&dictionary);
        let start = Instant::now();

        for word in ["crane", "slate", "speed", "erase", "hotel"] {
            guess(&mut game, word, start).unwrap();
        }
        guess(&mut game, "quick", start + Duration::from_secs(3)).unwrap();

        assert_eq!(game.status(), GameStatus::Won { attempts: 6 });
        assert_eq!(game.score(), 5);
        assert_eq!(game.board()[5][0].status, TileStatus::Correct);
    }

    #[test]
    fn blind_clock_running_out_loses() {
        let dictionary = dictionary();
        let mut game = blind_session(&dictionary);
        let start = Instant::now();

        for word in ["crane", "slate", "speed", "erase", "hotel"] {
            guess(&mut game, word, start).unwrap();
        }
        assert!(!game.expire(start + Duration::from_secs(59)));

        let late = start + Duration::from_secs(61);
        assert_eq!(guess(&mut game, "quick", late), Err(GameError::TimeUp));
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.score(), -LOSS_PENALTY);
        assert_eq!(game.attempts_used(), 5);
        assert!(!game.expire(late));
    }

    #[test]
    fn board_shows_history_typing_and_empty_rows() {
        let dictionary = dictionary();
        let mut game = session(&dictionary);

        guess(&mut game, "crane", Instant::now()).unwrap();
        type_word(&mut game, "sl");
        let board = game.board();

        // CRANE vs QUICK: only C is in the target
        assert_eq!(board[0][0], Tile::new('C', TileStatus::Present));
        assert_eq!(board[0][1], Tile::new('R', TileStatus::Absent));
        assert_eq!(board[1][0], Tile::new('S', TileStatus::Typing));
        assert_eq!(board[1][1], Tile::new('L', TileStatus::Typing));
        assert_eq!(board[1][2], Tile::EMPTY);
        assert!(board[2..].iter().flatten().all(|&tile| tile == Tile::EMPTY));
    }

    #[test]
    fn finished_game_accepts_no_typing() {
        let dictionary = dictionary();
        let mut game = session(&dictionary);
        guess(&mut game, "quick", Instant::now()).unwrap();

        assert!(!game.push_letter('a'));
        assert!(!game.pop_letter());
        assert!(game.board()[1].iter().all(|&tile| tile == Tile::EMPTY));
    }

    #[test]
    fn history_records_feedback() {
        let dictionary = dictionary();
        let mut game = session(&dictionary);
        guess(&mut game, "pious", Instant::now()).unwrap();

        let record = &game.history()[0];
        assert_eq!(record.word.text(), "PIOUS");
        // PIOUS vs QUICK: I and U both present
        assert_eq!(record.feedback.to_string(), "-Y-Y-");
    }

    #[test]
    fn share_grid_lists_rows() {
        let dictionary = dictionary();
        let mut game = session(&dictionary);
        guess(&mut game, "crane", Instant::now()).unwrap();
        guess(&mut game, "quick", Instant::now()).unwrap();

        assert_eq!(game.share_grid(), "Quickle 2/6\n🟨⬛⬛⬛⬛\n🟩🟩🟩🟩🟩");
    }
}
