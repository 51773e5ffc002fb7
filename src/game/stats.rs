//! Per-process play statistics
//!
//! Kept in memory only; nothing here is written to disk.

use super::MAX_ATTEMPTS;
use super::session::GameStatus;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub played: usize,
    pub won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Index `n` counts wins in `n` guesses; index 0 is unused
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
    pub total_score: i64,
}

impl Statistics {
    /// Fold a finished game into the totals
    ///
    /// Games still in progress are ignored.
    pub fn record(&mut self, status: GameStatus, score: i32) {
        match status {
            GameStatus::Playing => return,
            GameStatus::Won { attempts } => {
                self.won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if let Some(slot) = self.guess_distribution.get_mut(attempts) {
                    *slot += 1;
                }
            }
            GameStatus::Lost => self.current_streak = 0,
        }
        self.played += 1;
        self.total_score += i64::from(score);
    }

    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.won as f64 / self.played as f64 * 100.0
        }
    }
}
