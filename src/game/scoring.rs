//! Point table
//!
//! Early wins are worth more. A win on the last row is timed: the clock
//! starts when the fifth guess misses and stops when the sixth is submitted.
//! Its reading is capped at 12 s, so a late sixth-guess win still earns a point.
//! Losing costs a fixed penalty, so a score can go negative.

use std::time::Duration;

/// Points deducted when all six attempts miss
pub const LOSS_PENALTY: i32 = 5;

/// Sixth-guess stopwatch reading after which a win earns nothing
pub const SIXTH_GUESS_TIME_LIMIT: Duration = Duration::from_secs(12);

/// Last-row clock in blind games; running out loses the game
pub const BLIND_TIME_LIMIT: Duration = Duration::from_secs(60);

/// Points for winning on `attempt` (1-based)
///
/// `sixth_guess_elapsed` only matters for attempt 6.
///
/// # Examples
/// ```
/// use quickle::game::scoring::points_for_win;
/// use std::time::Duration;
///
/// assert_eq!(points_for_win(1, Duration::ZERO), 25);
/// assert_eq!(points_for_win(6, Duration::from_secs(8)), 3);
/// ```
#[must_use]
pub const fn points_for_win(attempt: usize, sixth_guess_elapsed: Duration) -> i32 {
    match attempt {
        1 => 25,
        2 => 18,
        3 => 15,
        4 => 12,
        5 => 6,
        6 => timed_points(sixth_guess_elapsed),
        _ => 0,
    }
}

const fn timed_points(elapsed: Duration) -> i32 {
    match elapsed.as_secs() {
        0..=5 => 5,
        6..=9 => 3,
        10..=12 => 1,
        _ => 0,
    }
}
