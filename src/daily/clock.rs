//! Day boundaries for the daily game
//!
//! Days are counted in UTC from the Unix epoch so that every player sees the
//! same word on the same day, whatever their local zone.

use std::time::{SystemTime, UNIX_EPOCH};

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Whole UTC days since the Unix epoch
///
/// Clocks set before 1970 count as day 0.
#[must_use]
pub fn day_number(now: SystemTime) -> u64 {
    seconds_since_epoch(now) / SECONDS_PER_DAY
}

/// Seconds until the next UTC midnight, when the daily word changes
#[must_use]
pub fn seconds_until_reset(now: SystemTime) -> u64 {
    SECONDS_PER_DAY - seconds_since_epoch(now) % SECONDS_PER_DAY
}

/// Format a countdown as `HH:MM:SS`
#[must_use]
pub fn format_countdown(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

fn seconds_since_epoch(now: SystemTime) -> u64 {
    now.duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}
