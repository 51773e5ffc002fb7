//! Time until the next daily word

use crate::daily::{day_number, format_countdown, seconds_until_reset};
use std::time::SystemTime;

/// "Next Quickle (#N) in HH:MM:SS"
#[must_use]
pub fn countdown_message(now: SystemTime) -> String {
    format!(
        "Next Quickle (#{}) in {}",
        day_number(now) + 1,
        format_countdown(seconds_until_reset(now))
    )
}
