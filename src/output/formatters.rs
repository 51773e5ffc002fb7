//! Formatting utilities for terminal output

use crate::core::Classification;
use crate::game::{Tile, TileStatus};
use colored::{ColoredString, Colorize};

/// Render one letter as a coloured block, e.g. ` Q ` on green
#[must_use]
pub fn colored_tile(tile: Tile) -> ColoredString {
    let cell = format!(" {} ", tile.letter.unwrap_or(' '));
    match tile.status {
        TileStatus::Correct => cell.black().on_green().bold(),
        TileStatus::Present => cell.black().on_yellow().bold(),
        TileStatus::Absent => cell.white().on_bright_black(),
        TileStatus::Typing => cell.bright_white().bold(),
        TileStatus::Hidden => cell.white().on_blue(),
        TileStatus::Empty => cell.normal(),
    }
}

/// A classified guess as a row of coloured tiles
#[must_use]
pub fn colored_row(guess: &str, classifications: &[Classification]) -> String {
    guess
        .chars()
        .zip(classifications)
        .map(|(letter, &kind)| colored_tile(Tile::new(letter, kind.into())).to_string())
        .collect()
}

/// Plain `G`/`Y`/`-` codes for a classification sequence
#[must_use]
pub fn classification_codes(classifications: &[Classification]) -> String {
    classifications.iter().map(|kind| kind.code()).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
