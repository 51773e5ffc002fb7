//! Game layer around the evaluator
//!
//! Sessions, scoring, board tiles and in-memory statistics.

pub mod scoring;
mod session;
mod stats;
mod tile;

pub use session::{GameError, GameSession, GameStatus, GuessRecord, Variant};
pub use stats::Statistics;
pub use tile::{Tile, TileStatus};

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;
