//! Board tiles as the presentation layer sees them

use crate::core::Classification;

/// Display state of one board square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileStatus {
    Correct,
    Present,
    Absent,
    /// Nothing typed here yet
    Empty,
    /// Letter typed on the active row, not yet submitted
    Typing,
    /// Submitted in a blind game that is still running
    Hidden,
}

impl From<Classification> for TileStatus {
    fn from(classification: Classification) -> Self {
        match classification {
            Classification::Correct => Self::Correct,
            Classification::Present => Self::Present,
            Classification::Absent => Self::Absent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<char>,
    pub status: TileStatus,
}

impl Tile {
    pub const EMPTY: Self = Self {
        letter: None,
        status: TileStatus::Empty,
    };

    #[must_use]
    pub const fn new(letter: char, status: TileStatus) -> Self {
        Self {
            letter: Some(letter),
            status,
        }
    }
}
