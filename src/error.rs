//! Error types for puzzle construction and the search frontier.

use thiserror::Error;

/// Why a grid could not be turned into a [`Puzzle`](crate::Puzzle).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("expected 3 rows, got {0}")]
    WrongRowCount(usize),

    #[error("row {row} has {len} tiles, expected 3")]
    WrongRowLength { row: usize, len: usize },

    #[error("expected 9 tiles, got {0}")]
    WrongTileCount(usize),

    #[error("'{0}' is not a tile number")]
    InvalidToken(String),

    #[error("tile {0} is out of range 0..=8")]
    TileOutOfRange(u8),

    #[error("tile {0} appears more than once")]
    DuplicateTile(u8),
}

/// Engine-internal failures. Never surfaced by [`search`](crate::search).
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("pop from an empty frontier")]
    EmptyFrontier,
}
