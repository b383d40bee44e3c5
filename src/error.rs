//! Error types for board construction and solver selection.
//!
//! An unsolvable board is not an error: it produces a `Solution` with
//! `solvable == false`. Everything here is a malformed request that is
//! rejected before any search state is allocated.

use thiserror::Error;

/// A tile sequence that cannot be laid out as a sliding puzzle board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Board is empty")]
    Empty,
    #[error("Board length {0} is not a perfect square")]
    NotSquare(usize),
    #[error("Board side {side} is outside the supported range {min}..={max}")]
    UnsupportedSize { side: usize, min: usize, max: usize },
    #[error("Tile {value} is out of range for a board of {cells} cells")]
    TileOutOfRange { value: usize, cells: usize },
    #[error("Tile {0} appears more than once")]
    DuplicateTile(u8),
    #[error("Unrecognized token '{0}' in board string")]
    InvalidToken(String),
}

/// Errors returned by the solver entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("Malformed board: {0}")]
    MalformedBoard(#[from] BoardError),
    #[error("Unknown search strategy '{0}'")]
    UnknownStrategy(String),
    #[error("Unknown heuristic '{0}'")]
    UnknownHeuristic(String),
    #[error("Best-first search requires a heuristic")]
    MissingHeuristic,
}
