//! Distance-to-goal estimates consulted by best-first search.
//!
//! Both estimates score each numbered tile against its goal cell and skip the
//! blank. Neither overestimates the number of remaining moves. Manhattan
//! distance dominates Euclidean distance tile by tile, so it never expands more
//! nodes for the same board.
use crate::engine::Board;
use crate::error::SolveError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Row and column offsets between a tile's cell and its goal cell.
fn tile_offsets(board: &Board) -> impl Iterator<Item = (usize, usize)> + '_ {
    let side = board.side();
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(move |(idx, &tile)| {
            let goal = tile as usize;
            let dr = (idx / side).abs_diff(goal / side);
            let dc = (idx % side).abs_diff(goal % side);
            (dr, dc)
        })
}

/// Sum over numbered tiles of `|row - goal_row| + |col - goal_col|`.
///
/// # Examples
/// ```
/// use slider_solver::engine::Board;
/// use slider_solver::heuristics::manhattan_distance;
/// let board = Board::from_digits(&[1, 2, 5, 3, 4, 0, 6, 7, 8]).unwrap();
/// assert_eq!(manhattan_distance(&board), 3);
/// ```
pub fn manhattan_distance(board: &Board) -> u32 {
    tile_offsets(board).map(|(dr, dc)| (dr + dc) as u32).sum()
}

/// Sum over numbered tiles of the straight-line distance to the goal cell.
///
/// Tiles are accumulated in row-major order, so the floating point result is
/// reproducible for a given board.
pub fn euclidean_distance(board: &Board) -> f64 {
    tile_offsets(board)
        .map(|(dr, dc)| ((dr * dr + dc * dc) as f64).sqrt())
        .sum()
}

/// A named distance estimate for best-first search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Heuristic {
    Manhattan,
    Euclidean,
}

impl Heuristic {
    pub const ALL: [Heuristic; 2] = [Heuristic::Manhattan, Heuristic::Euclidean];

    /// Estimated remaining moves from `board` to the goal.
    pub fn estimate(self, board: &Board) -> f64 {
        match self {
            Heuristic::Manhattan => manhattan_distance(board) as f64,
            Heuristic::Euclidean => euclidean_distance(board),
        }
    }
}

impl FromStr for Heuristic {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Heuristic::Manhattan),
            "euclidean" => Ok(Heuristic::Euclidean),
            _ => Err(SolveError::UnknownHeuristic(s.to_string())),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::Manhattan => f.write_str("Manhattan"),
            Heuristic::Euclidean => f.write_str("Euclidean"),
        }
    }
}
