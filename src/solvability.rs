//! Parity test deciding whether the goal board is reachable, without searching.
//!
//! A horizontal blank move never changes the relative order of the numbered
//! tiles. A vertical move jumps one tile over `n - 1` others, flipping the
//! inversion parity when `n` is even and preserving it when `n` is odd, while
//! also moving the blank one row. The goal has no inversions and its blank in
//! row 0, which gives the two rules below.
use crate::engine::Board;

/// Counts pairs of numbered tiles that appear in the opposite of their goal order.
/// The blank is ignored.
///
/// # Examples
/// ```
/// use slider_solver::engine::Board;
/// use slider_solver::solvability::inversion_count;
/// let board = Board::from_digits(&[1, 2, 3, 4, 5, 6, 8, 7, 0]).unwrap();
/// assert_eq!(inversion_count(&board), 1);
/// ```
pub fn inversion_count(board: &Board) -> usize {
    let tiles: Vec<u8> = board.tiles().iter().copied().filter(|&t| t != 0).collect();
    let mut inversions = 0;
    for (i, &a) in tiles.iter().enumerate() {
        inversions += tiles[i + 1..].iter().filter(|&&b| a > b).count();
    }
    inversions
}

/// Returns `true` if the ascending goal board is reachable from `board`.
///
/// Odd sides: solvable iff the inversion count is even.
/// Even sides: solvable iff the inversion count plus the blank's row is even.
pub fn is_solvable(board: &Board) -> bool {
    let inversions = inversion_count(board);
    if board.side() % 2 == 1 {
        inversions % 2 == 0
    } else {
        let (blank_row, _) = board.blank();
        (inversions + blank_row) % 2 == 0
    }
}
