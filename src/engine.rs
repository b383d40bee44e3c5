//! Board model for the sliding tile puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Move`: The four directions the blank can travel, in successor generation order.
//! - `Board`: An immutable `n x n` tile grid stored as a fixed-length, row-major
//!   tile sequence, with successor generation and goal testing.
//!
//! Tile `0` is the blank. The goal board holds the tiles in ascending order,
//! so the blank sits in the top-left corner.
use crate::error::BoardError;
use rand::Rng;
use serde::{Serialize, Serializer};
use std::fmt;

/// Smallest supported board side.
pub const MIN_SIDE: usize = 2;
/// Largest supported board side. Tile values must fit in a `u8`.
pub const MAX_SIDE: usize = 15;

/// A move of the blank into an adjacent cell.
///
/// The variant order is the successor generation order used by every search
/// strategy. It decides which of several equal-cost paths is found first and
/// therefore the exact `nodes_expanded` and `search_depth` a search reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Move {
    /// The blank swaps with the tile below it.
    Down,
    /// The blank swaps with the tile to its right.
    Right,
    /// The blank swaps with the tile above it.
    Up,
    /// The blank swaps with the tile to its left.
    Left,
}

impl Move {
    /// All moves in successor generation order.
    pub const ALL: [Move; 4] = [Move::Down, Move::Right, Move::Up, Move::Left];

    /// Row and column offset of the cell the blank moves into.
    fn delta(self) -> (isize, isize) {
        match self {
            Move::Down => (1, 0),
            Move::Right => (0, 1),
            Move::Up => (-1, 0),
            Move::Left => (0, -1),
        }
    }

    /// Returns the move that undoes this one.
    ///
    /// # Examples
    /// ```
    /// use slider_solver::engine::Move;
    /// assert_eq!(Move::Up.opposite(), Move::Down);
    /// assert_eq!(Move::Left.opposite(), Move::Right);
    /// ```
    pub fn opposite(self) -> Move {
        match self {
            Move::Down => Move::Up,
            Move::Right => Move::Left,
            Move::Up => Move::Down,
            Move::Left => Move::Right,
        }
    }

    /// Converts the move to its single-letter representation.
    pub fn to_char(self) -> char {
        match self {
            Move::Down => 'D',
            Move::Right => 'R',
            Move::Up => 'U',
            Move::Left => 'L',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Down => "Down",
            Move::Right => "Right",
            Move::Up => "Up",
            Move::Left => "Left",
        };
        f.write_str(name)
    }
}

/// An `n x n` sliding puzzle board.
///
/// The tiles are a permutation of `0..n*n` stored row-major. A `Board` is never
/// mutated after construction; moves produce new boards. Equality and hashing
/// cover the whole tile sequence, so a board can be used directly as a key in
/// an explored set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    side: usize,
    tiles: Box<[u8]>,
    blank: usize,
}

impl Board {
    /// Builds a board from a flat, row-major tile sequence.
    ///
    /// # Arguments
    /// * `digits`: The tile values, row by row. Its length must be a perfect
    ///   square `n * n` with `MIN_SIDE <= n <= MAX_SIDE`, and the values must be
    ///   a permutation of `0..n * n`.
    ///
    /// # Returns
    /// * `Ok(Board)` if the sequence describes a well-formed board.
    /// * `Err(BoardError)` if the length is not a supported perfect square, a value
    ///   is out of range, or a value is repeated (which implies another is missing).
    ///
    /// # Examples
    /// ```
    /// use slider_solver::engine::Board;
    /// let board = Board::from_digits(&[1, 2, 5, 3, 4, 0, 6, 7, 8]).unwrap();
    /// assert_eq!(board.side(), 3);
    /// assert_eq!(board.blank(), (1, 2));
    ///
    /// assert!(Board::from_digits(&[1, 2, 3]).is_err());
    /// assert!(Board::from_digits(&[0, 1, 1, 3]).is_err());
    /// ```
    pub fn from_digits(digits: &[u8]) -> Result<Board, BoardError> {
        let cells = digits.len();
        if cells == 0 {
            return Err(BoardError::Empty);
        }
        let side = (cells as f64).sqrt().round() as usize;
        if side * side != cells {
            return Err(BoardError::NotSquare(cells));
        }
        if !(MIN_SIDE..=MAX_SIDE).contains(&side) {
            return Err(BoardError::UnsupportedSize {
                side,
                min: MIN_SIDE,
                max: MAX_SIDE,
            });
        }

        let mut seen = vec![false; cells];
        let mut blank = 0;
        for (idx, &value) in digits.iter().enumerate() {
            let slot = seen
                .get_mut(value as usize)
                .ok_or(BoardError::TileOutOfRange {
                    value: value as usize,
                    cells,
                })?;
            if *slot {
                return Err(BoardError::DuplicateTile(value));
            }
            *slot = true;
            if value == 0 {
                blank = idx;
            }
        }

        Ok(Board {
            side,
            tiles: digits.into(),
            blank,
        })
    }

    /// Returns the solved board of the given side: tiles `0, 1, ..., n*n - 1`.
    ///
    /// # Examples
    /// ```
    /// use slider_solver::engine::Board;
    /// let goal = Board::goal(3).unwrap();
    /// assert!(goal.is_goal());
    /// assert_eq!(goal.tiles(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    /// ```
    pub fn goal(side: usize) -> Result<Board, BoardError> {
        let cells = side * side;
        if cells > u8::MAX as usize + 1 {
            return Err(BoardError::UnsupportedSize {
                side,
                min: MIN_SIDE,
                max: MAX_SIDE,
            });
        }
        let digits: Vec<u8> = (0..cells).map(|v| v as u8).collect();
        Board::from_digits(&digits)
    }

    /// Creates a board by walking the blank randomly away from the goal.
    ///
    /// Every board reached this way is solvable. The walk never immediately
    /// undoes its previous step, although it may still revisit boards, so the
    /// optimal solution can be shorter than `steps`.
    ///
    /// # Arguments
    /// * `side`: The board side `n`.
    /// * `steps`: The number of random blank moves to apply.
    /// * `rng`: The random source. Pass a seeded generator for reproducible boards.
    pub fn scrambled(side: usize, steps: usize, rng: &mut impl Rng) -> Result<Board, BoardError> {
        let mut board = Board::goal(side)?;
        let mut last: Option<Move> = None;
        for _ in 0..steps {
            let mut candidates: Vec<(Move, Board)> = board
                .successors()
                .into_iter()
                .filter(|(m, _)| Some(m.opposite()) != last)
                .collect();
            let pick = rng.gen_range(0..candidates.len());
            let (m, next) = candidates.swap_remove(pick);
            last = Some(m);
            board = next;
        }
        Ok(board)
    }

    /// Returns the side length `n` of the board.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the number of cells, `n * n`.
    pub fn cells(&self) -> usize {
        self.tiles.len()
    }

    /// Returns the row-major tile sequence.
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Canonical comparable form of the board, used for explored-set membership
    /// and for ordering equal-priority entries in best-first search.
    ///
    /// Keys of boards with the same side compare lexicographically, which for a
    /// 3x3 board matches comparing the nine digits read as one integer.
    pub fn key(&self) -> &[u8] {
        &self.tiles
    }

    /// Returns the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is outside the board.
    pub fn tile_at(&self, r: usize, c: usize) -> u8 {
        assert!(r < self.side && c < self.side, "({}, {}) is outside the board", r, c);
        self.tiles[r * self.side + c]
    }

    /// Returns the `(row, col)` of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.side, self.blank % self.side)
    }

    /// Returns `true` if the tiles are in ascending order.
    pub fn is_goal(&self) -> bool {
        self.tiles.iter().enumerate().all(|(i, &v)| v as usize == i)
    }

    /// Applies a single blank move.
    ///
    /// # Returns
    /// * `Some(Board)` with the blank swapped into the adjacent cell.
    /// * `None` if the move would take the blank off the board.
    ///
    /// # Examples
    /// ```
    /// use slider_solver::engine::{Board, Move};
    /// let board = Board::from_digits(&[3, 1, 2, 0, 4, 5, 6, 7, 8]).unwrap();
    /// assert!(board.apply(Move::Left).is_none());
    /// assert!(board.apply(Move::Up).unwrap().is_goal());
    /// ```
    pub fn apply(&self, m: Move) -> Option<Board> {
        let (r, c) = self.blank();
        let (dr, dc) = m.delta();
        let nr = r as isize + dr;
        let nc = c as isize + dc;
        let side = self.side as isize;
        if nr < 0 || nr >= side || nc < 0 || nc >= side {
            return None;
        }
        let target = nr as usize * self.side + nc as usize;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Some(Board {
            side: self.side,
            tiles,
            blank: target,
        })
    }

    /// Generates every board one legal blank move away, in `Move::ALL` order.
    pub fn successors(&self) -> Vec<(Move, Board)> {
        Move::ALL
            .iter()
            .filter_map(|&m| self.apply(m).map(|next| (m, next)))
            .collect()
    }

    /// Finds the move that turns `self` into `next`, if they are one move apart.
    pub fn move_to(&self, next: &Board) -> Option<Move> {
        if self.side != next.side {
            return None;
        }
        Move::ALL
            .iter()
            .copied()
            .find(|&m| self.apply(m).as_ref() == Some(next))
    }

    /// Renders the board as text, optionally highlighting one tile.
    ///
    /// The blank is shown as `.`. A highlighted tile is drawn in reverse video
    /// using ANSI escape codes, which is how the solver binary marks the tile
    /// that moved at each step of a path.
    ///
    /// # Arguments
    /// * `tile`: The tile value to highlight, or `None` for plain output.
    pub fn to_string_with_highlight(&self, tile: Option<u8>) -> String {
        let width = (self.cells() - 1).to_string().len();
        let mut output = String::new();

        for r in 0..self.side {
            for c in 0..self.side {
                if c > 0 {
                    output.push(' ');
                }
                let value = self.tile_at(r, c);
                let text = if value == 0 {
                    format!("{:>width$}", ".", width = width)
                } else {
                    format!("{:>width$}", value, width = width)
                };
                if value != 0 && tile == Some(value) {
                    output.push_str(&format!("\x1b[7m{}\x1b[m", text));
                } else {
                    output.push_str(&text);
                }
            }
            if r < self.side - 1 {
                output.push('\n');
            }
        }

        output
    }
}

impl fmt::Display for Board {
    /// Formats the board using `to_string_with_highlight(None)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_highlight(None))
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.tiles.iter())
    }
}
