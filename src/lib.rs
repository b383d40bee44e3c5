//! # Sliding Puzzle Solver Library
//!
//! This library solves `n x n` sliding tile puzzles (the 8-puzzle and its
//! larger relatives) with interchangeable search strategies: depth-first,
//! breadth-first, and best-first (A-Star) with a Manhattan or Euclidean
//! distance heuristic.
//!
//! It is used by two binaries:
//! - `solver`: Takes a board string and a strategy, then prints the solution
//!   summary and optionally every board along the path.
//! - `strategy_evaluator`: Runs every strategy over seeded random boards and
//!   compares their cost and search effort.
//!
//! ## Modules
//! - `engine`: The board representation (`Board`), blank moves (`Move`), and successor generation.
//! - `solvability`: The inversion-parity check that rejects unsolvable boards before searching.
//! - `heuristics`: Distance-to-goal estimates for best-first search.
//! - `solver`: The search engine and the `solve` entry points.
//! - `solution`: The `Solution` record returned by every search.
//! - `error`: Malformed-input errors.
//! - `utils`: Parsing boards from digit strings.

pub mod engine;
pub mod error;
pub mod heuristics;
pub mod solution;
pub mod solvability;
pub mod solver;
pub mod utils;

pub use crate::engine::{Board, Move};
pub use crate::error::{BoardError, SolveError};
pub use crate::heuristics::Heuristic;
pub use crate::solution::Solution;
pub use crate::solver::{solve, solve_board, solve_by_name, Algorithm, Strategy};
