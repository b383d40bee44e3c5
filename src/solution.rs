use crate::engine::{Board, Move};
use serde::Serialize;
use std::fmt;

/// Represents the outcome of one solver run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Solution {
    /// Whether the goal board is reachable from the start board.
    pub solvable: bool,
    /// Boards from the start board to the goal board, both included.
    /// Empty when the board is unsolvable.
    pub path: Vec<Board>,
    /// Number of moves on the path, `path.len() - 1`. Zero when unsolvable.
    pub cost: usize,
    /// Number of nodes popped from the frontier and examined, the goal node included.
    pub nodes_expanded: usize,
    /// Deepest node generated during the whole run, which is not necessarily the
    /// depth of the solution.
    pub search_depth: usize,
}

impl Solution {
    /// Result for a board rejected by the parity check. No search was performed,
    /// so every counter is zero.
    pub fn unsolvable() -> Self {
        Solution {
            solvable: false,
            path: Vec::new(),
            cost: 0,
            nodes_expanded: 0,
            search_depth: 0,
        }
    }

    /// Builds a successful result from a reconstructed start-to-goal path.
    pub fn from_path(path: Vec<Board>, nodes_expanded: usize, search_depth: usize) -> Self {
        Solution {
            solvable: true,
            cost: path.len().saturating_sub(1),
            path,
            nodes_expanded,
            search_depth,
        }
    }

    /// Result for a search whose frontier ran dry before reaching the goal.
    pub(crate) fn exhausted(nodes_expanded: usize, search_depth: usize) -> Self {
        Solution {
            nodes_expanded,
            search_depth,
            ..Solution::unsolvable()
        }
    }

    /// Blank moves leading from each path board to the next.
    ///
    /// # Examples
    /// ```
    /// use slider_solver::engine::Move;
    /// use slider_solver::solver::{solve, Strategy};
    ///
    /// let solution = solve(&[3, 1, 2, 0, 4, 5, 6, 7, 8], Strategy::BreadthFirst, None).unwrap();
    /// assert_eq!(solution.moves(), vec![Move::Up]);
    /// ```
    pub fn moves(&self) -> Vec<Move> {
        self.path
            .windows(2)
            .filter_map(|pair| pair[0].move_to(&pair[1]))
            .collect()
    }

    /// Human-readable summary of the run.
    pub fn stringify(&self) -> String {
        format!(
            "Solvable: {}\nCost: {}\nNodes expanded: {}\nSearch depth: {}",
            if self.solvable { "yes" } else { "no" },
            self.cost,
            self.nodes_expanded,
            self.search_depth
        )
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}
