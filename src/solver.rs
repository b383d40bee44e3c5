//! Search strategies over the sliding puzzle state graph.
//!
//! Every strategy shares one loop: pop a node from the frontier, stop if it is
//! the goal, otherwise push its unexplored successors. The strategies differ
//! only in frontier discipline and in when a board counts as explored:
//!
//! - Depth-first: a stack. Successors are pushed in reverse so they pop in
//!   `Move::ALL` order. Boards are marked explored when pushed.
//! - Breadth-first: a FIFO queue. Boards are marked explored when pushed.
//! - Best-first: a min-queue on `(g + h, board key, node id)`. Boards are marked
//!   explored when popped; stale duplicates are discarded at that point without
//!   counting as an expansion.
//!
//! Nodes live in an arena and refer to their parent by index, so the winning
//! path is rebuilt by walking parent indices back to the root.
use crate::engine::{Board, Move};
use crate::error::SolveError;
use crate::heuristics::Heuristic;
use crate::solution::Solution;
use crate::solvability::is_solvable;
use log::{debug, info, warn};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

/// Search strategy selected by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    /// A-Star ordering on `g + h`; needs a `Heuristic`.
    BestFirst,
}

impl FromStr for Strategy {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "a-star" | "astar" | "a*" | "best-first" | "bestfirst" => Ok(Strategy::BestFirst),
            _ => Err(SolveError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::DepthFirst => f.write_str("DFS"),
            Strategy::BreadthFirst => f.write_str("BFS"),
            Strategy::BestFirst => f.write_str("A-Star"),
        }
    }
}

/// A fully resolved search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    BestFirst(Heuristic),
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::BestFirst(Heuristic::Manhattan),
        Algorithm::BestFirst(Heuristic::Euclidean),
    ];

    /// Combines a strategy with an optional heuristic.
    ///
    /// A heuristic is required for best-first search and ignored otherwise.
    pub fn resolve(strategy: Strategy, heuristic: Option<Heuristic>) -> Result<Algorithm, SolveError> {
        match (strategy, heuristic) {
            (Strategy::DepthFirst, _) => Ok(Algorithm::DepthFirst),
            (Strategy::BreadthFirst, _) => Ok(Algorithm::BreadthFirst),
            (Strategy::BestFirst, Some(h)) => Ok(Algorithm::BestFirst(h)),
            (Strategy::BestFirst, None) => Err(SolveError::MissingHeuristic),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::DepthFirst => write!(f, "{}", Strategy::DepthFirst),
            Algorithm::BreadthFirst => write!(f, "{}", Strategy::BreadthFirst),
            Algorithm::BestFirst(h) => write!(f, "{} ({})", Strategy::BestFirst, h),
        }
    }
}

type NodeId = usize;

#[derive(Debug)]
struct SearchNode {
    board: Board,
    parent: Option<NodeId>,
    action: Option<Move>,
    depth: usize,
}

/// Append-only node storage; a node's parent always has a smaller id.
#[derive(Debug, Default)]
struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    fn add(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }

    /// Boards from the root to `id`, in that order.
    fn path_to(&self, id: NodeId) -> Vec<Board> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id);
            path.push(node.board.clone());
            current = node.parent;
        }
        path.reverse();
        path
    }
}

/// Best-first queue entry. `BinaryHeap` is a max-heap, so the ordering is
/// reversed: the lowest `f`, then the smallest board key, then the oldest node
/// is the greatest.
#[derive(Debug)]
struct Ranked {
    f: f64,
    board: Board,
    node: NodeId,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.board.key().cmp(self.board.key()))
            .then_with(|| other.node.cmp(&self.node))
    }
}

enum Frontier {
    Stack(Vec<NodeId>),
    Queue(VecDeque<NodeId>),
    Priority(BinaryHeap<Ranked>, Heuristic),
}

enum Step {
    Continue,
    Found(NodeId),
    Exhausted,
}

/// State owned by a single solver run.
struct Search {
    arena: NodeArena,
    frontier: Frontier,
    explored: HashSet<Board>,
    nodes_expanded: usize,
    search_depth: usize,
}

impl Search {
    fn new(start: &Board, algorithm: Algorithm) -> Self {
        let frontier = match algorithm {
            Algorithm::DepthFirst => Frontier::Stack(Vec::new()),
            Algorithm::BreadthFirst => Frontier::Queue(VecDeque::new()),
            Algorithm::BestFirst(h) => Frontier::Priority(BinaryHeap::new(), h),
        };
        let mut search = Search {
            arena: NodeArena::default(),
            frontier,
            explored: HashSet::new(),
            nodes_expanded: 0,
            search_depth: 0,
        };
        search.push(SearchNode {
            board: start.clone(),
            parent: None,
            action: None,
            depth: 0,
        });
        search
    }

    /// Adds a node to the arena and the frontier. For uninformed strategies
    /// the board must already be known to be unexplored.
    fn push(&mut self, node: SearchNode) {
        self.search_depth = self.search_depth.max(node.depth);
        let depth = node.depth;
        let board = node.board.clone();
        let id = self.arena.add(node);
        match &mut self.frontier {
            Frontier::Stack(stack) => {
                self.explored.insert(board);
                stack.push(id);
            }
            Frontier::Queue(queue) => {
                self.explored.insert(board);
                queue.push_back(id);
            }
            Frontier::Priority(heap, h) => heap.push(Ranked {
                f: depth as f64 + h.estimate(&board),
                board,
                node: id,
            }),
        }
    }

    fn pop(&mut self) -> Option<NodeId> {
        match &mut self.frontier {
            Frontier::Stack(stack) => stack.pop(),
            Frontier::Queue(queue) => queue.pop_front(),
            Frontier::Priority(heap, _) => {
                while let Some(entry) = heap.pop() {
                    if self.explored.insert(entry.board) {
                        return Some(entry.node);
                    }
                }
                None
            }
        }
    }

    fn step(&mut self) -> Step {
        let Some(id) = self.pop() else {
            return Step::Exhausted;
        };
        self.nodes_expanded += 1;

        let node = self.arena.get(id);
        if node.board.is_goal() {
            return Step::Found(id);
        }
        let depth = node.depth + 1;
        let mut successors = node.board.successors();
        if matches!(self.frontier, Frontier::Stack(_)) {
            successors.reverse();
        }

        for (action, board) in successors {
            if self.explored.contains(&board) {
                continue;
            }
            self.push(SearchNode {
                board,
                parent: Some(id),
                action: Some(action),
                depth,
            });
        }
        Step::Continue
    }

    fn run(mut self) -> Solution {
        loop {
            match self.step() {
                Step::Continue => {}
                Step::Found(id) => {
                    let goal = self.arena.get(id);
                    debug!("Goal reached at depth {} by {:?}", goal.depth, goal.action);
                    let path = self.arena.path_to(id);
                    return Solution::from_path(path, self.nodes_expanded, self.search_depth);
                }
                Step::Exhausted => {
                    warn!(
                        "Frontier exhausted after {} expansions without reaching the goal",
                        self.nodes_expanded
                    );
                    return Solution::exhausted(self.nodes_expanded, self.search_depth);
                }
            }
        }
    }
}

/// Solves an already validated board.
///
/// The parity check runs first; an unsolvable board returns
/// `Solution::unsolvable()` without allocating any search state.
///
/// # Examples
/// ```
/// use slider_solver::engine::Board;
/// use slider_solver::heuristics::Heuristic;
/// use slider_solver::solver::{solve_board, Algorithm};
///
/// let board = Board::from_digits(&[1, 2, 5, 3, 4, 0, 6, 7, 8]).unwrap();
/// let solution = solve_board(&board, Algorithm::BestFirst(Heuristic::Manhattan));
/// assert_eq!(solution.cost, 3);
/// assert_eq!(solution.nodes_expanded, 4);
/// ```
pub fn solve_board(board: &Board, algorithm: Algorithm) -> Solution {
    if !is_solvable(board) {
        info!("Board {:?} fails the parity check; skipping {} search", board.tiles(), algorithm);
        return Solution::unsolvable();
    }

    debug!("Starting {} search from {:?}", algorithm, board.tiles());
    let solution = Search::new(board, algorithm).run();
    debug!(
        "{} finished: cost={}, nodes_expanded={}, search_depth={}",
        algorithm, solution.cost, solution.nodes_expanded, solution.search_depth
    );
    solution
}

/// Solves a board given as a flat row-major tile sequence.
///
/// # Arguments
/// * `initial_digits`: The start board's tiles, `0` being the blank.
/// * `strategy`: The frontier discipline to search with.
/// * `heuristic`: Required when `strategy` is `Strategy::BestFirst`, ignored otherwise.
///
/// # Returns
/// * `Ok(Solution)` for every well-formed board, solvable or not.
/// * `Err(SolveError::MalformedBoard)` if the tiles do not form a board.
/// * `Err(SolveError::MissingHeuristic)` for best-first search without a heuristic.
pub fn solve(
    initial_digits: &[u8],
    strategy: Strategy,
    heuristic: Option<Heuristic>,
) -> Result<Solution, SolveError> {
    let algorithm = Algorithm::resolve(strategy, heuristic)?;
    let board = Board::from_digits(initial_digits)?;
    Ok(solve_board(&board, algorithm))
}

/// Solves a board with the strategy and heuristic picked by name, e.g.
/// `("A-Star", Some("Manhattan"))` or `("BFS", None)`.
///
/// Names are case-insensitive. A heuristic name given with an uninformed
/// strategy is not validated.
pub fn solve_by_name(
    initial_digits: &[u8],
    strategy: &str,
    heuristic: Option<&str>,
) -> Result<Solution, SolveError> {
    let strategy: Strategy = strategy.parse()?;
    let heuristic = match (strategy, heuristic) {
        (Strategy::BestFirst, Some(name)) => Some(name.parse::<Heuristic>()?),
        (_, Some(name)) => {
            debug!("Ignoring heuristic '{}' for uninformed {} search", name, strategy);
            None
        }
        (_, None) => None,
    };
    solve(initial_digits, strategy, heuristic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    const ONE_MOVE: [u8; 9] = [3, 1, 2, 0, 4, 5, 6, 7, 8];
    const THREE_MOVES: [u8; 9] = [1, 2, 5, 3, 4, 0, 6, 7, 8];

    fn ranked(f: f64, digits: &[u8], node: NodeId) -> Ranked {
        Ranked {
            f,
            board: Board::from_digits(digits).unwrap(),
            node,
        }
    }

    #[test]
    fn test_ranked_pops_lowest_f_then_smallest_key() {
        let mut heap = BinaryHeap::new();
        heap.push(ranked(5.0, &[1, 0, 2, 3], 0));
        heap.push(ranked(3.0, &[2, 1, 0, 3], 1));
        heap.push(ranked(3.0, &[1, 3, 2, 0], 2));
        heap.push(ranked(3.0, &[1, 3, 2, 0], 3));
        let order: Vec<NodeId> = std::iter::from_fn(|| heap.pop().map(|r| r.node)).collect();
        assert_eq!(order, vec![2, 3, 1, 0]);
    }

    #[test]
    fn test_arena_path_to_walks_parents() {
        let start = Board::from_digits(&THREE_MOVES).unwrap();
        let mid = start.apply(Move::Up).unwrap();
        let mut arena = NodeArena::default();
        let root = arena.add(SearchNode { board: start.clone(), parent: None, action: None, depth: 0 });
        let child = arena.add(SearchNode {
            board: mid.clone(),
            parent: Some(root),
            action: Some(Move::Up),
            depth: 1,
        });
        assert_eq!(arena.path_to(child), vec![start.clone(), mid]);
        assert_eq!(arena.path_to(root), vec![start]);
    }

    #[test]
    fn test_goal_start_expands_once() {
        for algorithm in Algorithm::ALL {
            let sol = solve_board(&Board::goal(3).unwrap(), algorithm);
            assert!(sol.solvable);
            assert_eq!(sol.path.len(), 1);
            assert_eq!((sol.cost, sol.nodes_expanded, sol.search_depth), (0, 1, 0), "{}", algorithm);
        }
    }

    #[test]
    fn test_bfs_one_move() {
        let sol = solve(&ONE_MOVE, Strategy::BreadthFirst, None).unwrap();
        assert_eq!((sol.cost, sol.nodes_expanded, sol.search_depth), (1, 4, 2));
        assert_eq!(sol.moves(), vec![Move::Up]);
    }

    #[test]
    fn test_best_first_three_moves() {
        for h in Heuristic::ALL {
            let sol = solve(&THREE_MOVES, Strategy::BestFirst, Some(h)).unwrap();
            assert_eq!((sol.cost, sol.nodes_expanded, sol.search_depth), (3, 4, 3), "{}", h);
            assert_eq!(sol.moves(), vec![Move::Up, Move::Left, Move::Left]);
        }
    }

    #[test]
    fn test_two_by_two_boards() {
        let sol = solve(&[3, 2, 1, 0], Strategy::BreadthFirst, None).unwrap();
        assert_eq!((sol.cost, sol.nodes_expanded, sol.search_depth), (6, 12, 6));
        let sol = solve(&[3, 2, 1, 0], Strategy::BestFirst, Some(Heuristic::Manhattan)).unwrap();
        assert_eq!((sol.cost, sol.nodes_expanded, sol.search_depth), (6, 7, 6));
        let sol = solve(&[1, 0, 2, 3], Strategy::BreadthFirst, None).unwrap();
        assert_eq!((sol.cost, sol.nodes_expanded, sol.search_depth), (1, 3, 2));
        assert!(!solve(&[1, 2, 3, 0], Strategy::DepthFirst, None).unwrap().solvable);
    }

    #[test]
    fn test_four_by_four_one_move() {
        let digits: Vec<u8> = [4, 1, 2, 3, 0].into_iter().chain(5..16).collect();
        let sol = solve(&digits, Strategy::BreadthFirst, None).unwrap();
        assert_eq!((sol.cost, sol.nodes_expanded, sol.search_depth), (1, 4, 2));
        let sol = solve(&digits, Strategy::BestFirst, Some(Heuristic::Euclidean)).unwrap();
        assert_eq!((sol.cost, sol.nodes_expanded, sol.search_depth), (1, 2, 1));
    }

    #[test]
    fn test_unsolvable_skips_search() {
        for algorithm in Algorithm::ALL {
            let board = Board::from_digits(&[1, 2, 3, 4, 5, 6, 8, 7, 0]).unwrap();
            assert_eq!(solve_board(&board, algorithm), Solution::unsolvable());
        }
    }

    #[test]
    fn test_solve_rejects_bad_requests() {
        assert_eq!(
            solve(&[1, 2, 3], Strategy::BreadthFirst, None),
            Err(SolveError::MalformedBoard(BoardError::NotSquare(3)))
        );
        assert_eq!(
            solve(&THREE_MOVES, Strategy::BestFirst, None),
            Err(SolveError::MissingHeuristic)
        );
    }

    #[test]
    fn test_solve_by_name() {
        let sol = solve_by_name(&THREE_MOVES, "A-Star", Some("Manhattan")).unwrap();
        assert_eq!(sol.cost, 3);
        let sol = solve_by_name(&ONE_MOVE, "bfs", Some("Nonsense")).unwrap();
        assert_eq!(sol.nodes_expanded, 4);
        assert_eq!(
            solve_by_name(&ONE_MOVE, "IDA*", None),
            Err(SolveError::UnknownStrategy("IDA*".to_string()))
        );
        assert_eq!(
            solve_by_name(&ONE_MOVE, "astar", Some("Hamming")),
            Err(SolveError::UnknownHeuristic("Hamming".to_string()))
        );
        assert_eq!(solve_by_name(&ONE_MOVE, "A-Star", None), Err(SolveError::MissingHeuristic));
    }

    #[test]
    fn test_names_round_trip() {
        for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst, Strategy::BestFirst] {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
        assert_eq!(Algorithm::BestFirst(Heuristic::Euclidean).to_string(), "A-Star (Euclidean)");
        assert_eq!(Algorithm::DepthFirst.to_string(), "DFS");
    }

    #[test_log::test]
    fn test_exhausted_frontier_reports_counts() {
        // Every neighbour of the root is already explored, so the frontier runs dry.
        let start = Board::from_digits(&THREE_MOVES).unwrap();
        let mut search = Search::new(&start, Algorithm::BreadthFirst);
        for (_, next) in start.successors() {
            search.explored.insert(next);
        }
        let sol = search.run();
        assert!(!sol.solvable);
        assert_eq!((sol.nodes_expanded, sol.search_depth), (1, 0));
    }
}
