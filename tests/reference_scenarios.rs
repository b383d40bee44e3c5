use rand::rngs::SmallRng;
use rand::SeedableRng;
use slider_solver::solvability::is_solvable;
use slider_solver::utils::board_from_digit_str;
use slider_solver::{solve, solve_board, solve_by_name, Algorithm, Board, Heuristic, Solution, Strategy};

const MANHATTAN: Algorithm = Algorithm::BestFirst(Heuristic::Manhattan);
const EUCLIDEAN: Algorithm = Algorithm::BestFirst(Heuristic::Euclidean);

fn board(s: &str) -> Board {
    board_from_digit_str(s).unwrap()
}

fn run(s: &str, algorithm: Algorithm) -> Solution {
    solve_board(&board(s), algorithm)
}

/// Asserts `(cost, nodes_expanded, search_depth)` and that the path is a legal walk to the goal.
fn assert_scenario(s: &str, algorithm: Algorithm, expected: (usize, usize, usize)) {
    let solution = run(s, algorithm);
    assert!(solution.solvable, "{} with {} should be solvable", s, algorithm);
    assert_eq!(
        (solution.cost, solution.nodes_expanded, solution.search_depth),
        expected,
        "{} with {}",
        s,
        algorithm
    );
    assert_valid_path(&board(s), &solution);
}

fn assert_valid_path(start: &Board, solution: &Solution) {
    assert_eq!(solution.path.first(), Some(start));
    assert!(solution.path.last().unwrap().is_goal());
    assert_eq!(solution.cost, solution.path.len() - 1);
    for pair in solution.path.windows(2) {
        assert!(
            pair[0].move_to(&pair[1]).is_some(),
            "{:?} -> {:?} is not a single move",
            pair[0],
            pair[1]
        );
    }
}

const SOLVABLE: [&str; 22] = [
    "312045678", "125340678", "125348670", "125348607", "125308647", "125038647", "125638047",
    "125638407", "125638470", "125630478", "123406758", "123456708", "867254301", "867254031",
    "876543210", "087654321", "806547231", "142658730", "102754863", "874562301", "150273468",
    "123456780",
];

const UNSOLVABLE: [&str; 4] = ["123456870", "812043765", "231054786", "182453760"];

#[test]
fn test_breadth_first_scenarios() {
    assert_scenario("312045678", Algorithm::BreadthFirst, (1, 4, 2));
    assert_scenario("125340678", Algorithm::BreadthFirst, (3, 13, 4));
    assert_scenario("125630478", Algorithm::BreadthFirst, (11, 861, 12));
    assert_scenario("142658730", Algorithm::BreadthFirst, (8, 183, 9));
    assert_scenario("150273468", Algorithm::BreadthFirst, (18, 26012, 19));
    assert_scenario("123456780", Algorithm::BreadthFirst, (22, 83783, 23));
    assert_scenario("874562301", Algorithm::BreadthFirst, (27, 176800, 28));
}

#[test]
fn test_manhattan_scenarios() {
    assert_scenario("312045678", MANHATTAN, (1, 2, 1));
    assert_scenario("125340678", MANHATTAN, (3, 4, 3));
    assert_scenario("142658730", MANHATTAN, (8, 11, 8));
    assert_scenario("125630478", MANHATTAN, (11, 24, 11));
    assert_scenario("150273468", MANHATTAN, (18, 222, 18));
    assert_scenario("123456780", MANHATTAN, (22, 769, 22));
    assert_scenario("874562301", MANHATTAN, (27, 2410, 27));
}

#[test]
fn test_euclidean_scenarios() {
    assert_scenario("125340678", EUCLIDEAN, (3, 4, 3));
    assert_scenario("142658730", EUCLIDEAN, (8, 11, 8));
    assert_scenario("125630478", EUCLIDEAN, (11, 35, 11));
    assert_scenario("150273468", EUCLIDEAN, (18, 279, 18));
    assert_scenario("123456780", EUCLIDEAN, (22, 1699, 22));
    assert_scenario("874562301", EUCLIDEAN, (27, 9417, 27));
}

#[test]
fn test_depth_first_scenarios() {
    assert_scenario("312045678", Algorithm::DepthFirst, (1, 181440, 67099));
    assert_scenario("125340678", Algorithm::DepthFirst, (61579, 117959, 66743));
    assert_scenario("125630478", Algorithm::DepthFirst, (38047, 149346, 66743));
    assert_scenario("150273468", Algorithm::DepthFirst, (36652, 150699, 66744));
    assert_scenario("123456780", Algorithm::DepthFirst, (24336, 25590, 24336));
    assert_scenario("874562301", Algorithm::DepthFirst, (67427, 95246, 67471));
}

#[test]
fn test_unsolvable_boards_for_every_strategy() {
    for s in UNSOLVABLE {
        for algorithm in Algorithm::ALL {
            let solution = run(s, algorithm);
            assert_eq!(solution, Solution::unsolvable(), "{} with {}", s, algorithm);
        }
    }
}

#[test]
fn test_optimal_strategies_agree_on_cost() {
    for s in SOLVABLE {
        let bfs = run(s, Algorithm::BreadthFirst);
        let manhattan = run(s, MANHATTAN);
        let euclidean = run(s, EUCLIDEAN);
        assert!(is_solvable(&board(s)));
        assert_eq!(bfs.cost, manhattan.cost, "{}", s);
        assert_eq!(bfs.cost, euclidean.cost, "{}", s);
        assert!(
            manhattan.nodes_expanded <= euclidean.nodes_expanded,
            "{}: manhattan expanded {} > euclidean {}",
            s,
            manhattan.nodes_expanded,
            euclidean.nodes_expanded
        );
        assert!(manhattan.nodes_expanded <= bfs.nodes_expanded, "{}", s);
        assert_valid_path(&board(s), &manhattan);
    }
}

#[test]
fn test_random_boards_properties() {
    let mut rng = SmallRng::seed_from_u64(2024);
    for _ in 0..12 {
        let start = Board::scrambled(3, 16, &mut rng).unwrap();
        let bfs = solve_board(&start, Algorithm::BreadthFirst);
        for algorithm in [MANHATTAN, EUCLIDEAN] {
            let informed = solve_board(&start, algorithm);
            assert!(informed.solvable);
            assert_eq!(informed.cost, bfs.cost, "{:?} with {}", start, algorithm);
            assert_valid_path(&start, &informed);
        }
        assert!(bfs.cost <= 16);
        assert_valid_path(&start, &bfs);
    }
}

#[test]
fn test_larger_boards_with_informed_search() {
    let mut rng = SmallRng::seed_from_u64(99);
    for _ in 0..5 {
        let start = Board::scrambled(4, 14, &mut rng).unwrap();
        let manhattan = solve_board(&start, MANHATTAN);
        let bfs = solve_board(&start, Algorithm::BreadthFirst);
        assert_eq!(manhattan.cost, bfs.cost);
        assert_valid_path(&start, &manhattan);
    }
}

#[test]
fn test_solve_is_idempotent() {
    let digits = [1, 2, 5, 6, 3, 0, 4, 7, 8];
    for (strategy, heuristic) in [
        (Strategy::BreadthFirst, None),
        (Strategy::DepthFirst, None),
        (Strategy::BestFirst, Some(Heuristic::Manhattan)),
        (Strategy::BestFirst, Some(Heuristic::Euclidean)),
    ] {
        let first = solve(&digits, strategy, heuristic).unwrap();
        let second = solve(&digits, strategy, heuristic).unwrap();
        assert_eq!(first, second, "{} should be deterministic", strategy);
    }
}

#[test]
fn test_strategies_are_independent() {
    let dfs = solve_by_name(&[1, 2, 5, 3, 4, 0, 6, 7, 8], "DFS", None).unwrap();
    let bfs = solve_by_name(&[1, 2, 5, 3, 4, 0, 6, 7, 8], "BFS", None).unwrap();
    let dfs_again = solve_by_name(&[1, 2, 5, 3, 4, 0, 6, 7, 8], "DFS", None).unwrap();
    assert_ne!(dfs.nodes_expanded, bfs.nodes_expanded);
    assert_eq!(dfs, dfs_again);
    assert_eq!(bfs.cost, 3);
}
