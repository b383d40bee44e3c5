use clap::Parser;
use log::{info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use slider_solver::engine::Board;
use slider_solver::solver::{solve_board, Algorithm};
use std::collections::HashMap;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare search strategies on seeded random boards", long_about = None)]
struct Args {
    /// Number of random boards to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: usize,

    /// Random blank moves applied to the goal board to scramble it
    #[clap(long, default_value_t = 30)]
    scramble: usize,

    /// Seed of the first board; board i uses seed + i
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Board side
    #[clap(long, default_value_t = 3)]
    size: usize,

    /// Leave out depth-first search, which can expand the whole state space
    #[clap(long)]
    skip_dfs: bool,
}

#[derive(Default)]
struct Totals {
    runs: usize,
    cost: usize,
    nodes_expanded: usize,
    search_depth: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let algorithms: Vec<Algorithm> = Algorithm::ALL
        .into_iter()
        .filter(|a| !(args.skip_dfs && *a == Algorithm::DepthFirst))
        .collect();

    let mut totals: HashMap<Algorithm, Totals> = HashMap::new();

    info!("Starting strategy evaluation for {} boards...", args.boards);

    for board_idx in 0..args.boards {
        let current_seed = args.seed + board_idx as u64;
        let mut rng = SmallRng::seed_from_u64(current_seed);
        let board = Board::scrambled(args.size, args.scramble, &mut rng)?;

        println!("\nEvaluating Board {} (Seed: {})\n{}", board_idx, current_seed, board);

        let mut optimal_cost: Option<usize> = None;
        for algorithm in &algorithms {
            let solution = solve_board(&board, *algorithm);
            println!(
                "  Strategy: {:<20} Cost: {:<8} Expanded: {:<8} Depth: {}",
                algorithm.to_string(),
                solution.cost,
                solution.nodes_expanded,
                solution.search_depth
            );

            if !matches!(algorithm, Algorithm::DepthFirst) {
                match optimal_cost {
                    None => optimal_cost = Some(solution.cost),
                    Some(cost) if cost != solution.cost => warn!(
                        "{} found cost {} but another optimal strategy found {} on board {}",
                        algorithm, solution.cost, cost, board_idx
                    ),
                    Some(_) => {}
                }
            }

            let entry = totals.entry(*algorithm).or_default();
            entry.runs += 1;
            entry.cost += solution.cost;
            entry.nodes_expanded += solution.nodes_expanded;
            entry.search_depth += solution.search_depth;
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", args.boards);
    println!("\n--- Averages ---");

    for algorithm in &algorithms {
        let Some(t) = totals.get(algorithm).filter(|t| t.runs > 0) else {
            println!("Strategy {}: No runs recorded.", algorithm);
            continue;
        };
        let runs = t.runs as f64;
        println!(
            "Strategy {:<20}: Cost = {:.2}, Expanded = {:.2}, Depth = {:.2}",
            algorithm.to_string(),
            t.cost as f64 / runs,
            t.nodes_expanded as f64 / runs,
            t.search_depth as f64 / runs
        );
    }

    Ok(())
}
