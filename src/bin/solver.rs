use anyhow::Context;
use clap::Parser;
use log::info;
use slider_solver::heuristics::Heuristic;
use slider_solver::solver::{solve_board, Algorithm, Strategy};
use slider_solver::utils::board_from_digit_str;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Board tiles in row-major order, e.g. "1,2,5,3,4,0,6,7,8" or "125340678" (0 is the blank)
    board: String,

    /// Search strategy: DFS, BFS or A-Star
    #[clap(short, long, default_value = "A-Star")]
    strategy: Strategy,

    /// Heuristic for A-Star: Manhattan or Euclidean
    #[clap(long, default_value = "Manhattan")]
    heuristic: Heuristic,

    /// Print every board along the solution path
    #[clap(long)]
    show_path: bool,

    /// Print the solution as JSON instead of text
    #[clap(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let board = board_from_digit_str(&args.board)
        .with_context(|| format!("Failed to parse board '{}'", args.board))?;
    let algorithm = Algorithm::resolve(args.strategy, Some(args.heuristic))?;

    info!("Solving {}x{} board with {}", board.side(), board.side(), algorithm);
    let solution = solve_board(&board, algorithm);

    if args.json {
        let json = serde_json::to_string_pretty(&solution).context("Failed to serialize solution")?;
        println!("{}", json);
        return Ok(());
    }

    println!("Initial board state:\n{}\n", board);
    if !solution.solvable {
        println!("No solution :(\n");
        println!("{}", solution);
        return Ok(());
    }

    println!("Solution exists!\n");
    println!("{}\n", solution);

    let moves = solution.moves();
    if moves.is_empty() {
        println!("Board is already solved.");
    } else {
        let line: Vec<String> = moves.iter().map(|m| m.to_char().to_string()).collect();
        println!("Blank moves ({}): {}", moves.len(), line.join(""));
    }

    if args.show_path {
        for (i, (pair, m)) in solution.path.windows(2).zip(&moves).enumerate() {
            // The tile that moved now sits where the blank used to be.
            let (r, c) = pair[0].blank();
            let moved = pair[1].tile_at(r, c);
            println!(
                "\nState {} ({}):\n{}",
                i + 1,
                m,
                pair[1].to_string_with_highlight(Some(moved))
            );
        }
    }

    Ok(())
}
