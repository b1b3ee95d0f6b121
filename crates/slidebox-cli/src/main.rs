//! Command-line front end for the sliding block puzzle solver.
//!
//! Loads a puzzle file, then either searches for a solution or plays a random walk.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin slidebox
//! ```
//!
//! Solve a specific puzzle depth-first, printing every intermediate board:
//!
//! ```sh
//! cargo run --bin slidebox -- --file assets/SBP-level1.txt --strategy dfs --show-boards
//! ```
//!
//! Play a reproducible random walk of 10 moves:
//!
//! ```sh
//! cargo run --bin slidebox -- --strategy walk --steps 10 --seed 42
//! ```
//!
//! Debug output is enabled with `--verbose`; `RUST_LOG` takes precedence.

use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;
use slidebox_core::{Board, Move};
use slidebox_solver::{
    BoxedSearch, BreadthFirst, DeadEndPolicy, DepthFirst, RandomWalk, SearchConfig,
    SearchOutcome, SearchStats, Solver, replay,
};

use self::error::CliError;

mod error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// Breadth-first search; finds a shortest solution.
    Bfs,
    /// Depth-first search with backtracking.
    Dfs,
    /// Random legal moves, no search.
    Walk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DeadEnd {
    /// Treat the board as an exhausted branch.
    Skip,
    /// Stop the search with an error.
    Abort,
}

impl From<DeadEnd> for DeadEndPolicy {
    fn from(value: DeadEnd) -> Self {
        match value {
            DeadEnd::Skip => Self::Skip,
            DeadEnd::Abort => Self::Abort,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file to load.
    #[arg(short, long, value_name = "PATH", default_value = "./assets/SBP-level0.txt")]
    file: PathBuf,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,

    /// How to explore the puzzle.
    #[arg(short, long, value_name = "STRATEGY", default_value = "bfs")]
    strategy: Strategy,

    /// Maximum number of moves in a random walk.
    #[arg(long, value_name = "N", default_value_t = 3)]
    steps: usize,

    /// Seed for the random walk. A random seed is used when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Abort the search after visiting this many nodes.
    #[arg(long, value_name = "N")]
    node_limit: Option<usize>,

    /// What to do when a board without legal moves is reached.
    #[arg(long, value_name = "POLICY", default_value = "skip")]
    dead_end: DeadEnd,

    /// Forget boards visited by a failed depth-first branch.
    #[arg(long, value_name = "BOOL", default_value_t = true, action = clap::ArgAction::Set)]
    forget_on_backtrack: bool,

    /// Print every intermediate board of the solution.
    #[arg(long)]
    show_boards: bool,
}

fn main() {
    better_panic::install();
    let args = Args::parse();
    init_logger(args.verbose);

    if let Err(err) = run(&args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: &Args) -> Result<(), CliError> {
    let path = resolve_input_file(&args.file)?;
    log::debug!("loading puzzle from {}", path.display());
    let text = fs::read_to_string(&path).map_err(|source| CliError::Read {
        path: path.clone(),
        source,
    })?;
    let board = Board::load(&text)?;

    println!("{board}");

    match args.strategy {
        Strategy::Bfs => solve(args, Box::new(BreadthFirst), &board),
        Strategy::Dfs => solve(
            args,
            Box::new(DepthFirst::new().with_forget_on_backtrack(args.forget_on_backtrack)),
            &board,
        ),
        Strategy::Walk => {
            walk(args, board);
            Ok(())
        }
    }
}

fn resolve_input_file(file: &Path) -> Result<PathBuf, CliError> {
    let expanded = if file.is_absolute() {
        file.to_path_buf()
    } else {
        env::current_dir()
            .map_err(|source| CliError::Resolve {
                path: file.to_path_buf(),
                source,
            })?
            .join(file)
    };
    expanded.canonicalize().map_err(|source| CliError::Resolve {
        path: file.to_path_buf(),
        source,
    })
}

fn solve(args: &Args, search: BoxedSearch, board: &Board) -> Result<(), CliError> {
    let solver = Solver::new(search).with_config(SearchConfig {
        dead_end: args.dead_end.into(),
        node_limit: args.node_limit,
    });
    let (outcome, stats) = solver.solve(board)?;
    match outcome {
        SearchOutcome::Solved(moves) => {
            print_solution(board, &moves, args.show_boards)?;
            print_stats(&stats);
            println!("Solution length: {}", moves.len());
        }
        SearchOutcome::NoSolution => {
            println!("No solution found.");
            print_stats(&stats);
        }
    }
    Ok(())
}

fn print_solution(board: &Board, moves: &[Move], show_boards: bool) -> Result<(), CliError> {
    let boards = replay(board, moves)?;
    for (mv, board) in moves.iter().zip(&boards) {
        println!("{mv}");
        if show_boards {
            println!("{board}");
        }
    }
    Ok(())
}

fn print_stats(stats: &SearchStats) {
    println!("Nodes visited: {}", stats.nodes_visited());
    println!("Elapsed: {:.3?}", stats.elapsed());
}

fn walk(args: &Args, board: Board) {
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("random walk seed: {seed}");
    let mut rng = Pcg64Mcg::seed_from_u64(seed);

    let mut applied = 0;
    for step in RandomWalk::new(board, args.steps, &mut rng) {
        if let Some(mv) = step.applied {
            applied += 1;
            println!("{mv}");
            println!("{}", step.board);
        }
        if step.board.is_solved() {
            println!("Solved after {applied} random moves.");
            return;
        }
    }
    println!("Walk ended after {applied} moves.");
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["slidebox"]);
        assert_eq!(args.file, PathBuf::from("./assets/SBP-level0.txt"));
        assert_eq!(args.strategy, Strategy::Bfs);
        assert_eq!(args.steps, 3);
        assert_eq!(args.dead_end, DeadEnd::Skip);
        assert!(args.forget_on_backtrack);
        assert!(!args.verbose);
    }

    #[test]
    fn test_search_flags() {
        let args = Args::parse_from([
            "slidebox",
            "-s",
            "dfs",
            "--dead-end",
            "abort",
            "--forget-on-backtrack",
            "false",
            "--node-limit",
            "100",
        ]);
        assert_eq!(args.strategy, Strategy::Dfs);
        assert_eq!(DeadEndPolicy::from(args.dead_end), DeadEndPolicy::Abort);
        assert!(!args.forget_on_backtrack);
        assert_eq!(args.node_limit, Some(100));
    }

    #[test]
    fn test_missing_file_fails_to_resolve() {
        let err = resolve_input_file(Path::new("no/such/puzzle.txt")).unwrap_err();
        assert!(err.is_resolve());
    }
}
