//! Example demonstrating Sudoku puzzle generation.
//!
//! # Usage
//!
//! Generate one puzzle from a random seed:
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Regenerate a specific puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- \
//!     --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Generate several puzzles at once:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 5
//! ```

use clap::Parser;
use sudoku_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use sudoku_solver::{TechniqueSolver, TechniqueSolverStats};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed to regenerate a specific puzzle (64 hex digits).
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let solver = TechniqueSolver::with_all_techniques();
    let generator = PuzzleGenerator::new(&solver);

    for i in 0..args.count {
        if i > 0 {
            println!();
        }
        let puzzle = match args.seed {
            Some(seed) => generator.generate_with_seed(seed),
            None => generator.generate(),
        };
        let stats = solve_stats(&solver, &puzzle);
        print_puzzle(&puzzle, &solver, &stats);
    }
}

fn solve_stats(solver: &TechniqueSolver, puzzle: &GeneratedPuzzle) -> TechniqueSolverStats {
    let mut grid = sudoku_core::Grid::from(&puzzle.problem);
    let (solved, stats) = solver.solve(&mut grid).unwrap();
    assert!(solved);
    stats
}

fn print_puzzle(puzzle: &GeneratedPuzzle, solver: &TechniqueSolver, stats: &TechniqueSolverStats) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Problem ({} clues):", puzzle.problem.placed_count());
    for line in puzzle.problem.to_string().lines() {
        println!("  {line}");
    }
    println!();
    println!("Solution:");
    for line in puzzle.solution.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Stats:");
    for (technique, count) in solver.techniques().iter().zip(stats.applications()) {
        println!("  {}: {count}", technique.name());
    }
    println!("  total: {}", stats.total_steps());
}
