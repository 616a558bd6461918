//! Solvability-preserving Sudoku puzzle generation.
//!
//! Generation works backwards from a full solution: take one fixed solved
//! grid, scramble it with symmetry transformations (digit relabeling plus
//! row and column swaps within a band), then remove clues one at a time,
//! keeping the puzzle solvable by a [`TechniqueSolver`] after every removal.
//! The produced puzzle is therefore solvable without guessing by exactly the
//! techniques the caller configured, and its solution is known for free.
//!
//! All randomness comes from a [`PuzzleSeed`], so the same seed and solver
//! always yield the same puzzle.
//!
//! # Examples
//!
//! ```
//! use sudoku_generator::PuzzleGenerator;
//! use sudoku_solver::TechniqueSolver;
//!
//! let solver = TechniqueSolver::with_all_techniques();
//! let generator = PuzzleGenerator::new(&solver);
//!
//! let puzzle = generator.generate();
//! println!("{}", puzzle.problem);
//! assert!(puzzle.solution.is_valid_solution());
//! ```

use log::{debug, trace};
use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sudoku_core::DigitGrid;
use sudoku_solver::TechniqueSolver;

pub use self::seed::{ParseSeedError, PuzzleSeed};

pub mod scramble;

mod reduce;
mod seed;

/// Scramble rounds applied to the fixed starting solution. Each round
/// relabels one digit pair and swaps one row pair and one column pair.
const SCRAMBLE_ROUNDS: usize = 16;

/// A generated puzzle, with its solution and the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle to hand to a player.
    pub problem: DigitGrid,
    /// The full solution the problem was carved from.
    pub solution: DigitGrid,
    /// The seed that deterministically produced both.
    pub seed: PuzzleSeed,
}

/// A puzzle generator driven by a technique solver.
///
/// The solver defines what "solvable" means during clue removal: every
/// generated problem can be solved start to finish by that solver's
/// techniques alone. A solver with fewer techniques therefore yields easier
/// puzzles (more clues must stay).
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator<'a> {
    solver: &'a TechniqueSolver,
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator that checks solvability with `solver`.
    #[must_use]
    pub const fn new(solver: &'a TechniqueSolver) -> Self {
        Self { solver }
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle identified by `seed`.
    ///
    /// Deterministic: the same seed and the same solver configuration
    /// always produce the same problem and solution.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = Pcg64::from_seed(seed.into_bytes());

        let mut solution = scramble::seed_solution();
        for _ in 0..SCRAMBLE_ROUNDS {
            let (a, b) = scramble::random_digit_pair(&mut rng);
            scramble::swap_digits(&mut solution, a, b);
            let (y0, y1) = scramble::random_lines_in_band(&mut rng);
            scramble::swap_rows(&mut solution, y0, y1);
            let (x0, x1) = scramble::random_lines_in_band(&mut rng);
            scramble::swap_columns(&mut solution, x0, x1);
        }
        debug_assert!(solution.is_valid_solution());

        let mut problem = solution.clone();
        while let Some(pos) = reduce::remove_random_one(self.solver, &mut problem, &mut rng) {
            trace!("removed clue at {pos}, {} left", problem.placed_count());
        }
        debug!(
            "generated puzzle with {} clues from seed {seed}",
            problem.placed_count()
        );

        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }

    /// Returns `true` if this generator's solver can solve `problem`
    /// without guessing.
    #[must_use]
    pub fn can_solve(&self, problem: &DigitGrid) -> bool {
        reduce::can_solve(self.solver, problem)
    }
}
