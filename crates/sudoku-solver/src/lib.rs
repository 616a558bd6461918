//! Technique-based Sudoku solving.
//!
//! This crate advances a [`Grid`](sudoku_core::Grid) one logical deduction
//! at a time, using the techniques a human solver would apply, in a fixed
//! "simplest justification first" priority order. It never guesses: when no
//! technique applies, [`TechniqueSolver::step`] reports no progress and the
//! grid is left as-is, possibly unsolved.
//!
//! # Examples
//!
//! ```
//! use sudoku_core::{DigitGrid, Grid};
//! use sudoku_solver::TechniqueSolver;
//!
//! let puzzle: DigitGrid = "
//!     .3.6..4..
//!     .......6.
//!     .6...9..8
//!     ..1.26.4.
//!     3...5.7..
//!     2.6..3..1
//!     .8.19....
//!     ..534...7
//!     427...9..
//! "
//! .parse()
//! .unwrap();
//!
//! let solver = TechniqueSolver::with_all_techniques();
//! let mut grid = Grid::from(&puzzle);
//! let (solved, stats) = solver.solve(&mut grid)?;
//! println!("solved: {solved} in {} steps", stats.total_steps());
//! # Ok::<(), sudoku_solver::SolverError>(())
//! ```

pub use self::{
    error::SolverError,
    technique::Deduction,
    technique_solver::{TechniqueSolver, TechniqueSolverStats},
};

mod error;
pub mod technique;
mod technique_solver;

#[cfg(test)]
mod testing;
