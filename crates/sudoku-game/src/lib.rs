//! Step-by-step solving sessions with cell attribution.
//!
//! This crate wraps a [`Grid`](sudoku_core::Grid) and a
//! [`TechniqueSolver`](sudoku_solver::TechniqueSolver) into a
//! [`SolveSession`] that a front end can drive one deduction at a time,
//! asking for every cell whether it was a given or deduced and by which
//! technique. Attribution is session state, kept out of the grid itself.

pub use self::{cell_state::CellState, session::SolveSession};

mod cell_state;
mod session;
