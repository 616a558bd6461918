//! Sudoku solving techniques.
//!
//! Each technique implements the [`Technique`] trait: a pure scan of the
//! grid that either names the next justified placement as a [`Deduction`]
//! or reports that it has nothing to contribute. Techniques never mutate
//! the grid themselves; the [`TechniqueSolver`](crate::TechniqueSolver)
//! applies the deduction it picks.

use std::fmt::{self, Debug, Display};

use sudoku_core::{Digit, Grid, Position};

pub use self::{
    hidden_single::{HiddenSingleBlock, HiddenSingleLine},
    last_cell::LastCell,
    naked_single::NakedSingle,
};

mod hidden_single;
mod last_cell;
mod naked_single;

/// A single justified placement found by a technique.
///
/// `technique` is the human-readable label of the rule that fired, more
/// specific than [`Technique::name`] where a technique covers several
/// house kinds (for example `"last cell in row"` vs. `"last cell in
/// block"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deduction {
    /// The cell to fill.
    pub position: Position,
    /// The digit forced into that cell.
    pub digit: Digit,
    /// Human-readable label of the rule that fired.
    pub technique: &'static str,
}

impl Display for Deduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {}", self.technique, self.digit, self.position)
    }
}

/// A trait representing a Sudoku solving technique.
///
/// Implementations scan the grid in a fixed, documented order and return
/// the first applicable deduction, so repeated calls on an unchanged grid
/// always report the same step.
pub trait Technique: Debug {
    /// Returns the name of the technique.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the technique.
    fn clone_box(&self) -> BoxedTechnique;

    /// Finds the first applicable deduction, without mutating the grid.
    ///
    /// Returns `None` when this technique has no applicable instance
    /// anywhere on the board.
    fn find(&self, grid: &Grid) -> Option<Deduction>;
}

/// A boxed technique.
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Returns all techniques, in priority order.
///
/// The order is deliberate: each solving step applies the first technique
/// that matches, so deeper techniques only run when no cheaper justification
/// exists anywhere on the board. This mirrors how a person solves the
/// puzzle, simplest deduction first:
///
/// 1. [`LastCell`] - a row, column, or box with a single empty cell
/// 2. [`HiddenSingleLine`] - a digit with a single possible cell in a row
///    or column
/// 3. [`NakedSingle`] - a cell with a single remaining candidate
/// 4. [`HiddenSingleBlock`] - a digit with a single possible cell in a box
#[must_use]
pub fn all_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(LastCell::new()),
        Box::new(HiddenSingleLine::new()),
        Box::new(NakedSingle::new()),
        Box::new(HiddenSingleBlock::new()),
    ]
}
