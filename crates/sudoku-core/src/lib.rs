//! Core data structures for the Sudoku engine.
//!
//! This crate owns the solving-relevant state of a 9x9 Sudoku board and
//! nothing else: no rendering, no input handling, no solving strategy.
//!
//! # Overview
//!
//! - [`Digit`]: type-safe digits 1-9
//! - [`DigitSet`]: a 9-bit set of candidate digits
//! - [`Position`]: a board coordinate (x, y) with row-major indexing
//! - [`House`]: a row, column, or 3x3 box as an explicit group of 9 cells
//! - [`DigitGrid`]: plain placed digits, the ingest/render form
//! - [`Grid`]: placed digits plus per-cell candidate sets, maintained
//!   incrementally on every placement
//!
//! # Examples
//!
//! ```
//! use sudoku_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid.place(Position::new(4, 4), Digit::D5);
//!
//! // 5 is no longer a candidate anywhere in row 4, column 4, or the center box
//! assert!(!grid.candidates(Position::new(4, 0)).contains(Digit::D5));
//! assert!(!grid.candidates(Position::new(0, 4)).contains(Digit::D5));
//! assert!(!grid.candidates(Position::new(3, 3)).contains(Digit::D5));
//! ```

pub use self::{
    digit::Digit,
    digit_grid::{DigitGrid, ParseGridError},
    digit_set::DigitSet,
    grid::Grid,
    house::House,
    position::Position,
};

mod digit;
mod digit_grid;
mod digit_set;
mod grid;
mod house;
mod position;
