use crate::{Digit, DigitGrid, DigitSet, House, Position};

/// The solving grid: placed digits plus a candidate set per cell.
///
/// Candidates are a cached derived value, maintained incrementally: every
/// [`place`](Self::place) removes the placed digit from the candidate sets
/// of the other cells in the same row, column, and box. For every empty
/// cell the candidate set therefore equals exactly the digits 1-9 not
/// present in any of its houses; for every filled cell it is empty. Because
/// placement only ever removes candidates, the candidate state after
/// loading a puzzle does not depend on placement order.
///
/// `Grid` is mutated exclusively through [`place`](Self::place) and
/// [`load`](Self::load). Placement is unconditional: callers invoke it only
/// when the placement is logically justified, and conflicts are detected
/// after the fact by [`has_conflict`](Self::has_conflict) rather than
/// prevented or auto-corrected.
///
/// # Examples
///
/// ```
/// use sudoku_core::{Digit, DigitGrid, Grid, Position};
///
/// let puzzle: DigitGrid = "53..7....".parse()?;
/// let mut grid = Grid::new();
/// grid.load(&puzzle);
///
/// assert_eq!(grid.value(Position::new(0, 0)), Some(Digit::D5));
/// assert!(!grid.candidates(Position::new(2, 0)).contains(Digit::D7));
/// assert!(!grid.has_conflict());
/// assert!(!grid.is_complete());
/// # Ok::<(), sudoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    values: [Option<Digit>; 81],
    candidates: [DigitSet; 81],
    last_placed: Option<Position>,
}

impl Grid {
    /// Creates an empty grid: no values, every candidate set full.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: [None; 81],
            candidates: [DigitSet::FULL; 81],
            last_placed: None,
        }
    }

    /// Returns the digit placed at a position, or `None` if the cell is
    /// empty.
    #[must_use]
    pub const fn value(&self, pos: Position) -> Option<Digit> {
        self.values[pos.index()]
    }

    /// Returns the candidate set of a position.
    ///
    /// Filled cells have an empty candidate set.
    #[must_use]
    pub const fn candidates(&self, pos: Position) -> DigitSet {
        self.candidates[pos.index()]
    }

    /// Returns the most recently placed position, or `None` if nothing has
    /// been placed since the last [`load`](Self::load) or creation.
    ///
    /// This exists for display emphasis only; no solving logic reads it.
    #[must_use]
    pub const fn last_placed(&self) -> Option<Position> {
        self.last_placed
    }

    /// Places a digit at a position.
    ///
    /// Sets the value, empties the cell's own candidate set, and removes
    /// the digit from the candidate sets of every other cell sharing the
    /// row, the column, or the box. Unconditional: the caller is
    /// responsible for only placing logically justified digits.
    pub fn place(&mut self, pos: Position, digit: Digit) {
        self.values[pos.index()] = Some(digit);
        self.candidates[pos.index()] = DigitSet::EMPTY;
        for house in House::of(pos) {
            for peer in house.positions() {
                if peer != pos {
                    self.candidates[peer.index()].remove(digit);
                }
            }
        }
        self.last_placed = Some(pos);
    }

    /// Resets the grid and places every given of `puzzle` in row-major
    /// order.
    ///
    /// Loading the same puzzle twice yields identical grid state.
    pub fn load(&mut self, puzzle: &DigitGrid) {
        *self = Self::new();
        for pos in Position::ALL {
            if let Some(digit) = puzzle[pos] {
                self.place(pos, digit);
            }
        }
        self.last_placed = None;
    }

    /// Returns `true` if any digit appears twice among the placed cells of
    /// some row, column, or box.
    ///
    /// Conflicts are detected, never auto-corrected; it is up to the caller
    /// to report them.
    #[must_use]
    pub fn has_conflict(&self) -> bool {
        House::ALL.iter().any(|house| {
            let mut seen = DigitSet::EMPTY;
            house
                .positions()
                .iter()
                .filter_map(|pos| self.value(*pos))
                .any(|digit| {
                    let duplicate = seen.contains(digit);
                    seen.insert(digit);
                    duplicate
                })
        })
    }

    /// Returns `true` if every cell holds a digit and there is no conflict.
    ///
    /// A grid with conflicts is never complete, regardless of fill level.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some) && !self.has_conflict()
    }

    /// Returns the placed digits as a plain [`DigitGrid`].
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid[pos] = self.value(pos);
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&DigitGrid> for Grid {
    fn from(puzzle: &DigitGrid) -> Self {
        let mut grid = Self::new();
        grid.load(puzzle);
        grid
    }
}
