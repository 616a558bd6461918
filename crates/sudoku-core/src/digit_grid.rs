use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{Digit, House, Position};

/// Error parsing a [`DigitGrid`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// A row contained more than 9 cells.
    #[display("row {row} has {len} cells, expected at most 9")]
    RowTooLong {
        /// Zero-based row number.
        row: usize,
        /// Number of cells found.
        len: usize,
    },
    /// The text contained more than 9 rows.
    #[display("grid has {rows} rows, expected at most 9")]
    TooManyRows {
        /// Number of rows found.
        rows: usize,
    },
}

/// A plain 9x9 grid of placed digits, with no candidate state.
///
/// This is the ingest and render form of a board: what a puzzle looks like
/// before the engine derives candidates from it, and what callers get back
/// when they ask for the current placements.
///
/// # Text form
///
/// [`FromStr`] reads up to 9 lines of up to 9 cells each. Characters `1`-`9`
/// are placed digits; every other character (including `0`, `.`, `_`, and
/// space) is an empty cell. Missing cells and missing rows are empty.
/// [`Display`] writes 9 lines of 9 characters using `.` for empty cells,
/// which round-trips through [`FromStr`].
///
/// # Examples
///
/// ```
/// use sudoku_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = "
///     .3.6..4..
///     .......6.
///     .6...9..8
///     ..1.26.4.
///     3...5.7..
///     2.6..3..1
///     .8.19....
///     ..534...7
///     427...9..
/// "
/// .parse()?;
///
/// assert_eq!(grid[Position::new(1, 0)], Some(Digit::D3));
/// assert_eq!(grid[Position::new(0, 0)], None);
/// # Ok::<(), sudoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the number of placed digits.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Returns an iterator over the positions of all placed digits, in
    /// row-major order.
    pub fn placed_positions(&self) -> impl Iterator<Item = Position> {
        Position::ALL.into_iter().filter(|pos| self[*pos].is_some())
    }

    /// Returns `true` if every cell is filled and no digit repeats within a
    /// row, column, or box: the grid is a valid complete solution.
    #[must_use]
    pub fn is_valid_solution(&self) -> bool {
        if self.placed_count() != 81 {
            return false;
        }
        House::ALL.iter().all(|house| {
            let mut seen = crate::DigitSet::EMPTY;
            house
                .positions()
                .iter()
                .filter_map(|pos| self[*pos])
                .all(|digit| {
                    let fresh = !seen.contains(digit);
                    seen.insert(digit);
                    fresh
                })
        })
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Option<Digit> {
        &mut self.cells[pos.index()]
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            for x in 0..9 {
                match self[Position::new(x, y)] {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_str(".")?,
                }
            }
            if y < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .skip_while(|line| line.is_empty())
            .collect();
        let rows = match rows.iter().rposition(|line| !line.is_empty()) {
            Some(last) => &rows[..=last],
            None => &[],
        };
        if rows.len() > 9 {
            return Err(ParseGridError::TooManyRows { rows: rows.len() });
        }

        let mut grid = Self::new();
        for (y, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len > 9 {
                return Err(ParseGridError::RowTooLong { row: y, len });
            }
            for (x, c) in row.chars().enumerate() {
                if let Some(n) = c.to_digit(10).filter(|n| (1..=9).contains(n)) {
                    #[expect(clippy::cast_possible_truncation)]
                    let digit = Digit::from_value(n as u8);
                    #[expect(clippy::cast_possible_truncation)]
                    let pos = Position::new(x as u8, y as u8);
                    grid[pos] = Some(digit);
                }
            }
        }
        Ok(grid)
    }
}
