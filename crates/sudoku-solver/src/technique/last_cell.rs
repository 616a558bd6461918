use sudoku_core::{DigitSet, Grid, House};

use super::{BoxedTechnique, Deduction, Technique};

/// A technique that fills the single empty cell of a house.
///
/// When a row, column, or box has exactly one empty cell and the other
/// eight cells hold eight distinct digits, the missing digit is forced.
/// Houses are scanned rows first (y = 0 to 8), then columns, then boxes in
/// row-major order, and the first match wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct LastCell;

impl LastCell {
    /// Creates a new `LastCell` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for LastCell {
    fn name(&self) -> &'static str {
        "last cell"
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find(&self, grid: &Grid) -> Option<Deduction> {
        for house in House::ALL {
            let mut used = DigitSet::EMPTY;
            let mut empty = None;
            let mut empty_count = 0;
            for pos in house.positions() {
                match grid.value(pos) {
                    Some(digit) => used.insert(digit),
                    None => {
                        empty = Some(pos);
                        empty_count += 1;
                    }
                }
            }
            // Eight distinct digits placed: the complement is a single digit.
            if empty_count == 1
                && let Some(position) = empty
                && let Some(digit) = (!used).as_single()
            {
                let technique = match house {
                    House::Row { .. } => "last cell in row",
                    House::Column { .. } => "last cell in column",
                    House::Box { .. } => "last cell in block",
                };
                return Some(Deduction {
                    position,
                    digit,
                    technique,
                });
            }
        }
        None
    }
}
