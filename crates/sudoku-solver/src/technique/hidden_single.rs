use sudoku_core::{Digit, Grid, House, Position};

use super::{BoxedTechnique, Deduction, Technique};

/// Returns the only cell of `house` carrying `digit` as a candidate, if
/// there is exactly one.
///
/// Filled cells have empty candidate sets, so they never count.
fn sole_candidate_position(grid: &Grid, house: House, digit: Digit) -> Option<Position> {
    let mut found = None;
    for pos in house.positions() {
        if grid.candidates(pos).contains(digit) {
            if found.is_some() {
                return None;
            }
            found = Some(pos);
        }
    }
    found
}

/// A technique that finds hidden singles in rows and columns.
///
/// A hidden single occurs when a digit has only one possible cell left in
/// a house, even though that cell may carry other candidates too. Rows are
/// scanned first (y = 0 to 8, digits 1 to 9 within each row), then columns
/// the same way; the first match wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingleLine;

impl HiddenSingleLine {
    /// Creates a new `HiddenSingleLine` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for HiddenSingleLine {
    fn name(&self) -> &'static str {
        "hidden single (line)"
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find(&self, grid: &Grid) -> Option<Deduction> {
        for (houses, technique) in [
            (House::ROWS, "hidden single in row"),
            (House::COLUMNS, "hidden single in column"),
        ] {
            for house in houses {
                for digit in Digit::ALL {
                    if let Some(position) = sole_candidate_position(grid, house, digit) {
                        return Some(Deduction {
                            position,
                            digit,
                            technique,
                        });
                    }
                }
            }
        }
        None
    }
}

/// A technique that finds hidden singles in 3x3 boxes.
///
/// Same rule as [`HiddenSingleLine`], scoped to boxes. Scanned after the
/// line variants and after [`NakedSingle`](super::NakedSingle), in
/// box-row-major order, digits 1 to 9 within each box.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingleBlock;

impl HiddenSingleBlock {
    /// Creates a new `HiddenSingleBlock` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for HiddenSingleBlock {
    fn name(&self) -> &'static str {
        "hidden single (block)"
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find(&self, grid: &Grid) -> Option<Deduction> {
        for house in House::BOXES {
            for digit in Digit::ALL {
                if let Some(position) = sole_candidate_position(grid, house, digit) {
                    return Some(Deduction {
                        position,
                        digit,
                        technique: "hidden single in block",
                    });
                }
            }
        }
        None
    }
}
