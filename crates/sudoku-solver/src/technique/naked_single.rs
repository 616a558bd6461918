use sudoku_core::{Digit, Grid, Position};

use super::{BoxedTechnique, Deduction, Technique};

/// A technique that fills cells with exactly one remaining candidate.
///
/// A naked single is a cell whose candidate set has shrunk to a single
/// digit: nothing else can legally go there. The scan is digit-major
/// (digits 1 to 9 outer, cells in row-major order inner), so among several
/// naked singles the one with the smallest digit fires first.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates a new `NakedSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for NakedSingle {
    fn name(&self) -> &'static str {
        "naked single"
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find(&self, grid: &Grid) -> Option<Deduction> {
        for digit in Digit::ALL {
            for position in Position::ALL {
                if grid.candidates(position).as_single() == Some(digit) {
                    return Some(Deduction {
                        position,
                        digit,
                        technique: "naked single",
                    });
                }
            }
        }
        None
    }
}
