//! Test harness for technique implementations.

use std::str::FromStr as _;

use sudoku_core::{Digit, DigitGrid, Grid, Position};

use crate::technique::{Deduction, Technique};

/// A test harness for verifying technique implementations.
///
/// The tester holds a grid, applies a technique's first deduction to it,
/// and offers chained assertions about what (if anything) was placed.
/// Assertion methods panic with `#[track_caller]` so failures point at the
/// test, not at this module.
#[derive(Debug)]
pub struct TechniqueTester {
    grid: Grid,
    last: Option<Deduction>,
}

impl TechniqueTester {
    /// Creates a new tester from an initial grid state.
    pub fn new(grid: Grid) -> Self {
        Self { grid, last: None }
    }

    /// Creates a new tester from a grid string.
    ///
    /// The format matches [`DigitGrid::from_str`]: one row per line, digits
    /// for filled cells, any other character for empty ones, short rows
    /// padded with empties.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a grid.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        let grid = DigitGrid::from_str(s).unwrap();
        Self::new(Grid::from(&grid))
    }

    /// Gives mutable access to the grid, for test setups that place digits
    /// directly.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Runs the technique once and applies its deduction, if any.
    #[track_caller]
    pub fn apply_once<T>(mut self, technique: &T) -> Self
    where
        T: Technique + ?Sized,
    {
        self.last = technique.find(&self.grid);
        if let Some(deduction) = self.last {
            self.grid.place(deduction.position, deduction.digit);
            assert!(
                !self.grid.has_conflict(),
                "{deduction} left the grid conflicted"
            );
        }
        self
    }

    /// Asserts that the last application placed `digit` at `pos`.
    #[track_caller]
    pub fn assert_placed(self, pos: Position, digit: Digit) -> Self {
        let Some(deduction) = self.last else {
            panic!("expected a deduction placing {digit} at {pos}, but the technique found none");
        };
        assert_eq!(
            (deduction.position, deduction.digit),
            (pos, digit),
            "expected {digit} at {pos}, but the deduction was: {deduction}"
        );
        assert_eq!(self.grid.value(pos), Some(digit));
        self
    }

    /// Asserts the label of the last deduction.
    #[track_caller]
    pub fn assert_technique(self, technique: &str) -> Self {
        let Some(deduction) = self.last else {
            panic!("expected a {technique:?} deduction, but the technique found none");
        };
        assert_eq!(
            deduction.technique, technique,
            "unexpected label for deduction: {deduction}"
        );
        self
    }

    /// Asserts that the last application found no deduction.
    #[track_caller]
    pub fn assert_no_step(self) -> Self {
        if let Some(deduction) = self.last {
            panic!("expected no deduction, but the technique found: {deduction}");
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::technique::BoxedTechnique;

    #[derive(Debug)]
    struct NoOp;

    impl Technique for NoOp {
        fn name(&self) -> &'static str {
            "no-op"
        }

        fn clone_box(&self) -> BoxedTechnique {
            Box::new(NoOp)
        }

        fn find(&self, _grid: &Grid) -> Option<Deduction> {
            None
        }
    }

    #[derive(Debug)]
    struct PlaceD1At00;

    impl Technique for PlaceD1At00 {
        fn name(&self) -> &'static str {
            "place-d1-at-00"
        }

        fn clone_box(&self) -> BoxedTechnique {
            Box::new(PlaceD1At00)
        }

        fn find(&self, grid: &Grid) -> Option<Deduction> {
            let position = Position::new(0, 0);
            (grid.value(position).is_none()).then_some(Deduction {
                position,
                digit: Digit::D1,
                technique: "place-d1-at-00",
            })
        }
    }

    #[test]
    fn applies_and_asserts_placement() {
        TechniqueTester::new(Grid::new())
            .apply_once(&PlaceD1At00)
            .assert_placed(Position::new(0, 0), Digit::D1)
            .assert_technique("place-d1-at-00");
    }

    #[test]
    fn reports_no_step() {
        TechniqueTester::new(Grid::new())
            .apply_once(&NoOp)
            .assert_no_step();
    }

    #[test]
    #[should_panic(expected = "expected a deduction")]
    fn assert_placed_panics_without_deduction() {
        TechniqueTester::new(Grid::new())
            .apply_once(&NoOp)
            .assert_placed(Position::new(0, 0), Digit::D1);
    }

    #[test]
    #[should_panic(expected = "expected no deduction")]
    fn assert_no_step_panics_on_deduction() {
        TechniqueTester::new(Grid::new())
            .apply_once(&PlaceD1At00)
            .assert_no_step();
    }
}
