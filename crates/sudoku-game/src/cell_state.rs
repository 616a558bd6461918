use sudoku_core::Digit;

/// The state of one cell from the session's point of view.
///
/// Givens come from the loaded problem and are distinguished from digits
/// the solver deduced, so a front end can render them differently and
/// explain where each deduced digit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// No digit yet.
    Empty,
    /// A clue from the problem.
    Given(Digit),
    /// A digit the solver placed, with the label of the technique that
    /// justified it.
    Deduced {
        /// The placed digit.
        digit: Digit,
        /// Label of the technique that justified the placement.
        technique: &'static str,
    },
}

impl CellState {
    /// Returns the digit in this cell, if any.
    #[must_use]
    pub const fn digit(self) -> Option<Digit> {
        match self {
            Self::Empty => None,
            Self::Given(digit) | Self::Deduced { digit, .. } => Some(digit),
        }
    }

    /// Returns `true` if this cell is a clue from the problem.
    #[must_use]
    pub const fn is_given(self) -> bool {
        matches!(self, Self::Given(_))
    }
}
