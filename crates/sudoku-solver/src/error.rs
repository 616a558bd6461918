use derive_more::{Display, Error};

/// Error raised by the technique solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolverError {
    /// Applying a deduction left the grid with a duplicate digit in a row,
    /// column, or box.
    ///
    /// The deduction techniques are sound, so this can only happen when the
    /// input grid was already inconsistent.
    #[display("applied deduction left the grid conflicted")]
    Contradiction,
}
