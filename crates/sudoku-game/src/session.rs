use sudoku_core::{Digit, DigitGrid, DigitSet, Grid, Position};
use sudoku_solver::{Deduction, SolverError, TechniqueSolver, TechniqueSolverStats};

use crate::CellState;

/// A step-by-step solving session over one puzzle.
///
/// The session owns the solving grid and a solver, advances one deduction
/// per [`step`](Self::step), and remembers for every filled cell whether it
/// was a given or deduced, and by which technique. The underlying grid
/// knows nothing of this attribution; it lives here.
///
/// # Examples
///
/// ```
/// use sudoku_core::DigitGrid;
/// use sudoku_game::SolveSession;
/// use sudoku_solver::TechniqueSolver;
///
/// let problem: DigitGrid = "
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
/// let mut session = SolveSession::new(&problem, TechniqueSolver::with_all_techniques());
/// while let Some(deduction) = session.step()? {
///     println!("{deduction}");
/// }
/// assert!(session.is_complete());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct SolveSession {
    solver: TechniqueSolver,
    grid: Grid,
    cells: [CellState; 81],
    stats: TechniqueSolverStats,
    last: Option<Deduction>,
}

impl SolveSession {
    /// Creates a session over `problem`, marking its clues as givens.
    #[must_use]
    pub fn new(problem: &DigitGrid, solver: TechniqueSolver) -> Self {
        let grid = Grid::from(problem);
        let mut cells = [CellState::Empty; 81];
        for pos in problem.placed_positions() {
            if let Some(digit) = problem[pos] {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        let stats = solver.new_stats();
        Self {
            solver,
            grid,
            cells,
            stats,
            last: None,
        }
    }

    /// Returns the state of a cell: empty, given, or deduced with its
    /// technique label.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Returns `true` if the cell is a clue from the problem.
    #[must_use]
    pub const fn is_given(&self, pos: Position) -> bool {
        self.cell(pos).is_given()
    }

    /// Returns the digit at a position, given or deduced.
    #[must_use]
    pub const fn value(&self, pos: Position) -> Option<Digit> {
        self.grid.value(pos)
    }

    /// Returns the candidate set of a position.
    #[must_use]
    pub const fn candidates(&self, pos: Position) -> DigitSet {
        self.grid.candidates(pos)
    }

    /// Returns the most recent deduction, or `None` before the first step.
    #[must_use]
    pub const fn last_deduction(&self) -> Option<Deduction> {
        self.last
    }

    /// Returns the most recently filled position.
    #[must_use]
    pub const fn last_placed(&self) -> Option<Position> {
        self.grid.last_placed()
    }

    /// Returns `true` if some digit repeats within a row, column, or box.
    #[must_use]
    pub fn has_conflict(&self) -> bool {
        self.grid.has_conflict()
    }

    /// Returns `true` if every cell is filled and there is no conflict.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.grid.is_complete()
    }

    /// Returns the next deduction without applying it.
    #[must_use]
    pub fn peek(&self) -> Option<Deduction> {
        self.solver.find_step(&self.grid)
    }

    /// Applies one deduction, recording its attribution.
    ///
    /// Returns `Ok(None)` when no configured technique makes progress.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if the grid is conflicted.
    pub fn step(&mut self) -> Result<Option<Deduction>, SolverError> {
        let deduction = self.solver.step(&mut self.grid, &mut self.stats)?;
        if let Some(deduction) = deduction {
            self.cells[deduction.position.index()] = CellState::Deduced {
                digit: deduction.digit,
                technique: deduction.technique,
            };
            self.last = Some(deduction);
        }
        Ok(deduction)
    }

    /// Steps until the puzzle is complete or no technique makes progress.
    ///
    /// Returns `true` if the puzzle was completed.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if the grid becomes
    /// conflicted.
    pub fn solve_until_stuck(&mut self) -> Result<bool, SolverError> {
        while self.step()?.is_some() {
            if self.is_complete() {
                return Ok(true);
            }
        }
        Ok(self.is_complete())
    }

    /// Returns the accumulated solving statistics.
    #[must_use]
    pub const fn stats(&self) -> &TechniqueSolverStats {
        &self.stats
    }

    /// Returns the solver driving this session.
    #[must_use]
    pub const fn solver(&self) -> &TechniqueSolver {
        &self.solver
    }

    /// Returns the current placements as a plain [`DigitGrid`].
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        self.grid.to_digit_grid()
    }
}
