use sudoku_core::Grid;

use crate::{
    SolverError,
    technique::{self, BoxedTechnique, Deduction},
};

/// Statistics collected during technique-based solving.
///
/// Tracks how many times each technique was applied, plus the total number
/// of solving steps taken.
///
/// # Examples
///
/// ```
/// use sudoku_solver::TechniqueSolver;
/// use sudoku_core::Grid;
///
/// let solver = TechniqueSolver::with_all_techniques();
/// let mut grid = Grid::new();
///
/// let (_solved, stats) = solver.solve(&mut grid)?;
/// println!("Total steps: {}", stats.total_steps());
///
/// for (technique, count) in solver.techniques().iter().zip(stats.applications()) {
///     println!("{}: {count} times", technique.name());
/// }
/// # Ok::<(), sudoku_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TechniqueSolverStats {
    applications: Vec<usize>,
    total_steps: usize,
}

impl TechniqueSolverStats {
    /// Returns technique application counts in solver order.
    ///
    /// Includes techniques that were never applied with a count of `0`.
    /// The index mapping is defined by [`TechniqueSolver::techniques`].
    #[must_use]
    pub fn applications(&self) -> &[usize] {
        &self.applications
    }

    /// Returns the total number of solving steps taken.
    ///
    /// This is the sum of all technique applications.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Returns `true` if any technique was applied at least once.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.total_steps > 0
    }
}

/// A solver that applies human-like deduction techniques to a Sudoku grid.
///
/// Each step tries the configured techniques in order and applies the first
/// deduction found, then returns to the caller. This allows step-by-step
/// solving (for hints or replay) as well as solving until stuck.
///
/// # Examples
///
/// ```
/// use sudoku_core::{DigitGrid, Grid};
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
/// let solver = TechniqueSolver::with_all_techniques();
/// let mut grid = Grid::from(&problem);
/// let (solved, stats) = solver.solve(&mut grid)?;
/// println!("solved: {solved}, steps: {}", stats.total_steps());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct TechniqueSolver {
    techniques: Vec<BoxedTechnique>,
}

impl TechniqueSolver {
    /// Creates a new solver with the specified techniques.
    ///
    /// Techniques are tried in the order they appear in the vector, so the
    /// vector order is the priority order.
    #[must_use]
    pub fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Creates a new solver with all available techniques.
    ///
    /// Techniques are ordered from easiest to hardest, as defined by
    /// [`technique::all_techniques`].
    #[must_use]
    pub fn with_all_techniques() -> Self {
        Self {
            techniques: technique::all_techniques(),
        }
    }

    /// Creates a statistics object aligned with this solver's technique order.
    #[must_use]
    pub fn new_stats(&self) -> TechniqueSolverStats {
        TechniqueSolverStats {
            applications: vec![0; self.techniques.len()],
            total_steps: 0,
        }
    }

    /// Returns the configured techniques in application order.
    ///
    /// The returned slice defines the index mapping used by
    /// [`TechniqueSolverStats::applications`].
    #[must_use]
    pub fn techniques(&self) -> &[BoxedTechnique] {
        &self.techniques
    }

    /// Finds the next deduction without mutating the grid.
    ///
    /// Returns `None` when no configured technique has an applicable
    /// instance anywhere on the board.
    #[must_use]
    pub fn find_step(&self, grid: &Grid) -> Option<Deduction> {
        self.techniques
            .iter()
            .find_map(|technique| technique.find(grid))
    }

    /// Applies one solving step by trying each technique in order.
    ///
    /// The first technique that finds a deduction wins; its placement is
    /// applied to the grid and the statistics are updated.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(deduction))` - a deduction was found and applied
    /// * `Ok(None)` - no technique can make progress (solver is stuck)
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if the grid holds a duplicate
    /// digit in some house, either on entry or after applying the deduction.
    pub fn step(
        &self,
        grid: &mut Grid,
        stats: &mut TechniqueSolverStats,
    ) -> Result<Option<Deduction>, SolverError> {
        debug_assert_eq!(self.techniques.len(), stats.applications.len());
        if grid.has_conflict() {
            return Err(SolverError::Contradiction);
        }

        for (i, technique) in self.techniques.iter().enumerate() {
            if let Some(deduction) = technique.find(grid) {
                grid.place(deduction.position, deduction.digit);
                if grid.has_conflict() {
                    return Err(SolverError::Contradiction);
                }
                stats.applications[i] += 1;
                stats.total_steps += 1;
                return Ok(Some(deduction));
            }
        }
        Ok(None)
    }

    /// Applies steps repeatedly until the grid is complete or no technique
    /// can make further progress.
    ///
    /// # Returns
    ///
    /// Returns `(solved, stats)` where `solved` is `true` if every cell is
    /// filled and `stats` records the techniques applied along the way.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if the grid becomes
    /// conflicted during solving.
    pub fn solve(&self, grid: &mut Grid) -> Result<(bool, TechniqueSolverStats), SolverError> {
        let mut stats = self.new_stats();
        let solved = self.solve_with_stats(grid, &mut stats)?;
        Ok((solved, stats))
    }

    /// Like [`solve`](Self::solve), but accumulates into an existing
    /// statistics object.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if the grid becomes
    /// conflicted during solving.
    pub fn solve_with_stats(
        &self,
        grid: &mut Grid,
        stats: &mut TechniqueSolverStats,
    ) -> Result<bool, SolverError> {
        while self.step(grid, stats)?.is_some() {
            if grid.is_complete() {
                return Ok(true);
            }
        }
        Ok(grid.is_complete())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use sudoku_core::{Digit, DigitGrid, Position};

    use super::*;
    use crate::technique::{LastCell, NakedSingle, all_techniques};

    const SAMPLE_EASY: &str = "
        .3.6..4..
        .......6.
        .6...9..8
        ..1.26.4.
        3...5.7..
        2.6..3..1
        .8.19....
        ..534...7
        427...9..
    ";

    const SAMPLE_MODERATE: &str = "
        8.2.....5
        ..4....38
        5..9..2..
        .........
        ....4.69.
        ..5..64.2
        ....29.6.
        ..63...1.
        34.5.....
    ";

    fn load(s: &str) -> Grid {
        Grid::from(&DigitGrid::from_str(s).unwrap())
    }

    #[test]
    fn step_returns_none_on_empty_grid() {
        let solver = TechniqueSolver::with_all_techniques();
        let mut grid = Grid::new();
        let mut stats = solver.new_stats();

        assert_eq!(solver.step(&mut grid, &mut stats).unwrap(), None);
        assert!(!stats.has_progress());
    }

    #[test]
    fn step_applies_first_matching_technique() {
        let solver = TechniqueSolver::with_all_techniques();
        // Row 0 is one cell short, which both the last-cell scan and the
        // naked-single scan would find; last cell has priority.
        let mut grid = load("1234.6789");
        let mut stats = solver.new_stats();

        let deduction = solver.step(&mut grid, &mut stats).unwrap().unwrap();
        assert_eq!(deduction.position, Position::new(4, 0));
        assert_eq!(deduction.digit, Digit::D5);
        assert_eq!(deduction.technique, "last cell in row");
        assert_eq!(grid.value(Position::new(4, 0)), Some(Digit::D5));

        let last_cell_index = solver
            .techniques()
            .iter()
            .position(|t| t.name() == "last cell")
            .unwrap();
        assert_eq!(stats.applications()[last_cell_index], 1);
        assert_eq!(stats.total_steps(), 1);
    }

    #[test]
    fn step_rejects_conflicted_grid() {
        let solver = TechniqueSolver::with_all_techniques();
        let mut grid = Grid::new();
        grid.place(Position::new(0, 0), Digit::D1);
        grid.place(Position::new(5, 0), Digit::D1);
        let mut stats = solver.new_stats();

        assert_eq!(
            solver.step(&mut grid, &mut stats),
            Err(SolverError::Contradiction)
        );
    }

    #[test]
    fn find_step_does_not_mutate() {
        let solver = TechniqueSolver::with_all_techniques();
        let grid = load("1234.6789");

        let deduction = solver.find_step(&grid).unwrap();
        assert_eq!(deduction.position, Position::new(4, 0));
        assert_eq!(grid.value(Position::new(4, 0)), None);
    }

    #[test]
    fn solve_completes_easy_puzzle() {
        let solver = TechniqueSolver::with_all_techniques();
        let mut grid = load(SAMPLE_EASY);
        let given = Grid::from(&DigitGrid::from_str(SAMPLE_EASY).unwrap());

        let (solved, stats) = solver.solve(&mut grid).unwrap();
        assert!(solved);
        assert!(grid.to_digit_grid().is_valid_solution());
        assert!(stats.has_progress());

        // Givens survive solving untouched.
        for position in Position::ALL {
            if let Some(digit) = given.value(position) {
                assert_eq!(grid.value(position), Some(digit));
            }
        }
    }

    #[test]
    fn solve_completes_moderate_puzzle() {
        let solver = TechniqueSolver::with_all_techniques();
        let problem = DigitGrid::from_str(SAMPLE_MODERATE).unwrap();
        let mut grid = Grid::from(&problem);

        let (solved, stats) = solver.solve(&mut grid).unwrap();
        assert!(solved);
        assert!(grid.to_digit_grid().is_valid_solution());
        // 25 givens, so completing the grid takes exactly 56 deductions.
        assert_eq!(stats.total_steps(), 81 - problem.placed_count());
    }

    #[test]
    fn solve_step_count_matches_placements() {
        let solver = TechniqueSolver::with_all_techniques();
        let problem = DigitGrid::from_str(SAMPLE_EASY).unwrap();
        let mut grid = Grid::from(&problem);

        let (_solved, stats) = solver.solve(&mut grid).unwrap();
        let placed = grid.to_digit_grid().placed_count() - problem.placed_count();
        assert_eq!(stats.total_steps(), placed);
        assert_eq!(
            stats.applications().iter().sum::<usize>(),
            stats.total_steps()
        );
    }

    #[test]
    fn solve_reports_stuck_on_empty_grid() {
        let solver = TechniqueSolver::with_all_techniques();
        let mut grid = Grid::new();

        let (solved, stats) = solver.solve(&mut grid).unwrap();
        assert!(!solved);
        assert_eq!(stats.total_steps(), 0);
    }

    #[test]
    fn custom_technique_list_limits_deductions() {
        // A hidden single that neither last cell nor naked single can see.
        let grid = load("
            .........
            .5.......
            .......5.
            .........
            .........
            ....5....
            .........
            .....5...
            .........
        ");

        let limited = TechniqueSolver::new(vec![
            Box::new(LastCell::new()),
            Box::new(NakedSingle::new()),
        ]);
        assert_eq!(limited.find_step(&grid), None);

        let full = TechniqueSolver::with_all_techniques();
        let deduction = full.find_step(&grid).unwrap();
        assert_eq!(deduction.technique, "hidden single in row");
    }

    #[test]
    fn new_stats_matches_technique_count() {
        let solver = TechniqueSolver::with_all_techniques();
        let stats = solver.new_stats();
        assert_eq!(stats.applications().len(), all_techniques().len());
        assert_eq!(stats.total_steps(), 0);
    }
}
