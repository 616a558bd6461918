//! Clue removal.
//!
//! The problem grid is carved out of a full solution by removing one clue at
//! a time, keeping the puzzle solvable by the configured techniques after
//! every removal. Each round shuffles the filled cells and commits the first
//! removal that survives the solvability check, so the clue pattern depends
//! on the RNG but solvability never does.

use rand::RngExt;
use sudoku_core::{DigitGrid, Grid, Position};
use sudoku_solver::TechniqueSolver;

/// Returns `true` if `solver` can fill the whole grid from `problem`.
///
/// Runs the techniques on a scratch grid; `problem` is untouched.
pub(crate) fn can_solve(solver: &TechniqueSolver, problem: &DigitGrid) -> bool {
    let mut grid = Grid::from(problem);
    matches!(solver.solve(&mut grid), Ok((true, _)))
}

/// Removes one clue from `grid` while keeping it solvable by `solver`.
///
/// The filled cells are shuffled by `2 * n` random pairwise swaps, then
/// tried in order; the first cell whose removal leaves the puzzle solvable
/// is cleared. Returns the cleared position, or `None` when no single
/// removal keeps the puzzle solvable.
pub(crate) fn remove_random_one<R>(
    solver: &TechniqueSolver,
    grid: &mut DigitGrid,
    rng: &mut R,
) -> Option<Position>
where
    R: RngExt + ?Sized,
{
    let mut filled: Vec<Position> = grid.placed_positions().collect();
    if filled.is_empty() {
        return None;
    }
    for _ in 0..filled.len() * 2 {
        let a = rng.random_range(0..filled.len());
        let b = rng.random_range(0..filled.len());
        filled.swap(a, b);
    }

    for pos in filled {
        let mut candidate = grid.clone();
        candidate[pos] = None;
        if can_solve(solver, &candidate) {
            *grid = candidate;
            return Some(pos);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::scramble;

    #[test]
    fn full_solution_is_solvable() {
        let solver = TechniqueSolver::with_all_techniques();
        assert!(can_solve(&solver, &scramble::seed_solution()));
        assert!(!can_solve(&solver, &DigitGrid::new()));
    }

    #[test]
    fn removal_keeps_puzzle_solvable() {
        let solver = TechniqueSolver::with_all_techniques();
        let mut grid = scramble::seed_solution();
        let mut rng = Pcg64::from_seed([3; 32]);

        for expected_clues in (0..81).rev() {
            let Some(pos) = remove_random_one(&solver, &mut grid, &mut rng) else {
                break;
            };
            assert_eq!(grid[pos], None);
            assert_eq!(grid.placed_count(), expected_clues);
            assert!(can_solve(&solver, &grid));
        }
        // Well under 81 clues must have come out before the loop stalled.
        assert!(grid.placed_count() < 50);
    }

    #[test]
    fn removal_stops_when_nothing_is_removable() {
        let solver = TechniqueSolver::with_all_techniques();
        let mut grid = scramble::seed_solution();
        let mut rng = Pcg64::from_seed([9; 32]);

        while remove_random_one(&solver, &mut grid, &mut rng).is_some() {}
        let stuck = grid.clone();
        // Once stuck, further calls change nothing.
        assert_eq!(remove_random_one(&solver, &mut grid, &mut rng), None);
        assert_eq!(grid, stuck);
        assert!(can_solve(&solver, &grid));
    }

    #[test]
    fn empty_grid_has_nothing_to_remove() {
        let solver = TechniqueSolver::with_all_techniques();
        let mut grid = DigitGrid::new();
        let mut rng = Pcg64::from_seed([0; 32]);
        assert_eq!(remove_random_one(&solver, &mut grid, &mut rng), None);
    }
}
