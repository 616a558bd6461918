//! Solution scrambling.
//!
//! A fresh solution starts from one fixed solved grid and is shuffled by
//! symmetry transformations that map solved grids to solved grids: relabeling
//! two digits, and swapping two rows (or columns) within the same band of
//! three. Swapping lines across bands would break the boxes, so the random
//! line picker never proposes that.

use rand::RngExt;
use sudoku_core::{Digit, DigitGrid, Position};

/// Returns the fixed solved grid every generated solution starts from.
///
/// Row `y` is the top row cyclically shifted left by `3 * y + y / 3`, which
/// yields a valid solution directly.
#[must_use]
pub fn seed_solution() -> DigitGrid {
    let mut grid = DigitGrid::new();
    for pos in Position::ALL {
        let (x, y) = (pos.x(), pos.y());
        let value = (x + 3 * y + y / 3) % 9 + 1;
        grid[pos] = Some(Digit::from_value(value));
    }
    debug_assert!(grid.is_valid_solution());
    grid
}

/// Relabels two digits across the whole grid.
///
/// Swapping a digit with itself is a no-op.
///
/// # Panics
///
/// Panics if `grid` is not a valid solution.
pub fn swap_digits(grid: &mut DigitGrid, a: Digit, b: Digit) {
    assert!(grid.is_valid_solution());
    if a == b {
        return;
    }
    for pos in Position::ALL {
        if grid[pos] == Some(a) {
            grid[pos] = Some(b);
        } else if grid[pos] == Some(b) {
            grid[pos] = Some(a);
        }
    }
    assert!(grid.is_valid_solution());
}

/// Swaps two full rows.
///
/// Swapping a row with itself is a no-op. Validity is only preserved when
/// both rows belong to the same band, as produced by
/// [`random_lines_in_band`].
///
/// # Panics
///
/// Panics if `grid` is not a valid solution before or after the swap, or if
/// a row index is out of range.
pub fn swap_rows(grid: &mut DigitGrid, y0: u8, y1: u8) {
    assert!(grid.is_valid_solution());
    if y0 == y1 {
        return;
    }
    for x in 0..9 {
        let (a, b) = (Position::new(x, y0), Position::new(x, y1));
        let tmp = grid[a];
        grid[a] = grid[b];
        grid[b] = tmp;
    }
    assert!(grid.is_valid_solution());
}

/// Swaps two full columns.
///
/// Swapping a column with itself is a no-op. Validity is only preserved when
/// both columns belong to the same band, as produced by
/// [`random_lines_in_band`].
///
/// # Panics
///
/// Panics if `grid` is not a valid solution before or after the swap, or if
/// a column index is out of range.
pub fn swap_columns(grid: &mut DigitGrid, x0: u8, x1: u8) {
    assert!(grid.is_valid_solution());
    if x0 == x1 {
        return;
    }
    for y in 0..9 {
        let (a, b) = (Position::new(x0, y), Position::new(x1, y));
        let tmp = grid[a];
        grid[a] = grid[b];
        grid[b] = tmp;
    }
    assert!(grid.is_valid_solution());
}

/// Draws two distinct digits to relabel.
pub fn random_digit_pair<R>(rng: &mut R) -> (Digit, Digit)
where
    R: RngExt + ?Sized,
{
    loop {
        let a = rng.random_range(0..9);
        let b = rng.random_range(0..9);
        if a != b {
            return (Digit::ALL[a], Digit::ALL[b]);
        }
    }
}

/// Draws two distinct line indices from a single random band of three.
pub fn random_lines_in_band<R>(rng: &mut R) -> (u8, u8)
where
    R: RngExt + ?Sized,
{
    let band = rng.random_range(0..3u8);
    loop {
        let a = rng.random_range(0..3u8);
        let b = rng.random_range(0..3u8);
        if a != b {
            return (band * 3 + a, band * 3 + b);
        }
    }
}
