use std::fmt::{self, Display};

/// A board position (x, y), with both coordinates in the range 0-8.
///
/// `x` is the column, `y` is the row. Positions map to a row-major cell
/// index 0-80 via [`index`](Self::index), and to one of the nine 3x3 boxes
/// via [`box_index`](Self::box_index) (boxes are numbered row-major, left
/// to right, top to bottom).
///
/// # Examples
///
/// ```
/// use sudoku_core::Position;
///
/// let pos = Position::new(4, 4);
/// assert_eq!(pos.index(), 40);
/// assert_eq!(pos.box_index(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "position out of range");
        Self { x, y }
    }

    /// Returns the position of cell `i` (0-8, row-major within the box) of
    /// box `box_index` (0-8, row-major on the board).
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `i` is not in the range 0-8.
    #[must_use]
    pub const fn from_box(box_index: u8, i: u8) -> Self {
        assert!(box_index < 9 && i < 9, "box cell out of range");
        Self {
            x: (box_index % 3) * 3 + i % 3,
            y: (box_index / 3) * 3 + i / 3,
        }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the index (0-8) of the 3x3 box containing this position.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_row_major() {
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[8], Position::new(8, 0));
        assert_eq!(Position::ALL[9], Position::new(0, 1));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
    }

    #[test]
    fn box_index_covers_board() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(8, 0).box_index(), 2);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(0, 8).box_index(), 6);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn from_box_round_trip() {
        for box_index in 0..9 {
            for i in 0..9 {
                let pos = Position::from_box(box_index, i);
                assert_eq!(pos.box_index(), box_index);
            }
        }
    }

    #[test]
    #[should_panic(expected = "position out of range")]
    fn new_rejects_out_of_range() {
        let _ = Position::new(9, 0);
    }
}
