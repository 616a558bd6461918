use std::array;

use crate::Position;

/// A Sudoku house: a row, a column, or a 3x3 box.
///
/// Each house is an explicit group of 9 cells. The grid engine and the
/// solving techniques iterate houses instead of open-coding nested
/// coordinate loops, so the row/column/box structure lives in one place.
///
/// # Examples
///
/// ```
/// use sudoku_core::{House, Position};
///
/// let row = House::Row { y: 3 };
/// assert_eq!(row.positions()[0], Position::new(0, 3));
/// assert_eq!(row.positions()[8], Position::new(8, 3));
///
/// // The three houses a cell belongs to
/// let houses = House::of(Position::new(4, 4));
/// assert_eq!(houses[2], House::Box { index: 4 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3x3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// All rows, y = 0 to 8.
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { y: i as u8 };
            i += 1;
        }
        rows
    };

    /// All columns, x = 0 to 8.
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { x: i as u8 };
            i += 1;
        }
        columns
    };

    /// All boxes, index 0 to 8 (row-major).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        boxes
    };

    /// All 27 houses, in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        while i < 9 {
            all[i] = Self::ROWS[i];
            all[i + 9] = Self::COLUMNS[i];
            all[i + 18] = Self::BOXES[i];
            i += 1;
        }
        all
    };

    /// Returns the three houses containing a position: its row, its column,
    /// and its box, in that order.
    #[must_use]
    pub const fn of(pos: Position) -> [Self; 3] {
        [
            Self::Row { y: pos.y() },
            Self::Column { x: pos.x() },
            Self::Box {
                index: pos.box_index(),
            },
        ]
    }

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            Self::Row { y } => Position::new(i, y),
            Self::Column { x } => Position::new(x, i),
            Self::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns the 9 positions of this house, in cell-index order.
    #[must_use]
    pub fn positions(self) -> [Position; 9] {
        #[expect(clippy::cast_possible_truncation)]
        array::from_fn(|i| self.position_from_cell_index(i as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_ordered_rows_columns_boxes() {
        assert_eq!(House::ALL[0], House::Row { y: 0 });
        assert_eq!(House::ALL[8], House::Row { y: 8 });
        assert_eq!(House::ALL[9], House::Column { x: 0 });
        assert_eq!(House::ALL[18], House::Box { index: 0 });
        assert_eq!(House::ALL[26], House::Box { index: 8 });
    }

    #[test]
    fn positions_of_a_box() {
        let positions = House::Box { index: 4 }.positions();
        assert_eq!(positions[0], Position::new(3, 3));
        assert_eq!(positions[4], Position::new(4, 4));
        assert_eq!(positions[8], Position::new(5, 5));
    }

    #[test]
    fn houses_of_position() {
        let [row, column, box_house] = House::of(Position::new(7, 2));
        assert_eq!(row, House::Row { y: 2 });
        assert_eq!(column, House::Column { x: 7 });
        assert_eq!(box_house, House::Box { index: 2 });
    }

    #[test]
    fn every_house_has_nine_distinct_cells() {
        for house in House::ALL {
            let positions = house.positions();
            for (i, a) in positions.iter().enumerate() {
                for b in &positions[i + 1..] {
                    assert_ne!(a, b, "{house:?} repeats a cell");
                }
            }
        }
    }
}
