use std::fmt::{self, Display};

/// A Sudoku digit in the range 1-9.
///
/// Using an enum rather than a bare `u8` makes out-of-range digits
/// unrepresentable, so range checks only happen at the boundary where
/// untyped input enters the engine.
///
/// # Examples
///
/// ```
/// use sudoku_core::Digit;
///
/// assert_eq!(Digit::D7.value(), 7);
/// assert_eq!(Digit::from_value(3), Digit::D3);
/// assert_eq!(Digit::ALL.len(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// All digits from 1 to 9, in ascending order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from its numeric value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9. Callers are expected to
    /// validate untyped input before it reaches this point.
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        assert!(
            (1..=9).contains(&value),
            "digit must be between 1 and 9, got {value}"
        );
        Self::ALL[usize::from(value - 1)]
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}
