//! Grid coordinates.

use std::fmt::{self, Display};

/// A cell position on the 9x9 grid.
///
/// Rows and columns are numbered 0-8 from the top-left corner. A position
/// also determines the 3x3 square a cell belongs to, so the three areas
/// containing a cell can always be derived from its coordinates alone.
///
/// # Examples
///
/// ```
/// use gridoku_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.column(), 7);
/// assert_eq!(pos.square_index(), 5);
/// assert_eq!(pos.cell_index(), 43);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Creates a position from a row-major cell index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_cell_index(index: usize) -> Self {
        assert!(index < 81);
        Self {
            row: (index / 9) as u8,
            col: (index % 9) as u8,
        }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn column(self) -> u8 {
        self.col
    }

    /// Returns the index of the 3x3 square containing this position (0-8,
    /// left to right, top to bottom).
    #[must_use]
    pub const fn square_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn cell_index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Position::ALL.len(), 81);
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.cell_index(), i);
            assert_eq!(Position::from_cell_index(i), *pos);
        }
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
    }

    #[test]
    fn test_square_index() {
        assert_eq!(Position::new(0, 0).square_index(), 0);
        assert_eq!(Position::new(0, 8).square_index(), 2);
        assert_eq!(Position::new(4, 4).square_index(), 4);
        assert_eq!(Position::new(8, 0).square_index(), 6);
        assert_eq!(Position::new(8, 8).square_index(), 8);
        assert_eq!(Position::new(5, 3).square_index(), 4);
    }

    #[test]
    #[should_panic(expected = "row < 9 && col < 9")]
    fn test_new_rejects_out_of_range() {
        let _ = Position::new(9, 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 7).to_string(), "r3c7");
    }
}
