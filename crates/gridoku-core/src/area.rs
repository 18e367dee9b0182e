//! Constraint areas: rows, columns, and 3x3 squares.

use std::fmt::{self, Display};

use crate::{digit_set::DigitSet, grid::Grid, position::Position};

/// The three kinds of constraint area on a Sudoku grid.
///
/// A single tagged type covers all of them; the Sudoku rule is identical for
/// each, only the member positions differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaKind {
    /// A horizontal row.
    Row,
    /// A vertical column.
    Column,
    /// A 3x3 square.
    Square,
}

impl Display for AreaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AreaKind::Row => "row",
            AreaKind::Column => "column",
            AreaKind::Square => "square",
        };
        f.write_str(name)
    }
}

/// A group of 9 cells that must hold pairwise-distinct digits.
///
/// An area stores only the positions of its members, never the cells
/// themselves; cells live in the grid's flat arena and every cell belongs to
/// exactly one row, one column, and one square. Membership is fixed by grid
/// geometry, so the full table of 27 areas is a compile-time constant.
///
/// # Examples
///
/// ```
/// use gridoku_core::{Area, AreaKind, Position};
///
/// let row = Area::row(4);
/// assert_eq!(row.kind(), AreaKind::Row);
/// assert!(row.contains(Position::new(4, 0)));
/// assert!(!row.contains(Position::new(5, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Area {
    kind: AreaKind,
    index: u8,
    positions: [Position; 9],
}

impl Area {
    /// All 27 areas in row, column, square order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::row(0); 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::row(i as u8);
            all[i + 9] = Self::column(i as u8);
            all[i + 18] = Self::square(i as u8);
            i += 1;
        }
        all
    };

    /// Creates the row area with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub const fn row(index: u8) -> Self {
        assert!(index < 9);
        let mut positions = [Position::new(index, 0); 9];
        let mut col = 0;
        while col < 9 {
            positions[col as usize] = Position::new(index, col);
            col += 1;
        }
        Self {
            kind: AreaKind::Row,
            index,
            positions,
        }
    }

    /// Creates the column area with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub const fn column(index: u8) -> Self {
        assert!(index < 9);
        let mut positions = [Position::new(0, index); 9];
        let mut row = 0;
        while row < 9 {
            positions[row as usize] = Position::new(row, index);
            row += 1;
        }
        Self {
            kind: AreaKind::Column,
            index,
            positions,
        }
    }

    /// Creates the square area with the given index (0-8, left to right,
    /// top to bottom).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub const fn square(index: u8) -> Self {
        assert!(index < 9);
        let base_row = (index / 3) * 3;
        let base_col = (index % 3) * 3;
        let mut positions = [Position::new(base_row, base_col); 9];
        let mut i = 0;
        while i < 9 {
            positions[i as usize] = Position::new(base_row + i / 3, base_col + i % 3);
            i += 1;
        }
        Self {
            kind: AreaKind::Square,
            index,
            positions,
        }
    }

    /// Returns the kind of this area.
    #[must_use]
    pub const fn kind(&self) -> AreaKind {
        self.kind
    }

    /// Returns the index of this area among areas of the same kind (0-8).
    #[must_use]
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Returns the 9 member positions of this area.
    #[must_use]
    pub const fn positions(&self) -> &[Position; 9] {
        &self.positions
    }

    /// Returns `true` if the position is one of this area's members.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        match self.kind {
            AreaKind::Row => pos.row() == self.index,
            AreaKind::Column => pos.column() == self.index,
            AreaKind::Square => pos.square_index() == self.index,
        }
    }

    /// Returns the set of digits already placed in this area.
    #[must_use]
    pub fn used_values(&self, grid: &Grid) -> DigitSet {
        let mut used = DigitSet::new();
        for &pos in &self.positions {
            if let Some(digit) = grid.value_at(pos) {
                used.insert(digit);
            }
        }
        used
    }

    /// Returns the set of digits that can still be placed in this area.
    #[must_use]
    pub fn available_values(&self, grid: &Grid) -> DigitSet {
        self.used_values(grid).complement()
    }

    /// Returns `true` if no digit appears more than once in this area.
    ///
    /// Scans raw cell values rather than the deduplicated
    /// [`used_values`](Self::used_values) set, so constraint violations
    /// among the givens are caught.
    #[must_use]
    pub fn is_valid(&self, grid: &Grid) -> bool {
        let mut seen = DigitSet::new();
        for &pos in &self.positions {
            if let Some(digit) = grid.value_at(pos) {
                if seen.contains(digit) {
                    return false;
                }
                seen.insert(digit);
            }
        }
        true
    }
}

impl Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.index)
    }
}
