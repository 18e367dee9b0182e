//! The 9x9 grid of cells and its 27 constraint areas.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::{
    area::Area, cell::Cell, digit::Digit, digit_set::DigitSet, error::GridError,
    position::Position,
};

/// A 9x9 Sudoku grid.
///
/// The grid owns its 81 [`Cell`]s in one flat row-major arena and its 27
/// [`Area`]s (9 rows, 9 columns, 9 squares). Areas reference cells by
/// position only, which sidesteps the cell-to-area reference cycle entirely.
///
/// Candidate sets are kept consistent by the grid: [`place`](Self::place)
/// recomputes candidates for every cell that shares an area with the changed
/// position, and those are the only cells whose legal values can have
/// changed.
///
/// The external surface is a flat sequence of 81 values in row-major order,
/// where `0` means empty and `1`-`9` are given digits; see
/// [`from_values`](Self::from_values) and
/// [`export_values`](Self::export_values).
///
/// # Examples
///
/// ```
/// use gridoku_core::{Digit, Grid, Position};
///
/// let mut grid = Grid::empty();
/// assert!(grid.is_valid());
/// assert!(!grid.is_complete());
///
/// grid.place(Position::new(0, 0), Some(Digit::D5));
/// assert_eq!(grid.value_at(Position::new(0, 0)), Some(Digit::D5));
///
/// // 5 is no longer a candidate anywhere in row 0, column 0, or square 0.
/// assert!(!grid.candidates_at(Position::new(0, 8)).contains(Digit::D5));
/// assert!(!grid.candidates_at(Position::new(8, 0)).contains(Digit::D5));
/// assert!(!grid.candidates_at(Position::new(2, 2)).contains(Digit::D5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; 81],
    areas: [Area; 27],
}

impl Grid {
    /// Creates a grid with all 81 cells empty.
    #[must_use]
    pub fn empty() -> Self {
        let mut grid = Self {
            cells: Position::ALL.map(|pos| Cell::new(pos, None)),
            areas: Area::ALL,
        };
        grid.recompute_all_candidates();
        grid
    }

    /// Builds a grid from 81 raw values in row-major order.
    ///
    /// `0` marks an empty cell; `1`-`9` are given digits. This is the sole
    /// input surface for external format readers.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Shape`] unless exactly 81 values are supplied,
    /// and [`GridError::InvalidValue`] for any value greater than 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::Grid;
    ///
    /// let grid = Grid::from_values(&[0; 81])?;
    /// assert!(!grid.is_complete());
    ///
    /// assert!(Grid::from_values(&[0; 80]).is_err());
    /// # Ok::<(), gridoku_core::GridError>(())
    /// ```
    pub fn from_values(values: &[u8]) -> Result<Self, GridError> {
        if values.len() != 81 {
            return Err(GridError::Shape { len: values.len() });
        }
        let mut cells = Position::ALL.map(|pos| Cell::new(pos, None));
        for (cell, &value) in cells.iter_mut().zip(values) {
            let digit = match value {
                0 => None,
                _ => Some(Digit::try_from_value(value)?),
            };
            cell.set_value(digit);
        }
        let mut grid = Self {
            cells,
            areas: Area::ALL,
        };
        grid.recompute_all_candidates();
        Ok(grid)
    }

    /// Returns the 81 cell values in row-major order, `0` for empty cells.
    ///
    /// This is the sole output surface for external format writers;
    /// [`from_values`](Self::from_values) accepts the result unchanged.
    #[must_use]
    pub fn export_values(&self) -> [u8; 81] {
        let mut values = [0; 81];
        for (value, cell) in values.iter_mut().zip(&self.cells) {
            *value = cell.value().map_or(0, Digit::value);
        }
        values
    }

    /// Returns the value at a position, or `None` if the cell is empty.
    #[must_use]
    pub fn value_at(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.cell_index()].value()
    }

    /// Returns the candidate digits for the cell at a position.
    ///
    /// Empty if the cell already holds a value.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        self.cells[pos.cell_index()].candidates()
    }

    /// Returns the cell at a position.
    #[must_use]
    pub fn cell_at(&self, pos: Position) -> &Cell {
        &self.cells[pos.cell_index()]
    }

    /// Returns all 81 cells in row-major order.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; 81] {
        &self.cells
    }

    /// Returns the 27 areas in row, column, square order.
    #[must_use]
    pub const fn areas(&self) -> &[Area; 27] {
        &self.areas
    }

    /// Returns the row, column, and square areas containing a position.
    #[must_use]
    pub fn areas_of(&self, pos: Position) -> [&Area; 3] {
        [
            &self.areas[usize::from(pos.row())],
            &self.areas[9 + usize::from(pos.column())],
            &self.areas[18 + usize::from(pos.square_index())],
        ]
    }

    /// Sets or clears the value at a position and recomputes candidates for
    /// every cell sharing one of the position's three areas.
    ///
    /// Legality is not enforced here; placing a digit that duplicates one in
    /// a shared area simply leaves the grid in a state where
    /// [`is_valid`](Self::is_valid) reports `false`.
    pub fn place(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[pos.cell_index()].set_value(value);
        let areas = self.areas_of(pos).map(|area| *area);
        for area in areas {
            for &member in area.positions() {
                self.recompute_candidates_at(member);
            }
        }
    }

    /// Returns `true` if no area contains a duplicate digit.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.areas.iter().all(|area| area.is_valid(self))
    }

    /// Returns `true` if every cell holds a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns `true` if the grid is both valid and complete.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_valid() && self.is_complete()
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    fn recompute_all_candidates(&mut self) {
        for pos in Position::ALL {
            self.recompute_candidates_at(pos);
        }
    }

    // A cell's candidates are the intersection of the available values of
    // its three areas; cells holding a value have none.
    fn recompute_candidates_at(&mut self, pos: Position) {
        let candidates = if self.cells[pos.cell_index()].is_empty() {
            let [row, column, square] = self.areas_of(pos);
            row.available_values(self)
                & column.available_values(self)
                & square.available_values(self)
        } else {
            DigitSet::EMPTY
        };
        self.cells[pos.cell_index()].set_candidates(candidates);
    }
}

impl Display for Grid {
    /// Formats the grid as 9 rows of digits with `.` for empty cells,
    /// `|` column separators, and a horizontal rule every three rows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row > 0 && row % 3 == 0 {
                writeln!(f, "------|-------|------")?;
            }
            for col in 0..9 {
                if col > 0 && col % 3 == 0 {
                    f.write_str("| ")?;
                }
                match self.value_at(Position::new(row, col)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_char('.')?,
                }
                if col < 8 {
                    f.write_char(' ')?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses a text grid.
    ///
    /// Digits `1`-`9` are given values; `.`, `_`, and `0` are empty cells.
    /// Whitespace and the `|`/`-` decoration emitted by [`Display`] are
    /// ignored, so formatted grids round-trip.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::{Digit, Grid, Position};
    ///
    /// let grid: Grid = "
    ///     53_ _7_ ___
    ///     6__ 195 ___
    ///     _98 ___ _6_
    ///     8__ _6_ __3
    ///     4__ 8_3 __1
    ///     7__ _2_ __6
    ///     _6_ ___ 28_
    ///     ___ 419 __5
    ///     ___ _8_ _79
    /// "
    /// .parse()?;
    /// assert_eq!(grid.value_at(Position::new(0, 0)), Some(Digit::D5));
    /// # Ok::<(), gridoku_core::GridError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, GridError> {
        let mut values = [0; 81];
        let mut len = 0;
        for character in s.chars() {
            #[expect(clippy::cast_possible_truncation)]
            let value = match character {
                '1'..='9' => character as u8 - b'0',
                '.' | '_' | '0' => 0,
                '|' | '-' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(GridError::InvalidCharacter { character: c }),
            };
            if len < 81 {
                values[len] = value;
            }
            len += 1;
        }
        if len != 81 {
            return Err(GridError::Shape { len });
        }
        Self::from_values(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIKIPEDIA_PUZZLE: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    const WIKIPEDIA_SOLUTION: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    #[test]
    fn test_empty_grid() {
        let grid = Grid::empty();
        assert!(grid.is_valid());
        assert!(!grid.is_complete());
        assert_eq!(grid.empty_cell_count(), 81);
        for pos in Position::ALL {
            assert_eq!(grid.candidates_at(pos), DigitSet::FULL);
        }
    }

    #[test]
    fn test_from_values_rejects_wrong_shape() {
        assert_eq!(
            Grid::from_values(&[0; 80]),
            Err(GridError::Shape { len: 80 })
        );
        assert_eq!(
            Grid::from_values(&[0; 82]),
            Err(GridError::Shape { len: 82 })
        );
    }

    #[test]
    fn test_from_values_rejects_out_of_range_value() {
        let mut values = [0; 81];
        values[40] = 10;
        assert_eq!(
            Grid::from_values(&values),
            Err(GridError::InvalidValue { value: 10 })
        );
    }

    #[test]
    fn test_export_round_trip() {
        let grid: Grid = WIKIPEDIA_PUZZLE.parse().unwrap();
        let restored = Grid::from_values(&grid.export_values()).unwrap();
        assert_eq!(grid, restored);
    }

    #[test]
    fn test_place_updates_shared_area_candidates() {
        let mut grid = Grid::empty();
        grid.place(Position::new(0, 0), Some(Digit::D5));

        // Same row, column, and square lose the candidate...
        assert!(!grid.candidates_at(Position::new(0, 5)).contains(Digit::D5));
        assert!(!grid.candidates_at(Position::new(7, 0)).contains(Digit::D5));
        assert!(!grid.candidates_at(Position::new(1, 1)).contains(Digit::D5));
        // ...an unrelated cell does not.
        assert!(grid.candidates_at(Position::new(4, 4)).contains(Digit::D5));
        // The placed cell has no candidates left.
        assert!(grid.candidates_at(Position::new(0, 0)).is_empty());
    }

    #[test]
    fn test_clearing_a_value_restores_candidates() {
        let mut grid = Grid::empty();
        let pos = Position::new(3, 3);
        grid.place(pos, Some(Digit::D9));
        grid.place(pos, None);
        assert_eq!(grid, Grid::empty());
    }

    #[test]
    fn test_duplicate_in_row_is_invalid() {
        let grid: Grid = "
            5__ _5_ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        "
        .parse()
        .unwrap();
        assert!(!grid.is_valid());
    }

    #[test]
    fn test_solved_grid_uses_all_digits_in_every_area() {
        let grid: Grid = WIKIPEDIA_SOLUTION.parse().unwrap();
        assert!(grid.is_solved());
        for area in grid.areas() {
            assert_eq!(area.used_values(&grid), DigitSet::FULL, "{area}");
            assert!(area.available_values(&grid).is_empty());
        }
    }

    #[test]
    fn test_candidates_follow_area_constraints() {
        let grid: Grid = WIKIPEDIA_PUZZLE.parse().unwrap();
        for pos in Position::ALL {
            if grid.value_at(pos).is_some() {
                assert!(grid.candidates_at(pos).is_empty());
                continue;
            }
            let [row, column, square] = grid.areas_of(pos);
            let expected = row.available_values(&grid)
                & column.available_values(&grid)
                & square.available_values(&grid);
            assert_eq!(grid.candidates_at(pos), expected, "{pos}");
        }
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        let grid: Grid = WIKIPEDIA_PUZZLE.parse().unwrap();
        let reparsed: Grid = grid.to_string().parse().unwrap();
        assert_eq!(grid, reparsed);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert_eq!(
            "x".repeat(81).parse::<Grid>(),
            Err(GridError::InvalidCharacter { character: 'x' })
        );
        assert_eq!("123".parse::<Grid>(), Err(GridError::Shape { len: 3 }));
    }
}
