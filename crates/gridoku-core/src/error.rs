//! Error types for grid construction and mutation.

use derive_more::{Display, Error};

/// Errors reported when building a [`Grid`](crate::Grid) from external input.
///
/// These cover the validation performed at the boundary; Sudoku-rule
/// violations (duplicate digits in an area) are not construction errors and
/// are reported by [`Grid::is_valid`](crate::Grid::is_valid) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// The input did not contain exactly 81 cell values.
    #[display("expected exactly 81 cell values, got {len}")]
    Shape {
        /// Number of values actually supplied.
        len: usize,
    },

    /// A cell value was outside the accepted range (0 for empty, or 1-9).
    #[display("cell value must be 0 (empty) or 1-9, got {value}")]
    InvalidValue {
        /// The rejected value.
        value: u8,
    },

    /// A character in a text grid was not a digit, an empty-cell marker,
    /// or ignorable decoration.
    #[display("unexpected character {character:?} in text grid")]
    InvalidCharacter {
        /// The rejected character.
        character: char,
    },
}
