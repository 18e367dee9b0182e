//! Core data model for 9x9 Sudoku grids.
//!
//! This crate provides the grid representation shared by the solver and
//! generator crates. It is organized bottom-up:
//!
//! - [`Digit`]: type-safe digits 1-9
//! - [`DigitSet`]: bitmask sets of digits, used for candidate tracking
//! - [`Position`]: row/column coordinates, row-major cell indexing
//! - [`Cell`]: one grid cell with an optional value and a candidate set
//! - [`Area`]: a row, column, or square constraint group of 9 cells
//! - [`Grid`]: the 81-cell arena plus its 27 areas
//!
//! Cells live in one flat owned collection indexed by position; areas store
//! only the positions of their members. The grid keeps every cell's
//! candidate set equal to the intersection of its three areas' available
//! values.
//!
//! # Examples
//!
//! ```
//! use gridoku_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::empty();
//! grid.place(Position::new(4, 4), Some(Digit::D5));
//!
//! // 5 is no longer legal elsewhere in row 4.
//! assert!(!grid.candidates_at(Position::new(4, 0)).contains(Digit::D5));
//! ```

pub mod area;
pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod error;
pub mod grid;
pub mod position;

pub use self::{
    area::{Area, AreaKind},
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    error::GridError,
    grid::Grid,
    position::Position,
};
