//! A single grid cell.

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// One of the 81 cells of a [`Grid`](crate::Grid).
///
/// A cell knows its fixed position, its current value (if any), and the set
/// of candidate digits still legal for it. Candidates are derived state: the
/// owning grid recomputes them whenever a value in one of the cell's three
/// areas changes, and they are always empty while the cell holds a value.
///
/// Values are only ever written through [`Grid::place`](crate::Grid::place),
/// which keeps candidates in sync across the affected areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    value: Option<Digit>,
    candidates: DigitSet,
}

impl Cell {
    pub(crate) const fn new(position: Position, value: Option<Digit>) -> Self {
        Self {
            position,
            value,
            candidates: DigitSet::EMPTY,
        }
    }

    /// Returns the fixed position of this cell.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the value held by this cell, or `None` if it is empty.
    #[must_use]
    pub const fn value(&self) -> Option<Digit> {
        self.value
    }

    /// Returns `true` if this cell holds no value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Returns the candidate digits still legal for this cell.
    ///
    /// Empty when the cell holds a value.
    #[must_use]
    pub const fn candidates(&self) -> DigitSet {
        self.candidates
    }

    // Setting a value clears the candidates; recomputation for the affected
    // neighborhood is the grid's job.
    pub(crate) const fn set_value(&mut self, value: Option<Digit>) {
        self.value = value;
        if value.is_some() {
            self.candidates = DigitSet::EMPTY;
        }
    }

    pub(crate) const fn set_candidates(&mut self, candidates: DigitSet) {
        debug_assert!(self.value.is_none() || candidates.is_empty());
        self.candidates = candidates;
    }
}
