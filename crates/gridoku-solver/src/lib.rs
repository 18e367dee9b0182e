//! Backtracking Sudoku solver with constraint propagation.
//!
//! The solver alternates two phases over a [`Grid`](gridoku_core::Grid):
//!
//! 1. **Propagation**: every empty cell with exactly one candidate (a naked
//!    single) is filled, repeatedly, until a fixed point.
//! 2. **Guessing**: when propagation stalls, the empty cell with the fewest
//!    candidates is chosen and each of its candidates is tried in turn, with
//!    full undo between attempts.
//!
//! Besides finding a solution, [`Solver::count_solutions`] distinguishes
//! unsolvable, uniquely solvable, and ambiguous grids — the check the
//! generator relies on while carving puzzles.
//!
//! # Examples
//!
//! ```
//! use gridoku_core::Grid;
//! use gridoku_solver::Solver;
//!
//! let mut grid: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! let mut solver = Solver::new();
//! solver.solve(&mut grid)?;
//! assert!(grid.is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Duration;

use derive_more::{Display, Error, IsVariant};

mod budget;
mod solver;

pub use self::{
    budget::SolveBudget,
    solver::{SolutionCount, SolveStats, Solver},
};

/// Errors reported by the solver.
///
/// All of these leave the grid exactly as it was passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, IsVariant)]
pub enum SolverError {
    /// The search space was fully explored without finding a valid
    /// completion. The grid has no solution.
    #[display("no assignment of the empty cells satisfies the constraints")]
    Exhausted,

    /// The node budget ran out before the search finished. Unlike
    /// [`Exhausted`](Self::Exhausted), the grid was not proven unsolvable.
    #[display("search stopped after exceeding the budget of {max_nodes} nodes")]
    BudgetExceeded {
        /// The configured node limit.
        max_nodes: u64,
    },

    /// The wall-clock timeout elapsed before the search finished.
    #[display("search timed out after {timeout:?}")]
    Timeout {
        /// The configured timeout.
        timeout: Duration,
    },
}
