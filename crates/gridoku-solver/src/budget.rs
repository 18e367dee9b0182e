//! Search budgets for bounding backtracking.

use std::time::Duration;

/// Limits on how much work a single solve or count call may perform.
///
/// Backtracking has no useful worst-case bound, so long-running calls can be
/// cut short by a node budget, a wall-clock timeout, or both. The default
/// budget is unlimited. Exceeding a limit is reported as
/// [`SolverError::BudgetExceeded`](crate::SolverError::BudgetExceeded) or
/// [`SolverError::Timeout`](crate::SolverError::Timeout), distinct from
/// [`Exhausted`](crate::SolverError::Exhausted): the search was cut short,
/// not proven impossible.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use gridoku_solver::SolveBudget;
///
/// let budget = SolveBudget::unlimited()
///     .with_max_nodes(100_000)
///     .with_timeout(Duration::from_millis(250));
/// assert_eq!(budget.max_nodes(), Some(100_000));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveBudget {
    max_nodes: Option<u64>,
    timeout: Option<Duration>,
}

impl SolveBudget {
    /// Creates a budget with no limits.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_nodes: None,
            timeout: None,
        }
    }

    /// Limits the number of search nodes (propagate-then-branch steps)
    /// visited per call.
    #[must_use]
    pub const fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// Limits the wall-clock time per call.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the node limit, if any.
    #[must_use]
    pub const fn max_nodes(&self) -> Option<u64> {
        self.max_nodes
    }

    /// Returns the wall-clock limit, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
