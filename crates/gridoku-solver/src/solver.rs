//! The propagate-then-guess backtracking search.

use std::time::Instant;

use derive_more::IsVariant;
use gridoku_core::{Digit, DigitSet, Grid, Position};
use rand::{Rng, seq::SliceRandom as _};
use tinyvec::ArrayVec;

use crate::{SolveBudget, SolverError};

/// Counters describing the most recent solve or count call.
///
/// Reset at the start of every call, so they always describe exactly one
/// search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    nodes: u64,
    guesses: u64,
    max_depth: usize,
}

impl SolveStats {
    /// Number of search nodes visited. Each node is one propagation pass
    /// followed by at most one branch point.
    #[must_use]
    pub const fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Number of tentative placements tried at branch points. Zero means the
    /// grid was solved by propagation alone.
    #[must_use]
    pub const fn guesses(&self) -> u64 {
        self.guesses
    }

    /// Deepest guess nesting reached.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }
}

/// Classification of a grid's solution space.
///
/// Counting stops as soon as a second solution is found, so `Multiple` means
/// "at least two", not an exact tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum SolutionCount {
    /// No valid completion exists.
    Zero,
    /// Exactly one valid completion exists. This is what makes a grid a
    /// proper puzzle.
    ExactlyOne,
    /// Two or more valid completions exist.
    Multiple,
}

/// Outcome of one propagation pass over the whole grid.
enum Propagation {
    /// Every cell has a value.
    Complete,
    /// No more naked singles, but empty cells remain. A guess is needed.
    Stalled,
    /// Some empty cell has no candidates left.
    Contradiction,
}

/// A backtracking Sudoku solver.
///
/// The solver itself is cheap to construct; all per-call state lives in
/// [`SolveStats`], which is reset on every call. On any failure the grid is
/// restored to exactly the state it was passed in.
///
/// # Examples
///
/// ```
/// use gridoku_core::Grid;
/// use gridoku_solver::{SolutionCount, Solver};
///
/// let mut solver = Solver::new();
/// let count = solver.count_solutions(&Grid::empty())?;
/// assert_eq!(count, SolutionCount::Multiple);
/// # Ok::<(), gridoku_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    budget: SolveBudget,
    stats: SolveStats,
    deadline: Option<Instant>,
}

impl Solver {
    /// Creates a solver with an unlimited budget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver bounded by the given budget.
    #[must_use]
    pub fn with_budget(budget: SolveBudget) -> Self {
        Self {
            budget,
            ..Self::default()
        }
    }

    /// Returns the configured budget.
    #[must_use]
    pub const fn budget(&self) -> SolveBudget {
        self.budget
    }

    /// Returns the counters from the most recent call.
    #[must_use]
    pub const fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// Solves the grid in place, trying candidates in ascending order.
    ///
    /// With a fixed grid the search is fully deterministic: repeated calls
    /// find the same solution.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Exhausted`] if the grid has no solution, or a
    /// budget error if the search was cut short. In every error case the
    /// grid is left unchanged.
    pub fn solve(&mut self, grid: &mut Grid) -> Result<(), SolverError> {
        self.solve_impl(grid, &mut None)
    }

    /// Solves the grid in place, trying candidates in an order shuffled by
    /// `rng`.
    ///
    /// Starting from an empty grid this produces a uniformly scrambled
    /// complete solution, which is how the generator fills grids. The same
    /// seed always yields the same solution.
    ///
    /// # Errors
    ///
    /// Same contract as [`solve`](Self::solve).
    pub fn solve_randomized<R>(&mut self, grid: &mut Grid, rng: &mut R) -> Result<(), SolverError>
    where
        R: Rng,
    {
        let mut rng: Option<&mut dyn Rng> = Some(rng);
        self.solve_impl(grid, &mut rng)
    }

    /// Classifies the grid's solution space without modifying it.
    ///
    /// A grid that already violates the constraints counts as
    /// [`SolutionCount::Zero`]. The search short-circuits once a second
    /// solution is found.
    ///
    /// # Errors
    ///
    /// Returns a budget error if the search was cut short before the
    /// classification was settled.
    pub fn count_solutions(&mut self, grid: &Grid) -> Result<SolutionCount, SolverError> {
        self.begin();
        if !grid.is_valid() {
            return Ok(SolutionCount::Zero);
        }

        let mut work = grid.clone();
        let mut found = 0;
        self.count_search(&mut work, 0, &mut found)?;
        Ok(match found {
            0 => SolutionCount::Zero,
            1 => SolutionCount::ExactlyOne,
            _ => SolutionCount::Multiple,
        })
    }

    fn solve_impl(
        &mut self,
        grid: &mut Grid,
        rng: &mut Option<&mut dyn Rng>,
    ) -> Result<(), SolverError> {
        self.begin();
        if !grid.is_valid() {
            return Err(SolverError::Exhausted);
        }

        let snapshot = grid.clone();
        match self.search(grid, 0, rng) {
            Ok(true) => Ok(()),
            Ok(false) => {
                *grid = snapshot;
                Err(SolverError::Exhausted)
            }
            Err(err) => {
                *grid = snapshot;
                Err(err)
            }
        }
    }

    fn begin(&mut self) {
        self.stats = SolveStats::default();
        self.deadline = self.budget.timeout().map(|timeout| Instant::now() + timeout);
    }

    fn enter_node(&mut self, depth: usize) -> Result<(), SolverError> {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        if let Some(max_nodes) = self.budget.max_nodes()
            && self.stats.nodes > max_nodes
        {
            return Err(SolverError::BudgetExceeded { max_nodes });
        }
        if let (Some(deadline), Some(timeout)) = (self.deadline, self.budget.timeout())
            && Instant::now() >= deadline
        {
            return Err(SolverError::Timeout { timeout });
        }
        Ok(())
    }

    fn search(
        &mut self,
        grid: &mut Grid,
        depth: usize,
        rng: &mut Option<&mut dyn Rng>,
    ) -> Result<bool, SolverError> {
        self.enter_node(depth)?;
        match propagate(grid) {
            Propagation::Complete => return Ok(true),
            Propagation::Contradiction => return Ok(false),
            Propagation::Stalled => {}
        }

        let Some((pos, candidates)) = pick_guess_cell(grid) else {
            return Ok(false);
        };
        let mut order = candidate_values(candidates);
        if let Some(rng) = rng.as_mut() {
            order.as_mut_slice().shuffle(&mut **rng);
        }

        for value in order {
            self.stats.guesses += 1;
            let snapshot = grid.clone();
            grid.place(pos, Some(Digit::from_value(value)));
            if self.search(grid, depth + 1, rng)? {
                return Ok(true);
            }
            *grid = snapshot;
        }
        Ok(false)
    }

    fn count_search(
        &mut self,
        grid: &mut Grid,
        depth: usize,
        found: &mut u32,
    ) -> Result<(), SolverError> {
        self.enter_node(depth)?;
        match propagate(grid) {
            Propagation::Complete => {
                *found += 1;
                return Ok(());
            }
            Propagation::Contradiction => return Ok(()),
            Propagation::Stalled => {}
        }

        let Some((pos, candidates)) = pick_guess_cell(grid) else {
            return Ok(());
        };

        for digit in candidates {
            if *found >= 2 {
                break;
            }
            self.stats.guesses += 1;
            let snapshot = grid.clone();
            grid.place(pos, Some(digit));
            self.count_search(grid, depth + 1, found)?;
            *grid = snapshot;
        }
        Ok(())
    }
}

/// Fills naked singles until a fixed point, detecting contradictions.
fn propagate(grid: &mut Grid) -> Propagation {
    loop {
        let mut progressed = false;
        for pos in Position::ALL {
            if grid.value_at(pos).is_some() {
                continue;
            }
            let candidates = grid.candidates_at(pos);
            if candidates.is_empty() {
                return Propagation::Contradiction;
            }
            if let Some(digit) = candidates.as_single() {
                grid.place(pos, Some(digit));
                progressed = true;
            }
        }
        if !progressed {
            break;
        }
    }
    if grid.is_complete() {
        Propagation::Complete
    } else {
        Propagation::Stalled
    }
}

/// Picks the empty cell with the fewest candidates, lowest position first.
fn pick_guess_cell(grid: &Grid) -> Option<(Position, DigitSet)> {
    let mut best: Option<(Position, DigitSet)> = None;
    for pos in Position::ALL {
        if grid.value_at(pos).is_some() {
            continue;
        }
        let candidates = grid.candidates_at(pos);
        if best.is_none_or(|(_, b)| candidates.len() < b.len()) {
            best = Some((pos, candidates));
        }
    }
    best
}

fn candidate_values(candidates: DigitSet) -> ArrayVec<[u8; 9]> {
    candidates.iter().map(Digit::value).collect()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

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

    fn grid(text: &str) -> Grid {
        text.parse().unwrap()
    }

    #[test]
    fn test_solve_known_puzzle() {
        let mut g = grid(WIKIPEDIA_PUZZLE);
        let mut solver = Solver::new();
        solver.solve(&mut g).unwrap();
        assert_eq!(g, grid(WIKIPEDIA_SOLUTION));
        assert!(g.is_solved());
        assert!(solver.stats().nodes() >= 1);
    }

    #[test]
    fn test_solve_complete_grid_is_a_no_op() {
        let mut g = grid(WIKIPEDIA_SOLUTION);
        let mut solver = Solver::new();
        solver.solve(&mut g).unwrap();
        assert_eq!(g, grid(WIKIPEDIA_SOLUTION));
        assert_eq!(solver.stats().guesses(), 0);
        assert_eq!(solver.stats().nodes(), 1);
    }

    #[test]
    fn test_solve_is_deterministic() {
        let mut first = Grid::empty();
        let mut second = Grid::empty();
        let mut solver = Solver::new();
        solver.solve(&mut first).unwrap();
        solver.solve(&mut second).unwrap();
        assert_eq!(first, second);
        assert!(first.is_solved());
    }

    #[test]
    fn test_solve_unsolvable_restores_grid() {
        // Row 0 forces cell (0,8) to be 9, but column 8 already has one.
        let mut g = grid(
            "
            123 456 78_
            ___ ___ __9
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        );
        let before = g.clone();
        let mut solver = Solver::new();
        assert_eq!(solver.solve(&mut g), Err(SolverError::Exhausted));
        assert_eq!(g, before);
    }

    #[test]
    fn test_solve_invalid_grid_is_exhausted() {
        let mut values = [0; 81];
        values[0] = 5;
        values[1] = 5;
        let mut g = Grid::from_values(&values).unwrap();
        let before = g.clone();
        let mut solver = Solver::new();
        assert_eq!(solver.solve(&mut g), Err(SolverError::Exhausted));
        assert_eq!(g, before);
    }

    #[test]
    fn test_node_budget_cuts_search_short() {
        let mut g = Grid::empty();
        let before = g.clone();
        let mut solver = Solver::with_budget(SolveBudget::unlimited().with_max_nodes(0));
        assert_eq!(
            solver.solve(&mut g),
            Err(SolverError::BudgetExceeded { max_nodes: 0 })
        );
        assert_eq!(g, before);
    }

    #[test]
    fn test_zero_timeout_cuts_search_short() {
        let mut g = Grid::empty();
        let before = g.clone();
        let mut solver = Solver::with_budget(SolveBudget::unlimited().with_timeout(Duration::ZERO));
        assert_eq!(
            solver.solve(&mut g),
            Err(SolverError::Timeout {
                timeout: Duration::ZERO
            })
        );
        assert_eq!(g, before);
    }

    #[test]
    fn test_solve_randomized_is_seed_deterministic() {
        let mut first = Grid::empty();
        let mut second = Grid::empty();
        let mut solver = Solver::new();
        solver
            .solve_randomized(&mut first, &mut Pcg64::seed_from_u64(7))
            .unwrap();
        solver
            .solve_randomized(&mut second, &mut Pcg64::seed_from_u64(7))
            .unwrap();
        assert_eq!(first, second);
        assert!(first.is_solved());
    }

    #[test]
    fn test_solve_randomized_varies_with_seed() {
        let mut first = Grid::empty();
        let mut second = Grid::empty();
        let mut solver = Solver::new();
        solver
            .solve_randomized(&mut first, &mut Pcg64::seed_from_u64(1))
            .unwrap();
        solver
            .solve_randomized(&mut second, &mut Pcg64::seed_from_u64(2))
            .unwrap();
        assert!(first.is_solved());
        assert!(second.is_solved());
        assert_ne!(first, second);
    }

    #[test]
    fn test_count_solutions_unique() {
        let g = grid(WIKIPEDIA_PUZZLE);
        let before = g.clone();
        let mut solver = Solver::new();
        assert_eq!(
            solver.count_solutions(&g).unwrap(),
            SolutionCount::ExactlyOne
        );
        assert_eq!(g, before);
    }

    #[test]
    fn test_count_solutions_complete_grid() {
        let g = grid(WIKIPEDIA_SOLUTION);
        let mut solver = Solver::new();
        assert_eq!(
            solver.count_solutions(&g).unwrap(),
            SolutionCount::ExactlyOne
        );
    }

    #[test]
    fn test_count_solutions_empty_grid_is_multiple() {
        let mut solver = Solver::new();
        assert_eq!(
            solver.count_solutions(&Grid::empty()).unwrap(),
            SolutionCount::Multiple
        );
    }

    #[test]
    fn test_count_solutions_invalid_grid_is_zero() {
        let mut values = [0; 81];
        values[0] = 5;
        values[1] = 5;
        let g = Grid::from_values(&values).unwrap();
        let mut solver = Solver::new();
        assert_eq!(solver.count_solutions(&g).unwrap(), SolutionCount::Zero);
    }

    #[test]
    fn test_count_solutions_ambiguous_puzzle() {
        // Removing every 1 and 2 from a solution leaves (at least) two
        // completions: the original and the one with 1s and 2s swapped.
        let solution = grid(WIKIPEDIA_SOLUTION);
        let mut g = solution.clone();
        for pos in Position::ALL {
            if matches!(g.value_at(pos), Some(Digit::D1 | Digit::D2)) {
                g.place(pos, None);
            }
        }
        let mut solver = Solver::new();
        assert_eq!(solver.count_solutions(&g).unwrap(), SolutionCount::Multiple);
    }

    #[test]
    fn test_stats_reset_between_calls() {
        let mut solver = Solver::new();
        let mut g = Grid::empty();
        solver.solve(&mut g).unwrap();
        assert!(solver.stats().nodes() >= 1);

        let mut solved = grid(WIKIPEDIA_SOLUTION);
        solver.solve(&mut solved).unwrap();
        assert_eq!(solver.stats().nodes(), 1);
        assert_eq!(solver.stats().guesses(), 0);
        assert_eq!(solver.stats().max_depth(), 0);
    }
}
