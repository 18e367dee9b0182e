//! Fill-then-carve puzzle generation.

use gridoku_core::{Grid, Position};
use gridoku_solver::{SolutionCount, Solver};
use log::{debug, warn};
use rand::seq::SliceRandom as _;

use crate::{Difficulty, PuzzleSeed};

/// A puzzle together with its answer key and provenance.
///
/// `problem` is guaranteed to have exactly one solution, and that solution
/// is `solution`. Regenerating with the stored `seed` and `difficulty`
/// reproduces the same puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle grid with carved-out empty cells.
    pub problem: Grid,
    /// The complete grid the puzzle was carved from.
    pub solution: Grid,
    /// The seed that produced this puzzle.
    pub seed: PuzzleSeed,
    /// The difficulty the puzzle was generated for.
    pub difficulty: Difficulty,
}

/// Generates Sudoku puzzles with a unique solution.
///
/// Generation has two phases, each drawing from its own seed-derived RNG
/// stream:
///
/// 1. **Fill**: solve an empty grid with shuffled candidate order, producing
///    a random complete solution.
/// 2. **Carve**: visit the cells in shuffled order and clear each one,
///    keeping the clearing only if the puzzle still has exactly one
///    solution, until the difficulty's target empty-cell count is reached
///    or no cells remain to try.
///
/// # Examples
///
/// ```
/// use gridoku_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new(Difficulty::Easy);
/// let puzzle = generator.generate();
/// assert!(puzzle.solution.is_solved());
/// assert!(puzzle.problem.empty_cell_count() <= Difficulty::Easy.empty_cells());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator {
    difficulty: Difficulty,
}

impl PuzzleGenerator {
    /// Creates a generator for the given difficulty.
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Returns the difficulty puzzles are generated for.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Generates a puzzle from a freshly drawn random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let solution = fill(seed);
        let problem = carve(&solution, seed, self.difficulty.empty_cells());
        GeneratedPuzzle {
            problem,
            solution,
            seed,
            difficulty: self.difficulty,
        }
    }
}

/// Produces a random complete solution.
fn fill(seed: PuzzleSeed) -> Grid {
    let mut solver = Solver::new();
    let mut attempt = 0u32;
    loop {
        let mut rng = seed.rng_for(&format!("fill:{attempt}"));
        let mut grid = Grid::empty();
        match solver.solve_randomized(&mut grid, &mut rng) {
            Ok(()) => return grid,
            // An empty grid always has solutions, so this only fires if the
            // search is cut short. Retry on a fresh per-attempt stream.
            Err(err) => {
                warn!("fill attempt {attempt} failed ({err}), retrying");
                attempt += 1;
            }
        }
    }
}

/// Clears cells from `solution` while the puzzle stays uniquely solvable.
fn carve(solution: &Grid, seed: PuzzleSeed, target_empty: usize) -> Grid {
    let mut rng = seed.rng_for("carve");
    let mut order = Position::ALL;
    order.shuffle(&mut rng);

    let mut solver = Solver::new();
    let mut grid = solution.clone();
    let mut emptied = 0;
    for pos in order {
        if emptied >= target_empty {
            break;
        }
        let value = grid.value_at(pos);
        grid.place(pos, None);
        if solver.count_solutions(&grid) == Ok(SolutionCount::ExactlyOne) {
            emptied += 1;
        } else {
            grid.place(pos, value);
        }
    }
    debug!("carved {emptied} empty cells (target {target_empty})");
    grid
}
