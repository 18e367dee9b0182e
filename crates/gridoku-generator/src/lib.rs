//! Sudoku puzzle generation with seeded reproducibility.
//!
//! A [`PuzzleGenerator`] builds puzzles in two phases: it fills an empty
//! grid into a random complete solution, then carves cells back out while a
//! backtracking solver confirms the puzzle still has exactly one solution.
//! The [`Difficulty`] level sets how many cells carving aims to empty.
//!
//! All randomness flows from a [`PuzzleSeed`], so any generated puzzle can
//! be reproduced from the 64-character hex seed printed alongside it.
//!
//! # Examples
//!
//! ```
//! use gridoku_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
//!
//! let seed: PuzzleSeed =
//!     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef".parse()?;
//! let generator = PuzzleGenerator::new(Difficulty::Easy);
//! let puzzle = generator.generate_with_seed(seed);
//!
//! assert!(puzzle.solution.is_solved());
//! assert_eq!(generator.generate_with_seed(seed), puzzle);
//! # Ok::<(), gridoku_generator::ParseSeedError>(())
//! ```

mod difficulty;
mod generator;
mod seed;

pub use self::{
    difficulty::{Difficulty, ParseDifficultyError},
    generator::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
