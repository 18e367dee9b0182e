//! Example demonstrating Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a difficulty level
//! - Generate a random puzzle, or reproduce one from a seed
//! - Display the puzzle, solution, and seed
//! - Generate batches of puzzles in parallel
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty (easy, medium, hard, harder, hardest):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hardest
//! ```
//!
//! Reproduce a puzzle from a 64-character hex seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```
//!
//! Generate several puzzles in parallel:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 8
//! ```
//!
//! Generation progress is logged via `env_logger`:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example generate_puzzle
//! ```

use std::process;

use clap::Parser;
use gridoku_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty level to generate for.
    #[arg(long, value_name = "LEVEL", default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Seed to reproduce a specific puzzle (64 hex characters).
    #[arg(long, value_name = "SEED", conflicts_with = "count")]
    seed: Option<PuzzleSeed>,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let generator = PuzzleGenerator::new(args.difficulty);

    if let Some(seed) = args.seed {
        print_puzzle(&generator.generate_with_seed(seed));
        return;
    }

    if args.count == 0 {
        eprintln!("--count must be at least 1.");
        process::exit(1);
    }

    let puzzles = (0..args.count)
        .into_par_iter()
        .map(|_| generator.generate())
        .collect::<Vec<_>>();
    for puzzle in &puzzles {
        print_puzzle(puzzle);
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Difficulty:");
    println!("  {}", puzzle.difficulty);
    println!();
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Empty cells:");
    println!("  {}", puzzle.problem.empty_cell_count());
    println!();
    println!("Problem:");
    println!("{}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("{}", puzzle.solution);
    println!();
}
