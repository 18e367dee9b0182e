//! Difficulty levels and their carving targets.

use std::str::FromStr;

use derive_more::{Display, Error};

/// How hard a generated puzzle should be.
///
/// Each level maps to a target number of empty cells the generator tries to
/// carve out of the solution. Carving never trades away uniqueness, so the
/// hardest levels may end up with fewer empty cells than their target.
///
/// # Examples
///
/// ```
/// use gridoku_generator::Difficulty;
///
/// assert!(Difficulty::Easy < Difficulty::Hardest);
/// assert_eq!("medium".parse::<Difficulty>()?, Difficulty::Medium);
/// # Ok::<(), gridoku_generator::ParseDifficultyError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Difficulty {
    /// Target of 45 empty cells.
    #[display("easy")]
    Easy,
    /// Target of 52 empty cells.
    #[display("medium")]
    Medium,
    /// Target of 59 empty cells.
    #[display("hard")]
    Hard,
    /// Target of 66 empty cells.
    #[display("harder")]
    Harder,
    /// Target of 70 empty cells.
    #[display("hardest")]
    Hardest,
}

impl Difficulty {
    /// All difficulty levels, easiest first.
    pub const ALL: [Self; 5] = [
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::Harder,
        Self::Hardest,
    ];

    /// Number of empty cells the generator aims for at this level.
    #[must_use]
    pub const fn empty_cells(self) -> usize {
        match self {
            Self::Easy => 45,
            Self::Medium => 52,
            Self::Hard => 59,
            Self::Harder => 66,
            Self::Hardest => 70,
        }
    }
}

/// Error parsing a [`Difficulty`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unknown difficulty {name:?}, expected one of: easy, medium, hard, harder, hardest")]
pub struct ParseDifficultyError {
    /// The rejected input.
    pub name: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDifficultyError {
                name: s.to_string(),
            })
    }
}
