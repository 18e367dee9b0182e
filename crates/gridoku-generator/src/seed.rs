//! Seeds for reproducible puzzle generation.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed identifying one generated puzzle.
///
/// The seed is the only source of randomness during generation: the same
/// seed always reproduces the same puzzle. Seeds print and parse as 64
/// lowercase hex characters, which is how they appear in logs and on the
/// command line.
///
/// Each generation phase draws from its own [`Pcg64`] stream, derived by
/// hashing the seed together with a phase label. Changing one phase's
/// consumption pattern therefore cannot disturb another's.
///
/// # Examples
///
/// ```
/// use gridoku_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef".parse()?;
/// assert_eq!(seed.to_string().len(), 64);
/// # Ok::<(), gridoku_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates a fresh seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derives the deterministic RNG stream for the given phase label.
    #[must_use]
    pub fn rng_for(&self, label: &str) -> Pcg64 {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(label.as_bytes());
        Pcg64::from_seed(hasher.finalize().into())
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error parsing a [`PuzzleSeed`] from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The input was not exactly 64 characters long.
    #[display("expected 64 hex characters, got {length}")]
    InvalidLength {
        /// Number of characters in the rejected input.
        length: usize,
    },
    /// The input contained a character that is not a hex digit.
    #[display("invalid hex character {character:?}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if length != 64 {
            return Err(ParseSeedError::InvalidLength { length });
        }

        let mut bytes = [0; 32];
        for (i, character) in s.chars().enumerate() {
            let Some(digit) = character.to_digit(16) else {
                return Err(ParseSeedError::InvalidCharacter { character });
            };
            #[expect(clippy::cast_possible_truncation)]
            let digit = digit as u8;
            bytes[i / 2] = (bytes[i / 2] << 4) | digit;
        }
        Ok(Self(bytes))
    }
}
