//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board.
///
/// Stored as an index (a1=0, b1=1, ..., h8=63). Files and ranks are 0-indexed,
/// so `e4` is file 4, rank 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Square(u8);

impl Square {
    /// Create a square from file and rank, returning `None` when out of bounds.
    #[inline]
    #[must_use]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Build a square from coordinates already known to be on the board.
    #[inline]
    pub(crate) const fn at(file: u8, rank: u8) -> Self {
        Square(rank * 8 + file)
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The square `df` files and `dr` ranks away, or `None` if that leaves the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, df: i8, dr: i8) -> Option<Self> {
        let file = self.file() as i8 + df;
        let rank = self.rank() as i8 + dr;
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            None
        } else {
            Some(Square::at(file as u8, rank as u8))
        }
    }

    /// True for light squares (h1, a8, ...), false for dark squares (a1, h8, ...).
    #[inline]
    #[must_use]
    pub const fn is_light(self) -> bool {
        (self.file() + self.rank()) % 2 == 1
    }

    /// Iterate over all 64 squares from a1 to h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() + b'a') as char, self.rank() + 1)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        match (bytes[0], bytes[1]) {
            (f @ b'a'..=b'h', r @ b'1'..=b'8') => Ok(Square::at(f - b'a', r - b'1')),
            _ => Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            }),
        }
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    /// Convert a square index (a1=0, ..., h8=63).
    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if index < 64 {
            Ok(Square(index))
        } else {
            Err(SquareError::IndexOutOfBounds { index })
        }
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> u8 {
        square.0
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    /// Convert a `(file, rank)` pair.
    fn try_from((file, rank): (u8, u8)) -> Result<Self, Self::Error> {
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Square::at(file, rank))
    }
}
