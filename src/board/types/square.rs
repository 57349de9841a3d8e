//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, stored as (row, col).
///
/// Row 0 is rank 8 (Black's back rank) and row 7 is rank 1, so rows read
/// top to bottom the way a board is printed from White's side. Column 0 is
/// the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Callers guarantee `row < 8 && col < 8`.
    #[inline]
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        debug_assert!(row < 8 && col < 8);
        Square {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Board row (0 = rank 8, 7 = rank 1)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Board column (0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// File letter, `'a'..='h'`
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Rank number, 1..=8
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        8 - self.row as usize
    }

    /// The square `(row + d_row, col + d_col)`, if it is on the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Square> {
        let row = self.row as isize + d_row;
        let col = self.col as isize + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::at(row as usize, col as usize))
        } else {
            None
        }
    }

    /// All 64 squares in row-major order, a8 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square::at(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square::at(row, col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let row = match rank {
            '1'..='8' => 8 - (rank as usize - '0' as usize),
            _ => return Err(invalid()),
        };

        Ok(Square::at(row, col))
    }
}
