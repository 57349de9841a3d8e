//! Coordinate move notation and en-passant target types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::error::MoveParseError;

/// A move in coordinate notation: `e2e4`, or `e7e8q` with a promotion letter.
///
/// This is the format the external engine speaks and the opening book
/// stores. It says nothing about legality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordinateMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl CoordinateMove {
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        CoordinateMove {
            from,
            to,
            promotion: None,
        }
    }

    #[must_use]
    pub const fn with_promotion(mut self, piece: Piece) -> Self {
        self.promotion = Some(piece);
        self
    }
}

impl fmt::Display for CoordinateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for CoordinateMove {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: s.chars().count(),
            });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from: Square = s[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = s[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(piece) if c.is_ascii_lowercase() && piece.is_promotion_choice() => {
                    Some(piece)
                }
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        Ok(CoordinateMove {
            from,
            to,
            promotion,
        })
    }
}

/// The square a pawn skipped with its two-square push, tagged with the
/// pawn's color.
///
/// Lives for exactly one move: the opponent may capture onto `square`
/// immediately, and the next applied move clears it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnPassantTarget {
    pub square: Square,
    pub creator: Color,
}

impl EnPassantTarget {
    /// Square of the pawn that may be captured
    #[must_use]
    pub fn pawn_square(self) -> Square {
        // The pushed pawn sits one step past the skipped square in its own direction.
        Square::at(
            (self.square.row() as isize + self.creator.pawn_direction()) as usize,
            self.square.col(),
        )
    }
}
