//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

const WHITE_KING_MOVED: u8 = 1 << 0;
const WHITE_KINGSIDE_ROOK_MOVED: u8 = 1 << 1;
const WHITE_QUEENSIDE_ROOK_MOVED: u8 = 1 << 2;
const BLACK_KING_MOVED: u8 = 1 << 3;
const BLACK_KINGSIDE_ROOK_MOVED: u8 = 1 << 4;
const BLACK_QUEENSIDE_ROOK_MOVED: u8 = 1 << 5;

/// Which rook a castling move uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// Column of this side's rook before castling
    #[inline]
    #[must_use]
    pub const fn rook_col(self) -> usize {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// Column the rook lands on
    #[inline]
    #[must_use]
    pub const fn rook_dest_col(self) -> usize {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// Column the king lands on
    #[inline]
    #[must_use]
    pub const fn king_dest_col(self) -> usize {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// Column the king crosses on its way
    #[inline]
    #[must_use]
    pub const fn king_pass_col(self) -> usize {
        self.rook_dest_col()
    }

    /// Columns strictly between the king and the rook
    #[must_use]
    pub fn between_cols(self) -> std::ops::Range<usize> {
        match self {
            CastleSide::Kingside => 5..7,
            CastleSide::Queenside => 1..4,
        }
    }

    /// Side implied by a two-column king move, if it is one
    #[must_use]
    pub fn from_king_move(from_col: usize, to_col: usize) -> Option<Self> {
        match to_col as isize - from_col as isize {
            2 => Some(CastleSide::Kingside),
            -2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

/// Castling state, recorded as which kings and rooks have moved.
///
/// Bits are only ever set during play; the one way back is restoring an
/// earlier value on undo. The default value is the start of a game, with
/// every right still held.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// All four rights held (nothing has moved)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(0)
    }

    /// No rights held (both kings have moved)
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(WHITE_KING_MOVED | BLACK_KING_MOVED)
    }

    /// Returns true if `color` may still castle toward `side`
    #[inline]
    #[must_use]
    pub const fn holds(self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    /// Returns true if no right is held by either color
    #[must_use]
    pub fn is_empty(self) -> bool {
        Color::BOTH
            .iter()
            .all(|&c| CastleSide::BOTH.iter().all(|&s| !self.holds(c, s)))
    }

    #[inline]
    #[must_use]
    pub const fn king_moved(self, color: Color) -> bool {
        self.0 & Self::king_bit(color) != 0
    }

    #[inline]
    #[must_use]
    pub const fn rook_moved(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::rook_bit(color, side) != 0
    }

    #[inline]
    pub fn mark_king_moved(&mut self, color: Color) {
        self.0 |= Self::king_bit(color);
    }

    #[inline]
    pub fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::rook_bit(color, side);
    }

    const fn king_bit(color: Color) -> u8 {
        match color {
            Color::White => WHITE_KING_MOVED,
            Color::Black => BLACK_KING_MOVED,
        }
    }

    const fn rook_bit(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => WHITE_KINGSIDE_ROOK_MOVED,
            (Color::White, CastleSide::Queenside) => WHITE_QUEENSIDE_ROOK_MOVED,
            (Color::Black, CastleSide::Kingside) => BLACK_KINGSIDE_ROOK_MOVED,
            (Color::Black, CastleSide::Queenside) => BLACK_QUEENSIDE_ROOK_MOVED,
        }
    }
}
