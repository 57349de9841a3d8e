//! Square-attacked and in-check queries.
//!
//! Attack sets reuse the move shapes from `movegen`, with two differences:
//! pawns attack both forward diagonals whether or not anything stands
//! there, and kings attack their eight neighbours without castling.

use super::movegen::{
    pawn_attacks, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS,
};
use super::{Color, ColoredPiece, Grid, Piece, Square};

impl Grid {
    /// Squares attacked by `piece` standing on `from`.
    #[must_use]
    pub fn attack_targets(&self, from: Square, piece: ColoredPiece) -> Vec<Square> {
        let color = piece.color;
        match piece.kind {
            Piece::Pawn => pawn_attacks(from, color).collect(),
            Piece::Knight => self.leaper_targets(from, color, &KNIGHT_OFFSETS),
            Piece::Bishop => self.ray_targets(from, color, &BISHOP_DIRECTIONS),
            Piece::Rook => self.ray_targets(from, color, &ROOK_DIRECTIONS),
            Piece::Queen => self.queen_targets(from, color),
            Piece::King => KING_OFFSETS
                .iter()
                .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
                .collect(),
        }
    }

    /// True iff some piece of `defending`'s opponent attacks `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, defending: Color) -> bool {
        self.pieces_of(defending.opponent())
            .any(|(from, piece)| self.attack_targets(from, piece).contains(&square))
    }

    /// True if `color`'s king is attacked. False when there is no such king.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .map_or(false, |king| self.is_square_attacked(king, color))
    }
}
