//! Per-piece move generation.
//!
//! `pseudo_moves` follows each piece's movement shape; `legal_moves` then
//! drops every destination that would leave the mover's own king attacked.
//! Offsets and ray directions are iterated in a fixed order so the output
//! order is stable.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::KING_OFFSETS;
pub(crate) use knights::KNIGHT_OFFSETS;
pub(crate) use pawns::pawn_attacks;
pub(crate) use sliders::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

use super::{Color, ColoredPiece, CoordinateMove, Piece, Position, Square};

impl Position {
    /// Destinations allowed by the shape of the piece on `from`, ignoring
    /// whether the move exposes its own king. Empty if `from` is empty.
    #[must_use]
    pub fn pseudo_moves(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.grid.get(from) else {
            return Vec::new();
        };
        let color = piece.color;

        match piece.kind {
            Piece::Pawn => self.pawn_targets(from, color),
            Piece::Knight => self.grid.leaper_targets(from, color, &KNIGHT_OFFSETS),
            Piece::Bishop => self.grid.ray_targets(from, color, &BISHOP_DIRECTIONS),
            Piece::Rook => self.grid.ray_targets(from, color, &ROOK_DIRECTIONS),
            Piece::Queen => self.grid.queen_targets(from, color),
            Piece::King => self.king_targets(from, color),
        }
    }

    /// Pseudo moves from `from` that keep the mover's king out of attack.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.grid.get(from) else {
            return Vec::new();
        };
        self.pseudo_moves(from)
            .into_iter()
            .filter(|&to| self.keeps_king_safe(from, to, piece))
            .collect()
    }

    /// Every legal (from, to) pair for `color`, in board order.
    ///
    /// A promoting pawn move appears once, without a promotion piece.
    #[must_use]
    pub fn legal_moves_for(&self, color: Color) -> Vec<CoordinateMove> {
        self.grid
            .pieces_of(color)
            .flat_map(|(from, _)| {
                self.legal_moves(from)
                    .into_iter()
                    .map(move |to| CoordinateMove::new(from, to))
            })
            .collect()
    }

    /// True if any piece of `color` has at least one legal move.
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.grid
            .pieces_of(color)
            .any(|(from, _)| !self.legal_moves(from).is_empty())
    }

    /// Plays the move on a scratch copy of the grid and asks whether the
    /// mover's king is attacked afterwards. `self` is never touched.
    fn keeps_king_safe(&self, from: Square, to: Square, piece: ColoredPiece) -> bool {
        let mut probe = self.grid;
        if piece.kind == Piece::Pawn && from.col() != to.col() && probe.is_empty(to) {
            if let Some(target) = self.en_passant {
                probe.set(target.pawn_square(), None);
            }
        }
        probe.set(from, None);
        probe.set(to, Some(piece));
        !probe.is_in_check(piece.color)
    }
}
