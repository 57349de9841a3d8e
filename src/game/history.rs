//! Move records and the information needed to take them back.

use super::GameStatus;
use crate::board::{
    CastleSide, CastlingRights, Color, ColoredPiece, CoordinateMove, EnPassantTarget, Piece,
    Position, Square,
};

/// One applied move, as kept in the game history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: ColoredPiece,
    pub captured: Option<ColoredPiece>,
    pub castle: Option<CastleSide>,
    pub en_passant: bool,
    /// `None` until a pending promotion is resolved.
    pub promotion: Option<Piece>,
    pub(crate) undo: UndoInfo,
}

impl MoveRecord {
    /// The move in coordinate form, including any resolved promotion.
    #[must_use]
    pub fn coordinate(&self) -> CoordinateMove {
        CoordinateMove {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.piece.color
    }
}

/// Everything a move changes, in its prior state.
///
/// Only the squares a move touches are stored: the source, the
/// destination, the en-passant victim and the castling rook's two squares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct UndoInfo {
    pub(crate) squares: Vec<(Square, Option<ColoredPiece>)>,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<EnPassantTarget>,
    pub(crate) side_to_move: Color,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) status: GameStatus,
    pub(crate) captured_lens: [usize; 2],
}

impl UndoInfo {
    /// Capture the non-grid state of `position` before a move.
    pub(crate) fn capture(
        position: &Position,
        status: GameStatus,
        captured_lens: [usize; 2],
    ) -> Self {
        UndoInfo {
            squares: Vec::with_capacity(4),
            castling: position.castling,
            en_passant: position.en_passant,
            side_to_move: position.side_to_move,
            halfmove_clock: position.halfmove_clock,
            fullmove_number: position.fullmove_number,
            status,
            captured_lens,
        }
    }

    /// Remember the current contents of `square` unless already recorded.
    pub(crate) fn save_square(&mut self, position: &Position, square: Square) {
        if self.squares.iter().all(|&(saved, _)| saved != square) {
            self.squares.push((square, position.grid.get(square)));
        }
    }

    /// Put `position` back the way it was before the move.
    pub(crate) fn restore(&self, position: &mut Position) {
        for &(square, piece) in self.squares.iter().rev() {
            position.grid.set(square, piece);
        }
        position.castling = self.castling;
        position.en_passant = self.en_passant;
        position.side_to_move = self.side_to_move;
        position.halfmove_clock = self.halfmove_clock;
        position.fullmove_number = self.fullmove_number;
    }
}
