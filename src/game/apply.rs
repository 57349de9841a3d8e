//! Applying, promoting and taking back moves.

use log::debug;

use super::history::{MoveRecord, UndoInfo};
use super::{Game, GameStatus, MoveError, PromotionError};
use crate::board::{
    CastleSide, Color, ColoredPiece, CoordinateMove, EnPassantTarget, Piece, Square,
};

/// Result of a successful `apply_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move is complete and the turn has passed.
    Completed(GameStatus),
    /// A pawn reached the last rank on `square`; call
    /// [`Game::resolve_promotion`] to finish the move.
    PromotionPending { square: Square },
}

impl Game {
    /// Move the piece on `from` to `to`.
    ///
    /// The request is checked against the legal moves first; on any error
    /// the game is unchanged.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        let piece = self.validate(from, to)?;
        let color = piece.color;
        let position = &self.position;

        let en_passant =
            piece.kind == Piece::Pawn && from.col() != to.col() && position.grid.is_empty(to);
        let castle = if piece.kind == Piece::King {
            CastleSide::from_king_move(from.col(), to.col())
        } else {
            None
        };

        // 1. Undo information, taken before anything moves.
        let mut undo = UndoInfo::capture(position, self.status, self.captured_lens());
        undo.save_square(position, from);
        undo.save_square(position, to);

        // 2. En-passant victim.
        let mut captured = None;
        if en_passant {
            if let Some(target) = position.en_passant {
                let victim = target.pawn_square();
                undo.save_square(position, victim);
                captured = self.position.grid.take(victim);
            }
        }

        // 3. Relocate; whatever stood on `to` is captured.
        let displaced = self.position.grid.take(to);
        if displaced.is_some() {
            captured = displaced;
        }
        self.position.grid.set(from, None);
        self.position.grid.set(to, Some(piece));
        if let Some(victim) = captured {
            self.captured[color.index()].push(victim);
        }

        // 4. Rook relocation and castling rights.
        let row = color.back_row();
        if let Some(side) = castle {
            let rook_from = Square::at(row, side.rook_col());
            let rook_to = Square::at(row, side.rook_dest_col());
            undo.save_square(&self.position, rook_from);
            undo.save_square(&self.position, rook_to);
            let rook = self.position.grid.take(rook_from);
            self.position.grid.set(rook_to, rook);
            self.position.castling.mark_rook_moved(color, side);
        }
        self.update_castling(piece, from, captured, to);

        // 5. En-passant target.
        let double_push = piece.kind == Piece::Pawn && from.row().abs_diff(to.row()) == 2;
        self.position.en_passant = if double_push {
            let skipped = Square::at((from.row() + to.row()) / 2, from.col());
            Some(EnPassantTarget {
                square: skipped,
                creator: color,
            })
        } else {
            None
        };

        self.history.push(MoveRecord {
            from,
            to,
            piece,
            captured,
            castle,
            en_passant,
            promotion: None,
            undo,
        });

        // 6. Promotion suspends the rest of the move.
        if piece.kind == Piece::Pawn && to.row() == color.promotion_row() {
            self.pending_promotion = Some(to);
            debug!("{color} {from}{to} awaits promotion");
            return Ok(MoveOutcome::PromotionPending { square: to });
        }

        // 7-8.
        let resets_clock = piece.kind == Piece::Pawn || captured.is_some();
        self.finish_move(resets_clock);
        debug!("{color} played {from}{to}, status {}", self.status);
        Ok(MoveOutcome::Completed(self.status))
    }

    /// Replace the pending pawn with `kind` and complete the move.
    pub fn resolve_promotion(&mut self, kind: Piece) -> Result<GameStatus, PromotionError> {
        let square = self
            .pending_promotion
            .ok_or(PromotionError::NoPendingPromotion)?;
        if !kind.is_promotion_choice() {
            return Err(PromotionError::InvalidPiece { piece: kind });
        }
        let color = self.position.side_to_move();

        self.position
            .grid
            .set(square, Some(ColoredPiece::new(kind, color)));
        if let Some(record) = self.history.last_mut() {
            record.promotion = Some(kind);
        }
        self.pending_promotion = None;

        self.finish_move(true);
        debug!("{color} promoted on {square} to {kind}, status {}", self.status);
        Ok(self.status)
    }

    /// Apply a parsed coordinate move, resolving its promotion.
    ///
    /// A promoting move with no promotion piece becomes a queen.
    pub fn play(&mut self, mv: CoordinateMove) -> Result<GameStatus, MoveError> {
        let piece = self.validate(mv.from, mv.to)?;
        let promotes = piece.kind == Piece::Pawn && mv.to.row() == piece.color.promotion_row();
        if mv.promotion.is_some() && !promotes {
            return Err(MoveError::UnexpectedPromotion {
                from: mv.from,
                to: mv.to,
            });
        }

        match self.apply_move(mv.from, mv.to)? {
            MoveOutcome::Completed(status) => Ok(status),
            MoveOutcome::PromotionPending { .. } => {
                let kind = mv.promotion.unwrap_or(Piece::Queen);
                Ok(self.resolve_promotion(kind)?)
            }
        }
    }

    /// Parse and play a move such as `e2e4` or `e7e8q`.
    pub fn apply_coordinate_move(&mut self, text: &str) -> Result<GameStatus, MoveError> {
        let mv: CoordinateMove = text.parse()?;
        self.play(mv)
    }

    /// Take back the last history entry, including a pending promotion.
    ///
    /// Returns false if there is nothing to undo.
    pub fn undo_move(&mut self) -> bool {
        let Some(record) = self.history.pop() else {
            return false;
        };
        record.undo.restore(&mut self.position);
        self.status = record.undo.status;
        for (captured, len) in self.captured.iter_mut().zip(record.undo.captured_lens) {
            captured.truncate(len);
        }
        self.pending_promotion = None;
        debug!("undid {} {}{}", record.piece.color, record.from, record.to);
        true
    }

    /// Undo up to `count` entries; returns how many were undone.
    pub fn undo_moves(&mut self, count: usize) -> usize {
        (0..count).take_while(|_| self.undo_move()).count()
    }

    fn validate(&self, from: Square, to: Square) -> Result<ColoredPiece, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameAlreadyEnded {
                status: self.status,
            });
        }
        if let Some(square) = self.pending_promotion {
            return Err(MoveError::PromotionPending { square });
        }
        let piece = self
            .position
            .piece_at(from)
            .ok_or(MoveError::NoPieceAt { square: from })?;
        if piece.color != self.position.side_to_move() {
            return Err(MoveError::NotYourPiece { square: from });
        }
        if !self.position.legal_moves(from).contains(&to) {
            return Err(MoveError::IllegalDestination { from, to });
        }
        Ok(piece)
    }

    /// King moves and rooks leaving or being taken on their corners.
    fn update_castling(
        &mut self,
        piece: ColoredPiece,
        from: Square,
        captured: Option<ColoredPiece>,
        to: Square,
    ) {
        let rights = &mut self.position.castling;
        match piece.kind {
            Piece::King => rights.mark_king_moved(piece.color),
            Piece::Rook => {
                if let Some(side) = home_rook_side(from, piece.color) {
                    rights.mark_rook_moved(piece.color, side);
                }
            }
            _ => {}
        }
        if let Some(victim) = captured.filter(|victim| victim.kind == Piece::Rook) {
            if let Some(side) = home_rook_side(to, victim.color) {
                rights.mark_rook_moved(victim.color, side);
            }
        }
    }

    /// Switch sides, update the counters and recompute status.
    fn finish_move(&mut self, resets_clock: bool) {
        let position = &mut self.position;
        if resets_clock {
            position.halfmove_clock = 0;
        } else {
            position.halfmove_clock += 1;
        }
        if position.side_to_move == Color::Black {
            position.fullmove_number += 1;
        }
        position.side_to_move = position.side_to_move.opponent();
        self.status = GameStatus::evaluate(&self.position);
    }

    fn captured_lens(&self) -> [usize; 2] {
        [self.captured[0].len(), self.captured[1].len()]
    }
}

/// The castling side whose rook starts on `square`, for `color`.
fn home_rook_side(square: Square, color: Color) -> Option<CastleSide> {
    if square.row() != color.back_row() {
        return None;
    }
    CastleSide::BOTH
        .into_iter()
        .find(|side| side.rook_col() == square.col())
}
