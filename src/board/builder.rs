//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Piece, PositionBuilder};
//!
//! let position = PositionBuilder::new()
//!     .piece("e1".parse().unwrap(), Color::White, Piece::King)
//!     .piece("e8".parse().unwrap(), Color::Black, Piece::King)
//!     .piece("a2".parse().unwrap(), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/P7/4K3 w - - 0 1");
//! ```

use super::{CastlingRights, Color, ColoredPiece, EnPassantTarget, Grid, Piece, Position, Square};

/// A fluent builder for constructing `Position` values.
///
/// Castling rights start fully revoked; the builder does not check that
/// kings and rooks stand where the rights imply.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    grid: Grid,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<EnPassantTarget>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a builder for an empty board.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            grid: Grid::empty(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            grid: Grid::starting(),
            castling: CastlingRights::all(),
            ..Self::new()
        }
    }

    /// Place a piece, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.grid.set(square, Some(ColoredPiece::new(piece, color)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.grid.set(square, None);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Set the en-passant target. The side not to move at build time is
    /// recorded as the pawn's owner.
    #[must_use]
    pub const fn en_passant(mut self, square: Square) -> Self {
        self.en_passant = Some(EnPassantTarget {
            square,
            creator: Color::White,
        });
        self
    }

    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    #[must_use]
    pub fn build(self) -> Position {
        let creator = self.side_to_move.opponent();
        Position {
            grid: self.grid,
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant: self
                .en_passant
                .map(|target| EnPassantTarget { creator, ..target }),
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CastleSide;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position() {
        let built = PositionBuilder::starting_position().build();
        assert_eq!(built, Position::new());
    }

    #[test]
    fn test_two_kings() {
        let position = PositionBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("e8"), Color::Black, Piece::King)
            .build();

        assert!(position.piece_at(sq("e1")).is_some());
        assert!(position.piece_at(sq("e8")).is_some());
        assert!(position.piece_at(sq("a1")).is_none());
        assert!(position.castling_rights().is_empty());
    }

    #[test]
    fn test_castling_rights() {
        let mut rights = CastlingRights::all();
        rights.mark_rook_moved(Color::White, CastleSide::Queenside);
        rights.mark_king_moved(Color::Black);
        let position = PositionBuilder::starting_position()
            .castling(rights)
            .build();

        let rights = position.castling_rights();
        assert!(rights.holds(Color::White, CastleSide::Kingside));
        assert!(!rights.holds(Color::White, CastleSide::Queenside));
        assert!(!rights.holds(Color::Black, CastleSide::Kingside));
        assert!(!rights.holds(Color::Black, CastleSide::Queenside));
    }

    #[test]
    fn test_en_passant_creator_follows_side_to_move() {
        let position = PositionBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("e8"), Color::Black, Piece::King)
            .piece(sq("d5"), Color::Black, Piece::Pawn)
            .en_passant(sq("d6"))
            .side_to_move(Color::White)
            .build();

        let target = position.en_passant_target().unwrap();
        assert_eq!(target.creator, Color::Black);
        assert_eq!(target.pawn_square(), sq("d5"));
    }

    #[test]
    fn test_clear_square() {
        let position = PositionBuilder::starting_position()
            .clear(sq("a1"))
            .build();

        assert!(position.piece_at(sq("a1")).is_none());
        assert!(position.piece_at(sq("b1")).is_some());
    }
}
