use super::{CastlingRights, Color, ColoredPiece, EnPassantTarget, Grid, Square};

/// Everything FEN describes: pieces, side to move, castling rights,
/// en-passant target and the two move counters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) grid: Grid,
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<EnPassantTarget>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Position {
            grid: Grid::starting(),
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub(crate) fn empty() -> Self {
        Position {
            grid: Grid::empty(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<ColoredPiece> {
        self.grid.get(square)
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<EnPassantTarget> {
        self.en_passant
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// True if the side to move is in check.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.grid.is_in_check(self.side_to_move)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
