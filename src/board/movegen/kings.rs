use super::super::{CastleSide, Color, ColoredPiece, Piece, Position, Square};

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const KING_HOME_COL: usize = 4;

impl Position {
    /// One-step king moves followed by castling destinations (kingside first).
    pub(crate) fn king_targets(&self, from: Square, color: Color) -> Vec<Square> {
        let mut targets = self.grid.leaper_targets(from, color, &KING_OFFSETS);

        let row = color.back_row();
        if from != Square::at(row, KING_HOME_COL) || self.castling.king_moved(color) {
            return targets;
        }
        if self.grid.is_square_attacked(from, color) {
            return targets;
        }
        for side in CastleSide::BOTH {
            if self.can_castle(color, side) {
                targets.push(Square::at(row, side.king_dest_col()));
            }
        }
        targets
    }

    /// Rights, rook presence, empty path and unattacked pass/landing squares.
    ///
    /// The king's own square is checked by the caller.
    fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        let row = color.back_row();
        let rook = ColoredPiece::new(Piece::Rook, color);

        self.castling.holds(color, side)
            && self.grid.get(Square::at(row, side.rook_col())) == Some(rook)
            && side
                .between_cols()
                .all(|col| self.grid.is_empty(Square::at(row, col)))
            && !self
                .grid
                .is_square_attacked(Square::at(row, side.king_pass_col()), color)
            && !self
                .grid
                .is_square_attacked(Square::at(row, side.king_dest_col()), color)
    }
}
