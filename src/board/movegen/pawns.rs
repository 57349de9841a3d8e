use super::super::{Color, Position, Square};

/// The two forward diagonals a pawn of `color` attacks, occupied or not.
pub(crate) fn pawn_attacks(from: Square, color: Color) -> impl Iterator<Item = Square> {
    let dir = color.pawn_direction();
    [-1, 1]
        .into_iter()
        .filter_map(move |d_col| from.offset(dir, d_col))
}

impl Position {
    pub(crate) fn pawn_targets(&self, from: Square, color: Color) -> Vec<Square> {
        let mut targets = Vec::new();
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.grid.is_empty(one) {
                targets.push(one);
                if from.row() == color.pawn_start_row() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.grid.is_empty(two) {
                            targets.push(two);
                        }
                    }
                }
            }
        }

        for diag in pawn_attacks(from, color) {
            match self.grid.get(diag) {
                Some(piece) if piece.color != color => targets.push(diag),
                Some(_) => {}
                None if self.en_passant_open_for(diag, color) => targets.push(diag),
                None => {}
            }
        }

        targets
    }

    /// True if a pawn of `color` landing on `square` captures en passant.
    pub(crate) fn en_passant_open_for(&self, square: Square, color: Color) -> bool {
        self.en_passant
            .map_or(false, |target| target.square == square && target.creator != color)
    }
}
