use super::Game;
use crate::board::{CoordinateMove, Piece, PROMOTION_PIECES};

impl Game {
    /// Count leaf nodes of the legal move tree to `depth` plies.
    ///
    /// Each promotion piece counts as a separate move. The game is left as
    /// it was found.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut nodes = 0;
        for mv in self.all_legal_moves() {
            let promotes = self.position.piece_at(mv.from).map_or(false, |piece| {
                piece.kind == Piece::Pawn && mv.to.row() == piece.color.promotion_row()
            });
            if promotes {
                for kind in PROMOTION_PIECES {
                    nodes += self.perft_child(mv.with_promotion(kind), depth);
                }
            } else {
                nodes += self.perft_child(mv, depth);
            }
        }

        nodes
    }

    fn perft_child(&mut self, mv: CoordinateMove, depth: usize) -> u64 {
        if self.play(mv).is_err() {
            return 0;
        }
        let nodes = self.perft(depth - 1);
        self.undo_move();
        nodes
    }
}
