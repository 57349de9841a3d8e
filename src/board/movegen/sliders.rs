use super::super::{Color, Grid, Square};

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Grid {
    /// Squares reached by casting rays from `from`, in direction order.
    ///
    /// Each ray runs until the board edge or the first piece. An enemy
    /// piece's square is included, a friendly one is not.
    pub(crate) fn ray_targets(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
    ) -> Vec<Square> {
        let mut targets = Vec::new();
        for &(d_row, d_col) in directions {
            let mut current = from;
            while let Some(next) = current.offset(d_row, d_col) {
                match self.get(next) {
                    None => targets.push(next),
                    Some(piece) => {
                        if piece.color != color {
                            targets.push(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
        targets
    }

    /// Queen rays: the rook directions first, then the bishop diagonals.
    pub(crate) fn queen_targets(&self, from: Square, color: Color) -> Vec<Square> {
        let mut targets = self.ray_targets(from, color, &ROOK_DIRECTIONS);
        targets.extend(self.ray_targets(from, color, &BISHOP_DIRECTIONS));
        targets
    }
}
