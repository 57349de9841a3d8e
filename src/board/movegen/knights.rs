use super::super::{Color, Grid, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Grid {
    /// Single-jump targets for knights and kings: on the board and not
    /// holding a piece of `color`.
    pub(crate) fn leaper_targets(
        &self,
        from: Square,
        color: Color,
        offsets: &[(isize, isize)],
    ) -> Vec<Square> {
        offsets
            .iter()
            .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
            .filter(|&to| self.get(to).map_or(true, |piece| piece.color != color))
            .collect()
    }
}
