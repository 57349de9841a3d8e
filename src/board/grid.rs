//! Piece storage: an 8x8 array of optional pieces.
//!
//! The grid only knows about bounds. Every chess rule lives above it.

use super::{Color, ColoredPiece, Piece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    squares: [[Option<ColoredPiece>; 8]; 8],
}

impl Grid {
    #[must_use]
    pub const fn empty() -> Self {
        Grid {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard initial setup.
    #[must_use]
    pub fn starting() -> Self {
        let mut grid = Grid::empty();
        for (col, &piece) in BACK_RANK.iter().enumerate() {
            for color in Color::BOTH {
                let back = color.back_row();
                let pawns = color.pawn_start_row();
                grid.set(Square::at(back, col), Some(ColoredPiece::new(piece, color)));
                grid.set(
                    Square::at(pawns, col),
                    Some(ColoredPiece::new(Piece::Pawn, color)),
                );
            }
        }
        grid
    }

    #[inline]
    #[must_use]
    pub fn in_bounds(row: isize, col: isize) -> bool {
        (0..8).contains(&row) && (0..8).contains(&col)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, square: Square) -> Option<ColoredPiece> {
        self.squares[square.row()][square.col()]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<ColoredPiece>) {
        self.squares[square.row()][square.col()] = piece;
    }

    /// Empty `square`, returning what was there.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<ColoredPiece> {
        self.squares[square.row()][square.col()].take()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Occupied squares in row-major order, a8 first.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Squares holding pieces of `color`, in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = ColoredPiece::new(Piece::King, color);
        Square::all().find(|&sq| self.get(sq) == Some(king))
    }

    pub(crate) fn count(&self, piece: ColoredPiece) -> usize {
        self.occupied().filter(|&(_, p)| p == piece).count()
    }
}
