//! Board representation and rule queries.
//!
//! An 8x8 grid of optional pieces plus the side to move, castling rights,
//! en-passant target and move counters. Row 0 is rank 8, column 0 is file a.
//! Nothing in this module mutates a position as a side effect of a query;
//! moves are applied by [`crate::game::Game`].
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Position};
//!
//! let position = Position::new();
//! let moves = position.legal_moves_for(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! assert_eq!(moves.len(), 20);
//! ```

mod attacks;
mod builder;
mod error;
mod fen;
mod grid;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use fen::START_FEN;
pub use grid::Grid;
pub use state::Position;
pub use types::{
    CastleSide, CastlingRights, Color, ColoredPiece, CoordinateMove, EnPassantTarget, Piece,
    Square, PROMOTION_PIECES,
};
