//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let position = Position::new();
//! assert_eq!(position.side_to_move(), Color::White);
//! ```

pub use super::{
    CastleSide, CastlingRights, Color, ColoredPiece, CoordinateMove, FenError, MoveParseError,
    Piece, Position, PositionBuilder, Square, SquareError,
};
