//! Core chess types.
//!
//! This module contains the value types used throughout the rules engine:
//! - `Piece`, `Color` and `ColoredPiece` - piece kinds and colors
//! - `Square` - (row, col) board square
//! - `CastlingRights` and `CastleSide` - castling state
//! - `CoordinateMove` and `EnPassantTarget` - move notation and the en-passant window

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{CoordinateMove, EnPassantTarget};
pub use piece::{Color, ColoredPiece, Piece, PROMOTION_PIECES};
pub use square::Square;
