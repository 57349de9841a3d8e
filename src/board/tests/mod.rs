//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move shapes and legality filtering
//! - `castling.rs` - The four castling moves and the ways they are refused
//! - `en_passant.rs` - The one-move en-passant window
//! - `perft.rs` - Move tree node counts for known positions
//! - `proptest.rs` - Property-based tests over random games

mod castling;
mod en_passant;

use crate::board::{Position, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

pub(super) fn squares(list: &[&str]) -> Vec<Square> {
    list.iter().map(|s| sq(s)).collect()
}

pub(super) fn position(fen: &str) -> Position {
    Position::try_from_fen(fen).unwrap()
}
