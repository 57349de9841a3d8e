use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Position};

/// Where a game stands after the last completed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
    /// The given color resigned.
    Resigned(Color),
    DrawAgreed,
}

impl GameStatus {
    /// Derive the status of `position` from check and mobility of the side
    /// to move.
    #[must_use]
    pub fn evaluate(position: &Position) -> Self {
        let side = position.side_to_move();
        let in_check = position.in_check();
        let has_moves = position.has_legal_move(side);
        match (in_check, has_moves) {
            (false, true) => GameStatus::Playing,
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !self.is_ongoing()
    }

    /// Playing or Check.
    #[must_use]
    pub const fn is_ongoing(self) -> bool {
        matches!(self, GameStatus::Playing | GameStatus::Check)
    }

    /// The winning color, given the side to move in the final position.
    #[must_use]
    pub const fn winner(self, side_to_move: Color) -> Option<Color> {
        match self {
            GameStatus::Checkmate => Some(side_to_move.opponent()),
            GameStatus::Resigned(color) => Some(color.opponent()),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Playing => write!(f, "playing"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::Resigned(color) => write!(f, "{color} resigned"),
            GameStatus::DrawAgreed => write!(f, "draw agreed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_start_position() {
        assert_eq!(GameStatus::evaluate(&Position::new()), GameStatus::Playing);
    }

    #[test]
    fn test_evaluate_all_four_states() {
        let cases = [
            ("4k3/8/8/8/8/8/8/4K3 w - - 0 1", GameStatus::Playing),
            ("4k3/8/8/8/8/8/8/r3K3 w - - 0 1", GameStatus::Check),
            ("7k/8/8/8/8/8/5PPP/r5K1 w - - 0 1", GameStatus::Checkmate),
            ("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1", GameStatus::Stalemate),
        ];
        for (fen, expected) in cases {
            let position = Position::try_from_fen(fen).unwrap();
            assert_eq!(GameStatus::evaluate(&position), expected, "{fen}");
        }
    }

    #[test]
    fn test_terminal_flags() {
        assert!(GameStatus::Playing.is_ongoing());
        assert!(GameStatus::Check.is_ongoing());
        assert!(GameStatus::Checkmate.is_terminal());
        assert!(GameStatus::Stalemate.is_terminal());
        assert!(GameStatus::Resigned(Color::White).is_terminal());
        assert!(GameStatus::DrawAgreed.is_terminal());
    }

    #[test]
    fn test_winner() {
        assert_eq!(GameStatus::Checkmate.winner(Color::White), Some(Color::Black));
        assert_eq!(
            GameStatus::Resigned(Color::Black).winner(Color::White),
            Some(Color::White)
        );
        assert_eq!(GameStatus::Stalemate.winner(Color::White), None);
        assert_eq!(GameStatus::DrawAgreed.winner(Color::Black), None);
    }
}
