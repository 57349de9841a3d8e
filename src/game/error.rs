//! Error types for game play.

use std::fmt;

use super::GameStatus;
use crate::board::{MoveParseError, Piece, Square};

/// Why a move request was refused. The game is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The source square is empty
    NoPieceAt { square: Square },
    /// The piece on the source square belongs to the side not to move
    NotYourPiece { square: Square },
    /// The destination is not among the piece's legal moves
    IllegalDestination { from: Square, to: Square },
    /// The game has reached a terminal status
    GameAlreadyEnded { status: GameStatus },
    /// A pawn on `square` is waiting for its promotion piece
    PromotionPending { square: Square },
    /// A promotion piece was given for a move that does not promote
    UnexpectedPromotion { from: Square, to: Square },
    /// Coordinate text could not be parsed
    Parse(MoveParseError),
    Promotion(PromotionError),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPieceAt { square } => write!(f, "No piece on {square}"),
            MoveError::NotYourPiece { square } => {
                write!(f, "The piece on {square} belongs to the opponent")
            }
            MoveError::IllegalDestination { from, to } => {
                write!(f, "Illegal move from {from} to {to}")
            }
            MoveError::GameAlreadyEnded { status } => {
                write!(f, "Game has already ended: {status}")
            }
            MoveError::PromotionPending { square } => {
                write!(f, "Promotion on {square} must be resolved first")
            }
            MoveError::UnexpectedPromotion { from, to } => {
                write!(f, "Move {from}{to} is not a promotion")
            }
            MoveError::Parse(e) => write!(f, "{e}"),
            MoveError::Promotion(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Parse(e) => Some(e),
            MoveError::Promotion(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveParseError> for MoveError {
    fn from(e: MoveParseError) -> Self {
        MoveError::Parse(e)
    }
}

impl From<PromotionError> for MoveError {
    fn from(e: PromotionError) -> Self {
        MoveError::Promotion(e)
    }
}

/// Errors from resolving a pending promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionError {
    NoPendingPromotion,
    /// Pawns and kings are not promotion choices
    InvalidPiece { piece: Piece },
}

impl fmt::Display for PromotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromotionError::NoPendingPromotion => write!(f, "No promotion is pending"),
            PromotionError::InvalidPiece { piece } => {
                write!(f, "Cannot promote to {piece}")
            }
        }
    }
}

impl std::error::Error for PromotionError {}

/// Errors from resigning or agreeing a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    GameAlreadyEnded { status: GameStatus },
    PromotionPending { square: Square },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameAlreadyEnded { status } => {
                write!(f, "Game has already ended: {status}")
            }
            GameError::PromotionPending { square } => {
                write!(f, "Promotion on {square} must be resolved first")
            }
        }
    }
}

impl std::error::Error for GameError {}
