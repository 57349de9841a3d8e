use std::fmt;

use crate::engine::{EngineError, EngineProtocolError};
use crate::game::{GameError, MoveError, PromotionError};

/// Why a session request was refused.
#[derive(Debug)]
pub enum SessionError {
    Move(MoveError),
    Promotion(PromotionError),
    Game(GameError),
    /// An engine search is in flight
    EngineThinking,
    /// The request is for the engine's move, but the engine is not to move
    NotEngineTurn,
    /// A human move was offered while the engine is to move
    NotHumanTurn,
    /// The engine answered with a move that cannot be played
    EngineProtocol(EngineProtocolError),
    Engine(EngineError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Move(e) => write!(f, "{e}"),
            SessionError::Promotion(e) => write!(f, "{e}"),
            SessionError::Game(e) => write!(f, "{e}"),
            SessionError::EngineThinking => write!(f, "The engine is thinking"),
            SessionError::NotEngineTurn => write!(f, "It is not the engine's turn"),
            SessionError::NotHumanTurn => write!(f, "It is the engine's turn"),
            SessionError::EngineProtocol(e) => write!(f, "{e}"),
            SessionError::Engine(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Move(e) => Some(e),
            SessionError::Promotion(e) => Some(e),
            SessionError::Game(e) => Some(e),
            SessionError::EngineProtocol(e) => Some(e),
            SessionError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveError> for SessionError {
    fn from(e: MoveError) -> Self {
        SessionError::Move(e)
    }
}

impl From<PromotionError> for SessionError {
    fn from(e: PromotionError) -> Self {
        SessionError::Promotion(e)
    }
}

impl From<GameError> for SessionError {
    fn from(e: GameError) -> Self {
        SessionError::Game(e)
    }
}

impl From<EngineProtocolError> for SessionError {
    fn from(e: EngineProtocolError) -> Self {
        SessionError::EngineProtocol(e)
    }
}

impl From<EngineError> for SessionError {
    fn from(e: EngineError) -> Self {
        SessionError::Engine(e)
    }
}
