//! Errors at the engine boundary.

use std::fmt;
use std::io;
use std::time::Duration;

use crate::board::{CoordinateMove, Square};

/// Failures talking to the engine process.
#[derive(Debug)]
pub enum EngineError {
    /// Spawning, writing to or reading from the process failed
    Io(io::Error),
    /// The engine closed its output
    Closed,
    /// No line arrived within the response timeout
    Timeout { waited: Duration },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Io(e) => write!(f, "Engine I/O error: {e}"),
            EngineError::Closed => write!(f, "Engine closed its output"),
            EngineError::Timeout { waited } => {
                write!(f, "Engine did not respond within {} ms", waited.as_millis())
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for EngineError {
    fn from(e: io::Error) -> Self {
        EngineError::Io(e)
    }
}

/// A best move from the engine that cannot be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineProtocolError {
    /// Not a coordinate move, including `(none)` and `0000`
    Unparsable { text: String },
    /// The source square is empty
    EmptySource { square: Square },
    /// The piece on the source square is not the engine's
    WrongColor { square: Square },
    /// Well-formed, but not legal in the current position
    IllegalMove { mv: CoordinateMove },
}

impl fmt::Display for EngineProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineProtocolError::Unparsable { text } => {
                write!(f, "Engine sent an unparsable move '{text}'")
            }
            EngineProtocolError::EmptySource { square } => {
                write!(f, "Engine moved from empty square {square}")
            }
            EngineProtocolError::WrongColor { square } => {
                write!(f, "Engine moved the opponent's piece on {square}")
            }
            EngineProtocolError::IllegalMove { mv } => {
                write!(f, "Engine move {mv} is illegal")
            }
        }
    }
}

impl std::error::Error for EngineProtocolError {}
