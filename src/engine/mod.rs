//! Talking to an external UCI engine.
//!
//! Commands and engine output are typed values ([`EngineCommand`],
//! [`EngineLine`]). An [`EngineClient`] sends them over any
//! [`EngineTransport`]; [`ProcessTransport`] runs the engine as a child
//! process. Moves coming back are plain text and are only checked against
//! the rules by the caller (see [`crate::session::PlaySession`]).

mod client;
mod command;
mod error;
mod options;
mod response;
mod transport;

#[cfg(test)]
pub(crate) mod fake;

pub use client::{EngineClient, SearchEvent, SearchStream};
pub use command::{EngineCommand, SearchRequest};
pub use error::{EngineError, EngineProtocolError};
pub use options::{EngineOptions, DEFAULT_ANALYSIS_LINES, DEFAULT_DEPTH, DEFAULT_RESPONSE_TIMEOUT};
pub use response::{BestMove, EngineLine, InfoLine, Score};
pub use transport::{EngineTransport, ProcessTransport, StopHandle};
