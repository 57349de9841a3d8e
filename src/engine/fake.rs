//! In-memory engine for unit tests.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use super::command::EngineCommand;
use super::error::EngineError;
use super::transport::EngineTransport;

/// Answers the handshake and replies to every `go` with a fixed script.
///
/// Commands go through their text form, the way a real engine receives
/// them, and `sent` holds what was read back.
#[derive(Debug, Default)]
pub(crate) struct FakeEngine {
    pub sent: Vec<EngineCommand>,
    /// Timeout given to the most recent `recv`.
    pub last_timeout: Option<Duration>,
    pending: VecDeque<String>,
    search_reply: Vec<String>,
}

impl FakeEngine {
    pub fn replying(lines: &[&str]) -> Self {
        FakeEngine {
            search_reply: lines.iter().map(ToString::to_string).collect(),
            ..FakeEngine::default()
        }
    }

    pub fn set_reply(&mut self, lines: &[&str]) {
        self.search_reply = lines.iter().map(ToString::to_string).collect();
    }
}

impl EngineTransport for FakeEngine {
    fn send(&mut self, command: &EngineCommand) -> Result<(), EngineError> {
        let Some(command) = EngineCommand::parse(&format!("{command}\n")) else {
            return Err(EngineError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "unreadable command",
            )));
        };
        match &command {
            EngineCommand::Uci => {
                self.pending.push_back("id name Fake".to_string());
                self.pending.push_back("uciok".to_string());
            }
            EngineCommand::IsReady => self.pending.push_back("readyok".to_string()),
            EngineCommand::Go { .. } => self.pending.extend(self.search_reply.iter().cloned()),
            _ => {}
        }
        self.sent.push(command);
        Ok(())
    }

    fn recv(&mut self, timeout: Duration) -> Result<String, EngineError> {
        self.last_timeout = Some(timeout);
        self.pending
            .pop_front()
            .ok_or(EngineError::Timeout { waited: timeout })
    }
}
