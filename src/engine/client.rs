use std::time::Duration;

use log::{debug, trace};

use super::command::{EngineCommand, SearchRequest};
use super::error::EngineError;
use super::response::{BestMove, EngineLine, InfoLine};
use super::transport::EngineTransport;

/// Something reported during a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Info(InfoLine),
    /// Always the last event of a search.
    BestMove(BestMove),
}

/// Drives one engine over a transport.
///
/// Every request borrows the client mutably, so at most one is in flight.
pub struct EngineClient<T: EngineTransport> {
    transport: T,
    timeout: Duration,
}

impl<T: EngineTransport> EngineClient<T> {
    /// `timeout` bounds the wait for each line, not a whole search.
    pub fn new(transport: T, timeout: Duration) -> Self {
        EngineClient { transport, timeout }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// `uci` then `isready`, waiting for `uciok` and `readyok`.
    pub fn handshake(&mut self) -> Result<(), EngineError> {
        self.transport.send(&EngineCommand::Uci)?;
        self.wait_for(&EngineLine::UciOk)?;
        self.sync()?;
        debug!("engine handshake complete");
        Ok(())
    }

    /// `ucinewgame` followed by a readiness check.
    pub fn new_game(&mut self) -> Result<(), EngineError> {
        self.transport.send(&EngineCommand::UciNewGame)?;
        self.sync()
    }

    /// Start a search. The stream yields info lines and ends with the best move.
    pub fn search(&mut self, request: &SearchRequest) -> Result<SearchStream<'_, T>, EngineError> {
        debug!(
            "engine search depth {} multipv {:?}: {}",
            request.depth, request.multipv, request.fen
        );
        for command in request.commands() {
            self.transport.send(&command)?;
        }
        Ok(SearchStream {
            client: self,
            finished: false,
        })
    }

    /// Run a search to completion and keep only the best move.
    pub fn best_move(&mut self, request: &SearchRequest) -> Result<BestMove, EngineError> {
        for event in self.search(request)? {
            if let SearchEvent::BestMove(best) = event? {
                return Ok(best);
            }
        }
        Err(EngineError::Closed)
    }

    /// [`EngineClient::best_move`] with a per-line timeout for this search
    /// only. The client's own timeout is restored afterwards.
    pub fn best_move_within(
        &mut self,
        request: &SearchRequest,
        timeout: Duration,
    ) -> Result<BestMove, EngineError> {
        let saved = std::mem::replace(&mut self.timeout, timeout);
        let result = self.best_move(request);
        self.timeout = saved;
        result
    }

    pub fn stop(&mut self) -> Result<(), EngineError> {
        self.transport.send(&EngineCommand::Stop)
    }

    fn sync(&mut self) -> Result<(), EngineError> {
        self.transport.send(&EngineCommand::IsReady)?;
        self.wait_for(&EngineLine::ReadyOk)
    }

    fn wait_for(&mut self, expected: &EngineLine) -> Result<(), EngineError> {
        loop {
            let line = EngineLine::parse(&self.transport.recv(self.timeout)?);
            if &line == expected {
                return Ok(());
            }
            trace!("skipping {line:?}");
        }
    }
}

/// Events of one search in arrival order.
///
/// Dropping the stream early sends `stop` and discards what is left, so
/// the next request does not read a stale best move.
pub struct SearchStream<'a, T: EngineTransport> {
    client: &'a mut EngineClient<T>,
    finished: bool,
}

impl<T: EngineTransport> Iterator for SearchStream<'_, T> {
    type Item = Result<SearchEvent, EngineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            let line = match self.client.transport.recv(self.client.timeout) {
                Ok(line) => line,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            };
            match EngineLine::parse(&line) {
                EngineLine::Info(info) => return Some(Ok(SearchEvent::Info(info))),
                EngineLine::BestMove(best) => {
                    self.finished = true;
                    return Some(Ok(SearchEvent::BestMove(best)));
                }
                other => trace!("skipping {other:?}"),
            }
        }
    }
}

impl<T: EngineTransport> Drop for SearchStream<'_, T> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        if self.client.stop().is_err() {
            return;
        }
        while let Some(Ok(_)) = self.next() {}
    }
}
