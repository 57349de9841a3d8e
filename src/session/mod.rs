//! A game between a human and an engine, or between two humans.
//!
//! [`PlaySession`] owns the [`Game`] and decides whose turn it is. While
//! the engine is thinking the session holds a turn-lock: human moves,
//! undo and a second engine request are refused until the engine's answer
//! is completed or aborted. Engine answers are untrusted text and are
//! checked against the rules before they touch the game.
//!
//! A session can drive an [`EngineClient`] itself
//! ([`PlaySession::play_engine_turn`]) or hand out [`SearchRequest`]s and
//! accept answers from elsewhere ([`PlaySession::begin_engine_turn`] and
//! [`PlaySession::complete_engine_turn`]).

mod error;

pub use error::SessionError;

use std::borrow::Cow;

use log::{debug, info, warn};
use rand::Rng;

use crate::board::{Color, CoordinateMove, Piece, Square};
use crate::book::{OpeningBook, OpeningTracker};
use crate::engine::{
    EngineClient, EngineOptions, EngineProtocolError, EngineTransport, SearchRequest,
};
use crate::game::{Game, GameError, GameStatus, MoveError, MoveOutcome};

pub struct PlaySession {
    game: Game,
    engine_color: Option<Color>,
    book: Cow<'static, OpeningBook>,
    tracker: OpeningTracker,
    /// Tracker state before each history entry, for undo.
    trackers: Vec<OpeningTracker>,
    options: EngineOptions,
    engine_thinking: bool,
}

impl PlaySession {
    /// A session using the built-in opening book. `engine_color` of `None`
    /// means both sides are human.
    #[must_use]
    pub fn new(engine_color: Option<Color>, options: EngineOptions) -> Self {
        Self::with_book(engine_color, options, Cow::Borrowed(OpeningBook::standard()))
    }

    #[must_use]
    pub fn with_book(
        engine_color: Option<Color>,
        options: EngineOptions,
        book: Cow<'static, OpeningBook>,
    ) -> Self {
        PlaySession {
            game: Game::new(),
            engine_color,
            book,
            tracker: OpeningTracker::new(),
            trackers: Vec::new(),
            options,
            engine_thinking: false,
        }
    }

    /// Continue an existing game. Moves already in its history cannot be
    /// taken back through the session.
    #[must_use]
    pub fn from_game(game: Game, engine_color: Option<Color>, options: EngineOptions) -> Self {
        let mut session = Self::new(engine_color, options);
        session.game = game;
        session.observe_opening();
        session
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut EngineOptions {
        &mut self.options
    }

    #[must_use]
    pub fn engine_color(&self) -> Option<Color> {
        self.engine_color
    }

    /// Change which side the engine plays. Refused while it is thinking.
    pub fn set_engine_color(&mut self, color: Option<Color>) -> Result<(), SessionError> {
        self.ensure_idle()?;
        self.engine_color = color;
        info!("engine plays {}", color.map_or("no side".to_string(), |c| c.to_string()));
        Ok(())
    }

    /// True when the engine is to move in a game that accepts moves.
    #[must_use]
    pub fn is_engine_turn(&self) -> bool {
        self.engine_color == Some(self.game.side_to_move())
            && self.game.status().is_ongoing()
            && self.game.pending_promotion().is_none()
    }

    #[must_use]
    pub fn engine_thinking(&self) -> bool {
        self.engine_thinking
    }

    #[must_use]
    pub fn opening_name(&self) -> &str {
        self.tracker.name()
    }

    #[must_use]
    pub fn opening_eco(&self) -> &str {
        self.tracker.eco()
    }

    #[must_use]
    pub fn book(&self) -> &OpeningBook {
        &self.book
    }

    /// Play a move for the human side.
    pub fn human_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, SessionError> {
        self.ensure_idle()?;
        if !self.game.status().is_ongoing() {
            return Err(MoveError::GameAlreadyEnded {
                status: self.game.status(),
            }
            .into());
        }
        if self.engine_color == Some(self.game.side_to_move()) {
            return Err(SessionError::NotHumanTurn);
        }
        let outcome = self.game.apply_move(from, to)?;
        self.trackers.push(self.tracker.clone());
        if matches!(outcome, MoveOutcome::Completed(_)) {
            self.observe_opening();
        }
        Ok(outcome)
    }

    /// Finish a human promotion started by [`PlaySession::human_move`].
    pub fn resolve_promotion(&mut self, kind: Piece) -> Result<GameStatus, SessionError> {
        let status = self.game.resolve_promotion(kind)?;
        self.observe_opening();
        Ok(status)
    }

    /// Take the turn-lock and describe the search the engine should run.
    pub fn begin_engine_turn(&mut self) -> Result<SearchRequest, SessionError> {
        self.ensure_idle()?;
        if !self.game.status().is_ongoing() {
            return Err(GameError::GameAlreadyEnded {
                status: self.game.status(),
            }
            .into());
        }
        if !self.is_engine_turn() {
            return Err(SessionError::NotEngineTurn);
        }
        self.engine_thinking = true;
        Ok(SearchRequest {
            fen: self.game.to_fen(),
            depth: self.options.depth,
            multipv: None,
        })
    }

    /// Apply the engine's best move and release the turn-lock.
    ///
    /// The lock is released even when the move is rejected; the position
    /// and status are then left as they were and nothing is retried.
    pub fn complete_engine_turn(&mut self, best_move: &str) -> Result<GameStatus, SessionError> {
        if !self.engine_thinking {
            return Err(SessionError::NotEngineTurn);
        }
        self.engine_thinking = false;

        let mv = match self.check_engine_move(best_move) {
            Ok(mv) => mv,
            Err(e) => {
                warn!("rejected engine move: {e}");
                return Err(e.into());
            }
        };
        if let Err(e) = self.game.play(mv) {
            debug!("engine move {mv} refused: {e}");
            let e = EngineProtocolError::IllegalMove { mv };
            warn!("rejected engine move: {e}");
            return Err(e.into());
        }
        self.trackers.push(self.tracker.clone());
        self.observe_opening();
        Ok(self.game.status())
    }

    /// Release the turn-lock without moving, e.g. after the engine failed.
    pub fn abort_engine_turn(&mut self) {
        if self.engine_thinking {
            debug!("engine turn aborted");
        }
        self.engine_thinking = false;
    }

    /// Play a random book move for the engine, if the book has one.
    ///
    /// Returns `Ok(None)` when the book is disabled or has no entry.
    pub fn play_book_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<GameStatus>, SessionError> {
        self.ensure_idle()?;
        if !self.is_engine_turn() {
            return Err(SessionError::NotEngineTurn);
        }
        if !self.options.use_book {
            return Ok(None);
        }
        let Some(mv) = self.book.pick_random(&self.game.to_fen(), rng) else {
            return Ok(None);
        };
        let status = self.game.play(mv)?;
        debug!("engine played book move {mv}");
        self.trackers.push(self.tracker.clone());
        self.observe_opening();
        Ok(Some(status))
    }

    /// Make the engine's move: from the book when possible, otherwise by
    /// searching with `client`. Each line of the search is awaited for at
    /// most the session's `response_timeout`.
    pub fn play_engine_turn<T, R>(
        &mut self,
        client: &mut EngineClient<T>,
        rng: &mut R,
    ) -> Result<GameStatus, SessionError>
    where
        T: EngineTransport,
        R: Rng + ?Sized,
    {
        if let Some(status) = self.play_book_move(rng)? {
            return Ok(status);
        }
        let request = self.begin_engine_turn()?;
        match client.best_move_within(&request, self.options.response_timeout) {
            Ok(best) => self.complete_engine_turn(&best.mv),
            Err(e) => {
                self.abort_engine_turn();
                Err(e.into())
            }
        }
    }

    /// A multi-line analysis search of the current position.
    #[must_use]
    pub fn analysis_request(&self) -> SearchRequest {
        SearchRequest {
            fen: self.game.to_fen(),
            depth: self.options.depth,
            multipv: Some(self.options.analysis_multipv),
        }
    }

    /// Take back the last move. Against an engine, also take back the
    /// move before it if that leaves the engine to move, so the human is
    /// always to move afterwards.
    ///
    /// Returns the number of history entries undone.
    pub fn undo(&mut self) -> Result<usize, SessionError> {
        self.ensure_idle()?;
        if !self.undo_one() {
            return Ok(0);
        }
        let mut undone = 1;
        if self.engine_color == Some(self.game.side_to_move()) && self.undo_one() {
            undone += 1;
        }
        Ok(undone)
    }

    /// Resign for `color`. A search in flight is abandoned.
    pub fn resign(&mut self, color: Color) -> Result<(), SessionError> {
        self.game.resign(color)?;
        self.engine_thinking = false;
        Ok(())
    }

    /// Agree a draw. A search in flight is abandoned.
    pub fn accept_draw(&mut self) -> Result<(), SessionError> {
        self.game.accept_draw()?;
        self.engine_thinking = false;
        Ok(())
    }

    /// Start over from the initial position, keeping engine side and options.
    pub fn new_game(&mut self) {
        self.game.new_game();
        self.tracker.reset();
        self.trackers.clear();
        self.engine_thinking = false;
    }

    fn ensure_idle(&self) -> Result<(), SessionError> {
        if self.engine_thinking {
            Err(SessionError::EngineThinking)
        } else {
            Ok(())
        }
    }

    fn undo_one(&mut self) -> bool {
        let Some(tracker) = self.trackers.pop() else {
            return false;
        };
        self.tracker = tracker;
        self.game.undo_move()
    }

    fn observe_opening(&mut self) {
        let fen = self.game.to_fen();
        self.tracker.observe(&self.book, &fen);
    }

    /// Everything short of full legality, in the order a bad answer is
    /// most likely to fail.
    fn check_engine_move(&self, text: &str) -> Result<CoordinateMove, EngineProtocolError> {
        let mv: CoordinateMove = text.trim().parse().map_err(|_| EngineProtocolError::Unparsable {
            text: text.trim().to_string(),
        })?;
        let piece = self
            .game
            .position()
            .piece_at(mv.from)
            .ok_or(EngineProtocolError::EmptySource { square: mv.from })?;
        if Some(piece.color) != self.engine_color {
            return Err(EngineProtocolError::WrongColor { square: mv.from });
        }
        Ok(mv)
    }
}

#[cfg(test)]
mod tests;
