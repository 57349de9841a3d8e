//! A game of chess: a position plus history, status and captures.
//!
//! [`Game`] is the only place positions change. Every move goes through
//! [`Game::apply_move`] (or its coordinate-text wrappers) and can be taken
//! back with [`Game::undo_move`].
//!
//! # Example
//! ```
//! use chess_rules::game::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     game.apply_coordinate_move(mv).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Checkmate);
//! ```

mod apply;
mod error;
mod history;
mod perft;
mod status;


pub use apply::MoveOutcome;
pub use error::{GameError, MoveError, PromotionError};
pub use history::MoveRecord;
pub use status::GameStatus;

use log::info;

use crate::board::{Color, ColoredPiece, CoordinateMove, FenError, Position, Square};

#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    status: GameStatus,
    history: Vec<MoveRecord>,
    /// Pieces captured by each color, indexed by the capturing color.
    captured: [Vec<ColoredPiece>; 2],
    pending_promotion: Option<Square>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Position::new())
    }

    /// Start from an arbitrary position. History starts empty.
    #[must_use]
    pub fn from_position(position: Position) -> Self {
        let status = GameStatus::evaluate(&position);
        Game {
            position,
            status,
            history: Vec::new(),
            captured: [Vec::new(), Vec::new()],
            pending_promotion: None,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self::from_position(Position::try_from_fen(fen)?))
    }

    /// Reset to the starting position, clearing history and captures.
    pub fn new_game(&mut self) {
        *self = Self::new();
        info!("new game started");
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    #[must_use]
    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }

    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Pieces `color` has captured, in capture order.
    #[must_use]
    pub fn captured_by(&self, color: Color) -> &[ColoredPiece] {
        &self.captured[color.index()]
    }

    /// Square of a pawn waiting for its promotion piece, if any.
    #[must_use]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    /// The side that lost by checkmate or resignation.
    #[must_use]
    pub fn loser(&self) -> Option<Color> {
        self.winner().map(Color::opponent)
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.status.winner(self.position.side_to_move())
    }

    /// Legal destinations for the piece on `square`.
    ///
    /// Empty unless the piece belongs to the side to move and the game
    /// accepts moves.
    #[must_use]
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        if !self.accepts_moves() {
            return Vec::new();
        }
        match self.position.piece_at(square) {
            Some(piece) if piece.color == self.position.side_to_move() => {
                self.position.legal_moves(square)
            }
            _ => Vec::new(),
        }
    }

    /// Every legal move for the side to move.
    #[must_use]
    pub fn all_legal_moves(&self) -> Vec<CoordinateMove> {
        if !self.accepts_moves() {
            return Vec::new();
        }
        self.position.legal_moves_for(self.position.side_to_move())
    }

    fn accepts_moves(&self) -> bool {
        self.status.is_ongoing() && self.pending_promotion.is_none()
    }

    /// Resign on behalf of `color`.
    pub fn resign(&mut self, color: Color) -> Result<(), GameError> {
        self.check_exogenous_end()?;
        self.status = GameStatus::Resigned(color);
        info!("{color} resigned");
        Ok(())
    }

    /// End the game as a draw by agreement.
    pub fn accept_draw(&mut self) -> Result<(), GameError> {
        self.check_exogenous_end()?;
        self.status = GameStatus::DrawAgreed;
        info!("draw agreed");
        Ok(())
    }

    fn check_exogenous_end(&self) -> Result<(), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameAlreadyEnded {
                status: self.status,
            });
        }
        if let Some(square) = self.pending_promotion {
            return Err(GameError::PromotionPending { square });
        }
        Ok(())
    }
}
