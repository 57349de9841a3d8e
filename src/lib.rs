//! Chess rules with an opening book and a bridge to UCI engines.
//!
//! - [`board`]: positions, move generation, attack detection and FEN.
//! - [`game`]: a game in progress with status, promotion and undo.
//! - [`book`]: the opening book and the "current opening" tracker.
//! - [`engine`]: typed UCI commands and output over a child process.
//! - [`session`]: human against engine play with a turn-lock.
//!
//! ```
//! use chess_rules::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     game.apply_coordinate_move(mv).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Checkmate);
//! ```

pub mod board;
pub mod book;
pub mod engine;
pub mod game;
pub mod session;

pub use board::{Color, CoordinateMove, Piece, Position, Square, START_FEN};
pub use book::{OpeningBook, OpeningTracker};
pub use game::{Game, GameStatus, MoveOutcome};
pub use session::{PlaySession, SessionError};
