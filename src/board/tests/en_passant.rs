//! The en-passant window and capture.

use super::{position, sq};
use crate::board::{Color, ColoredPiece, EnPassantTarget, Piece};
use crate::game::{Game, GameStatus};

#[test]
fn test_capture_available_immediately() {
    let mut game = Game::new();
    for mv in ["e2e4", "a7a6", "e4e5", "d7d5"] {
        game.apply_coordinate_move(mv).unwrap();
    }
    assert!(game.legal_moves(sq("e5")).contains(&sq("d6")));

    game.apply_coordinate_move("e5d6").unwrap();
    assert!(game.position().piece_at(sq("d5")).is_none());
    assert_eq!(
        game.position().piece_at(sq("d6")),
        Some(ColoredPiece::new(Piece::Pawn, Color::White))
    );
    let record = game.history().last().unwrap();
    assert!(record.en_passant);
    assert_eq!(
        record.captured,
        Some(ColoredPiece::new(Piece::Pawn, Color::Black))
    );
    assert_eq!(game.captured_by(Color::White).len(), 1);
}

#[test]
fn test_window_closes_after_one_move() {
    let mut game = Game::new();
    for mv in ["e2e4", "a7a6", "e4e5", "d7d5", "g1f3", "a6a5"] {
        game.apply_coordinate_move(mv).unwrap();
    }
    assert!(!game.legal_moves(sq("e5")).contains(&sq("d6")));
    assert!(game.position().en_passant_target().is_none());
}

#[test]
fn test_undo_restores_captured_pawn_and_target() {
    let mut game = Game::new();
    for mv in ["e2e4", "a7a6", "e4e5", "d7d5"] {
        game.apply_coordinate_move(mv).unwrap();
    }
    let before = game.to_fen();
    game.apply_coordinate_move("e5d6").unwrap();
    assert!(game.undo_move());
    assert_eq!(game.to_fen(), before);
    assert!(game.legal_moves(sq("e5")).contains(&sq("d6")));
}

#[test]
fn test_creator_cannot_use_own_target() {
    let mut position = position("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    assert!(position.legal_moves(sq("e5")).contains(&sq("d6")));
    assert_eq!(position.en_passant_target().unwrap().creator, Color::Black);

    position.en_passant = Some(EnPassantTarget {
        square: sq("d6"),
        creator: Color::White,
    });
    assert!(!position.legal_moves(sq("e5")).contains(&sq("d6")));
}

#[test]
fn test_capture_that_exposes_king_is_illegal() {
    // Removing both pawns from rank 5 would open the rook's line to a5.
    let position = position("8/8/8/K2pP2r/8/8/8/4k3 w - d6 0 1");
    assert!(!position.legal_moves(sq("e5")).contains(&sq("d6")));
    assert!(position.legal_moves(sq("e5")).contains(&sq("e6")));
}

#[test]
fn test_en_passant_can_answer_check() {
    // The d5 pawn gives check; taking it en passant is the only pawn reply.
    let mut game = Game::from_fen("8/8/8/3pP3/2K5/8/8/7k w - d6 0 1").unwrap();
    assert_eq!(game.status(), GameStatus::Check);
    assert!(game.legal_moves(sq("e5")).contains(&sq("d6")));
    game.apply_coordinate_move("e5d6").unwrap();
    assert_eq!(game.status(), GameStatus::Playing);
}
