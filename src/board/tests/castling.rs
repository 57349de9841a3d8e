//! Castling availability and execution.

use super::{position, sq};
use crate::board::{CastleSide, Color, ColoredPiece, Piece};
use crate::game::Game;

const ALL_RIGHTS: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

#[test]
fn test_all_four_castles_available() {
    let white = position(ALL_RIGHTS);
    let moves = white.legal_moves(sq("e1"));
    assert!(moves.contains(&sq("g1")));
    assert!(moves.contains(&sq("c1")));

    let black = position("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    let moves = black.legal_moves(sq("e8"));
    assert!(moves.contains(&sq("g8")));
    assert!(moves.contains(&sq("c8")));
}

#[test]
fn test_castling_destinations_follow_single_steps() {
    let position = position(ALL_RIGHTS);
    let moves = position.pseudo_moves(sq("e1"));
    assert_eq!(&moves[moves.len() - 2..], &[sq("g1"), sq("c1")]);
}

#[test]
fn test_each_castle_relocates_rook() {
    let cases = [
        ("w", "e1g1", "f1", "h1"),
        ("w", "e1c1", "d1", "a1"),
        ("b", "e8g8", "f8", "h8"),
        ("b", "e8c8", "d8", "a8"),
    ];
    for (side, mv, rook_to, rook_from) in cases {
        let fen = format!("r3k2r/8/8/8/8/8/8/R3K2R {side} KQkq - 0 1");
        let mut game = Game::from_fen(&fen).unwrap();
        game.apply_coordinate_move(mv).unwrap();

        let rook = game.position().piece_at(sq(rook_to)).unwrap();
        assert_eq!(rook.kind, Piece::Rook, "{mv}");
        assert!(game.position().piece_at(sq(rook_from)).is_none(), "{mv}");
        let color = rook.color;
        let rights = game.position().castling_rights();
        assert!(rights.king_moved(color));
        assert!(!rights.holds(color, CastleSide::Kingside));
        assert!(!rights.holds(color, CastleSide::Queenside));
        assert!(rights.holds(color.opponent(), CastleSide::Kingside));

        assert!(game.undo_move());
        assert_eq!(game.to_fen(), fen);
    }
}

#[test]
fn test_no_castling_through_pieces() {
    let position = position("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1");
    let moves = position.legal_moves(sq("e1"));
    assert!(!moves.contains(&sq("g1")));
    assert!(!moves.contains(&sq("c1")));

    // b1 is between king and rook even though the king never crosses it.
    let position = super::position("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1");
    let moves = position.legal_moves(sq("e1"));
    assert!(moves.contains(&sq("g1")));
    assert!(!moves.contains(&sq("c1")));
}

#[test]
fn test_no_castling_out_of_check() {
    let position = position("r3k2r/8/8/8/8/8/4r3/R3K2R w KQkq - 0 1");
    assert!(position.in_check());
    let moves = position.legal_moves(sq("e1"));
    assert!(!moves.contains(&sq("g1")));
    assert!(!moves.contains(&sq("c1")));
}

#[test]
fn test_no_castling_through_or_into_attack() {
    // Black rook on f8 covers f1, the kingside pass-through square.
    let position = position("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = position.legal_moves(sq("e1"));
    assert!(!moves.contains(&sq("g1")));
    assert!(moves.contains(&sq("c1")));

    // Black rook on c8 covers c1, the queenside destination.
    let position = super::position("2r1k3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = position.legal_moves(sq("e1"));
    assert!(moves.contains(&sq("g1")));
    assert!(!moves.contains(&sq("c1")));
}

#[test]
fn test_attacked_b_file_does_not_block_queenside() {
    let position = position("1r2k3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(position.legal_moves(sq("e1")).contains(&sq("c1")));
}

#[test]
fn test_rights_lost_after_king_or_rook_moves() {
    let mut game = Game::from_fen(ALL_RIGHTS).unwrap();
    for mv in ["h1h2", "a8a7", "h2h1", "a7a8"] {
        game.apply_coordinate_move(mv).unwrap();
    }
    let rights = game.position().castling_rights();
    assert!(!rights.holds(Color::White, CastleSide::Kingside));
    assert!(rights.holds(Color::White, CastleSide::Queenside));
    assert!(!rights.holds(Color::Black, CastleSide::Queenside));
    assert!(rights.holds(Color::Black, CastleSide::Kingside));
    assert!(!game.legal_moves(sq("e1")).contains(&sq("g1")));

    for mv in ["e1d1", "e8d8", "d1e1", "d8e8"] {
        game.apply_coordinate_move(mv).unwrap();
    }
    assert!(game.position().castling_rights().is_empty());
    assert!(game.to_fen().contains(" w - - "));
}

#[test]
fn test_no_castling_without_rook() {
    let position = position("r3k3/8/8/8/8/8/8/R3K3 w Qq - 0 1");
    assert!(!position.legal_moves(sq("e1")).contains(&sq("g1")));

    // Rights say kingside, but the corner holds a knight.
    let position = super::position("4k3/8/8/8/8/8/8/4K2N w K - 0 1");
    assert!(!position.legal_moves(sq("e1")).contains(&sq("g1")));
    assert_eq!(
        position.piece_at(sq("h1")),
        Some(ColoredPiece::new(Piece::Knight, Color::White))
    );
}
