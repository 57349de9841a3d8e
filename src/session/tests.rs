use super::*;
use crate::board::START_FEN;
use crate::engine::fake::FakeEngine;
use crate::engine::{EngineCommand, EngineError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn against_black_engine() -> PlaySession {
    PlaySession::new(Some(Color::Black), EngineOptions::default())
}

fn client(engine: FakeEngine) -> EngineClient<FakeEngine> {
    EngineClient::new(engine, Duration::from_millis(10))
}

#[test]
fn test_engine_turn_round_trip() {
    let mut session = against_black_engine();
    assert!(!session.is_engine_turn());

    let outcome = session.human_move(sq("e2"), sq("e4")).unwrap();
    assert_eq!(outcome, MoveOutcome::Completed(GameStatus::Playing));
    assert_eq!(session.opening_name(), "King's Pawn Game");
    assert_eq!(session.opening_eco(), "B00");
    assert!(session.is_engine_turn());
    assert!(matches!(
        session.human_move(sq("d2"), sq("d4")),
        Err(SessionError::NotHumanTurn)
    ));

    let request = session.begin_engine_turn().unwrap();
    assert_eq!(request.fen, session.game().to_fen());
    assert_eq!(request.depth, 10);
    assert_eq!(request.multipv, None);
    assert!(session.engine_thinking());

    assert!(matches!(
        session.human_move(sq("d2"), sq("d4")),
        Err(SessionError::EngineThinking)
    ));
    assert!(matches!(session.undo(), Err(SessionError::EngineThinking)));
    assert!(matches!(
        session.begin_engine_turn(),
        Err(SessionError::EngineThinking)
    ));

    assert_eq!(session.complete_engine_turn("e7e5\n").unwrap(), GameStatus::Playing);
    assert!(!session.engine_thinking());
    assert_eq!(session.opening_name(), "Open Game");
    assert_eq!(session.game().side_to_move(), Color::White);
}

#[test]
fn test_bad_engine_moves_release_lock_and_keep_state() {
    let mut session = against_black_engine();
    session.human_move(sq("e2"), sq("e4")).unwrap();
    let fen = session.game().to_fen();

    let cases = [
        (
            "(none)",
            EngineProtocolError::Unparsable {
                text: "(none)".to_string(),
            },
        ),
        (
            "0000",
            EngineProtocolError::Unparsable {
                text: "0000".to_string(),
            },
        ),
        ("e3e5", EngineProtocolError::EmptySource { square: sq("e3") }),
        ("e4e5", EngineProtocolError::WrongColor { square: sq("e4") }),
        (
            "e7e4",
            EngineProtocolError::IllegalMove {
                mv: "e7e4".parse().unwrap(),
            },
        ),
    ];

    for (text, expected) in cases {
        session.begin_engine_turn().unwrap();
        match session.complete_engine_turn(text) {
            Err(SessionError::EngineProtocol(e)) => assert_eq!(e, expected, "{text}"),
            other => panic!("{text}: unexpected {other:?}"),
        }
        assert!(!session.engine_thinking());
        assert_eq!(session.game().status(), GameStatus::Playing);
        assert_eq!(session.game().to_fen(), fen);
    }
}

#[test]
fn test_complete_without_request() {
    let mut session = against_black_engine();
    session.human_move(sq("e2"), sq("e4")).unwrap();
    assert!(matches!(
        session.complete_engine_turn("e7e5"),
        Err(SessionError::NotEngineTurn)
    ));
    assert_eq!(session.game().history().len(), 1);
}

#[test]
fn test_begin_on_human_turn() {
    let mut session = against_black_engine();
    assert!(matches!(
        session.begin_engine_turn(),
        Err(SessionError::NotEngineTurn)
    ));
    assert!(!session.engine_thinking());
}

#[test]
fn test_undo_returns_to_human_turn() {
    let mut session = against_black_engine();
    assert_eq!(session.undo().unwrap(), 0);

    session.human_move(sq("e2"), sq("e4")).unwrap();
    session.begin_engine_turn().unwrap();
    session.complete_engine_turn("e7e5").unwrap();
    assert_eq!(session.undo().unwrap(), 2);
    assert_eq!(session.game().to_fen(), START_FEN);
    assert_eq!(session.opening_name(), "Starting Position");

    // Only the human move is on the board: undo it alone.
    session.human_move(sq("d2"), sq("d4")).unwrap();
    assert_eq!(session.undo().unwrap(), 1);
    assert_eq!(session.game().to_fen(), START_FEN);
}

#[test]
fn test_undo_with_engine_as_white() {
    let mut session = PlaySession::new(Some(Color::White), EngineOptions::default());
    session.begin_engine_turn().unwrap();
    session.complete_engine_turn("e2e4").unwrap();
    session.human_move(sq("e7"), sq("e5")).unwrap();
    session.begin_engine_turn().unwrap();
    session.complete_engine_turn("g1f3").unwrap();
    assert_eq!(session.opening_name(), "King's Knight Opening");

    assert_eq!(session.undo().unwrap(), 2);
    assert_eq!(session.game().side_to_move(), Color::Black);
    assert_eq!(session.game().history().len(), 1);
    assert_eq!(session.opening_name(), "King's Pawn Game");
}

#[test]
fn test_two_humans() {
    let mut session = PlaySession::new(None, EngineOptions::default());
    session.human_move(sq("e2"), sq("e4")).unwrap();
    assert!(!session.is_engine_turn());
    session.human_move(sq("c7"), sq("c5")).unwrap();
    assert_eq!(session.opening_name(), "Sicilian Defense");
    assert!(matches!(
        session.begin_engine_turn(),
        Err(SessionError::NotEngineTurn)
    ));
    assert_eq!(session.undo().unwrap(), 1);
    assert_eq!(session.opening_name(), "King's Pawn Game");
}

#[test]
fn test_play_engine_turn_prefers_book() {
    let mut session = against_black_engine();
    let mut client = client(FakeEngine::default());
    let mut rng = StdRng::seed_from_u64(3);

    session.human_move(sq("e2"), sq("e4")).unwrap();
    let fen = session.game().to_fen();
    session.play_engine_turn(&mut client, &mut rng).unwrap();

    let played = session.game().history()[1].coordinate();
    assert!(session.book().candidate_moves(&fen).contains(&played));
    assert!(client.transport().sent.is_empty());
}

#[test]
fn test_play_engine_turn_searches_without_book() {
    let mut options = EngineOptions::default();
    options.use_book = false;
    options.depth = 4;
    let mut session = PlaySession::new(Some(Color::Black), options);
    let mut client = client(FakeEngine::replying(&[
        "info depth 1 score cp -20 pv c7c5",
        "bestmove c7c5",
    ]));
    let mut rng = StdRng::seed_from_u64(3);

    session.human_move(sq("e2"), sq("e4")).unwrap();
    let status = session.play_engine_turn(&mut client, &mut rng).unwrap();
    assert_eq!(status, GameStatus::Playing);
    assert_eq!(session.game().history()[1].coordinate().to_string(), "c7c5");
    assert_eq!(session.opening_name(), "Sicilian Defense");
    assert!(client.transport().sent.contains(&EngineCommand::Go {
        depth: 4,
        multipv: None
    }));
}

#[test]
fn test_engine_failure_releases_lock() {
    let mut options = EngineOptions::default();
    options.use_book = false;
    let mut session = PlaySession::new(Some(Color::Black), options);
    let mut client = client(FakeEngine::default());
    let mut rng = StdRng::seed_from_u64(3);

    session.human_move(sq("e2"), sq("e4")).unwrap();
    let err = session.play_engine_turn(&mut client, &mut rng).unwrap_err();
    assert!(matches!(err, SessionError::Engine(EngineError::Timeout { .. })));
    assert!(!session.engine_thinking());
    assert!(session.is_engine_turn());
}

#[test]
fn test_engine_turn_waits_for_session_timeout() {
    let mut options = EngineOptions::default();
    options.use_book = false;
    options.response_timeout = Duration::from_millis(25);
    let mut session = PlaySession::new(Some(Color::Black), options);
    let mut client = client(FakeEngine::default());
    let mut rng = StdRng::seed_from_u64(3);

    session.human_move(sq("e2"), sq("e4")).unwrap();
    let err = session.play_engine_turn(&mut client, &mut rng).unwrap_err();
    match err {
        SessionError::Engine(EngineError::Timeout { waited }) => {
            assert_eq!(waited, Duration::from_millis(25));
        }
        other => panic!("expected a timeout, got {other:?}"),
    }
    assert_eq!(client.transport().last_timeout, Some(Duration::from_millis(25)));
    assert_eq!(client.timeout(), Duration::from_millis(10));
    assert!(!session.engine_thinking());
}

#[test]
fn test_human_move_after_mate() {
    let game = Game::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
    let mut session = PlaySession::from_game(game, Some(Color::Black), EngineOptions::default());

    let outcome = session.human_move(sq("a1"), sq("a8")).unwrap();
    assert_eq!(outcome, MoveOutcome::Completed(GameStatus::Checkmate));
    assert!(matches!(
        session.human_move(sq("g8"), sq("h8")),
        Err(SessionError::Move(MoveError::GameAlreadyEnded {
            status: GameStatus::Checkmate
        }))
    ));
    assert!(matches!(
        session.begin_engine_turn(),
        Err(SessionError::Game(GameError::GameAlreadyEnded { .. }))
    ));
}

#[test]
fn test_book_miss_falls_back_to_search() {
    let mut session = against_black_engine();
    let mut client = client(FakeEngine::replying(&["bestmove a7a6"]));
    let mut rng = StdRng::seed_from_u64(3);

    session.human_move(sq("h2"), sq("h3")).unwrap();
    assert_eq!(session.play_book_move(&mut rng).unwrap(), None);
    session.play_engine_turn(&mut client, &mut rng).unwrap();
    assert_eq!(session.game().history()[1].coordinate().to_string(), "a7a6");
    assert_eq!(session.opening_name(), "Starting Position");
}

#[test]
fn test_resign_abandons_search() {
    let mut session = against_black_engine();
    session.human_move(sq("e2"), sq("e4")).unwrap();
    session.begin_engine_turn().unwrap();
    session.resign(Color::White).unwrap();
    assert!(!session.engine_thinking());
    assert_eq!(session.game().status(), GameStatus::Resigned(Color::White));
    assert!(matches!(
        session.complete_engine_turn("e7e5"),
        Err(SessionError::NotEngineTurn)
    ));
    assert!(matches!(
        session.accept_draw(),
        Err(SessionError::Game(GameError::GameAlreadyEnded { .. }))
    ));
}

#[test]
fn test_human_promotion_blocks_engine() {
    let game = Game::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let mut session = PlaySession::from_game(game, Some(Color::Black), EngineOptions::default());

    let outcome = session.human_move(sq("a7"), sq("a8")).unwrap();
    assert_eq!(outcome, MoveOutcome::PromotionPending { square: sq("a8") });
    assert!(!session.is_engine_turn());
    assert!(matches!(
        session.begin_engine_turn(),
        Err(SessionError::NotEngineTurn)
    ));

    assert_eq!(session.resolve_promotion(Piece::Queen).unwrap(), GameStatus::Playing);
    assert!(session.is_engine_turn());
}

#[test]
fn test_engine_underpromotion() {
    let game = Game::from_fen("k7/8/8/8/8/8/6p1/K7 b - - 0 1").unwrap();
    let mut session = PlaySession::from_game(game, Some(Color::Black), EngineOptions::default());
    session.begin_engine_turn().unwrap();
    session.complete_engine_turn("g2g1n").unwrap();
    let piece = session.game().position().piece_at(sq("g1")).unwrap();
    assert_eq!(piece.kind, Piece::Knight);
    assert_eq!(piece.color, Color::Black);
}

#[test]
fn test_analysis_request_and_new_game() {
    let mut session = against_black_engine();
    session.human_move(sq("d2"), sq("d4")).unwrap();
    let request = session.analysis_request();
    assert_eq!(request.multipv, Some(3));
    assert_eq!(request.fen, session.game().to_fen());

    session.begin_engine_turn().unwrap();
    session.new_game();
    assert!(!session.engine_thinking());
    assert_eq!(session.game().to_fen(), START_FEN);
    assert_eq!(session.opening_name(), "Starting Position");
    assert_eq!(session.undo().unwrap(), 0);
}

#[test]
fn test_set_engine_color() {
    let mut session = PlaySession::new(None, EngineOptions::default());
    session.set_engine_color(Some(Color::White)).unwrap();
    assert!(session.is_engine_turn());
    session.begin_engine_turn().unwrap();
    assert!(matches!(
        session.set_engine_color(None),
        Err(SessionError::EngineThinking)
    ));
    session.abort_engine_turn();
    session.set_engine_color(None).unwrap();
    assert!(!session.is_engine_turn());
}
