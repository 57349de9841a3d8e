use std::env;
use std::process::ExitCode;

use chess_rules::{Game, OpeningBook, OpeningTracker};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("--help") {
        eprintln!("usage: position_status [<move1> <move2> ...]");
        return ExitCode::SUCCESS;
    }

    let book = OpeningBook::standard();
    let mut tracker = OpeningTracker::new();
    let mut game = Game::new();
    for mv in &args {
        if let Err(e) = game.apply_coordinate_move(mv) {
            eprintln!("{mv}: {e}");
            return ExitCode::FAILURE;
        }
        tracker.observe(book, &game.to_fen());
    }

    let legal_moves = game.all_legal_moves();
    println!("side_to_move: {}", game.side_to_move());
    println!("fen: {}", game.to_fen());
    println!("status: {}", game.status());
    if tracker.eco().is_empty() {
        println!("opening: {}", tracker.name());
    } else {
        println!("opening: {} ({})", tracker.name(), tracker.eco());
    }
    println!("legal_moves: {}", legal_moves.len());
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
