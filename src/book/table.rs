//! Built-in opening lines.
//!
//! Keys are the first four FEN fields. Candidate moves are listed in the
//! order they are offered.

pub(super) struct RawEntry {
    pub key: &'static str,
    pub moves: &'static [&'static str],
    pub name: &'static str,
    pub eco: &'static str,
}

pub(super) const STANDARD_ENTRIES: &[RawEntry] = &[
    RawEntry {
        key: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
        moves: &["e2e4", "d2d4", "g1f3", "c2c4"],
        name: "Starting Position",
        eco: "",
    },
    // 1.e4
    RawEntry {
        key: "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3",
        moves: &["e7e5", "c7c5", "e7e6", "c7c6", "d7d5", "g8f6"],
        name: "King's Pawn Game",
        eco: "B00",
    },
    RawEntry {
        key: "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6",
        moves: &["g1f3", "f2f4", "b1c3", "f1c4"],
        name: "Open Game",
        eco: "C20",
    },
    RawEntry {
        key: "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq -",
        moves: &["b8c6", "g8f6", "d7d6"],
        name: "King's Knight Opening",
        eco: "C40",
    },
    RawEntry {
        key: "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq -",
        moves: &["f1b5", "f1c4", "d2d4", "b1c3"],
        name: "King's Knight Opening after Nc6",
        eco: "C40",
    },
    RawEntry {
        key: "r1bqkbnr/pppp1ppp/2n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R b KQkq -",
        moves: &["a7a6", "g8f6", "f7f5", "d7d6"],
        name: "Ruy Lopez",
        eco: "C60",
    },
    RawEntry {
        key: "r1bqkbnr/1ppp1ppp/p1n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R w KQkq -",
        moves: &["b5a4", "b5c6"],
        name: "Ruy Lopez, Morphy Defense",
        eco: "C68",
    },
    RawEntry {
        key: "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq -",
        moves: &["f8c5", "g8f6", "f8e7"],
        name: "Italian Game",
        eco: "C50",
    },
    RawEntry {
        key: "r1bqk1nr/pppp1ppp/2n5/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq -",
        moves: &["c2c3", "d2d3", "e1g1"],
        name: "Giuoco Piano",
        eco: "C50",
    },
    RawEntry {
        key: "r1bqkbnr/pppp1ppp/2n5/4p3/3PP3/5N2/PPP2PPP/RNBQKB1R b KQkq d3",
        moves: &["e5d4"],
        name: "Scotch Game",
        eco: "C44",
    },
    RawEntry {
        key: "rnbqkb1r/pppp1ppp/5n2/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq -",
        moves: &["f3e5", "d2d4", "b1c3"],
        name: "Petrov's Defense",
        eco: "C42",
    },
    RawEntry {
        key: "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6",
        moves: &["g1f3", "c2c3", "f2f4", "b1c3"],
        name: "Sicilian Defense",
        eco: "B20",
    },
    RawEntry {
        key: "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq -",
        moves: &["d7d6", "b8c6", "e7e6"],
        name: "Sicilian Defense: Open",
        eco: "B28",
    },
    RawEntry {
        key: "rnbqkb1r/1p2pppp/p2p1n2/8/3NP3/2N5/PPP2PPP/R1BQKB1R w KQkq -",
        moves: &["f1e2", "c1g5", "f2f4", "f1c4"],
        name: "Sicilian Defense: Najdorf Variation",
        eco: "B90",
    },
    RawEntry {
        key: "rnbqkbnr/pppp1ppp/4p3/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq -",
        moves: &["d2d4", "g1f3"],
        name: "French Defense",
        eco: "C00",
    },
    RawEntry {
        key: "rnbqkbnr/ppp2ppp/4p3/3p4/3PP3/8/PPP2PPP/RNBQKBNR w KQkq d6",
        moves: &["b1c3", "e4d5", "e4e5"],
        name: "French Defense: Main Line",
        eco: "C01",
    },
    RawEntry {
        key: "rnbqkbnr/pp1ppppp/2p5/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq -",
        moves: &["d2d4", "g1f3"],
        name: "Caro-Kann Defense",
        eco: "B10",
    },
    RawEntry {
        key: "rnbqkbnr/pp2pppp/2p5/3p4/3PP3/8/PPP2PPP/RNBQKBNR w KQkq d6",
        moves: &["b1c3", "e4d5", "e4e5"],
        name: "Caro-Kann Defense: Main Line",
        eco: "B12",
    },
    // 1.d4
    RawEntry {
        key: "rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR b KQkq d3",
        moves: &["g8f6", "d7d5", "e7e6", "f7f5"],
        name: "Queen's Pawn Game",
        eco: "A40",
    },
    RawEntry {
        key: "rnbqkbnr/ppp1pppp/8/3p4/3P4/8/PPP1PPPP/RNBQKBNR w KQkq d6",
        moves: &["c2c4", "g1f3"],
        name: "Queen's Pawn Game: Symmetrical",
        eco: "D00",
    },
    RawEntry {
        key: "rnbqkbnr/ppp1pppp/8/3p4/2PP4/8/PP2PPPP/RNBQKBNR b KQkq c3",
        moves: &["e7e6", "c7c6", "d5c4", "g8f6"],
        name: "Queen's Gambit",
        eco: "D06",
    },
    RawEntry {
        key: "rnbqkbnr/ppp2ppp/4p3/3p4/2PP4/8/PP2PPPP/RNBQKBNR w KQkq -",
        moves: &["b1c3", "g1f3"],
        name: "Queen's Gambit Declined",
        eco: "D30",
    },
    RawEntry {
        key: "rnbqkbnr/pp2pppp/2p5/3p4/2PP4/8/PP2PPPP/RNBQKBNR w KQkq -",
        moves: &["g1f3", "b1c3"],
        name: "Slav Defense",
        eco: "D10",
    },
    RawEntry {
        key: "rnbqkb1r/pppppppp/5n2/8/3P4/8/PPP1PPPP/RNBQKBNR w KQkq -",
        moves: &["c2c4", "g1f3"],
        name: "Indian Game",
        eco: "A45",
    },
    RawEntry {
        key: "rnbqkb1r/pppppppp/5n2/8/2PP4/8/PP2PPPP/RNBQKBNR b KQkq c3",
        moves: &["e7e6", "g7g6", "c7c5"],
        name: "Indian Game: Main Line",
        eco: "A46",
    },
    RawEntry {
        key: "rnbqk2r/pppp1ppp/4pn2/8/1bPP4/2N5/PP2PPPP/R1BQKBNR w KQkq -",
        moves: &["e2e3", "d1c2", "f2f3"],
        name: "Nimzo-Indian Defense",
        eco: "E20",
    },
    RawEntry {
        key: "rnbqk2r/ppppppbp/5np1/8/2PP4/2N5/PP2PPPP/R1BQKBNR w KQkq -",
        moves: &["e2e4"],
        name: "King's Indian Defense: Main Line",
        eco: "E90",
    },
];
