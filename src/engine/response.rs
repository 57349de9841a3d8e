use crate::board::CoordinateMove;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Engine evaluation from the side to move's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Score {
    Centipawns(i32),
    /// Mate in this many moves; negative when the side to move is mated.
    Mate(i32),
}

/// The fields of an `info` line this crate uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InfoLine {
    pub depth: Option<u32>,
    pub multipv: Option<u32>,
    pub score: Option<Score>,
    /// Principal variation, cut at the first token that is not a move.
    pub pv: Vec<CoordinateMove>,
}

/// A `bestmove` line. The move is kept as sent, since the engine may say
/// `(none)` or `0000`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BestMove {
    pub mv: String,
    pub ponder: Option<String>,
}

/// A line received from the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineLine {
    UciOk,
    ReadyOk,
    Info(InfoLine),
    BestMove(BestMove),
    /// `id`, `option`, `info string` and anything else.
    Other(String),
}

impl EngineLine {
    #[must_use]
    pub fn parse(line: &str) -> EngineLine {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            ["uciok"] => EngineLine::UciOk,
            ["readyok"] => EngineLine::ReadyOk,
            ["bestmove", mv, rest @ ..] => EngineLine::BestMove(BestMove {
                mv: (*mv).to_string(),
                ponder: match rest {
                    ["ponder", ponder, ..] => Some((*ponder).to_string()),
                    _ => None,
                },
            }),
            ["info", rest @ ..] if rest.first() != Some(&"string") => {
                match parse_info(rest) {
                    Some(info) => EngineLine::Info(info),
                    None => EngineLine::Other(line.trim().to_string()),
                }
            }
            _ => EngineLine::Other(line.trim().to_string()),
        }
    }
}

/// Walk `info` tokens. Returns `None` for lines without a depth or a pv,
/// such as `info currmove` progress reports.
fn parse_info(parts: &[&str]) -> Option<InfoLine> {
    let mut info = InfoLine::default();
    let mut i = 0;
    while i < parts.len() {
        match parts[i] {
            "depth" => {
                info.depth = parts.get(i + 1).and_then(|v| v.parse().ok());
                i += 2;
            }
            "multipv" => {
                info.multipv = parts.get(i + 1).and_then(|v| v.parse().ok());
                i += 2;
            }
            "score" => {
                let value = parts.get(i + 2).and_then(|v| v.parse().ok());
                info.score = match (parts.get(i + 1), value) {
                    (Some(&"cp"), Some(cp)) => Some(Score::Centipawns(cp)),
                    (Some(&"mate"), Some(moves)) => Some(Score::Mate(moves)),
                    _ => None,
                };
                i += 3;
            }
            "pv" => {
                info.pv = parts[i + 1..]
                    .iter()
                    .map_while(|token| token.parse().ok())
                    .collect();
                break;
            }
            _ => i += 1,
        }
    }

    if info.depth.is_none() && info.pv.is_empty() {
        None
    } else {
        Some(info)
    }
}
