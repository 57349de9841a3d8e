use std::fmt;

/// A line sent to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Uci,
    IsReady,
    UciNewGame,
    /// `position fen <fen>`
    PositionFen(String),
    /// `go depth <depth> [multipv <lines>]`
    Go { depth: u32, multipv: Option<u32> },
    Stop,
    Quit,
}

impl fmt::Display for EngineCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineCommand::Uci => write!(f, "uci"),
            EngineCommand::IsReady => write!(f, "isready"),
            EngineCommand::UciNewGame => write!(f, "ucinewgame"),
            EngineCommand::PositionFen(fen) => write!(f, "position fen {fen}"),
            EngineCommand::Go { depth, multipv } => {
                write!(f, "go depth {depth}")?;
                if let Some(lines) = multipv {
                    write!(f, " multipv {lines}")?;
                }
                Ok(())
            }
            EngineCommand::Stop => write!(f, "stop"),
            EngineCommand::Quit => write!(f, "quit"),
        }
    }
}

impl EngineCommand {
    /// Parse a command line as the engine side reads it.
    ///
    /// Returns `None` for blank lines and anything unrecognized.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let (&first, rest) = parts.split_first()?;

        let cmd = match first {
            "uci" => EngineCommand::Uci,
            "isready" => EngineCommand::IsReady,
            "ucinewgame" => EngineCommand::UciNewGame,
            "position" => match rest {
                ["fen", fen @ ..] if !fen.is_empty() => EngineCommand::PositionFen(fen.join(" ")),
                _ => return None,
            },
            "go" => {
                let depth = value_after(rest, "depth")?;
                let multipv = value_after(rest, "multipv");
                EngineCommand::Go { depth, multipv }
            }
            "stop" => EngineCommand::Stop,
            "quit" => EngineCommand::Quit,
            _ => return None,
        };

        Some(cmd)
    }
}

fn value_after(parts: &[&str], key: &str) -> Option<u32> {
    let index = parts.iter().position(|&part| part == key)?;
    parts.get(index + 1)?.parse().ok()
}

/// One search: a position and how deep to look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub fen: String,
    pub depth: u32,
    /// Number of lines to report; `None` for a plain best-move search.
    pub multipv: Option<u32>,
}

impl SearchRequest {
    /// The two commands that start this search.
    #[must_use]
    pub fn commands(&self) -> [EngineCommand; 2] {
        [
            EngineCommand::PositionFen(self.fen.clone()),
            EngineCommand::Go {
                depth: self.depth,
                multipv: self.multipv,
            },
        ]
    }
}
