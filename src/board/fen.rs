use std::str::FromStr;

use super::error::FenError;
use super::{
    CastleSide, CastlingRights, Color, ColoredPiece, EnPassantTarget, Piece, Position, Square,
};

/// Starting position in FEN.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const CASTLING_LETTERS: [(char, Color, CastleSide); 4] = [
    ('K', Color::White, CastleSide::Kingside),
    ('Q', Color::White, CastleSide::Queenside),
    ('k', Color::Black, CastleSide::Kingside),
    ('q', Color::Black, CastleSide::Queenside),
];

impl Position {
    /// Parse a position from FEN.
    ///
    /// The two move counters are optional and default to `0 1`.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&parts.len()) {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        let mut position = Position::empty();
        parse_placement(&mut position, parts[0])?;

        position.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        position.castling = parse_castling(parts[2])?;
        position.en_passant = parse_en_passant(parts[3], position.side_to_move)?;

        if let Some(clock) = parts.get(4) {
            position.halfmove_clock = parse_counter(clock)?;
        }
        if let Some(number) = parts.get(5) {
            position.fullmove_number = parse_counter(number)?;
        }

        Ok(position)
    }

    /// Convert the position to FEN.
    #[must_use]
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {}",
            self.book_key(),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// The first four FEN fields: placement, side, castling, en passant.
    #[must_use]
    pub fn book_key(&self) -> String {
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |target| target.square.to_string());
        format!(
            "{} {} {} {}",
            self.placement(),
            self.side_to_move.fen_char(),
            self.castling_field(),
            ep
        )
    }

    fn placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut text = String::new();
            let mut empty = 0;
            for col in 0..8 {
                if let Some(piece) = self.grid.get(Square::at(row, col)) {
                    if empty > 0 {
                        text.push_str(&empty.to_string());
                        empty = 0;
                    }
                    text.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }
        rows.join("/")
    }

    fn castling_field(&self) -> String {
        let letters: String = CASTLING_LETTERS
            .iter()
            .filter(|&&(_, color, side)| self.castling.holds(color, side))
            .map(|&(letter, _, _)| letter)
            .collect();
        if letters.is_empty() {
            "-".to_string()
        } else {
            letters
        }
    }
}

fn parse_placement(position: &mut Position, placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = 8 - row;
        let mut col = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as usize;
            } else {
                let piece = ColoredPiece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(FenError::WrongFileCount {
                        rank,
                        files: col + 1,
                    });
                }
                position.grid.set(Square::at(row, col), Some(piece));
                col += 1;
            }
        }
        if col != 8 {
            return Err(FenError::WrongFileCount { rank, files: col });
        }
    }

    for color in Color::BOTH {
        let found = position.grid.count(ColoredPiece::new(Piece::King, color));
        if found != 1 {
            return Err(FenError::KingCount { color, found });
        }
    }
    Ok(())
}

/// Letters map onto the moved-piece model: a color with no letter has
/// moved its king, a single missing letter means that rook has moved.
fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut held = [[false; 2]; 2];
    if field != "-" {
        for c in field.chars() {
            let &(_, color, side) = CASTLING_LETTERS
                .iter()
                .find(|(letter, _, _)| *letter == c)
                .ok_or(FenError::InvalidCastling { char: c })?;
            held[color.index()][side_index(side)] = true;
        }
    }

    let mut rights = CastlingRights::all();
    for color in Color::BOTH {
        let sides = held[color.index()];
        if !sides.iter().any(|&h| h) {
            rights.mark_king_moved(color);
            continue;
        }
        for side in CastleSide::BOTH {
            if !sides[side_index(side)] {
                rights.mark_rook_moved(color, side);
            }
        }
    }
    Ok(rights)
}

fn side_index(side: CastleSide) -> usize {
    match side {
        CastleSide::Kingside => 0,
        CastleSide::Queenside => 1,
    }
}

/// The target was made by the side that just moved, so it must sit on
/// that side's third rank.
fn parse_en_passant(field: &str, side_to_move: Color) -> Result<Option<EnPassantTarget>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let square: Square = field.parse().map_err(|_| invalid())?;
    let creator = side_to_move.opponent();
    let skipped_row = (creator.pawn_start_row() as isize + creator.pawn_direction()) as usize;
    if square.row() != skipped_row {
        return Err(invalid());
    }
    Ok(Some(EnPassantTarget { square, creator }))
}

fn parse_counter(text: &str) -> Result<u32, FenError> {
    text.parse().map_err(|_| FenError::InvalidCounter {
        found: text.to_string(),
    })
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
