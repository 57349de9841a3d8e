//! Opening book keyed by position.
//!
//! Positions are matched on the first four FEN fields (placement, side to
//! move, castling and en passant), so the move counters never prevent a
//! match. The book itself is immutable; the "current opening" shown to a
//! player lives in an [`OpeningTracker`] owned by the caller.
//!
//! # Example
//! ```
//! use chess_rules::book::OpeningBook;
//! use chess_rules::board::START_FEN;
//!
//! let book = OpeningBook::standard();
//! let entry = book.lookup(START_FEN).unwrap();
//! assert_eq!(entry.name, "Starting Position");
//! assert_eq!(book.candidate_moves(START_FEN).len(), 4);
//! ```

mod table;
mod tracker;

pub use tracker::OpeningTracker;

use std::collections::HashMap;

use log::trace;
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::CoordinateMove;

/// A named position with the moves the book suggests from it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OpeningEntry {
    pub name: String,
    /// ECO code, empty when the position has none.
    pub eco: String,
    pub moves: Vec<CoordinateMove>,
}

#[derive(Clone, Debug, Default)]
pub struct OpeningBook {
    entries: HashMap<String, OpeningEntry>,
}

static STANDARD: Lazy<OpeningBook> = Lazy::new(|| {
    let mut book = OpeningBook::default();
    for raw in table::STANDARD_ENTRIES {
        let moves = raw
            .moves
            .iter()
            .filter_map(|text| text.parse().ok())
            .collect();
        book.insert(
            raw.key,
            OpeningEntry {
                name: raw.name.to_string(),
                eco: raw.eco.to_string(),
                moves,
            },
        );
    }
    book
});

impl OpeningBook {
    /// The built-in book, parsed on first use.
    #[must_use]
    pub fn standard() -> &'static OpeningBook {
        &STANDARD
    }

    /// Add or replace the entry for `fen`.
    pub fn insert(&mut self, fen: &str, entry: OpeningEntry) {
        self.entries.insert(Self::normalize_key(fen), entry);
    }

    /// The first four whitespace-separated FEN fields, single-spaced.
    #[must_use]
    pub fn normalize_key(fen: &str) -> String {
        fen.split_whitespace().take(4).collect::<Vec<_>>().join(" ")
    }

    #[must_use]
    pub fn lookup(&self, fen: &str) -> Option<&OpeningEntry> {
        let entry = self.entries.get(&Self::normalize_key(fen));
        if let Some(entry) = entry {
            trace!("book hit: {}", entry.name);
        }
        entry
    }

    /// Book moves for `fen`, empty when the position is not in the book.
    #[must_use]
    pub fn candidate_moves(&self, fen: &str) -> &[CoordinateMove] {
        self.lookup(fen)
            .map(|entry| entry.moves.as_slice())
            .unwrap_or(&[])
    }

    /// One candidate move chosen uniformly at random.
    pub fn pick_random<R: Rng + ?Sized>(&self, fen: &str, rng: &mut R) -> Option<CoordinateMove> {
        self.candidate_moves(fen).choose(rng).copied()
    }

    #[must_use]
    pub fn contains(&self, fen: &str) -> bool {
        self.entries.contains_key(&Self::normalize_key(fen))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every (key, entry) pair, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OpeningEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }
}
