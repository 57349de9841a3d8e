use super::OpeningBook;

const START_NAME: &str = "Starting Position";

/// The most recent named opening seen during a game.
///
/// Positions missing from the book leave the last name in place, so the
/// display keeps showing the opening a game left theory from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpeningTracker {
    name: String,
    eco: String,
}

impl Default for OpeningTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl OpeningTracker {
    #[must_use]
    pub fn new() -> Self {
        OpeningTracker {
            name: START_NAME.to_string(),
            eco: String::new(),
        }
    }

    /// Look `fen` up in `book` and remember its name on a hit.
    ///
    /// Returns true if the position was in the book.
    pub fn observe(&mut self, book: &OpeningBook, fen: &str) -> bool {
        match book.lookup(fen) {
            Some(entry) => {
                self.name.clone_from(&entry.name);
                self.eco.clone_from(&entry.eco);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn eco(&self) -> &str {
        &self.eco
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
