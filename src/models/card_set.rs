//! An ordered card set parsed from a single Markdown file.
//!
//! A set is always rebuilt from its source file on selection; it is
//! never persisted itself.

use std::path::PathBuf;

use super::Card;

#[derive(Clone, Debug, Default)]
pub struct CardSet {
    /// Path of the source document, relative to the scan root. Doubles
    /// as the display name and as the progress namespace seed.
    pub rel_path: PathBuf,
    /// Cards in document order, top to bottom, until shuffled.
    pub cards: Vec<Card>,
}

impl CardSet {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
