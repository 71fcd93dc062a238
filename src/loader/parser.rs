//! Line-oriented parser that cuts a Markdown document into cards.
//!
//! The format is deliberately loose: any line containing `##` (but not
//! `###`) opens a new card, `###` lines extend the open card's question,
//! and every other line accumulates into its answer. Heading markers are
//! kept verbatim in the stored text; styling them away is the
//! presentation layer's job. Malformed input degrades to fewer cards
//! instead of failing, so only the file read can return an error.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::Card;

/// Incremental parser state. At most one card is open at a time; it is
/// committed when the next question heading arrives or input ends.
#[derive(Default)]
struct CardCutter {
    cards: Vec<Card>,
    current: Option<Card>,
}

impl CardCutter {
    fn feed(&mut self, line: &str) {
        if line.contains("##") && !line.contains("###") {
            self.commit();
            self.current = Some(Card {
                question: line.to_string(),
                answer: String::new(),
            });
        } else if line.contains("###") {
            // Sub-headings belong to the question, appended without a
            // separator.
            if let Some(card) = self.current.as_mut() {
                card.question.push_str(line);
            }
        } else if let Some(card) = self.current.as_mut() {
            card.answer.push_str(line);
            card.answer.push('\n');
        }
        // No card open yet: lines before the first heading are dropped.
    }

    fn commit(&mut self) {
        if let Some(card) = self.current.take() {
            self.cards.push(card);
        }
    }

    fn finish(mut self) -> Vec<Card> {
        self.commit();
        self.cards
    }
}

/// Parses document text into an ordered card list.
///
/// Never fails: a document without `##` headings simply yields no cards.
pub fn parse(text: &str) -> Vec<Card> {
    let mut cutter = CardCutter::default();
    for line in text.lines() {
        cutter.feed(line);
    }
    cutter.finish()
}

/// Reads one document from disk and parses it.
pub fn parse_file(path: &Path) -> Result<Vec<Card>> {
    let text = fs::read_to_string(path)?;
    Ok(parse(&text))
}
