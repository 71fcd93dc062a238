//! A card is a question/answer pair cut out of a Markdown document.
//! Both halves keep their raw Markdown text, heading markers included.

/// The question string doubles as the card's identity for progress
/// tracking, so it is never normalized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Card {
    pub question: String,
    pub answer: String,
}
