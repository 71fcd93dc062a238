//! Study session state: the selected card set, the cursor over it, and
//! the per-question progress flags.

use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::Result;
use crate::loader;
use crate::models::{Card, CardSet};
use crate::progress::ProgressStore;

/// Cursor over one parsed card set, with that set's progress namespace
/// attached.
///
/// All cursor operations keep `current_index` inside `0..len()` while
/// the set is non-empty; on an empty set every operation is a no-op.
pub struct StudySession {
    cards: CardSet,
    current_index: usize,
    show_answer: bool,
    progress: ProgressStore,
}

impl StudySession {
    /// Parses the card set at `rel_path` under `root` and loads its
    /// progress namespace from `progress_dir`.
    ///
    /// Selecting a set always re-reads the file from disk and starts
    /// the cursor at the first card with the answer hidden; the caller
    /// replaces any previous session with the returned one.
    pub fn select(root: &Path, rel_path: &Path, progress_dir: &Path) -> Result<Self> {
        let cards = loader::parse_file(&root.join(rel_path))?;
        let namespace = ProgressStore::namespace(rel_path);
        let progress = ProgressStore::load(progress_dir, &namespace)?;

        Ok(Self {
            cards: CardSet {
                rel_path: rel_path.to_path_buf(),
                cards,
            },
            current_index: 0,
            show_answer: false,
            progress,
        })
    }

    pub fn card_set(&self) -> &CardSet {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.cards.cards.get(self.current_index)
    }

    pub fn show_answer(&self) -> bool {
        self.show_answer
    }

    pub fn toggle_answer(&mut self) {
        self.show_answer = !self.show_answer;
    }

    /// Advances to the next card and hides the answer again. Does not
    /// wrap: a no-op on the last card.
    pub fn next(&mut self) {
        if !self.is_empty() && self.current_index != self.len() - 1 {
            self.current_index += 1;
            self.show_answer = false;
        }
    }

    /// Steps back one card. The answer stays revealed if it already
    /// was — deliberately asymmetric with [`next`].
    ///
    /// [`next`]: StudySession::next
    pub fn back(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    /// Jumps to a uniformly random card.
    pub fn random_jump(&mut self, rng: &mut impl Rng) {
        if !self.is_empty() {
            self.current_index = rng.random_range(0..self.len());
        }
    }

    /// Permutes the cards in place. The cursor stays where it is, so it
    /// usually lands on a different question afterwards.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.cards.cards.shuffle(rng);
    }

    /// Whether the current question was last answered correctly.
    pub fn current_answered_correctly(&self) -> bool {
        match self.current_card() {
            Some(card) => self.progress.get(&card.question),
            None => false,
        }
    }

    /// Records the flag for the current question, keyed by its literal
    /// text, and persists immediately.
    pub fn mark_current_answer(&mut self, correct: bool) -> Result<()> {
        let Some(card) = self.current_card() else {
            return Ok(());
        };
        let question = card.question.clone();
        self.progress.set(&question, correct);
        self.progress.save()
    }

    /// Flips the stored flag for the current question and saves. Bound
    /// to the Enter key in the UI.
    pub fn toggle_current_answer(&mut self) -> Result<()> {
        let correct = self.current_answered_correctly();
        self.mark_current_answer(!correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const SET: &str = "rust.md";

    fn session_with(text: &str) -> (TempDir, StudySession) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SET), text).unwrap();
        let session = StudySession::select(
            dir.path(),
            Path::new(SET),
            &dir.path().join(".progress"),
        )
        .unwrap();
        (dir, session)
    }

    fn three_card_session() -> (TempDir, StudySession) {
        session_with("## Q1\nA1\n## Q2\nA2\n## Q3\nA3\n")
    }

    #[test]
    fn select_starts_at_the_first_card_with_answer_hidden() {
        let (_dir, session) = three_card_session();
        assert_eq!(session.len(), 3);
        assert_eq!(session.current_index(), 0);
        assert!(!session.show_answer());
        assert_eq!(session.current_card().unwrap().question, "## Q1");
        assert_eq!(session.card_set().rel_path, PathBuf::from(SET));
    }

    #[test]
    fn next_advances_and_hides_the_answer() {
        let (_dir, mut session) = three_card_session();
        session.toggle_answer();
        session.next();
        assert_eq!(session.current_index(), 1);
        assert!(!session.show_answer());
    }

    #[test]
    fn next_is_a_no_op_on_the_last_card() {
        let (_dir, mut session) = three_card_session();
        session.next();
        session.next();
        session.toggle_answer();
        session.next();
        assert_eq!(session.current_index(), 2);
        // State untouched, including the visibility flag.
        assert!(session.show_answer());
    }

    #[test]
    fn back_keeps_the_answer_visible() {
        let (_dir, mut session) = three_card_session();
        session.next();
        session.toggle_answer();
        session.back();
        assert_eq!(session.current_index(), 0);
        assert!(session.show_answer());
    }

    #[test]
    fn back_is_a_no_op_on_the_first_card() {
        let (_dir, mut session) = three_card_session();
        session.back();
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn random_jump_stays_in_range() {
        let (_dir, mut session) = three_card_session();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            session.random_jump(&mut rng);
            assert!(session.current_index() < session.len());
        }
    }

    #[test]
    fn shuffle_permutes_without_losing_cards() {
        let (_dir, mut session) = three_card_session();
        let before: Vec<Card> = session.card_set().cards.clone();

        let mut rng = StdRng::seed_from_u64(7);
        session.shuffle(&mut rng);

        let after = &session.card_set().cards;
        assert_eq!(after.len(), before.len());
        let mut sorted_before: Vec<_> = before.iter().map(|c| &c.question).collect();
        let mut sorted_after: Vec<_> = after.iter().map(|c| &c.question).collect();
        sorted_before.sort();
        sorted_after.sort();
        assert_eq!(sorted_before, sorted_after);
    }

    #[test]
    fn shuffle_keeps_the_cursor_position() {
        let (_dir, mut session) = three_card_session();
        session.next();
        let mut rng = StdRng::seed_from_u64(7);
        session.shuffle(&mut rng);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn marking_persists_across_reselection() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SET), "## Q1\nA1\n## Q2\nA2\n").unwrap();
        let progress_dir = dir.path().join(".progress");

        let mut session =
            StudySession::select(dir.path(), Path::new(SET), &progress_dir).unwrap();
        assert!(!session.current_answered_correctly());
        session.mark_current_answer(true).unwrap();

        let reopened =
            StudySession::select(dir.path(), Path::new(SET), &progress_dir).unwrap();
        assert!(reopened.current_answered_correctly());
    }

    #[test]
    fn toggle_flips_the_stored_flag() {
        let (_dir, mut session) = three_card_session();
        session.toggle_current_answer().unwrap();
        assert!(session.current_answered_correctly());
        session.toggle_current_answer().unwrap();
        assert!(!session.current_answered_correctly());
    }

    #[test]
    fn flags_are_tracked_per_question() {
        let (_dir, mut session) = three_card_session();
        session.mark_current_answer(true).unwrap();
        session.next();
        assert!(!session.current_answered_correctly());
        session.back();
        assert!(session.current_answered_correctly());
    }

    #[test]
    fn empty_set_is_inactive() {
        let (_dir, mut session) = session_with("no headings here\n");
        assert!(session.is_empty());
        assert!(session.current_card().is_none());
        assert!(!session.current_answered_correctly());

        let mut rng = StdRng::seed_from_u64(1);
        session.next();
        session.back();
        session.random_jump(&mut rng);
        session.shuffle(&mut rng);
        session.mark_current_answer(true).unwrap();
        assert!(session.current_card().is_none());
    }
}
