//! Discovery of card set documents under the flashcard root folder.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{CardsError, Result};

/// File extension a document must carry to count as a card set.
pub const CARD_SET_EXTENSION: &str = "md";

/// Recursively collects every Markdown file under `root`.
///
/// Returned paths are relative to `root` and sorted, so the selection
/// list is stable between runs. A missing root is fatal; unreadable
/// entries below it are skipped with a warning. An empty result is
/// valid — there is simply nothing to select yet.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(CardsError::DirectoryNotFound(root.to_path_buf()));
    }

    let mut sets = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("skipping unreadable entry under {}: {}", root.display(), err);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|ext| ext.to_str()) != Some(CARD_SET_EXTENSION) {
            continue;
        }
        if let Ok(rel) = entry.path().strip_prefix(root) {
            sets.push(rel.to_path_buf());
        }
    }

    sets.sort();
    Ok(sets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_markdown_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("top.md"), "## Q\nA\n").unwrap();
        fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
        fs::write(dir.path().join("nested/inner.md"), "").unwrap();
        fs::write(dir.path().join("nested/deeper/leaf.md"), "").unwrap();

        let sets = discover(dir.path()).unwrap();
        assert_eq!(
            sets,
            vec![
                PathBuf::from("nested/deeper/leaf.md"),
                PathBuf::from("nested/inner.md"),
                PathBuf::from("top.md"),
            ]
        );
    }

    #[test]
    fn ignores_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join("image.png"), "").unwrap();
        fs::write(dir.path().join("cards.md"), "").unwrap();

        let sets = discover(dir.path()).unwrap();
        assert_eq!(sets, vec![PathBuf::from("cards.md")]);
    }

    #[test]
    fn empty_root_yields_no_sets() {
        let dir = tempfile::tempdir().unwrap();
        let sets = discover(dir.path()).unwrap();
        assert!(sets.is_empty());
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = discover(&missing).unwrap_err();
        assert!(matches!(err, CardsError::DirectoryNotFound(path) if path == missing));
    }
}
