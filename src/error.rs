//! Error types shared by the loader and the progress store.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`CardsError`].
pub type Result<T> = std::result::Result<T, CardsError>;

/// Everything that can go wrong outside of the parser, which never fails.
#[derive(Debug, Error)]
pub enum CardsError {
    /// The flashcard root folder is missing. Fatal at startup.
    #[error("flashcard folder not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A progress file exists but does not hold a valid value mapping.
    #[error("malformed progress file: {0}")]
    Format(#[from] serde_json::Error),
}
