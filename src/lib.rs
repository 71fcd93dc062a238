pub mod error;
pub mod loader;
pub mod models;
pub mod progress;

pub use error::{CardsError, Result};
pub use models::{Card, CardSet, StudySession};
pub use progress::ProgressStore;
