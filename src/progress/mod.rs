//! Per-card-set progress persistence.

pub mod store;

pub use store::{ProgressStore, Property, Value};
