//! Typed key/value store backing the "answered correctly" flags.
//!
//! Each selected card set gets its own namespace, a JSON file named
//! after a hash of the set's root-relative path. Keys are the literal
//! question strings; values are typed (flag, integer, or text). Every
//! mutation is followed by an eager save — a few writes per user
//! interaction, so durability wins over write batching.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::Result;

/// One typed slot in the store. `untagged` keeps the backing file a
/// plain JSON object of booleans, integers, and strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Flag(bool),
    Integer(i64),
    Text(String),
}

/// Conversion between plain Rust types and stored [`Value`]s.
///
/// The `Default` bound supplies the fallback for absent keys: `false`,
/// `0`, or the empty string.
pub trait Property: Default {
    fn from_value(value: &Value) -> Option<Self>;
    fn into_value(self) -> Value;
}

impl Property for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Flag(self)
    }
}

impl Property for i64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(number) => Some(*number),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Integer(self)
    }
}

impl Property for String {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(text) => Some(text.clone()),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Text(self)
    }
}

/// In-memory value mapping for one namespace, tied to its backing file.
#[derive(Debug)]
pub struct ProgressStore {
    path: PathBuf,
    values: BTreeMap<String, Value>,
}

impl ProgressStore {
    /// Derives the stable namespace identifier for a card set path.
    ///
    /// The digest depends only on the path relative to the scan root,
    /// so progress survives moving the root folder around.
    pub fn namespace(rel_path: &Path) -> String {
        let mut hasher = Sha256::new();
        hasher.update(rel_path.to_string_lossy().as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Opens the store for one namespace under `dir`.
    ///
    /// A missing backing file is not an error — the namespace starts
    /// out empty on first use of a new card set.
    pub fn load(dir: &Path, namespace: &str) -> Result<Self> {
        let path = dir.join(format!("{namespace}.json"));
        let values = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, values })
    }

    /// Returns the stored value for `key`, or the type's default when
    /// the key is absent or holds a different type. Never fails.
    pub fn get<T: Property>(&self, key: &str) -> T {
        self.values
            .get(key)
            .and_then(T::from_value)
            .unwrap_or_default()
    }

    /// Upserts a value in memory. Nothing touches disk until [`save`].
    ///
    /// [`save`]: ProgressStore::save
    pub fn set<T: Property>(&mut self, key: &str, value: T) {
        self.values.insert(key.to_string(), value.into_value());
    }

    /// Writes the whole mapping back to the backing file, replacing
    /// prior contents. Creates the progress directory on first write.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}
