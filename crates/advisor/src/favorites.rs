//! Persisted favorites list.
//!
//! Favorites are an ordered list of university snapshots stored as a JSON
//! array under `FAVORITES_KEY` in a key-value store. The list is loaded once
//! and the whole value is rewritten after every change, so the last writer
//! wins when two processes share a store.

use catalog::University;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Store key holding the favorites list
pub const FAVORITES_KEY: &str = "university-favorites";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access store file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Store file {path} is not a JSON object of strings: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode favorites: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Minimal string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// In-process store, mainly for tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a single JSON object file.
///
/// A missing file reads as an empty store. The file is created (with its
/// parent directories) on the first write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_string_pretty(&values)?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }
}

/// The student's shortlist, kept in insertion order.
#[derive(Debug)]
pub struct Favorites<S: KeyValueStore> {
    store: S,
    items: Vec<University>,
}

impl<S: KeyValueStore> Favorites<S> {
    /// Load the saved list from `store`.
    ///
    /// Unreadable list data is logged and replaced with an empty list; only
    /// failures of the store itself are errors.
    pub fn load(store: S) -> Result<Self, StoreError> {
        let items = match store.get(FAVORITES_KEY)? {
            Some(saved) => serde_json::from_str(&saved).unwrap_or_else(|e| {
                warn!("Discarding unreadable favorites: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        };
        debug!("Loaded {} favorites", items.len());
        Ok(Self { store, items })
    }

    pub fn list(&self) -> &[University] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|fav| fav.id == id)
    }

    /// Add a snapshot. Returns false (and changes nothing) if a university
    /// with the same id is already saved.
    pub fn add(&mut self, university: University) -> Result<bool, StoreError> {
        if self.contains(&university.id) {
            return Ok(false);
        }
        let mut updated = self.items.clone();
        updated.push(university);
        self.commit(updated)?;
        Ok(true)
    }

    /// Remove by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        if !self.contains(id) {
            return Ok(false);
        }
        let updated = self.items.iter().filter(|fav| fav.id != id).cloned().collect();
        self.commit(updated)?;
        Ok(true)
    }

    /// Remove if saved, add otherwise. Returns whether it is now a favorite.
    pub fn toggle(&mut self, university: University) -> Result<bool, StoreError> {
        if self.contains(&university.id) {
            self.remove(&university.id)?;
            Ok(false)
        } else {
            self.add(university)
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write `updated` to the store, then adopt it. A failed write leaves
    /// the in-memory list untouched.
    fn commit(&mut self, updated: Vec<University>) -> Result<(), StoreError> {
        let json = serde_json::to_string(&updated)?;
        self.store.set(FAVORITES_KEY, json)?;
        self.items = updated;
        Ok(())
    }
}
