//! # Favorites
//!
//! Set of favorited record ids, written through to a key-value store on
//! every toggle so it survives restarts.
//!
//! The store is a port: [`FileStore`] keeps one JSON file per key under the
//! data directory (`~/.toolshelf/` by default), [`MemoryStore`] keeps it in
//! memory for tests. All file writes use atomic rename (`.tmp`, then
//! `rename()`).

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use log::{debug, warn};

/// Key the favorites set is stored under.
pub const FAVORITES_KEY: &str = "favorites";

/// Minimal get/set persistence port.
pub trait KeyValueStore: Send {
    /// `Ok(None)` when nothing has been stored under `key` yet.
    fn get(&self, key: &str) -> io::Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// One `<key>.json` file per key inside a directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

/// Atomically write `contents` to `path` (via `.tmp` + rename).
fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        atomic_write(&self.path_for(key), value)
    }
}

/// In-memory store. Clones share the same map, so a test can keep a handle
/// and inspect what was written.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        store
    }
}

fn poisoned<T>(_: T) -> io::Error {
    io::Error::other("memory store lock poisoned")
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.lock().map_err(poisoned)?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries
            .lock()
            .map_err(poisoned)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOutcome {
    Favorited,
    Unfavorited,
}

pub struct Favorites {
    ids: Vec<u32>,
    store: Box<dyn KeyValueStore>,
}

impl Favorites {
    /// Load from `store`. Missing or unreadable data starts an empty set.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let ids = match store.get(FAVORITES_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<u32>>(&json) {
                Ok(mut ids) => {
                    let mut seen = Vec::with_capacity(ids.len());
                    ids.retain(|id| {
                        let fresh = !seen.contains(id);
                        seen.push(*id);
                        fresh
                    });
                    ids
                }
                Err(e) => {
                    warn!("Ignoring malformed favorites data: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read favorites: {}", e);
                Vec::new()
            }
        };
        debug!("Loaded {} favorites", ids.len());
        Self { ids, store }
    }

    /// Flip membership of `id` and persist the whole set immediately.
    pub fn toggle(&mut self, id: u32) -> FavoriteOutcome {
        let outcome = if let Some(pos) = self.ids.iter().position(|&x| x == id) {
            self.ids.remove(pos);
            FavoriteOutcome::Unfavorited
        } else {
            self.ids.push(id);
            FavoriteOutcome::Favorited
        };
        self.persist();
        outcome
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Ids in the order they were favorited.
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.ids) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize favorites: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(FAVORITES_KEY, &json) {
            warn!("Failed to save favorites: {}", e);
        }
    }
}

impl std::fmt::Debug for Favorites {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Favorites")
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}
