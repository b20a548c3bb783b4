//! # Persistent Key-Value Storage
//!
//! Every store owns a [`StorageSlot`] pointing at one key of a shared
//! [`KeyValueStore`]. A slot holds the JSON encoding of a whole value
//! (usually a `Vec` of entities) and is overwritten in full on every save.
//!
//! Two backends are provided:
//!
//! - [`MemoryStore`] keeps values in process memory. Cloning it shares the same
//!   map, which lets tests start a second system against the "same disk".
//! - [`FileStore`] writes one `<key>.json` file per key under a directory.
//!
//! Whole-value overwrites mean two processes writing the same key race with
//! last-writer-wins semantics. Nothing here detects or merges concurrent writes.

use crate::error::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for the durable string store that backs every collection.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: String) -> StorageResult<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// In-memory key-value store.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys currently present, sorted.
    pub fn keys(&self) -> StorageResult<Vec<String>> {
        let entries = self.read()?;
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    fn read(&self) -> StorageResult<std::sync::RwLockReadGuard<'_, HashMap<String, String>>> {
        self.entries
            .read()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".into()))
    }

    fn write(&self) -> StorageResult<std::sync::RwLockWriteGuard<'_, HashMap<String, String>>> {
        self.entries
            .write()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".into()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.read()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> StorageResult<()> {
        self.write()?.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.write()?.remove(key);
        Ok(())
    }
}

/// Directory-backed key-value store, one JSON file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens (and creates if needed) the data directory.
    pub fn open(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|source| StorageError::Io {
            key: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&self, key: &str, value: String) -> StorageResult<()> {
        std::fs::write(self.path_for(key), value).map_err(|source| StorageError::Io {
            key: key.to_string(),
            source,
        })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}

/// Typed JSON view of a single key.
pub struct StorageSlot<V> {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    _value: PhantomData<fn() -> V>,
}

impl<V> Clone for StorageSlot<V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            key: self.key,
            _value: PhantomData,
        }
    }
}

impl<V: Serialize + DeserializeOwned> StorageSlot<V> {
    pub fn new(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        Self {
            store,
            key,
            _value: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Reads and decodes the stored value, `None` when the key is absent.
    pub fn load(&self) -> StorageResult<Option<V>> {
        let Some(raw) = self.store.get(self.key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Serde {
                key: self.key.to_string(),
                source,
            })
    }

    /// Like [`load`](Self::load) but treats unreadable data as absent.
    pub fn load_or_discard(&self) -> Option<V> {
        match self.load() {
            Ok(value) => value,
            Err(e) => {
                warn!(key = self.key, error = %e, "Discarding unreadable stored value");
                None
            }
        }
    }

    /// Encodes `value` and overwrites the key.
    pub fn save(&self, value: &V) -> StorageResult<()> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Serde {
            key: self.key.to_string(),
            source,
        })?;
        debug!(key = self.key, bytes = raw.len(), "Saving");
        self.store.set(self.key, raw)
    }

    pub fn clear(&self) -> StorageResult<()> {
        debug!(key = self.key, "Clearing");
        self.store.remove(self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        title: String,
        pinned: bool,
    }

    fn notes() -> Vec<Note> {
        vec![
            Note { title: "first".into(), pinned: true },
            Note { title: "second".into(), pinned: false },
        ]
    }

    #[test]
    fn test_memory_slot_save_and_load() {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let slot = StorageSlot::<Vec<Note>>::new(kv, "notes");

        assert_eq!(slot.load().unwrap(), None);
        slot.save(&notes()).unwrap();
        assert_eq!(slot.load().unwrap(), Some(notes()));

        slot.clear().unwrap();
        assert_eq!(slot.load().unwrap(), None);
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("user", "{}".into()).unwrap();
        assert_eq!(other.get("user").unwrap().as_deref(), Some("{}"));
        assert_eq!(other.keys().unwrap(), vec!["user".to_string()]);
    }

    #[test]
    fn test_corrupt_value_is_discarded() {
        let store = MemoryStore::new();
        store.set("notes", "not json".into()).unwrap();
        let slot = StorageSlot::<Vec<Note>>::new(Arc::new(store), "notes");

        assert!(matches!(slot.load(), Err(StorageError::Serde { .. })));
        assert_eq!(slot.load_or_discard(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        {
            let kv: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(dir.path()).unwrap());
            StorageSlot::<Vec<Note>>::new(kv, "notes").save(&notes()).unwrap();
        }
        assert!(dir.path().join("notes.json").exists());

        let kv: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(dir.path()).unwrap());
        let slot = StorageSlot::<Vec<Note>>::new(kv, "notes");
        assert_eq!(slot.load().unwrap(), Some(notes()));

        slot.clear().unwrap();
        slot.clear().unwrap();
        assert!(!dir.path().join("notes.json").exists());
    }
}
