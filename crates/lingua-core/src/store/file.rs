//! File-backed document store for the desktop app.
//!
//! Keeps every collection in one JSON file, loaded at open and written
//! through after each put. Collections this app only reads (challenge
//! records, friend lists) are still served from the same file, so a seeded
//! data file behaves like the hosted database would.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{StoreError, StoreResult};
use super::{Document, DocumentStore, FieldFilter, MemoryStore, OrderBy};

/// JSON-file `DocumentStore`. Delegates lookups to an in-memory store and
/// serializes the whole collection map back to disk on every write.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
    // Serializes save() calls so concurrent puts cannot interleave writes.
    save_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open the store at `path`, creating an empty one if the file does not
    /// exist yet.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let inner = MemoryStore::new();

        if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            let collections = serde_json::from_str(&raw)?;
            inner.restore(collections)?;
        } else if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Ok(Self {
            path,
            inner,
            save_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> StoreResult<()> {
        let _guard = self.save_lock.lock().map_err(|_| StoreError::LockPoisoned)?;
        let snapshot = self.inner.snapshot()?;
        let raw = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn get(&self, collection: &str, key: &str) -> StoreResult<Option<Document>> {
        self.inner.get(collection, key).await
    }

    async fn put(&self, collection: &str, doc: Document) -> StoreResult<String> {
        let key = self.inner.put(collection, doc).await?;
        self.save()?;
        Ok(key)
    }

    async fn list(&self, collection: &str) -> StoreResult<Vec<(String, Document)>> {
        self.inner.list(collection).await
    }

    async fn query(
        &self,
        collection: &str,
        filter: FieldFilter,
        order: OrderBy,
    ) -> StoreResult<Vec<Document>> {
        self.inner.query(collection, filter, order).await
    }
}
