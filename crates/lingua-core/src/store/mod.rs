//! Document store collaborator seam.
//!
//! Collections are flat namespaces of JSON documents addressed by string
//! keys. Typed records decode from documents via serde. The store promises
//! per-document read-after-write consistency for the current client and
//! nothing across documents.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::StoreResult;

/// A stored document.
pub type Document = Value;

/// Equality filter on a single document field.
#[derive(Debug, Clone)]
pub struct FieldFilter {
    pub field: String,
    pub value: Value,
}

impl FieldFilter {
    /// Match documents whose `field` equals `value`.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Sort direction for queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Ordering on a single document field.
#[derive(Debug, Clone)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

impl OrderBy {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Ascending,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Descending,
        }
    }
}

/// Document database collaborator.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch one document by key. Absence is `Ok(None)`, never an error.
    async fn get(&self, collection: &str, key: &str) -> StoreResult<Option<Document>>;

    /// Store a document under a generated key; returns the key.
    async fn put(&self, collection: &str, doc: Document) -> StoreResult<String>;

    /// Fetch every (key, document) pair in a collection.
    async fn list(&self, collection: &str) -> StoreResult<Vec<(String, Document)>>;

    /// Fetch documents matching `filter`, sorted by `order`.
    async fn query(
        &self,
        collection: &str,
        filter: FieldFilter,
        order: OrderBy,
    ) -> StoreResult<Vec<Document>>;
}

/// Fetch and decode one typed record. Absent or undecodable documents both
/// come back as `None` — a document another feature wrote in an unexpected
/// shape is treated like absence, not a failure.
pub async fn get_typed<T, S>(store: &S, collection: &str, key: &str) -> StoreResult<Option<T>>
where
    T: DeserializeOwned,
    S: DocumentStore + ?Sized,
{
    let Some(doc) = store.get(collection, key).await? else {
        return Ok(None);
    };
    match serde_json::from_value(doc) {
        Ok(record) => Ok(Some(record)),
        Err(e) => {
            tracing::warn!(collection, key, "undecodable document treated as absent: {}", e);
            Ok(None)
        }
    }
}
