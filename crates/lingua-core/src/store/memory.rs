//! In-memory document store.
//!
//! Simple implementation suitable for tests and short-lived sessions. The
//! desktop app uses the file-backed store; a real deployment would supply a
//! hosted database behind the same trait.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{StoreError, StoreResult};
use super::{Direction, Document, DocumentStore, FieldFilter, OrderBy};

type Collections = BTreeMap<String, BTreeMap<String, Document>>;

/// In-memory `DocumentStore`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document under an explicit key. Used to seed test fixtures
    /// and by features that key documents by name rather than generated id.
    pub fn put_keyed(&self, collection: &str, key: &str, doc: Document) -> StoreResult<()> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), doc);
        Ok(())
    }

    pub(crate) fn snapshot(&self) -> StoreResult<Collections> {
        Ok(self
            .collections
            .read()
            .map_err(|_| StoreError::LockPoisoned)?
            .clone())
    }

    pub(crate) fn restore(&self, collections: Collections) -> StoreResult<()> {
        *self
            .collections
            .write()
            .map_err(|_| StoreError::LockPoisoned)? = collections;
        Ok(())
    }
}

/// Order two JSON field values for sorting. Numbers compare numerically,
/// everything else by string form (RFC 3339 timestamps sort correctly as
/// strings). Missing fields sort first.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(x), Some(y)) => value_as_string(x).cmp(&value_as_string(y)),
    }
}

fn value_as_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, key: &str) -> StoreResult<Option<Document>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(key))
            .cloned())
    }

    async fn put(&self, collection: &str, doc: Document) -> StoreResult<String> {
        let id = self.next_id.fetch_add(1, AtomicOrdering::Relaxed);
        let key = format!("doc-{:08}", id);
        self.put_keyed(collection, &key, doc)?;
        Ok(key)
    }

    async fn list(&self, collection: &str) -> StoreResult<Vec<(String, Document)>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn query(
        &self,
        collection: &str,
        filter: FieldFilter,
        order: OrderBy,
    ) -> StoreResult<Vec<Document>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;

        let mut results: Vec<Document> = collections
            .get(collection)
            .map(|docs| {
                docs.values()
                    .filter(|doc| doc.get(&filter.field) == Some(&filter.value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        results.sort_by(|a, b| {
            let ord = compare_values(a.get(&order.field), b.get(&order.field));
            match order.direction {
                Direction::Ascending => ord,
                Direction::Descending => ord.reverse(),
            }
        });

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_put_and_get() {
        let store = MemoryStore::new();
        let key = store.put("Conversations", json!({"a": 1})).await.unwrap();

        let doc = store.get("Conversations", &key).await.unwrap().unwrap();
        assert_eq!(doc, json!({"a": 1}));
    }

    #[tokio::test]
    async fn test_get_absent_is_none() {
        let store = MemoryStore::new();
        assert!(store.get("Friends", "nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_keyed_and_list() {
        let store = MemoryStore::new();
        store.put_keyed("users", "alice", json!({"completed": true})).unwrap();
        store.put_keyed("users", "bob", json!({"completed": false})).unwrap();

        let all = store.list("users").await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].0, "alice");
    }

    #[tokio::test]
    async fn test_list_missing_collection_is_empty() {
        let store = MemoryStore::new();
        assert!(store.list("nothing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_filters_and_sorts_descending() {
        let store = MemoryStore::new();
        for (user, ts) in [
            ("alice", "2024-06-01T10:00:00Z"),
            ("bob", "2024-06-02T10:00:00Z"),
            ("alice", "2024-06-03T10:00:00Z"),
        ] {
            store
                .put("Conversations", json!({"user_name": user, "timestamp": ts}))
                .await
                .unwrap();
        }

        let results = store
            .query(
                "Conversations",
                FieldFilter::eq("user_name", "alice"),
                OrderBy::desc("timestamp"),
            )
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["timestamp"], "2024-06-03T10:00:00Z");
        assert_eq!(results[1]["timestamp"], "2024-06-01T10:00:00Z");
    }
}
