//! Persisted conversation history, newest first.

use std::sync::Arc;

use crate::error::StoreResult;
use crate::records::{ConversationRecord, CONVERSATIONS};
use crate::store::{DocumentStore, FieldFilter, OrderBy};

/// Page-level load state for the history view. "No records" is distinct from
/// "still loading" and from "load failed".
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryState {
    Loading,
    Loaded(Vec<ConversationRecord>),
    Failed(String),
}

impl HistoryState {
    pub fn is_empty(&self) -> bool {
        matches!(self, HistoryState::Loaded(records) if records.is_empty())
    }
}

/// Fetches a user's persisted transcripts ordered by recency.
pub struct HistoryViewer<S> {
    store: Arc<S>,
}

impl<S: DocumentStore> HistoryViewer<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// All conversation records for `user_name`, newest first. An empty user
    /// name is "load complete, zero records", not an error.
    pub async fn load(&self, user_name: &str) -> StoreResult<Vec<ConversationRecord>> {
        if user_name.is_empty() {
            return Ok(Vec::new());
        }

        let docs = self
            .store
            .query(
                CONVERSATIONS,
                FieldFilter::eq("user_name", user_name),
                OrderBy::desc("timestamp"),
            )
            .await?;

        // Documents another feature wrote in an unexpected shape are skipped,
        // not fatal.
        let records = docs
            .into_iter()
            .filter_map(|doc| match serde_json::from_value(doc) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("skipping undecodable conversation record: {}", e);
                    None
                }
            })
            .collect();

        Ok(records)
    }

    /// Load and fold the result into a `HistoryState` for direct rendering.
    pub async fn load_state(&self, user_name: &str) -> HistoryState {
        match self.load(user_name).await {
            Ok(records) => HistoryState::Loaded(records),
            Err(e) => {
                tracing::error!("history load failed: {}", e);
                HistoryState::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn seed_turn(store: &MemoryStore, user: &str, input: &str, ts: &str) {
        let doc = json!({
            "user_name": user,
            "user_input": input,
            "ai_response": format!("re: {input}"),
            "scenario": "General conversation",
            "timestamp": ts,
        });
        store.put_keyed(CONVERSATIONS, &format!("{user}-{ts}"), doc).unwrap();
    }

    #[tokio::test]
    async fn test_loads_own_records_newest_first() {
        let store = Arc::new(MemoryStore::new());
        seed_turn(&store, "alice", "first", "2024-06-01T08:00:00Z");
        seed_turn(&store, "bob", "other", "2024-06-02T08:00:00Z");
        seed_turn(&store, "alice", "second", "2024-06-03T08:00:00Z");

        let records = HistoryViewer::new(store).load("alice").await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].user_input, "second");
        assert_eq!(records[1].user_input, "first");
    }

    #[tokio::test]
    async fn test_empty_user_name_is_zero_records() {
        let store = Arc::new(MemoryStore::new());
        seed_turn(&store, "alice", "hello", "2024-06-01T08:00:00Z");

        let viewer = HistoryViewer::new(store);
        assert!(viewer.load("").await.unwrap().is_empty());

        let state = viewer.load_state("").await;
        assert!(state.is_empty());
    }

    #[tokio::test]
    async fn test_no_records_is_loaded_empty_not_failed() {
        let store = Arc::new(MemoryStore::new());
        let state = HistoryViewer::new(store).load_state("alice").await;

        assert_eq!(state, HistoryState::Loaded(Vec::new()));
        assert!(state.is_empty());
    }

    #[tokio::test]
    async fn test_undecodable_record_is_skipped() {
        let store = Arc::new(MemoryStore::new());
        seed_turn(&store, "alice", "ok", "2024-06-01T08:00:00Z");
        store
            .put(CONVERSATIONS, json!({"user_name": "alice", "garbage": true}))
            .await
            .unwrap();

        let records = HistoryViewer::new(store).load("alice").await.unwrap();
        assert_eq!(records.len(), 1);
    }
}
