//! Resolves one chat turn against the completion service and persists it.

use std::sync::Arc;

use chrono::Utc;

use crate::completion::{CompletionService, Turn};
use crate::records::{ConversationRecord, CONVERSATIONS};
use crate::session::Scenario;
use crate::store::DocumentStore;

/// Assistant message shown when the completion call fails in any way.
pub const FALLBACK_REPLY: &str = "Sorry, the AI service ran into an error.";

/// Outcome of one resolved turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The service replied; the turn was persisted (or its persistence
    /// failure was logged and ignored).
    Replied(String),
    /// Transport or malformed-response failure; nothing was persisted.
    Fallback,
}

impl TurnOutcome {
    /// The assistant text to append to the transcript.
    pub fn reply_text(&self) -> &str {
        match self {
            TurnOutcome::Replied(text) => text,
            TurnOutcome::Fallback => FALLBACK_REPLY,
        }
    }
}

/// Drives completion calls and transcript persistence for chat turns.
pub struct Transcriber<C, S> {
    completion: Arc<C>,
    store: Arc<S>,
}

impl<C, S> Transcriber<C, S>
where
    C: CompletionService,
    S: DocumentStore,
{
    pub fn new(completion: Arc<C>, store: Arc<S>) -> Self {
        Self { completion, store }
    }

    /// Resolve one turn: ask the service for a reply to `context` (the full
    /// transcript including the just-appended user turn) and persist the
    /// exchange.
    ///
    /// Any completion failure yields `Fallback` and skips persistence. A
    /// persistence failure after a successful reply is logged and ignored;
    /// the reply still reaches the user.
    pub async fn resolve_turn(
        &self,
        user_name: &str,
        scenario: Scenario,
        user_input: &str,
        context: &[Turn],
    ) -> TurnOutcome {
        let reply = match self.completion.complete(context).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("completion request failed: {}", e);
                return TurnOutcome::Fallback;
            }
        };

        let record = ConversationRecord {
            user_name: user_name.to_string(),
            user_input: user_input.to_string(),
            ai_response: reply.clone(),
            scenario: scenario.label().to_string(),
            timestamp: Utc::now(),
        };
        match serde_json::to_value(&record) {
            Ok(doc) => {
                if let Err(e) = self.store.put(CONVERSATIONS, doc).await {
                    tracing::warn!("failed to persist conversation record: {}", e);
                }
            }
            Err(e) => {
                tracing::warn!("failed to encode conversation record: {}", e);
            }
        }

        TurnOutcome::Replied(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CompletionError, CompletionResult};
    use crate::session::ChatSession;
    use crate::store::MemoryStore;
    use async_trait::async_trait;

    struct CannedCompletion {
        result: CompletionResult<String>,
    }

    impl CannedCompletion {
        fn replying(text: &str) -> Self {
            Self {
                result: Ok(text.to_string()),
            }
        }

        fn failing(err: CompletionError) -> Self {
            Self { result: Err(err) }
        }
    }

    #[async_trait]
    impl CompletionService for CannedCompletion {
        async fn complete(&self, _turns: &[Turn]) -> CompletionResult<String> {
            self.result.clone()
        }
    }

    async fn persisted_count(store: &MemoryStore) -> usize {
        store.list(CONVERSATIONS).await.unwrap().len()
    }

    #[tokio::test]
    async fn test_successful_turn_replies_and_persists_once() {
        let store = Arc::new(MemoryStore::new());
        let completion = Arc::new(CannedCompletion::replying("Nice to meet you!"));
        let transcriber = Transcriber::new(completion, Arc::clone(&store));

        let mut session = ChatSession::new(Scenario::General);
        let context = session.begin_send("Hello!").unwrap();
        let outcome = transcriber
            .resolve_turn("alice", session.scenario(), "Hello!", &context)
            .await;
        session.complete_send(outcome.reply_text());

        assert_eq!(outcome, TurnOutcome::Replied("Nice to meet you!".into()));
        assert_eq!(session.turns().last().unwrap().content, "Nice to meet you!");
        assert_eq!(persisted_count(&store).await, 1);

        let (_, doc) = store.list(CONVERSATIONS).await.unwrap().remove(0);
        assert_eq!(doc["user_name"], "alice");
        assert_eq!(doc["user_input"], "Hello!");
        assert_eq!(doc["ai_response"], "Nice to meet you!");
        assert_eq!(doc["scenario"], Scenario::General.label());
        assert!(doc["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_transport_failure_yields_fallback_and_skips_persistence() {
        let store = Arc::new(MemoryStore::new());
        let completion = Arc::new(CannedCompletion::failing(CompletionError::Transport(
            "connection refused".into(),
        )));
        let transcriber = Transcriber::new(completion, Arc::clone(&store));

        let mut session = ChatSession::new(Scenario::General);
        let context = session.begin_send("Hello!").unwrap();
        let outcome = transcriber
            .resolve_turn("alice", session.scenario(), "Hello!", &context)
            .await;
        session.complete_send(outcome.reply_text());

        assert_eq!(outcome, TurnOutcome::Fallback);
        assert_eq!(session.turns().last().unwrap().content, FALLBACK_REPLY);
        assert_eq!(persisted_count(&store).await, 0);
    }

    #[tokio::test]
    async fn test_missing_reply_field_treated_like_transport_failure() {
        let store = Arc::new(MemoryStore::new());
        let completion = Arc::new(CannedCompletion::failing(CompletionError::MissingReply));
        let transcriber = Transcriber::new(completion, Arc::clone(&store));

        let session = ChatSession::new(Scenario::Hospital);
        let outcome = transcriber
            .resolve_turn("alice", session.scenario(), "ouch", session.turns())
            .await;

        assert_eq!(outcome, TurnOutcome::Fallback);
        assert_eq!(persisted_count(&store).await, 0);
    }

    #[tokio::test]
    async fn test_persistence_failure_does_not_eat_the_reply() {
        // A store that always fails its puts.
        struct BrokenStore;

        #[async_trait]
        impl DocumentStore for BrokenStore {
            async fn get(
                &self,
                _collection: &str,
                _key: &str,
            ) -> crate::error::StoreResult<Option<crate::store::Document>> {
                Ok(None)
            }

            async fn put(
                &self,
                _collection: &str,
                _doc: crate::store::Document,
            ) -> crate::error::StoreResult<String> {
                Err(crate::error::StoreError::Backend("write refused".into()))
            }

            async fn list(
                &self,
                _collection: &str,
            ) -> crate::error::StoreResult<Vec<(String, crate::store::Document)>> {
                Ok(Vec::new())
            }

            async fn query(
                &self,
                _collection: &str,
                _filter: crate::store::FieldFilter,
                _order: crate::store::OrderBy,
            ) -> crate::error::StoreResult<Vec<crate::store::Document>> {
                Ok(Vec::new())
            }
        }

        let completion = Arc::new(CannedCompletion::replying("still here"));
        let transcriber = Transcriber::new(completion, Arc::new(BrokenStore));

        let session = ChatSession::new(Scenario::General);
        let outcome = transcriber
            .resolve_turn("alice", session.scenario(), "hi", session.turns())
            .await;

        assert_eq!(outcome, TurnOutcome::Replied("still here".into()));
    }
}
