//! Completion service collaborator seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CompletionResult;

/// Who produced a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One role-tagged turn of the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Hosted generative-language endpoint: one request, one reply, no
/// streaming. May fail with a transport error or a response missing the
/// reply field.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Request a single reply for the full role-tagged transcript.
    async fn complete(&self, turns: &[Turn]) -> CompletionResult<String>;
}
