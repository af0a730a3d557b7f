//! Typed documents stored by the companion.
//!
//! Field names match the documents the daily-challenge and login features
//! already write, so the collections are shared without migration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-user completion marker for one challenge day.
///
/// Keyed by user name under `DailyChallenge/{date}/users`. Written by the
/// daily-challenge feature; read-only here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChallengeRecord {
    #[serde(default)]
    pub completed: bool,
}

/// A user's friend list, keyed by user name in the `Friends` collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FriendsRecord {
    #[serde(default)]
    pub friends: Vec<String>,
}

/// One persisted chat turn: the user's input and the assistant's reply.
///
/// Created exactly once per successful turn; never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub user_name: String,
    pub user_input: String,
    pub ai_response: String,
    /// Display label of the scenario active when the turn was sent.
    pub scenario: String,
    pub timestamp: DateTime<Utc>,
}

/// Collection holding persisted chat turns.
pub const CONVERSATIONS: &str = "Conversations";

/// Collection holding friend lists.
pub const FRIENDS: &str = "Friends";

/// Collection path for the per-user completion records of one day.
pub fn challenge_users_path(date: chrono::NaiveDate) -> String {
    format!("DailyChallenge/{}/users", date.format("%Y-%m-%d"))
}
