//! Domain logic for the LinguaLearn companion.
//!
//! Collaborator seams (`DocumentStore`, `CompletionService`) are traits; the
//! UI crate wires concrete implementations. Everything reproducible lives
//! here: the 21-day challenge window, the challenge aggregator, the chat
//! session state machine, the transcriber, and the history viewer.

pub mod calendar;
pub mod challenge;
pub mod completion;
pub mod error;
pub mod history;
pub mod records;
pub mod session;
pub mod store;
pub mod transcriber;

pub use calendar::{CalendarDay, CalendarWindow, WINDOW_DAYS};
pub use challenge::{ChallengeAggregator, ChallengeSummary};
pub use completion::{CompletionService, Role, Turn};
pub use error::{CompletionError, CompletionResult, StoreError, StoreResult};
pub use history::{HistoryState, HistoryViewer};
pub use records::{ChallengeRecord, ConversationRecord, FriendsRecord};
pub use session::{ChatSession, Scenario};
pub use store::{Direction, Document, DocumentStore, FieldFilter, JsonFileStore, MemoryStore, OrderBy};
pub use transcriber::{Transcriber, TurnOutcome, FALLBACK_REPLY};
