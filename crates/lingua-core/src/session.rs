//! Chat scenarios and the transcript state machine.

use crate::completion::Turn;

/// Conversational context with a canned opening line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scenario {
    #[default]
    General,
    Airport,
    Restaurant,
    Hospital,
}

impl Scenario {
    /// Display label, also stored on persisted conversation records.
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::General => "General conversation",
            Scenario::Airport => "At the airport",
            Scenario::Restaurant => "Ordering at a restaurant",
            Scenario::Hospital => "Seeing a doctor",
        }
    }

    /// Assistant line that seeds a fresh transcript.
    pub fn opening_prompt(&self) -> &'static str {
        match self {
            Scenario::General => "Hi! What do you want to talk to me about today?",
            Scenario::Airport => {
                "You are at the airport. Let's practice a conversation: \
                 \"Hello, I would like to check in for my flight to London.\""
            }
            Scenario::Restaurant => {
                "You are at a restaurant. Let's practice: \
                 \"Hi, I would like to order a steak and a salad, please.\""
            }
            Scenario::Hospital => {
                "You are visiting a doctor. Let's practice: \
                 \"Doctor, I have a headache and a sore throat.\""
            }
        }
    }

    /// All scenarios, in display order.
    pub fn all() -> &'static [Scenario] {
        &[
            Scenario::General,
            Scenario::Airport,
            Scenario::Restaurant,
            Scenario::Hospital,
        ]
    }
}

/// Ordered transcript for the active chat, with single-flight send state.
///
/// `begin_send` / `complete_send` bracket one round trip to the completion
/// service: while a send is outstanding further sends are no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSession {
    scenario: Scenario,
    turns: Vec<Turn>,
    busy: bool,
}

impl ChatSession {
    /// Start a session seeded with the scenario's opening line.
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            turns: vec![Turn::assistant(scenario.opening_prompt())],
            busy: false,
        }
    }

    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// True while a completion request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Reset the transcript to `scenario`'s single opening line, discarding
    /// prior turns.
    pub fn switch_scenario(&mut self, scenario: Scenario) {
        *self = Self::new(scenario);
    }

    /// Append the user's turn and mark the session busy, returning the full
    /// transcript to send as completion context. Empty or whitespace-only
    /// input, or an already-outstanding send, is a no-op returning `None`.
    pub fn begin_send(&mut self, text: &str) -> Option<Vec<Turn>> {
        let text = text.trim();
        if text.is_empty() || self.busy {
            return None;
        }
        self.turns.push(Turn::user(text));
        self.busy = true;
        Some(self.turns.clone())
    }

    /// Append the assistant's reply and clear the busy flag.
    pub fn complete_send(&mut self, reply: impl Into<String>) {
        self.turns.push(Turn::assistant(reply));
        self.busy = false;
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(Scenario::default())
    }
}
