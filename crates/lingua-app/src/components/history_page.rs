//! Conversation history page, newest first.

use std::sync::Arc;

use chrono::Local;
use dioxus::prelude::*;
use lingua_core::{ConversationRecord, HistoryState, HistoryViewer};

use crate::state::{AppContext, Page};
use crate::theme::ThemeToggle;

/// Persisted transcripts for the signed-in user.
#[component]
pub fn HistoryPage() -> Element {
    let mut ctx = use_context::<AppContext>();
    let user_name = ctx.user_name.read().clone();

    let mut state = use_signal(|| HistoryState::Loading);

    use_effect(move || {
        let user = ctx.user_name.read().clone();
        let store = Arc::clone(&ctx.services.read().store);
        spawn(async move {
            let loaded = HistoryViewer::new(store).load_state(&user).await;
            state.set(loaded);
        });
    });

    let current = state.read().clone();

    // "No records" is its own state, distinct from loading and from failure.
    let content = match current {
        HistoryState::Loading => rsx! {
            div { class: "history-loading", "Loading..." }
        },
        HistoryState::Failed(err) => rsx! {
            div { class: "history-failed", "Load failed: {err}" }
        },
        HistoryState::Loaded(records) => {
            if records.is_empty() {
                rsx! {
                    p { class: "history-empty", "No conversations yet." }
                }
            } else {
                rsx! {
                    div { class: "history-list",
                        for (idx, record) in records.iter().enumerate() {
                            HistoryCard { key: "{idx}", record: record.clone() }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "history-container",
            div { class: "page-header",
                h2 { "Conversation history" }
                ThemeToggle {}
            }
            div { class: "page-welcome", "Welcome, {user_name}!" }

            {content}

            div { class: "page-footer",
                button { onclick: move |_| ctx.page.set(Page::Main), "Back" }
            }
        }
    }
}

/// One persisted exchange.
#[component]
fn HistoryCard(record: ConversationRecord) -> Element {
    let local_time = record
        .timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string();

    rsx! {
        div { class: "history-record",
            div { class: "history-record-info",
                span { class: "history-scenario", "{record.scenario}" }
                span { class: "history-time", "{local_time}" }
            }
            div { class: "history-question",
                span { class: "history-label", "You: " }
                "{record.user_input}"
            }
            div { class: "history-answer",
                span { class: "history-label", "AI: " }
                "{record.ai_response}"
            }
        }
    }
}
