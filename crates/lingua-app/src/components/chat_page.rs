//! AI chat page: scenario picker, transcript, compose bar.

use std::sync::Arc;

use dioxus::prelude::*;
use lingua_core::{ChatSession, Role, Scenario, Transcriber};

use crate::state::{AppContext, Page};
use crate::theme::ThemeToggle;

/// Conversation practice against the hosted completion service.
#[component]
pub fn ChatPage() -> Element {
    let mut ctx = use_context::<AppContext>();
    let user_name = ctx.user_name.read().clone();

    let mut session = use_signal(ChatSession::default);
    let mut input = use_signal(String::new);

    let busy = session.read().is_busy();
    let active_scenario = session.read().scenario();
    let turns = session.read().turns().to_vec();

    let on_send = move |text: String| {
        // begin_send enforces single-flight and rejects blank input.
        let Some(context) = session.write().begin_send(&text) else {
            return;
        };
        let user_input = context
            .last()
            .map(|turn| turn.content.clone())
            .unwrap_or_default();
        let scenario = session.read().scenario();
        let user = ctx.user_name.read().clone();
        let services = ctx.services.read().clone();
        spawn(async move {
            let transcriber = Transcriber::new(
                Arc::clone(&services.completion),
                Arc::clone(&services.store),
            );
            let outcome = transcriber
                .resolve_turn(&user, scenario, &user_input, &context)
                .await;
            session.write().complete_send(outcome.reply_text());
        });
    };

    rsx! {
        div { class: "chat-container",
            div { class: "page-header",
                h2 { "AI conversation" }
                ThemeToggle {}
            }
            div { class: "page-welcome", "Welcome, {user_name}!" }

            div { class: "chat-scenarios",
                for scenario in Scenario::all() {
                    button {
                        key: "{scenario.label()}",
                        class: scenario_class(*scenario == active_scenario),
                        disabled: busy,
                        onclick: {
                            let scenario = *scenario;
                            move |_| {
                                session.write().switch_scenario(scenario);
                                input.set(String::new());
                            }
                        },
                        "{scenario.label()}"
                    }
                }
            }

            div { class: "chat-box",
                for (idx, turn) in turns.iter().enumerate() {
                    {
                        let (class, label) = match turn.role {
                            Role::User => ("chat-message user", format!("{}: ", user_name)),
                            Role::Assistant => ("chat-message assistant", "AI: ".to_string()),
                        };
                        rsx! {
                            div {
                                key: "{idx}",
                                class: "{class}",
                                span { class: "chat-message-label", "{label}" }
                                "{turn.content}"
                            }
                        }
                    }
                }
                if busy {
                    div { class: "chat-loading", "AI is replying..." }
                }
            }

            super::message_input::MessageInput {
                text: input,
                disabled: busy,
                on_send,
            }

            div { class: "page-footer",
                button { onclick: move |_| ctx.page.set(Page::Main), "Back" }
            }
        }
    }
}

fn scenario_class(selected: bool) -> &'static str {
    if selected {
        "scenario-button selected"
    } else {
        "scenario-button"
    }
}
