//! Message compose bar with send button.

use dioxus::prelude::*;

/// Compose bar. The text signal is owned by the parent so a scenario switch
/// can discard in-progress input.
#[component]
pub fn MessageInput(
    mut text: Signal<String>,
    disabled: bool,
    on_send: EventHandler<String>,
) -> Element {
    let can_send = !disabled && !text.read().trim().is_empty();

    rsx! {
        div { class: "message-input-bar",
            textarea {
                class: "message-input",
                placeholder: "Type your message...",
                value: "{text}",
                disabled,
                oninput: move |evt| {
                    text.set(evt.value());
                },
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter && !evt.modifiers().shift() && can_send {
                        evt.prevent_default();
                        let msg = text.read().trim().to_string();
                        text.set(String::new());
                        on_send.call(msg);
                    }
                },
            }
            button {
                class: "send-button",
                disabled: !can_send,
                onclick: move |_| {
                    if can_send {
                        let msg = text.read().trim().to_string();
                        text.set(String::new());
                        on_send.call(msg);
                    }
                },
                "Send"
            }
        }
    }
}
