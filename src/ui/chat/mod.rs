//! Chat interface components
//!
//! Contains the chat view with its header, message list and input.

pub mod input;
pub mod message;

use dioxus::prelude::*;
use input::ChatInput;
use message::{MessageBubble, TypingIndicator};
use rand::Rng;
use std::time::Duration;

use crate::app::AppState;
use crate::llm::persona_reply;
use crate::storage::settings::AppSettings;
use crate::types::message::{greeting, ChatMessage};
use crate::types::persona::PersonaConfig;

const SCROLL_TO_BOTTOM: &str = r#"
const list = document.getElementById("message-list");
if (list) { list.scrollTop = list.scrollHeight; }
"#;

/// Append the user's message unless it is blank.
///
/// Returns whether a message was added.
pub fn push_user_message(messages: &mut Vec<ChatMessage>, input: &str) -> bool {
    if input.trim().is_empty() {
        return false;
    }
    messages.push(ChatMessage::user(input));
    true
}

/// Random pause before the persona answers, within the configured bounds
pub fn reply_delay(settings: &AppSettings) -> Duration {
    let min = settings.reply_delay_min_ms;
    let max = settings.reply_delay_max_ms.max(min);
    Duration::from_millis(rand::thread_rng().gen_range(min..=max))
}

#[component]
pub fn ChatView(config: PersonaConfig) -> Element {
    let mut app_state = use_context::<AppState>();

    let mut messages = use_signal(|| vec![greeting(&config)]);
    let mut is_typing = use_signal(|| false);

    // Keep the newest message in view
    use_effect(move || {
        let _ = messages.read().len();
        let _ = is_typing();
        let _ = document::eval(SCROLL_TO_BOTTOM);
    });

    let handle_send = {
        let app_state = app_state.clone();
        let config = config.clone();
        move |text: String| {
            if is_typing() {
                return;
            }
            if !push_user_message(&mut messages.write(), &text) {
                return;
            }
            is_typing.set(true);

            let client = app_state.client.clone();
            let config = config.clone();
            let (delay, window) = {
                let settings = app_state.settings.read();
                (reply_delay(&settings), settings.history_window)
            };

            spawn(async move {
                tokio::time::sleep(delay).await;

                let history = messages.read().clone();
                let reply = persona_reply(client.as_ref(), &history, &config, window).await;

                is_typing.set(false);
                messages.write().push(ChatMessage::persona(reply));
            });
        }
    };

    rsx! {
        div { class: "chat-view",
            // Header
            header { class: "chat-header",
                h1 { class: "chat-title", "{config.name}'s Bot" }
                button {
                    onclick: move |_| app_state.edit_persona(),
                    class: "edit-button",
                    "Edit Bot"
                }
            }

            // Message list
            main {
                id: "message-list",
                class: "message-list",
                for msg in messages.read().iter() {
                    MessageBubble { key: "{msg.id}", message: msg.clone() }
                }
                if is_typing() {
                    TypingIndicator {}
                }
            }

            ChatInput {
                on_send: handle_send,
                is_typing: is_typing(),
            }
        }
    }
}
