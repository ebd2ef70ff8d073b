//! Message display components

use crate::types::message::{ChatMessage, Sender};
use dioxus::prelude::*;

#[component]
fn PersonaAvatar() -> Element {
    rsx! {
        div {
            class: "avatar persona",
            svg {
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                rect { x: "3", y: "11", width: "18", height: "10", rx: "2" }
                circle { cx: "12", cy: "5", r: "2" }
                path { d: "M12 7v4" }
            }
        }
    }
}

#[component]
fn UserAvatar() -> Element {
    rsx! {
        div {
            class: "avatar user",
            svg {
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2" }
                circle { cx: "12", cy: "7", r: "4" }
            }
        }
    }
}

#[component]
pub fn MessageBubble(message: ChatMessage) -> Element {
    let is_user = message.sender == Sender::User;

    let row_class = if is_user { "message-row user" } else { "message-row persona" };
    let bubble_class = if is_user { "bubble-user" } else { "bubble-persona" };
    let sent_at = message.sent_at.with_timezone(&chrono::Local).format("%H:%M").to_string();

    rsx! {
        div { class: "{row_class}",
            if !is_user {
                PersonaAvatar {}
            }
            div { class: "{bubble_class}",
                p { class: "bubble-text", "{message.text}" }
                span { class: "bubble-time", "{sent_at}" }
            }
            if is_user {
                UserAvatar {}
            }
        }
    }
}

/// Three pulsing dots shown while the persona is "typing"
#[component]
pub fn TypingIndicator() -> Element {
    rsx! {
        div { class: "message-row persona",
            PersonaAvatar {}
            div { class: "bubble-persona",
                div { class: "typing-dots",
                    span { class: "dot" }
                    span { class: "dot" }
                    span { class: "dot" }
                }
            }
        }
    }
}
