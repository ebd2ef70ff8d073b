//! Chat input component with the send button inside the box

use dioxus::prelude::*;

/// Estimate how many rows the textarea needs based on content
fn compute_rows(text: &str) -> usize {
    let newlines = text.chars().filter(|&c| c == '\n').count();
    // Each visual line ~ 70 chars for our input width
    let wrap_lines: usize = text
        .lines()
        .map(|line| {
            if line.is_empty() {
                0
            } else {
                (line.chars().count().saturating_sub(1)) / 70
            }
        })
        .sum();
    let total = newlines + wrap_lines + 1;
    total.clamp(1, 6)
}

#[component]
pub fn ChatInput(on_send: EventHandler<String>, is_typing: bool) -> Element {
    let mut text = use_signal(String::new);

    let handle_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter && !evt.modifiers().contains(Modifiers::SHIFT) {
            evt.prevent_default();
            if !is_typing && !text().trim().is_empty() {
                on_send.call(text());
                text.set(String::new());
            }
        }
    };

    let can_send = !is_typing && !text().trim().is_empty();
    let rows = compute_rows(&text());
    let rows_str = rows.to_string();

    rsx! {
        footer { class: "chat-footer",
            div { class: "input-box",
                textarea {
                    class: "input-textarea",
                    placeholder: "Ask a question...",
                    value: "{text}",
                    oninput: move |evt| text.set(evt.value()),
                    onkeydown: handle_keydown,
                    rows: "{rows_str}",
                }

                button {
                    onclick: move |_| {
                        if can_send {
                            on_send.call(text());
                            text.set(String::new());
                        }
                    },
                    disabled: !can_send,
                    class: "send-button",
                    title: "Send (Enter)",
                    svg {
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        line { x1: "22", y1: "2", x2: "11", y2: "13" }
                        polygon { points: "22 2 15 22 11 13 2 9 22 2" }
                    }
                }
            }

            p { class: "input-hint",
                "Enter to send, Shift+Enter for a new line"
            }
        }
    }
}
