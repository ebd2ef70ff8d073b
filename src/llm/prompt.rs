//! Persona prompt construction and history windowing

use crate::types::message::ChatMessage;
use crate::types::persona::PersonaConfig;

/// Number of most recent messages sent to the model by default
pub const HISTORY_WINDOW_SIZE: usize = 10;

/// Build the system instruction that turns the model into the persona
pub fn build_system_instruction(config: &PersonaConfig) -> String {
    format!(
        r#"You ARE {name}. You are not an assistant, you are the person themselves.
Your personality should be friendly, casual, and authentic. Talk like you're chatting with a friend.
Keep your replies concise and conversational. Your replies should be brief, ideally one or two sentences, similar to a quick text response. Avoid long, formal paragraphs.
Feel free to use a relevant emoji here and there to add a bit of personality, but don't overdo it. 😉
Your knowledge and memories are based STRICTLY on the information provided below. Weave this information naturally into the conversation.
DO NOT make up information that isn't in the provided details.
The conversation should feel natural and flowing. You can ask a question back if it feels right in the moment, but don't force it in every reply. The goal is to chat, not to conduct an interview.
If you're asked something you don't know based on the provided info, respond naturally, like "Hmm, I don't think I have the answer to that" or "I'm not sure about that."

Here are your details:
---START OF INFORMATION---
{details}
---END OF INFORMATION---"#,
        name = config.name,
        details = config.details,
    )
}

/// The most recent `size` messages of `history`
pub fn history_window(history: &[ChatMessage], size: usize) -> &[ChatMessage] {
    &history[history.len().saturating_sub(size)..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(n: usize) -> Vec<ChatMessage> {
        (0..n)
            .map(|i| {
                if i % 2 == 0 {
                    ChatMessage::user(format!("msg {i}"))
                } else {
                    ChatMessage::persona(format!("msg {i}"))
                }
            })
            .collect()
    }

    #[test]
    fn test_instruction_contains_persona() {
        let config = PersonaConfig::new("Jane Doe", "Works at a bakery.\nHas two cats.").unwrap();
        let prompt = build_system_instruction(&config);

        assert!(prompt.starts_with("You ARE Jane Doe."));
        assert!(prompt.contains(
            "---START OF INFORMATION---\nWorks at a bakery.\nHas two cats.\n---END OF INFORMATION---"
        ));
        assert!(prompt.contains("DO NOT make up information"));
    }

    #[test]
    fn test_window_keeps_last_ten() {
        let history = transcript(25);
        let window = history_window(&history, HISTORY_WINDOW_SIZE);

        assert_eq!(window.len(), 10);
        assert_eq!(window[0].text, "msg 15");
        assert_eq!(window[9].text, "msg 24");
    }

    #[test]
    fn test_window_short_history_untouched() {
        let history = transcript(4);
        assert_eq!(history_window(&history, HISTORY_WINDOW_SIZE), &history[..]);

        let exact = transcript(10);
        assert_eq!(history_window(&exact, HISTORY_WINDOW_SIZE).len(), 10);
    }

    #[test]
    fn test_window_edge_sizes() {
        let history = transcript(3);
        assert!(history_window(&history, 0).is_empty());
        assert!(history_window(&[], HISTORY_WINDOW_SIZE).is_empty());
    }
}
