//! Persona replies from a hosted language model
//!
//! Builds the persona prompt, windows the conversation and asks the
//! completion API for the next reply.

pub mod gemini;
pub mod prompt;

use crate::types::message::ChatMessage;
use crate::types::persona::PersonaConfig;
use gemini::{CompletionClient, CompletionRequest, Turn};
use prompt::{build_system_instruction, history_window};

/// Shown in place of a reply whenever the API call fails
pub const FALLBACK_REPLY: &str =
    "Sorry, I'm having a little trouble thinking right now. Please try again in a moment.";

/// Assemble the request for the next persona reply
pub fn build_request(
    history: &[ChatMessage],
    config: &PersonaConfig,
    window: usize,
) -> CompletionRequest {
    CompletionRequest {
        system_instruction: build_system_instruction(config),
        turns: history_window(history, window)
            .iter()
            .map(|msg| Turn {
                role: msg.sender.api_role(),
                text: msg.text.clone(),
            })
            .collect(),
    }
}

/// Ask the model for the persona's next reply
///
/// Never fails: errors are logged and replaced by [`FALLBACK_REPLY`].
pub async fn persona_reply(
    client: &dyn CompletionClient,
    history: &[ChatMessage],
    config: &PersonaConfig,
    window: usize,
) -> String {
    let request = build_request(history, config, window);

    match client.complete(&request).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Error fetching persona reply: {}", e);
            FALLBACK_REPLY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::gemini::LlmError;
    use crate::llm::prompt::HISTORY_WINDOW_SIZE;
    use crate::types::message::greeting;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Replays a canned result and records what it was asked
    struct ScriptedClient {
        reply: Option<String>,
        seen: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedClient {
        fn answering(text: &str) -> Self {
            Self {
                reply: Some(text.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CompletionClient for ScriptedClient {
        async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
            self.seen.lock().unwrap().push(request.clone());
            match &self.reply {
                Some(text) => Ok(text.clone()),
                None => Err(LlmError::Api {
                    status: 500,
                    message: "boom".to_string(),
                }),
            }
        }
    }

    fn persona() -> PersonaConfig {
        PersonaConfig::new("Jane", "Pastry chef in Porto.").unwrap()
    }

    #[test]
    fn test_request_roles_alternate() {
        let config = persona();
        let history = vec![
            greeting(&config),
            ChatMessage::user("What do you do?"),
            ChatMessage::persona("I bake!"),
            ChatMessage::user("Where?"),
        ];

        let request = build_request(&history, &config, HISTORY_WINDOW_SIZE);
        let roles: Vec<&str> = request.turns.iter().map(|t| t.role).collect();

        assert_eq!(roles, vec!["model", "user", "model", "user"]);
        assert_eq!(request.turns[3].text, "Where?");
        assert!(request.system_instruction.contains("Pastry chef in Porto."));
    }

    #[test]
    fn test_request_is_windowed() {
        let config = persona();
        let history: Vec<ChatMessage> = (0..30)
            .map(|i| ChatMessage::user(format!("question {i}")))
            .collect();

        let request = build_request(&history, &config, HISTORY_WINDOW_SIZE);
        assert_eq!(request.turns.len(), 10);
        assert_eq!(request.turns[0].text, "question 20");
        assert_eq!(request.turns[9].text, "question 29");
    }

    #[tokio::test]
    async fn test_reply_passthrough() {
        let client = ScriptedClient::answering("Porto, obviously 😄");
        let config = persona();
        let history = vec![greeting(&config), ChatMessage::user("Where?")];

        let reply = persona_reply(&client, &history, &config, HISTORY_WINDOW_SIZE).await;

        assert_eq!(reply, "Porto, obviously 😄");
        let seen = client.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].turns.len(), 2);
    }

    #[tokio::test]
    async fn test_reply_falls_back_on_error() {
        let client = ScriptedClient::failing();
        let config = persona();
        let history = vec![ChatMessage::user("Hi")];

        let reply = persona_reply(&client, &history, &config, HISTORY_WINDOW_SIZE).await;
        assert_eq!(reply, FALLBACK_REPLY);
    }
}
