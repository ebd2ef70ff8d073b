//! Message types
//!
//! Defines chat message structures and sender tags.

use crate::types::persona::PersonaConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who sent a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person chatting with the twin
    User,
    /// The digital twin
    Persona,
}

impl Sender {
    /// Role name expected by the completion API
    pub fn api_role(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Persona => "model",
        }
    }
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            sent_at: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn persona(text: impl Into<String>) -> Self {
        Self::new(Sender::Persona, text)
    }
}

/// Opening line the persona shows when a chat starts
pub fn greeting(config: &PersonaConfig) -> ChatMessage {
    ChatMessage::persona(format!(
        "Hello! I'm {}'s personal AI assistant. Feel free to ask me anything about them.",
        config.name
    ))
}
