use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Represents a single message within a chat session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The unique identifier for the message.
    pub id: Uuid,
    /// The text content of the message.
    pub content: String,
    /// The author of the message.
    pub sender: Sender,
    /// When the session recorded the message.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    fn new(content: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, Sender::User)
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self::new(content, Sender::Bot)
    }

    /// `HH:MM` in local time, as shown under each bubble.
    pub fn display_time(&self) -> String {
        self.timestamp
            .with_timezone(&chrono::Local)
            .format("%H:%M")
            .to_string()
    }
}
