//! Chat Session - the conversation log the host owns.
//!
//! The log is append-only. The responder never sees it: each turn hands over
//! the current utterance only.

use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, instrument};
use uuid::Uuid;

use super::message::{Message, Sender};
use super::responder::Responder;
use crate::error::AppError;

/// First bot message of every session.
pub const WELCOME_MESSAGE: &str =
    "Hello! I'm your Heart Health Assistant. How can I help you today?";

/// Bot message shown when the responder fails.
pub const APOLOGY_MESSAGE: &str =
    "I apologize, but I encountered an error processing your request. Please try again later.";

/// Notice printed under the input box.
pub const EMERGENCY_NOTICE: &str =
    "For medical emergencies, please call emergency services immediately.";

/// Offered until the first exchange is done.
pub const SUGGESTED_QUESTIONS: [&str; 5] = [
    "What are common heart disease symptoms?",
    "How can I lower my cholesterol?",
    "What lifestyle changes can reduce heart risks?",
    "Can you explain what blood pressure numbers mean?",
    "What foods are good for heart health?",
];

/// Suggestions disappear once the log grows past this many messages.
const SUGGESTION_CUTOFF: usize = 2;

/// One user's conversation with the assistant.
pub struct ChatSession {
    id: Uuid,
    responder: Arc<dyn Responder>,
    reply_delay: Duration,
    messages: Vec<Message>,
}

impl ChatSession {
    /// Starts a session holding only the welcome message.
    pub fn new(responder: Arc<dyn Responder>, reply_delay: Duration) -> Self {
        let id = Uuid::new_v4();
        info!(session_id = %id, "Chat session started");
        Self {
            id,
            responder,
            reply_delay,
            messages: vec![Message::bot(WELCOME_MESSAGE)],
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The log, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Suggested questions, or nothing once the conversation is under way.
    pub fn suggested_questions(&self) -> &'static [&'static str] {
        if self.messages.len() <= SUGGESTION_CUTOFF {
            &SUGGESTED_QUESTIONS
        } else {
            &[]
        }
    }

    pub fn emergency_notice(&self) -> &'static str {
        EMERGENCY_NOTICE
    }

    /// Sends one user message and records the bot reply.
    ///
    /// Blank input is ignored and returns `None`. Responder failures do not
    /// surface here: they are logged and the apology message is recorded
    /// instead.
    #[instrument(skip(self, content), fields(session_id = %self.id))]
    pub async fn send(&mut self, content: &str) -> Option<&Message> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }

        self.messages.push(Message::user(content));

        let reply = match self.responder.respond(content).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Error generating response: {}", e);
                APOLOGY_MESSAGE.to_string()
            }
        };

        // Cosmetic "thinking" pause; the reply is already decided.
        if !self.reply_delay.is_zero() {
            tokio::time::sleep(self.reply_delay).await;
        }

        self.messages.push(Message::bot(reply));
        self.messages.last()
    }

    /// Number of messages the user has sent.
    pub fn user_turns(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.sender == Sender::User)
            .count()
    }

    /// The log as a JSON array.
    pub fn transcript_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(&self.messages)?)
    }
}
