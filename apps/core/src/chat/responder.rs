use async_trait::async_trait;
use std::sync::Mutex;
use tracing::debug;

use crate::brain::{EntropySource, HeartAssistant, Topic};
use crate::error::AppError;

/// Defines the interface that turns one utterance into one reply.
///
/// The chat session only talks to this trait, so the keyword assistant can be
/// swapped for a language model backend without touching the session.
#[async_trait]
pub trait Responder: Send + Sync + 'static {
    /// Produces the reply text for a single user utterance.
    async fn respond(&self, utterance: &str) -> Result<String, AppError>;
}

/// Responder backed by the keyword assistant and an owned entropy source.
pub struct KeywordResponder {
    assistant: HeartAssistant,
    source: Mutex<Box<dyn EntropySource>>,
}

impl KeywordResponder {
    pub fn new(assistant: HeartAssistant, source: Box<dyn EntropySource>) -> Self {
        Self {
            assistant,
            source: Mutex::new(source),
        }
    }

    pub fn assistant(&self) -> &HeartAssistant {
        &self.assistant
    }
}

#[async_trait]
impl Responder for KeywordResponder {
    async fn respond(&self, utterance: &str) -> Result<String, AppError> {
        let mut source = self
            .source
            .lock()
            .map_err(|e| AppError::Internal(format!("entropy source lock poisoned: {}", e)))?;
        Ok(self.assistant.respond(utterance, &mut **source))
    }
}

/// Responder giving one fixed long-form answer per detected [`Topic`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TopicResponder;

#[async_trait]
impl Responder for TopicResponder {
    async fn respond(&self, utterance: &str) -> Result<String, AppError> {
        let topic = Topic::detect(utterance);
        debug!(%topic, "Answering by topic");
        Ok(topic.answer().to_string())
    }
}
