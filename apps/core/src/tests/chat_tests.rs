//! Chat Module Tests
//!
//! Session behaviour against the keyword responder and mock responders.

use crate::brain::{Category, HeartAssistant, IntentClassifier, ScriptedSource, Topic};
use crate::chat::{
    ChatSession, KeywordResponder, Message, Responder, Sender, TopicResponder, APOLOGY_MESSAGE,
    SUGGESTED_QUESTIONS, WELCOME_MESSAGE,
};
use crate::error::AppError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

// --- Mock Components ---

struct FailingResponder;

#[async_trait]
impl Responder for FailingResponder {
    async fn respond(&self, _utterance: &str) -> Result<String, AppError> {
        Err(AppError::Internal("backend unavailable".to_string()))
    }
}

/// Echoes the utterance and counts calls.
#[derive(Default)]
struct EchoResponder {
    calls: AtomicUsize,
}

#[async_trait]
impl Responder for EchoResponder {
    async fn respond(&self, utterance: &str) -> Result<String, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("echo: {}", utterance))
    }
}

fn keyword_session(script: Vec<usize>) -> ChatSession {
    let responder = KeywordResponder::new(
        HeartAssistant::default(),
        Box::new(ScriptedSource::new(script)),
    );
    ChatSession::new(Arc::new(responder), Duration::ZERO)
}

#[cfg(test)]
mod session_tests {
    use super::*;

    #[tokio::test]
    async fn test_exchange_appends_user_then_bot() {
        let mut session = keyword_session(vec![0]);

        let reply = session
            .send("What are common heart disease symptoms?")
            .await
            .cloned()
            .expect("reply expected");

        let assistant = HeartAssistant::default();
        assert_eq!(
            reply.content,
            assistant.bank().candidates(Category::Symptoms)[0]
        );

        let senders: Vec<Sender> = session.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::Bot, Sender::User, Sender::Bot]);
        assert_eq!(session.messages()[0].content, WELCOME_MESSAGE);
    }

    #[tokio::test]
    async fn test_log_is_append_only() {
        let mut session = keyword_session(vec![1, 2]);

        session.send("hi").await;
        let snapshot: Vec<Message> = session.messages().to_vec();
        session.send("book a doctor").await;

        assert_eq!(session.messages().len(), snapshot.len() + 2);
        for (before, after) in snapshot.iter().zip(session.messages()) {
            assert_eq!(before.id, after.id);
            assert_eq!(before.content, after.content);
        }
    }

    #[tokio::test]
    async fn test_failure_becomes_apology() {
        let mut session = ChatSession::new(Arc::new(FailingResponder), Duration::ZERO);

        let reply = session.send("hello").await.cloned().expect("apology expected");

        assert_eq!(reply.content, APOLOGY_MESSAGE);
        assert_eq!(reply.sender, Sender::Bot);
        assert_eq!(session.messages().len(), 3);
    }

    #[tokio::test]
    async fn test_blank_input_never_reaches_responder() {
        let responder = Arc::new(EchoResponder::default());
        let mut session = ChatSession::new(responder.clone(), Duration::ZERO);

        assert!(session.send("").await.is_none());
        assert!(session.send(" \t\n").await.is_none());
        assert_eq!(responder.calls.load(Ordering::SeqCst), 0);

        session.send("  chest pain  ").await;
        assert_eq!(responder.calls.load(Ordering::SeqCst), 1);
        assert_eq!(session.messages()[2].content, "echo: chest pain");
    }

    #[tokio::test]
    async fn test_suggestions_hidden_after_first_exchange() {
        let mut session = keyword_session(vec![0]);
        assert_eq!(session.suggested_questions(), &SUGGESTED_QUESTIONS);

        session.send(SUGGESTED_QUESTIONS[1]).await;
        assert!(session.suggested_questions().is_empty());
    }

    #[tokio::test]
    async fn test_reply_delay_is_applied() {
        let responder = Arc::new(EchoResponder::default());
        let mut session = ChatSession::new(responder, Duration::from_millis(30));

        let start = Instant::now();
        session.send("risk").await;
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_delay_does_not_change_category() {
        let assistant = HeartAssistant::default();
        let responder = KeywordResponder::new(
            HeartAssistant::default(),
            Box::new(ScriptedSource::new(vec![0])),
        );
        let mut session = ChatSession::new(Arc::new(responder), Duration::from_millis(5));

        let reply = session.send("check my risk").await.cloned().unwrap();
        assert_eq!(
            reply.content,
            assistant.bank().candidates(Category::Predictor)[0]
        );
    }

    #[tokio::test]
    async fn test_transcript_json() {
        let mut session = keyword_session(vec![0]);
        session.send("hello").await;

        let json = session.transcript_json().unwrap();
        let parsed: Vec<Message> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[1].content, "hello");
        assert_eq!(parsed[1].sender, Sender::User);
    }

    #[tokio::test]
    async fn test_sessions_share_one_responder() {
        let responder: Arc<dyn Responder> = Arc::new(KeywordResponder::new(
            HeartAssistant::default(),
            Box::new(ScriptedSource::new(vec![0])),
        ));

        let mut handles = Vec::new();
        for i in 0..4 {
            let responder = responder.clone();
            handles.push(tokio::spawn(async move {
                let mut session = ChatSession::new(responder, Duration::ZERO);
                session.send(&format!("question {} about diet", i)).await;
                session.messages().len()
            }));
        }

        for handle in handles {
            assert_eq!(handle.await.unwrap(), 3);
        }
    }
}

#[cfg(test)]
mod topic_responder_tests {
    use super::*;

    #[tokio::test]
    async fn test_topic_order_differs_from_categories() {
        let classifier = IntentClassifier::new();
        let responder = TopicResponder;

        // (utterance, category rule, topic answer)
        let cases = [
            ("How can I lower my cholesterol?", Category::Default, Topic::Cholesterol),
            ("chest symptom", Category::Symptoms, Topic::Symptoms),
            ("What foods lower cholesterol?", Category::Prevention, Topic::Cholesterol),
            ("Does exercise lower my risk?", Category::Prevention, Topic::RiskFactors),
            ("Can you explain what blood pressure numbers mean?", Category::Default, Topic::BloodPressure),
            ("hello there", Category::Greeting, Topic::General),
        ];

        for (utterance, category, topic) in cases {
            assert_eq!(classifier.classify(utterance), category, "{utterance}");
            let reply = responder.respond(utterance).await.unwrap();
            assert_eq!(reply, topic.answer(), "{utterance}");
        }
    }

    #[tokio::test]
    async fn test_topic_session_answers_suggestions() {
        let mut session = ChatSession::new(Arc::new(TopicResponder), Duration::ZERO);

        let reply = session
            .send(SUGGESTED_QUESTIONS[1])
            .await
            .cloned()
            .unwrap();
        assert_eq!(reply.sender, Sender::Bot);
        assert_ne!(reply.content, Topic::General.answer());
    }
}
