//! # Chat Module
//!
//! Hosting layer around the assistant: the message log, the responder seam
//! and the simulated reply delay.

pub mod message;
pub mod responder;
pub mod session;

pub use message::{Message, Sender};
pub use responder::{KeywordResponder, Responder, TopicResponder};
pub use session::{
    ChatSession, APOLOGY_MESSAGE, EMERGENCY_NOTICE, SUGGESTED_QUESTIONS, WELCOME_MESSAGE,
};
