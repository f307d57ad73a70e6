//! # Brain Module
//!
//! Keyword intent classification and canned response selection for the
//! heart health assistant.
//!
//! ## Components
//! - `intent`: Ordered regex rules mapping an utterance to a `Category`
//! - `responses`: `ResponseBank` of candidate replies per category
//! - `entropy`: Injected random source used for reply selection
//! - `assistant`: `HeartAssistant`, the classifier and bank composed
//! - `topics`: Deterministic long-form answers chosen by substring

pub mod assistant;
pub mod entropy;
pub mod intent;
pub mod responses;
pub mod topics;

pub use assistant::HeartAssistant;
pub use entropy::{EntropySource, RandomSource, ScriptedSource};
pub use intent::{Category, IntentClassifier, IntentResult};
pub use responses::ResponseBank;
pub use topics::Topic;
