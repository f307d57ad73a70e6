//! Heart Assistant - classifier and response bank composed.
//!
//! `respond(utterance)` is `select_response(classify(utterance))`. The
//! assistant keeps no conversation state, so one instance can serve any
//! number of sessions.

use tracing::debug;

use super::entropy::EntropySource;
use super::intent::{Category, IntentClassifier, IntentResult};
use super::responses::ResponseBank;

/// Stateless keyword assistant.
pub struct HeartAssistant {
    classifier: IntentClassifier,
    bank: ResponseBank,
}

impl Default for HeartAssistant {
    fn default() -> Self {
        Self::new(ResponseBank::builtin())
    }
}

impl HeartAssistant {
    pub fn new(bank: ResponseBank) -> Self {
        Self {
            classifier: IntentClassifier::new(),
            bank,
        }
    }

    pub fn bank(&self) -> &ResponseBank {
        &self.bank
    }

    /// Category for an utterance. Deterministic.
    pub fn classify(&self, utterance: &str) -> Category {
        self.classifier.classify(utterance)
    }

    pub fn classify_detailed(&self, utterance: &str) -> IntentResult {
        self.classifier.classify_detailed(utterance)
    }

    /// One canned reply for the category.
    pub fn select_response(&self, category: Category, source: &mut dyn EntropySource) -> &str {
        self.bank.select(category, source)
    }

    /// One canned reply for a category label; unknown labels use `default`.
    pub fn select_response_for_label(&self, label: &str, source: &mut dyn EntropySource) -> &str {
        self.bank.select_for_label(label, source)
    }

    /// Classify, then pick a reply for the category.
    pub fn respond(&self, utterance: &str, source: &mut dyn EntropySource) -> String {
        let result = self.classify_detailed(utterance);
        debug!(
            category = %result.category,
            keyword = result.matched_keyword.as_deref().unwrap_or("-"),
            "Classified utterance"
        );
        self.select_response(result.category, source).to_string()
    }
}
