//! Response Bank - canned replies per category.
//!
//! Every category must carry at least one non-blank reply. This is checked
//! when a bank is built, so selection itself never fails.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::entropy::EntropySource;
use super::intent::Category;
use crate::error::AppError;

const GREETING_RESPONSES: &[&str] = &[
    "Hello! How can I help you with your heart health today?",
    "Hi there! I'm your Heart Health Assistant. What questions do you have about heart health?",
    "Welcome! I'm here to answer your heart health questions. What would you like to know?",
];

const SYMPTOMS_RESPONSES: &[&str] = &[
    "Common heart disease symptoms include chest pain, shortness of breath, fatigue, and irregular heartbeat. If you're experiencing these symptoms, please consult a doctor promptly.",
    "Heart attack symptoms may include chest pressure, pain in the arm/jaw/back, shortness of breath, cold sweat, and nausea. If you suspect a heart attack, call emergency services immediately.",
    "Symptoms requiring immediate attention include severe chest pain, difficulty breathing, fainting, and intense palpitations. Please seek emergency medical help for these symptoms.",
];

const PREVENTION_RESPONSES: &[&str] = &[
    "To maintain heart health: exercise regularly, eat a balanced diet low in saturated fats, don't smoke, limit alcohol, manage stress, and get regular checkups.",
    "Diet tips for heart health: eat plenty of fruits, vegetables, whole grains, lean proteins, and healthy fats like those found in olive oil and avocados.",
    "Aim for at least 150 minutes of moderate exercise per week for heart health. Activities like walking, swimming, and cycling are excellent options.",
];

const APPOINTMENT_RESPONSES: &[&str] = &[
    "You can book an appointment with a cardiologist through our Appointments page. Would you like me to direct you there?",
    "Our platform connects you with qualified heart specialists. Check the Appointments section to schedule a consultation.",
    "For a personalized assessment, I recommend scheduling an appointment with one of our heart specialists.",
];

const PREDICTOR_RESPONSES: &[&str] = &[
    "Our Heart Disease Predictor tool uses AI to assess your risk based on various health factors. Would you like to try it?",
    "The Heart Disease Predictor analyzes factors like blood pressure, cholesterol, age, and lifestyle to estimate risk.",
    "For a preliminary heart disease risk assessment, you can use our Predictor tool. It's quick and confidential.",
];

const DEFAULT_RESPONSES: &[&str] = &[
    "I'm not sure I understand. Could you rephrase your question about heart health?",
    "I don't have information on that specific topic. Would you like to know about heart disease symptoms, prevention, or our services instead?",
    "I'm specialized in heart health information. If you have questions about symptoms, prevention, or our services, I'd be happy to help.",
];

/// Read-only mapping from category to candidate replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HashMap<String, Vec<String>>", into = "HashMap<String, Vec<String>>")]
pub struct ResponseBank {
    /// Indexed by `Category::index()`
    entries: [Vec<String>; 6],
}

impl Default for ResponseBank {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ResponseBank {
    /// The assistant's stock replies.
    pub fn builtin() -> Self {
        let own = |texts: &[&str]| texts.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            entries: [
                own(GREETING_RESPONSES),
                own(SYMPTOMS_RESPONSES),
                own(PREVENTION_RESPONSES),
                own(APPOINTMENT_RESPONSES),
                own(PREDICTOR_RESPONSES),
                own(DEFAULT_RESPONSES),
            ],
        }
    }

    /// Build a bank from explicit entries, checking completeness.
    pub fn from_entries(mut entries: HashMap<Category, Vec<String>>) -> Result<Self, AppError> {
        let mut bank: [Vec<String>; 6] = Default::default();

        for category in Category::ALL {
            let replies = entries.remove(&category).unwrap_or_default();
            if replies.is_empty() {
                return Err(AppError::Config(format!(
                    "response bank has no replies for category '{}'",
                    category
                )));
            }
            if replies.iter().any(|reply| reply.trim().is_empty()) {
                return Err(AppError::Config(format!(
                    "response bank has a blank reply for category '{}'",
                    category
                )));
            }
            bank[category.index()] = replies;
        }

        Ok(Self { entries: bank })
    }

    /// Parse a JSON object keyed by category label.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Load a JSON bank file.
    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let json = fs::read_to_string(path)?;
        let bank = Self::from_json_str(&json)?;
        info!(path = %path.display(), replies = bank.len(), "Loaded response bank");
        Ok(bank)
    }

    /// Candidate replies for a category.
    pub fn candidates(&self, category: Category) -> &[String] {
        &self.entries[category.index()]
    }

    /// Total number of replies across all categories.
    pub fn len(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }

    /// A validated bank is never empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pick one reply for the category, uniformly via `source`.
    pub fn select(&self, category: Category, source: &mut dyn EntropySource) -> &str {
        let candidates = self.candidates(category);
        let index = source.next_index(candidates.len());
        debug!(%category, index, "Selected canned reply");
        // Sources promise `index < len`; the modulo keeps a broken one in bounds.
        &candidates[index % candidates.len()]
    }

    /// Pick by label. Unknown labels fall back to the default category.
    pub fn select_for_label(&self, label: &str, source: &mut dyn EntropySource) -> &str {
        let category = Category::from_label(label).unwrap_or(Category::Default);
        self.select(category, source)
    }
}

impl TryFrom<HashMap<String, Vec<String>>> for ResponseBank {
    type Error = AppError;

    fn try_from(raw: HashMap<String, Vec<String>>) -> Result<Self, Self::Error> {
        let mut entries = HashMap::with_capacity(raw.len());
        for (label, replies) in raw {
            let category = Category::from_label(&label).ok_or_else(|| {
                AppError::Config(format!("unknown response category '{}'", label))
            })?;
            entries.insert(category, replies);
        }
        Self::from_entries(entries)
    }
}

impl From<ResponseBank> for HashMap<String, Vec<String>> {
    fn from(bank: ResponseBank) -> Self {
        Category::ALL
            .iter()
            .zip(bank.entries)
            .map(|(category, replies)| (category.label().to_string(), replies))
            .collect()
    }
}
