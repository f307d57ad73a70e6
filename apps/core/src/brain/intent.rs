//! Intent Classification using regex patterns.
//!
//! Keyword rules for the heart health assistant. Rules are tested in a fixed
//! priority order against the lower-cased utterance and the first hit wins.
//! No ML model required - pure Rust regex matching.
//!
//! Patterns are written in lower case and matched without `(?i)`, and word
//! starts use the ASCII boundary `(?-u:\b)`: "ñpain" hits the symptom rule,
//! while "ſymptom" (long s) does not fold to "symptom".

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Topic bucket used to pick a canned reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Opening salutation (hi, hello, hey, greetings)
    Greeting,
    /// Symptom questions (pain, chest, breath, heart attack, ...)
    Symptoms,
    /// Lifestyle and prevention (diet, exercise, food, ...)
    Prevention,
    /// Booking a doctor or specialist
    Appointment,
    /// Risk assessment tool
    Predictor,
    /// Catch-all
    Default,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Category {
    /// Every category, in classification priority order.
    pub const ALL: [Category; 6] = [
        Category::Greeting,
        Category::Symptoms,
        Category::Prevention,
        Category::Appointment,
        Category::Predictor,
        Category::Default,
    ];

    /// Returns the stable label used in response bank files
    pub fn label(&self) -> &'static str {
        match self {
            Category::Greeting => "greeting",
            Category::Symptoms => "symptoms",
            Category::Prevention => "prevention",
            Category::Appointment => "appointment",
            Category::Predictor => "predictor",
            Category::Default => "default",
        }
    }

    /// Parses a label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.label() == label)
    }

    /// Position in [`Category::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Result of intent classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentResult {
    /// Detected category
    pub category: Category,
    /// Text that triggered the rule (`None` for the catch-all)
    pub matched_keyword: Option<String>,
}

/// One rule of the ordered rule list
struct IntentRule {
    category: Category,
    pattern: Regex,
}

/// Intent classifier using regex patterns
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

// Compile patterns once at startup
// NOTE: the patterns are literals; a failure here is a programming error.
static GREETING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Anchored at the start only: "history" opens with "hi" and counts.
    Regex::new(r"^(hi|hello|hey|greetings)").expect("Invalid regex: greeting pattern")
});

static SYMPTOMS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)(symptom|pain|chest|breath|heart\s?attack|discomfort)")
        .expect("Invalid regex: symptom stems")
});

static PREVENTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)(prevention|health|diet|exercise|food|eat|activity)")
        .expect("Invalid regex: prevention stems")
});

static APPOINTMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)(appointment|doctor|specialist|consultation|book|schedule)")
        .expect("Invalid regex: appointment stems")
});

static PREDICTOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)(predictor|risk|test|assessment|predict|check)")
        .expect("Invalid regex: predictor stems")
});

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a new intent classifier with all rules, highest priority first
    pub fn new() -> Self {
        let rules = vec![
            IntentRule {
                category: Category::Greeting,
                pattern: GREETING_PATTERN.clone(),
            },
            IntentRule {
                category: Category::Symptoms,
                pattern: SYMPTOMS_PATTERN.clone(),
            },
            IntentRule {
                category: Category::Prevention,
                pattern: PREVENTION_PATTERN.clone(),
            },
            IntentRule {
                category: Category::Appointment,
                pattern: APPOINTMENT_PATTERN.clone(),
            },
            IntentRule {
                category: Category::Predictor,
                pattern: PREDICTOR_PATTERN.clone(),
            },
        ];

        Self { rules }
    }

    /// Classify an utterance into a category
    pub fn classify(&self, text: &str) -> Category {
        self.classify_detailed(text).category
    }

    /// Classify and report which keyword decided it
    pub fn classify_detailed(&self, text: &str) -> IntentResult {
        let lowered = text.to_lowercase();

        for rule in &self.rules {
            if let Some(m) = rule.pattern.find(&lowered) {
                return IntentResult {
                    category: rule.category,
                    matched_keyword: Some(m.as_str().to_string()),
                };
            }
        }

        IntentResult {
            category: Category::Default,
            matched_keyword: None,
        }
    }
}
