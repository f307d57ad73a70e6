//! Topic Guide - long-form answers picked by substring.
//!
//! A second, deterministic way of answering: the lower-cased utterance is
//! searched for plain substrings (no word boundaries), topics in priority
//! order. Unlike [`IntentClassifier`](super::IntentClassifier), "cholesterol"
//! and "pressure" have answers of their own, and "heart" hits the
//! nutrition topic through "eat".

use std::fmt;

/// Subject of a long-form answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Symptoms,
    Cholesterol,
    Lifestyle,
    BloodPressure,
    Nutrition,
    RiskFactors,
    Exercise,
    /// Nothing matched
    General,
}

/// Topics with their trigger substrings, highest priority first.
const TOPIC_TRIGGERS: &[(Topic, &[&str])] = &[
    (Topic::Symptoms, &["symptom"]),
    (Topic::Cholesterol, &["cholesterol"]),
    (Topic::Lifestyle, &["lifestyle", "change"]),
    (Topic::BloodPressure, &["pressure", "bp"]),
    (Topic::Nutrition, &["food", "diet", "eat"]),
    (Topic::RiskFactors, &["risk", "factor"]),
    (Topic::Exercise, &["exercise", "workout"]),
];

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Topic {
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Symptoms => "symptoms",
            Topic::Cholesterol => "cholesterol",
            Topic::Lifestyle => "lifestyle",
            Topic::BloodPressure => "blood_pressure",
            Topic::Nutrition => "nutrition",
            Topic::RiskFactors => "risk_factors",
            Topic::Exercise => "exercise",
            Topic::General => "general",
        }
    }

    /// First topic whose trigger occurs anywhere in the utterance.
    pub fn detect(text: &str) -> Topic {
        let lowered = text.to_lowercase();
        TOPIC_TRIGGERS
            .iter()
            .find(|(_, triggers)| triggers.iter().any(|t| lowered.contains(t)))
            .map(|(topic, _)| *topic)
            .unwrap_or(Topic::General)
    }

    /// The fixed answer for this topic.
    pub fn answer(&self) -> &'static str {
        match self {
            Topic::Symptoms => "Common heart disease symptoms include chest pain or discomfort, shortness of breath, pain/numbness in arms or legs, neck/jaw/throat/upper abdomen pain, and fatigue. Women may experience different symptoms like unusual fatigue, sleep disturbances, or shortness of breath. If you experience chest pain or multiple symptoms, seek medical attention immediately.",
            Topic::Cholesterol => "To lower cholesterol naturally: 1) Eat heart-healthy foods (reduce saturated fats, eliminate trans fats, eat foods rich in omega-3s), 2) Exercise regularly, 3) Quit smoking, 4) Maintain healthy weight, 5) Limit alcohol consumption. Medications like statins may be prescribed by your doctor if lifestyle changes aren't enough.",
            Topic::Lifestyle => "Key lifestyle changes for heart health: 1) Regular physical activity (aim for 150 minutes/week), 2) Heart-healthy diet rich in fruits, vegetables, and whole grains, 3) Maintain healthy weight, 4) Reduce and manage stress, 5) Quit smoking, 6) Limit alcohol, 7) Get quality sleep, 8) Regular health check-ups to monitor blood pressure, cholesterol and blood sugar.",
            Topic::BloodPressure => "Blood pressure readings have two numbers: Systolic (top number) measures pressure during heartbeats, while diastolic (bottom number) measures pressure between beats. Normal: below 120/80 mmHg. Elevated: 120-129/<80 mmHg. Hypertension Stage 1: 130-139/80-89 mmHg. Hypertension Stage 2: 140+/90+ mmHg. Hypertensive crisis: 180+/120+ mmHg (requires immediate medical attention).",
            Topic::Nutrition => "Heart-healthy foods include: 1) Leafy green vegetables, 2) Whole grains, 3) Berries and other fruits, 4) Fatty fish rich in omega-3s (salmon, mackerel), 5) Nuts and seeds, 6) Legumes, 7) Olive oil, 8) Avocados, 9) Low-fat dairy, and 10) Dark chocolate (in moderation). Limit processed foods, sodium, saturated fats, and added sugars.",
            Topic::RiskFactors => "Major heart disease risk factors include: 1) Age (men ≥45, women ≥55), 2) Family history, 3) Smoking, 4) High blood pressure, 5) High cholesterol, 6) Diabetes, 7) Obesity, 8) Physical inactivity, 9) Unhealthy diet, 10) Excessive alcohol, 11) Stress, and 12) Poor sleep. Some factors cannot be changed (age, genetics), but many can be managed through lifestyle changes and medication.",
            Topic::Exercise => "For heart health, aim for at least 150 minutes of moderate aerobic activity or 75 minutes of vigorous activity weekly, plus muscle-strengthening exercises twice weekly. Good options include walking, jogging, cycling, swimming, and interval training. Always start gradually and consult your doctor before beginning a new exercise program, especially if you have existing heart conditions.",
            Topic::General => "I'm here to provide general information about heart health, risk factors, and disease prevention. While I can offer health education, I'm not a substitute for professional medical advice. If you have specific health concerns, please consult with a healthcare provider for personalized guidance.",
        }
    }
}
