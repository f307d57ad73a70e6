//! Simulated heart disease risk prediction.
//!
//! There is no model behind this: the probability is drawn from the entropy
//! source in `[0.15, 0.85)` once the form validates. The banding rules are the
//! part worth keeping stable.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;
use validator::Validate;

use super::patient::PatientData;
use crate::brain::EntropySource;
use crate::error::AppError;

const PROBABILITY_FLOOR: f64 = 0.15;
const PROBABILITY_SPAN: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Below 0.3 is low, below 0.6 moderate, anything else high.
    pub fn from_probability(probability: f64) -> Self {
        if probability < 0.3 {
            RiskLevel::Low
        } else if probability < 0.6 {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::High => "High Risk",
        }
    }

    /// Guidance shown with the result.
    pub fn advice(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Your results suggest a lower risk of heart disease based on the information provided. Continue maintaining your heart health with regular check-ups and a healthy lifestyle.",
            RiskLevel::Moderate => "Your results indicate a moderate risk of heart disease. We recommend discussing these results with your healthcare provider for personalized advice.",
            RiskLevel::High => "Your results suggest a higher risk of heart disease. We strongly recommend consulting with a healthcare professional as soon as possible for a thorough evaluation.",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How decisive a probability is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }

    /// Far from 0.5 is high, near 0.5 is low.
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.8 || probability < 0.2 {
            Confidence::High
        } else if (0.4..=0.6).contains(&probability) {
            Confidence::Low
        } else {
            Confidence::Medium
        }
    }
}

/// Outcome of one assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskPrediction {
    /// Probability of heart disease (0.0 - 1.0)
    pub probability: f64,
    /// Whether the probability crosses 0.5
    pub has_disease: bool,
    pub risk_level: RiskLevel,
    pub confidence: Confidence,
}

impl RiskPrediction {
    pub fn from_probability(probability: f64) -> Self {
        Self {
            probability,
            has_disease: probability > 0.5,
            risk_level: RiskLevel::from_probability(probability),
            confidence: Confidence::from_probability(probability),
        }
    }

    /// e.g. "Risk Probability: 42.00%"
    pub fn summary(&self) -> String {
        format!("Risk Probability: {:.2}%", self.probability * 100.0)
    }

    /// Level, summary and advice, one per line.
    pub fn report(&self) -> String {
        format!(
            "{} ({} confidence)\n{}\n{}",
            self.risk_level,
            self.confidence.label(),
            self.summary(),
            self.risk_level.advice()
        )
    }
}

/// Parse a JSON patient form and run the simulated predictor on it.
pub fn assess_form(
    json: &str,
    source: &mut dyn EntropySource,
) -> Result<RiskPrediction, AppError> {
    let data = PatientData::from_json(json)?;
    simulate_prediction(&data, source)
}

/// Validate the form, then draw a simulated probability.
pub fn simulate_prediction(
    data: &PatientData,
    source: &mut dyn EntropySource,
) -> Result<RiskPrediction, AppError> {
    data.validate()?;

    let probability = PROBABILITY_FLOOR + source.next_unit() * PROBABILITY_SPAN;
    let prediction = RiskPrediction::from_probability(probability);

    info!(
        probability = prediction.probability,
        risk_level = ?prediction.risk_level,
        "Simulated risk prediction"
    );
    Ok(prediction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_bands() {
        assert_eq!(RiskLevel::from_probability(0.15), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.3), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(0.59), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(0.6), RiskLevel::High);
    }

    #[test]
    fn test_confidence_bands() {
        assert_eq!(Confidence::from_probability(0.1), Confidence::High);
        assert_eq!(Confidence::from_probability(0.9), Confidence::High);
        assert_eq!(Confidence::from_probability(0.5), Confidence::Low);
        assert_eq!(Confidence::from_probability(0.4), Confidence::Low);
        assert_eq!(Confidence::from_probability(0.3), Confidence::Medium);
        assert_eq!(Confidence::from_probability(0.7), Confidence::Medium);
    }

    #[test]
    fn test_report_lines() {
        let prediction = RiskPrediction::from_probability(0.7);
        let report = prediction.report();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "High Risk (medium confidence)");
        assert_eq!(lines[1], "Risk Probability: 70.00%");
        assert_eq!(lines[2], RiskLevel::High.advice());
    }

    #[test]
    fn test_summary_format() {
        let prediction = RiskPrediction::from_probability(0.4217);
        assert_eq!(prediction.summary(), "Risk Probability: 42.17%");
        assert!(!prediction.has_disease);
    }
}
