//! # Risk Module
//!
//! Risk assessment form and a simulated predictor. No inference happens here.
//! The console host exposes it as `/risk <json form>`.

pub mod patient;
pub mod predictor;

pub use patient::{PatientData, Thal};
pub use predictor::{assess_form, simulate_prediction, Confidence, RiskLevel, RiskPrediction};
