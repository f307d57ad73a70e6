//! Test Module
//!
//! Cross-module test suite for the heart health assistant.
//!
//! ## Test Categories
//! - `brain_tests`: Classification properties, response bank, selection
//! - `chat_tests`: Session log, responder failures, suggestions, transcript
//! - `risk_tests`: Form validation and simulated predictions
//! - `config_tests`: Environment-driven configuration

pub mod chat_tests;
pub mod config_tests;
