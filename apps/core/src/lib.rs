//! Heart Health Assistant core.
//!
//! Keyword intent classification with canned replies (`brain`), the chat
//! session that hosts it (`chat`), and the simulated risk predictor (`risk`).

pub mod brain;
pub mod chat;
pub mod config;
pub mod error;
pub mod risk;
pub mod telemetry;

#[cfg(test)]
mod tests;
