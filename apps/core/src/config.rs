//! Runtime configuration, read from the environment.
//!
//! Call `dotenv::dotenv()` before `AppConfig::from_env()` so a local `.env`
//! file is honoured.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use validator::Validate;

use crate::brain::{EntropySource, HeartAssistant, RandomSource, ResponseBank};
use crate::chat::{KeywordResponder, Responder, TopicResponder};
use crate::error::AppError;

pub const ENV_REPLY_DELAY_MS: &str = "HEARTCARE_REPLY_DELAY_MS";
pub const ENV_RESPONSES_PATH: &str = "HEARTCARE_RESPONSES_PATH";
pub const ENV_RNG_SEED: &str = "HEARTCARE_RNG_SEED";
pub const ENV_TRANSCRIPT_PATH: &str = "HEARTCARE_TRANSCRIPT_PATH";
pub const ENV_LOG_FORMAT: &str = "HEARTCARE_LOG_FORMAT";
pub const ENV_RESPONDER: &str = "HEARTCARE_RESPONDER";

const DEFAULT_REPLY_DELAY_MS: u64 = 1200;

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "unknown log format '{}', expected 'pretty' or 'json'",
                other
            ))),
        }
    }
}

/// Which responder answers the chat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponderKind {
    /// Category rules with randomly picked canned replies
    #[default]
    Keyword,
    /// Substring topics with one fixed answer each
    Topic,
}

impl FromStr for ResponderKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyword" => Ok(ResponderKind::Keyword),
            "topic" => Ok(ResponderKind::Topic),
            other => Err(AppError::Config(format!(
                "unknown responder '{}', expected 'keyword' or 'topic'",
                other
            ))),
        }
    }
}

/// Settings for the console assistant.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Simulated "thinking" pause before a reply is shown.
    #[validate(range(max = 60000))]
    pub reply_delay_ms: u64,
    /// Optional JSON response bank replacing the built-in replies.
    pub responses_path: Option<PathBuf>,
    /// Fixed seed for reproducible reply selection.
    pub rng_seed: Option<u64>,
    /// Where to write the conversation on exit.
    pub transcript_path: Option<PathBuf>,
    pub log_format: LogFormat,
    pub responder: ResponderKind,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            responses_path: None,
            rng_seed: None,
            transcript_path: None,
            log_format: LogFormat::default(),
            responder: ResponderKind::default(),
        }
    }
}

impl AppConfig {
    /// Loads from `HEARTCARE_*` variables; unset variables keep their defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let config = Self {
            reply_delay_ms: parse_var(ENV_REPLY_DELAY_MS)?.unwrap_or(defaults.reply_delay_ms),
            responses_path: read_var(ENV_RESPONSES_PATH).map(PathBuf::from),
            rng_seed: parse_var(ENV_RNG_SEED)?,
            transcript_path: read_var(ENV_TRANSCRIPT_PATH).map(PathBuf::from),
            log_format: parse_var(ENV_LOG_FORMAT)?.unwrap_or(defaults.log_format),
            responder: parse_var(ENV_RESPONDER)?.unwrap_or(defaults.responder),
        };
        config
            .validate()
            .map_err(|e| AppError::Config(format!("invalid configuration: {}", e)))?;
        Ok(config)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    /// Seeded when `rng_seed` is set, OS entropy otherwise.
    pub fn entropy_source(&self) -> Box<dyn EntropySource> {
        match self.rng_seed {
            Some(seed) => Box::new(RandomSource::seeded(seed)),
            None => Box::new(RandomSource::from_entropy()),
        }
    }

    /// Builds the configured responder. The topic responder ignores `bank`.
    pub fn build_responder(&self, bank: ResponseBank) -> Arc<dyn Responder> {
        match self.responder {
            ResponderKind::Keyword => Arc::new(KeywordResponder::new(
                HeartAssistant::new(bank),
                self.entropy_source(),
            )),
            ResponderKind::Topic => Arc::new(TopicResponder),
        }
    }
}

/// Non-empty value of a variable.
fn read_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T>(key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    read_var(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| AppError::Config(format!("{} = '{}': {}", key, raw, e)))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.reply_delay(), Duration::from_millis(1200));
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.responses_path.is_none());
        assert_eq!(config.responder, ResponderKind::Keyword);
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_responder_kind_parse() {
        assert_eq!(" Topic ".parse::<ResponderKind>().unwrap(), ResponderKind::Topic);
        assert_eq!("keyword".parse::<ResponderKind>().unwrap(), ResponderKind::Keyword);
        assert!(matches!("llm".parse::<ResponderKind>(), Err(AppError::Config(_))));
    }
}
