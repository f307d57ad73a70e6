//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout stays reserved for the conversation. The level
//! comes from `RUST_LOG` (default `info`).

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::LogFormat;
use crate::error::AppError;

const SERVICE_NAME: &str = "heartcare";

/// Installs the global subscriber. Fails if one is already set.
pub fn init_tracing(format: LogFormat) -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match format {
        LogFormat::Json => Registry::default()
            .with(env_filter)
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(
                SERVICE_NAME.to_string(),
                std::io::stderr,
            ))
            .try_init(),
        LogFormat::Pretty => Registry::default()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init(),
    };

    result.map_err(|e| AppError::Internal(format!("Failed to set global subscriber: {}", e)))
}
