use std::io;
use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
///
/// The classifier and response selector never produce one of these; they only
/// come out of configuration loading, response bank construction, patient data
/// validation and the responder seam.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data validation errors (e.g., invalid input format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., a response bank with an empty category).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_maps_to_validation() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = json_err.into();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.starts_with("JSON error")));
    }
}
