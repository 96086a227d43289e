//! Error handling for rollcall
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy. Every failure here is
//! recoverable by design: prior state is kept intact and the operator is
//! offered a retry or corrective path.

use thiserror::Error;

/// Main error type for rollcall operations
#[derive(Error, Debug)]
pub enum RollcallError {
    #[error("failed to load roster data: {detail}")]
    LoadFailure { detail: String },

    #[error("a participant with id {id} already exists")]
    DuplicateId { id: i64 },

    #[error("participant not found: {id}")]
    NotFound { id: i64 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("preferences file error: {0}")]
    PreferencesParse(#[from] toml::de::Error),

    #[error("preferences encoding error: {0}")]
    PreferencesEncode(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for rollcall operations
pub type Result<T> = std::result::Result<T, RollcallError>;

impl RollcallError {
    /// Check if the failure is transient and worth retrying as-is
    pub fn is_retryable(&self) -> bool {
        match self {
            RollcallError::LoadFailure { .. } => true,
            RollcallError::Http(_) => true,
            RollcallError::Io(_) => true,
            RollcallError::DuplicateId { .. } => false,
            RollcallError::NotFound { .. } => false,
            RollcallError::Config(_) => false,
            RollcallError::Serialization(_) => false,
            RollcallError::PreferencesParse(_) => false,
            RollcallError::PreferencesEncode(_) => false,
            RollcallError::InvalidInput(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(RollcallError::LoadFailure { detail: "all sources failed".to_string() }.is_retryable());
        assert!(!RollcallError::DuplicateId { id: 7 }.is_retryable());
        assert!(!RollcallError::NotFound { id: 7 }.is_retryable());
        assert!(!RollcallError::Config("missing source".to_string()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = RollcallError::DuplicateId { id: 42 };
        assert_eq!(err.to_string(), "a participant with id 42 already exists");

        let err = RollcallError::NotFound { id: 9 };
        assert_eq!(err.to_string(), "participant not found: 9");
    }
}
