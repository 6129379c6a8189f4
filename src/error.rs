//! Error types for Namaskar operations
//!
//! One top-level error aggregates the typed failures of every layer, with
//! message sanitization applied before anything reaches the terminal.
//! Auth and insight errors can embed upstream response bodies, which must
//! never leak credentials.

use thiserror::Error;

/// Main error type for Namaskar operations
#[derive(Debug, Error)]
pub enum NamaskarError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("{0}")]
    Auth(#[from] crate::auth::AuthError),

    #[error("{0}")]
    Profile(#[from] crate::profile::ProfileError),

    #[error("Numerology error: {0}")]
    Numerology(#[from] crate::numerology::NumerologyError),

    #[error("Storage error: {0}")]
    Store(#[from] crate::store::StoreError),

    #[error("Insight provider error: {0}")]
    Insight(#[from] crate::insight::InsightError),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl NamaskarError {
    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create internal error
    pub fn internal_error<S: Into<String>>(message: S) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Render this error for the terminal with secrets redacted
    pub fn display_message(&self) -> String {
        sanitize_error_message(&self.to_string())
    }
}

/// Sanitize error messages to prevent credential leakage
pub fn sanitize_error_message(message: &str) -> String {
    // Remove common secret patterns
    let mut sanitized = regex::Regex::new(r"(?i)(password|token|key|secret)[=:]\s*\S+")
        .unwrap()
        .replace_all(message, "${1}=***")
        .to_string();

    // Remove API keys passed as query parameters
    sanitized = regex::Regex::new(r"(?i)([?&]key=)[^&\s]+")
        .unwrap()
        .replace_all(&sanitized, "${1}***")
        .to_string();

    // Truncate very long messages - ensure total length is <= 500
    if sanitized.len() > 500 {
        let truncate_suffix = "...[truncated]";
        let max_content_len = 500 - truncate_suffix.len();
        sanitized = format!("{}{}", &sanitized[..max_content_len], truncate_suffix);
    }

    sanitized
}

/// Result type for Namaskar operations
pub type NamaskarResult<T> = Result<T, NamaskarError>;
