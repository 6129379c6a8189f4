//! Identity providers and sessions
//!
//! Authentication goes through the [`IdentityProvider`] trait so the same
//! flows run against the hosted identity REST API or a fully offline local
//! registry. Both backends speak the same error taxonomy, worded the way
//! the sign-in screens display it.

pub mod providers;

pub use providers::firebase::{FirebaseAuthConfig, FirebaseAuthProvider};
pub use providers::local::LocalAuthProvider;

use crate::config::AppConfig;
use crate::error::NamaskarResult;
use crate::store::{AccountStore, DataPaths, SessionStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication errors, worded for direct display
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("This email is already registered.")]
    EmailExists,
    #[error("Password should be at least 6 characters.")]
    WeakPassword,
    #[error("Invalid email format.")]
    InvalidEmail,
    #[error("Invalid email or password.")]
    InvalidCredentials,
    #[error("You are not logged in. Please log in first.")]
    NotLoggedIn,
    #[error("Your session has expired. Please log in again.")]
    SessionExpired,
    #[error("Provider not configured: {0}")]
    NotConfigured(String),
    #[error("Authentication failed: {0}")]
    Upstream(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<crate::store::StoreError> for AuthError {
    fn from(e: crate::store::StoreError) -> Self {
        AuthError::Storage(e.to_string())
    }
}

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Account identifier (`localId` upstream, a UUID locally)
    pub uid: String,
    pub email: String,
    /// Bearer token for the session's lifetime
    pub id_token: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Identity backend trait for dependency injection and testing
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Get the provider name (e.g., "firebase", "local")
    fn name(&self) -> &str;

    /// Create an account and sign it in
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;

    /// Sign an existing account in
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;
}

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Shared email format check, applied before any backend is called
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Build the identity provider selected by the configuration
pub fn provider_from_config(
    config: &AppConfig,
    paths: &DataPaths,
) -> NamaskarResult<Box<dyn IdentityProvider>> {
    match config.auth.provider.as_str() {
        "firebase" => {
            let mut provider_config = FirebaseAuthConfig {
                api_key: config.auth_api_key()?,
                ..Default::default()
            };
            if let Some(endpoint) = &config.auth.endpoint {
                provider_config.base_url = endpoint.clone();
            }
            Ok(Box::new(FirebaseAuthProvider::new(provider_config)?))
        }
        "local" => Ok(Box::new(LocalAuthProvider::new(
            AccountStore::new(paths),
            config.auth.session_ttl_secs,
        ))),
        other => Err(crate::error::NamaskarError::internal_error(format!(
            "unreachable auth provider '{other}' passed config validation"
        ))),
    }
}

/// Load the persisted session, rejecting absence and expiry
pub fn require_session(sessions: &SessionStore) -> Result<AuthSession, AuthError> {
    let session = sessions.load()?.ok_or(AuthError::NotLoggedIn)?;
    if session.is_expired() {
        return Err(AuthError::SessionExpired);
    }
    Ok(session)
}
