//! Firebase identity backend
//!
//! Talks to the Google identitytoolkit REST API directly: `accounts:signUp`
//! and `accounts:signInWithPassword`, API key as a query parameter. The
//! upstream error codes are folded into the shared [`AuthError`] taxonomy
//! so callers never see raw identitytoolkit strings for the common cases.

use crate::auth::{AuthError, AuthSession, IdentityProvider};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Firebase identity backend configuration
#[derive(Debug, Clone)]
pub struct FirebaseAuthConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: std::time::Duration,
}

impl Default for FirebaseAuthConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://identitytoolkit.googleapis.com/v1".to_string(),
            timeout: std::time::Duration::from_secs(30),
        }
    }
}

/// Firebase identity backend
pub struct FirebaseAuthProvider {
    config: FirebaseAuthConfig,
    client: Client,
}

impl FirebaseAuthProvider {
    /// Create a new Firebase identity backend
    pub fn new(config: FirebaseAuthConfig) -> Result<Self, AuthError> {
        if config.api_key.is_empty() {
            return Err(AuthError::NotConfigured(
                "Firebase API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AuthError::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    async fn call(&self, endpoint: &str, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let request = CredentialRequest {
            email: email.to_string(),
            password: password.to_string(),
            return_secure_token: true,
        };

        let response = self
            .client
            .post(format!(
                "{}/{endpoint}?key={}",
                self.config.base_url, self.config.api_key
            ))
            .json(&request)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_upstream_error(&body, status.as_u16()));
        }

        let payload: CredentialResponse = response
            .json()
            .await
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;

        // expiresIn arrives as a string of seconds
        let ttl_secs: i64 = payload
            .expires_in
            .parse()
            .map_err(|_| AuthError::InvalidResponse(format!("bad expiresIn: {}", payload.expires_in)))?;

        Ok(AuthSession {
            uid: payload.local_id,
            email: payload.email,
            id_token: payload.id_token,
            expires_at: Utc::now() + Duration::seconds(ttl_secs),
        })
    }
}

#[async_trait]
impl IdentityProvider for FirebaseAuthProvider {
    fn name(&self) -> &str {
        "firebase"
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        self.call("accounts:signUp", email, password).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        self.call("accounts:signInWithPassword", email, password).await
    }
}

/// Fold an identitytoolkit error body into the shared taxonomy.
///
/// Weak-password responses carry explanatory suffixes
/// ("WEAK_PASSWORD : Password should be at least 6 characters"), so codes
/// match on prefix.
fn map_upstream_error(body: &str, status: u16) -> AuthError {
    let code = serde_json::from_str::<UpstreamError>(body)
        .map(|e| e.error.message)
        .unwrap_or_default();

    if code.starts_with("EMAIL_EXISTS") {
        AuthError::EmailExists
    } else if code.starts_with("WEAK_PASSWORD") {
        AuthError::WeakPassword
    } else if code.starts_with("INVALID_EMAIL") || code.starts_with("MISSING_EMAIL") {
        AuthError::InvalidEmail
    } else if code.starts_with("EMAIL_NOT_FOUND")
        || code.starts_with("INVALID_PASSWORD")
        || code.starts_with("INVALID_LOGIN_CREDENTIALS")
    {
        AuthError::InvalidCredentials
    } else if code.is_empty() {
        AuthError::Upstream(format!("identity service returned HTTP {status}"))
    } else {
        AuthError::Upstream(code)
    }
}

#[derive(Debug, Serialize)]
struct CredentialRequest {
    email: String,
    password: String,
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
struct CredentialResponse {
    #[serde(rename = "localId")]
    local_id: String,
    email: String,
    #[serde(rename = "idToken")]
    id_token: String,
    #[serde(rename = "expiresIn")]
    expires_in: String,
}

#[derive(Debug, Deserialize, Default)]
struct UpstreamError {
    error: UpstreamErrorBody,
}

#[derive(Debug, Deserialize, Default)]
struct UpstreamErrorBody {
    message: String,
}
