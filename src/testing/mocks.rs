//! Mock implementations for testing
//!
//! Provides mock IdentityProvider and InsightProvider implementations to
//! enable testing the account and reading flows without external
//! dependencies.

use crate::auth::{AuthError, AuthSession, IdentityProvider};
use crate::insight::{InsightError, InsightProvider, InsightRequest};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Mock identity provider for testing
///
/// Issues sessions without any registry behind it and records every call.
#[derive(Debug, Default)]
pub struct MockIdentityProvider {
    pub sign_up_calls: Arc<Mutex<Vec<String>>>,
    pub sign_in_calls: Arc<Mutex<Vec<String>>>,
    pub should_fail: bool,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose calls all fail with invalid credentials
    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    pub async fn get_sign_up_calls(&self) -> Vec<String> {
        self.sign_up_calls.lock().await.clone()
    }

    pub async fn get_sign_in_calls(&self) -> Vec<String> {
        self.sign_in_calls.lock().await.clone()
    }

    fn issue_session(&self, email: &str) -> AuthSession {
        AuthSession {
            uid: Uuid::new_v4().to_string(),
            email: email.to_lowercase(),
            id_token: Uuid::new_v4().to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        }
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn sign_up(&self, email: &str, _password: &str) -> Result<AuthSession, AuthError> {
        self.sign_up_calls.lock().await.push(email.to_string());
        if self.should_fail {
            return Err(AuthError::Upstream("Mock sign-up failure".to_string()));
        }
        Ok(self.issue_session(email))
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<AuthSession, AuthError> {
        self.sign_in_calls.lock().await.push(email.to_string());
        if self.should_fail {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(self.issue_session(email))
    }
}

/// Mock insight provider for testing
///
/// Returns a canned annotation and records every prompt it was asked for.
#[derive(Debug)]
pub struct MockInsightProvider {
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub response: String,
    pub should_fail: bool,
}

impl Default for MockInsightProvider {
    fn default() -> Self {
        Self {
            prompts: Arc::new(Mutex::new(Vec::new())),
            response: "A mock interpretation of your path.".to_string(),
            should_fail: false,
        }
    }
}

impl MockInsightProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(response: &str) -> Self {
        Self {
            response: response.to_string(),
            ..Default::default()
        }
    }

    /// A provider whose annotations all fail
    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    pub async fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }
}

#[async_trait]
impl InsightProvider for MockInsightProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn annotate(&self, request: &InsightRequest) -> Result<String, InsightError> {
        self.prompts.lock().await.push(request.prompt());
        if self.should_fail {
            return Err(InsightError::ApiError("Mock annotation failure".to_string()));
        }
        Ok(self.response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerology::Figure;

    #[tokio::test]
    async fn test_mock_identity_provider_issues_sessions() {
        let provider = MockIdentityProvider::new();
        let session = provider
            .sign_up("User@Example.com", "secret-pass")
            .await
            .unwrap();
        assert_eq!(session.email, "user@example.com");
        assert!(!session.is_expired());
        assert_eq!(provider.get_sign_up_calls().await, vec!["User@Example.com"]);
    }

    #[tokio::test]
    async fn test_mock_identity_provider_failure_toggle() {
        let provider = MockIdentityProvider::with_failure();
        let result = provider.sign_in("user@example.com", "secret-pass").await;
        assert_eq!(result.unwrap_err(), AuthError::InvalidCredentials);
        assert_eq!(provider.get_sign_in_calls().await.len(), 1);
    }

    #[tokio::test]
    async fn test_mock_insight_provider_records_prompts() {
        let provider = MockInsightProvider::with_response("Bright roads.");
        let request = InsightRequest::life_path(Figure::reduce_from(7).unwrap(), "Jane");
        let text = provider.annotate(&request).await.unwrap();
        assert_eq!(text, "Bright roads.");
        let prompts = provider.get_prompts().await;
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Life Path Number 7"));
    }

    #[tokio::test]
    async fn test_mock_insight_provider_failure_toggle() {
        let provider = MockInsightProvider::with_failure();
        let request = InsightRequest::life_path(Figure::reduce_from(7).unwrap(), "Jane");
        assert!(provider.annotate(&request).await.is_err());
    }
}
