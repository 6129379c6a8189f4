//! Offline local identity backend
//!
//! Accounts live in the data directory's registry; passwords are stored as
//! salted SHA-256 digests. Sign-in failures are indistinguishable between
//! "no such email" and "wrong password" so the registry does not leak which
//! addresses exist.

use crate::auth::{is_valid_email, AuthError, AuthSession, IdentityProvider};
use crate::store::{AccountRecord, AccountStore};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Minimum accepted password length, matching the hosted backend's policy
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Offline identity backend over the local account registry
pub struct LocalAuthProvider {
    accounts: AccountStore,
    session_ttl: Duration,
}

impl LocalAuthProvider {
    pub fn new(accounts: AccountStore, session_ttl_secs: u64) -> Self {
        Self {
            accounts,
            session_ttl: Duration::seconds(session_ttl_secs.min(i64::MAX as u64) as i64),
        }
    }

    fn issue_session(&self, uid: String, email: String) -> AuthSession {
        AuthSession {
            uid,
            email,
            id_token: Uuid::new_v4().to_string(),
            expires_at: Utc::now() + self.session_ttl,
        }
    }
}

fn digest_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[async_trait]
impl IdentityProvider for LocalAuthProvider {
    fn name(&self) -> &str {
        "local"
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        if !is_valid_email(email) {
            return Err(AuthError::InvalidEmail);
        }
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(AuthError::WeakPassword);
        }

        let email = email.to_lowercase();
        if self.accounts.find_by_email(&email)?.is_some() {
            return Err(AuthError::EmailExists);
        }

        let salt = Uuid::new_v4().to_string();
        let record = AccountRecord {
            uid: Uuid::new_v4().to_string(),
            email: email.clone(),
            password_digest: digest_password(&salt, password),
            password_salt: salt,
            created_at: Utc::now(),
        };
        self.accounts.insert(record.clone())?;

        Ok(self.issue_session(record.uid, email))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let email = email.to_lowercase();
        let account = self
            .accounts
            .find_by_email(&email)?
            .ok_or(AuthError::InvalidCredentials)?;

        if digest_password(&account.password_salt, password) != account.password_digest {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(self.issue_session(account.uid, email))
    }
}
