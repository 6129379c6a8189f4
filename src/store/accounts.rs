//! Account registry for the local identity backend
//!
//! One JSON file holding every registered account. Emails are stored
//! lowercased; the file never holds a password, only its salted digest.

use super::{read_json_opt, write_json_atomic, DataPaths, StoreError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A registered local account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub uid: String,
    pub email: String,
    pub password_salt: String,
    pub password_digest: String,
    pub created_at: DateTime<Utc>,
}

/// File-backed account registry
#[derive(Debug, Clone)]
pub struct AccountStore {
    file: PathBuf,
}

impl AccountStore {
    pub fn new(paths: &DataPaths) -> Self {
        Self {
            file: paths.accounts_file.clone(),
        }
    }

    /// All registered accounts; an absent file is an empty registry
    pub fn load(&self) -> Result<Vec<AccountRecord>, StoreError> {
        Ok(read_json_opt(&self.file)?.unwrap_or_default())
    }

    /// Look up an account by email, case-insensitively
    pub fn find_by_email(&self, email: &str) -> Result<Option<AccountRecord>, StoreError> {
        let needle = email.to_lowercase();
        Ok(self
            .load()?
            .into_iter()
            .find(|account| account.email == needle))
    }

    /// Append a new account to the registry
    pub fn insert(&self, record: AccountRecord) -> Result<(), StoreError> {
        let mut accounts = self.load()?;
        accounts.push(record);
        write_json_atomic(&self.file, &accounts)
    }
}
