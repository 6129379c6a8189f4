//! Persisted session
//!
//! The CLI stays signed in between invocations by writing the active
//! session to the data directory. Expiry is checked by the auth layer at
//! load time, not here.

use super::{read_json_opt, remove_if_exists, write_json_atomic, DataPaths, StoreError};
use crate::auth::AuthSession;
use std::path::PathBuf;

/// File-backed store for the single active session
#[derive(Debug, Clone)]
pub struct SessionStore {
    file: PathBuf,
}

impl SessionStore {
    pub fn new(paths: &DataPaths) -> Self {
        Self {
            file: paths.session_file.clone(),
        }
    }

    /// The persisted session, if any
    pub fn load(&self) -> Result<Option<AuthSession>, StoreError> {
        read_json_opt(&self.file)
    }

    /// Persist a session, replacing any previous one
    pub fn save(&self, session: &AuthSession) -> Result<(), StoreError> {
        write_json_atomic(&self.file, session)
    }

    /// Drop the persisted session
    pub fn clear(&self) -> Result<(), StoreError> {
        remove_if_exists(&self.file)
    }
}
