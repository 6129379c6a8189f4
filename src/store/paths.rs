//! Data directory layout
//!
//! All state lives under one root so callers can consistently locate the
//! account registry, the active session, and per-user profiles:
//!
//! ```text
//! <root>/accounts.json
//! <root>/session.json
//! <root>/profiles/<uid>.json
//! ```
//!
//! The root resolves, in order, from `NAMASKAR_DATA_DIR`, the `[store]`
//! config section, and the platform data directory.

use super::StoreError;
use crate::config::AppConfig;
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "NAMASKAR_DATA_DIR";

/// Paths to every storage location
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub root: PathBuf,
    pub profiles_dir: PathBuf,
    pub accounts_file: PathBuf,
    pub session_file: PathBuf,
}

impl DataPaths {
    pub fn new(root: PathBuf) -> Self {
        Self {
            profiles_dir: root.join("profiles"),
            accounts_file: root.join("accounts.json"),
            session_file: root.join("session.json"),
            root,
        }
    }

    /// Resolve the data root from environment, config, or platform default
    pub fn resolve(config: &AppConfig) -> Result<Self, StoreError> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            return Ok(Self::new(PathBuf::from(dir)));
        }
        if let Some(dir) = &config.store.data_dir {
            return Ok(Self::new(dir.clone()));
        }
        let dirs = ProjectDirs::from("", "", "namaskar").ok_or(StoreError::NoDataDir)?;
        Ok(Self::new(dirs.data_dir().to_path_buf()))
    }

    /// Create the directory tree if it is not there yet
    pub fn ensure_dirs(&self) -> Result<(), StoreError> {
        for dir in [&self.root, &self.profiles_dir] {
            fs::create_dir_all(dir).map_err(|source| StoreError::Io {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Profile file for one account
    pub fn profile_file(&self, uid: &str) -> PathBuf {
        self.profiles_dir.join(format!("{uid}.json"))
    }
}
