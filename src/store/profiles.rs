//! Per-account profile storage

use super::{read_json_opt, write_json_atomic, DataPaths, StoreError};
use crate::profile::UserProfile;

/// File-backed profile storage, one file per account uid
#[derive(Debug, Clone)]
pub struct ProfileStore {
    paths: DataPaths,
}

impl ProfileStore {
    pub fn new(paths: &DataPaths) -> Self {
        Self {
            paths: paths.clone(),
        }
    }

    /// Load the profile for an account, if one has been saved
    pub fn load(&self, uid: &str) -> Result<Option<UserProfile>, StoreError> {
        read_json_opt(&self.paths.profile_file(uid))
    }

    /// Save (or overwrite) the profile for an account
    pub fn save(&self, uid: &str, profile: &UserProfile) -> Result<(), StoreError> {
        write_json_atomic(&self.paths.profile_file(uid), profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn store() -> (tempfile::TempDir, ProfileStore) {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path().to_path_buf());
        paths.ensure_dirs().unwrap();
        let store = ProfileStore::new(&paths);
        (dir, store)
    }

    fn profile(name: &str) -> UserProfile {
        UserProfile::new(name, NaiveDate::from_ymd_opt(1990, 3, 21).unwrap()).unwrap()
    }

    #[test]
    fn test_missing_profile_is_none() {
        let (_dir, store) = store();
        assert!(store.load("nobody").unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let (_dir, store) = store();
        let saved = profile("John Doe");
        store.save("uid-1", &saved).unwrap();
        assert_eq!(store.load("uid-1").unwrap(), Some(saved));
    }

    #[test]
    fn test_save_overwrites() {
        let (_dir, store) = store();
        store.save("uid-1", &profile("John Doe")).unwrap();
        store.save("uid-1", &profile("Jane Doe")).unwrap();
        let loaded = store.load("uid-1").unwrap().unwrap();
        assert_eq!(loaded.full_name, "Jane Doe");
    }

    #[test]
    fn test_profiles_are_per_account() {
        let (_dir, store) = store();
        store.save("uid-1", &profile("John Doe")).unwrap();
        assert!(store.load("uid-2").unwrap().is_none());
    }
}
