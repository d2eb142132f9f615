use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use streamshelf_models::UserProfile;

/// File-backed durable storage for the single session record. Absence of the
/// file means no saved session; a record that fails to parse is deleted and
/// treated as absent rather than surfaced as an error.
#[derive(Debug, Clone)]
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<UserProfile>> {
        if !self.path.exists() {
            debug!("No saved session at {:?}", self.path);
            return Ok(None);
        }

        match std::fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str::<UserProfile>(&content) {
                Ok(profile) => {
                    info!("Restored session for {} from {:?}", profile.email, self.path);
                    Ok(Some(profile))
                }
                Err(e) => {
                    warn!(
                        "Session record at {:?} is corrupt: {}. Deleting it.",
                        self.path, e
                    );
                    if let Err(rm_err) = std::fs::remove_file(&self.path) {
                        warn!("Failed to delete corrupt session record: {}", rm_err);
                    }
                    Ok(None)
                }
            },
            Err(e) => {
                warn!("Failed to read session record at {:?}: {}", self.path, e);
                Ok(None)
            }
        }
    }

    /// Synchronous write-through: the record is fully written before this
    /// returns.
    pub fn save(&self, profile: &UserProfile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(profile)
            .map_err(|e| anyhow!("Failed to serialize session: {}", e))?;
        std::fs::write(&self.path, json)
            .map_err(|e| anyhow!("Failed to write session record: {}", e))?;
        debug!("Session saved to {:?}", self.path);
        Ok(())
    }

    /// Removes the record. Idempotent: a missing file is not an error.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Session record removed: {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(anyhow!("Failed to remove session record: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::profile_template;

    fn storage() -> (tempfile::TempDir, SessionStorage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = SessionStorage::new(dir.path().join("session.json"));
        (dir, storage)
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let (_dir, storage) = storage();
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_round_trip() {
        let (_dir, storage) = storage();
        let profile = profile_template();
        storage.save(&profile).unwrap();
        let restored = storage.load().unwrap().unwrap();
        assert_eq!(restored, profile);
    }

    #[test]
    fn test_corrupt_record_deleted_and_treated_as_absent() {
        let (_dir, storage) = storage();
        std::fs::create_dir_all(storage.path().parent().unwrap()).unwrap();
        std::fs::write(storage.path(), "{ not valid json").unwrap();

        assert!(storage.load().unwrap().is_none());
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (_dir, storage) = storage();
        storage.save(&profile_template()).unwrap();
        storage.clear().unwrap();
        assert!(!storage.path().exists());
        storage.clear().unwrap();
    }
}
