use anyhow::Result;
use std::path::{Path, PathBuf};

/// Explicit base-path override from the environment, used in containers and
/// tests.
pub fn base_path_override() -> Option<PathBuf> {
    std::env::var("STREAMSHELF_BASE_PATH").ok().map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("streamshelf");
        Ok(Self::from_base(base_dir))
    }

    pub fn from_base(base: impl Into<PathBuf>) -> Self {
        let base: PathBuf = base.into();
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// The single durable session record.
    pub fn session_file(&self) -> PathBuf {
        self.data_dir.join("session.json")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(base) = base_path_override() {
            return Self::from_base(base);
        }
        Self::new().unwrap_or_else(|_| Self::from_base(".streamshelf"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_hang_off_base() {
        let paths = PathManager::from_base("/tmp/shelf-test");
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/shelf-test/config.toml"));
        assert_eq!(
            paths.session_file(),
            PathBuf::from("/tmp/shelf-test/data/session.json")
        );
    }

    #[test]
    fn test_ensure_directories_creates_tree() {
        let dir = tempfile::tempdir().unwrap();
        let paths = PathManager::from_base(dir.path().join("base"));
        paths.ensure_directories().unwrap();
        assert!(paths.config_dir().is_dir());
        assert!(paths.data_dir().is_dir());
    }
}
