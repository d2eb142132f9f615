use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::paths::PathManager;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Overrides the default session record location.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory with local catalog JSON files. When unset the embedded
    /// sample catalog is used.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Loads from `path`. A missing file yields the defaults; an unreadable
    /// or unparsable file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("parse config file {:?}", path))
    }

    /// Load-or-default with a warning, for callers that should not fail on a
    /// bad config.
    pub fn load_or_default(paths: &PathManager) -> Self {
        let path = paths.config_file();
        Self::load(&path).unwrap_or_else(|e| {
            warn!("Ignoring config at {:?}: {}", path, e);
            Self::default()
        })
    }

    pub fn session_file(&self, paths: &PathManager) -> PathBuf {
        self.session
            .file
            .clone()
            .unwrap_or_else(|| paths.session_file())
    }

    pub fn catalog_data_dir(&self) -> Option<&Path> {
        self.catalog.data_dir.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert!(config.session.file.is_none());
        assert!(config.catalog.data_dir.is_none());
    }

    #[test]
    fn test_parse_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[session]\nfile = \"/tmp/custom-session.json\"\n\n[catalog]\ndata_dir = \"/srv/catalog\"\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        let paths = PathManager::from_base("/tmp/base");
        assert_eq!(
            config.session_file(&paths),
            PathBuf::from("/tmp/custom-session.json")
        );
        assert_eq!(config.catalog_data_dir(), Some(Path::new("/srv/catalog")));
    }

    #[test]
    fn test_bad_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "session = [").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
