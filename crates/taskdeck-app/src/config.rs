//! Host configuration loaded from `taskdeck.toml`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

const CONFIG_FILE: &str = "taskdeck.toml";

/// Top-level configuration for an embedding host.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct BoardConfig {
    /// Remote collection endpoint settings.
    #[serde(default)]
    pub remote: RemoteConfig,
    /// Local persistence settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl BoardConfig {
    /// Load configuration from `taskdeck.toml` inside `dir`.
    ///
    /// A missing file yields the defaults; this is the normal case for hosts
    /// that configure the store programmatically.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read, parsed, or
    /// validated.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let config_path = dir.as_ref().join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        Self::from_str_validated(&contents)
            .with_context(|| format!("failed to parse {}", config_path.display()))
    }

    /// Parse and validate configuration from TOML text.
    ///
    /// # Errors
    /// Returns an error when the text cannot be parsed or fails validation.
    pub fn from_str_validated(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let base = self.remote.base_url.trim();
        if base.is_empty() {
            bail!("remote.base_url must not be empty");
        }
        if !base.starts_with("http://") && !base.starts_with("https://") {
            bail!("remote.base_url must be an absolute http(s) URL: {base}");
        }
        if self.remote.timeout_secs == 0 {
            bail!("remote.timeout_secs must be positive");
        }
        Ok(())
    }
}

/// Remote collection endpoint settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the collection endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Local persistence settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the persisted board document.
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_owned()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(crate::storage::DEFAULT_STORAGE_FILE)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let config = BoardConfig::from_dir(dir.path()).unwrap_or_else(|err| panic!("load: {err}"));
        assert_eq!(config.remote.base_url, "http://localhost:5000");
        assert_eq!(config.remote.timeout_secs, 30);
        assert_eq!(config.storage.path, PathBuf::from("taskdeck.json"));
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config = BoardConfig::from_str_validated(
            r#"
            [remote]
            base_url = "https://tasks.example.com/api"
            "#,
        )
        .unwrap_or_else(|err| panic!("parse: {err}"));
        assert_eq!(config.remote.base_url, "https://tasks.example.com/api");
        assert_eq!(config.remote.timeout_secs, 30);
    }

    #[test]
    fn config_file_in_dir_is_loaded() {
        let dir = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
        std::fs::write(
            dir.path().join("taskdeck.toml"),
            "[storage]\npath = \"boards/main.json\"\n",
        )
        .unwrap_or_else(|err| panic!("write: {err}"));
        let config = BoardConfig::from_dir(dir.path()).unwrap_or_else(|err| panic!("load: {err}"));
        assert_eq!(config.storage.path, PathBuf::from("boards/main.json"));
    }

    #[test]
    fn validation_rejects_bad_remote_settings() {
        assert!(BoardConfig::from_str_validated("[remote]\nbase_url = \"\"\n").is_err());
        assert!(BoardConfig::from_str_validated("[remote]\nbase_url = \"localhost\"\n").is_err());
        assert!(
            BoardConfig::from_str_validated(
                "[remote]\nbase_url = \"http://x\"\ntimeout_secs = 0\n"
            )
            .is_err()
        );
    }
}
