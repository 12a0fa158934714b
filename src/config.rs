//! Persisted client configuration.
//!
//! The access token, server URL, and cached user identity live in a
//! JSON dotfile in the home directory. The token is read once at client
//! construction; there is no refresh logic.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::UserInfo;

/// Fixed config file name under the home directory.
const CONFIG_FILE: &str = ".vaultlib_config.json";

/// Server URL used when none is configured.
pub const DEFAULT_SERVER: &str = "http://localhost:5000";

/// Saved client state: server URL, bearer token, cached identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub server_url: String,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER.to_string(),
            access_token: None,
            user: None,
        }
    }
}

impl ClientConfig {
    /// Location of the config file (`~/.vaultlib_config.json`).
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE)
    }

    /// Load configuration from a path. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load configuration from the default location.
    pub fn load_default() -> Result<Self> {
        Self::load(&Self::default_path())
    }

    /// Save configuration to a path, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Save configuration to the default location.
    pub fn save_default(&self) -> Result<()> {
        self.save(&Self::default_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config.server_url, DEFAULT_SERVER);
        assert!(config.access_token.is_none());
        assert!(config.user.is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = ClientConfig {
            server_url: "http://vault.example.com".to_string(),
            access_token: Some("tok123".to_string()),
            user: Some(UserInfo {
                id: 1,
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                created_at: None,
            }),
        };
        config.save(&path).unwrap();

        let loaded = ClientConfig::load(&path).unwrap();
        assert_eq!(loaded.server_url, "http://vault.example.com");
        assert_eq!(loaded.access_token.as_deref(), Some("tok123"));
        assert_eq!(loaded.user.unwrap().username, "alice");
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deep/config.json");
        ClientConfig::default().save(&path).unwrap();
        assert!(path.exists());
    }
}
