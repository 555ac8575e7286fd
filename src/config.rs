use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::platform::IdentifierOverrides;
use crate::version::extractors::play_store::DEFAULT_VERSION_LABEL;
use crate::version::stores::{app_store, play_store};

/// Timeout for a single store request in milliseconds (30 seconds)
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 30_000;

/// User agent sent with store requests
pub const DEFAULT_USER_AGENT: &str = "store-version-check";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Checker configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerConfig {
    /// Per-request timeout in milliseconds, 0 disables the timeout
    pub timeout_ms: u64,
    pub user_agent: String,
    pub app_store: AppStoreConfig,
    pub play_store: PlayStoreConfig,
    pub identifiers: IdentifierOverrides,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            app_store: AppStoreConfig::default(),
            play_store: PlayStoreConfig::default(),
            identifiers: IdentifierOverrides::default(),
        }
    }
}

impl CheckerConfig {
    /// Load configuration from a JSON file, using defaults for missing fields
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// App Store lookup configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AppStoreConfig {
    pub base_url: String,
    /// Storefront country code, the lookup API defaults to the US store
    pub country: Option<String>,
}

impl Default for AppStoreConfig {
    fn default() -> Self {
        Self {
            base_url: app_store::DEFAULT_BASE_URL.to_string(),
            country: None,
        }
    }
}

/// Play store page configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayStoreConfig {
    pub base_url: String,
    /// Caption of the version row on the details page
    pub version_label: String,
}

impl Default for PlayStoreConfig {
    fn default() -> Self {
        Self {
            base_url: play_store::DEFAULT_BASE_URL.to_string(),
            version_label: DEFAULT_VERSION_LABEL.to_string(),
        }
    }
}

/// Returns the path to the data directory for store-version-check.
/// Uses $XDG_DATA_HOME/store-version-check if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/store-version-check,
/// or ./store-version-check if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("store-version-check.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("store-version-check")
}
