use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Type name prefix the provider registers under
pub const PROVIDER_TYPE_NAME: &str = "pfsense";

/// Default timeout for a single data source read in milliseconds (60 seconds)
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 60_000;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Provider configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProviderConfig {
    /// Upper bound on a single read in milliseconds
    pub read_timeout_ms: u64,
    pub log: LogConfig,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            log: LogConfig::default(),
        }
    }
}

impl ProviderConfig {
    /// Loads configuration from a JSON file, filling missing fields with defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

/// Logging-related configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// EnvFilter directive used when RUST_LOG is not set
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Returns the path to the data directory for pfsense-provider.
/// Uses $XDG_DATA_HOME/pfsense-provider if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/pfsense-provider,
/// or ./pfsense-provider if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("pfsense-provider.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("pfsense-provider")
}
