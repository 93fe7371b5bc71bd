//! Configuration for rfpctl.
//!
//! Loaded from `~/.rfpctl/config.toml` with environment overrides. A missing
//! file is not an error: the source system ran against a fixed local address
//! with zero configuration, so every field has a built-in default.
//!
//! Environment variables:
//!   RFPCTL_BASE_URL        Override the server base URL
//!   RFPCTL_SINGLE_FLIGHT   "1"/"true" to ignore submissions while one is pending

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RfpError};

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Top-level rfpctl configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RfpctlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

/// Where the RFP service lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Client-side behavior knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Ignore a new submission while one is already in flight.
    ///
    /// Off by default: the source system allowed duplicate, uncoordinated
    /// requests (double-clicking "Send" sent twice).
    #[serde(default)]
    pub single_flight: bool,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            single_flight: false,
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for RfpctlConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            client: ClientConfig::default(),
        }
    }
}

impl RfpctlConfig {
    /// Load config from `~/.rfpctl/config.toml`, falling back to defaults
    /// when the file does not exist, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load config from an explicit path (defaults if absent)
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            RfpError::config(format!("failed to read config file {path:?}: {e}"))
        })?;

        toml::from_str(&content)
            .map_err(|e| RfpError::config(format!("invalid TOML in {path:?}: {e}")))
    }

    /// Get config file path: `~/.rfpctl/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rfpctl/config.toml")
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = env::var("RFPCTL_BASE_URL") {
            if !url.is_empty() {
                self.server.base_url = url;
            }
        }
        if let Ok(flag) = env::var("RFPCTL_SINGLE_FLIGHT") {
            self.client.single_flight = matches!(flag.as_str(), "1" | "true" | "yes");
        }
    }

    /// Save config to its default path, creating the directory if needed
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                RfpError::config(format!("failed to create {parent:?}: {e}"))
            })?;
        }

        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| RfpError::config(format!("failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_str).map_err(|e| {
            RfpError::config(format!("failed to write config file {config_path:?}: {e}"))
        })
    }
}
