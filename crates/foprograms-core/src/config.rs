// SPDX-License-Identifier: Apache-2.0

//! Configuration management for foprograms.
//!
//! Provides layered configuration from files and environment variables.
//! Nothing is required: with no file and no variables set, the built-in
//! defaults query `https://api.github.com` with a tolerance of three attempts.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `FOPROGRAMS_`)
//! 2. Config file: `~/.config/foprograms/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Point the CLI at a GitHub Enterprise instance
//! FOPROGRAMS_GITHUB__API_BASE_URL=https://ghe.example.com/api/v3 foprograms octocat
//! ```

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::FoprogramsError;
use crate::github::{GITHUB_API_DOMAIN, TOLERANCE};

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GitHub API settings.
    pub github: GitHubConfig,
}

/// GitHub API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Base URL that request paths are appended to.
    pub api_base_url: String,
    /// Maximum number of request attempts.
    pub tolerance: u32,
    /// API request timeout in seconds.
    pub timeout_seconds: u64,
    /// `User-Agent` header sent with every request (required by the GitHub API).
    pub user_agent: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: GITHUB_API_DOMAIN.to_string(),
            tolerance: TOLERANCE,
            timeout_seconds: 10,
            user_agent: concat!("foprograms/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Returns the foprograms configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/foprograms`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("foprograms");
    }
    dirs::home_dir()
        .unwrap_or_default()
        .join(".config")
        .join("foprograms")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `FOPROGRAMS_` and double underscore
/// for nested keys (e.g., `FOPROGRAMS_GITHUB__TOLERANCE`).
///
/// # Errors
///
/// Returns `FoprogramsError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, FoprogramsError> {
    let config_path = config_file_path();

    let config = Config::builder()
        // Load from config file (optional - may not exist)
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        // Override with environment variables
        .add_source(
            Environment::with_prefix("FOPROGRAMS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}
