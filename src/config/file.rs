//! Configuration file support for persistent settings.
//!
//! This module loads configuration from a TOML file located at
//! `~/.config/helper-kit/config.toml` (or the platform-specific equivalent).
//! Configuration file values serve as defaults that can be overridden by CLI
//! arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! [network]
//! probe_addr = "1.1.1.1:80"
//!
//! [filesystem]
//! dir_mode = "755"
//!
//! [token]
//! bytes = 32
//!
//! [logging]
//! level = "info"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    /// Local IP lookup options
    #[serde(default)]
    pub network: FileNetworkConfig,

    /// Directory creation options
    #[serde(default)]
    pub filesystem: FileFilesystemConfig,

    /// Random token options
    #[serde(default)]
    pub token: FileTokenConfig,

    /// Log output options
    #[serde(default)]
    pub logging: FileLoggingConfig,
}

/// Network options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileNetworkConfig {
    /// Address used to select the outbound route (e.g., `"1.1.1.1:80"`)
    pub probe_addr: Option<String>,
}

/// Filesystem options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileFilesystemConfig {
    /// Octal mode bits for created directories (e.g., `"755"`)
    pub dir_mode: Option<String>,
}

/// Token options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileTokenConfig {
    /// Number of random bytes per token
    pub bytes: Option<usize>,
}

/// Logging options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileLoggingConfig {
    /// Default log level (`"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`)
    pub level: Option<String>,
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/helper-kit/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("helper-kit").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// contains invalid TOML.
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        Self::load_from(&path)
    }

    /// Load configuration from an explicit path.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }
}
