//! Configuration for the command-line front end.
//!
//! [`FileConfig`] mirrors the TOML file on disk; [`Settings`] is the resolved
//! view with every default filled in.

pub mod file;

use std::net::SocketAddr;

use anyhow::{Context, Result};

use crate::net::DEFAULT_PROBE_ADDR;
use crate::paths::DEFAULT_DIR_MODE;
use crate::token::{DEFAULT_TOKEN_BYTES, check_token_len};

pub use file::FileConfig;

/// Log level used when neither the config file nor the CLI sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Effective settings after merging the config file over the defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Address used to select the outbound route for local IP lookup
    pub probe_addr: SocketAddr,

    /// Mode bits for created directories
    pub dir_mode: u32,

    /// Number of random bytes per token
    pub token_bytes: usize,

    /// Default log filter directive
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            probe_addr: DEFAULT_PROBE_ADDR,
            dir_mode: DEFAULT_DIR_MODE,
            token_bytes: DEFAULT_TOKEN_BYTES,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    /// Resolve settings from a loaded config file.
    ///
    /// # Errors
    ///
    /// Returns an error if `probe_addr` is not a `host:port` socket address,
    /// `dir_mode` is not an octal number, or the token `bytes` is above
    /// [`crate::token::MAX_TOKEN_BYTES`].
    pub fn from_file(config: &FileConfig) -> Result<Self> {
        let defaults = Self::default();

        let probe_addr = match config.network.probe_addr.as_deref() {
            Some(addr) => addr
                .parse::<SocketAddr>()
                .with_context(|| format!("Invalid probe_addr {addr:?}"))?,
            None => defaults.probe_addr,
        };

        let dir_mode = match config.filesystem.dir_mode.as_deref() {
            Some(mode) => parse_dir_mode(mode)?,
            None => defaults.dir_mode,
        };

        let token_bytes = config.token.bytes.unwrap_or(defaults.token_bytes);
        check_token_len(token_bytes).context("Invalid token bytes")?;

        Ok(Self {
            probe_addr,
            dir_mode,
            token_bytes,
            log_level: config
                .logging
                .level
                .clone()
                .unwrap_or(defaults.log_level),
        })
    }
}

/// Parse octal mode bits such as `"755"`, `"0755"` or `"0o755"`.
///
/// # Errors
///
/// Returns an error for non-octal input or values above `0o7777`.
pub fn parse_dir_mode(mode: &str) -> Result<u32> {
    let digits = mode.trim();
    let digits = digits.strip_prefix("0o").unwrap_or(digits);

    let value = u32::from_str_radix(digits, 8)
        .with_context(|| format!("Invalid dir_mode {mode:?}: expected octal digits"))?;

    if value > 0o7777 {
        anyhow::bail!("Invalid dir_mode {mode:?}: out of range");
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::from_file(&FileConfig::default()).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.probe_addr.to_string(), "1.1.1.1:80");
        assert_eq!(settings.dir_mode, 0o777);
        assert_eq!(settings.token_bytes, 16);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_settings_from_file_values() {
        let config: FileConfig = toml::from_str(
            r#"
[network]
probe_addr = "[::1]:53"

[filesystem]
dir_mode = "0o750"

[token]
bytes = 4

[logging]
level = "trace"
"#,
        )
        .unwrap();

        let settings = Settings::from_file(&config).unwrap();
        assert_eq!(settings.probe_addr.to_string(), "[::1]:53");
        assert_eq!(settings.dir_mode, 0o750);
        assert_eq!(settings.token_bytes, 4);
        assert_eq!(settings.log_level, "trace");
    }

    #[test]
    fn test_settings_invalid_probe_addr() {
        let config: FileConfig =
            toml::from_str("[network]\nprobe_addr = \"not an address\"\n").unwrap();
        assert!(Settings::from_file(&config).is_err());
    }

    #[test]
    fn test_settings_rejects_oversized_token_bytes() {
        let config: FileConfig = toml::from_str("[token]\nbytes = 1025\n").unwrap();
        let err = Settings::from_file(&config).unwrap_err();
        assert!(format!("{err:#}").contains("exceeds the maximum of 1024"));

        let config: FileConfig = toml::from_str("[token]\nbytes = 1024\n").unwrap();
        assert_eq!(Settings::from_file(&config).unwrap().token_bytes, 1024);
    }

    #[test]
    fn test_parse_dir_mode() {
        assert_eq!(parse_dir_mode("755").unwrap(), 0o755);
        assert_eq!(parse_dir_mode("0755").unwrap(), 0o755);
        assert_eq!(parse_dir_mode("0o700").unwrap(), 0o700);
        assert!(parse_dir_mode("789").is_err());
        assert!(parse_dir_mode("rwx").is_err());
        assert!(parse_dir_mode("17777").is_err());
    }
}
