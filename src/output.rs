//! Command results in human-readable or JSON form.
//!
//! Every CLI command produces one [`Output`]. By default it is printed as
//! plain text; when the `--json` flag is passed it is serialized to stdout as
//! a single JSON object instead, tagged with the command name.

use std::fmt;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::utils::format_size;

/// Result of a single CLI command.
#[derive(Serialize, Debug)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Output {
    /// `size format`
    SizeFormat { bytes: u64, formatted: String },

    /// `size parse`
    SizeParse {
        input: String,
        bytes: u64,
        /// Canonical rendering of `bytes`
        formatted: String,
    },

    /// `ip`
    Ip { ip: IpAddr },

    /// `mkdir`
    Mkdir {
        /// Directories that exist after the command, new or not
        ensured: Vec<PathBuf>,
    },

    /// `clean-path`
    CleanPath { input: PathBuf, path: PathBuf },

    /// `json`
    Json {
        path: PathBuf,
        value: Map<String, Value>,
    },

    /// `token`
    Token { token: String, bytes: usize },

    /// `search`
    Search { query: String, matches: Vec<String> },
}

impl Output {
    /// Output of `size format`.
    #[must_use]
    pub fn size_format(bytes: u64) -> Self {
        Self::SizeFormat {
            bytes,
            formatted: format_size(bytes),
        }
    }

    /// Output of a successful `size parse`.
    #[must_use]
    pub fn size_parse(input: &str, bytes: u64) -> Self {
        Self::SizeParse {
            input: input.to_string(),
            bytes,
            formatted: format_size(bytes),
        }
    }

    /// Output of `clean-path`.
    #[must_use]
    pub fn clean_path(input: &Path, path: PathBuf) -> Self {
        Self::CleanPath {
            input: input.to_path_buf(),
            path,
        }
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if a contained value cannot be represented as JSON
    /// (e.g., a path that is not valid UTF-8).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeFormat { formatted, .. } => write!(f, "{formatted}"),
            Self::SizeParse { bytes, .. } => write!(f, "{bytes}"),
            Self::Ip { ip } => write!(f, "{ip}"),
            Self::Mkdir { ensured } => {
                let lines: Vec<String> = ensured
                    .iter()
                    .map(|p| format!("ready {}", p.display()))
                    .collect();
                write!(f, "{}", lines.join("\n"))
            }
            Self::CleanPath { path, .. } => write!(f, "{}", path.display()),
            Self::Json { value, .. } => {
                let pretty = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
                write!(f, "{pretty}")
            }
            Self::Token { token, .. } => write!(f, "{token}"),
            Self::Search { matches, .. } => write!(f, "{}", matches.join("\n")),
        }
    }
}
