//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, options, and their validation
//! using the [clap](https://docs.rs/clap/) library.
//!
//! Helper methods on [`Cli`] accept a [`Settings`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use helper_kit::config::Settings;

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format or parse human-readable byte sizes (B, KB, MB, GB; 1 KB = 1024 B)
    Size {
        #[command(subcommand)]
        command: SizeCommand,
    },

    /// Print the local IP address of the default outbound route
    ///
    /// No traffic is sent; the operating system only selects a route
    /// towards the probe address (1.1.1.1:80 unless configured otherwise).
    Ip,

    /// Create one or more directories, including missing parents
    Mkdir {
        /// Directories to create
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Print the absolute, cleaned form of a path
    ///
    /// Expands a leading `~`, resolves relative paths against the current
    /// directory and folds `.` and `..` components. Symlinks are not resolved.
    CleanPath {
        /// Path to clean
        path: PathBuf,
    },

    /// Load a JSON file whose top level is an object and pretty-print it
    Json {
        /// JSON file to read
        path: PathBuf,
    },

    /// Print a URL-safe random token (padded base64url)
    Token {
        /// Number of random bytes to encode (default: 16)
        #[arg(short = 'b', long)]
        bytes: Option<usize>,
    },

    /// Print the items that loosely match a query, one per line
    ///
    /// Each word of the query must appear in the item, in order, ignoring case.
    Search {
        /// Words to look for
        query: String,

        /// Candidate strings
        #[arg(num_args = 0..)]
        items: Vec<String>,
    },

    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `size`.
#[derive(Subcommand, Debug)]
pub enum SizeCommand {
    /// Format a byte count, e.g. `1536` -> `1.50 KB`
    Format {
        /// Number of bytes
        bytes: u64,
    },

    /// Parse a size string into bytes, e.g. `1.5 KB` -> `1536`
    ///
    /// The number and unit may be passed as one argument or two.
    Parse {
        /// Size string (`<number> <B|KB|MB|GB>`, case-insensitive)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
#[derive(Parser, Debug)]
#[command(name = "helper-kit")]
#[command(
    about = "Small standalone helpers: byte sizes, local IP, directories, paths, JSON and random tokens"
)]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output results as a single JSON object for scripting/piping
    #[arg(long, global = true)]
    json: bool,

    /// Log debug details to stderr
    ///
    /// Overrides the configured log level. `RUST_LOG` still takes precedence.
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

impl Cli {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Log filter directive: `--verbose` > config file > default.
    #[must_use]
    pub fn log_level(&self, settings: &Settings) -> String {
        if self.verbose {
            "debug".to_string()
        } else {
            settings.log_level.clone()
        }
    }

    /// Token size in bytes: `--bytes` > config file > default.
    #[must_use]
    pub fn token_bytes(&self, settings: &Settings) -> usize {
        match self.command {
            Commands::Token { bytes: Some(bytes) } => bytes,
            _ => settings.token_bytes,
        }
    }
}

impl SizeCommand {
    /// The size string of `size parse`, with separate arguments joined by a space.
    #[must_use]
    pub fn parse_text(&self) -> Option<String> {
        match self {
            Self::Parse { text } => Some(text.join(" ")),
            Self::Format { .. } => None,
        }
    }
}
