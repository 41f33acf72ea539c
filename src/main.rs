//! # helper-kit
//!
//! Command-line front end for the `helper_kit` library.
//!
//! ## Usage
//!
//! ```bash
//! # Byte sizes
//! helper-kit size format 1536          # 1.50 KB
//! helper-kit size parse 1.5 kb         # 1536
//!
//! # Local IP of the default route
//! helper-kit ip
//!
//! # Structured output
//! helper-kit --json token
//! ```

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand, SizeCommand};
use colored::Colorize;
use helper_kit::{
    config::{FileConfig, Settings},
    json::read_json_object,
    net::local_ip_via,
    output::Output,
    paths::{clean_path, ensure_dir_with_mode},
    search::filter_fuzzy,
    token::generate_token,
    utils::parse_size,
};
use std::process::exit;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Entry point for the helper-kit application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("{} {err}", "Error:".red());

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// # Errors
///
/// Returns errors from the invoked helper (invalid size strings, filesystem
/// or network failures, unreadable JSON) and from JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Commands::Config { command } = &args.command {
        return handle_config_command(command);
    }

    let settings = load_settings(args.json());
    setup_logging(&args.log_level(&settings));

    let output = run_command(&args, &settings)?;

    if args.json() {
        println!("{}", output.to_json()?);
    } else {
        println!("{output}");
    }

    Ok(())
}

/// Run a non-`config` command and collect its result.
fn run_command(args: &Cli, settings: &Settings) -> Result<Output> {
    let output = match &args.command {
        Commands::Size {
            command: SizeCommand::Format { bytes },
        } => Output::size_format(*bytes),
        Commands::Size { command } => {
            let text = command.parse_text().unwrap_or_default();
            let bytes = parse_size(&text)?;
            Output::size_parse(&text, bytes)
        }
        Commands::Ip => Output::Ip {
            ip: local_ip_via(settings.probe_addr)?,
        },
        Commands::Mkdir { paths } => {
            for path in paths {
                ensure_dir_with_mode(path, settings.dir_mode)?;
            }
            Output::Mkdir {
                ensured: paths.clone(),
            }
        }
        Commands::CleanPath { path } => Output::clean_path(path, clean_path(path)?),
        Commands::Json { path } => Output::Json {
            path: path.clone(),
            value: read_json_object(path)?,
        },
        Commands::Token { .. } => {
            let bytes = args.token_bytes(settings);
            Output::Token {
                token: generate_token(bytes)?,
                bytes,
            }
        }
        Commands::Search { query, items } => Output::Search {
            query: query.clone(),
            matches: filter_fuzzy(query, items)?
                .into_iter()
                .map(str::to_string)
                .collect(),
        },
        Commands::Config { .. } => bail!("config commands are handled separately"),
    };

    Ok(output)
}

/// Install the stderr log subscriber; `RUST_LOG` overrides `default_level`.
fn setup_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .ok();
}

/// Load and resolve the configuration file, falling back to defaults on failure.
fn load_settings(json_mode: bool) -> Settings {
    match FileConfig::load().and_then(|config| Settings::from_file(&config)) {
        Ok(settings) => settings,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e:#}", "Warning: Failed to load config file:".yellow());
            }
            Settings::default()
        }
    }
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# helper-kit configuration
# All values shown are their defaults. Uncomment and change as needed.

[network]
# Address used to pick the outbound route for `helper-kit ip` (no traffic is sent)
# probe_addr = "1.1.1.1:80"

[filesystem]
# Octal mode bits for directories created by `helper-kit mkdir` (umask applies)
# dir_mode = "777"

[token]
# Number of random bytes per token
# bytes = 16

[logging]
# Log level when RUST_LOG is unset (error, warn, info, debug, trace)
# level = "warn"
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config, &Settings::from_file(&config)?));
    Ok(())
}

/// Format the effective settings as a table, marking values not set in the file.
fn format_config(config: &FileConfig, settings: &Settings) -> String {
    fn mark(value: String, is_set: bool) -> String {
        if is_set {
            value
        } else {
            format!("{value}  (default)")
        }
    }

    format!(
        "\
[network]
probe_addr = {probe_addr}

[filesystem]
dir_mode   = {dir_mode}

[token]
bytes      = {bytes}

[logging]
level      = {level}",
        probe_addr = mark(
            format!("\"{}\"", settings.probe_addr),
            config.network.probe_addr.is_some()
        ),
        dir_mode = mark(
            format!("\"{:o}\"", settings.dir_mode),
            config.filesystem.dir_mode.is_some()
        ),
        bytes = mark(settings.token_bytes.to_string(), config.token.bytes.is_some()),
        level = mark(
            format!("\"{}\"", settings.log_level),
            config.logging.level.is_some()
        ),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_template_parses_to_defaults() {
        let config: FileConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert_eq!(Settings::from_file(&config).unwrap(), Settings::default());
    }

    #[test]
    fn test_format_config_marks_defaults() {
        let config: FileConfig = toml::from_str("[token]\nbytes = 32\n").unwrap();
        let settings = Settings::from_file(&config).unwrap();
        let table = format_config(&config, &settings);

        assert!(table.contains("bytes      = 32\n"));
        assert!(table.contains("probe_addr = \"1.1.1.1:80\"  (default)"));
        assert!(table.contains("dir_mode   = \"777\"  (default)"));
    }

    #[test]
    fn test_run_size_commands() {
        let settings = Settings::default();

        let args = Cli::parse_from(["helper-kit", "size", "format", "1048576"]);
        assert_eq!(run_command(&args, &settings).unwrap().to_string(), "1.00 MB");

        let args = Cli::parse_from(["helper-kit", "size", "parse", "2", "KB"]);
        assert_eq!(run_command(&args, &settings).unwrap().to_string(), "2048");

        let args = Cli::parse_from(["helper-kit", "size", "parse", "10 TB"]);
        assert!(run_command(&args, &settings).is_err());
    }

    #[test]
    fn test_run_token_command() {
        let args = Cli::parse_from(["helper-kit", "token", "--bytes", "32"]);
        let output = run_command(&args, &Settings::default()).unwrap();
        assert_eq!(output.to_string().len(), 44);

        let args = Cli::parse_from(["helper-kit", "token", "--bytes", "18446744073709551615"]);
        assert!(run_command(&args, &Settings::default()).is_err());
    }
}
