//! # helper-kit
//!
//! A handful of independent helpers that tend to get rewritten in every
//! project:
//!
//! - [`utils::format_size`] / [`utils::parse_size`]: human-readable byte sizes
//!   (B, KB, MB, GB; binary tiers)
//! - [`search`]: exact index lookup and fuzzy filtering of string lists
//! - [`net::local_ip`]: the local address of the default outbound route
//! - [`paths`]: directory creation, path cleaning, emptiness checks
//! - [`json`]: JSON HTTP replies and JSON file loading
//! - [`token`]: URL-safe random tokens
//!
//! Every fallible helper returns [`Result`]; nothing in the library exits
//! the process.

pub mod config;
pub mod error;
pub mod json;
pub mod net;
pub mod output;
pub mod paths;
pub mod search;
pub mod token;
pub mod utils;

pub use error::{Error, Result};
pub use json::{read_json, read_json_object, reply_json};
pub use net::local_ip;
pub use paths::{clean_path, ensure_dir, ensure_dirs, file_is_empty};
pub use search::{filter_fuzzy, index_of};
pub use token::generate_random_string;
pub use utils::{format_size, parse_size};
