//! Utility functions and helpers.
//!
//! This module contains the size formatting and parsing helpers.

pub mod size;

pub use size::{SizeUnit, format_size, parse_size};
