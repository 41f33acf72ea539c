//! Human-readable byte sizes.
//!
//! This module formats byte counts as strings like `"1.50 KB"` and parses
//! such strings back into byte counts. Both directions use binary tiers
//! (1 KB = 1024 B) and stop at GB: larger values keep growing in GB.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Number of bytes in one step between two adjacent tiers.
const TIER_FACTOR: f64 = 1024.0;

/// Pattern accepted by [`parse_size`], applied to the trimmed, uppercased input.
static SIZE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9.]+)\s*(B|KB|MB|GB)$").unwrap_or_else(|e| unreachable!("{e}"))
});

/// One tier of the B → KB → MB → GB progression.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeUnit {
    B,
    KB,
    MB,
    GB,
}

impl SizeUnit {
    /// Position of the unit in the progression (0 for bytes).
    #[must_use]
    pub const fn tier(self) -> i32 {
        match self {
            Self::B => 0,
            Self::KB => 1,
            Self::MB => 2,
            Self::GB => 3,
        }
    }

    /// Number of bytes in one of this unit.
    #[must_use]
    pub const fn multiplier(self) -> u64 {
        1 << (10 * self.tier())
    }

    /// The next larger unit, or `None` for GB.
    #[must_use]
    pub const fn next_tier(self) -> Option<Self> {
        match self {
            Self::B => Some(Self::KB),
            Self::KB => Some(Self::MB),
            Self::MB => Some(Self::GB),
            Self::GB => None,
        }
    }

    /// Look up a unit by its uppercase symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "B" => Some(Self::B),
            "KB" => Some(Self::KB),
            "MB" => Some(Self::MB),
            "GB" => Some(Self::GB),
            _ => None,
        }
    }

    /// The symbol printed after a formatted value.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::B => "B",
            Self::KB => "KB",
            Self::MB => "MB",
            Self::GB => "GB",
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Format a byte count as a human-readable string.
///
/// Values below 1024 are printed as a plain integer followed by `B`.
/// Larger values are divided by 1024 until they drop below 1024 or reach GB,
/// then printed with two decimal places.
///
/// # Examples
///
/// ```
/// # use helper_kit::utils::format_size;
/// assert_eq!(format_size(1023), "1023 B");
/// assert_eq!(format_size(1536), "1.50 KB");
/// assert_eq!(format_size(5 * 1024u64.pow(4)), "5120.00 GB");
/// ```
#[must_use]
pub fn format_size(size: u64) -> String {
    if size < SizeUnit::KB.multiplier() {
        return format!("{size} {}", SizeUnit::B);
    }

    #[allow(clippy::cast_precision_loss)]
    let mut value = size as f64 / TIER_FACTOR;
    let mut unit = SizeUnit::KB;

    while value >= TIER_FACTOR {
        let Some(next) = unit.next_tier() else {
            break;
        };
        value /= TIER_FACTOR;
        unit = next;
    }

    format!("{value:.2} {unit}")
}

/// Parse a human-readable size string into bytes.
///
/// Accepts an integer or decimal number, optional whitespace and one of
/// `B`, `KB`, `MB`, `GB` in any letter case. Surrounding whitespace is
/// ignored. Fractional bytes are truncated toward zero.
///
/// # Examples
///
/// ```
/// # use helper_kit::utils::parse_size;
/// # fn main() -> helper_kit::Result<()> {
/// assert_eq!(parse_size("1.00 KB")?, 1024);
/// assert_eq!(parse_size("1 gb")?, 1_073_741_824);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if:
/// - The input is empty or has extra characters around the size
/// - The unit is not one of `B`, `KB`, `MB`, `GB` (e.g. `"10 TB"`)
/// - The number is malformed (e.g. `"1.2.3 KB"`)
/// - The resulting byte count does not fit in `u64`
pub fn parse_size(text: &str) -> Result<u64> {
    let normalized = text.trim().to_uppercase();

    let Some((number_str, unit)) = split_size(&normalized) else {
        return Err(invalid_format(normalized));
    };

    let Ok(value) = number_str.parse::<f64>() else {
        return Err(invalid_format(normalized));
    };

    scale_to_bytes(value, unit).ok_or_else(|| invalid_format(normalized))
}

/// Split a normalized size string into its numeric part and unit.
fn split_size(normalized: &str) -> Option<(&str, SizeUnit)> {
    let captures = SIZE_PATTERN.captures(normalized)?;
    let number = captures.get(1)?.as_str();
    let unit = SizeUnit::from_symbol(captures.get(2)?.as_str())?;
    Some((number, unit))
}

/// Multiply `value` by the unit and truncate, rejecting results outside `u64`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_to_bytes(value: f64, unit: SizeUnit) -> Option<u64> {
    let bytes = value * TIER_FACTOR.powi(unit.tier());

    #[allow(clippy::cast_precision_loss)]
    let limit = u64::MAX as f64;

    if !bytes.is_finite() || bytes < 0.0 || bytes >= limit {
        return None;
    }

    Some(bytes.trunc() as u64)
}

fn invalid_format(input: String) -> Error {
    tracing::warn!(input = %input, "invalid size to translate");
    Error::InvalidFormat { input }
}
