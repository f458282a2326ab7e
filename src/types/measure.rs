//! Fixed-point measures for planet attributes.
//!
//! ## Overview
//!
//! Distances (AU) and day lengths (hours) are fractional, but comparing
//! floats invites rounding drift: two sorts of the same data could disagree
//! on ties. Every fractional measure is therefore stored as a u64 scaled by
//! 10^8 and compared exactly as an integer.
//!
//! ## Scale Factor
//!
//! A scale factor of 10^8 (100,000,000) gives 8 decimal places. Anything
//! finer is rounded once, at parse time.
//!
//! ## Examples
//!
//! ```
//! use solar_system::types::measure::{to_fixed, from_fixed};
//!
//! // 1.52366231 AU (Mars)
//! let distance = to_fixed("1.52366231").unwrap();
//! assert_eq!(distance, 152_366_231);
//!
//! assert_eq!(from_fixed(distance), "1.52366231");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Scaling factor for fixed-point measures: 10^8
pub const SCALE: u64 = 100_000_000;

/// Largest whole-unit value that can be represented
pub const MAX_VALUE: u64 = u64::MAX / SCALE;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert a decimal string to fixed-point u64
///
/// # Returns
///
/// * `Some(u64)` - The fixed-point representation
/// * `None` - If parsing fails, the value is negative, or out of range
///
/// # Example
///
/// ```
/// use solar_system::types::measure::to_fixed;
///
/// assert_eq!(to_fixed("1.0"), Some(100_000_000));
/// assert_eq!(to_fixed("24.6229"), Some(2_462_290_000));
/// assert_eq!(to_fixed("0.00000001"), Some(1));
/// ```
pub fn to_fixed(s: &str) -> Option<u64> {
    let decimal = Decimal::from_str(s.trim()).ok()?;
    decimal_to_fixed(decimal)
}

/// Parse a named measure, reporting the field on failure
///
/// # Example
///
/// ```
/// use solar_system::types::measure::parse_measure;
///
/// assert_eq!(parse_measure("distance", "5.2").unwrap(), 520_000_000);
/// assert!(parse_measure("distance", "far").is_err());
/// ```
pub fn parse_measure(field: &'static str, value: &str) -> Result<u64> {
    to_fixed(value).ok_or_else(|| Error::InvalidMeasure {
        field,
        value: value.to_string(),
    })
}

/// Convert a Decimal to fixed-point u64
///
/// Returns `None` if the value is negative or out of range.
pub fn decimal_to_fixed(d: Decimal) -> Option<u64> {
    if d.is_sign_negative() && !d.is_zero() {
        return None;
    }

    let scaled = d.checked_mul(Decimal::from(SCALE))?;
    let rounded = scaled.round_dp(0);
    rounded.to_u64()
}

/// Convert fixed-point u64 to a Decimal
pub fn fixed_to_decimal(value: u64) -> Decimal {
    Decimal::from(value) / Decimal::from(SCALE)
}

/// Convert fixed-point u64 to a string with 8 decimal places
///
/// # Example
///
/// ```
/// use solar_system::types::measure::from_fixed;
///
/// assert_eq!(from_fixed(100_000_000), "1.00000000");
/// assert_eq!(from_fixed(2_462_290_000), "24.62290000");
/// ```
pub fn from_fixed(value: u64) -> String {
    let decimal = fixed_to_decimal(value);
    format!("{:.8}", decimal)
}

/// Convert fixed-point u64 to a human-readable string (trimmed trailing zeros)
///
/// # Example
///
/// ```
/// use solar_system::types::measure::from_fixed_trimmed;
///
/// assert_eq!(from_fixed_trimmed(100_000_000), "1");
/// assert_eq!(from_fixed_trimmed(38_700_000), "0.387");
/// ```
pub fn from_fixed_trimmed(value: u64) -> String {
    let decimal = fixed_to_decimal(value);
    format!("{}", decimal.normalize())
}

// ============================================================================
// Unit Tests
// ============================================================================
