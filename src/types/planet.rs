//! The planet record held by a solar system.
//!
//! ## Fixed-Point Representation
//!
//! Distance from the sun (AU) and day length (Earth hours) are stored as u64
//! scaled by 10^8 (see [`measure`](crate::types::measure)). Moon count is a
//! plain integer. All three compare exactly.

use std::fmt;

use crate::error::Result;
use crate::types::measure::{from_fixed_trimmed, parse_measure};

/// A planet: a name plus three orderable attributes.
///
/// Equality covers every field. Removing a planet from a
/// [`SolarSystem`](crate::SolarSystem) matches on this equality, so an
/// equal-but-distinct value removes the first stored match.
///
/// ## Example
///
/// ```
/// use solar_system::types::Planet;
///
/// let earth = Planet::parse("Earth", "1.0", "24.0", 1).unwrap();
///
/// assert_eq!(earth.name(), "Earth");
/// assert_eq!(earth.distance(), 100_000_000);
/// assert_eq!(earth.day_length(), 2_400_000_000);
/// assert_eq!(earth.moons(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Planet {
    /// Display name
    name: String,

    /// Distance from the sun in AU (fixed-point, scaled by 10^8)
    distance: u64,

    /// Length of one day in Earth hours (fixed-point, scaled by 10^8)
    day_length: u64,

    /// Number of moons
    moons: u32,
}

impl Planet {
    /// Create a planet from raw fixed-point measures
    ///
    /// # Arguments
    ///
    /// * `name` - Display name
    /// * `distance` - Distance from the sun in AU (scaled by 10^8)
    /// * `day_length` - Day length in hours (scaled by 10^8)
    /// * `moons` - Number of moons
    pub fn new(name: impl Into<String>, distance: u64, day_length: u64, moons: u32) -> Self {
        Self {
            name: name.into(),
            distance,
            day_length,
            moons,
        }
    }

    /// Create a planet from decimal strings
    ///
    /// # Errors
    ///
    /// [`Error::InvalidMeasure`](crate::Error::InvalidMeasure) if either
    /// measure is not a non-negative decimal within range.
    pub fn parse(name: impl Into<String>, distance: &str, day_length: &str, moons: u32) -> Result<Self> {
        let distance = parse_measure("distance", distance)?;
        let day_length = parse_measure("day length", day_length)?;
        Ok(Self::new(name, distance, day_length, moons))
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Distance from the sun (fixed-point AU)
    #[inline]
    pub fn distance(&self) -> u64 {
        self.distance
    }

    /// Day length (fixed-point hours)
    #[inline]
    pub fn day_length(&self) -> u64 {
        self.day_length
    }

    #[inline]
    pub fn moons(&self) -> u32 {
        self.moons
    }

    /// Append the canonical byte encoding of this planet to `buf`
    ///
    /// Layout: name length (u64 LE), name bytes (UTF-8), distance (u64 LE),
    /// day length (u64 LE), moons (u32 LE). Used for state roots.
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&(self.name.len() as u64).to_le_bytes());
        buf.extend_from_slice(self.name.as_bytes());
        buf.extend_from_slice(&self.distance.to_le_bytes());
        buf.extend_from_slice(&self.day_length.to_le_bytes());
        buf.extend_from_slice(&self.moons.to_le_bytes());
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Distance From Sun (AU): {}, Day Length (hr): {}, Number of Moons: {})",
            self.name,
            from_fixed_trimmed(self.distance),
            from_fixed_trimmed(self.day_length),
            self.moons,
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_planet_new() {
        let planet = Planet::new("Mars", 152_366_231, 2_462_290_000, 2);

        assert_eq!(planet.name(), "Mars");
        assert_eq!(planet.distance(), 152_366_231);
        assert_eq!(planet.day_length(), 2_462_290_000);
        assert_eq!(planet.moons(), 2);
    }

    #[test]
    fn test_planet_parse() {
        let jupiter = Planet::parse("Jupiter", "5.2", "9.925", 95).unwrap();

        assert_eq!(jupiter.distance(), 520_000_000);
        assert_eq!(jupiter.day_length(), 992_500_000);
        assert_eq!(jupiter, Planet::new("Jupiter", 520_000_000, 992_500_000, 95));
    }

    #[test]
    fn test_planet_parse_rejects_bad_measure() {
        let err = Planet::parse("Nowhere", "1.0", "-3", 0).unwrap_err();
        assert!(matches!(err, Error::InvalidMeasure { field: "day length", .. }));

        let err = Planet::parse("Nowhere", "near", "1.0", 0).unwrap_err();
        assert!(matches!(err, Error::InvalidMeasure { field: "distance", .. }));
    }

    #[test]
    fn test_planet_equality_is_by_value() {
        let a = Planet::new("Venus", 72_300_000, 280_320_000_000, 0);
        let b = Planet::new("Venus", 72_300_000, 280_320_000_000, 0);
        let c = Planet::new("Venus", 72_300_000, 280_320_000_000, 1);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_planet_encoding() {
        let planet = Planet::new("Io", 1, 2, 3);
        let mut buf = Vec::new();
        planet.encode_into(&mut buf);

        // 8 (len) + 2 (name) + 8 + 8 + 4
        assert_eq!(buf.len(), 30);
        assert_eq!(&buf[..8], &2u64.to_le_bytes());
        assert_eq!(&buf[8..10], b"Io");
        assert_eq!(&buf[26..], &3u32.to_le_bytes());
    }

    #[test]
    fn test_planet_display() {
        let earth = Planet::parse("Earth", "1", "24", 1).unwrap();
        assert_eq!(
            earth.to_string(),
            "Earth (Distance From Sun (AU): 1, Day Length (hr): 24, Number of Moons: 1)"
        );
    }
}
