//! Ordering rules for sorting a solar system.
//!
//! An ordering rule is any `FnMut(&Planet, &Planet) -> Ordering` that forms
//! a total order. `Ordering::Greater` means the first planet belongs after
//! the second; `Ordering::Equal` planets keep their relative order.
//!
//! The three ready-made rules compare exact fixed-point values, so ties are
//! genuine ties and never artifacts of rounding.

use std::cmp::Ordering;
use std::fmt;

use crate::types::Planet;

/// Ascending distance from the sun
#[inline]
pub fn by_distance(a: &Planet, b: &Planet) -> Ordering {
    a.distance().cmp(&b.distance())
}

/// Ascending day length
#[inline]
pub fn by_day_length(a: &Planet, b: &Planet) -> Ordering {
    a.day_length().cmp(&b.day_length())
}

/// Ascending moon count
#[inline]
pub fn by_moon_count(a: &Planet, b: &Planet) -> Ordering {
    a.moons().cmp(&b.moons())
}

/// The named ordering rules.
///
/// ## Example
///
/// ```
/// use std::cmp::Ordering;
/// use solar_system::system::SortKey;
/// use solar_system::types::Planet;
///
/// let earth = Planet::new("Earth", 100_000_000, 2_400_000_000, 1);
/// let mars = Planet::new("Mars", 152_366_231, 2_462_290_000, 2);
///
/// assert_eq!(SortKey::Distance.compare(&mars, &earth), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Distance from the sun, nearest first
    Distance,
    /// Day length, shortest first
    DayLength,
    /// Moon count, fewest first
    MoonCount,
}

impl SortKey {
    /// All rules, in declaration order
    pub const ALL: [SortKey; 3] = [SortKey::Distance, SortKey::DayLength, SortKey::MoonCount];

    /// Compare two planets under this rule
    #[inline]
    pub fn compare(self, a: &Planet, b: &Planet) -> Ordering {
        match self {
            SortKey::Distance => by_distance(a, b),
            SortKey::DayLength => by_day_length(a, b),
            SortKey::MoonCount => by_moon_count(a, b),
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Distance => "distance from sun",
            SortKey::DayLength => "day length",
            SortKey::MoonCount => "number of moons",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Summary of one sort run.
///
/// A sort on fewer than two planets does no passes. Otherwise the final
/// pass is always the one that found nothing to exchange.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortReport {
    /// Full head-to-tail passes made
    pub passes: usize,

    /// Adjacent comparisons made
    pub comparisons: usize,

    /// Adjacent structural exchanges made
    pub exchanges: usize,
}

impl SortReport {
    /// True if the collection was already in order
    #[inline]
    pub fn was_sorted(&self) -> bool {
        self.exchanges == 0
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(distance: u64, day_length: u64, moons: u32) -> Planet {
        Planet::new("P", distance, day_length, moons)
    }

    #[test]
    fn test_by_distance() {
        let near = planet(38_700_000, 0, 0);
        let far = planet(3_006_992_276, 0, 0);

        assert_eq!(by_distance(&near, &far), Ordering::Less);
        assert_eq!(by_distance(&far, &near), Ordering::Greater);
        assert_eq!(by_distance(&near, &near.clone()), Ordering::Equal);
    }

    #[test]
    fn test_by_day_length_keeps_fractions() {
        // Truncating to whole hours would call these equal
        let a = planet(0, 2_400_000_000, 0);
        let b = planet(0, 2_490_000_000, 0);

        assert_eq!(by_day_length(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_by_moon_count() {
        let earth = planet(0, 0, 1);
        let mars = planet(0, 0, 2);

        assert_eq!(by_moon_count(&earth, &mars), Ordering::Less);
        assert_eq!(by_moon_count(&mars, &mars.clone()), Ordering::Equal);
    }

    #[test]
    fn test_sort_key_dispatch() {
        let a = planet(1, 3, 2);
        let b = planet(2, 2, 2);

        assert_eq!(SortKey::Distance.compare(&a, &b), Ordering::Less);
        assert_eq!(SortKey::DayLength.compare(&a, &b), Ordering::Greater);
        assert_eq!(SortKey::MoonCount.compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_sort_key_display() {
        assert_eq!(SortKey::DayLength.to_string(), "day length");
        assert_eq!(SortKey::ALL.len(), 3);
    }

    #[test]
    fn test_sort_report_was_sorted() {
        assert!(SortReport::default().was_sorted());

        let report = SortReport {
            passes: 2,
            comparisons: 4,
            exchanges: 1,
        };
        assert!(!report.was_sorted());
    }
}
