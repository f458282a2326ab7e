//! The solar system: an ordered, doubly-linked collection of planets.
//!
//! ## Architecture
//!
//! - **Slab**: owns every `PlanetNode`; slab keys serve as link pointers
//! - **Chain**: head/tail/length bookkeeping over the slab
//!
//! Nodes are created only by [`SolarSystem::add`] and destroyed only by
//! [`SolarSystem::remove`]. Sorting rewires links and never moves a planet
//! between slab slots.
//!
//! ## Example
//!
//! ```
//! use solar_system::SolarSystem;
//! use solar_system::types::Planet;
//!
//! let mut system = SolarSystem::new();
//! system.add(Planet::new("A", 100_000_000, 0, 0));
//! system.add(Planet::new("B", 300_000_000, 0, 0));
//! system.add(Planet::new("C", 200_000_000, 0, 0));
//!
//! system.sort_by_distance();
//!
//! let names: Vec<&str> = system.iter().map(|p| p.name()).collect();
//! assert_eq!(names, ["A", "C", "B"]);
//! ```

use std::cmp::Ordering;
use std::iter::FusedIterator;

use sha2::{Digest, Sha256};
use slab::Slab;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::system::{Chain, PlanetNode, SortKey, SortReport};
use crate::types::Planet;

/// An ordered collection of planets backed by a doubly-linked list.
///
/// Not designed for concurrent mutation: callers that share a system
/// across threads must serialize access externally.
#[derive(Debug, Default)]
pub struct SolarSystem {
    /// Node storage
    nodes: Slab<PlanetNode>,

    /// Link metadata
    chain: Chain,
}

impl SolarSystem {
    /// Create a new empty solar system
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            chain: Chain::new(),
        }
    }

    /// Create a solar system with pre-allocated node storage
    ///
    /// # Example
    ///
    /// ```
    /// use solar_system::SolarSystem;
    ///
    /// let system = SolarSystem::with_capacity(16);
    /// assert!(system.capacity() >= 16);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            chain: Chain::new(),
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Number of planets in the system
    #[inline]
    pub fn len(&self) -> usize {
        self.chain.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// The planet at the head, if any
    pub fn first(&self) -> Option<&Planet> {
        self.chain.head.map(|key| &self.nodes[key].planet)
    }

    /// The planet at the tail, if any
    pub fn last(&self) -> Option<&Planet> {
        self.chain.tail.map(|key| &self.nodes[key].planet)
    }

    // ========================================================================
    // Structural Operations
    // ========================================================================

    /// Append a planet at the tail
    pub fn add(&mut self, planet: Planet) {
        debug!(planet = planet.name(), len = self.len() + 1, "adding planet");

        let key = self.nodes.insert(PlanetNode::new(planet));
        self.chain.push_back(key, &mut self.nodes);
    }

    /// Remove the first planet (from the head) equal to `planet`
    ///
    /// # Returns
    ///
    /// `true` if a planet was removed, `false` if none matched. The system
    /// is unchanged when nothing matches.
    ///
    /// # Example
    ///
    /// ```
    /// use solar_system::SolarSystem;
    /// use solar_system::types::Planet;
    ///
    /// let pluto = Planet::new("Pluto", 3_948_000_000, 15_330_000_000, 5);
    /// let mut system = SolarSystem::new();
    /// system.add(pluto.clone());
    ///
    /// assert!(system.remove(&pluto));
    /// assert!(!system.remove(&pluto));
    /// assert!(system.is_empty());
    /// ```
    pub fn remove(&mut self, planet: &Planet) -> bool {
        self.try_remove(planet).is_ok()
    }

    /// Remove the first planet equal to `planet`, returning the stored value
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no planet matches.
    pub fn try_remove(&mut self, planet: &Planet) -> Result<Planet> {
        let Some(key) = self.find_key(planet) else {
            debug!(planet = planet.name(), "planet not found for removal");
            return Err(Error::NotFound(planet.name().to_string()));
        };

        self.chain.unlink(key, &mut self.nodes);
        let removed = self.nodes.remove(key).into_planet();

        debug!(planet = removed.name(), len = self.len(), "removed planet");
        Ok(removed)
    }

    /// Remove every planet
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.chain = Chain::new();
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Linear scan from the head for the first node equal to `planet`
    fn find_key(&self, planet: &Planet) -> Option<usize> {
        let mut cursor = self.chain.head;
        while let Some(key) = cursor {
            let node = &self.nodes[key];
            if node.planet == *planet {
                return Some(key);
            }
            cursor = node.next;
        }
        None
    }

    /// Check if a planet equal to `planet` is in the system
    pub fn contains(&self, planet: &Planet) -> bool {
        self.find_key(planet).is_some()
    }

    /// Position (from the head) of the first planet equal to `planet`
    pub fn position(&self, planet: &Planet) -> Option<usize> {
        self.iter().position(|p| p == planet)
    }

    // ========================================================================
    // Sorting
    // ========================================================================

    /// Sort in place with a caller-supplied ordering rule
    ///
    /// Repeated exchange passes: each pass walks head to tail comparing
    /// adjacent planets, and exchanges a pair whenever the rule says the
    /// first belongs after the second. Passes repeat until one makes no
    /// exchange. Equal planets are never exchanged, so the sort is stable.
    ///
    /// Fewer than two planets is a no-op.
    ///
    /// # Example
    ///
    /// ```
    /// use solar_system::SolarSystem;
    /// use solar_system::types::Planet;
    ///
    /// let mut system: SolarSystem = [
    ///     Planet::new("Saturn", 0, 0, 146),
    ///     Planet::new("Earth", 0, 0, 1),
    /// ].into_iter().collect();
    ///
    /// // Most moons first
    /// let report = system.sort(|a, b| b.moons().cmp(&a.moons()));
    ///
    /// assert_eq!(report.exchanges, 0);
    /// assert_eq!(system.first().unwrap().name(), "Saturn");
    /// ```
    pub fn sort<F>(&mut self, mut rule: F) -> SortReport
    where
        F: FnMut(&Planet, &Planet) -> Ordering,
    {
        let mut report = SortReport::default();
        if self.len() < 2 {
            return report;
        }

        loop {
            report.passes += 1;
            let mut exchanged = 0;
            let mut current = self.chain.head;

            while let Some(key) = current {
                let Some(next) = self.nodes[key].next else {
                    break;
                };

                report.comparisons += 1;
                if rule(&self.nodes[key].planet, &self.nodes[next].planet) == Ordering::Greater {
                    // `key` moves one step toward the tail; keep following it
                    self.chain.swap_with_next(key, &mut self.nodes);
                    exchanged += 1;
                } else {
                    current = Some(next);
                }
            }

            trace!(pass = report.passes, exchanged, "sort pass complete");
            report.exchanges += exchanged;

            if exchanged == 0 {
                break;
            }
        }

        debug!(
            len = self.len(),
            passes = report.passes,
            comparisons = report.comparisons,
            exchanges = report.exchanges,
            "sorted solar system"
        );
        report
    }

    /// Sort by one of the named ordering rules
    pub fn sort_with(&mut self, key: SortKey) -> SortReport {
        debug!(%key, "sorting by named rule");
        self.sort(|a, b| key.compare(a, b))
    }

    /// Sort by ascending distance from the sun
    pub fn sort_by_distance(&mut self) -> SortReport {
        self.sort_with(SortKey::Distance)
    }

    /// Sort by ascending day length
    pub fn sort_by_day_length(&mut self) -> SortReport {
        self.sort_with(SortKey::DayLength)
    }

    /// Sort by ascending moon count
    pub fn sort_by_moon_count(&mut self) -> SortReport {
        self.sort_with(SortKey::MoonCount)
    }

    /// Check that no adjacent pair is out of order under `rule`
    pub fn is_sorted_by<F>(&self, mut rule: F) -> bool
    where
        F: FnMut(&Planet, &Planet) -> Ordering,
    {
        let mut iter = self.iter();
        let Some(mut prev) = iter.next() else {
            return true;
        };
        for planet in iter {
            if rule(prev, planet) == Ordering::Greater {
                return false;
            }
            prev = planet;
        }
        true
    }

    // ========================================================================
    // Traversal and Verification
    // ========================================================================

    /// Iterate over the planets from head to tail
    ///
    /// The iterator is double-ended; `.rev()` walks tail to head.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            front: self.chain.head,
            back: self.chain.tail,
            remaining: self.chain.len,
        }
    }

    /// Verify the structural invariants of the underlying list
    pub fn validate(&self) -> Result<()> {
        self.chain.validate(&self.nodes)
    }

    /// SHA-256 over the canonical encoding of every planet, in order
    ///
    /// Equal ordered contents give equal roots regardless of how the
    /// system got there.
    pub fn state_root(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        let mut buf = Vec::with_capacity(64);

        hasher.update((self.len() as u64).to_le_bytes());
        for planet in self.iter() {
            buf.clear();
            planet.encode_into(&mut buf);
            hasher.update(&buf);
        }

        let result = hasher.finalize();
        let mut root = [0u8; 32];
        root.copy_from_slice(&result);
        root
    }

    /// State root as a hex string
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root())
    }
}

impl FromIterator<Planet> for SolarSystem {
    fn from_iter<I: IntoIterator<Item = Planet>>(iter: I) -> Self {
        let mut system = SolarSystem::new();
        system.extend(iter);
        system
    }
}

impl Extend<Planet> for SolarSystem {
    fn extend<I: IntoIterator<Item = Planet>>(&mut self, iter: I) {
        for planet in iter {
            self.add(planet);
        }
    }
}

impl<'a> IntoIterator for &'a SolarSystem {
    type Item = &'a Planet;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Iterator
// ============================================================================

/// Head-to-tail iterator over the planets of a [`SolarSystem`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    nodes: &'a Slab<PlanetNode>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Planet;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.planet)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.planet)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

// ============================================================================
// Unit Tests
// ============================================================================
