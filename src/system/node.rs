//! Planet node for slab-based storage.
//!
//! ## Design
//!
//! `PlanetNode` wraps a `Planet` with doubly-linked list pointers. The
//! pointers are slab keys rather than references, so the slab owns every
//! node outright and the links carry no ownership.
//!
//! ## Linked List
//!
//! - `next`: the node after this one (toward the tail)
//! - `prev`: the node before this one (toward the head)

use crate::types::Planet;

/// Planet node stored in the slab.
///
/// Contains the planet plus linked-list pointers (slab keys).
#[derive(Debug, Clone)]
pub struct PlanetNode {
    /// The planet record
    pub planet: Planet,

    /// Next node toward the tail (slab key)
    /// None if this is the tail
    pub next: Option<usize>,

    /// Previous node toward the head (slab key)
    /// None if this is the head
    pub prev: Option<usize>,
}

impl PlanetNode {
    /// Create a new, unlinked planet node
    ///
    /// # Example
    ///
    /// ```
    /// use solar_system::system::PlanetNode;
    /// use solar_system::types::Planet;
    ///
    /// let node = PlanetNode::new(Planet::new("Earth", 100_000_000, 2_400_000_000, 1));
    ///
    /// assert!(node.next.is_none());
    /// assert!(node.prev.is_none());
    /// ```
    #[inline]
    pub fn new(planet: Planet) -> Self {
        Self {
            planet,
            next: None,
            prev: None,
        }
    }

    /// Check if this node is unlinked (no neighbours)
    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }

    /// Consume the node, yielding its planet
    #[inline]
    pub fn into_planet(self) -> Planet {
        self.planet
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_planet(name: &str) -> Planet {
        Planet::new(name, 100_000_000, 2_400_000_000, 1)
    }

    #[test]
    fn test_planet_node_new() {
        let planet = create_test_planet("Earth");
        let node = PlanetNode::new(planet.clone());

        assert_eq!(node.planet, planet);
        assert!(node.is_unlinked());
    }

    #[test]
    fn test_planet_node_linking() {
        let mut node = PlanetNode::new(create_test_planet("Earth"));

        node.next = Some(2);
        assert!(!node.is_unlinked());

        node.prev = Some(0);
        assert!(!node.is_unlinked());

        // Only one link
        node.next = None;
        assert!(!node.is_unlinked());

        node.prev = None;
        assert!(node.is_unlinked());
    }

    #[test]
    fn test_planet_node_into_planet() {
        let planet = create_test_planet("Earth");
        let node = PlanetNode::new(planet.clone());

        assert_eq!(node.into_planet(), planet);
    }
}
