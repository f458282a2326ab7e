//! # Solar System
//!
//! An ordered collection of planets kept in a doubly-linked list, with
//! removal by value and in-place exchange sorting by a caller-supplied rule.
//!
//! ## Architecture
//!
//! - **Types**: The `Planet` record and fixed-point measures
//! - **System**: The slab-backed linked list, its link operations, and sorting
//!
//! ## Design Principles
//!
//! 1. **Exact comparisons**: Fractional measures are fixed-point (10^8 scaling)
//! 2. **Structural sorting**: Sorts rewire links; planets never move in memory
//! 3. **Stable ordering**: Equal planets are never exchanged
//! 4. **Single owner**: No interior locking; serialize access externally
//!
//! ## Rendering
//!
//! Drawing the system is left to callers. A renderer reads
//! [`SolarSystem::iter`] and the planet accessors; it never holds a
//! reference into the list structure.

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Planet, fixed-point measures
pub mod types;

/// The solar system: linked list, ordering rules, sorting
pub mod system;

/// Error types
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{Error, Result};
pub use system::{SolarSystem, SortKey, SortReport};
pub use types::Planet;
