//! Solar system module: the doubly-linked planet collection.
//!
//! ## Architecture
//!
//! - **Slab-based storage**: every node lives in one arena; links are keys
//! - **Chain**: head/tail bookkeeping and structural link operations
//! - **Exchange sort**: repeated adjacent-swap passes over the links
//!
//! ## Components
//!
//! - [`PlanetNode`]: Wrapper around `Planet` with linked-list pointers
//! - [`Chain`]: Head/tail/length metadata and link surgery
//! - [`SortKey`]: The named ordering rules
//! - [`SolarSystem`]: The collection itself
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Add planet | O(1) |
//! | Remove planet | O(n) scan + O(1) splice |
//! | Sort | O(n²) worst case, O(n) if already sorted |
//! | Iterate | O(n) |

pub mod node;
pub mod chain;
pub mod ordering;
pub mod solar;

pub use node::PlanetNode;
pub use chain::Chain;
pub use ordering::{by_day_length, by_distance, by_moon_count, SortKey, SortReport};
pub use solar::{Iter, SolarSystem};
