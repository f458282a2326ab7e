//! Error types for the solar system.

use thiserror::Error;

/// Result type for solar system operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or mutating a solar system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No planet equal to the requested one is in the system.
    #[error("planet not found: {0}")]
    NotFound(String),

    /// A decimal measure could not be parsed into fixed-point.
    #[error("invalid {field}: {value:?}")]
    InvalidMeasure {
        field: &'static str,
        value: String,
    },

    /// A node's neighbour does not point back at it.
    #[error("broken link at node {key}: {detail}")]
    BrokenLink {
        key: usize,
        detail: &'static str,
    },

    /// The head node has a predecessor.
    #[error("head node {0} has a predecessor")]
    HeadHasPredecessor(usize),

    /// The tail node has a successor.
    #[error("tail node {0} has a successor")]
    TailHasSuccessor(usize),

    /// Walking the links visited a different number of nodes than recorded.
    #[error("chain length mismatch: expected {expected}, walked {walked}")]
    LengthMismatch {
        expected: usize,
        walked: usize,
    },
}
