//! Core data types for the solar system
//!
//! ## Types
//!
//! - [`Planet`]: The record held by a solar system
//!
//! ## Fixed-Point Measures
//!
//! Fractional planet attributes are stored as `u64` scaled by 10^8.
//! Example: 1.52366231 AU is stored as 152_366_231u64

mod planet;
pub mod measure;

pub use planet::Planet;
