//! Prelude module for julian_day crate.
//!
//! Re-exports the derive macros used across the crate.

pub use derive_more::Display;
