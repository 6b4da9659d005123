//! Cadence Core - Foundational types for the Cadence frame runtime
//!
//! This crate provides the types that the other Cadence crates depend on:
//! - `Vec2` - 2D value type for pointer positions, deltas and scroll
//! - Error types and Result alias

mod error;
mod types;

pub use error::{CadenceError, Result};
pub use types::Vec2;
