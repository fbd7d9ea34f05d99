//! Core types for Estoca.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod quantity;

pub use id::*;
pub use quantity::Quantity;
