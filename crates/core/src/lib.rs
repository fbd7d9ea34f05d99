//! Estoca Core - Shared types library.
//!
//! This crate provides common types used across all Estoca components:
//! - `client` - Typed REST client for the EstocaAI backend
//! - `screens` - Client-state protocols behind the app screens
//! - `cli` - Command-line driver for the flows
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and quantities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
