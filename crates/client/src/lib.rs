//! Typed REST client for the EstocaAI backend.
//!
//! The backend is an opaque REST collaborator; this crate owns the wire
//! contract and nothing else. Screen-level state (house selection, paginated
//! search, pantry lists) lives in `estoca-screens` on top of this client.
//!
//! # Authentication
//!
//! Every request carries the raw bearer token in the `Authorization` header
//! (the backend expects the token as-is, without a `Bearer ` prefix). The
//! token is an explicit [`AuthToken`] value passed into each call rather
//! than ambient storage, so callers decide where it comes from.
//!
//! # Example
//!
//! ```rust,ignore
//! use estoca_client::{ApiClient, ApiConfig, AuthToken};
//!
//! let config = ApiConfig::from_env()?;
//! let token = AuthToken::from_env()?;
//! let client = ApiClient::new(&config);
//!
//! let houses = client.list_houses(&token).await?;
//! let details = client.user_details(&token).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod types;

pub use api::ApiClient;
pub use auth::AuthToken;
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, Result};
pub use types::*;
