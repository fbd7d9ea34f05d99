//! Bearer token credential.

use secrecy::{ExposeSecret, SecretString};

use crate::error::ApiError;

/// Environment variable holding the API token.
const TOKEN_ENV_VAR: &str = "ESTOCA_API_TOKEN";

/// Bearer token for the EstocaAI backend.
///
/// The token is an explicit credential value threaded through API calls
/// rather than read from ambient storage. The backend expects the raw token
/// in the `Authorization` header, without a `Bearer ` prefix.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct AuthToken(SecretString);

impl AuthToken {
    /// Create a token from a raw string.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthenticated`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ApiError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ApiError::Unauthenticated);
        }
        Ok(Self(SecretString::from(token)))
    }

    /// Read the token from the `ESTOCA_API_TOKEN` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthenticated`] if the variable is unset or
    /// empty.
    pub fn from_env() -> Result<Self, ApiError> {
        let token = std::env::var(TOKEN_ENV_VAR).map_err(|_| ApiError::Unauthenticated)?;
        Self::new(token)
    }

    /// Expose the raw token for the `Authorization` header.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AuthToken").field(&"[REDACTED]").finish()
    }
}
