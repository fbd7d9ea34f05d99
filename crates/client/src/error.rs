//! Error type for backend API calls.

use thiserror::Error;

/// Errors that can occur when talking to the EstocaAI backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No API token is available; the user is not authenticated.
    #[error("not authenticated: no API token available")]
    Unauthenticated,

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned by the backend.
        message: String,
    },

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type alias for [`ApiError`].
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Api {
            status: 404,
            message: "Casa nao encontrada".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 404 - Casa nao encontrada");

        let err = ApiError::Unauthenticated;
        assert_eq!(
            err.to_string(),
            "not authenticated: no API token available"
        );
    }
}
