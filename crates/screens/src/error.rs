//! Screen-level error type.

use estoca_client::ApiError;
use thiserror::Error;

/// Errors surfaced by screen operations.
///
/// Remote failures are never retried; the host UI shows them and leaves the
/// screen state as documented on each operation.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// A backend call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The operation referenced an id absent from local state.
    #[error("not found: {0}")]
    NotFound(String),

    /// The operation needs a selected house and none is set.
    #[error("no house selected")]
    NoHouseSelected,

    /// The add-product flow was submitted without a chosen product.
    #[error("no product chosen")]
    NoProductChosen,
}

/// Result type alias for [`ScreenError`].
pub type Result<T> = std::result::Result<T, ScreenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_error_display() {
        let err = ScreenError::NotFound("house 63f2a1".to_string());
        assert_eq!(err.to_string(), "not found: house 63f2a1");

        assert_eq!(
            ScreenError::NoHouseSelected.to_string(),
            "no house selected"
        );
    }
}
