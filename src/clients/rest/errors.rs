//! REST-specific error types.
//!
//! - [`RestError::InvalidPath`]: When a REST API path fails validation
//! - [`RestError::Http`]: Wraps underlying HTTP errors

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// # Example
///
/// ```rust
/// use pterodactyl_api::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST API path is invalid (e.g., empty after normalization).
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns the HTTP status code associated with this error.
    ///
    /// Errors raised before a request was sent report `0`.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidPath { .. } => 0,
            Self::Http(e) => e.status_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_invalid_path_error_with_empty_path() {
        let error = RestError::InvalidPath {
            path: String::new(),
        };
        assert_eq!(error.to_string(), "Invalid REST API path: ");
        assert_eq!(error.status_code(), 0);
    }

    #[test]
    fn test_from_http_error_conversion() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 500,
            message: "Internal Server Error".to_string(),
            details: Vec::new(),
        });

        let rest_error: RestError = http_error.into();

        assert!(matches!(rest_error, RestError::Http(_)));
        assert_eq!(rest_error.status_code(), 500);
        assert!(rest_error.to_string().contains("Internal Server Error"));
    }
}
