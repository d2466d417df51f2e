//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the panel
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! Errors are never retried; they propagate to the caller unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use pterodactyl_api::clients::{HttpClient, HttpError, HttpMethod};
//!
//! match client.call("application/users/9", HttpMethod::Get, None, false).await {
//!     Ok(response) => println!("User: {}", response.data),
//!     Err(HttpError::Response(e)) => println!("Panel returned {}: {}", e.code, e.message),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::http_response::PanelErrorDetail;

/// Error returned when the panel answers with a non-successful status.
///
/// The `message` is built from the panel's `errors[]` array
/// (`"<code>: <detail>"`, joined with `"; "`). The raw entries are kept in
/// `details`.
///
/// # Example
///
/// ```rust
/// use pterodactyl_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "NotFoundHttpException: The requested resource could not be found on the server.".to_string(),
///     details: Vec::new(),
/// };
///
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Debug, Error)]
#[error("Panel responded with status {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human readable error message assembled from the panel's error entries.
    pub message: String,
    /// The individual error entries returned by the panel.
    pub details: Vec<PanelErrorDetail>,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The panel answered with a non-2xx status code.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The request never reached the panel (DNS, TLS, connection refused, ...).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code associated with this error.
    ///
    /// Failures that never reached the panel report `0`.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Response(e) => e.code,
            Self::InvalidRequest(_) | Self::Network(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_includes_status_code_in_message() {
        let error = HttpResponseError {
            code: 404,
            message: "NotFoundHttpException: not found".to_string(),
            details: Vec::new(),
        };
        assert_eq!(
            error.to_string(),
            "Panel responded with status 404: NotFoundHttpException: not found"
        );
    }

    #[test]
    fn test_status_code_for_response_error() {
        let error = HttpError::Response(HttpResponseError {
            code: 403,
            message: "forbidden".to_string(),
            details: Vec::new(),
        });
        assert_eq!(error.status_code(), 403);
    }

    #[test]
    fn test_status_code_for_invalid_request_is_zero() {
        let error = HttpError::InvalidRequest(InvalidHttpRequestError::MissingBodyType);
        assert_eq!(error.status_code(), 0);
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "PATCH".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot use PATCH without specifying data."
        );
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let http_error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: "test".to_string(),
            details: Vec::new(),
        };
        let _ = http_error;

        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::MissingBodyType;
        let _ = invalid_error;
    }
}
