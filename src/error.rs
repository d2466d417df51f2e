//! Error types for the Pterodactyl API client.
//!
//! This module contains the configuration and connection error types.
//! Transport and resource errors live next to the code that produces them
//! ([`crate::clients::HttpError`], [`crate::rest::ResourceError`]).
//!
//! # Example
//!
//! ```rust
//! use pterodactyl_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

use crate::clients::RestError;

/// Errors that can occur while building a client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid panel API key.")]
    EmptyApiKey,

    /// Panel URL is invalid.
    #[error("Invalid panel URL '{url}'. Please provide a URL with scheme and host (e.g., 'https://panel.example.com').")]
    InvalidPanelUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

/// Error returned when a client facade fails its connectivity check.
///
/// `code` is the HTTP status the panel answered with, or `0` when the panel
/// could not be reached at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Could not connect to the panel (status {code}): {message}")]
pub struct ConnectError {
    /// HTTP status code, `0` if no response was received.
    pub code: u16,
    /// Description of the failure.
    pub message: String,
}

impl ConnectError {
    /// Returns `true` if no response was received.
    #[must_use]
    pub const fn is_unreachable(&self) -> bool {
        self.code == 0
    }
}

impl From<RestError> for ConnectError {
    fn from(error: RestError) -> Self {
        Self {
            code: error.status_code(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpError, HttpResponseError};

    #[test]
    fn test_empty_api_key_error_message() {
        let message = ConfigError::EmptyApiKey.to_string();
        assert!(message.contains("API key cannot be empty"));
    }

    #[test]
    fn test_invalid_panel_url_error_message() {
        let error = ConfigError::InvalidPanelUrl {
            url: "panel.example.com".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("panel.example.com"));
        assert!(message.contains("scheme and host"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "api_key" };
        let message = error.to_string();
        assert!(message.contains("api_key"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyApiKey;
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn test_connect_error_from_rejected_key() {
        let rest_error = RestError::Http(HttpError::Response(HttpResponseError {
            code: 401,
            message: "AuthenticationException: Unauthenticated.".to_string(),
            details: Vec::new(),
        }));

        let error = ConnectError::from(rest_error);

        assert_eq!(error.code, 401);
        assert!(!error.is_unreachable());
        assert!(error.message.contains("Unauthenticated"));
    }
}
