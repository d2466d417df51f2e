//! Resource-specific error types for panel API operations.
//!
//! This module contains error types for resource operations, extending
//! the base [`RestError`](crate::clients::RestError) with resource-specific
//! semantics like `NotFound` and `ValidationFailed`.
//!
//! # Error Handling
//!
//! Panel status codes map to semantic error variants:
//!
//! - **404**: [`ResourceError::NotFound`] - Resource doesn't exist
//! - **422**: [`ResourceError::ValidationFailed`] - Validation errors keyed by field
//! - **Other 4xx/5xx**: [`ResourceError::Rest`] - Wrapped transport error
//!
//! Nothing is retried. Every error reaches the caller with the status code
//! the panel answered with, available through [`ResourceError::status_code`].
//!
//! # Example
//!
//! ```rust,ignore
//! use pterodactyl_api::rest::{PanelResource, ResourceError};
//! use pterodactyl_api::rest::resources::User;
//!
//! match User::find(&client, 9).await {
//!     Ok(user) => println!("Found: {}", user.username),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("{resource} with id {id} not found");
//!     }
//!     Err(ResourceError::ValidationFailed { errors }) => {
//!         for (field, messages) in errors {
//!             println!("{field}: {messages:?}");
//!         }
//!     }
//!     Err(e) => println!("Other error ({}): {e}", e.status_code()),
//! }
//! ```

use std::collections::HashMap;

use crate::clients::{HttpError, PanelErrorDetail, RestError};
use thiserror::Error;

/// Key used for validation errors the panel does not attribute to a field.
const BASE_FIELD: &str = "base";

/// Error type for resource operations.
///
/// # Example
///
/// ```rust
/// use pterodactyl_api::rest::ResourceError;
///
/// let error = ResourceError::NotFound {
///     resource: "Server",
///     id: "14".to_string(),
/// };
/// assert!(error.to_string().contains("Server"));
/// assert_eq!(error.status_code(), 404);
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., "Server", "Node").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// The panel rejected the request body (HTTP 422).
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// A map of field names to error messages.
        errors: HashMap<String, Vec<String>>,
    },

    /// The resource does not support the operation, or an ID needed to
    /// build its path is unknown.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "find", "all", "delete").
        operation: &'static str,
    },

    /// An attribute bag could not be mapped onto the entity.
    #[error("Failed to hydrate {resource}: {message}")]
    Hydration {
        /// The type name of the resource.
        resource: &'static str,
        /// The deserializer's description of the mismatch.
        message: String,
    },

    /// A request body could not be serialized.
    #[error("Failed to serialize request body: {message}")]
    Serialization {
        /// The serializer's description of the failure.
        message: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Maps a transport failure onto a semantic error variant.
    ///
    /// - 404 -> `NotFound`
    /// - 422 -> `ValidationFailed` (grouped by `meta.source_field`)
    /// - anything else is wrapped unchanged in `Rest`
    ///
    /// # Example
    ///
    /// ```rust
    /// use pterodactyl_api::clients::{HttpError, HttpResponseError, RestError};
    /// use pterodactyl_api::rest::ResourceError;
    ///
    /// let rest_error = RestError::Http(HttpError::Response(HttpResponseError {
    ///     code: 404,
    ///     message: "NotFoundHttpException: not found".to_string(),
    ///     details: Vec::new(),
    /// }));
    ///
    /// let error = ResourceError::from_rest_error(rest_error, "Node", Some("3"));
    /// assert!(matches!(error, ResourceError::NotFound { resource: "Node", .. }));
    /// ```
    #[must_use]
    pub fn from_rest_error(error: RestError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            RestError::Http(HttpError::Response(response)) if response.code == 404 => {
                Self::NotFound {
                    resource,
                    id: id.unwrap_or("unknown").to_string(),
                }
            }
            RestError::Http(HttpError::Response(response)) if response.code == 422 => {
                Self::ValidationFailed {
                    errors: group_validation_errors(&response.details),
                }
            }
            other => Self::Rest(other),
        }
    }

    /// Returns the HTTP status code associated with this error.
    ///
    /// Errors raised without a panel response (unreachable host, path
    /// resolution, hydration) report `0`.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::ValidationFailed { .. } => 422,
            Self::PathResolutionFailed { .. } | Self::Hydration { .. } | Self::Serialization { .. } => 0,
            Self::Http(e) => e.status_code(),
            Self::Rest(e) => e.status_code(),
        }
    }
}

/// Groups the panel's validation entries by the field they refer to.
fn group_validation_errors(details: &[PanelErrorDetail]) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();

    for detail in details {
        let field = detail
            .meta
            .as_ref()
            .and_then(|meta| meta.source_field.clone())
            .unwrap_or_else(|| BASE_FIELD.to_string());
        result.entry(field).or_default().push(detail.detail.clone());
    }

    result
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
