//! Path building infrastructure for panel resources.
//!
//! This module provides the path resolution system that lets a resource
//! declare which operations it supports and under which URL each lives.
//!
//! # Path Resolution
//!
//! Resources can be nested under a parent. A `ServerDatabase`, for example,
//! is only reachable through its server:
//! - `application/servers/{server}/databases/{id}`
//!
//! The path resolution system selects the most specific path whose IDs are
//! all available. An operation with no matching path is unsupported by the
//! resource.
//!
//! # Example
//!
//! ```rust
//! use pterodactyl_api::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use pterodactyl_api::clients::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::Find,
//!         &["nest", "id"],
//!         "application/nests/{nest}/eggs/{id}",
//!     ),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["nest", "id"]);
//! assert!(path.is_some());
//!
//! let mut ids = HashMap::new();
//! ids.insert("nest", "1");
//! ids.insert("id", "5");
//! let url = build_path(path.unwrap().template, &ids);
//! assert_eq!(url, "application/nests/1/eggs/5");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations that can be performed on a panel resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Find a single resource by ID (GET `.../{id}`).
    Find,
    /// Find a single resource by its external ID (GET `.../external/{external_id}`).
    FindByExternalId,
    /// List one page of resources (GET `...?page=N`).
    All,
    /// Create a new resource (POST to the collection).
    Create,
    /// Partially update an existing resource (PATCH).
    Update,
    /// Delete a resource (DELETE `.../{id}`).
    Delete,
}

impl ResourceOperation {
    /// Returns the default HTTP method for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::Find | Self::FindByExternalId | Self::All => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Patch,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::FindByExternalId => "find_by_external_id",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// A path configuration for a resource operation.
///
/// Templates are relative to `/api` and use `{id_name}` placeholders:
/// - `application/users/{id}` - Single ID
/// - `application/nodes/{node}/allocations/{id}` - Parent and ID
///
/// # Example
///
/// ```rust
/// use pterodactyl_api::rest::{ResourcePath, ResourceOperation};
/// use pterodactyl_api::clients::HttpMethod;
///
/// const USER_FIND: ResourcePath = ResourcePath::new(
///     HttpMethod::Get,
///     ResourceOperation::Find,
///     &["id"],
///     "application/users/{id}",
/// );
/// assert_eq!(USER_FIND.id_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required ID parameters in order (e.g., `["server", "id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Filters paths by operation, keeps those whose required IDs are all
/// available, and picks the one with the most IDs (the most specific).
///
/// # Example
///
/// ```rust
/// use pterodactyl_api::rest::{ResourcePath, ResourceOperation, get_path};
/// use pterodactyl_api::clients::HttpMethod;
///
/// const PATHS: &[ResourcePath] = &[
///     ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "application/nests"),
///     ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "application/nests/{id}"),
/// ];
///
/// assert!(get_path(PATHS, ResourceOperation::Find, &["id"]).is_some());
/// assert!(get_path(PATHS, ResourceOperation::Create, &[]).is_none());
/// ```
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL from a template by interpolating IDs.
///
/// Values are percent-encoded, so an external ID containing `/` or spaces
/// stays a single path segment.
///
/// # Example
///
/// ```rust
/// use pterodactyl_api::rest::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("external_id", "billing 42/a");
///
/// let url = build_path("application/users/external/{external_id}", &ids);
/// assert_eq!(url, "application/users/external/billing%2042%2Fa");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        let encoded = urlencoding::encode(&value.to_string()).into_owned();
        result = result.replace(&placeholder, &encoded);
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALLOCATION_PATHS: &[ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["node"],
            "application/nodes/{node}/allocations",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["node"],
            "application/nodes/{node}/allocations",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["node", "id"],
            "application/nodes/{node}/allocations/{id}",
        ),
    ];

    #[test]
    fn test_operation_default_methods() {
        assert_eq!(ResourceOperation::Find.default_http_method(), HttpMethod::Get);
        assert_eq!(
            ResourceOperation::FindByExternalId.default_http_method(),
            HttpMethod::Get
        );
        assert_eq!(ResourceOperation::Create.default_http_method(), HttpMethod::Post);
        assert_eq!(ResourceOperation::Update.default_http_method(), HttpMethod::Patch);
        assert_eq!(ResourceOperation::Delete.default_http_method(), HttpMethod::Delete);
    }

    #[test]
    fn test_get_path_requires_parent_id() {
        assert!(get_path(ALLOCATION_PATHS, ResourceOperation::All, &[]).is_none());
        assert!(get_path(ALLOCATION_PATHS, ResourceOperation::All, &["node"]).is_some());
        assert!(get_path(ALLOCATION_PATHS, ResourceOperation::Delete, &["id"]).is_none());
    }

    #[test]
    fn test_get_path_ignores_extra_ids() {
        let path = get_path(ALLOCATION_PATHS, ResourceOperation::Create, &["node", "id"]);
        assert_eq!(
            path.map(|p| p.template),
            Some("application/nodes/{node}/allocations")
        );
    }

    #[test]
    fn test_get_path_unsupported_operation() {
        assert!(get_path(ALLOCATION_PATHS, ResourceOperation::Update, &["node", "id"]).is_none());
        assert!(get_path(ALLOCATION_PATHS, ResourceOperation::Find, &["node", "id"]).is_none());
    }

    #[test]
    fn test_get_path_prefers_most_specific() {
        const PATHS: &[ResourcePath] = &[
            ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "short/{id}"),
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::Find,
                &["parent", "id"],
                "long/{parent}/{id}",
            ),
        ];

        let path = get_path(PATHS, ResourceOperation::Find, &["id", "parent"]);
        assert_eq!(path.map(|p| p.template), Some("long/{parent}/{id}"));
    }

    #[test]
    fn test_build_path_interpolates_all_placeholders() {
        let mut ids = HashMap::new();
        ids.insert("node", 3_u64);
        ids.insert("id", 71_u64);

        assert_eq!(
            build_path("application/nodes/{node}/allocations/{id}", &ids),
            "application/nodes/3/allocations/71"
        );
    }

    #[test]
    fn test_build_path_leaves_unknown_placeholders() {
        let ids: HashMap<&str, u64> = HashMap::new();
        assert_eq!(build_path("application/users/{id}", &ids), "application/users/{id}");
    }
}
