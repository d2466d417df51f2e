//! REST client implementation.
//!
//! This module provides the [`RestClient`] type, a thin layer over
//! [`HttpClient`] with one method per HTTP verb and path normalization.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::rest::RestError;
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::PanelConfig;

/// Base path of every panel API route.
pub const API_BASE_PATH: &str = "/api";

/// REST API client for the panel.
///
/// Provides `get`, `post`, `patch` and `delete` methods. Paths are relative
/// to `/api`, e.g. `application/users` or `client/servers/1a7ce997`.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use pterodactyl_api::clients::RestClient;
///
/// let client = RestClient::new(&config);
/// let response = client.get("application/locations", None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the given configuration.
    #[must_use]
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            http_client: HttpClient::new(API_BASE_PATH, config),
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query, false)
            .await
    }

    /// Sends a POST request to the specified path.
    ///
    /// `body` may be `None` for actions; set `expect_no_body` for actions the
    /// panel answers with `204 No Content`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: Option<Value>,
        expect_no_body: bool,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, body, None, expect_no_body)
            .await
    }

    /// Sends a PATCH request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn patch(&self, path: &str, body: Value) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Patch, path, Some(body), None, false)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// The panel answers deletes with `204 No Content`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, None, true)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        query: Option<HashMap<String, String>>,
        expect_no_body: bool,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder =
            HttpRequest::builder(method, normalized_path).expect_no_body(expect_no_body);

        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Normalizes a REST API path.
///
/// Strips leading and trailing `/` characters and rejects empty paths.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let path = path.trim_matches('/');

    if path.is_empty() {
        return Err(RestError::InvalidPath {
            path: String::new(),
        });
    }

    Ok(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, PanelUrl};

    #[test]
    fn test_normalize_path_strips_slashes() {
        assert_eq!(normalize_path("/application/users").unwrap(), "application/users");
        assert_eq!(normalize_path("client/").unwrap(), "client");
        assert_eq!(normalize_path("//client//").unwrap(), "client");
    }

    #[test]
    fn test_normalize_path_keeps_nested_segments() {
        assert_eq!(
            normalize_path("application/nodes/3/allocations").unwrap(),
            "application/nodes/3/allocations"
        );
    }

    #[test]
    fn test_normalize_path_empty_path_returns_error() {
        assert!(matches!(
            normalize_path(""),
            Err(RestError::InvalidPath { path }) if path.is_empty()
        ));
        assert!(matches!(
            normalize_path("/"),
            Err(RestError::InvalidPath { path }) if path.is_empty()
        ));
    }

    #[test]
    fn test_rest_client_uses_api_base_path() {
        let config = PanelConfig::builder()
            .panel_url(PanelUrl::new("https://panel.example.com").unwrap())
            .api_key(ApiKey::new("ptla_test").unwrap())
            .build()
            .unwrap();

        let client = RestClient::new(&config);
        assert_eq!(client.http_client().base_path(), "/api");
        assert_eq!(client.http_client().base_uri(), "https://panel.example.com");
    }
}
