//! HTTP client for panel API communication.
//!
//! This module provides the [`HttpClient`] type, the transport every other
//! layer of the crate goes through. It performs exactly one HTTP call per
//! request: there is no retry, backoff or rate limiting.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::{HttpResponse, PanelErrorDetail};
use crate::config::PanelConfig;

/// Client version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Media type the panel expects in the `Accept` header.
pub const PANEL_ACCEPT: &str = "Application/vnd.pterodactyl.v1+json";

/// HTTP client for making requests to the panel API.
///
/// The client handles:
/// - Base URI construction from the configured panel URL
/// - Default headers (User-Agent, Accept, bearer token)
/// - Envelope unwrapping and error body parsing
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use pterodactyl_api::clients::{HttpClient, HttpMethod};
///
/// let client = HttpClient::new("/api", &config);
/// let response = client.call("application/nodes/1", HttpMethod::Get, None, false).await?;
/// println!("Node: {}", response.data["name"]);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://panel.example.com`).
    base_uri: String,
    /// Base path (e.g., "/api").
    base_path: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(base_path: impl Into<String>, config: &PanelConfig) -> Self {
        let base_path = base_path.into();
        let base_uri = config.panel_url().as_ref().to_string();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Pterodactyl API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), PANEL_ACCEPT.to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.api_key().as_ref()),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            base_path,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Issues a single call to the panel.
    ///
    /// This is the transport contract the resource layer is built on:
    /// `path` is relative to the API base path, `body` is sent as JSON and
    /// `expect_no_body` skips parsing of successful responses (actions that
    /// answer `204 No Content`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] for any non-2xx status and
    /// [`HttpError::Network`] if the panel could not be reached.
    pub async fn call(
        &self,
        path: &str,
        method: HttpMethod,
        body: Option<Value>,
        expect_no_body: bool,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(method, path).expect_no_body(expect_no_body);
        if let Some(body) = body {
            builder = builder.body(body).body_type(DataType::Json);
        }
        self.request(builder.build()?).await
    }

    /// Sends an HTTP request to the panel.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, path = %request.path, "Sending panel request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let is_success = res.status().is_success();

        let body = if is_success && request.expect_no_body {
            Value::Null
        } else {
            let body_text = res.text().await.unwrap_or_default();
            if body_text.is_empty() {
                Value::Null
            } else {
                serde_json::from_str(&body_text)
                    .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
            }
        };

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        let details = response.error_details();
        let message = Self::serialize_error(&response, &details);
        tracing::debug!(code, path = %request.path, %message, "Panel request failed");

        Err(HttpError::Response(HttpResponseError {
            code,
            message,
            details,
        }))
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Builds a readable message from the panel's error entries.
    fn serialize_error(response: &HttpResponse, details: &[PanelErrorDetail]) -> String {
        if !details.is_empty() {
            return details
                .iter()
                .map(|d| format!("{}: {}", d.code, d.detail))
                .collect::<Vec<_>>()
                .join("; ");
        }

        match &response.body {
            Value::Null => format!("HTTP {}", response.code),
            Value::Object(map) => map
                .get("raw_body")
                .and_then(Value::as_str)
                .map_or_else(|| response.body.to_string(), ToString::to_string),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, PanelUrl};
    use serde_json::json;

    fn create_test_config() -> PanelConfig {
        PanelConfig::builder()
            .panel_url(PanelUrl::new("https://panel.example.com/").unwrap())
            .api_key(ApiKey::new("ptla_test").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_with_config() {
        let client = HttpClient::new("/api", &create_test_config());

        assert_eq!(client.base_uri(), "https://panel.example.com");
        assert_eq!(client.base_path(), "/api");
    }

    #[test]
    fn test_bearer_token_header_injection() {
        let client = HttpClient::new("/api", &create_test_config());

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer ptla_test".to_string())
        );
    }

    #[test]
    fn test_accept_header_uses_panel_media_type() {
        let client = HttpClient::new("/api", &create_test_config());

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&PANEL_ACCEPT.to_string())
        );
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = PanelConfig::builder()
            .panel_url(PanelUrl::new("https://panel.example.com").unwrap())
            .api_key(ApiKey::new("ptla_test").unwrap())
            .user_agent_prefix("MyBot/1.0")
            .build()
            .unwrap();

        let client = HttpClient::new("/api", &config);
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyBot/1.0 | "));
        assert!(user_agent.contains("Pterodactyl API Library"));
    }

    #[test]
    fn test_serialize_error_joins_details() {
        let response = HttpResponse::new(
            422,
            HashMap::new(),
            json!({"errors": [
                {"code": "ValidationException", "detail": "The name field is required."},
                {"code": "ValidationException", "detail": "The fqdn field is required."}
            ]}),
        );
        let details = response.error_details();

        assert_eq!(
            HttpClient::serialize_error(&response, &details),
            "ValidationException: The name field is required.; ValidationException: The fqdn field is required."
        );
    }

    #[test]
    fn test_serialize_error_without_body() {
        let response = HttpResponse::new(502, HashMap::new(), Value::Null);
        assert_eq!(HttpClient::serialize_error(&response, &[]), "HTTP 502");
    }

    #[test]
    fn test_serialize_error_uses_raw_body() {
        let response = HttpResponse::new(500, HashMap::new(), json!({"raw_body": "Bad Gateway"}));
        assert_eq!(HttpClient::serialize_error(&response, &[]), "Bad Gateway");
    }
}
