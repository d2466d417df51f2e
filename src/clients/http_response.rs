//! HTTP response types.
//!
//! The panel wraps every payload in an envelope:
//!
//! ```text
//! single: {"object": "user", "attributes": {...}}
//! list:   {"object": "list", "data": [{"object": "user", "attributes": {...}}, ...],
//!          "meta": {"pagination": {"total": 32, "count": 10, "per_page": 10,
//!                                  "current_page": 1, "total_pages": 4}}}
//! error:  {"errors": [{"code": "NotFoundHttpException", "status": "404", "detail": "..."}]}
//! ```
//!
//! [`HttpResponse::new`] strips the envelope into [`HttpResponse::data`] and
//! [`HttpResponse::pagination`] so that callers only ever see attribute bags.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw pagination block as returned under `meta.pagination`.
///
/// This is the transport-level shape; resources convert it into a
/// [`PaginationCursor`](crate::rest::PaginationCursor).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPagination {
    /// Total number of objects across all pages.
    #[serde(default)]
    pub total: u64,
    /// Number of objects on this page.
    #[serde(default)]
    pub count: u32,
    /// Page size requested from the panel.
    #[serde(default)]
    pub per_page: u32,
    /// One-indexed number of this page.
    #[serde(default)]
    pub current_page: u32,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
}

/// One entry of the panel's `errors` array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelErrorDetail {
    /// Exception name (e.g., `NotFoundHttpException`, `ValidationException`).
    #[serde(default)]
    pub code: String,
    /// HTTP status as a string, when supplied.
    #[serde(default)]
    pub status: Option<String>,
    /// Human readable description.
    #[serde(default)]
    pub detail: String,
    /// Validation metadata (only on 422 responses).
    #[serde(default)]
    pub meta: Option<PanelErrorMeta>,
}

/// Validation metadata attached to a [`PanelErrorDetail`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelErrorMeta {
    /// The request field that failed validation.
    #[serde(default)]
    pub source_field: Option<String>,
    /// The validation rule that failed.
    #[serde(default)]
    pub rule: Option<String>,
}

/// A response from the panel API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body, envelope included.
    pub body: Value,
    /// The unwrapped payload: an attribute bag, an array of attribute bags,
    /// or `Value::Null` when the response carried no body.
    pub data: Value,
    /// Pagination metadata for list responses.
    pub pagination: Option<RawPagination>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, unwrapping the panel envelope.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Value) -> Self {
        let data = unwrap_envelope(&body);
        let pagination = body
            .pointer("/meta/pagination")
            .and_then(|raw| serde_json::from_value(raw.clone()).ok());

        Self {
            code,
            headers,
            body,
            data,
            pagination,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Parses the panel's `errors` array.
    ///
    /// Returns an empty vector when the body has no recognizable errors.
    #[must_use]
    pub fn error_details(&self) -> Vec<PanelErrorDetail> {
        self.body
            .get("errors")
            .and_then(|errors| serde_json::from_value(errors.clone()).ok())
            .unwrap_or_default()
    }
}

fn unwrap_envelope(body: &Value) -> Value {
    if let Some(Value::Array(items)) = body.get("data") {
        return Value::Array(items.iter().map(attributes_of).collect());
    }
    attributes_of(body)
}

fn attributes_of(item: &Value) -> Value {
    item.get("attributes").cloned().unwrap_or_else(|| item.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), Value::Null);
            assert!(response.is_ok(), "Expected is_ok() to be true for {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 401, 403, 404, 422, 429, 500, 502] {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(!response.is_ok());
        }
    }

    #[test]
    fn test_single_object_envelope_is_unwrapped() {
        let body = json!({
            "object": "location",
            "attributes": {"id": 1, "short": "us.nyc", "long": "New York"}
        });

        let response = HttpResponse::new(200, HashMap::new(), body);

        assert_eq!(response.data["short"], "us.nyc");
        assert!(response.pagination.is_none());
    }

    #[test]
    fn test_list_envelope_is_unwrapped_in_order() {
        let body = json!({
            "object": "list",
            "data": [
                {"object": "location", "attributes": {"id": 3}},
                {"object": "location", "attributes": {"id": 1}},
                {"object": "location", "attributes": {"id": 2}}
            ],
            "meta": {"pagination": {
                "total": 3, "count": 3, "per_page": 50, "current_page": 1, "total_pages": 1
            }}
        });

        let response = HttpResponse::new(200, HashMap::new(), body);

        let ids: Vec<u64> = response
            .data
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);

        let pagination = response.pagination.unwrap();
        assert_eq!(pagination.total, 3);
        assert_eq!(pagination.per_page, 50);
        assert_eq!(pagination.total_pages, 1);
    }

    #[test]
    fn test_partial_pagination_block_uses_defaults() {
        let body = json!({
            "object": "list",
            "data": [],
            "meta": {"pagination": {"total": 0, "current_page": 1}}
        });

        let response = HttpResponse::new(200, HashMap::new(), body);
        let pagination = response.pagination.unwrap();
        assert_eq!(pagination.total_pages, 0);
        assert_eq!(pagination.count, 0);
    }

    #[test]
    fn test_bare_body_is_passed_through() {
        let body = json!({"debug": false, "uuid": "abc"});
        let response = HttpResponse::new(200, HashMap::new(), body.clone());
        assert_eq!(response.data, body);
    }

    #[test]
    fn test_error_details_are_parsed() {
        let body = json!({
            "errors": [{
                "code": "ValidationException",
                "status": "422",
                "detail": "The email has already been taken.",
                "meta": {"source_field": "email", "rule": "unique"}
            }]
        });

        let response = HttpResponse::new(422, HashMap::new(), body);
        let details = response.error_details();

        assert_eq!(details.len(), 1);
        assert_eq!(details[0].code, "ValidationException");
        assert_eq!(
            details[0].meta.as_ref().unwrap().source_field.as_deref(),
            Some("email")
        );
    }

    #[test]
    fn test_request_id_extraction() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-1".to_string()]);

        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(response.request_id(), Some("req-1"));
    }
}
