//! Partial-update request bodies.
//!
//! Update endpoints of the panel expect a fixed set of fields even when only
//! one of them changes. A request body is therefore built from two parts:
//!
//! - a *base*: the entity's current values for the fields the endpoint needs
//! - the *changes*: only the fields the caller wants to modify
//!
//! [`build_request`] serializes both and overlays the changes onto the base.
//!
//! # Shallow Merge
//!
//! The overlay works on top-level keys only. A nested object in the changes
//! replaces the base's nested object as a whole:
//!
//! ```rust
//! use pterodactyl_api::rest::build_request;
//! use serde_json::json;
//!
//! let base = json!({"allocation": 1, "limits": {"memory": 512, "cpu": 100, "disk": 1024}});
//! let changes = json!({"limits": {"memory": 2048}});
//!
//! let body = build_request(&base, &changes).unwrap();
//! assert_eq!(body["limits"], json!({"memory": 2048}));
//! assert_eq!(body["allocation"], 1);
//! ```
//!
//! Sibling fields of a nested group are dropped from the body unless the
//! caller supplies them as well. This is a known defect kept as-is: the
//! panel may reject or reset the missing siblings. Callers that need the
//! siblings preserved must pass the complete nested group.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::rest::ResourceError;

/// A request body: remote field names mapped to values.
pub type RequestBody = Map<String, Value>;

/// Builds a partial-update request body.
///
/// Keys present in `changes` win over keys in `base`. Changes structs skip
/// their unset fields when serialized, so only what the caller set is
/// overlaid.
///
/// # Errors
///
/// Returns [`ResourceError::Serialization`] if either value fails to
/// serialize or does not serialize to a JSON object.
pub fn build_request<B, C>(base: &B, changes: &C) -> Result<RequestBody, ResourceError>
where
    B: Serialize + ?Sized,
    C: Serialize + ?Sized,
{
    let mut body = to_object(base)?;
    body.extend(to_object(changes)?);
    Ok(body)
}

/// Serializes a value that must produce a JSON object.
///
/// # Errors
///
/// Returns [`ResourceError::Serialization`] when serialization fails or the
/// result is not an object.
pub fn to_object<T: Serialize + ?Sized>(value: &T) -> Result<RequestBody, ResourceError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ResourceError::Serialization {
            message: format!("expected a JSON object, got {other}"),
        }),
        Err(e) => Err(ResourceError::Serialization {
            message: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize, Default)]
    struct LocationChanges {
        #[serde(skip_serializing_if = "Option::is_none")]
        short: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        long: Option<String>,
    }

    #[test]
    fn test_changes_win_on_collision() {
        let base = json!({"short": "us.nyc", "long": "New York"});
        let changes = LocationChanges {
            short: Some("us.bos".to_string()),
            ..Default::default()
        };

        let body = build_request(&base, &changes).unwrap();

        assert_eq!(body["short"], "us.bos");
        assert_eq!(body["long"], "New York");
        assert_eq!(body.len(), 2);
    }

    #[test]
    fn test_empty_changes_keep_base() {
        let base = json!({"short": "us.nyc", "long": null});
        let body = build_request(&base, &LocationChanges::default()).unwrap();

        assert_eq!(Value::Object(body), base);
    }

    #[test]
    fn test_changes_may_add_fields_outside_base() {
        let base = json!({"username": "admin"});
        let changes = json!({"password": "hunter22"});

        let body = build_request(&base, &changes).unwrap();
        assert_eq!(body["password"], "hunter22");
        assert_eq!(body["username"], "admin");
    }

    #[test]
    fn test_nested_changes_replace_whole_group() {
        let base = json!({
            "allocation": 4,
            "limits": {"memory": 512, "cpu": 100, "disk": 1024},
            "feature_limits": {"databases": 2}
        });
        let changes = json!({"limits": {"memory": 1024}});

        let body = build_request(&base, &changes).unwrap();

        // Siblings of `memory` are not carried over
        assert_eq!(body["limits"], json!({"memory": 1024}));
        assert_eq!(body["feature_limits"], json!({"databases": 2}));
    }

    #[test]
    fn test_non_object_values_are_rejected() {
        let result = build_request(&json!([1, 2]), &json!({}));
        assert!(matches!(result, Err(ResourceError::Serialization { .. })));

        let result = build_request(&json!({}), &"name");
        assert!(matches!(result, Err(ResourceError::Serialization { .. })));
    }
}
