//! Location resource implementation.
//!
//! Locations group nodes, usually by data center or region.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{
    EntityChanges, PaginationCursor, PanelResource, PendingUpdate, ResourceError,
    ResourceOperation, ResourcePath,
};

/// A group of nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// The numeric ID of the location.
    pub id: u64,
    /// Short code (e.g., `us.nyc`).
    pub short: String,
    /// Free-form description.
    #[serde(default)]
    pub long: Option<String>,
    /// When the location was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the location was last updated.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Cursor of the list call this location came from.
    #[serde(skip)]
    pub pagination: Option<PaginationCursor>,
}

/// Options for creating a location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewLocation {
    /// Short code.
    pub short: String,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
}

/// Changes for a location update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocationChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
}

impl EntityChanges<Location> for LocationChanges {
    fn apply_to(&self, location: &mut Location) {
        if let Some(short) = &self.short {
            location.short.clone_from(short);
        }
        if let Some(long) = &self.long {
            location.long = Some(long.clone());
        }
    }
}

#[derive(Serialize)]
struct LocationUpdateBase<'a> {
    short: &'a str,
    long: Option<&'a str>,
}

impl Location {
    /// Prepares an update of both fields at once.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn update<'c>(
        &self,
        client: &'c RestClient,
        changes: LocationChanges,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        let base = LocationUpdateBase {
            short: &self.short,
            long: self.long.as_deref(),
        };
        self.prepare_update(client, &base, &changes)
    }

    /// Prepares a short-code change.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_short<'c>(
        &self,
        client: &'c RestClient,
        short: impl Into<String>,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            LocationChanges {
                short: Some(short.into()),
                ..Default::default()
            },
        )
    }

    /// Prepares a description change.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_long<'c>(
        &self,
        client: &'c RestClient,
        long: impl Into<String>,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            LocationChanges {
                long: Some(long.into()),
                ..Default::default()
            },
        )
    }
}

impl PanelResource for Location {
    type Id = u64;

    const NAME: &'static str = "Location";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "application/locations/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "application/locations"),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "application/locations",
        ),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "application/locations/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "application/locations/{id}",
        ),
    ];

    fn get_id(&self) -> Self::Id {
        self.id
    }

    fn pagination(&self) -> Option<&PaginationCursor> {
        self.pagination.as_ref()
    }

    fn attach_pagination(&mut self, cursor: Option<PaginationCursor>) {
        self.pagination = cursor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;
    use crate::rest::resources::test_support::offline_client;
    use serde_json::json;

    fn sample_location() -> Location {
        Location::hydrate(json!({
            "id": 1,
            "short": "us.nyc",
            "long": "New York",
            "updated_at": "2020-06-13T08:45:21+00:00",
            "created_at": "2020-06-12T21:01:07+00:00"
        }))
        .unwrap()
    }

    #[test]
    fn test_location_supports_every_crud_operation() {
        for operation in [ResourceOperation::Find, ResourceOperation::Update, ResourceOperation::Delete] {
            assert!(get_path(Location::PATHS, operation, &["id"]).is_some());
        }
        assert!(get_path(Location::PATHS, ResourceOperation::All, &[]).is_some());
        assert!(get_path(Location::PATHS, ResourceOperation::Create, &[]).is_some());
        assert!(get_path(Location::PATHS, ResourceOperation::FindByExternalId, &["external_id"]).is_none());
    }

    #[test]
    fn test_location_without_description() {
        let location = Location::hydrate(json!({"id": 4, "short": "eu.fra"})).unwrap();
        assert_eq!(location.long, None);
        assert_eq!(location.created_at, None);
    }

    #[test]
    fn test_set_short_sends_both_fields() {
        let client = offline_client();
        let pending = sample_location().set_short(&client, "us.bos").unwrap();

        assert_eq!(pending.body()["short"], "us.bos");
        assert_eq!(pending.body()["long"], "New York");
        assert_eq!(pending.optimistic().short, "us.bos");
    }
}
