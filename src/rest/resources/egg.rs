//! Egg resource implementation.
//!
//! Eggs are server templates. They exist only inside a nest, so every path
//! carries the nest ID.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{
    PaginationCursor, PanelResource, ReadOnlyResource, ResourceError, ResourceOperation,
    ResourcePath, ResourceResponse,
};

/// A server template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Egg {
    pub id: u64,
    pub uuid: String,
    pub name: String,
    /// ID of the owning nest.
    pub nest: u64,
    pub author: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Default Docker image.
    pub docker_image: String,
    /// Selectable Docker images, keyed by display name.
    #[serde(default)]
    pub docker_images: HashMap<String, String>,
    /// Daemon configuration (files, startup detection, logs, stop command).
    #[serde(default)]
    pub config: Value,
    /// Default startup command.
    pub startup: String,
    /// Install script settings.
    #[serde(default)]
    pub script: Value,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub pagination: Option<PaginationCursor>,
}

impl Egg {
    /// Lists one page of the eggs of a nest.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the nest doesn't exist.
    pub async fn all_in_nest(
        client: &RestClient,
        nest_id: u64,
        page: Option<u32>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        Self::all_with_parent(client, "nest", nest_id, page).await
    }

    /// Finds one egg of a nest.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the nest or the egg doesn't
    /// exist.
    pub async fn find_in_nest(
        client: &RestClient,
        nest_id: u64,
        id: u64,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        Self::find_with_parent(client, "nest", nest_id, id).await
    }
}

impl PanelResource for Egg {
    type Id = u64;

    const NAME: &'static str = "Egg";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["nest", "id"],
            "application/nests/{nest}/eggs/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["nest"],
            "application/nests/{nest}/eggs",
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

    fn path_ids(&self) -> HashMap<&'static str, String> {
        HashMap::from([("id", self.id.to_string()), ("nest", self.nest.to_string())])
    }
}

impl ReadOnlyResource for Egg {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::test_support::offline_client;
    use serde_json::json;

    #[test]
    fn test_egg_hydration_keeps_raw_config() {
        let egg = Egg::hydrate(json!({
            "id": 5,
            "uuid": "fc1e8c5f-3f8b-4a4f-8d0b-8d0c6f5e6f1f",
            "name": "Vanilla Minecraft",
            "nest": 1,
            "author": "support@pterodactyl.io",
            "description": null,
            "docker_image": "quay.io/pterodactyl/core:java",
            "docker_images": {"Java 17": "ghcr.io/pterodactyl/yolks:java_17"},
            "config": {"stop": "stop", "startup": {"done": ")! For help, type "}},
            "startup": "java -Xms128M -Xmx{{SERVER_MEMORY}}M -jar {{SERVER_JARFILE}}",
            "script": {"privileged": true, "container": "alpine:3.4"}
        }))
        .unwrap();

        assert_eq!(egg.config["stop"], "stop");
        assert_eq!(egg.docker_images["Java 17"], "ghcr.io/pterodactyl/yolks:java_17");
        assert_eq!(egg.path_ids().get("nest"), Some(&"1".to_string()));
    }

    #[tokio::test]
    async fn test_egg_without_nest_cannot_be_listed() {
        let client = offline_client();

        let result = Egg::all(&client, None).await;

        assert!(matches!(
            result,
            Err(ResourceError::PathResolutionFailed { resource: "Egg", operation: "all" })
        ));
    }
}
